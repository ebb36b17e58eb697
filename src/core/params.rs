use serde::{Deserialize, Serialize};

use crate::types::{CropMargins, ImageSize};

/// Margins tuned for TradingView charts captured at 1920x1080: the left toolbar,
/// the header rows, the right-hand panels and the bottom time axis.
pub const CHART_MARGINS: CropMargins = CropMargins::new(40, 130, 440, 100);

/// Capture resolution the margins above were measured against.
pub const EXPECTED_SIZE: ImageSize = ImageSize::new(1920, 1080);

/// Crop parameters suitable for config files and embedding applications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropParams {
    pub margins: CropMargins,
    /// Advisory only; a differing size produces a warning, never a failure
    pub expected_size: ImageSize,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            margins: CHART_MARGINS,
            expected_size: EXPECTED_SIZE,
        }
    }
}
