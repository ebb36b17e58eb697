use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{CropMargins, CropRegion, ImageSize, SizeMismatch};

/// Rectangle left after removing `margins` from every edge of an image of `size`.
///
/// Margins are absolute pixels, so images narrower than `left + right` or
/// shorter than `top + bottom` have nothing left to keep and fail with
/// [`Error::DegenerateCrop`] instead of being clamped.
pub fn retained_region(size: ImageSize, margins: CropMargins) -> Result<CropRegion> {
    let width = u64::from(size.width).checked_sub(margins.horizontal());
    let height = u64::from(size.height).checked_sub(margins.vertical());

    match (width, height) {
        (Some(width), Some(height)) if width > 0 && height > 0 => {
            let region = CropRegion {
                x: margins.left,
                y: margins.top,
                // Bounded above by the source dimensions, which are u32
                width: width as u32,
                height: height as u32,
            };
            debug!(
                "retained region for {}: x={}, y={}, {}x{}",
                size, region.x, region.y, region.width, region.height
            );
            Ok(region)
        }
        _ => Err(Error::DegenerateCrop { size, margins }),
    }
}

/// Compare a decoded size against the capture resolution.
pub fn check_expected_size(actual: ImageSize, expected: ImageSize) -> Option<SizeMismatch> {
    (actual != expected).then_some(SizeMismatch { expected, actual })
}
