//! Shared types used across chartcrop.
//! Includes `ImageSize`, the fixed edge margins (`CropMargins`), the retained
//! rectangle they produce (`CropRegion`), and the `SizeMismatch` warning payload.
use serde::{Deserialize, Serialize};

/// Pixel dimensions of an image. Displays as `(width, height)`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

/// Absolute pixel margins removed from each edge of a source image.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CropMargins {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropMargins {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn horizontal(&self) -> u64 {
        u64::from(self.left) + u64::from(self.right)
    }

    pub fn vertical(&self) -> u64 {
        u64::from(self.top) + u64::from(self.bottom)
    }
}

impl std::fmt::Display for CropMargins {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(left={}, top={}, right={}, bottom={})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Rectangle kept from the source image, origin at the top-left corner.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }
}

/// Decoded size differs from the capture resolution the margins were tuned for.
/// Advisory only; the crop is still attempted.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SizeMismatch {
    pub expected: ImageSize,
    pub actual: ImageSize,
}

impl std::fmt::Display for SizeMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "expected {}, got {}", self.expected, self.actual)
    }
}
