//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and image codec errors, and provides semantic variants
//! for target validation and crop geometry failures.
use std::path::PathBuf;

use thiserror::Error;

use crate::types::{CropMargins, ImageSize};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Image(#[from] image::ImageError),

    #[error("target is not a directory: {}", path.display())]
    InvalidTarget { path: PathBuf },

    #[error("crop margins {margins} leave no pixels in a {size} image")]
    DegenerateCrop { size: ImageSize, margins: CropMargins },

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
