use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("target is not a directory: {}", path.display())]
    InvalidTarget { path: PathBuf },

    #[error("{0}")]
    Library(chartcrop::Error),
}

impl From<chartcrop::Error> for AppError {
    fn from(e: chartcrop::Error) -> Self {
        match e {
            chartcrop::Error::InvalidTarget { path } => AppError::InvalidTarget { path },
            other => AppError::Library(other),
        }
    }
}

