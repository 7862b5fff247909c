//! Error types for splinecloud

use thiserror::Error;

/// Main error type for splinecloud operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid color {0:?}: expected #rrggbb")]
    InvalidColor(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Visualization error: {0}")]
    Visualization(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for splinecloud operations
pub type Result<T> = std::result::Result<T, Error>;
