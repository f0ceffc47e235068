//! Error types for WheelForge

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum WheelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias
pub type WheelResult<T> = Result<T, WheelError>;
