//! Error types for chromakey-transform

use thiserror::Error;

/// Errors that can occur during geometric transforms
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromakey_core::Error),

    /// Canvas with a zero dimension
    #[error("invalid canvas size: {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    /// Pixel data could not be handed to the resampler
    #[error("resample buffer error: {0}")]
    Buffer(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
