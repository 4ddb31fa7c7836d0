//! Error types for chromakey-color

use thiserror::Error;

/// Errors that can occur during background isolation
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromakey_core::Error),

    /// The fade band is empty
    #[error("invalid tolerance: fade tolerance {fade} must exceed color tolerance {color}")]
    InvalidTolerance { color: u8, fade: u8 },
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
