//! I/O error types
//!
//! Provides a unified error type for all image I/O operations.
//! The PNG codec maps its underlying library errors into `IoError`
//! variants so that callers only need to handle one error type.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// The source path does not resolve to a file
    #[error("input not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Standard I/O error (permission denied, disk full, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a PNG image
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The PNG decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The PNG encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. invalid dimensions)
    #[error("core error: {0}")]
    Core(#[from] chromakey_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
