//! Error types for chromakey-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Chromakey core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Raw buffer does not match the declared dimensions
    #[error("buffer length mismatch for {width}x{height}: expected {expected} bytes, got {actual}")]
    BufferLength {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed color code
    #[error("invalid color {code:?}: {reason}")]
    InvalidColor { code: String, reason: &'static str },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
