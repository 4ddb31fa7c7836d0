//! Error types for the chromakey facade

use chromakey_color::ColorError;
use chromakey_io::IoError;
use chromakey_transform::TransformError;
use thiserror::Error;

/// Errors from sheet slicing and file-level operations
#[derive(Debug, Error)]
pub enum Error {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromakey_core::Error),

    /// Image read or write failure, including a missing input
    #[error(transparent)]
    Io(#[from] IoError),

    /// Invalid matte or recolor configuration
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Resize failure
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Grid with zero rows or columns
    #[error("invalid grid: {rows}x{cols}")]
    InvalidGrid { rows: u32, cols: u32 },

    /// Output numbering would run past `u32::MAX`
    #[error("start index {start} leaves no room for {count} outputs")]
    InvalidStartIndex { start: u32, count: u32 },

    /// The sheet is smaller than one pixel per cell
    #[error("sheet {width}x{height} is too small for a {rows}x{cols} grid")]
    SheetTooSmall {
        width: u32,
        height: u32,
        rows: u32,
        cols: u32,
    },

    /// Output directory could not be created
    #[error("cannot create directory: {0}")]
    CreateDir(#[source] std::io::Error),
}

/// Result type for facade operations
pub type Result<T> = std::result::Result<T, Error>;
