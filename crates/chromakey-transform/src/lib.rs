//! chromakey-transform - Geometric transforms for sticker images
//!
//! Provides the aspect-preserving fit of an image into a fixed-size
//! canvas used for store listing images (main and tab icons).

pub mod canvas;
mod error;

pub use canvas::{CanvasOptions, blend_over, fit_into_canvas, fit_size};
pub use error::{TransformError, TransformResult};
