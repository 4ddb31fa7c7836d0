//! chromakey-morph - Morphological operations on the alpha mask
//!
//! This crate provides the outline stroke drawn around matted stickers:
//! each iteration dilates the visible region by one ring of the
//! 8-neighborhood and paints the new ring in an opaque stroke color.

pub mod outline;

pub use outline::{DEFAULT_OUTLINE_THICKNESS, dilate_ring, stroke_outline};
