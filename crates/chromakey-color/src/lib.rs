//! chromakey-color - Background isolation for chroma-key artwork
//!
//! This crate decides, per pixel, whether a pixel belongs to the background:
//!
//! - **Metrics** ([`metrics`]): Chebyshev distance, tolerance boxes, gray and
//!   green-fringe predicates
//! - **Estimation** ([`estimate`]): infer the background color from the border
//! - **Soft matte** ([`matte`]): global distance-based alpha with a fade band
//! - **Edge cleanup** ([`edge`]): remove the near-background rim left by the matte
//! - **Connected recolor** ([`colorfill`]): replace only the background reachable
//!   from the border

pub mod colorfill;
pub mod edge;
pub mod error;
pub mod estimate;
pub mod matte;
pub mod metrics;

// Re-export core types
pub use chromakey_core;

pub use error::{ColorError, ColorResult};

pub use colorfill::{
    RecolorOptions, VisitedMask, find_connected_background, recolor_connected_background,
};
pub use edge::{EDGE_CLEANUP_THRESHOLD, clean_edges, has_transparent_neighbor};
pub use estimate::{ESTIMATE_AGREEMENT, estimate_background};
pub use matte::{ToleranceConfig, matte_pixel, soft_matte};
pub use metrics::{
    GRAYISH_MAX_DIFF, chebyshev_distance, is_grayish, is_green_fringe, pixel_distance, within_box,
};
