//! Per-cell matte pipeline
//!
//! estimate background -> soft matte -> edge cleanup -> outline

use crate::Result;
use chromakey_color::{
    EDGE_CLEANUP_THRESHOLD, ToleranceConfig, clean_edges, estimate_background, soft_matte,
};
use chromakey_core::{Pix, Rgb, Rgba};
use chromakey_morph::{DEFAULT_OUTLINE_THICKNESS, stroke_outline};

/// Options for [`process_cell`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatteOptions {
    /// Expected chroma key; reconciled with the border sample
    pub background_hint: Rgb,
    /// Transparent / fade thresholds
    pub tolerance: ToleranceConfig,
    /// Distance bound for the edge cleanup pass
    pub edge_cleanup_threshold: u8,
    /// Outline width in pixels (0 disables the outline)
    pub outline_thickness: u32,
    /// Outline color, always drawn opaque
    pub outline_color: Rgba,
}

impl Default for MatteOptions {
    fn default() -> Self {
        Self {
            background_hint: Rgb::CHROMA_GREEN,
            tolerance: ToleranceConfig::default(),
            edge_cleanup_threshold: EDGE_CLEANUP_THRESHOLD,
            outline_thickness: DEFAULT_OUTLINE_THICKNESS,
            outline_color: Rgba::WHITE,
        }
    }
}

impl MatteOptions {
    /// Set the expected chroma key
    pub fn with_background_hint(mut self, hint: Rgb) -> Self {
        self.background_hint = hint;
        self
    }

    /// Set the matte thresholds
    pub fn with_tolerance(mut self, tolerance: ToleranceConfig) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the edge cleanup distance
    pub fn with_edge_cleanup_threshold(mut self, threshold: u8) -> Self {
        self.edge_cleanup_threshold = threshold;
        self
    }

    /// Set the outline width
    pub fn with_outline_thickness(mut self, thickness: u32) -> Self {
        self.outline_thickness = thickness;
        self
    }

    /// Set the outline color
    pub fn with_outline_color(mut self, color: Rgba) -> Self {
        self.outline_color = color;
        self
    }

    /// Check the configuration before any pixel is processed
    pub fn validate(&self) -> Result<()> {
        self.tolerance.validate()?;
        Ok(())
    }
}

/// Turn one cell into a transparent sticker
///
/// The background is estimated from the cell border, matted out, its rim
/// cleaned with the same background color, and an outline is stroked
/// around what remains.
pub fn process_cell(cell: &Pix, options: &MatteOptions) -> Result<Pix> {
    let base = estimate_background(cell, options.background_hint);
    let matted = soft_matte(cell, base, &options.tolerance)?;
    let cleaned = clean_edges(&matted, base, options.edge_cleanup_threshold);
    Ok(stroke_outline(
        &cleaned,
        options.outline_thickness,
        options.outline_color,
    ))
}
