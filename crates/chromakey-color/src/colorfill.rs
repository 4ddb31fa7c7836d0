//! Border-connected background recoloring
//!
//! A flood fill seeded from every border pixel grows through 4-connected
//! pixels whose color lies inside a per-channel tolerance box around the
//! background color. Only the reached pixels are recolored, so a shape in
//! the interior that happens to share the background color is preserved.
//!
//! The fill uses an explicit stack and a visited mask scoped to one call,
//! so its depth does not depend on the image size.

use crate::metrics::within_box;
use chromakey_core::{Pix, Rgb, color};

/// Options for [`recolor_connected_background`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecolorOptions {
    /// Background color to replace
    pub from: Rgb,
    /// Replacement color
    pub to: Rgb,
    /// Per-channel tolerance around `from`
    pub tolerance: u8,
}

impl Default for RecolorOptions {
    fn default() -> Self {
        Self {
            from: Rgb::WHITE,
            to: Rgb::CHROMA_GREEN,
            tolerance: 20,
        }
    }
}

impl RecolorOptions {
    /// Set the background color to replace
    pub fn with_from(mut self, from: Rgb) -> Self {
        self.from = from;
        self
    }

    /// Set the replacement color
    pub fn with_to(mut self, to: Rgb) -> Self {
        self.to = to;
        self
    }

    /// Set the per-channel tolerance
    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Pixels reached by a border-seeded flood fill
#[derive(Debug, Clone)]
pub struct VisitedMask {
    width: u32,
    height: u32,
    visited: Vec<bool>,
    count: usize,
}

impl VisitedMask {
    /// Whether `(x, y)` was reached. Out-of-bounds coordinates are not.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.visited[(y * self.width + x) as usize]
    }

    /// Number of reached pixels
    pub fn count(&self) -> usize {
        self.count
    }

    /// Mask dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Find the background region connected to the image border
///
/// A pixel matches when each of its RGB channels is within `tolerance` of
/// `from`; alpha is ignored. Every border pixel seeds the fill and
/// neighbors are followed in the four axis directions only.
pub fn find_connected_background(pix: &Pix, from: Rgb, tolerance: u8) -> VisitedMask {
    let (w, h) = pix.dimensions();
    let mut visited = vec![false; (w as usize) * (h as usize)];
    let mut count = 0usize;

    let mut stack: Vec<(u32, u32)> = Vec::with_capacity(2 * (w as usize + h as usize));
    for x in 0..w {
        stack.push((x, 0));
        stack.push((x, h - 1));
    }
    for y in 0..h {
        stack.push((0, y));
        stack.push((w - 1, y));
    }

    while let Some((x, y)) = stack.pop() {
        let idx = (y * w + x) as usize;
        if visited[idx] {
            continue;
        }
        // Non-matching pixels are not marked, they are simply never expanded
        if !within_box(Rgb::from_pixel(pix.get_pixel_unchecked(x, y)), from, tolerance) {
            continue;
        }
        visited[idx] = true;
        count += 1;

        if x + 1 < w {
            stack.push((x + 1, y));
        }
        if x > 0 {
            stack.push((x - 1, y));
        }
        if y + 1 < h {
            stack.push((x, y + 1));
        }
        if y > 0 {
            stack.push((x, y - 1));
        }
    }

    VisitedMask {
        width: w,
        height: h,
        visited,
        count,
    }
}

/// Recolor the background region connected to the image border
///
/// Every pixel in the region found by [`find_connected_background`] gets
/// the RGB of `options.to`; its alpha is kept exactly.
pub fn recolor_connected_background(pix: &Pix, options: &RecolorOptions) -> Pix {
    let mask = find_connected_background(pix, options.from, options.tolerance);
    log::debug!(
        "recoloring {} border-connected pixels {} -> {}",
        mask.count(),
        options.from,
        options.to
    );

    let mut out = pix.to_mut();
    let to = options.to;
    for (pixel, _) in out
        .data_mut()
        .iter_mut()
        .zip(&mask.visited)
        .filter(|(_, hit)| **hit)
    {
        *pixel = color::compose_rgba(to.r, to.g, to.b, color::alpha(*pixel));
    }
    out.into()
}
