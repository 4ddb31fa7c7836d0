//! Matte edge cleanup
//!
//! After the soft matte, a one-pixel rim of near-background color often
//! survives along the boundary. This pass clears any visible pixel that
//! touches a transparent pixel (8-neighborhood) and is still within a
//! looser distance of the background color.
//!
//! Neighbor alpha is always read from the input image, never from pixels
//! already cleared in the same pass, so the result does not depend on
//! visitation order.

use crate::metrics::pixel_distance;
use chromakey_core::{Pix, Rgb, color};

/// Default distance threshold for [`clean_edges`]
pub const EDGE_CLEANUP_THRESHOLD: u8 = 90;

/// True if any in-bounds 8-neighbor of `(x, y)` is fully transparent
///
/// Coordinates outside the image have no neighbors to inspect.
pub fn has_transparent_neighbor(pix: &Pix, x: u32, y: u32) -> bool {
    let (w, h) = pix.dimensions();
    if x >= w || y >= h {
        return false;
    }
    let x0 = x.saturating_sub(1);
    let y0 = y.saturating_sub(1);
    let x1 = x.saturating_add(1).min(w - 1);
    let y1 = y.saturating_add(1).min(h - 1);
    for ny in y0..=y1 {
        for nx in x0..=x1 {
            if (nx, ny) != (x, y) && color::alpha(pix.get_pixel_unchecked(nx, ny)) == 0 {
                return true;
            }
        }
    }
    false
}

/// Clear the near-background rim next to transparent pixels
///
/// # Arguments
///
/// * `pix` - Image whose alpha channel has already been matted
/// * `base` - Background color
/// * `threshold` - Maximum Chebyshev distance to `base` for a rim pixel
pub fn clean_edges(pix: &Pix, base: Rgb, threshold: u8) -> Pix {
    let (w, h) = pix.dimensions();
    let mut out = pix.to_mut();
    let mut cleared = 0usize;

    for y in 0..h {
        for x in 0..w {
            let pixel = pix.get_pixel_unchecked(x, y);
            if color::alpha(pixel) == 0 {
                continue;
            }
            if pixel_distance(pixel, base) <= threshold && has_transparent_neighbor(pix, x, y) {
                out.set_pixel_unchecked(x, y, color::with_alpha(pixel, 0));
                cleared += 1;
            }
        }
    }

    log::debug!("edge cleanup cleared {} pixels", cleared);
    out.into()
}
