//! Outline stroking
//!
//! The stroke grows outward from every visible pixel (alpha > 0). One
//! iteration looks at a frozen copy of the previous state, so a ring only
//! ever extends one pixel past the previous ring regardless of scan order.

use chromakey_core::{Pix, PixMut, Rgba, color};

/// Default stroke width in pixels
pub const DEFAULT_OUTLINE_THICKNESS: u32 = 2;

/// True if any in-bounds 8-neighbor of `(x, y)` in `src` is visible
fn has_visible_neighbor(src: &Pix, x: u32, y: u32) -> bool {
    let (w, h) = src.dimensions();
    let x0 = x.saturating_sub(1);
    let y0 = y.saturating_sub(1);
    let x1 = (x + 1).min(w - 1);
    let y1 = (y + 1).min(h - 1);
    for ny in y0..=y1 {
        for nx in x0..=x1 {
            if (nx, ny) != (x, y) && color::alpha(src.get_pixel_unchecked(nx, ny)) > 0 {
                return true;
            }
        }
    }
    false
}

/// Grow the visible region of `src` by one ring
///
/// Every transparent pixel of `dst` with a visible neighbor in `src` is set
/// to `stroke`. Returns the number of pixels painted.
pub fn dilate_ring(src: &Pix, dst: &mut PixMut, stroke: u32) -> usize {
    let (w, h) = src.dimensions();
    let mut painted = 0;
    for y in 0..h {
        for x in 0..w {
            if color::alpha(dst.get_pixel_unchecked(x, y)) != 0 {
                continue;
            }
            if has_visible_neighbor(src, x, y) {
                dst.set_pixel_unchecked(x, y, stroke);
                painted += 1;
            }
        }
    }
    painted
}

/// Stroke an outline of `thickness` pixels around the visible region
///
/// The stroke is always fully opaque, whatever the alpha of `stroke`.
/// A thickness of 0 returns an unchanged copy.
///
/// # Example
///
/// ```
/// use chromakey_core::{Pix, Rgba};
/// use chromakey_morph::stroke_outline;
///
/// let mut pm = Pix::new(5, 5).unwrap().into_mut();
/// pm.set_rgba(2, 2, Rgba::new(255, 0, 0, 255)).unwrap();
/// let out = stroke_outline(&pm.into(), 1, Rgba::WHITE);
/// assert_eq!(out.get_rgba(1, 1), Some(Rgba::WHITE));
/// assert_eq!(out.get_rgba(0, 0), Some(Rgba::TRANSPARENT));
/// ```
pub fn stroke_outline(pix: &Pix, thickness: u32, stroke: Rgba) -> Pix {
    let stroke = Rgba { a: 255, ..stroke }.to_pixel();
    let mut current = pix.clone();

    for ring in 0..thickness {
        let mut next = current.to_mut();
        let painted = dilate_ring(&current, &mut next, stroke);
        current = next.into();
        log::debug!("outline ring {} painted {} pixels", ring + 1, painted);
        if painted == 0 {
            break;
        }
    }

    current
}
