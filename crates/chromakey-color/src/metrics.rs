//! Color distance and classification predicates
//!
//! Every function here is pure and works on 8-bit RGB triples; alpha is
//! never part of a distance.

use chromakey_core::{Rgb, color};

/// Default bound for [`is_grayish`]
pub const GRAYISH_MAX_DIFF: u8 = 15;

/// Green must exceed this value for a pixel to count as fringe
pub const FRINGE_MIN_GREEN: u8 = 80;

/// Green must exceed both red and blue by more than this for fringe
pub const FRINGE_MIN_EXCESS: u8 = 25;

/// Chebyshev distance: the largest per-channel absolute difference.
#[inline]
pub fn chebyshev_distance(a: Rgb, b: Rgb) -> u8 {
    a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
}

/// Chebyshev distance from the RGB part of a packed pixel to `base`.
#[inline]
pub fn pixel_distance(pixel: u32, base: Rgb) -> u8 {
    chebyshev_distance(Rgb::from_pixel(pixel), base)
}

/// True when every channel of `a` is within `tolerance` of `b`.
///
/// This is an axis-aligned box around `b`, equivalent to
/// `chebyshev_distance(a, b) <= tolerance`.
#[inline]
pub fn within_box(a: Rgb, b: Rgb, tolerance: u8) -> bool {
    a.r.abs_diff(b.r) <= tolerance && a.g.abs_diff(b.g) <= tolerance && a.b.abs_diff(b.b) <= tolerance
}

/// True when all pairwise channel differences are at most `max_diff`.
pub fn is_grayish(rgb: Rgb, max_diff: u8) -> bool {
    rgb.r.abs_diff(rgb.g) <= max_diff
        && rgb.g.abs_diff(rgb.b) <= max_diff
        && rgb.r.abs_diff(rgb.b) <= max_diff
}

/// Detect an anti-aliased halo that drifted toward green.
///
/// `G > 80 && G - max(R, B) > 25`
#[inline]
pub fn is_green_fringe(rgb: Rgb) -> bool {
    rgb.g > FRINGE_MIN_GREEN && rgb.g.saturating_sub(rgb.r.max(rgb.b)) > FRINGE_MIN_EXCESS
}

/// [`is_green_fringe`] on a packed pixel.
#[inline]
pub fn pixel_is_green_fringe(pixel: u32) -> bool {
    let (r, g, b, _) = color::extract_rgba(pixel);
    is_green_fringe(Rgb::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chebyshev_distance() {
        let a = Rgb::new(10, 200, 40);
        assert_eq!(chebyshev_distance(a, a), 0);
        assert_eq!(chebyshev_distance(a, Rgb::new(20, 190, 45)), 10);
        assert_eq!(chebyshev_distance(Rgb::BLACK, Rgb::WHITE), 255);
        assert_eq!(
            chebyshev_distance(Rgb::new(0, 0, 0), Rgb::new(3, 7, 1)),
            chebyshev_distance(Rgb::new(3, 7, 1), Rgb::new(0, 0, 0))
        );
    }

    #[test]
    fn test_within_box_is_per_channel() {
        let white = Rgb::WHITE;
        assert!(within_box(Rgb::new(235, 235, 235), white, 20));
        assert!(!within_box(Rgb::new(234, 255, 255), white, 20));
        assert!(within_box(white, white, 0));
    }

    #[test]
    fn test_is_grayish() {
        assert!(is_grayish(Rgb::new(120, 128, 130), GRAYISH_MAX_DIFF));
        assert!(!is_grayish(Rgb::new(100, 120, 100), GRAYISH_MAX_DIFF));
        assert!(is_grayish(Rgb::WHITE, 0));
    }

    #[test]
    fn test_is_green_fringe() {
        assert!(is_green_fringe(Rgb::CHROMA_GREEN));
        assert!(is_green_fringe(Rgb::new(100, 140, 90)));
        // Excess of exactly 25 is not fringe
        assert!(!is_green_fringe(Rgb::new(100, 125, 90)));
        // Green at 80 is too dark
        assert!(!is_green_fringe(Rgb::new(0, 80, 0)));
        assert!(!is_green_fringe(Rgb::WHITE));
        assert!(pixel_is_green_fringe(color::compose_rgba(0, 81, 0, 0)));
    }
}
