//! Background color estimation
//!
//! Samples the border of an image to find the dominant background color,
//! then reconciles the sample with the chroma key the caller expects.

use crate::metrics::chebyshev_distance;
use chromakey_core::{Pix, Rgb, color};

/// Maximum distance at which the border sample is considered to agree
/// with the hint
pub const ESTIMATE_AGREEMENT: u8 = 25;

/// Estimate the background color of `pix`
///
/// Every pixel of the top and bottom rows and of the left and right
/// columns is sampled (corners are sampled more than once). Fully
/// transparent samples are ignored and the rest are averaged per channel
/// with floor division.
///
/// Returns `hint` when no opaque border pixel exists or when the mean is
/// within [`ESTIMATE_AGREEMENT`] of it; otherwise returns the mean.
pub fn estimate_background(pix: &Pix, hint: Rgb) -> Rgb {
    let (w, h) = pix.dimensions();
    let mut sum = [0u64; 3];
    let mut count = 0u64;

    let mut sample = |pixel: u32| {
        if color::alpha(pixel) > 0 {
            sum[0] += color::red(pixel) as u64;
            sum[1] += color::green(pixel) as u64;
            sum[2] += color::blue(pixel) as u64;
            count += 1;
        }
    };

    for x in 0..w {
        sample(pix.get_pixel_unchecked(x, 0));
        sample(pix.get_pixel_unchecked(x, h - 1));
    }
    for y in 0..h {
        sample(pix.get_pixel_unchecked(0, y));
        sample(pix.get_pixel_unchecked(w - 1, y));
    }

    if count == 0 {
        log::debug!("no opaque border pixels, using hint {}", hint);
        return hint;
    }

    let mean = Rgb::new(
        (sum[0] / count) as u8,
        (sum[1] / count) as u8,
        (sum[2] / count) as u8,
    );
    let distance = chebyshev_distance(mean, hint);
    if distance <= ESTIMATE_AGREEMENT {
        log::debug!("border mean {} agrees with hint {} (distance {})", mean, hint, distance);
        hint
    } else {
        log::debug!("border mean {} overrides hint {} (distance {})", mean, hint, distance);
        mean
    }
}
