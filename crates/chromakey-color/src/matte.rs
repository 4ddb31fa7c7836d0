//! Soft matte extraction
//!
//! Classifies every pixel independently by its Chebyshev distance to the
//! background color:
//!
//! | distance                         | result                               |
//! |----------------------------------|--------------------------------------|
//! | green fringe, or `d <= color`    | alpha 0                              |
//! | `color < d <= fade`              | alpha scaled by `(d - color) / band` |
//! | `d > fade`                       | unchanged                            |
//!
//! RGB is never modified. There is no connectivity requirement.

use crate::metrics::{is_green_fringe, pixel_distance};
use crate::{ColorError, ColorResult};
use chromakey_core::{Pix, Rgb, color};

/// Distance thresholds for [`soft_matte`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToleranceConfig {
    /// At or below this distance a pixel becomes fully transparent
    pub color_tolerance: u8,
    /// Above this distance a pixel is left untouched
    pub fade_tolerance: u8,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            color_tolerance: 35,
            fade_tolerance: 45,
        }
    }
}

impl ToleranceConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidTolerance`] unless
    /// `fade_tolerance > color_tolerance`.
    pub fn new(color_tolerance: u8, fade_tolerance: u8) -> ColorResult<Self> {
        let config = Self {
            color_tolerance,
            fade_tolerance,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the fade band is non-empty
    pub fn validate(&self) -> ColorResult<()> {
        if self.fade_tolerance <= self.color_tolerance {
            return Err(ColorError::InvalidTolerance {
                color: self.color_tolerance,
                fade: self.fade_tolerance,
            });
        }
        Ok(())
    }

    /// Width of the fade band
    pub fn band(&self) -> u8 {
        self.fade_tolerance.saturating_sub(self.color_tolerance)
    }
}

/// Classify one pixel
#[inline]
pub fn matte_pixel(pixel: u32, base: Rgb, tolerance: &ToleranceConfig) -> u32 {
    let distance = pixel_distance(pixel, base);
    if is_green_fringe(Rgb::from_pixel(pixel)) || distance <= tolerance.color_tolerance {
        return color::with_alpha(pixel, 0);
    }
    if distance <= tolerance.fade_tolerance {
        let a = color::alpha(pixel) as u32;
        let over = (distance - tolerance.color_tolerance) as u32;
        let band = tolerance.band() as u32;
        return color::with_alpha(pixel, (a * over / band) as u8);
    }
    pixel
}

/// Make the background of `pix` transparent with a linear fade band
///
/// # Errors
///
/// Returns [`ColorError::InvalidTolerance`] if the fade band is empty.
pub fn soft_matte(pix: &Pix, base: Rgb, tolerance: &ToleranceConfig) -> ColorResult<Pix> {
    tolerance.validate()?;

    let mut out = pix.to_mut();
    for pixel in out.data_mut() {
        *pixel = matte_pixel(*pixel, base, tolerance);
    }
    Ok(out.into())
}
