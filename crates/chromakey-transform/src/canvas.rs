//! Resize into canvas
//!
//! Scales an image by `min(W / w, H / h)` with Lanczos3 resampling,
//! centers it on a `W x H` canvas filled with a background color and
//! blends it in using its own alpha as the mask.

use crate::{TransformError, TransformResult};
use chromakey_core::{Pix, Rgba, color};
use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Options for [`fit_into_canvas`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasOptions {
    /// Canvas width
    pub width: u32,
    /// Canvas height
    pub height: u32,
    /// Canvas fill color
    pub background: Rgba,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            width: 240,
            height: 240,
            background: Rgba::TRANSPARENT,
        }
    }
}

impl CanvasOptions {
    /// Set the canvas size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the canvas fill color
    pub fn with_background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    /// Reject a canvas with a zero dimension
    pub fn validate(&self) -> TransformResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TransformError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Size of a `w x h` image scaled to fit inside `canvas_w x canvas_h`
///
/// Each side is truncated and never drops below 1.
pub fn fit_size(w: u32, h: u32, canvas_w: u32, canvas_h: u32) -> (u32, u32) {
    let scale = (canvas_w as f64 / w as f64).min(canvas_h as f64 / h as f64);
    let nw = ((w as f64 * scale) as u32).max(1);
    let nh = ((h as f64 * scale) as u32).max(1);
    (nw, nh)
}

/// Blend `src` over `dst` with the alpha of `src` as the mask
///
/// All four channels, alpha included, are interpolated:
/// `out = (src * a + dst * (255 - a)) / 255`, rounded.
#[inline]
pub fn blend_over(src: u32, dst: u32) -> u32 {
    let (sr, sg, sb, sa) = color::extract_rgba(src);
    let (dr, dg, db, da) = color::extract_rgba(dst);
    let m = sa as u32;
    let mix = |s: u8, d: u8| ((s as u32 * m + d as u32 * (255 - m) + 127) / 255) as u8;
    color::compose_rgba(mix(sr, dr), mix(sg, dg), mix(sb, db), mix(sa, da))
}

fn resample(pix: &Pix, nw: u32, nh: u32) -> TransformResult<Pix> {
    if pix.dimensions() == (nw, nh) {
        return Ok(pix.clone());
    }
    let src = RgbaImage::from_raw(pix.width(), pix.height(), pix.to_rgba_bytes())
        .ok_or_else(|| TransformError::Buffer("pixel data does not match dimensions".to_string()))?;
    let resized = imageops::resize(&src, nw, nh, FilterType::Lanczos3);
    Ok(Pix::from_rgba_bytes(nw, nh, resized.as_raw())?)
}

/// Fit `pix` into a canvas, preserving its aspect ratio
///
/// # Errors
///
/// Returns [`TransformError::InvalidCanvas`] for a zero-sized canvas.
pub fn fit_into_canvas(pix: &Pix, options: &CanvasOptions) -> TransformResult<Pix> {
    options.validate()?;

    let (nw, nh) = fit_size(pix.width(), pix.height(), options.width, options.height);
    let resized = resample(pix, nw, nh)?;
    log::debug!(
        "fit {}x{} -> {}x{} on {}x{} canvas",
        pix.width(),
        pix.height(),
        nw,
        nh,
        options.width,
        options.height
    );

    let mut canvas = Pix::new_filled(options.width, options.height, options.background)?.into_mut();
    let ox = (options.width - nw) / 2;
    let oy = (options.height - nh) / 2;
    for y in 0..nh {
        for x in 0..nw {
            let dst = canvas.get_pixel_unchecked(ox + x, oy + y);
            let src = resized.get_pixel_unchecked(x, y);
            canvas.set_pixel_unchecked(ox + x, oy + y, blend_over(src, dst));
        }
    }

    Ok(canvas.into())
}
