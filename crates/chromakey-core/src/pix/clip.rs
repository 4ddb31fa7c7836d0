//! Rectangle clipping operations for images
//!
//! Functions for extracting rectangular sub-regions from images and for
//! trimming an image down to even dimensions.

use super::{Pix, PixData};
use crate::Box;
use crate::error::{Error, Result};
use std::sync::Arc;

impl Pix {
    /// Extract a rectangular sub-region from the image.
    ///
    /// Creates a new image with its own storage containing the specified
    /// rectangle. If the rectangle extends beyond the image bounds, it is
    /// clipped to the valid region.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The requested width or height is 0
    /// - The rectangle origin is outside the image bounds
    ///
    /// # Examples
    ///
    /// ```
    /// use chromakey_core::{Box, Pix};
    ///
    /// let pix = Pix::new(100, 80).unwrap();
    /// let clipped = pix.clip_rectangle(&Box::new_unchecked(80, 60, 50, 50)).unwrap();
    /// assert_eq!(clipped.width(), 20);   // clipped: 100 - 80
    /// assert_eq!(clipped.height(), 20);  // clipped: 80 - 60
    /// ```
    pub fn clip_rectangle(&self, region: &Box) -> Result<Pix> {
        let Box { x, y, w, h } = *region;
        if w == 0 || h == 0 {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle has zero dimension: {}x{}",
                w, h
            )));
        }

        let (src_w, src_h) = self.dimensions();
        if x >= src_w || y >= src_h {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle origin ({}, {}) is outside image bounds ({}x{})",
                x, y, src_w, src_h
            )));
        }

        let clip_w = w.min(src_w - x);
        let clip_h = h.min(src_h - y);

        let mut data = Vec::with_capacity(clip_w as usize * clip_h as usize);
        for row in y..y + clip_h {
            let line = self.row_data(row);
            data.extend_from_slice(&line[x as usize..(x + clip_w) as usize]);
        }

        Ok(Pix {
            inner: Arc::new(PixData {
                width: clip_w,
                height: clip_h,
                data,
            }),
        })
    }

    /// Crop away the last column and/or row so both dimensions are even.
    ///
    /// Returns a shared clone when the image is already even.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if a dimension is 1, since
    /// removing it would leave an empty image.
    pub fn crop_to_even(&self) -> Result<Pix> {
        let (w, h) = self.dimensions();
        let even_w = w - (w % 2);
        let even_h = h - (h % 2);
        if even_w == w && even_h == h {
            return Ok(self.clone());
        }
        if even_w == 0 || even_h == 0 {
            return Err(Error::InvalidDimension {
                width: w,
                height: h,
            });
        }
        self.clip_rectangle(&Box::new_unchecked(0, 0, even_w, even_h))
    }

    /// Whether both dimensions are even.
    #[inline]
    pub fn has_even_dimensions(&self) -> bool {
        self.width() % 2 == 0 && self.height() % 2 == 0
    }
}
