//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//! Checked accessors return `Option` / `Result`; the `_unchecked`
//! variants panic on out-of-range coordinates.

use super::{Pix, PixMut};
use crate::color::Rgba;
use crate::error::{Error, Result};

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is past the end of the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Get RGBA values at (x, y).
    #[inline]
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<Rgba> {
        self.get_pixel(x, y).map(Rgba::from_pixel)
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.inner.width {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.inner.width as usize,
            });
        }
        if y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.inner.height as usize,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is past the end of the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
    }

    /// Set an RGBA pixel at (x, y).
    pub fn set_rgba(&mut self, x: u32, y: u32, color: Rgba) -> Result<()> {
        self.set_pixel(x, y, color.to_pixel())
    }
}
