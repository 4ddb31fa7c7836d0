//! PIX - The RGBA raster container
//!
//! # Pixel layout
//!
//! - One 32-bit word per pixel, row-major, no row padding
//! - Color order is RGBA (red in MSB, alpha in LSB)
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`.
//!
//! Neighborhood passes read from the `Pix` they are handed and write into a
//! `PixMut` copy of it, so every lookup sees the state from before the pass.

mod access;
mod clip;

use crate::color::Rgba;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal PIX data
#[derive(Debug, PartialEq, Eq)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// The image data (`0xRRGGBBAA` words)
    data: Vec<u32>,
}

impl PixData {
    fn filled(width: u32, height: u32, pixel: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            data: vec![pixel; len],
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + x as usize
    }
}

/// PIX - RGBA raster container
///
/// # Examples
///
/// ```
/// use chromakey_core::Pix;
///
/// let pix = Pix::new(400, 300).unwrap();
/// assert_eq!(pix.width(), 400);
/// assert_eq!(pix.height(), 300);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new PIX with the specified dimensions.
    ///
    /// The image data is initialized to zero (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, Rgba::TRANSPARENT)
    }

    /// Create a new PIX with every pixel set to `color`.
    pub fn new_filled(width: u32, height: u32, color: Rgba) -> Result<Self> {
        Ok(Pix {
            inner: Arc::new(PixData::filled(width, height, color.to_pixel())?),
        })
    }

    /// Create a PIX from tightly packed 8-bit RGBA samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if `bytes.len() != 4 * width * height`.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let mut inner = PixData::filled(width, height, 0)?;
        let expected = inner.data.len() * 4;
        if bytes.len() != expected {
            return Err(Error::BufferLength {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }
        for (word, chunk) in inner.data.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(Pix {
            inner: Arc::new(inner),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this PIX.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = self.inner.index(0, y);
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Serialize to tightly packed 8-bit RGBA samples.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.inner
            .data
            .iter()
            .flat_map(|word| word.to_be_bytes())
            .collect()
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Take the data out for mutation, copying only if it is shared.
    pub fn into_mut(self) -> PixMut {
        match self.try_into_mut() {
            Ok(pm) => pm,
            Err(shared) => shared.to_mut(),
        }
    }

    /// Create a mutable copy of this PIX.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: PixData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable raw access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Rgba) {
        self.inner.data.fill(color.to_pixel());
    }
}

impl From<PixMut> for Pix {
    fn from(pix: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero() {
        assert!(matches!(
            Pix::new(0, 10),
            Err(Error::InvalidDimension {
                width: 0,
                height: 10
            })
        ));
        assert!(Pix::new(10, 0).is_err());
    }

    #[test]
    fn test_rgba_bytes_roundtrip() {
        let bytes: Vec<u8> = (0u8..24).collect();
        let pix = Pix::from_rgba_bytes(3, 2, &bytes).unwrap();
        assert_eq!(pix.get_rgba(1, 0), Some(Rgba::new(4, 5, 6, 7)));
        assert_eq!(pix.to_rgba_bytes(), bytes);
    }

    #[test]
    fn test_from_rgba_bytes_length_mismatch() {
        assert!(matches!(
            Pix::from_rgba_bytes(2, 2, &[0; 15]),
            Err(Error::BufferLength { expected: 16, .. })
        ));
    }

    #[test]
    fn test_to_mut_does_not_alias() {
        let pix = Pix::new_filled(2, 2, Rgba::WHITE).unwrap();
        let mut pm = pix.to_mut();
        pm.fill(Rgba::TRANSPARENT);
        assert_eq!(pix.get_rgba(0, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_try_into_mut_shared() {
        let pix = Pix::new(2, 2).unwrap();
        let other = pix.clone();
        assert_eq!(pix.ref_count(), 2);
        let pix = pix.try_into_mut().unwrap_err();
        drop(other);
        assert!(pix.try_into_mut().is_ok());
    }
}
