//! Box - Rectangle regions
//!
//! A `Box` marks the crop bounds of one sheet cell.

use crate::error::{Error, Result};

/// A rectangle region
///
/// This is a simple Copy type since it's small and frequently copied.
/// The right and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Box {
    /// Create a new box
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Result<Self> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidParameter(format!(
                "box dimensions must be positive: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a box without validation
    pub const fn new_unchecked(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a box from `(left, top, right, bottom)` edges
    ///
    /// # Errors
    ///
    /// Returns an error unless `left < right` and `top < bottom`.
    pub fn from_edges(left: u32, top: u32, right: u32, bottom: u32) -> Result<Self> {
        if left >= right || top >= bottom {
            return Err(Error::InvalidParameter(format!(
                "box edges out of order: ({}, {}, {}, {})",
                left, top, right, bottom
            )));
        }
        Ok(Self::new_unchecked(left, top, right - left, bottom - top))
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }
}
