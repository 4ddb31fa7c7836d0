//! Chromakey Core - Basic data structures for sticker processing
//!
//! This crate provides the fundamental data structures used throughout
//! the chromakey toolkit:
//!
//! - [`Pix`] / [`PixMut`] - The RGBA raster container (immutable / mutable)
//! - [`Box`] - Rectangle regions (cell crop bounds)
//! - [`Rgb`] / [`Rgba`] - 8-bit color values with hex parsing
//!
//! # Pixel format
//!
//! Pixels are stored as `0xRRGGBBAA` words (red in MSB, alpha in LSB).
//! The helpers in [`color`] pack and unpack them.

pub mod box_;
pub mod color;
pub mod error;
pub mod pix;

pub use box_::Box;
pub use color::{Rgb, Rgba};
pub use error::{Error, Result};
pub use pix::{Pix, PixMut};
