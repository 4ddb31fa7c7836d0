//! Color values and 32-bit pixel packing
//!
//! # Pixel format
//!
//! 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
//!
//! # Color codes
//!
//! [`Rgb`] parses `#RRGGBB`; [`Rgba`] parses `#RRGGBB` (alpha 255) and
//! `#RRGGBBAA`. Both implement [`FromStr`] so they can be used directly as
//! command-line argument types.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Shift amounts for extracting color channels
pub const RED_SHIFT: u32 = 24;
pub const GREEN_SHIFT: u32 = 16;
pub const BLUE_SHIFT: u32 = 8;
pub const ALPHA_SHIFT: u32 = 0;

/// Extract red component from a 32-bit pixel.
#[inline]
pub fn red(pixel: u32) -> u8 {
    ((pixel >> RED_SHIFT) & 0xff) as u8
}

/// Extract green component from a 32-bit pixel.
#[inline]
pub fn green(pixel: u32) -> u8 {
    ((pixel >> GREEN_SHIFT) & 0xff) as u8
}

/// Extract blue component from a 32-bit pixel.
#[inline]
pub fn blue(pixel: u32) -> u8 {
    ((pixel >> BLUE_SHIFT) & 0xff) as u8
}

/// Extract alpha component from a 32-bit pixel.
#[inline]
pub fn alpha(pixel: u32) -> u8 {
    ((pixel >> ALPHA_SHIFT) & 0xff) as u8
}

/// Compose a 32-bit RGBA pixel.
#[inline]
pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((r as u32) << RED_SHIFT)
        | ((g as u32) << GREEN_SHIFT)
        | ((b as u32) << BLUE_SHIFT)
        | ((a as u32) << ALPHA_SHIFT)
}

/// Compose a 32-bit opaque RGB pixel (alpha = 255).
#[inline]
pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
    compose_rgba(r, g, b, 255)
}

/// Extract RGBA values from a 32-bit pixel.
#[inline]
pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
    (red(pixel), green(pixel), blue(pixel), alpha(pixel))
}

/// Replace the alpha byte of a pixel, keeping its color.
#[inline]
pub fn with_alpha(pixel: u32, a: u8) -> u32 {
    (pixel & !0xff) | ((a as u32) << ALPHA_SHIFT)
}

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// The chroma-key green the artwork sheets are rendered on (`#0ED728`).
    pub const CHROMA_GREEN: Rgb = Rgb::new(0x0e, 0xd7, 0x28);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Color part of a packed pixel.
    #[inline]
    pub fn from_pixel(pixel: u32) -> Self {
        Self::new(red(pixel), green(pixel), blue(pixel))
    }

    /// Parse a `#RRGGBB` color code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if the code does not start with `#`,
    /// is not exactly seven characters long, or contains non-hex digits.
    pub fn from_hex(code: &str) -> Result<Self> {
        let digits = strip_hash(code)?;
        if digits.len() != 6 {
            return Err(invalid(code, "color code must be like #RRGGBB"));
        }
        Ok(Self::new(
            hex_byte(code, &digits[0..2])?,
            hex_byte(code, &digits[2..4])?,
            hex_byte(code, &digits[4..6])?,
        ))
    }

    /// Attach an alpha value.
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn from_pixel(pixel: u32) -> Self {
        let (r, g, b, a) = extract_rgba(pixel);
        Self::new(r, g, b, a)
    }

    /// Pack into a `0xRRGGBBAA` pixel word.
    #[inline]
    pub fn to_pixel(self) -> u32 {
        compose_rgba(self.r, self.g, self.b, self.a)
    }

    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Parse `#RRGGBB` (alpha 255) or `#RRGGBBAA`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for any other shape.
    pub fn from_hex(code: &str) -> Result<Self> {
        let digits = strip_hash(code)?;
        let a = match digits.len() {
            6 => 255,
            8 => hex_byte(code, &digits[6..8])?,
            _ => return Err(invalid(code, "color must be #RRGGBB or #RRGGBBAA")),
        };
        Ok(Self::new(
            hex_byte(code, &digits[0..2])?,
            hex_byte(code, &digits[2..4])?,
            hex_byte(code, &digits[4..6])?,
            a,
        ))
    }

    /// Like [`Rgba::from_hex`], but an empty string means fully transparent.
    pub fn from_hex_or_transparent(code: &str) -> Result<Self> {
        if code.is_empty() {
            return Ok(Self::TRANSPARENT);
        }
        Self::from_hex(code)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex_or_transparent(s)
    }
}

fn strip_hash(code: &str) -> Result<&str> {
    let digits = code
        .strip_prefix('#')
        .ok_or_else(|| invalid(code, "color code must start with '#'"))?;
    // Byte slicing below relies on single-byte characters
    if !digits.is_ascii() {
        return Err(invalid(code, "color code contains non-hex digits"));
    }
    Ok(digits)
}

fn hex_byte(code: &str, digits: &str) -> Result<u8> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid(code, "color code contains non-hex digits"));
    }
    u8::from_str_radix(digits, 16).map_err(|_| invalid(code, "color code contains non-hex digits"))
}

fn invalid(code: &str, reason: &'static str) -> Error {
    Error::InvalidColor {
        code: code.to_string(),
        reason,
    }
}
