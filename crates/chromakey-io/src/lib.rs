//! chromakey-io - Image I/O for the chromakey toolkit
//!
//! Sticker art is exchanged as PNG only. Every image is decoded to 8-bit
//! RGBA on read and encoded as 8-bit RGBA on write.

mod error;
pub mod format;
pub mod png;

pub use error::{IoError, IoResult};
pub use format::ensure_png;

use chromakey_core::Pix;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Read a PNG image from a file
///
/// # Errors
///
/// Returns [`IoError::NotFound`] when `path` is not an existing file and
/// [`IoError::UnsupportedFormat`] when the file does not carry the PNG
/// signature.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(IoError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    ensure_png(reader.fill_buf()?)?;
    png::read_png(reader)
}

/// Decode a PNG image held in memory
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    ensure_png(data)?;
    png::read_png(std::io::Cursor::new(data))
}

/// Write an image to a file as PNG, replacing any existing file
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    png::write_png(pix, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image as PNG into memory
pub fn write_image_mem(pix: &Pix) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    png::write_png(pix, &mut buffer)?;
    Ok(buffer)
}
