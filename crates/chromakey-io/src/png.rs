//! PNG image format support
//!
//! Every PNG is decoded to 8-bit RGBA: palettes and `tRNS` chunks are
//! expanded, 16-bit samples are stripped, and gray is replicated into the
//! color channels. Output is always written as 8-bit RGBA so per-pixel
//! alpha survives exactly.

use crate::{IoError, IoResult};
use chromakey_core::{Pix, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "palette was not expanded".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut pix_mut = Pix::new(width, height)?.into_mut();
    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        for x in 0..width {
            let idx = row_start + x as usize * samples;
            let pixel = match samples {
                1 => color::compose_rgb(data[idx], data[idx], data[idx]),
                2 => color::compose_rgba(data[idx], data[idx], data[idx], data[idx + 1]),
                3 => color::compose_rgb(data[idx], data[idx + 1], data[idx + 2]),
                _ => color::compose_rgba(data[idx], data[idx + 1], data[idx + 2], data[idx + 3]),
            };
            pix_mut.set_pixel_unchecked(x, y, pixel);
        }
    }

    Ok(pix_mut.into())
}

/// Write a PNG image as 8-bit RGBA
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(&pix.to_rgba_bytes())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
