//! Image format detection
//!
//! Detects PNG by its magic number; everything else is rejected.

use crate::{IoError, IoResult};

/// PNG: 89 50 4E 47 0D 0A 1A 0A
pub const PNG_SIGNATURE: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Check that `data` starts with the PNG signature.
pub fn ensure_png(data: &[u8]) -> IoResult<()> {
    if data.len() < PNG_SIGNATURE.len() {
        return Err(IoError::UnsupportedFormat(
            "not enough data to detect format".to_string(),
        ));
    }
    if !data.starts_with(PNG_SIGNATURE) {
        return Err(IoError::UnsupportedFormat(
            "only PNG images are supported".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_png() {
        assert!(ensure_png(PNG_SIGNATURE).is_ok());
        assert!(ensure_png(b"BM").is_err());
        assert!(ensure_png(&[0xFF, 0xD8, 0xFF, 0xE0, 0, 0, 0, 0]).is_err());
    }
}
