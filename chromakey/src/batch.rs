//! Batch even-crop over a directory tree
//!
//! Every `.png` file (extension matched case-insensitively) with an odd
//! width or height is cropped on the right and bottom and overwritten in
//! place. A failure on one file is recorded and the walk continues.

use crate::Result;
use chromakey_core::Pix;
use chromakey_io::{IoError, read_image, write_image_mem};
use jwalk::WalkDir;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A file that could not be processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Result of [`fix_even_dir`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// PNG files found
    pub total: usize,
    /// Files cropped and rewritten
    pub changed: usize,
    pub failures: Vec<BatchFailure>,
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Collect PNG files under `dir`, sorted by path
pub fn collect_png_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| is_png(p))
        .collect();
    files.sort();
    files
}

/// Replace `path` with `pix` encoded as PNG.
///
/// The image is written to a temporary file in the same directory and
/// renamed over `path`, so a failed write leaves the original intact.
fn replace_png(pix: &Pix, path: &Path) -> std::result::Result<(), IoError> {
    let bytes = write_image_mem(pix)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| IoError::Io(e.error))?;
    Ok(())
}

/// Crop one file to even dimensions; returns whether it was rewritten
fn fix_even_file(path: &Path) -> std::result::Result<bool, IoError> {
    let pix = read_image(path)?;
    if pix.has_even_dimensions() {
        log::debug!(
            "already even: {} {}x{}",
            path.display(),
            pix.width(),
            pix.height()
        );
        return Ok(false);
    }
    let even = pix.crop_to_even()?;
    replace_png(&even, path)?;
    log::info!(
        "fixed: {} {}x{} -> {}x{}",
        path.display(),
        pix.width(),
        pix.height(),
        even.width(),
        even.height()
    );
    Ok(true)
}

/// Crop every odd-sized PNG under `dir` to even dimensions in place
///
/// # Errors
///
/// Returns [`IoError::NotFound`] if `dir` is not a directory. Errors on
/// individual files are collected in [`BatchReport::failures`].
pub fn fix_even_dir(dir: impl AsRef<Path>) -> Result<BatchReport> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(IoError::NotFound {
            path: dir.to_path_buf(),
        }
        .into());
    }

    let mut report = BatchReport::default();
    for path in collect_png_files(dir) {
        report.total += 1;
        match fix_even_file(&path) {
            Ok(true) => report.changed += 1,
            Ok(false) => {}
            Err(e) => {
                log::warn!("error: {} ({})", path.display(), e);
                report.failures.push(BatchFailure {
                    path,
                    message: e.to_string(),
                });
            }
        }
    }

    log::info!(
        "total png files: {}, cropped to even: {}",
        report.total,
        report.changed
    );
    Ok(report)
}
