//! Even-dimension check for sliced outputs
//!
//! Sticker platforms require even widths and heights. The check re-opens
//! each numbered output and reports problems; it never fails.

use crate::sheet::output_name;
use chromakey_io::read_image;
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome for one expected output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParityStatus {
    /// Width and height are both even
    Even { width: u32, height: u32 },
    /// Width or height is odd
    Odd { width: u32, height: u32 },
    /// No file at the expected path
    Missing,
    /// The file exists but could not be decoded
    Unreadable { message: String },
}

impl ParityStatus {
    pub fn is_even(&self) -> bool {
        matches!(self, Self::Even { .. })
    }
}

/// One checked file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityEntry {
    pub index: u32,
    pub path: PathBuf,
    pub status: ParityStatus,
}

impl fmt::Display for ParityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        match &self.status {
            ParityStatus::Even { width, height } => write!(f, "OK: {} -> {}x{}", path, width, height),
            ParityStatus::Odd { width, height } => {
                write!(f, "NG: {} -> {}x{} (odd size)", path, width, height)
            }
            ParityStatus::Missing => write!(f, "missing file: {}", path),
            ParityStatus::Unreadable { message } => write!(f, "error reading {}: {}", path, message),
        }
    }
}

/// Result of [`check_even_outputs`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParityReport {
    pub entries: Vec<ParityEntry>,
}

impl ParityReport {
    /// True when every expected file exists and has even dimensions
    pub fn all_even(&self) -> bool {
        self.entries.iter().all(|e| e.status.is_even())
    }

    /// Entries that are not [`ParityStatus::Even`]
    pub fn violations(&self) -> impl Iterator<Item = &ParityEntry> {
        self.entries.iter().filter(|e| !e.status.is_even())
    }
}

/// Check `NN.png` for every index in `start..start + count` under `dir`
///
/// The range stops at `u32::MAX` rather than wrapping.
pub fn check_even_outputs(dir: impl AsRef<Path>, start: u32, count: u32) -> ParityReport {
    let dir = dir.as_ref();
    let entries: Vec<ParityEntry> = (start..start.saturating_add(count))
        .map(|index| {
            let path = dir.join(output_name(index));
            let status = if !path.exists() {
                ParityStatus::Missing
            } else {
                match read_image(&path) {
                    Ok(pix) if pix.has_even_dimensions() => ParityStatus::Even {
                        width: pix.width(),
                        height: pix.height(),
                    },
                    Ok(pix) => ParityStatus::Odd {
                        width: pix.width(),
                        height: pix.height(),
                    },
                    Err(e) => ParityStatus::Unreadable {
                        message: e.to_string(),
                    },
                }
            };
            ParityEntry {
                index,
                path,
                status,
            }
        })
        .collect();

    let report = ParityReport { entries };
    for entry in &report.entries {
        if entry.status.is_even() {
            log::debug!("{}", entry);
        } else {
            log::warn!("{}", entry);
        }
    }
    if report.all_even() {
        log::info!("all output images have even width and height");
    } else {
        log::warn!("some output images have odd sizes or are missing");
    }
    report
}
