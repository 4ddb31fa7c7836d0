//! Chromakey - Turn chroma-key artwork sheets into transparent stickers
//!
//! A sheet is a grid of drawings rendered on a flat key color. This crate
//! slices the sheet, removes the background of every cell (including the
//! green halo left by anti-aliasing), strokes a white outline around each
//! sticker and checks that every output has even dimensions.
//!
//! It also bundles the surrounding tools: recoloring the border-connected
//! background of an image, fitting an image into a fixed canvas, building
//! the main and tab listing images, and cropping a directory of PNGs to
//! even sizes.
//!
//! # Example
//!
//! ```
//! use chromakey::sheet::{SheetOptions, split_pix};
//! use chromakey::{Pix, Rgb};
//!
//! let sheet = Pix::new_filled(400, 300, Rgb::CHROMA_GREEN.with_alpha(255)).unwrap();
//! let cells = split_pix(&sheet, &SheetOptions::default()).unwrap();
//! assert_eq!(cells.len(), 12);
//! assert_eq!(cells[0].dimensions(), (100, 100));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use chromakey_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use chromakey_color as color;
pub use chromakey_io as io;
pub use chromakey_morph as morph;
pub use chromakey_transform as transform;

pub mod batch;
mod error;
pub mod files;
pub mod parity;
pub mod pipeline;
pub mod sheet;

pub use batch::{BatchReport, fix_even_dir};
pub use error::{Error, Result};
pub use files::{fit_file, make_main_and_tab, recolor_file};
pub use parity::{ParityReport, ParityStatus, check_even_outputs};
pub use pipeline::{MatteOptions, process_cell};
pub use sheet::{GridSpec, SheetOptions, SheetReport, split_pix, split_sheet};
