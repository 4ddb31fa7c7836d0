//! Sheet slicing
//!
//! A sheet is an `R x C` grid of equally sized sticker drawings. Cell size
//! is the sheet size divided by the grid with integer division; remainder
//! pixels on the right and bottom edges are dropped.
//!
//! Cells are cropped into independent buffers, run through
//! [`process_cell`](crate::pipeline::process_cell) in row-major order and
//! written as `NN.png` starting at a caller-chosen index.

use crate::parity::{ParityReport, check_even_outputs};
use crate::pipeline::{MatteOptions, process_cell};
use crate::{Error, Result};
use chromakey_core::{Box, Pix};
use chromakey_io::{read_image, write_image};
use std::fs;
use std::path::{Path, PathBuf};

/// Grid layout of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub rows: u32,
    pub cols: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { rows: 3, cols: 4 }
    }
}

impl GridSpec {
    /// Create a validated grid
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        let grid = Self { rows, cols };
        grid.validate()?;
        Ok(grid)
    }

    /// Reject zero rows or columns, and grids whose cell count overflows
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 || self.rows.checked_mul(self.cols).is_none() {
            return Err(Error::InvalidGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Number of cells, saturating for grids [`GridSpec::validate`] rejects
    pub fn cell_count(&self) -> u32 {
        self.rows.saturating_mul(self.cols)
    }

    /// Cell rectangles of a `width x height` sheet in row-major order
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGrid`] for an empty grid and
    /// [`Error::SheetTooSmall`] when a cell would be less than one pixel.
    pub fn cell_rects(&self, width: u32, height: u32) -> Result<Vec<Box>> {
        self.validate()?;
        let cell_w = width / self.cols;
        let cell_h = height / self.rows;
        if cell_w == 0 || cell_h == 0 {
            return Err(Error::SheetTooSmall {
                width,
                height,
                rows: self.rows,
                cols: self.cols,
            });
        }

        let mut rects = Vec::with_capacity(self.cell_count() as usize);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let (left, top) = (col * cell_w, row * cell_h);
                rects.push(Box::from_edges(left, top, left + cell_w, top + cell_h)?);
            }
        }
        Ok(rects)
    }
}

/// Options for [`split_sheet`] and [`split_pix`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetOptions {
    pub grid: GridSpec,
    /// Index of the first output file
    pub start_index: u32,
    pub matte: MatteOptions,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            grid: GridSpec::default(),
            start_index: 1,
            matte: MatteOptions::default(),
        }
    }
}

impl SheetOptions {
    /// Set the grid
    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = grid;
        self
    }

    /// Set the first output index
    pub fn with_start_index(mut self, start_index: u32) -> Self {
        self.start_index = start_index;
        self
    }

    /// Number the outputs after a first sheet of the same grid
    ///
    /// With the default 3x4 grid this gives `13.png` to `24.png`.
    pub fn second_sheet(mut self) -> Self {
        self.start_index = self.grid.cell_count().saturating_add(1);
        self
    }

    /// Set the per-cell matte options
    pub fn with_matte(mut self, matte: MatteOptions) -> Self {
        self.matte = matte;
        self
    }

    /// Check the grid, the output numbering and the matte configuration
    ///
    /// Every index in `start_index..start_index + cells` must fit in a `u32`.
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        let count = self.grid.cell_count();
        if self.start_index.checked_add(count).is_none() {
            return Err(Error::InvalidStartIndex {
                start: self.start_index,
                count,
            });
        }
        self.matte.validate()
    }
}

/// File name for output index `index`: two digits, zero padded
pub fn output_name(index: u32) -> String {
    format!("{:02}.png", index)
}

/// Slice a sheet held in memory into processed cells, in row-major order
pub fn split_pix(sheet: &Pix, options: &SheetOptions) -> Result<Vec<Pix>> {
    options.validate()?;
    let rects = options.grid.cell_rects(sheet.width(), sheet.height())?;
    rects
        .iter()
        .map(|rect| {
            let cell = sheet.clip_rectangle(rect)?;
            process_cell(&cell, &options.matte)
        })
        .collect()
}

/// Result of [`split_sheet`]
#[derive(Debug, Clone)]
pub struct SheetReport {
    /// Written files in index order
    pub written: Vec<PathBuf>,
    /// Even-dimension check over the written range
    pub parity: ParityReport,
}

/// Slice a sheet file into `NN.png` stickers under `out_dir`
///
/// The configuration is validated and the sheet decoded before the output
/// directory is created, so an invalid option or a missing input leaves
/// nothing behind. After all cells are written the range is checked for
/// even dimensions; odd sizes are reported, not raised.
pub fn split_sheet(
    input: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    options: &SheetOptions,
) -> Result<SheetReport> {
    options.validate()?;
    let sheet = read_image(input.as_ref())?;
    let cells = split_pix(&sheet, options)?;

    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir).map_err(Error::CreateDir)?;

    let mut written = Vec::with_capacity(cells.len());
    for (cell, offset) in cells.iter().zip(0u32..) {
        let path = out_dir.join(output_name(options.start_index + offset));
        write_image(cell, &path)?;
        log::info!("saved: {}", path.display());
        written.push(path);
    }

    let parity = check_even_outputs(out_dir, options.start_index, cells.len() as u32);
    Ok(SheetReport { written, parity })
}
