//! Path-based operations
//!
//! Each function reads its input before touching the output location, so
//! a missing input never leaves an empty directory behind.

use crate::{Error, Result};
use chromakey_color::{RecolorOptions, recolor_connected_background};
use chromakey_core::Pix;
use chromakey_io::{read_image, write_image};
use chromakey_transform::{CanvasOptions, fit_into_canvas};
use std::fs;
use std::path::{Path, PathBuf};

/// Main image size for a sticker set listing
pub const MAIN_SIZE: (u32, u32) = (240, 240);

/// Tab icon size for a sticker set listing
pub const TAB_SIZE: (u32, u32) = (96, 74);

/// Write `pix` to `path`, creating missing parent directories
pub fn save(pix: &Pix, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(Error::CreateDir)?;
    }
    write_image(pix, path)?;
    log::info!("saved: {}", path.display());
    Ok(())
}

/// Recolor the border-connected background of an image file
pub fn recolor_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &RecolorOptions,
) -> Result<()> {
    let pix = read_image(input.as_ref())?;
    let out = recolor_connected_background(&pix, options);
    save(&out, output)
}

/// Fit an image file into a canvas and save it
pub fn fit_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &CanvasOptions,
) -> Result<()> {
    options.validate()?;
    let pix = read_image(input.as_ref())?;
    let out = fit_into_canvas(&pix, options)?;
    save(&out, output)
}

/// Build the listing images from `dir/01.png` and `dir/02.png`
///
/// Writes `main.png` (240x240) and `tab.png` (96x74) on a transparent
/// canvas into `dir` and returns their paths. Both sources are checked
/// before anything is written.
pub fn make_main_and_tab(dir: impl AsRef<Path>) -> Result<(PathBuf, PathBuf)> {
    let dir = dir.as_ref();
    let main_src = read_image(dir.join("01.png"))?;
    let tab_src = read_image(dir.join("02.png"))?;

    let main_opts = CanvasOptions::default().with_size(MAIN_SIZE.0, MAIN_SIZE.1);
    let tab_opts = CanvasOptions::default().with_size(TAB_SIZE.0, TAB_SIZE.1);

    let main_path = dir.join("main.png");
    save(&fit_into_canvas(&main_src, &main_opts)?, &main_path)?;
    let tab_path = dir.join("tab.png");
    save(&fit_into_canvas(&tab_src, &tab_opts)?, &tab_path)?;

    Ok((main_path, tab_path))
}
