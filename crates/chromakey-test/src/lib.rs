//! chromakey-test - Regression test framework for chromakey
//!
//! Supports two modes, selected with the `REGTEST_MODE` environment
//! variable:
//!
//! - **Compare** (default): values and images are checked in memory
//! - **Display**: additionally writes every checked image to
//!   `tests/regout/` so the result can be inspected by eye
//!
//! # Usage
//!
//! ```ignore
//! use chromakey_test::RegParams;
//!
//! let mut rp = RegParams::new("matte");
//! rp.compare_values(0.0, alpha as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use chromakey_core::{Box, Pix, Rgba};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // chromakey-test is at crates/chromakey-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// A `w`x`h` image filled with one color.
///
/// # Panics
///
/// Panics on zero dimensions; test images are always non-empty.
pub fn solid(w: u32, h: u32, color: Rgba) -> Pix {
    Pix::new_filled(w, h, color).unwrap()
}

/// Copy of `pix` with the rectangle `region` painted in `color`.
///
/// Parts of the rectangle outside the image are ignored.
pub fn paint_rect(pix: &Pix, region: Box, color: Rgba) -> Pix {
    let mut pm = pix.to_mut();
    for y in region.y..region.bottom().min(pix.height()) {
        for x in region.x..region.right().min(pix.width()) {
            pm.set_pixel_unchecked(x, y, color.to_pixel());
        }
    }
    pm.into()
}

/// Number of pixels whose alpha is 0.
pub fn count_transparent(pix: &Pix) -> usize {
    pix.data()
        .iter()
        .filter(|&&p| chromakey_core::color::alpha(p) == 0)
        .count()
}
