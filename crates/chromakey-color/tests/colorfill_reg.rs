//! Connected recolor regression test
//!
//! Tests recolor_connected_background on a sheet with an enclosed pocket
//! of background color, alpha preservation and the per-channel tolerance.

use chromakey_color::{RecolorOptions, find_connected_background, recolor_connected_background};
use chromakey_core::{Box, Pix, Rgb, Rgba};
use chromakey_test::{RegParams, paint_rect, solid};

const INK: Rgba = Rgba::new(0, 0, 0, 255);

/// 9x9 white sheet with a black 5x5 square holding a white 3x3 pocket,
/// and a half-transparent white corner.
fn pocket_sheet() -> Pix {
    let pix = solid(9, 9, Rgba::WHITE);
    let pix = paint_rect(&pix, Box::new(2, 2, 5, 5).unwrap(), INK);
    let pix = paint_rect(&pix, Box::new(3, 3, 3, 3).unwrap(), Rgba::WHITE);
    paint_rect(&pix, Box::new(0, 0, 1, 1).unwrap(), Rgba::new(255, 255, 255, 128))
}

#[test]
fn colorfill_reg() {
    let mut rp = RegParams::new("colorfill");
    let options = RecolorOptions::default();
    let green = Rgb::CHROMA_GREEN;

    let pix = pocket_sheet();
    let out = recolor_connected_background(&pix, &options);

    let expected = solid(9, 9, green.with_alpha(255));
    let expected = paint_rect(&expected, Box::new(2, 2, 5, 5).unwrap(), INK);
    let expected = paint_rect(&expected, Box::new(3, 3, 3, 3).unwrap(), Rgba::WHITE);
    let expected = paint_rect(&expected, Box::new(0, 0, 1, 1).unwrap(), green.with_alpha(128));
    rp.compare_pix(&expected, &out);

    // The enclosed pocket is untouched
    rp.compare_values(
        Rgba::WHITE.to_pixel() as f64,
        out.get_pixel_unchecked(4, 4) as f64,
        0.0,
    );

    let mask = find_connected_background(&pix, options.from, options.tolerance);
    rp.compare_values(56.0, mask.count() as f64, 0.0);

    // The input is not modified
    rp.compare_pix(&pocket_sheet(), &pix);

    assert!(rp.cleanup(), "colorfill regression test failed");
}

#[test]
fn colorfill_tolerance_reg() {
    let mut rp = RegParams::new("colorfill_tolerance");

    // Left column just inside the box, right column just outside
    let pix = solid(4, 3, Rgba::WHITE);
    let pix = paint_rect(&pix, Box::new(0, 0, 1, 3).unwrap(), Rgba::new(235, 240, 255, 255));
    let pix = paint_rect(&pix, Box::new(3, 0, 1, 3).unwrap(), Rgba::new(234, 255, 255, 255));

    let options = RecolorOptions::default().with_to(Rgb::new(1, 2, 3));
    let out = recolor_connected_background(&pix, &options);

    rp.compare_values(
        Rgba::new(1, 2, 3, 255).to_pixel() as f64,
        out.get_pixel_unchecked(0, 1) as f64,
        0.0,
    );
    rp.compare_values(
        Rgba::new(234, 255, 255, 255).to_pixel() as f64,
        out.get_pixel_unchecked(3, 1) as f64,
        0.0,
    );

    // Tolerance 0 only takes exact matches
    let exact = RecolorOptions::default().with_tolerance(0);
    let mask = find_connected_background(&pix, exact.from, exact.tolerance);
    rp.compare_values(6.0, mask.count() as f64, 0.0);

    assert!(rp.cleanup(), "colorfill_tolerance regression test failed");
}

#[test]
fn colorfill_no_background_reg() {
    let mut rp = RegParams::new("colorfill_none");

    let pix = solid(5, 5, INK);
    let out = recolor_connected_background(&pix, &RecolorOptions::default());
    rp.compare_pix(&pix, &out);

    assert!(rp.cleanup(), "colorfill_none regression test failed");
}
