//! File operation regression test
//!
//! Tests recolor_file, fit_file and make_main_and_tab through the
//! filesystem, including the missing-input cases.

use chromakey::color::RecolorOptions;
use chromakey::files::{MAIN_SIZE, TAB_SIZE, save};
use chromakey::io::{IoError, read_image};
use chromakey::transform::CanvasOptions;
use chromakey::{Box, Error, Rgb, Rgba, fit_file, make_main_and_tab, recolor_file};
use chromakey_test::{RegParams, paint_rect, solid};

const INK: Rgba = Rgba::new(0, 0, 0, 255);

#[test]
fn recolor_file_reg() {
    let mut rp = RegParams::new("recolor_file");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("nested/out/recolored.png");

    // White frame around a black ring with a white pocket
    let pix = paint_rect(&solid(7, 7, Rgba::WHITE), Box::new(1, 1, 5, 5).unwrap(), INK);
    let pix = paint_rect(&pix, Box::new(3, 3, 1, 1).unwrap(), Rgba::WHITE);
    save(&pix, &input).unwrap();

    recolor_file(&input, &output, &RecolorOptions::default()).unwrap();
    let out = read_image(&output).unwrap();

    let expected = paint_rect(
        &solid(7, 7, Rgb::CHROMA_GREEN.with_alpha(255)),
        Box::new(1, 1, 5, 5).unwrap(),
        INK,
    );
    let expected = paint_rect(&expected, Box::new(3, 3, 1, 1).unwrap(), Rgba::WHITE);
    rp.compare_pix(&expected, &out);

    assert!(rp.cleanup(), "recolor_file regression test failed");
}

#[test]
fn fit_file_reg() {
    let mut rp = RegParams::new("fit_file");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("wide.png");
    let output = dir.path().join("fit.png");
    save(&solid(60, 20, INK), &input).unwrap();

    let opts = CanvasOptions::default()
        .with_size(30, 30)
        .with_background(Rgba::WHITE);
    fit_file(&input, &output, &opts).unwrap();
    let out = read_image(&output).unwrap();

    // 60x20 -> 30x10 at y = 10 on white
    rp.compare_values(30.0, out.width() as f64, 0.0);
    rp.compare_values(30.0, out.height() as f64, 0.0);
    rp.compare_values(
        Rgba::WHITE.to_pixel() as f64,
        out.get_pixel_unchecked(15, 5) as f64,
        0.0,
    );
    let inside = out.get_rgba(15, 15).unwrap();
    rp.compare_values(0.0, inside.r as f64, 1.0);
    rp.compare_values(255.0, inside.a as f64, 1.0);

    assert!(rp.cleanup(), "fit_file regression test failed");
}

#[test]
fn main_tab_reg() {
    let mut rp = RegParams::new("main_tab");
    let dir = tempfile::tempdir().unwrap();
    save(&solid(370, 320, INK), dir.path().join("01.png")).unwrap();
    save(&solid(370, 320, INK), dir.path().join("02.png")).unwrap();

    let (main_path, tab_path) = make_main_and_tab(dir.path()).unwrap();
    let main = read_image(&main_path).unwrap();
    let tab = read_image(&tab_path).unwrap();
    rp.compare_values(MAIN_SIZE.0 as f64, main.width() as f64, 0.0);
    rp.compare_values(MAIN_SIZE.1 as f64, main.height() as f64, 0.0);
    rp.compare_values(TAB_SIZE.0 as f64, tab.width() as f64, 0.0);
    rp.compare_values(TAB_SIZE.1 as f64, tab.height() as f64, 0.0);

    // Transparent padding above the main image and left of the tab image
    rp.compare_values(0.0, main.get_pixel_unchecked(120, 0) as f64, 0.0);
    rp.compare_values(0.0, tab.get_pixel_unchecked(0, 37) as f64, 0.0);

    assert!(rp.cleanup(), "main_tab regression test failed");
}

#[test]
fn missing_inputs_reg() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("sub/out.png");

    let err = recolor_file(dir.path().join("nope.png"), &output, &RecolorOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::Io(IoError::NotFound { .. })));
    assert!(!dir.path().join("sub").exists());

    let err = fit_file(dir.path().join("nope.png"), &output, &CanvasOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::Io(IoError::NotFound { .. })));

    // Only 01.png present: nothing is written
    save(&solid(4, 4, INK), dir.path().join("01.png")).unwrap();
    let err = make_main_and_tab(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Io(IoError::NotFound { .. })));
    assert!(!dir.path().join("main.png").exists());
}
