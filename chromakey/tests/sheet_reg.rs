//! Sheet slicing regression test
//!
//! Tests split_sheet end to end: cell geometry, output naming, the matte
//! pipeline applied per cell, parity reporting and error ordering.

use chromakey::color::ToleranceConfig;
use chromakey::io::{IoError, read_image};
use chromakey::sheet::{GridSpec, SheetOptions, split_pix, split_sheet};
use chromakey::{Box, Error, MatteOptions, ParityStatus, Pix, Rgb, Rgba};
use chromakey_test::{RegParams, paint_rect, solid};

const KEY: Rgba = Rgb::CHROMA_GREEN.with_alpha(255);
const INK: Rgba = Rgba::new(200, 30, 30, 255);
/// Matted background keeps its color and only loses alpha
const CLEARED: Rgba = Rgb::CHROMA_GREEN.with_alpha(0);

/// Green sheet with a 20x20 red square centered in every 100x100 cell
fn sticker_sheet(width: u32, height: u32) -> Pix {
    let mut sheet = solid(width, height, KEY);
    for row in 0..3 {
        for col in 0..4 {
            let region = Box::new(col * 100 + 40, row * 100 + 40, 20, 20).unwrap();
            sheet = paint_rect(&sheet, region, INK);
        }
    }
    sheet
}

fn expected_cell(width: u32, height: u32) -> Pix {
    let cell = solid(width, height, CLEARED);
    let cell = paint_rect(&cell, Box::new(38, 38, 24, 24).unwrap(), Rgba::WHITE);
    paint_rect(&cell, Box::new(40, 40, 20, 20).unwrap(), INK)
}

#[test]
fn sheet_reg() {
    let mut rp = RegParams::new("sheet");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("1.png");
    let out_dir = dir.path().join("output_stamps");
    chromakey::files::save(&sticker_sheet(400, 300), &input).unwrap();

    let report = split_sheet(&input, &out_dir, &SheetOptions::default()).unwrap();
    rp.compare_values(12.0, report.written.len() as f64, 0.0);
    rp.compare_values(1.0, report.parity.all_even() as u8 as f64, 0.0);

    let expected = expected_cell(100, 100);
    for (i, path) in report.written.iter().enumerate() {
        let name = format!("{:02}.png", i + 1);
        rp.compare_values(1.0, path.ends_with(&name) as u8 as f64, 0.0);
        let cell = read_image(path).unwrap();
        rp.compare_pix(&expected, &cell);
    }

    assert!(rp.cleanup(), "sheet regression test failed");
}

#[test]
fn sheet_second_reg() {
    let mut rp = RegParams::new("sheet_second");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("2.png");
    chromakey::files::save(&sticker_sheet(400, 300), &input).unwrap();

    let options = SheetOptions::default().second_sheet();
    let report = split_sheet(&input, dir.path(), &options).unwrap();
    rp.compare_values(12.0, report.written.len() as f64, 0.0);
    rp.compare_values(1.0, dir.path().join("13.png").is_file() as u8 as f64, 0.0);
    rp.compare_values(1.0, dir.path().join("24.png").is_file() as u8 as f64, 0.0);
    rp.compare_values(0.0, dir.path().join("01.png").exists() as u8 as f64, 0.0);
    rp.compare_values(13.0, report.parity.entries[0].index as f64, 0.0);

    assert!(rp.cleanup(), "sheet_second regression test failed");
}

#[test]
fn sheet_odd_cells_reg() {
    let mut rp = RegParams::new("sheet_odd");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("odd.png");
    // 403x303: cells are 100x101, the 3 leftover columns are dropped
    chromakey::files::save(&sticker_sheet(403, 303), &input).unwrap();

    let report = split_sheet(&input, dir.path().join("out"), &SheetOptions::default()).unwrap();
    rp.compare_values(12.0, report.written.len() as f64, 0.0);
    rp.compare_values(0.0, report.parity.all_even() as u8 as f64, 0.0);
    rp.compare_values(12.0, report.parity.violations().count() as f64, 0.0);
    rp.compare_values(
        1.0,
        (report.parity.entries[0].status
            == ParityStatus::Odd {
                width: 100,
                height: 101,
            }) as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup(), "sheet_odd regression test failed");
}

#[test]
fn sheet_in_memory_reg() {
    let mut rp = RegParams::new("sheet_in_memory");

    let options = SheetOptions::default()
        .with_grid(GridSpec::new(1, 2).unwrap())
        .with_matte(MatteOptions::default().with_outline_thickness(0));
    let sheet = paint_rect(
        &solid(8, 4, KEY),
        Box::new(5, 1, 2, 2).unwrap(),
        INK,
    );
    let cells = split_pix(&sheet, &options).unwrap();
    rp.compare_values(2.0, cells.len() as f64, 0.0);
    rp.compare_pix(&solid(4, 4, CLEARED), &cells[0]);
    let expected = paint_rect(
        &solid(4, 4, CLEARED),
        Box::new(1, 1, 2, 2).unwrap(),
        INK,
    );
    rp.compare_pix(&expected, &cells[1]);

    assert!(rp.cleanup(), "sheet_in_memory regression test failed");
}

#[test]
fn sheet_errors_reg() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("never");

    // Missing input: no output directory is created
    let err = split_sheet(dir.path().join("missing.png"), &out_dir, &SheetOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::Io(IoError::NotFound { .. })));
    assert!(!out_dir.exists());

    // Invalid configuration is reported before the input is looked at
    let bad = SheetOptions::default().with_matte(MatteOptions::default().with_tolerance(
        ToleranceConfig {
            color_tolerance: 45,
            fade_tolerance: 35,
        },
    ));
    let err = split_sheet(dir.path().join("missing.png"), &out_dir, &bad).unwrap_err();
    assert!(matches!(err, Error::Color(_)));

    let empty_grid = SheetOptions::default().with_grid(GridSpec { rows: 0, cols: 4 });
    let err = split_sheet(dir.path().join("missing.png"), &out_dir, &empty_grid).unwrap_err();
    assert!(matches!(err, Error::InvalidGrid { .. }));
    assert!(!out_dir.exists());

    // Numbering that would run past u32::MAX is rejected before any write
    let input = dir.path().join("sheet.png");
    chromakey::io::write_image(&sticker_sheet(400, 300), &input).unwrap();
    let late = SheetOptions::default().with_start_index(u32::MAX - 5);
    let err = split_sheet(&input, &out_dir, &late).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidStartIndex {
            start,
            count: 12,
        } if start == u32::MAX - 5
    ));
    assert!(!out_dir.exists());
}
