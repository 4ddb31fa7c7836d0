//! Edge cleanup regression test
//!
//! Tests clean_edges rim removal, the no-op case for fully opaque input,
//! and independence from scan direction.

use chromakey_color::{EDGE_CLEANUP_THRESHOLD, clean_edges, estimate_background};
use chromakey_core::{Box, Pix, Rgb, Rgba};
use chromakey_test::{RegParams, paint_rect, solid};

const RIM: Rgba = Rgba::new(20, 200, 50, 255);
const RED: Rgba = Rgba::new(255, 0, 0, 255);

fn mirror(pix: &Pix) -> Pix {
    let (w, h) = pix.dimensions();
    let mut pm = pix.to_mut();
    for y in 0..h {
        for x in 0..w {
            pm.set_pixel_unchecked(x, y, pix.get_pixel_unchecked(w - 1 - x, h - 1 - y));
        }
    }
    pm.into()
}

#[test]
fn edge_reg() {
    let mut rp = RegParams::new("edge");

    // Transparent 7x7 with a 5x5 near-green block around a red 3x3 core
    let pix = solid(7, 7, Rgba::TRANSPARENT);
    let pix = paint_rect(&pix, Box::new(1, 1, 5, 5).unwrap(), RIM);
    let pix = paint_rect(&pix, Box::new(2, 2, 3, 3).unwrap(), RED);

    let out = clean_edges(&pix, Rgb::CHROMA_GREEN, EDGE_CLEANUP_THRESHOLD);

    let expected = paint_rect(&pix, Box::new(1, 1, 5, 5).unwrap(), Rgba { a: 0, ..RIM });
    let expected = paint_rect(&expected, Box::new(2, 2, 3, 3).unwrap(), RED);
    rp.compare_pix(&expected, &out);

    // Same result whichever corner the scan starts from
    let flipped = clean_edges(&mirror(&pix), Rgb::CHROMA_GREEN, EDGE_CLEANUP_THRESHOLD);
    rp.compare_pix(&out, &mirror(&flipped));

    assert!(rp.cleanup(), "edge regression test failed");
}

#[test]
fn edge_noop_reg() {
    let mut rp = RegParams::new("edge_noop");

    // No transparent pixel anywhere: nothing changes even though every
    // pixel is close to the key.
    let pix = solid(6, 4, RIM);
    let pix = paint_rect(&pix, Box::new(2, 1, 2, 2).unwrap(), RED);
    let out = clean_edges(&pix, Rgb::CHROMA_GREEN, EDGE_CLEANUP_THRESHOLD);
    rp.compare_pix(&pix, &out);

    assert!(rp.cleanup(), "edge_noop regression test failed");
}

#[test]
fn estimate_reg() {
    let mut rp = RegParams::new("estimate");

    // Slightly off-key border: the declared key wins
    let pix = solid(10, 10, Rgba::new(30, 200, 30, 255));
    let pix = paint_rect(&pix, Box::new(3, 3, 4, 4).unwrap(), RED);
    let est = estimate_background(&pix, Rgb::CHROMA_GREEN);
    rp.compare_values(0.0, (est != Rgb::CHROMA_GREEN) as u8 as f64, 0.0);

    // Blue border: the sampled mean wins
    let pix = solid(10, 10, Rgba::new(0, 0, 250, 255));
    let est = estimate_background(&pix, Rgb::CHROMA_GREEN);
    rp.compare_values(250.0, est.b as f64, 0.0);
    rp.compare_values(0.0, est.g as f64, 0.0);

    assert!(rp.cleanup(), "estimate regression test failed");
}
