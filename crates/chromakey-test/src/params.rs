//! Regression test parameters and checks

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use chromakey_core::{Pix, Rgba};
use std::path::PathBuf;

/// How a regression run treats the images it checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Check in memory only
    #[default]
    Compare,
    /// Check, and save every `actual` image under `tests/regout/`
    Display,
}

impl RegTestMode {
    /// Read the mode from `REGTEST_MODE` (`display` or anything else)
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE") {
            Ok(v) if v.eq_ignore_ascii_case("display") => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// State of one regression test.
///
/// Every check bumps `index`, so a failure message points at the exact
/// check that went wrong. Failures are collected rather than panicking;
/// the test asserts on [`RegParams::cleanup`] at the end.
pub struct RegParams {
    /// Name of the test (e.g., "matte")
    pub test_name: String,
    index: usize,
    pub mode: RegTestMode,
    failures: Vec<String>,
}

impl RegParams {
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();
        if mode == RegTestMode::Display {
            let _ = std::fs::create_dir_all(regout_dir());
        }
        eprintln!("---- {}_reg ({:?}) ----", test_name, mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            failures: Vec::new(),
        }
    }

    /// Number of checks run so far
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, what: String) {
        let msg = format!("{}_reg check {}: {}", self.test_name, self.index, what);
        eprintln!("{}", msg);
        self.failures.push(msg);
    }

    /// Check that `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if diff <= delta {
            return true;
        }
        self.fail(format!(
            "expected {expected}, got {actual} (diff {diff} > delta {delta})"
        ));
        false
    }

    /// Check that two images have the same size and identical pixels.
    ///
    /// On mismatch the first differing pixel is reported as `#RRGGBBAA`
    /// together with the total number of differing pixels. In display mode
    /// `actual` is saved whatever the outcome.
    pub fn compare_pix(&mut self, expected: &Pix, actual: &Pix) -> bool {
        self.index += 1;

        if self.display()
            && let Err(e) = self.write_regout(actual)
        {
            eprintln!("{}", e);
        }

        if expected.dimensions() != actual.dimensions() {
            self.fail(format!(
                "size {:?} differs from expected {:?}",
                actual.dimensions(),
                expected.dimensions()
            ));
            return false;
        }

        let width = expected.width() as usize;
        let mut mismatches = expected
            .data()
            .iter()
            .zip(actual.data())
            .enumerate()
            .filter(|(_, (e, a))| e != a);
        let Some((first, (&e, &a))) = mismatches.next() else {
            return true;
        };
        let total = 1 + mismatches.count();
        self.fail(format!(
            "{} pixel(s) differ, first at ({}, {}): expected {}, got {}",
            total,
            first % width,
            first / width,
            Rgba::from_pixel(e),
            Rgba::from_pixel(a)
        ));
        false
    }

    /// Save `pix` as `<regout>/<test>.<index>.png`.
    fn write_regout(&self, pix: &Pix) -> TestResult<()> {
        let path = PathBuf::from(format!(
            "{}/{}.{:02}.png",
            regout_dir(),
            self.test_name,
            self.index
        ));
        chromakey_io::write_image(pix, &path)
            .map_err(|source| TestError::RegoutWrite { path, source })
    }

    /// Print the summary and return whether every check passed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("ok: {}_reg ({} checks)", self.test_name, self.index);
            return true;
        }
        eprintln!(
            "FAILED: {}_reg ({} of {} checks)",
            self.test_name,
            self.failures.len(),
            self.index
        );
        for failure in &self.failures {
            eprintln!("  {}", failure);
        }
        false
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
