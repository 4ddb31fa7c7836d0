//! Error types for the test framework

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while recording regression output
#[derive(Debug, Error)]
pub enum TestError {
    /// A display-mode image could not be saved
    #[error("failed to write regout image {}: {source}", path.display())]
    RegoutWrite {
        path: PathBuf,
        #[source]
        source: chromakey_io::IoError,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
