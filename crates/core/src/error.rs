use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the preprocessing pipeline.
///
/// Per-page extraction degradation is not represented here: a page that
/// yields no text keeps its slot as an empty string and processing
/// continues.
#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("PDF file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
