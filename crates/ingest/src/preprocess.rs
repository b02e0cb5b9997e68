//! The preprocessing pipeline: extract → chunk → batch → aggregate.

use std::path::Path;

use finjudge_core::PreprocessError;
use serde::Serialize;
use tracing::info;

use crate::batch::{batch_chunks, Batch};
use crate::document::chunker::{chunk_pages, ChunkConfig};
use crate::document::extract_pages;

/// Tunables for a single preprocessing request.
#[derive(Debug, Clone)]
pub struct PreprocessOptions {
    /// Maximum chunks per transmission batch (default: 150).
    pub batch_size: usize,
    /// Maximum characters per chunk (default: 1500).
    pub max_chunk_size: usize,
    /// Characters of overlap between adjacent chunks (default: 200).
    pub overlap_size: usize,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            batch_size: 150,
            max_chunk_size: 1500,
            overlap_size: 200,
        }
    }
}

/// Document-level totals for one preprocessing request.
///
/// `total_characters` sums per-chunk counts, so overlapped regions are
/// counted once per chunk that carries them. Downstream consumers depend
/// on this sum.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_characters: usize,
    pub chunks_processed: usize,
    pub batches_sent: usize,
}

/// Aggregated result of preprocessing one PDF report.
#[derive(Debug, Clone, Serialize)]
pub struct PreprocessResult {
    pub success: bool,
    pub preprocessed: bool,
    pub file_name: String,
    pub company_ticker: String,
    pub report_type: String,
    pub total_chunks: usize,
    pub total_batches: usize,
    pub batch_size: usize,
    pub batch_results: Vec<Batch>,
    pub summary: Summary,
}

/// Preprocess one PDF report into chunk batches.
///
/// Fails fast with `NotFound` before any extraction is attempted, and with
/// `Configuration` before any work when the options are invalid.
pub fn preprocess_file(
    path: &Path,
    company_ticker: &str,
    report_type: &str,
    options: &PreprocessOptions,
) -> Result<PreprocessResult, PreprocessError> {
    validate(options)?;

    if !path.exists() {
        return Err(PreprocessError::NotFound(path.to_path_buf()));
    }

    info!(
        "Preprocessing {} for {} ({})",
        path.display(),
        company_ticker,
        report_type
    );

    let pages = extract_pages(path)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    preprocess_pages(&pages, &file_name, company_ticker, report_type, options)
}

/// Chunk and batch already-extracted pages.
///
/// Split out from [`preprocess_file`] so the aggregation is exercisable
/// without a PDF fixture.
pub fn preprocess_pages(
    pages: &[String],
    file_name: &str,
    company_ticker: &str,
    report_type: &str,
    options: &PreprocessOptions,
) -> Result<PreprocessResult, PreprocessError> {
    validate(options)?;

    let chunk_config = ChunkConfig {
        max_chunk_size: options.max_chunk_size,
        overlap_size: options.overlap_size,
    };
    let chunks = chunk_pages(pages, &chunk_config);
    let total_chunks = chunks.len();
    let total_characters: usize = chunks.iter().map(|c| c.char_count).sum();

    let batch_results = batch_chunks(&chunks, options.batch_size)?;
    let total_batches = batch_results.len();

    info!(
        "Split '{}' into {} chunks across {} batches (max size: {} chars)",
        file_name, total_chunks, total_batches, options.max_chunk_size
    );

    Ok(PreprocessResult {
        success: true,
        preprocessed: true,
        file_name: file_name.to_string(),
        company_ticker: company_ticker.to_string(),
        report_type: report_type.to_string(),
        total_chunks,
        total_batches,
        batch_size: options.batch_size,
        batch_results,
        summary: Summary {
            total_characters,
            chunks_processed: total_chunks,
            batches_sent: total_batches,
        },
    })
}

fn validate(options: &PreprocessOptions) -> Result<(), PreprocessError> {
    if options.max_chunk_size == 0 {
        return Err(PreprocessError::Configuration(
            "max_chunk_size must be greater than zero".to_string(),
        ));
    }
    if options.batch_size == 0 {
        return Err(PreprocessError::Configuration(
            "batch_size must be greater than zero".to_string(),
        ));
    }
    if options.overlap_size >= options.max_chunk_size {
        return Err(PreprocessError::Configuration(format!(
            "overlap_size ({}) must be smaller than max_chunk_size ({})",
            options.overlap_size, options.max_chunk_size
        )));
    }
    Ok(())
}
