//! PDF preprocessing endpoint.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::error;

use finjudge_core::PreprocessError;
use finjudge_ingest::{preprocess_file, PreprocessOptions, PreprocessResult};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct PreprocessRequest {
    /// Tickers to process; each maps to a directory of report PDFs.
    pub company_tickers: Vec<String>,
    /// Report type per ticker (10-K, 10-Q, ...), parallel to `company_tickers`.
    pub report_types: Vec<String>,
    pub batch_size: Option<usize>,
    pub max_chunk_size: Option<usize>,
    pub overlap_size: Option<usize>,
}

// ── POST /pdf/preprocess ──────────────────────────────────────────

/// Preprocess every report PDF for the requested tickers and return the
/// chunk batches each one produced.
pub async fn preprocess_pdf(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PreprocessRequest>,
) -> Result<Json<Vec<PreprocessResult>>, (StatusCode, String)> {
    if req.company_tickers.len() != req.report_types.len() {
        return Err((
            StatusCode::BAD_REQUEST,
            "company_tickers and report_types must have the same length".to_string(),
        ));
    }

    let defaults = &state.config.preprocess;
    let options = PreprocessOptions {
        batch_size: req.batch_size.unwrap_or(defaults.batch_size),
        max_chunk_size: req.max_chunk_size.unwrap_or(defaults.max_chunk_size),
        overlap_size: req.overlap_size.unwrap_or(defaults.overlap_size),
    };

    let mut results = Vec::new();
    for (ticker, report_type) in req.company_tickers.iter().zip(&req.report_types) {
        let company_dir = state.config.storage.company_data_dir.join(ticker);
        for path in list_report_files(&company_dir).map_err(map_error)? {
            let result = preprocess_file(&path, ticker, report_type, &options).map_err(map_error)?;
            results.push(result);
        }
    }

    Ok(Json(results))
}

/// Report files under a ticker directory, sorted for stable response order.
fn list_report_files(dir: &Path) -> Result<Vec<PathBuf>, PreprocessError> {
    if !dir.exists() {
        return Err(PreprocessError::NotFound(dir.to_path_buf()));
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// NotFound maps to 404; everything else surfaces as a 500.
fn map_error(err: PreprocessError) -> (StatusCode, String) {
    match err {
        PreprocessError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        other => {
            error!("Failed to preprocess PDF: {other}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to preprocess PDF".to_string(),
            )
        }
    }
}
