use std::fs;
use std::path::Path;

use finjudge_core::PreprocessError;
use tracing::{info, warn};

/// Extract text from a PDF file, one string per physical page.
///
/// pdf-extract returns the whole document as one string with form-feed
/// (`\x0C`) separators between pages. A page that yields no text keeps its
/// slot as an empty string so the page sequence stays aligned with the
/// physical document.
pub fn extract_pages(path: &Path) -> Result<Vec<String>, PreprocessError> {
    if !path.exists() {
        return Err(PreprocessError::NotFound(path.to_path_buf()));
    }

    info!("Extracting text from PDF: {}", path.display());

    let bytes = fs::read(path)?;
    let text = pdf_extract::extract_text_from_mem(&bytes)
        .map_err(|e| PreprocessError::Extraction(e.to_string()))?;

    let pages: Vec<String> = text
        .split('\x0C')
        .map(|page| page.trim().to_string())
        .collect();

    let empty_pages = pages.iter().filter(|p| p.is_empty()).count();
    if empty_pages > 0 {
        warn!(
            "{} of {} pages yielded no text (scanned or image-only pages)",
            empty_pages,
            pages.len()
        );
    }

    let total_chars: usize = pages.iter().map(|p| p.chars().count()).sum();
    info!(
        "Extracted {} characters from {} pages",
        total_chars,
        pages.len()
    );

    Ok(pages)
}
