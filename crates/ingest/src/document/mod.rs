//! Per-page text extraction from source documents.

pub mod chunker;
mod pdf;

pub use pdf::extract_pages;
