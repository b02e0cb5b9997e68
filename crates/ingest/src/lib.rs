//! Document ingestion: PDF text extraction, page-aware chunking, and
//! batching for downstream transmission.

pub mod batch;
pub mod document;
pub mod preprocess;

pub use preprocess::{preprocess_file, PreprocessOptions, PreprocessResult};
