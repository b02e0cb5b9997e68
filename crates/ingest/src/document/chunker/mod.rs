//! Page-aware chunking engine.
//!
//! Splits per-page document text into size-bounded, overlapping chunks
//! while tracking which page each chunk lands on.

mod splitter;
mod types;

pub use splitter::chunk_pages;
pub use types::{Chunk, ChunkConfig};
