//! Chunk configuration and output types.

use serde::Serialize;

// ── Configuration ───────────────────────────────────────────────────────────

/// Configuration for the chunking engine.
#[derive(Debug, Clone)]
pub struct ChunkConfig {
    /// Maximum characters per chunk (default: 1500).
    pub max_chunk_size: usize,
    /// Characters of overlap carried into the next chunk (default: 200).
    pub overlap_size: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: 1500,
            overlap_size: 200,
        }
    }
}

// ── Chunk output ────────────────────────────────────────────────────────────

/// A size-bounded span of document text with page attribution.
#[derive(Debug, Clone, Serialize)]
pub struct Chunk {
    /// 0-based position in the output sequence, dense and strictly increasing.
    pub chunk_index: usize,
    /// Chunk content, whitespace-trimmed, never empty.
    pub text: String,
    /// Number of Unicode scalar values in `text`.
    pub char_count: usize,
    /// Total chunks produced for this document.
    pub total_chunks: usize,
    /// True only on the final chunk.
    pub is_last: bool,
    /// 1-based page this chunk is attributed to. Carries forward: a chunk
    /// spanning a page boundary reports the first page that begins inside
    /// its span; a chunk with no boundary inherits the previous value.
    pub page_index: usize,
}
