//! Fixed-size batching of chunk sequences for downstream transmission.
//!
//! Batches are a transport grouping only: computed per request, never
//! persisted.

use finjudge_core::PreprocessError;
use serde::Serialize;

use crate::document::chunker::Chunk;

/// Reduced per-chunk view exposed in batch payloads.
#[derive(Debug, Clone, Serialize)]
pub struct ChunkPayload {
    pub chunk_index: usize,
    pub chunk_text: String,
    pub total_chunks: usize,
    pub is_last_chunk: bool,
    pub chunk_char_count: usize,
    pub page_index: usize,
}

impl From<&Chunk> for ChunkPayload {
    fn from(chunk: &Chunk) -> Self {
        Self {
            chunk_index: chunk.chunk_index,
            chunk_text: chunk.text.clone(),
            total_chunks: chunk.total_chunks,
            is_last_chunk: chunk.is_last,
            chunk_char_count: chunk.char_count,
            page_index: chunk.page_index,
        }
    }
}

/// A contiguous group of at most `batch_size` chunks.
#[derive(Debug, Clone, Serialize)]
pub struct Batch {
    pub batch_index: usize,
    pub batch_size: usize,
    pub chunk_count: usize,
    pub is_last_batch: bool,
    pub chunks: Vec<ChunkPayload>,
}

/// Partition `chunks` into contiguous batches of at most `batch_size`,
/// preserving chunk order within and across batches.
pub fn batch_chunks(chunks: &[Chunk], batch_size: usize) -> Result<Vec<Batch>, PreprocessError> {
    if batch_size == 0 {
        return Err(PreprocessError::Configuration(
            "batch_size must be greater than zero".to_string(),
        ));
    }

    let total_batches = chunks.len().div_ceil(batch_size);
    Ok(chunks
        .chunks(batch_size)
        .enumerate()
        .map(|(batch_index, slice)| Batch {
            batch_index,
            batch_size,
            chunk_count: slice.len(),
            is_last_batch: batch_index == total_batches - 1,
            chunks: slice.iter().map(ChunkPayload::from).collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_chunks(count: usize) -> Vec<Chunk> {
        (0..count)
            .map(|i| Chunk {
                chunk_index: i,
                text: format!("chunk {i}"),
                char_count: 7,
                total_chunks: count,
                is_last: i == count - 1,
                page_index: 1,
            })
            .collect()
    }

    #[test]
    fn partitions_into_fixed_size_batches() {
        let chunks = make_chunks(7);
        let batches = batch_chunks(&chunks, 3).unwrap();

        assert_eq!(batches.len(), 3);
        let counts: Vec<usize> = batches.iter().map(|b| b.chunk_count).collect();
        assert_eq!(counts, vec![3, 3, 1]);
        assert!(!batches[0].is_last_batch);
        assert!(!batches[1].is_last_batch);
        assert!(batches[2].is_last_batch);
    }

    #[test]
    fn preserves_chunk_order_across_batches() {
        let chunks = make_chunks(5);
        let batches = batch_chunks(&chunks, 2).unwrap();

        let indices: Vec<usize> = batches
            .iter()
            .flat_map(|b| b.chunks.iter().map(|c| c.chunk_index))
            .collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let chunks = make_chunks(3);
        let err = batch_chunks(&chunks, 0).unwrap_err();
        assert!(matches!(err, PreprocessError::Configuration(_)));
    }

    #[test]
    fn no_chunks_means_no_batches() {
        let batches = batch_chunks(&[], 10).unwrap();
        assert!(batches.is_empty());
    }

    #[test]
    fn payload_mirrors_chunk_metadata() {
        let chunks = make_chunks(2);
        let batches = batch_chunks(&chunks, 10).unwrap();

        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].batch_size, 10);
        let last = &batches[0].chunks[1];
        assert_eq!(last.chunk_text, "chunk 1");
        assert_eq!(last.chunk_char_count, 7);
        assert!(last.is_last_chunk);
        assert_eq!(last.page_index, 1);
    }
}
