//! The splitting algorithm: window cutting, break-point search, overlap,
//! and page attribution via a parallel offset table.

use super::types::{Chunk, ChunkConfig};

/// Blank line inserted between consecutive pages in the combined text.
const PAGE_SEPARATOR: &str = "\n\n";

/// Byte offset at which a page begins in the combined text, paired with its
/// 1-based page number. Page 1 implicitly begins at offset 0 and is not
/// listed.
type PageBoundaries = Vec<(usize, usize)>;

/// Split per-page text into size-bounded chunks with page attribution.
///
/// Pages are joined with a blank-line separator while a parallel offset
/// table records where each page begins, so chunk spans can be mapped back
/// to pages without embedding sentinel text in the document.
pub fn chunk_pages(pages: &[String], config: &ChunkConfig) -> Vec<Chunk> {
    let (combined, boundaries) = combine_pages(pages);
    if combined.trim().is_empty() {
        return Vec::new();
    }

    // Short document: one chunk spanning the whole text, no splitting loop.
    if combined.len() <= config.max_chunk_size {
        let text = combined.trim().to_string();
        let char_count = text.chars().count();
        return vec![Chunk {
            chunk_index: 0,
            text,
            char_count,
            total_chunks: 1,
            is_last: true,
            page_index: 1,
        }];
    }

    let spans = split_spans(&combined, config);
    let total_chunks = spans.len();

    // Page attribution is an explicit fold: the first page boundary inside
    // a span advances the accumulator; spans without one inherit it.
    let mut current_page = 1usize;
    spans
        .into_iter()
        .enumerate()
        .map(|(chunk_index, span)| {
            if let Some(page) = first_page_in(&boundaries, span.start, span.end) {
                current_page = page;
            }
            let char_count = span.text.chars().count();
            Chunk {
                chunk_index,
                text: span.text,
                char_count,
                total_chunks,
                is_last: chunk_index == total_chunks - 1,
                page_index: current_page,
            }
        })
        .collect()
}

/// A trimmed chunk candidate together with the raw byte span it came from.
struct Span {
    start: usize,
    end: usize,
    text: String,
}

/// Join pages with the separator, recording where each page begins.
fn combine_pages(pages: &[String]) -> (String, PageBoundaries) {
    let separators = pages.len().saturating_sub(1) * PAGE_SEPARATOR.len();
    let mut combined =
        String::with_capacity(pages.iter().map(|p| p.len()).sum::<usize>() + separators);
    let mut boundaries = Vec::with_capacity(pages.len().saturating_sub(1));

    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            combined.push_str(PAGE_SEPARATOR);
            boundaries.push((combined.len(), i + 1));
        }
        combined.push_str(page);
    }
    (combined, boundaries)
}

/// Cut `[pos, pos + max_chunk_size)` windows until the text is consumed,
/// preferring natural break points and trimming each candidate. A candidate
/// that trims to nothing is dropped without consuming an index.
fn split_spans(text: &str, config: &ChunkConfig) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut pos = 0usize;
    let len = text.len();

    while pos < len {
        let mut window_end = floor_char_boundary(text, (pos + config.max_chunk_size).min(len));
        if window_end <= pos {
            // max_chunk_size smaller than one character: take it whole.
            window_end = ceil_char_boundary(text, pos + 1);
        }
        let chunk_end = if window_end < len {
            find_break(text, pos, window_end)
        } else {
            window_end
        };

        let candidate = text[pos..chunk_end].trim();
        if !candidate.is_empty() {
            spans.push(Span {
                start: pos,
                end: chunk_end,
                text: candidate.to_string(),
            });
        }

        // Overlap only when the consumed span is long enough to rewind into.
        let consumed = chunk_end - pos;
        let next = if consumed > config.overlap_size * 3 {
            floor_char_boundary(text, chunk_end - config.overlap_size)
        } else {
            chunk_end
        };
        pos = if next > pos { next } else { chunk_end };
    }
    spans
}

/// Search backward from the window edge for the best break point, trying
/// paragraph break, newline, sentence end, then single space. The break
/// must fall strictly after `start`; the matched separator stays with the
/// earlier chunk. Falls back to the window edge when nothing matches.
fn find_break(text: &str, start: usize, window_end: usize) -> usize {
    let window = &text[start..window_end];

    for pattern in ["\n\n", "\n", ". ", " "] {
        if let Some(found) = window.rfind(pattern) {
            if found > 0 {
                return start + found + pattern.len();
            }
        }
    }
    window_end
}

/// First page beginning inside `(start, end]`, found by binary search.
fn first_page_in(boundaries: &PageBoundaries, start: usize, end: usize) -> Option<usize> {
    let idx = boundaries.partition_point(|&(offset, _)| offset <= start);
    boundaries
        .get(idx)
        .filter(|&&(offset, _)| offset <= end)
        .map(|&(_, page)| page)
}

fn floor_char_boundary(text: &str, mut i: usize) -> usize {
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn ceil_char_boundary(text: &str, mut i: usize) -> usize {
    while i < text.len() && !text.is_char_boundary(i) {
        i += 1;
    }
    i
}
