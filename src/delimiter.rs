//! Single-delimiter splitting.
//!
//! The degenerate case of hierarchical splitting: one separator, run once,
//! no merging and no overlap. Every inter-separator segment becomes one
//! chunk, whatever its size.
//!
//! **When to use**: record-structured input where the delimiter is the
//! record boundary (log lines, `\n\n`-separated transcript turns, CSV-ish
//! exports). There is no size budget here; if chunks must also fit a
//! budget, use [`HierarchicalChunker`](crate::HierarchicalChunker) instead.

use crate::{Chunk, Chunker};

/// Splits on a single literal separator, one segment per chunk.
///
/// ## Example
///
/// ```rust
/// use strata::{Chunker, DelimiterChunker};
///
/// let chunker = DelimiterChunker::new("\n\n");
/// let chunks = chunker.chunk("First paragraph.\n\nSecond paragraph.");
///
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].text, "First paragraph.");
/// assert_eq!(chunks[1].start, 18);
/// ```
#[derive(Debug, Clone)]
pub struct DelimiterChunker {
    separator: String,
}

impl DelimiterChunker {
    /// Create a new delimiter chunker.
    ///
    /// An empty separator degenerates to one chunk per character.
    #[must_use]
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Create a chunker that splits on blank lines.
    #[must_use]
    pub fn paragraphs() -> Self {
        Self::new("\n\n")
    }

    /// Create a chunker that splits on line breaks.
    #[must_use]
    pub fn lines() -> Self {
        Self::new("\n")
    }
}

impl Chunker for DelimiterChunker {
    fn chunk(&self, text: &str) -> Vec<Chunk> {
        if text.is_empty() {
            return vec![];
        }

        if self.separator.is_empty() {
            return text
                .char_indices()
                .enumerate()
                .map(|(index, (start, c))| {
                    Chunk::new(c.to_string(), start, start + c.len_utf8(), index)
                })
                .collect();
        }

        let mut chunks = Vec::new();
        let mut cursor = 0;
        let push = |start: usize, end: usize, chunks: &mut Vec<Chunk>| {
            if end > start {
                let index = chunks.len();
                chunks.push(Chunk::new(&text[start..end], start, end, index));
            }
        };

        for (pos, _) in text.match_indices(self.separator.as_str()) {
            push(cursor, pos, &mut chunks);
            cursor = pos + self.separator.len();
        }
        push(cursor, text.len(), &mut chunks);

        chunks
    }
}
