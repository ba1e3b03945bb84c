//! Hierarchical separator-fallback splitting with overlap.
//!
//! ## The Algorithm
//!
//! Given separators `["\n\n", "\n", " ", ""]` and a max size of 100:
//!
//! ```text
//! 1. Split on "\n\n" (paragraphs)
//! 2. Greedily merge adjacent paragraphs back together while the merged
//!    span stays within 100
//! 3. Any single paragraph > 100? Split *that paragraph* on "\n" (lines),
//!    merge lines the same way
//! 4. Still > 100? Split on " " (words)
//! 5. Still > 100? Split on "" (characters)
//! 6. A single character still > 100 in the configured measure? Emit it
//!    flagged `oversized` — the documented fallback, not an error
//! ```
//!
//! The merge step is what distinguishes this from naive recursive splitting:
//! short paragraphs are packed together (separator re-inserted between them)
//! instead of each becoming a tiny chunk.
//!
//! ## Overlap
//!
//! When a merged chunk fills up and is emitted, the next chunk is seeded
//! with the trailing segments of the emitted one, as many as fit within the
//! overlap budget:
//!
//! ```text
//! "one two three four", sep " ", max 9, overlap 4
//!
//! Chunk 0: "one two"     <- "three" would make it 13
//! Chunk 1: "two three"   <- seeded with "two" (3 <= 4), then continues
//! Chunk 2: "four"        <- "three" alone is 5 > 4, so no seed here
//! ```
//!
//! Overlap material is always a contiguous suffix of the previous chunk,
//! pulled back in whole segments. It is never synthesized across a point
//! where an oversized segment forced a descent to a finer separator.
//!
//! ## Why Recursive?
//!
//! Different content types break at different granularities. The hierarchy
//! preserves structure at the highest level possible: a paragraph boundary
//! is better than a line boundary, which is better than a word boundary.
//!
//! ## Offsets
//!
//! Every emitted chunk is a contiguous slice of the input, so offsets are
//! threaded through the split rather than recovered by searching afterwards.
//! The separators dropped *between* chunks are exactly the bytes in the gap
//! between one chunk's `end` and the next chunk's `start`.

use std::ops::Range;
use std::sync::Arc;

use crate::measure::FnMeasure;
use crate::{CharCount, Chunk, Chunker, ConfigError, SizeMeasure};

/// Default separator hierarchy for prose: paragraphs, lines, words, characters.
pub const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

/// Hierarchical chunker with greedy merging and overlap seeding.
///
/// Splits text using a hierarchy of separators, coarsest first, packing
/// adjacent segments up to a size budget and descending to finer separators
/// only for segments that are individually too large.
///
/// ## Example
///
/// ```rust
/// use strata::{Chunker, HierarchicalChunker};
///
/// let chunker = HierarchicalChunker::prose(50, 10)?;
/// let text = "Paragraph one.\n\nParagraph two is longer and might need splitting.";
/// let chunks = chunker.chunk(text);
/// # Ok::<(), strata::ConfigError>(())
/// ```
///
/// Size is measured by a pluggable [`SizeMeasure`], character count by
/// default. With `separators = [""]` and a tokenizer closure as the measure,
/// this becomes a token-budget splitter.
#[derive(Clone)]
pub struct HierarchicalChunker {
    max_size: usize,
    overlap: usize,
    separators: Vec<String>,
    measure: Arc<dyn SizeMeasure>,
}

impl std::fmt::Debug for HierarchicalChunker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HierarchicalChunker")
            .field("max_size", &self.max_size)
            .field("overlap", &self.overlap)
            .field("separators", &self.separators)
            .finish_non_exhaustive()
    }
}

impl HierarchicalChunker {
    /// Create a new hierarchical chunker.
    ///
    /// # Arguments
    ///
    /// * `max_size` - Maximum chunk size, in the configured measure's units
    /// * `overlap` - Size budget for overlap seeding between adjacent chunks
    /// * `separators` - Hierarchy of separators, coarsest first; `""` means
    ///   character-level fallback
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `max_size == 0`, `overlap >= max_size`,
    /// or `separators` is empty. Validation happens here, before any text
    /// is touched.
    pub fn new(max_size: usize, overlap: usize, separators: &[&str]) -> Result<Self, ConfigError> {
        if max_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if overlap >= max_size {
            return Err(ConfigError::OverlapExceedsSize {
                size: max_size,
                overlap,
            });
        }
        if separators.is_empty() {
            return Err(ConfigError::EmptySeparators);
        }

        Ok(Self {
            max_size,
            overlap,
            separators: separators.iter().map(|&s| s.to_string()).collect(),
            measure: Arc::new(CharCount),
        })
    }

    /// Create a chunker with the default separator hierarchy for prose.
    ///
    /// # Errors
    ///
    /// Same validation as [`HierarchicalChunker::new`].
    pub fn prose(max_size: usize, overlap: usize) -> Result<Self, ConfigError> {
        Self::new(max_size, overlap, &DEFAULT_SEPARATORS)
    }

    /// Create a chunker with default separators for Markdown.
    ///
    /// # Errors
    ///
    /// Same validation as [`HierarchicalChunker::new`].
    pub fn markdown(max_size: usize, overlap: usize) -> Result<Self, ConfigError> {
        Self::new(
            max_size,
            overlap,
            &["\n## ", "\n### ", "\n\n", "\n", " ", ""],
        )
    }

    /// Replace the size measure. The default is [`CharCount`].
    #[must_use]
    pub fn with_measure(mut self, measure: impl SizeMeasure + 'static) -> Self {
        self.measure = Arc::new(measure);
        self
    }

    /// Use a closure as the size measure. This is how an external tokenizer
    /// plugs in:
    ///
    /// ```rust
    /// use strata::HierarchicalChunker;
    ///
    /// let chunker = HierarchicalChunker::new(128, 16, &[""])?
    ///     .with_measure_fn(|s| s.split_whitespace().count());
    /// # Ok::<(), strata::ConfigError>(())
    /// ```
    #[must_use]
    pub fn with_measure_fn<F>(self, measure: F) -> Self
    where
        F: Fn(&str) -> usize + Send + Sync + 'static,
    {
        self.with_measure(FnMeasure(measure))
    }

    /// The configured maximum chunk size.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// The configured overlap budget.
    #[must_use]
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    fn size(&self, text: &str, span: Range<usize>) -> usize {
        self.measure.size(&text[span])
    }

    fn emit(&self, text: &str, span: Range<usize>, level: usize, oversized: bool, out: &mut Vec<Chunk>) {
        debug_assert!(span.start < span.end);
        out.push(Chunk {
            text: text[span.clone()].to_string(),
            start: span.start,
            end: span.end,
            index: 0, // assigned after the full pass
            level,
            oversized,
        });
    }

    /// Split one span at the given separator level, appending chunks in
    /// document order. Recursion depth is bounded by `separators.len()`.
    fn split_span(&self, text: &str, span: Range<usize>, level: usize, out: &mut Vec<Chunk>) {
        if span.is_empty() {
            return;
        }
        if self.size(text, span.clone()) <= self.max_size {
            self.emit(text, span, level.min(self.separators.len() - 1), false, out);
            return;
        }
        let Some(sep) = self.separators.get(level) else {
            // Finest level already tried: indivisible, emit as-is.
            self.emit(text, span, self.separators.len() - 1, true, out);
            return;
        };

        if !sep.is_empty() && !text[span.clone()].contains(sep.as_str()) {
            // Zero occurrences: pass through to the next separator.
            self.split_span(text, span, level + 1, out);
            return;
        }

        let segments = segment_spans(text, span, sep);
        self.merge_segments(text, &segments, level, out);
    }

    /// Greedily merge segments into chunks within the size budget, seeding
    /// overlap from the tail of each emitted chunk.
    fn merge_segments(&self, text: &str, segments: &[Range<usize>], level: usize, out: &mut Vec<Chunk>) {
        // Segments merged into the working chunk, kept for overlap pull-back.
        let mut merged: Vec<Range<usize>> = Vec::new();

        for seg in segments {
            if self.size(text, seg.clone()) > self.max_size {
                // Indivisible at this level: flush, then descend. No overlap
                // is seeded across this boundary.
                if let Some(span) = working_span(&merged) {
                    self.emit(text, span, level, false, out);
                    merged.clear();
                }
                self.split_span(text, seg.clone(), level + 1, out);
                continue;
            }

            let Some(span) = working_span(&merged) else {
                merged.push(seg.clone());
                continue;
            };

            // Candidate includes the separator(s) between span.end and
            // seg.start by contiguity.
            if self.size(text, span.start..seg.end) <= self.max_size {
                merged.push(seg.clone());
                continue;
            }

            self.emit(text, span.clone(), level, false, out);
            let mut next: Vec<Range<usize>> = Vec::new();
            if self.overlap > 0 {
                // Pull back trailing whole segments of the emitted chunk
                // while they fit the overlap budget and the seeded chunk
                // stays within max_size.
                for prev in merged.iter().rev() {
                    let tail = self.size(text, prev.start..span.end);
                    let seeded = self.size(text, prev.start..seg.end);
                    if tail <= self.overlap && seeded <= self.max_size {
                        next.push(prev.clone());
                    } else {
                        break;
                    }
                }
                next.reverse();
            }
            next.push(seg.clone());
            merged = next;
        }

        if let Some(span) = working_span(&merged) {
            self.emit(text, span, level, false, out);
        }
    }
}

impl Chunker for HierarchicalChunker {
    fn chunk(&self, text: &str) -> Vec<Chunk> {
        if text.is_empty() {
            return vec![];
        }

        let mut chunks = Vec::new();
        self.split_span(text, 0..text.len(), 0, &mut chunks);

        for (index, chunk) in chunks.iter_mut().enumerate() {
            chunk.index = index;
        }
        chunks
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        (text_len / self.max_size).max(1)
    }
}

/// The contiguous span covered by the merged segments, if any.
fn working_span(merged: &[Range<usize>]) -> Option<Range<usize>> {
    match (merged.first(), merged.last()) {
        (Some(first), Some(last)) => Some(first.start..last.end),
        _ => None,
    }
}

/// Split a span into segment spans by literal separator occurrence.
///
/// Empty segments (adjacent separators, or separators at the span edges) are
/// skipped; the bytes they would cover reappear as gaps between chunk spans.
/// The empty separator degenerates to per-character segments.
fn segment_spans(text: &str, span: Range<usize>, sep: &str) -> Vec<Range<usize>> {
    let slice = &text[span.clone()];

    if sep.is_empty() {
        return slice
            .char_indices()
            .map(|(i, c)| span.start + i..span.start + i + c.len_utf8())
            .collect();
    }

    let mut spans = Vec::new();
    let mut cursor = 0;
    for (pos, _) in slice.match_indices(sep) {
        if pos > cursor {
            spans.push(span.start + cursor..span.start + pos);
        }
        cursor = pos + sep.len();
    }
    if cursor < slice.len() {
        spans.push(span.start + cursor..span.start + slice.len());
    }
    spans
}
