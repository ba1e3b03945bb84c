//! # strata
//!
//! Hierarchical text chunking for retrieval-augmented generation (RAG)
//! pipelines.
//!
//! ## The Problem
//!
//! Language models have context windows. Documents don't fit. You need to
//! split them into pieces ("chunks") small enough to embed and retrieve, but
//! large enough to preserve meaning.
//!
//! Splitting every N characters mangles content: sentences break mid-word,
//! paragraphs break mid-argument. Splitting only at "good" boundaries
//! produces chunks of wildly uneven size. The practical answer is a
//! *hierarchy* of boundaries, tried coarsest first, with a size budget
//! enforced at every level.
//!
//! ## The Core: Hierarchical Splitting
//!
//! [`HierarchicalChunker`] tries paragraph breaks first. Short paragraphs
//! are packed together up to the budget; a paragraph that is itself too
//! large falls through to line breaks, then word breaks, then characters:
//!
//! ```text
//! Separators: ["\n\n", "\n", " ", ""]
//!
//! 1. Split on "\n\n", greedily re-merge neighbors within max_size
//! 2. Any single paragraph > max_size? Split that one on "\n"
//! 3. Still too large? Split on " "
//! 4. Still too large? Split on "" (characters)
//! 5. Indivisible even then? Emit flagged `oversized` — never dropped
//! ```
//!
//! When a chunk fills up, the next one can be seeded with the tail of the
//! previous one (configurable overlap), so content at a cut point appears
//! with context on both sides.
//!
//! ## The Rest of the Family
//!
//! The other splitters here are the simple cousins the core subsumes:
//!
//! - [`DelimiterChunker`]: one separator, one pass, no merging. For
//!   record-structured input.
//! - **Token budgets**: not a separate type. Give [`HierarchicalChunker`]
//!   a tokenizer closure as its [`SizeMeasure`] and `[""]` as separators,
//!   and the budget is counted in tokens. The tokenizer stays yours.
//! - [`MarkdownHeaderSplitter`]: groups content under its heading trail
//!   (`# Guide > ## Install`) instead of cutting at a size budget, keeping
//!   each chunk's place in the document outline as metadata.
//!
//! ## Quick Start
//!
//! ```rust
//! use strata::{Chunker, HierarchicalChunker};
//!
//! let text = "The quick brown fox jumps over the lazy dog. \
//!             Pack my box with five dozen liquor jugs.";
//!
//! let chunker = HierarchicalChunker::prose(50, 10)?;
//! let chunks = chunker.chunk(text);
//!
//! for chunk in &chunks {
//!     // Offsets always point back into the original
//!     assert_eq!(&text[chunk.span()], chunk.text);
//! }
//! # Ok::<(), strata::ConfigError>(())
//! ```
//!
//! ## Guarantees
//!
//! - Chunking is pure and deterministic: same text, same config, same output.
//! - Chunks come out in document order, each a contiguous slice of the input
//!   with byte offsets attached.
//! - Every non-[`oversized`](Chunk::oversized) chunk fits `max_size` under
//!   the configured measure. Oversized chunks are emitted intact, never
//!   silently truncated.
//! - Bad configuration fails at construction with [`ConfigError`], before
//!   any text is processed. Chunking itself cannot fail.
//!
//! ## Cost
//!
//! | Splitter | Time | Memory |
//! |----------|------|--------|
//! | Hierarchical | O(n × levels) | O(n) |
//! | Delimiter | O(n) | O(n) |
//! | Markdown headers | O(n) | O(n) |
//!
//! Each separator level only re-scans segments still exceeding the budget,
//! so the hierarchical pass is amortized linear in practice. With a
//! tokenizer as the measure, measurement cost dominates.

mod chunk;
mod delimiter;
mod error;
mod hierarchical;
mod markdown;
mod measure;

pub use chunk::Chunk;
pub use delimiter::DelimiterChunker;
pub use error::{ConfigError, Result};
pub use hierarchical::{HierarchicalChunker, DEFAULT_SEPARATORS};
pub use markdown::{Heading, MarkdownHeaderSplitter, Section};
pub use measure::{ByteCount, CharCount, GraphemeCount, SizeMeasure};

/// A text chunking strategy.
///
/// Both size-budgeted chunkers implement this trait, enabling polymorphic
/// usage:
///
/// ```rust
/// use strata::{Chunker, DelimiterChunker, HierarchicalChunker};
///
/// fn chunk_document(chunker: &dyn Chunker, text: &str) -> Vec<strata::Chunk> {
///     chunker.chunk(text)
/// }
///
/// let hierarchical = HierarchicalChunker::prose(100, 20)?;
/// let delimiter = DelimiterChunker::paragraphs();
///
/// let text = "Hello world.\n\nThis is a test.";
/// let chunks1 = chunk_document(&hierarchical, text);
/// let chunks2 = chunk_document(&delimiter, text);
/// # Ok::<(), strata::ConfigError>(())
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into chunks.
    ///
    /// Each chunk is a [`Chunk`] containing the text and its byte offsets
    /// in the original document. Empty input yields an empty vec.
    fn chunk(&self, text: &str) -> Vec<Chunk>;

    /// Estimate the number of chunks for a given text length.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize {
        // Conservative default
        (text_len / 500).max(1)
    }
}
