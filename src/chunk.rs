//! The Chunk type: a span of text with position and provenance metadata.

/// A chunk of text with its position in the original document.
///
/// Every chunk is a *contiguous* slice of the source text. Even when the
/// chunker merges several segments and re-inserts separators between them,
/// the result is contiguous in the original, so the invariant
/// `chunk.text == &text[chunk.start..chunk.end]` always holds.
///
/// ## Byte Offsets
///
/// `start` and `end` are byte offsets into the original text, not character
/// indices. This matches Rust's string slicing semantics:
///
/// ```rust
/// use strata::Chunk;
///
/// let text = "Hello, world!";
/// let chunk = Chunk::new("world", 7, 12, 0);
///
/// // The offsets let you recover the original position
/// assert_eq!(&text[chunk.start..chunk.end], "world");
/// ```
///
/// ## Overlap Handling
///
/// When chunks overlap, adjacent chunks share some text. The `index` field
/// identifies each chunk's position in the sequence:
///
/// ```text
/// Original: "one two three four"
/// Chunk 0:  "one two"     [0..7]
/// Chunk 1:  "two three"   [4..13]  <- overlaps with chunk 0
///               ^
///           overlap region [4..7]
/// ```
///
/// ## Provenance
///
/// `level` records which separator in the hierarchy produced this chunk
/// (0 = coarsest). `oversized` marks a chunk that could not be split below
/// the size limit even at the finest separator — the documented fallback,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk text.
    pub text: String,
    /// Byte offset where this chunk starts in the original document.
    pub start: usize,
    /// Byte offset where this chunk ends (exclusive) in the original document.
    pub end: usize,
    /// Zero-based index of this chunk in the sequence.
    pub index: usize,
    /// Index into the separator hierarchy at which this chunk was emitted.
    pub level: usize,
    /// True if this chunk exceeds the configured maximum because it was
    /// indivisible at every separator level.
    pub oversized: bool,
}

impl Chunk {
    /// Create a new chunk at separator level 0, not oversized.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
            level: 0,
            oversized: false,
        }
    }

    /// The length of this chunk in bytes.
    ///
    /// Note this is the raw byte length, independent of whatever
    /// [`SizeMeasure`](crate::SizeMeasure) the producing chunker used.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The byte span of this chunk in the original document.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ index: {}, span: {}..{}, level: {}{} }}",
            self.index,
            self.start,
            self.end,
            self.level,
            if self.oversized { ", oversized" } else { "" }
        )
    }
}
