//! Pluggable chunk size measurement.
//!
//! ## Why Not Just Bytes?
//!
//! "Size" means different things downstream:
//!
//! - **Embedding models** budget in tokens
//! - **Display layers** budget in grapheme clusters
//! - **Storage** budgets in bytes
//!
//! A chunker that hardcodes one of these is wrong for the other two. The
//! [`SizeMeasure`] trait decouples the splitting algorithm from the unit it
//! budgets in. The default is character (Unicode scalar) count, which is a
//! reasonable proxy for token count (~4 chars/token for English) without
//! pulling in a tokenizer.
//!
//! ## Token Budgets
//!
//! For an exact token budget, plug in your tokenizer as a closure:
//!
//! ```rust
//! use strata::HierarchicalChunker;
//!
//! let chunker = HierarchicalChunker::new(128, 16, &[""])?
//!     .with_measure_fn(|s| s.split_whitespace().count()); // your tokenizer here
//! # Ok::<(), strata::ConfigError>(())
//! ```
//!
//! Note that measuring a span may cost more than O(1) (a tokenizer run), so
//! coarse separators that keep spans few and large are doubly worthwhile.

use unicode_segmentation::UnicodeSegmentation;

/// A measure of text size used to enforce the chunk budget.
///
/// Implementations must be deterministic: the same input always measures the
/// same. The chunker calls this on candidate spans during merging, so the
/// measure sees text exactly as it would appear in an emitted chunk,
/// separators included.
pub trait SizeMeasure: Send + Sync {
    /// The size of `text` in this measure's units.
    fn size(&self, text: &str) -> usize;
}

/// Count Unicode scalar values (`char`s). The default measure.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharCount;

impl SizeMeasure for CharCount {
    fn size(&self, text: &str) -> usize {
        text.chars().count()
    }
}

/// Count raw bytes. Cheapest measure; use when budgets are in bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteCount;

impl SizeMeasure for ByteCount {
    fn size(&self, text: &str) -> usize {
        text.len()
    }
}

/// Count extended grapheme clusters (UAX #29).
///
/// "Characters" as a reader perceives them: a flag emoji or a combining
/// sequence counts as one, even though it spans several `char`s.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphemeCount;

impl SizeMeasure for GraphemeCount {
    fn size(&self, text: &str) -> usize {
        text.graphemes(true).count()
    }
}

/// Adapter turning a closure into a measure. This is the hook for external
/// tokenizers; constructed via
/// [`HierarchicalChunker::with_measure_fn`](crate::HierarchicalChunker::with_measure_fn).
pub(crate) struct FnMeasure<F>(pub(crate) F);

impl<F> SizeMeasure for FnMeasure<F>
where
    F: Fn(&str) -> usize + Send + Sync,
{
    fn size(&self, text: &str) -> usize {
        (self.0)(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_multibyte() {
        assert_eq!(CharCount.size("日本語"), 3);
        assert_eq!(ByteCount.size("日本語"), 9);
    }

    #[test]
    fn test_grapheme_count_combining() {
        // 'e' + combining acute accent: two chars, one grapheme
        let text = "e\u{0301}";
        assert_eq!(CharCount.size(text), 2);
        assert_eq!(GraphemeCount.size(text), 1);
    }

    #[test]
    fn test_fn_measure() {
        let words = FnMeasure(|s: &str| s.split_whitespace().count());
        assert_eq!(words.size("one two three"), 3);
    }

    #[test]
    fn test_empty() {
        assert_eq!(CharCount.size(""), 0);
        assert_eq!(ByteCount.size(""), 0);
        assert_eq!(GraphemeCount.size(""), 0);
    }
}
