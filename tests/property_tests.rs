//! Property-based tests for text chunking.
//!
//! These tests verify that chunking strategies maintain key invariants:
//! - Faithful: chunk text always equals the source slice at its offsets
//! - Ordered: chunks are in source order
//! - Bounded: non-oversized chunks respect the size budget
//! - Gap-clean: bytes between chunks are dropped separator material only

use proptest::prelude::*;
use strata::{Chunk, Chunker, DelimiterChunker, HierarchicalChunker};

// =============================================================================
// Test Generators
// =============================================================================

/// Generate a non-empty string for chunking
fn arbitrary_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{10,500}")
        .unwrap()
        .prop_filter("non-empty", |s| !s.is_empty())
}

/// Generate text with word/paragraph structure
fn prose_like_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::string::string_regex("[A-Za-z]{2,15}").unwrap(), 3..40).prop_map(
        |words| {
            let mut result = String::new();
            for (i, word) in words.iter().enumerate() {
                result.push_str(word);
                if i % 9 == 8 {
                    result.push_str("\n\n");
                } else {
                    result.push(' ');
                }
            }
            result
        },
    )
}

// =============================================================================
// Invariant Helpers
// =============================================================================

/// Check that chunks are in order
fn chunks_ordered(chunks: &[Chunk]) -> bool {
    chunks.windows(2).all(|w| w[0].start <= w[1].start)
}

/// Check that chunk bounds are valid and text matches the source
fn chunks_faithful(chunks: &[Chunk], text: &str) -> bool {
    chunks.iter().all(|c| {
        c.start < c.end && c.end <= text.len() && text.get(c.start..c.end) == Some(c.text.as_str())
    })
}

/// Check the size budget in chars for every non-oversized chunk
fn chunks_within_budget(chunks: &[Chunk], max_size: usize) -> bool {
    chunks
        .iter()
        .filter(|c| !c.oversized)
        .all(|c| c.text.chars().count() <= max_size)
}

/// Check that overlap between consecutive chunks stays within budget
fn overlap_within_budget(chunks: &[Chunk], text: &str, overlap: usize) -> bool {
    chunks.windows(2).all(|w| {
        if w[1].start < w[0].end {
            text[w[1].start..w[0].end].chars().count() <= overlap
        } else {
            true
        }
    })
}

/// Check that every byte between consecutive chunk spans (and before the
/// first / after the last) is dropped separator material: the gap must be
/// fully consumable by stripping configured separators from the front.
fn gaps_are_separators(chunks: &[Chunk], text: &str, separators: &[&str]) -> bool {
    if chunks.is_empty() {
        return true;
    }
    let mut gaps = Vec::new();
    gaps.push(&text[..chunks[0].start]);
    for w in chunks.windows(2) {
        if w[1].start >= w[0].end {
            gaps.push(&text[w[0].end..w[1].start]);
        }
    }
    gaps.push(&text[chunks.last().unwrap().end..]);

    gaps.iter().all(|gap| {
        let mut rest = *gap;
        'outer: while !rest.is_empty() {
            for sep in separators {
                if !sep.is_empty() {
                    if let Some(stripped) = rest.strip_prefix(sep) {
                        rest = stripped;
                        continue 'outer;
                    }
                }
            }
            return false;
        }
        true
    })
}

// =============================================================================
// HierarchicalChunker Tests
// =============================================================================

const SEPS: [&str; 4] = ["\n\n", "\n", " ", ""];

proptest! {
    #[test]
    fn hierarchical_chunks_ordered(text in arbitrary_text()) {
        let chunker = HierarchicalChunker::new(100, 20, &SEPS).unwrap();
        prop_assert!(chunks_ordered(&chunker.chunk(&text)));
    }

    #[test]
    fn hierarchical_faithful(text in arbitrary_text()) {
        let chunker = HierarchicalChunker::new(100, 20, &SEPS).unwrap();
        prop_assert!(chunks_faithful(&chunker.chunk(&text), &text));
    }

    #[test]
    fn hierarchical_respects_budget(
        text in arbitrary_text(),
        max_size in 5usize..200,
    ) {
        let chunker = HierarchicalChunker::new(max_size, 0, &SEPS).unwrap();
        let chunks = chunker.chunk(&text);
        // With a "" fallback, only a single char measuring over budget could
        // be oversized, which cannot happen under CharCount with max >= 1.
        prop_assert!(chunks.iter().all(|c| !c.oversized));
        prop_assert!(chunks_within_budget(&chunks, max_size));
    }

    #[test]
    fn hierarchical_overlap_bounded(
        text in prose_like_text(),
        max_size in 10usize..100,
        overlap in 0usize..9,
    ) {
        let chunker = HierarchicalChunker::new(max_size, overlap, &SEPS).unwrap();
        let chunks = chunker.chunk(&text);
        prop_assert!(overlap_within_budget(&chunks, &text, overlap));
    }

    #[test]
    fn hierarchical_gaps_are_separators(text in prose_like_text()) {
        let chunker = HierarchicalChunker::new(40, 0, &SEPS).unwrap();
        let chunks = chunker.chunk(&text);
        prop_assert!(gaps_are_separators(&chunks, &text, &SEPS));
    }

    #[test]
    fn hierarchical_deterministic(text in arbitrary_text()) {
        let chunker = HierarchicalChunker::new(80, 15, &SEPS).unwrap();
        prop_assert_eq!(chunker.chunk(&text), chunker.chunk(&text));
    }

    #[test]
    fn hierarchical_covers_all_non_separator_bytes(text in prose_like_text()) {
        let chunker = HierarchicalChunker::new(30, 5, &SEPS).unwrap();
        let chunks = chunker.chunk(&text);

        let mut covered = vec![false; text.len()];
        for chunk in &chunks {
            for flag in &mut covered[chunk.start..chunk.end] {
                *flag = true;
            }
        }
        // Anything uncovered must be separator material (space or newline here)
        for (i, covered) in covered.iter().enumerate() {
            if !covered {
                let b = text.as_bytes()[i];
                prop_assert!(b == b' ' || b == b'\n', "dropped non-separator byte at {i}");
            }
        }
    }
}

// =============================================================================
// DelimiterChunker Tests
// =============================================================================

proptest! {
    #[test]
    fn delimiter_chunks_ordered(text in arbitrary_text()) {
        let chunker = DelimiterChunker::lines();
        prop_assert!(chunks_ordered(&chunker.chunk(&text)));
    }

    #[test]
    fn delimiter_faithful(text in arbitrary_text()) {
        let chunker = DelimiterChunker::lines();
        prop_assert!(chunks_faithful(&chunker.chunk(&text), &text));
    }

    #[test]
    fn delimiter_gaps_are_separators(text in prose_like_text()) {
        let chunker = DelimiterChunker::lines();
        let chunks = chunker.chunk(&text);
        prop_assert!(gaps_are_separators(&chunks, &text, &["\n"]));
    }

    #[test]
    fn delimiter_chunks_contain_no_separator(text in prose_like_text()) {
        let chunker = DelimiterChunker::lines();
        for chunk in chunker.chunk(&text) {
            prop_assert!(!chunk.text.contains('\n'));
        }
    }
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn empty_input_produces_empty_output() {
    let hierarchical = HierarchicalChunker::prose(100, 10).unwrap();
    assert!(hierarchical.chunk("").is_empty());

    let delimiter = DelimiterChunker::paragraphs();
    assert!(delimiter.chunk("").is_empty());
}

#[test]
fn single_word_input() {
    let chunker = HierarchicalChunker::prose(50, 10).unwrap();
    let chunks = chunker.chunk("hello");
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, "hello");
}

#[test]
fn very_long_word() {
    let text = "a".repeat(1000);

    let chunker = HierarchicalChunker::new(100, 0, &["\n\n", " ", ""]).unwrap();
    let chunks = chunker.chunk(&text);

    assert_eq!(chunks.len(), 10);
    assert!(chunks.iter().all(|c| c.text.len() == 100 && !c.oversized));
}

#[test]
fn unicode_handling() {
    let text = "Hello 世界! Привет мир! مرحبا بالعالم";

    let chunker = HierarchicalChunker::new(8, 2, &[" ", ""]).unwrap();
    let chunks = chunker.chunk(text);

    // Offsets must land on char boundaries and round-trip through the source
    for chunk in &chunks {
        assert_eq!(&text[chunk.start..chunk.end], chunk.text);
        assert!(chunk.text.chars().count() <= 8);
    }
}

#[test]
fn whitespace_only_input() {
    let chunker = HierarchicalChunker::new(4, 0, &["\n\n", " ", ""]).unwrap();
    let chunks = chunker.chunk("  \n\n  ");

    // Whatever is emitted must be faithful to the source
    for chunk in &chunks {
        assert_eq!(&"  \n\n  "[chunk.span()], chunk.text);
    }
}
