//! Chunking Strategy Comparison
//!
//! Runs the same document through each splitter to show how their
//! boundaries differ.
//!
//! ```bash
//! cargo run --example chunking_strategies
//! ```

use strata::{Chunker, DelimiterChunker, HierarchicalChunker, MarkdownHeaderSplitter};

const DOCUMENT: &str = "\
# Retrieval Basics

Chunking decides what a retrieval system can find. A chunk that mixes two
topics embeds as neither; a chunk cut mid-sentence embeds as noise.

## Size Budgets

Most embedding models cap input length, so chunks need a hard ceiling.
Overlap between neighbors preserves context across the cut points.

## Structure

Markdown headings tell you where topics change. Using them beats guessing.";

fn main() -> Result<(), strata::ConfigError> {
    println!("=== DelimiterChunker (paragraphs) ===");
    for chunk in DelimiterChunker::paragraphs().chunk(DOCUMENT) {
        println!("  [{}] {:?}", chunk.index, preview(&chunk.text));
    }

    println!("\n=== HierarchicalChunker (budget 80, overlap 15) ===");
    let chunker = HierarchicalChunker::prose(80, 15)?;
    for chunk in chunker.chunk(DOCUMENT) {
        println!(
            "  [{}] level {} ({} chars) {:?}",
            chunk.index,
            chunk.level,
            chunk.text.chars().count(),
            preview(&chunk.text)
        );
    }

    println!("\n=== Token budget (whitespace tokens, budget 25) ===");
    let chunker = HierarchicalChunker::new(25, 4, &["\n\n", " ", ""])?
        .with_measure_fn(|s| s.split_whitespace().count());
    for chunk in chunker.chunk(DOCUMENT) {
        println!(
            "  [{}] {} tokens {:?}",
            chunk.index,
            chunk.text.split_whitespace().count(),
            preview(&chunk.text)
        );
    }

    println!("\n=== MarkdownHeaderSplitter ===");
    for section in MarkdownHeaderSplitter::new().split(DOCUMENT) {
        let path: Vec<&str> = section.path.iter().map(|h| h.text.as_str()).collect();
        println!("  {} -> {:?}", path.join(" > "), preview(&section.body.text));
    }

    Ok(())
}

fn preview(text: &str) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() > 60 {
        let cut: String = flat.chars().take(57).collect();
        format!("{cut}...")
    } else {
        flat
    }
}
