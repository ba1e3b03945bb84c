//! Basic Text Chunking
//!
//! The minimal example: chunk text for embedding.
//!
//! ```bash
//! cargo run --example basic_chunking
//! ```

use strata::{Chunker, HierarchicalChunker};

fn main() -> Result<(), strata::ConfigError> {
    let document = "Machine learning models learn patterns from data. \
        They generalize these patterns to make predictions.\n\n\
        Deep learning extends this with multiple hidden layers. \
        Each layer learns increasingly abstract representations.\n\n\
        Retrieval systems embed chunks of text and search by similarity.";

    // Paragraphs first, words as fallback, 10 chars of overlap
    let chunker = HierarchicalChunker::prose(120, 10)?;
    let chunks = chunker.chunk(document);

    println!("Document: {} chars", document.len());
    println!("Chunks: {}\n", chunks.len());

    for chunk in &chunks {
        println!(
            "[{}] level {} [{}..{}]: \"{}\"",
            chunk.index, chunk.level, chunk.start, chunk.end, chunk.text
        );
    }

    // Each chunk is now small enough to embed and carries offsets back
    // into the source document for citation.
    Ok(())
}
