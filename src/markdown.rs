//! Header-aware Markdown splitting.
//!
//! Groups content under its heading trail instead of cutting at a size
//! budget. Retrieval quality often improves when the chunk carries its
//! place in the document outline:
//!
//! ```text
//! # Guide
//! ## Install
//! Run the installer.
//! ## Configure
//! Edit the config file.
//!
//! Section 0: path = [Guide, Install]    body = "Run the installer."
//! Section 1: path = [Guide, Configure]  body = "Edit the config file."
//! ```
//!
//! The scan is a single pass over lines: each line becomes a tagged block
//! (heading at some depth, or content), and blocks are grouped by threading
//! an explicit heading stack — a heading of depth `d` pops every stacked
//! heading of depth `>= d` before pushing itself.
//!
//! Only ATX headings (`#` through `######`, followed by a space, at the
//! start of a line) are recognized. Setext underlines and headings inside
//! fenced code blocks are out of scope for this splitter.
//!
//! The output type carries metadata, so this splitter returns [`Section`]s
//! rather than implementing [`Chunker`](crate::Chunker). For plain
//! size-budgeted Markdown splitting without metadata, use
//! [`HierarchicalChunker::markdown`](crate::HierarchicalChunker::markdown).

use crate::Chunk;

/// One heading on the trail above a section body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading depth: 1 for `#`, 2 for `##`, and so on up to 6.
    pub depth: usize,
    /// Heading text with the marker and surrounding whitespace stripped.
    pub text: String,
}

/// A run of content lines tagged with the headings above them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading trail, outermost first. Empty for preamble content that
    /// appears before any heading.
    pub path: Vec<Heading>,
    /// The section body, with offsets into the original text.
    pub body: Chunk,
}

/// One scanned line, tagged.
#[derive(Debug)]
enum Block<'a> {
    Heading { depth: usize, text: &'a str },
    Content { start: usize, end: usize, blank: bool },
}

/// Splits Markdown into sections grouped under their heading trail.
///
/// ## Example
///
/// ```rust
/// use strata::MarkdownHeaderSplitter;
///
/// let splitter = MarkdownHeaderSplitter::new();
/// let text = "# Title\n\nIntro.\n\n## Details\n\nBody text.";
/// let sections = splitter.split(text);
///
/// assert_eq!(sections.len(), 2);
/// assert_eq!(sections[0].path.len(), 1);
/// assert_eq!(sections[1].path[1].text, "Details");
/// assert_eq!(sections[1].body.text, "Body text.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkdownHeaderSplitter {
    _private: (),
}

impl MarkdownHeaderSplitter {
    /// Create a new splitter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `text` into heading-tagged sections, in document order.
    ///
    /// Headings with no content lines beneath them produce no section.
    /// Content before the first heading becomes a section with an empty
    /// path. Empty input yields no sections.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut stack: Vec<Heading> = Vec::new();
        // Body span of the section being accumulated, if any content seen.
        let mut body: Option<(usize, usize)> = None;

        let flush = |stack: &[Heading], body: &mut Option<(usize, usize)>, sections: &mut Vec<Section>| {
            if let Some((start, end)) = body.take() {
                let index = sections.len();
                sections.push(Section {
                    path: stack.to_vec(),
                    body: Chunk::new(&text[start..end], start, end, index),
                });
            }
        };

        for block in scan_blocks(text) {
            match block {
                Block::Heading { depth, text: heading } => {
                    flush(&stack, &mut body, &mut sections);
                    while stack.last().is_some_and(|h| h.depth >= depth) {
                        stack.pop();
                    }
                    stack.push(Heading {
                        depth,
                        text: heading.to_string(),
                    });
                }
                Block::Content { blank: true, .. } => {
                    // Interior blank lines ride along via span contiguity;
                    // leading and trailing ones are not part of any body.
                }
                Block::Content { start, end, .. } => {
                    body = match body {
                        Some((s, _)) => Some((s, end)),
                        None => Some((start, end)),
                    };
                }
            }
        }
        flush(&stack, &mut body, &mut sections);

        sections
    }
}

/// Tag each line of `text` as a heading or content block.
fn scan_blocks(text: &str) -> impl Iterator<Item = Block<'_>> {
    let mut cursor = 0;
    text.split_inclusive('\n').map(move |line| {
        let start = cursor;
        cursor += line.len();
        let trimmed = line.trim_end_matches(['\n', '\r']);

        match heading_depth(trimmed) {
            Some(depth) => Block::Heading {
                depth,
                text: trimmed[depth..].trim(),
            },
            None => Block::Content {
                start,
                end: start + trimmed.len(),
                blank: trimmed.trim().is_empty(),
            },
        }
    })
}

/// The ATX heading depth of a line, if it is one.
fn heading_depth(line: &str) -> Option<usize> {
    let depth = line.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&depth) && line[depth..].starts_with(' ') {
        Some(depth)
    } else {
        None
    }
}
