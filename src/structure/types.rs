//! Types for parsed markdown document structure.
//!
//! All line numbers are 1-based and refer to the raw input text. The values
//! here are built fresh by each [`parse`](crate::structure::StructureParser::parse)
//! call and are immutable afterward.

use serde::{Deserialize, Serialize};

/// A markdown heading line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level, 1-6 (the number of leading `#` characters).
    pub level: u8,

    /// Heading text with the `#` prefix and surrounding whitespace removed.
    pub text: String,

    /// Line number of the heading.
    pub line: usize,
}

/// A fenced code block.
///
/// Only blocks with a closing fence are emitted; the content of an
/// unterminated fence is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Language tag from the opening fence, possibly empty.
    pub language: String,

    /// Interior lines joined with `\n`, without the fence markers.
    pub content: String,

    /// Line number of the opening fence.
    pub start_line: usize,

    /// Line number of the closing fence.
    pub end_line: usize,
}

/// A single ordered or unordered list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Item text with the bullet and surrounding whitespace removed.
    pub text: String,

    /// Line number of the item.
    pub line: usize,

    /// Count of leading whitespace characters before the bullet.
    pub indent: usize,
}

/// A prose line long enough to be treated as paragraph text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Trimmed line text.
    pub text: String,

    /// Line number of the paragraph.
    pub line: usize,

    /// Top concepts extracted from this line alone, most salient first.
    pub topics: Vec<String>,
}

/// A contiguous span of the document from one heading (or document start) to
/// the next heading (or document end).
///
/// Sections partition the document: ordered by `start_line` their line ranges
/// are non-overlapping and together cover every line exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// The heading that opens this section, or `None` for content before the
    /// first heading.
    pub heading: Option<Heading>,

    /// Raw body lines of the section, each followed by `\n`. Heading and
    /// fence lines are excluded; code-block interiors accumulate into
    /// [`CodeBlock`]s instead.
    pub content: String,

    /// First line of the section (the heading line, or line 1).
    pub start_line: usize,

    /// Last line of the section (the line before the next heading, or the
    /// final line of the document).
    pub end_line: usize,

    /// Top concepts for this section: extracted from the heading text, or
    /// from the accumulated content for a heading-less section.
    pub topics: Vec<String>,
}

impl Section {
    /// Section content and heading text (if any) joined for relevance matching.
    pub fn search_text(&self) -> String {
        match &self.heading {
            Some(heading) => format!("{} {}", self.content, heading.text),
            None => self.content.clone(),
        }
    }
}

/// Parsed structure of a markdown document.
///
/// All collections are in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteStructure {
    /// All headings.
    pub headings: Vec<Heading>,

    /// All sections; partitions the document line range.
    pub sections: Vec<Section>,

    /// All paragraph lines.
    pub paragraphs: Vec<Paragraph>,

    /// All completed fenced code blocks.
    pub code_blocks: Vec<CodeBlock>,

    /// All list items.
    pub lists: Vec<ListItem>,
}

impl NoteStructure {
    /// Whether the document produced no structure at all (empty or
    /// whitespace-only input).
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
            && self.sections.is_empty()
            && self.paragraphs.is_empty()
            && self.code_blocks.is_empty()
            && self.lists.is_empty()
    }
}
