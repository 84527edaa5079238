//! Markdown document structure parsing.
//!
//! Turns raw markdown text into a [`NoteStructure`]: headings, sections,
//! paragraphs, code blocks, and list items in document order. All other
//! analysis components consume this representation.

pub mod parser;
pub mod types;

pub use parser::StructureParser;
pub use types::{CodeBlock, Heading, ListItem, NoteStructure, Paragraph, Section};
