//! Markdown structure parser.
//!
//! A single forward pass over the document lines classifies each line as a
//! heading, list item, code-block interior, or plain text, and groups lines
//! into sections bounded by headings.

use lazy_static::lazy_static;
use regex::Regex;

use crate::concepts::ConceptExtractor;
use crate::structure::types::{CodeBlock, Heading, ListItem, NoteStructure, Paragraph, Section};

lazy_static! {
    /// Regex for ATX headings: 1-6 `#` characters, whitespace, then text
    static ref RE_HEADING: Regex = Regex::new(r"^(#{1,6})\s+(.+)$").unwrap();

    /// Regex for ordered and unordered list items with optional indentation
    static ref RE_LIST_ITEM: Regex = Regex::new(r"^(\s*)([-*+]|\d+\.)\s+(.+)$").unwrap();
}

/// Minimum trimmed line length for a line to count as a paragraph.
const MIN_PARAGRAPH_LEN: usize = 20;

/// Parses raw markdown text into a [`NoteStructure`].
///
/// Parsing is deterministic and total: any input yields a structure, with
/// empty or whitespace-only input producing an empty one. Section topics are
/// extracted with the embedded [`ConceptExtractor`].
#[derive(Debug, Default)]
pub struct StructureParser {
    extractor: ConceptExtractor,
}

impl StructureParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` into its document structure.
    ///
    /// Lines are numbered from 1. Sections partition the line range of the
    /// document: each heading opens a section, and content before the first
    /// heading forms a heading-less section starting at line 1.
    ///
    /// Fenced code blocks suppress heading/list/paragraph detection for
    /// their interior lines. An unterminated fence consumes the rest of the
    /// document without emitting a [`CodeBlock`].
    pub fn parse(&self, text: &str) -> NoteStructure {
        if text.trim().is_empty() {
            return NoteStructure::default();
        }

        let lines: Vec<&str> = text.split('\n').collect();
        let mut structure = NoteStructure::default();

        let mut current: Option<Section> = None;
        let mut in_code_block = false;
        let mut code_start = 0;
        let mut code_language = String::new();
        let mut code_lines: Vec<&str> = Vec::new();

        for (idx, &line) in lines.iter().enumerate() {
            let line_num = idx + 1;

            if line.starts_with("```") {
                if !in_code_block {
                    in_code_block = true;
                    code_start = line_num;
                    code_language = line[3..].trim().to_string();
                    code_lines.clear();
                } else {
                    in_code_block = false;
                    structure.code_blocks.push(CodeBlock {
                        language: std::mem::take(&mut code_language),
                        content: code_lines.join("\n"),
                        start_line: code_start,
                        end_line: line_num,
                    });
                }
                self.ensure_open_section(&mut current);
                continue;
            }

            if in_code_block {
                code_lines.push(line);
                continue;
            }

            if let Some(caps) = RE_HEADING.captures(line) {
                let heading = Heading {
                    level: caps[1].len() as u8,
                    text: caps[2].trim().to_string(),
                    line: line_num,
                };
                structure.headings.push(heading.clone());

                if let Some(section) = current.take() {
                    structure.sections.push(self.close_section(section, line_num - 1));
                }

                current = Some(Section {
                    topics: self.extractor.extract(&heading.text, 3),
                    heading: Some(heading),
                    content: String::new(),
                    start_line: line_num,
                    end_line: lines.len(),
                });
                continue;
            }

            self.ensure_open_section(&mut current);

            if let Some(caps) = RE_LIST_ITEM.captures(line) {
                structure.lists.push(ListItem {
                    text: caps[3].trim().to_string(),
                    line: line_num,
                    indent: caps[1].chars().count(),
                });
            } else if line.trim().chars().count() > MIN_PARAGRAPH_LEN {
                structure.paragraphs.push(Paragraph {
                    text: line.trim().to_string(),
                    line: line_num,
                    topics: self.extractor.extract(line, 2),
                });
            }

            if let Some(section) = current.as_mut() {
                section.content.push_str(line);
                section.content.push('\n');
            }
        }

        // An unterminated fence drops its accumulated content.
        if in_code_block {
            log::debug!(
                "dropping unterminated code fence opened at line {}",
                code_start
            );
        }

        if let Some(section) = current.take() {
            structure.sections.push(self.close_section(section, lines.len()));
        }

        log::debug!(
            "parsed {} lines: {} sections, {} headings, {} paragraphs, {} code blocks, {} list items",
            lines.len(),
            structure.sections.len(),
            structure.headings.len(),
            structure.paragraphs.len(),
            structure.code_blocks.len(),
            structure.lists.len(),
        );

        structure
    }

    /// Open the heading-less preamble section when the first classified line
    /// is not a heading.
    fn ensure_open_section(&self, current: &mut Option<Section>) {
        if current.is_none() {
            *current = Some(Section {
                heading: None,
                content: String::new(),
                start_line: 1,
                end_line: 1,
                topics: Vec::new(),
            });
        }
    }

    /// Finalize a section's line range. Heading-less sections have no heading
    /// text to draw topics from, so their topics come from the accumulated
    /// content instead.
    fn close_section(&self, mut section: Section, end_line: usize) -> Section {
        section.end_line = end_line;
        if section.heading.is_none() {
            section.topics = self.extractor.extract(&section.content, 3);
        }
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> NoteStructure {
        StructureParser::new().parse(text)
    }

    #[test]
    fn test_empty_document() {
        assert!(parse("").is_empty());
        assert!(parse("   \n\t\n  ").is_empty());
    }

    #[test]
    fn test_heading_levels() {
        let structure = parse("# One\n## Two\n###### Six");
        assert_eq!(structure.headings.len(), 3);
        assert_eq!(structure.headings[0].level, 1);
        assert_eq!(structure.headings[1].level, 2);
        assert_eq!(structure.headings[2].level, 6);
        assert_eq!(structure.headings[2].text, "Six");
        assert_eq!(structure.headings[2].line, 3);
    }

    #[test]
    fn test_seven_hashes_is_not_a_heading() {
        let structure = parse("####### Too deep to be a heading line");
        assert!(structure.headings.is_empty());
        // Still long enough to be a paragraph.
        assert_eq!(structure.paragraphs.len(), 1);
    }

    #[test]
    fn test_sections_partition_document() {
        let text = "intro line before any heading\n# A\nbody a\n# B\nbody b\nmore b";
        let structure = parse(text);
        assert_eq!(structure.sections.len(), 3);

        assert_eq!(structure.sections[0].heading, None);
        assert_eq!(structure.sections[0].start_line, 1);
        assert_eq!(structure.sections[0].end_line, 1);

        assert_eq!(structure.sections[1].start_line, 2);
        assert_eq!(structure.sections[1].end_line, 3);

        assert_eq!(structure.sections[2].start_line, 4);
        assert_eq!(structure.sections[2].end_line, 6);
    }

    #[test]
    fn test_section_topics_come_from_heading() {
        let structure = parse("# Machine Learning Fundamentals\nsome body text here");
        let section = &structure.sections[0];
        assert!(section.topics.iter().any(|t| t.contains("machine")));
    }

    #[test]
    fn test_preamble_section_topics_come_from_content() {
        let structure = parse("Photosynthesis converts sunlight into energy.\n\n# Later");
        let preamble = &structure.sections[0];
        assert!(preamble.heading.is_none());
        assert!(preamble.topics.iter().any(|t| t.contains("photosynthesis")));
    }

    #[test]
    fn test_code_block_suppresses_detection() {
        let text = "# Top\n```rust\n# not a heading\n- not a list\nfn main() {}\n```\nafter";
        let structure = parse(text);
        assert_eq!(structure.headings.len(), 1);
        assert!(structure.lists.is_empty());
        assert_eq!(structure.code_blocks.len(), 1);

        let block = &structure.code_blocks[0];
        assert_eq!(block.language, "rust");
        assert_eq!(block.start_line, 2);
        assert_eq!(block.end_line, 6);
        assert_eq!(block.content, "# not a heading\n- not a list\nfn main() {}");
    }

    #[test]
    fn test_unterminated_fence_is_dropped() {
        let text = "# Top\n```\ntrapped content line one\ntrapped content line two";
        let structure = parse(text);
        assert!(structure.code_blocks.is_empty());
        // Trapped lines never re-enter paragraph detection.
        assert!(structure.paragraphs.is_empty());
        // Line numbering is unaffected: the section still spans to EOF.
        assert_eq!(structure.sections[0].end_line, 4);
    }

    #[test]
    fn test_list_items() {
        let text = "- plain\n  * indented\n3. ordered\n+ plus";
        let structure = parse(text);
        assert_eq!(structure.lists.len(), 4);
        assert_eq!(structure.lists[0].text, "plain");
        assert_eq!(structure.lists[0].indent, 0);
        assert_eq!(structure.lists[1].text, "indented");
        assert_eq!(structure.lists[1].indent, 2);
        assert_eq!(structure.lists[2].text, "ordered");
        assert!(structure.paragraphs.is_empty());
    }

    #[test]
    fn test_list_lines_count_toward_section_content() {
        let structure = parse("# H\n- bullet item text");
        assert!(structure.sections[0].content.contains("- bullet item text"));
    }

    #[test]
    fn test_short_lines_are_not_paragraphs() {
        let structure = parse("short line\nthis line is comfortably longer than twenty chars");
        assert_eq!(structure.paragraphs.len(), 1);
        assert_eq!(structure.paragraphs[0].line, 2);
    }

    #[test]
    fn test_heading_line_not_in_section_content() {
        let structure = parse("# Title\nbody");
        assert_eq!(structure.sections[0].content, "body\n");
    }

    #[test]
    fn test_determinism() {
        let text = "# A\nfirst body paragraph with enough length\n```py\nx = 1\n```\n# B\n- item";
        assert_eq!(parse(text), parse(text));
    }
}
