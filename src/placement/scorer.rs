//! Placement scoring for generated images.
//!
//! Ranks document sections as insertion candidates for an image, matching the
//! image's intent text against section content, topics, and headings.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::structure::{NoteStructure, Section, StructureParser};

lazy_static! {
    /// Regex for leading style boilerplate ("In watercolor style, ...")
    static ref RE_STYLE_PREFIX: Regex = Regex::new(r"(?i)^In \w+ style[^,]*,?\s*").unwrap();

    /// Regex for trailing quality-enhancer clauses appended by prompt optimization
    static ref RE_QUALITY_SUFFIX: Regex =
        Regex::new(r"(?i),\s*(highly detailed|professional|8K|optimized)[^,]*").unwrap();
}

/// Maximum characters of an anchor line kept in a suggestion.
const ANCHOR_PREVIEW_LEN: usize = 50;

/// Maximum characters per line in a context preview.
const PREVIEW_LINE_LEN: usize = 60;

/// Whether an image is inserted before or after its anchor line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    /// Insert on the line above the anchor.
    Before,
    /// Insert on the line below the anchor.
    After,
}

/// A concrete document location for an insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertionLocation {
    /// 1-based anchor line number.
    pub line_number: usize,

    /// Which side of the anchor line to insert on.
    pub position: InsertPosition,

    /// The anchor line text (heading with its `#` prefix, or the truncated
    /// first content line of a heading-less section).
    pub anchor: String,
}

/// A candidate insertion point with its relevance score and explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementSuggestion {
    /// Where to insert.
    pub location: InsertionLocation,

    /// Relevance score, clamped to 0-100.
    pub score: u32,

    /// Why this section was chosen.
    pub reasoning: String,

    /// Numbered lines around the anchor, the anchor marked with `>>>`.
    pub context_preview: String,
}

/// Scores document sections as insertion points for generated images.
#[derive(Debug, Default)]
pub struct PlacementScorer {
    config: AnalysisConfig,
    parser: StructureParser,
}

impl PlacementScorer {
    /// Create a scorer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with an explicit configuration.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            config,
            parser: StructureParser::new(),
        }
    }

    /// Rank insertion points for one image.
    ///
    /// Returns at most `max(top_suggestions, image_count)` suggestions, each
    /// scoring at least the configured placement threshold, best first.
    /// An empty result means no section was relevant enough; callers fall
    /// back to their own default insertion point.
    pub fn analyze_placement_options(
        &self,
        document: &str,
        image_prompt: &str,
        image_count: usize,
    ) -> Vec<PlacementSuggestion> {
        let structure = self.parser.parse(document);
        let intent = self.extract_image_intent(image_prompt);
        let candidates = self.relevant_sections(&structure, &intent);

        log::debug!(
            "{} of {} sections relevant to intent {:?}",
            candidates.len(),
            structure.sections.len(),
            intent
        );

        let mut suggestions: Vec<PlacementSuggestion> = candidates
            .into_iter()
            .filter_map(|section| {
                let score = self.score_section(section, &intent);
                if score < self.config.min_placement_score {
                    return None;
                }
                let location = insertion_location(section);
                let context_preview = context_preview(document, location.line_number);
                Some(PlacementSuggestion {
                    reasoning: reasoning(section, score),
                    location,
                    score,
                    context_preview,
                })
            })
            .collect();

        suggestions.sort_by(|a, b| b.score.cmp(&a.score));
        suggestions.truncate(self.config.top_suggestions.max(image_count));
        suggestions
    }

    /// Assign placements for several images at once.
    ///
    /// Each image independently gets its ranked suggestions, then greedily
    /// claims the best anchor line no earlier image has taken. When every
    /// candidate collides, the image reuses its own top suggestion (a
    /// duplicate placement, accepted as a last resort). `None` marks an image
    /// with no qualifying section at all; callers insert those at the current
    /// position.
    pub fn suggest_for_multiple_images(
        &self,
        document: &str,
        image_prompts: &[&str],
    ) -> Vec<Option<PlacementSuggestion>> {
        let mut used_lines: HashSet<usize> = HashSet::new();

        image_prompts
            .iter()
            .map(|prompt| {
                let suggestions = self.analyze_placement_options(document, prompt, 1);

                for suggestion in &suggestions {
                    if !used_lines.contains(&suggestion.location.line_number) {
                        used_lines.insert(suggestion.location.line_number);
                        return Some(suggestion.clone());
                    }
                }

                suggestions.into_iter().next()
            })
            .collect()
    }

    /// Isolate the subject description of an image prompt.
    ///
    /// Strips the leading style modifier and trailing quality-enhancer
    /// clauses so relevance scoring sees subject vocabulary, not decorative
    /// prompt language.
    pub fn extract_image_intent(&self, prompt: &str) -> String {
        let stripped = RE_STYLE_PREFIX.replace(prompt, "");
        let stripped = RE_QUALITY_SUFFIX.replace_all(&stripped, "");
        stripped.trim().to_string()
    }

    /// Coarse pre-filter: sections mentioning at least one intent word,
    /// ordered by how many distinct intent words they mention.
    fn relevant_sections<'a>(
        &self,
        structure: &'a NoteStructure,
        intent: &str,
    ) -> Vec<&'a Section> {
        let intent_lower = intent.to_lowercase();
        let intent_words: HashSet<&str> = intent_lower
            .split_whitespace()
            .filter(|w| w.chars().count() > 3)
            .collect();

        let mut scored: Vec<(&Section, usize)> = structure
            .sections
            .iter()
            .map(|section| {
                let text = section.search_text().to_lowercase();
                let hits = intent_words.iter().filter(|w| text.contains(*w as &str)).count();
                (section, hits)
            })
            .filter(|(_, hits)| *hits > 0)
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(section, _)| section).collect()
    }

    /// Fine-grained relevance of one section to an intent string.
    ///
    /// Three independent signals: intent words found in the section text
    /// (+15 each), topic/intent-word substring pairs (+20), and
    /// heading-word/intent-word pairs that match exactly or by containment
    /// with the longer side over 4 characters (+25). Clamped to 100.
    pub fn score_section(&self, section: &Section, intent: &str) -> u32 {
        let intent_lower = intent.to_lowercase();
        let intent_words: Vec<&str> = intent_lower.split_whitespace().collect();
        let section_text = section.search_text().to_lowercase();

        let mut score = 0u32;

        for word in &intent_words {
            if word.chars().count() > 3 && section_text.contains(word) {
                score += 15;
            }
        }

        for topic in &section.topics {
            let topic_lower = topic.to_lowercase();
            for word in &intent_words {
                if topic_lower.contains(word) || word.contains(topic_lower.as_str()) {
                    score += 20;
                }
            }
        }

        if let Some(heading) = &section.heading {
            let heading_lower = heading.text.to_lowercase();
            for heading_word in heading_lower.split_whitespace() {
                for intent_word in &intent_words {
                    if heading_word == *intent_word
                        || (heading_word.chars().count() > 4 && intent_word.contains(heading_word))
                        || (intent_word.chars().count() > 4 && heading_word.contains(intent_word))
                    {
                        score += 25;
                    }
                }
            }
        }

        score.min(100)
    }
}

/// The insertion point for a section: after its heading line, or after the
/// start of a heading-less section.
fn insertion_location(section: &Section) -> InsertionLocation {
    if let Some(heading) = &section.heading {
        return InsertionLocation {
            line_number: heading.line,
            position: InsertPosition::After,
            anchor: format!("{} {}", "#".repeat(heading.level as usize), heading.text),
        };
    }

    let first_line: String = section
        .content
        .lines()
        .next()
        .unwrap_or("")
        .chars()
        .take(ANCHOR_PREVIEW_LEN)
        .collect();
    InsertionLocation {
        line_number: section.start_line,
        position: InsertPosition::After,
        anchor: if first_line.is_empty() {
            "Section start".to_string()
        } else {
            first_line
        },
    }
}

/// A numbered window of document lines around the anchor, the anchor line
/// marked with `>>>` and long lines truncated.
fn context_preview(document: &str, line_number: usize) -> String {
    let lines: Vec<&str> = document.split('\n').collect();
    let start = line_number.saturating_sub(2);
    let end = (line_number + 2).min(lines.len());

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(offset, line)| {
            let actual = start + offset + 1;
            let marker = if actual == line_number { ">>> " } else { "    " };
            let truncated: String = line.chars().take(PREVIEW_LINE_LEN).collect();
            let ellipsis = if line.chars().count() > PREVIEW_LINE_LEN {
                "..."
            } else {
                ""
            };
            format!("{marker}{actual}: {truncated}{ellipsis}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human-readable explanation of why a section was suggested.
fn reasoning(section: &Section, score: u32) -> String {
    match &section.heading {
        Some(heading) => format!(
            "Section \"{}\" discusses related topics ({score}% relevance)",
            heading.text
        ),
        None => {
            let topics: Vec<&str> = section.topics.iter().take(3).map(String::as_str).collect();
            format!(
                "Section contains relevant concepts: {} ({score}% relevance)",
                topics.join(", ")
            )
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "# Intro\n\
                       This is about cats and dogs.\n\
                       \n\
                       # Details\n\
                       Cats are independent. Dogs are loyal.";

    fn scorer() -> PlacementScorer {
        PlacementScorer::new()
    }

    #[test]
    fn test_intent_strips_style_prefix() {
        let intent = scorer().extract_image_intent("In watercolor style, a fox in a meadow");
        assert_eq!(intent, "a fox in a meadow");
    }

    #[test]
    fn test_intent_strips_quality_suffix() {
        let intent = scorer()
            .extract_image_intent("a fox in a meadow, highly detailed fur, 8K resolution");
        assert_eq!(intent, "a fox in a meadow");
    }

    #[test]
    fn test_intent_without_boilerplate_is_unchanged() {
        let intent = scorer().extract_image_intent("a photo of a loyal dog");
        assert_eq!(intent, "a photo of a loyal dog");
    }

    #[test]
    fn test_relevant_section_scores_higher() {
        let scorer = scorer();
        let structure = StructureParser::new().parse(DOC);
        let intent = "a photo of a loyal dog";

        let intro = &structure.sections[0];
        let details = &structure.sections[1];
        assert!(scorer.score_section(details, intent) > scorer.score_section(intro, intent));
    }

    #[test]
    fn test_details_section_ranks_first() {
        let scorer = PlacementScorer::with_config(
            AnalysisConfig::new().with_min_placement_score(40),
        );
        let suggestions = scorer.analyze_placement_options(DOC, "a photo of a loyal dog", 1);
        assert!(!suggestions.is_empty());
        assert_eq!(suggestions[0].location.anchor, "# Details");
        assert_eq!(suggestions[0].location.line_number, 4);
        assert_eq!(suggestions[0].location.position, InsertPosition::After);
    }

    #[test]
    fn test_result_length_bounded() {
        let scorer = PlacementScorer::with_config(
            AnalysisConfig::new().with_min_placement_score(1),
        );
        let suggestions = scorer.analyze_placement_options(DOC, "cats dogs loyal independent", 5);
        assert!(suggestions.len() <= 5);

        let suggestions = scorer.analyze_placement_options(DOC, "cats dogs loyal independent", 1);
        assert!(suggestions.len() <= 3);
    }

    #[test]
    fn test_all_scores_meet_threshold() {
        let config = AnalysisConfig::new().with_min_placement_score(30);
        let scorer = PlacementScorer::with_config(config);
        for suggestion in scorer.analyze_placement_options(DOC, "loyal dogs and cats", 3) {
            assert!(suggestion.score >= 30);
            assert!(suggestion.score <= 100);
        }
    }

    #[test]
    fn test_irrelevant_intent_yields_nothing() {
        let suggestions =
            scorer().analyze_placement_options(DOC, "a spaceship orbiting jupiter", 2);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_empty_document_yields_nothing() {
        assert!(scorer().analyze_placement_options("", "anything at all", 1).is_empty());
    }

    #[test]
    fn test_context_preview_marks_anchor() {
        let preview = context_preview("one\ntwo\nthree\nfour\nfive", 3);
        let lines: Vec<&str> = preview.lines().collect();
        assert_eq!(lines[0], "    2: two");
        assert_eq!(lines[1], ">>> 3: three");
        assert_eq!(lines[2], "    4: four");
        assert_eq!(lines[3], "    5: five");
    }

    #[test]
    fn test_context_preview_truncates_long_lines() {
        let long = "x".repeat(80);
        let doc = format!("{long}\nshort");
        let preview = context_preview(&doc, 1);
        assert!(preview.contains("..."));
        assert!(!preview.contains(&"x".repeat(61)));
    }

    #[test]
    fn test_multi_image_no_anchor_reuse() {
        let scorer = PlacementScorer::with_config(
            AnalysisConfig::new().with_min_placement_score(10),
        );
        let doc = "# Dogs\nLoyal dogs play here.\n# Cats\nIndependent cats napping here.";
        let assigned =
            scorer.suggest_for_multiple_images(doc, &["a loyal dog", "a napping cat"]);
        assert_eq!(assigned.len(), 2);
        let a = assigned[0].as_ref().unwrap();
        let b = assigned[1].as_ref().unwrap();
        assert_ne!(a.location.line_number, b.location.line_number);
    }

    #[test]
    fn test_multi_image_duplicate_as_last_resort() {
        let scorer = PlacementScorer::with_config(
            AnalysisConfig::new().with_min_placement_score(10),
        );
        let doc = "# Dogs\nLoyal dogs play here.";
        let assigned = scorer.suggest_for_multiple_images(doc, &["a loyal dog", "a loyal dog"]);
        let a = assigned[0].as_ref().unwrap();
        let b = assigned[1].as_ref().unwrap();
        assert_eq!(a.location.line_number, b.location.line_number);
    }

    #[test]
    fn test_multi_image_none_for_unplaceable() {
        let assigned = scorer()
            .suggest_for_multiple_images(DOC, &["a spaceship orbiting jupiter"]);
        assert_eq!(assigned, vec![None]);
    }

    #[test]
    fn test_deterministic_output() {
        let scorer = PlacementScorer::with_config(
            AnalysisConfig::new().with_min_placement_score(40),
        );
        let first = scorer.analyze_placement_options(DOC, "a photo of a loyal dog", 2);
        let second = scorer.analyze_placement_options(DOC, "a photo of a loyal dog", 2);
        assert_eq!(first, second);
    }
}
