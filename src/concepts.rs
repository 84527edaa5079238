//! Weighted concept extraction from markdown text.
//!
//! Terms accumulate weight across four typographic channels: heading text
//! (3.0), emphasized spans (2.0), the markdown-stripped body (1.0), and the
//! first paragraph-like line (1.2). Headings and emphasis are strong authorial
//! signals of importance; plain-text frequency is a weaker one. Adjacent token
//! pairs accumulate 1.5x the channel weight so multi-word concepts like
//! "machine learning" out-rank their split halves.

use std::collections::HashSet;

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

use crate::config::AnalysisConfig;
use crate::structure::StructureParser;

lazy_static! {
    /// Regex for heading lines, multiline so every heading in the body matches
    static ref RE_HEADING_LINE: Regex = Regex::new(r"(?m)^#{1,6}\s+(.+)$").unwrap();

    /// Regex for bold spans
    static ref RE_BOLD: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();

    /// Regex for italic spans; also matches inside bold spans, which is
    /// intentional double counting of emphasized text
    static ref RE_ITALIC: Regex = Regex::new(r"\*(.+?)\*").unwrap();

    /// Regex for heading markers anywhere in the text
    static ref RE_HEADING_MARK: Regex = Regex::new(r"#{1,6}\s+").unwrap();

    /// Regex for markdown links; replaced by their link text
    static ref RE_LINK: Regex = Regex::new(r"\[(.+?)\]\(.+?\)").unwrap();

    /// Regex for inline and fenced code spans
    static ref RE_CODE_SPAN: Regex = Regex::new(r"`{1,3}[^`]*`{1,3}").unwrap();

    /// Regex for unordered list bullets at line start
    static ref RE_BULLET: Regex = Regex::new(r"(?m)^\s*[-*+]\s+").unwrap();

    /// Regex for ordered list numbers at line start
    static ref RE_ORDERED: Regex = Regex::new(r"(?m)^\s*\d+\.\s+").unwrap();

    /// Common English function words excluded from extracted concepts.
    static ref STOPWORDS: HashSet<&'static str> = [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
        "by", "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had",
        "do", "does", "did", "will", "would", "could", "should", "may", "might", "must",
        "shall", "can", "need", "dare", "ought", "used", "it", "its", "this", "that",
        "these", "those", "i", "you", "he", "she", "we", "they", "what", "which", "who",
        "when", "where", "why", "how", "all", "each", "every", "both", "few", "more",
        "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
        "than", "too", "very", "just", "also", "now", "here", "there", "then", "once",
    ]
    .into_iter()
    .collect();
}

/// Weight multiplier for two-word bigrams relative to their channel weight.
const BIGRAM_MULTIPLIER: f64 = 1.5;

/// Document language detected from script distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Latin-script content (the default).
    En,
    /// Predominantly Hangul content.
    Ko,
}

/// Coarse lexical classification of document content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Lessons, tutorials, explanatory material.
    Educational,
    /// Research, experiments, natural sciences.
    Scientific,
    /// Stories, characters, narrative writing.
    CreativeFiction,
    /// Code, systems, engineering.
    Technical,
    /// Eras, events, civilizations.
    Historical,
    /// Markets, strategy, organizations.
    Business,
    /// Ethics, logic, metaphysics.
    Philosophical,
    /// Everything else: notes, tasks, journals.
    PersonalNotes,
}

lazy_static! {
    /// Per-kind indicator patterns for coarse content classification. Each
    /// matching pattern contributes one point to its kind.
    static ref CONTENT_KIND_PATTERNS: Vec<(ContentKind, Vec<Regex>)> = vec![
        (ContentKind::Educational, vec![
            Regex::new(r"(?i)learn|teach|explain|concept|principle|theory|fundamentals|introduction|guide|tutorial").unwrap(),
            Regex::new(r"(?i)chapter|lesson|module|curriculum|course").unwrap(),
        ]),
        (ContentKind::Scientific, vec![
            Regex::new(r"(?i)experiment|hypothesis|research|study|analysis|data|result|conclusion").unwrap(),
            Regex::new(r"(?i)cell|molecule|atom|chemical|physics|biology|quantum|neural").unwrap(),
        ]),
        (ContentKind::CreativeFiction, vec![
            Regex::new(r"(?i)character|story|narrative|plot|scene|chapter|protagonist|antagonist").unwrap(),
            Regex::new(r"(?i)fiction|novel|tale|adventure|fantasy|mystery").unwrap(),
        ]),
        (ContentKind::Technical, vec![
            Regex::new(r"(?i)code|function|algorithm|system|architecture|implementation|api|database").unwrap(),
            Regex::new(r"(?i)programming|software|development|engineering|technical").unwrap(),
        ]),
        (ContentKind::Historical, vec![
            Regex::new(r"(?i)history|historical|century|era|period|ancient|medieval|modern").unwrap(),
            Regex::new(r"(?i)war|revolution|civilization|empire|dynasty|kingdom").unwrap(),
        ]),
        (ContentKind::Business, vec![
            Regex::new(r"(?i)business|strategy|market|revenue|profit|growth|startup|enterprise").unwrap(),
            Regex::new(r"(?i)management|leadership|team|organization|company").unwrap(),
        ]),
        (ContentKind::Philosophical, vec![
            Regex::new(r"(?i)philosophy|ethics|moral|existence|consciousness|meaning|truth").unwrap(),
            Regex::new(r"(?i)argument|logic|reasoning|metaphysics|epistemology").unwrap(),
        ]),
        (ContentKind::PersonalNotes, vec![
            Regex::new(r"(?i)note|reminder|todo|task|meeting|idea|thought|journal").unwrap(),
        ]),
    ];
}

/// Extracts ranked concept terms from markdown text.
///
/// Extraction is deterministic: ties in accumulated weight resolve by first
/// occurrence order across the channel-processing sequence.
#[derive(Debug, Clone, Default)]
pub struct ConceptExtractor {
    config: AnalysisConfig,
}

impl ConceptExtractor {
    /// Create an extractor with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with an explicit configuration.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Extract up to `max_concepts` terms from the configured limit.
    pub fn extract_concepts(&self, text: &str) -> Vec<String> {
        self.extract(text, self.config.max_concepts)
    }

    /// Extract up to `max_concepts` salient terms, most salient first.
    ///
    /// Returned terms are lowercase unigrams or two-word bigrams, each longer
    /// than 3 characters and outside the stopword set.
    pub fn extract(&self, text: &str, max_concepts: usize) -> Vec<String> {
        let mut weights: IndexMap<String, f64> = IndexMap::new();

        for caps in RE_HEADING_LINE.captures_iter(text) {
            add_terms(&caps[1], &mut weights, 3.0);
        }

        for caps in RE_BOLD.captures_iter(text) {
            add_terms(&caps[1], &mut weights, 2.0);
        }
        for caps in RE_ITALIC.captures_iter(text) {
            add_terms(&caps[1], &mut weights, 2.0);
        }

        add_terms(&strip_markdown(text), &mut weights, 1.0);

        if let Some(first) = first_paragraph_line(text) {
            add_terms(first, &mut weights, 1.2);
        }

        let mut ranked: Vec<(String, f64)> = weights
            .into_iter()
            .filter(|(term, _)| term.chars().count() > 3 && !STOPWORDS.contains(term.as_str()))
            .collect();
        // Stable sort: equal weights keep first-occurrence order.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(max_concepts);

        ranked.into_iter().map(|(term, _)| term).collect()
    }

    /// Top-5 topics for every section of the document, keyed by heading text
    /// or a `"Section at line N"` placeholder for heading-less sections.
    pub fn topics_by_section(&self, text: &str) -> Vec<(String, Vec<String>)> {
        let structure = StructureParser::new().parse(text);

        structure
            .sections
            .iter()
            .map(|section| {
                let key = match &section.heading {
                    Some(heading) => heading.text.clone(),
                    None => format!("Section at line {}", section.start_line),
                };
                (key, self.extract(&section.content, 5))
            })
            .collect()
    }

    /// Detect the dominant script of the document.
    ///
    /// Returns [`Language::Ko`] when more than 30% of the non-whitespace
    /// characters are Hangul syllables; [`Language::En`] otherwise, including
    /// for empty input.
    pub fn detect_language(&self, text: &str) -> Language {
        let total: usize = text.chars().filter(|c| !c.is_whitespace()).count();
        if total == 0 {
            return Language::En;
        }

        let hangul = text
            .chars()
            .filter(|c| ('\u{AC00}'..='\u{D7AF}').contains(c))
            .count();

        if hangul as f64 / total as f64 > 0.3 {
            Language::Ko
        } else {
            Language::En
        }
    }

    /// Classify the document into a coarse content kind.
    ///
    /// Each matching indicator pattern contributes one point to its kind; the
    /// highest-scoring kind wins, with [`ContentKind::PersonalNotes`] as the
    /// all-zero default.
    pub fn detect_content_kind(&self, text: &str) -> ContentKind {
        let mut best = ContentKind::PersonalNotes;
        let mut best_score = 0usize;

        for (kind, patterns) in CONTENT_KIND_PATTERNS.iter() {
            let score = patterns.iter().filter(|p| p.is_match(text)).count();
            if score > best_score {
                best_score = score;
                best = *kind;
            }
        }

        log::debug!("content kind {:?} (score {})", best, best_score);
        best
    }
}

/// Accumulate cleaned unigrams and bigrams from `text` into the weight map.
fn add_terms(text: &str, weights: &mut IndexMap<String, f64>, weight: f64) {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    for word in &words {
        let cleaned = clean_token(word);
        if cleaned.chars().count() > 2 && !STOPWORDS.contains(cleaned.as_str()) {
            *weights.entry(cleaned).or_insert(0.0) += weight;
        }
    }

    for pair in words.windows(2) {
        let first = clean_token(pair[0]);
        let second = clean_token(pair[1]);
        if first.is_empty() || second.is_empty() {
            continue;
        }
        let bigram = format!("{} {}", first, second);
        if bigram.chars().count() > 5 {
            *weights.entry(bigram).or_insert(0.0) += weight * BIGRAM_MULTIPLIER;
        }
    }
}

/// Strip a token down to Latin letters and Hangul syllables.
fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_lowercase() || ('\u{AC00}'..='\u{D7A3}').contains(c))
        .collect()
}

/// Reduce markdown text to plain prose: heading and emphasis markers removed,
/// links replaced by their text, code spans dropped, list bullets removed.
fn strip_markdown(text: &str) -> String {
    let text = RE_HEADING_MARK.replace_all(text, "");
    let text = RE_BOLD.replace_all(&text, "$1");
    let text = RE_ITALIC.replace_all(&text, "$1");
    let text = RE_LINK.replace_all(&text, "$1");
    let text = RE_CODE_SPAN.replace_all(&text, "");
    let text = RE_BULLET.replace_all(&text, "");
    RE_ORDERED.replace_all(&text, "").into_owned()
}

/// The first prose line long enough to act as a lead paragraph: more than 30
/// characters trimmed, and not a heading or bullet line.
fn first_paragraph_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| {
        line.chars().count() > 30 && !line.starts_with('#') && !line.starts_with('-')
    })
}
