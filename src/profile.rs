//! Lexical content profiling.
//!
//! Produces a coarse descriptive profile of a document — content type,
//! themes, emotional tone, and visual cues — for hosts that build free-form
//! prompts instead of the slot templates in [`crate::prompt`]. Purely
//! pattern-based and deterministic, like the rest of the analysis core.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// Content-type patterns, checked in order; first match wins.
    static ref TYPE_PATTERNS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(?i)\b(learn|teach|explain|concept|theory|principle)\b").unwrap(),
         "Educational/Instructional"),
        (Regex::new(r"(?i)\b(story|character|scene|chapter|narrative)\b").unwrap(),
         "Creative/Narrative"),
        (Regex::new(r"(?i)\b(data|analysis|research|study|experiment)\b").unwrap(),
         "Scientific/Analytical"),
        (Regex::new(r"(?i)\b(code|function|api|system|architecture)\b").unwrap(),
         "Technical/Engineering"),
        (Regex::new(r"(?i)\b(history|ancient|century|era|civilization)\b").unwrap(),
         "Historical"),
    ];

    /// Theme patterns; every match contributes, capped at three themes.
    static ref THEME_PATTERNS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(?i)nature|forest|ocean|mountain|sky").unwrap(), "Nature & Landscapes"),
        (Regex::new(r"(?i)technology|digital|computer|ai|robot").unwrap(), "Technology"),
        (Regex::new(r"(?i)human|people|person|character|face").unwrap(), "Human Elements"),
        (Regex::new(r"(?i)abstract|concept|idea|theory|philosophy").unwrap(), "Abstract Concepts"),
        (Regex::new(r"(?i)space|universe|cosmic|star|planet").unwrap(), "Cosmic/Space"),
        (Regex::new(r"(?i)city|urban|building|architecture").unwrap(), "Urban/Architecture"),
        (Regex::new(r"(?i)science|biology|chemistry|physics").unwrap(), "Scientific"),
        (Regex::new(r"(?i)art|creative|design|aesthetic").unwrap(), "Artistic/Creative"),
    ];

    /// Tone patterns, checked in order; first match wins.
    static ref TONE_PATTERNS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(?i)exciting|amazing|incredible|fantastic|wonderful").unwrap(),
         "Enthusiastic & Positive"),
        (Regex::new(r"(?i)serious|important|critical|essential|crucial").unwrap(),
         "Serious & Professional"),
        (Regex::new(r"(?i)mystery|secret|hidden|unknown|discover").unwrap(),
         "Mysterious & Intriguing"),
        (Regex::new(r"(?i)calm|peace|gentle|soft|quiet").unwrap(),
         "Calm & Serene"),
    ];

    /// Visual-cue patterns; every match contributes, capped at three.
    static ref VISUAL_PATTERNS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(?i)color|red|blue|green|golden|silver").unwrap(), "Color emphasis"),
        (Regex::new(r"(?i)light|glow|shine|bright|dark|shadow").unwrap(), "Lighting dynamics"),
        (Regex::new(r"(?i)large|huge|tiny|small|vast|miniature").unwrap(), "Scale contrast"),
        (Regex::new(r"(?i)moving|flowing|dynamic|static|still").unwrap(), "Motion elements"),
        (Regex::new(r"(?i)texture|smooth|rough|soft|hard").unwrap(), "Textural details"),
    ];
}

/// A coarse descriptive profile of document content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentProfile {
    /// Broad content category label.
    pub kind: String,

    /// Up to three detected themes.
    pub themes: Vec<String>,

    /// Emotional tone label.
    pub tone: String,

    /// Up to three visual treatment cues.
    pub visual_elements: Vec<String>,
}

/// Profile a document's content by pattern matching.
///
/// Every field falls back to a generic label when nothing matches, so the
/// profile is always fully populated.
pub fn profile_content(text: &str) -> ContentProfile {
    let kind = TYPE_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, label)| *label)
        .unwrap_or("General Content")
        .to_string();

    let mut themes: Vec<String> = THEME_PATTERNS
        .iter()
        .filter(|(pattern, _)| pattern.is_match(text))
        .map(|(_, label)| label.to_string())
        .collect();
    if themes.is_empty() {
        themes.push("General Theme".to_string());
    }
    themes.truncate(3);

    let tone = TONE_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, label)| *label)
        .unwrap_or("Neutral")
        .to_string();

    let mut visual_elements: Vec<String> = VISUAL_PATTERNS
        .iter()
        .filter(|(pattern, _)| pattern.is_match(text))
        .map(|(_, label)| label.to_string())
        .collect();
    if visual_elements.is_empty() {
        visual_elements.push("Standard visual treatment".to_string());
    }
    visual_elements.truncate(3);

    ContentProfile {
        kind,
        themes,
        tone,
        visual_elements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_gets_generic_profile() {
        let profile = profile_content("");
        assert_eq!(profile.kind, "General Content");
        assert_eq!(profile.themes, vec!["General Theme"]);
        assert_eq!(profile.tone, "Neutral");
        assert_eq!(profile.visual_elements, vec!["Standard visual treatment"]);
    }

    #[test]
    fn test_educational_kind_wins_over_later_patterns() {
        // "learn" and "data" both appear; the educational pattern is checked
        // first.
        let profile = profile_content("learn from the data");
        assert_eq!(profile.kind, "Educational/Instructional");
    }

    #[test]
    fn test_themes_capped_at_three() {
        let profile =
            profile_content("forest technology people abstract stars city science art");
        assert_eq!(profile.themes.len(), 3);
        assert_eq!(profile.themes[0], "Nature & Landscapes");
    }

    #[test]
    fn test_tone_detection() {
        assert_eq!(
            profile_content("an amazing and wonderful day").tone,
            "Enthusiastic & Positive"
        );
        assert_eq!(
            profile_content("a hidden secret passage").tone,
            "Mysterious & Intriguing"
        );
    }

    #[test]
    fn test_visual_cues() {
        let profile = profile_content("golden light on a rough texture");
        assert!(profile.visual_elements.contains(&"Color emphasis".to_string()));
        assert!(profile.visual_elements.contains(&"Lighting dynamics".to_string()));
        assert!(profile.visual_elements.contains(&"Textural details".to_string()));
    }
}
