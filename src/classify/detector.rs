//! Use-case classification over the template catalog.

use serde::Serialize;

use crate::classify::bonus::context_bonus;
use crate::classify::catalog::{default_template, UseCaseTemplate, USE_CASE_TEMPLATES};
use crate::config::AnalysisConfig;

/// Reasoning string for the low-confidence fallback match.
const FALLBACK_REASONING: &str =
    "No strong match found, using default template for concept visualization";

/// A scored pairing of document content with a use-case template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UseCaseMatch {
    /// The matched catalog entry.
    pub template: &'static UseCaseTemplate,

    /// Match confidence, clamped to 0-100.
    pub confidence: u32,

    /// Human-readable explanation of the match.
    pub reasoning: String,
}

/// Classifies document content against the use-case catalog.
///
/// Classification is a total function: [`detect`](Self::detect) always
/// returns exactly one match, falling back to the default template when no
/// candidate reaches the configured confidence threshold.
#[derive(Debug, Clone, Default)]
pub struct UseCaseClassifier {
    config: AnalysisConfig,
}

impl UseCaseClassifier {
    /// Create a classifier with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with an explicit configuration.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Raw, unclamped score for one template against content and extracted
    /// concepts.
    ///
    /// Each case-insensitive keyword occurrence in the content is worth 10
    /// points (linear, unbounded), each keyword/concept substring containment
    /// either direction is worth 15, plus the template's context bonus.
    pub fn score_template(
        &self,
        template: &UseCaseTemplate,
        content: &str,
        concepts: &[String],
    ) -> u32 {
        let content_lower = content.to_lowercase();
        let concepts_lower: Vec<String> = concepts.iter().map(|c| c.to_lowercase()).collect();

        let mut score = 0;
        for keyword in template.keywords {
            score += content_lower.matches(keyword).count() as u32 * 10;

            for concept in &concepts_lower {
                if concept.contains(keyword) || keyword.contains(concept.as_str()) {
                    score += 15;
                }
            }
        }

        score + context_bonus(template.id, content)
    }

    /// Score every template, keeping those with a positive raw score, sorted
    /// by confidence descending. Equal confidences keep catalog order.
    pub fn all_matches(&self, content: &str, concepts: &[String]) -> Vec<UseCaseMatch> {
        let mut matches: Vec<UseCaseMatch> = USE_CASE_TEMPLATES
            .iter()
            .filter_map(|template| {
                let raw = self.score_template(template, content, concepts);
                if raw == 0 {
                    return None;
                }
                Some(UseCaseMatch {
                    template,
                    confidence: raw.min(100),
                    reasoning: self.reasoning(template, raw, content),
                })
            })
            .collect();

        matches.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        matches
    }

    /// Classify content, always producing a result.
    ///
    /// Returns the top match when its confidence reaches the configured
    /// threshold; otherwise a fixed fallback on the default template with
    /// confidence 50.
    pub fn detect(&self, content: &str, concepts: &[String]) -> UseCaseMatch {
        let matches = self.all_matches(content, concepts);

        if let Some(top) = matches.first() {
            if top.confidence >= self.config.min_confidence {
                log::debug!(
                    "use case {} at confidence {}",
                    top.template.id.as_str(),
                    top.confidence
                );
                return top.clone();
            }
        }

        log::debug!(
            "no match above confidence {}, falling back to {}",
            self.config.min_confidence,
            default_template().id.as_str()
        );
        UseCaseMatch {
            template: default_template(),
            confidence: 50,
            reasoning: FALLBACK_REASONING.to_string(),
        }
    }

    /// Explain a match: the first matched keywords when any keyword appears
    /// verbatim in the content, otherwise a diagnostic citing the raw
    /// (unclamped) score.
    fn reasoning(&self, template: &UseCaseTemplate, raw_score: u32, content: &str) -> String {
        let content_lower = content.to_lowercase();
        let matched: Vec<&str> = template
            .keywords
            .iter()
            .filter(|k| content_lower.contains(*k as &str))
            .take(3)
            .copied()
            .collect();

        if matched.is_empty() {
            format!("Best match based on content analysis (score: {raw_score})")
        } else {
            format!("Content contains key indicators: {}", matched.join(", "))
        }
    }
}
