//! Prompt rendering from use-case templates.
//!
//! Fills the `{slot}` placeholders of a use-case pattern with slices of the
//! ranked concept list, wraps the result in the style's modifier and quality
//! clauses, and validates that no unresolved placeholder survives.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::classify::UseCaseTemplate;
use crate::error::{Error, Result};
use crate::styles::StyleTemplate;

lazy_static! {
    /// Regex for unresolved `{slot}` markers
    static ref RE_PLACEHOLDER: Regex = Regex::new(r"\{[^}]+\}").unwrap();
}

/// Fixed aspect-ratio hint appended to every rendered prompt.
const ASPECT_HINT: &str = "optimized for 16:9 aspect ratio";

/// Suffixes cycled through when several variations of one prompt are needed.
const VARIATION_SUFFIXES: [&str; 9] = [
    "from a different perspective",
    "with emphasis on details",
    "showing the overall context",
    "focusing on key elements",
    "with dramatic composition",
    "in a minimalist approach",
    "highlighting relationships",
    "with depth and layers",
    "from an aerial view",
];

/// Outcome of validating a prompt string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptValidation {
    /// Whether the prompt passed every check.
    pub valid: bool,

    /// Human-readable descriptions of each failed check.
    pub issues: Vec<String>,
}

/// Renders image-generation prompts from templates and extracted concepts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptGenerator;

impl PromptGenerator {
    /// Create a prompt generator.
    pub fn new() -> Self {
        Self
    }

    /// Fill a template's placeholders from the ranked concept list.
    ///
    /// Primary slots take the first three concepts, secondary slots the next
    /// three, and `{character}` the single top concept. Every slot has a
    /// generic fallback for short concept lists, so substitution is total.
    pub fn apply_template(&self, template: &UseCaseTemplate, concepts: &[String]) -> String {
        let primary = concepts[..concepts.len().min(3)].join(", ");
        let secondary = concepts[concepts.len().min(3)..concepts.len().min(6)].join(", ");

        let character = concepts
            .first()
            .cloned()
            .unwrap_or_else(|| "the character".to_string());

        template
            .prompt_pattern
            .replace("{concepts}", &or_default(&primary, "the main subject"))
            .replace("{relationships}", &or_default(&secondary, "key relationships"))
            .replace("{elements}", &or_default(&secondary, "supporting elements"))
            .replace("{process}", &or_default(&primary, "the process"))
            .replace("{character}", &character)
            .replace("{traits}", &or_default(&secondary, "distinctive traits"))
            .replace("{setting}", &or_default(&primary, "the environment"))
            .replace("{data}", &or_default(&primary, "the data points"))
            .replace("{subject}", &or_default(&primary, "the subject"))
            .replace("{structure}", &or_default(&primary, "the structure"))
            .replace("{product}", &or_default(&primary, "the product"))
    }

    /// Render the complete prompt for one image: style modifier, filled
    /// template, quality enhancers, and aspect hint.
    ///
    /// Fails with [`Error::UnresolvedPlaceholders`] when the template used a
    /// slot the renderer does not know, which is a catalog data error.
    pub fn build(
        &self,
        concepts: &[String],
        use_case: &UseCaseTemplate,
        style: &StyleTemplate,
    ) -> Result<String> {
        let base = self.apply_template(use_case, concepts);
        let prompt = format!(
            "{} {}, {}, {}",
            style.modifier, base, style.quality_enhancers, ASPECT_HINT
        );

        let unresolved: Vec<&str> = RE_PLACEHOLDER
            .find_iter(&prompt)
            .map(|m| m.as_str())
            .collect();
        if !unresolved.is_empty() {
            return Err(Error::UnresolvedPlaceholders(unresolved.join(", ")));
        }

        Ok(prompt)
    }

    /// Render `count` prompt variations: the base prompt followed by copies
    /// with cycled variation suffixes (at most one per suffix).
    pub fn build_variations(
        &self,
        concepts: &[String],
        use_case: &UseCaseTemplate,
        style: &StyleTemplate,
        count: usize,
    ) -> Result<Vec<String>> {
        let base = self.build(concepts, use_case, style)?;
        let mut prompts = vec![base.clone()];

        for suffix in VARIATION_SUFFIXES.iter().take(count.saturating_sub(1)) {
            prompts.push(format!("{base}, {suffix}"));
        }

        Ok(prompts)
    }

    /// Check a prompt for length problems and unresolved placeholders.
    pub fn validate(&self, prompt: &str) -> PromptValidation {
        let mut issues = Vec::new();

        if prompt.chars().count() < 10 {
            issues.push("Prompt is too short".to_string());
        }
        if prompt.chars().count() > 4000 {
            issues.push("Prompt exceeds maximum length".to_string());
        }

        let unresolved: Vec<&str> = RE_PLACEHOLDER
            .find_iter(prompt)
            .map(|m| m.as_str())
            .collect();
        if !unresolved.is_empty() {
            issues.push(format!("Unresolved placeholders: {}", unresolved.join(", ")));
        }

        PromptValidation {
            valid: issues.is_empty(),
            issues,
        }
    }
}

/// The value itself when non-empty, otherwise the slot's fallback.
fn or_default(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
