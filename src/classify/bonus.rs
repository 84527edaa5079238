//! Context-bonus rules for use-case scoring.
//!
//! Each rule is a pure predicate over the raw document content, kept in a
//! dispatch table keyed by template id so individual rules stay independently
//! testable. A template earns its bonus at most once per classification,
//! regardless of how many times the pattern matches.

use lazy_static::lazy_static;
use regex::Regex;

use crate::classify::catalog::UseCaseId;

lazy_static! {
    /// Regex for explicit diagram/illustration vocabulary
    static ref RE_DIAGRAM: Regex = Regex::new(r"(?i)diagram|flowchart|illustration|explain").unwrap();

    /// Regex for mathematical notation symbols
    static ref RE_MATH_SYMBOLS: Regex = Regex::new(r"[μ∑∂∫≈→←]").unwrap();

    /// Regex for equation vocabulary
    static ref RE_EQUATION: Regex = Regex::new(r"(?i)equation|formula|theorem").unwrap();

    /// Regex for dialogue attribution verbs
    static ref RE_DIALOGUE: Regex = Regex::new(r"(?i)she said|he said|replied|answered|whispered").unwrap();

    /// Regex for step-sequencing vocabulary
    static ref RE_SEQUENCING: Regex = Regex::new(r"(?i)step \d|first|then|next|finally").unwrap();

    /// Regex for percentages, decimals, and trend vocabulary
    static ref RE_NUMERIC_TREND: Regex = Regex::new(r"(?i)\d+%|\d+\.\d+|increase|decrease|growth").unwrap();

    /// Regex for year/era references
    static ref RE_YEAR_ERA: Regex = Regex::new(r"(?i)\d{3,4}\s*(AD|BC|CE|BCE)|century").unwrap();

    /// Regex for built-space vocabulary
    static ref RE_BUILT_SPACE: Regex = Regex::new(r"(?i)floor|room|building|structure|design").unwrap();
}

/// Bonus rule table: template id to predicate. Templates absent from the
/// table earn no context bonus.
static BONUS_RULES: [(UseCaseId, fn(&str) -> u32); 7] = [
    (UseCaseId::EducationalDiagram, diagram_bonus),
    (UseCaseId::ScientificIllustration, scientific_bonus),
    (UseCaseId::CharacterIllustration, dialogue_bonus),
    (UseCaseId::ProcessFlow, sequencing_bonus),
    (UseCaseId::DataVisualization, numeric_trend_bonus),
    (UseCaseId::HistoricalRecreation, year_era_bonus),
    (UseCaseId::ArchitecturalVisualization, built_space_bonus),
];

/// The context bonus for `id` against `content`, or 0 when the template has
/// no rule or its pattern does not match.
pub fn context_bonus(id: UseCaseId, content: &str) -> u32 {
    BONUS_RULES
        .iter()
        .find(|(rule_id, _)| *rule_id == id)
        .map(|(_, rule)| rule(content))
        .unwrap_or(0)
}

fn diagram_bonus(content: &str) -> u32 {
    if RE_DIAGRAM.is_match(content) {
        20
    } else {
        0
    }
}

/// Tiered: mathematical notation is a stronger signal than equation words.
fn scientific_bonus(content: &str) -> u32 {
    if RE_MATH_SYMBOLS.is_match(content) {
        25
    } else if RE_EQUATION.is_match(content) {
        15
    } else {
        0
    }
}

fn dialogue_bonus(content: &str) -> u32 {
    if RE_DIALOGUE.is_match(content) {
        25
    } else {
        0
    }
}

fn sequencing_bonus(content: &str) -> u32 {
    if RE_SEQUENCING.is_match(content) {
        20
    } else {
        0
    }
}

fn numeric_trend_bonus(content: &str) -> u32 {
    if RE_NUMERIC_TREND.is_match(content) {
        20
    } else {
        0
    }
}

fn year_era_bonus(content: &str) -> u32 {
    if RE_YEAR_ERA.is_match(content) {
        25
    } else {
        0
    }
}

fn built_space_bonus(content: &str) -> u32 {
    if RE_BUILT_SPACE.is_match(content) {
        15
    } else {
        0
    }
}
