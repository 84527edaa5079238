//! Configuration for document analysis.

/// Numeric knobs shared by the analysis components.
///
/// All thresholds are plain values with no environment or file coupling; hosts
/// that persist settings construct one of these from their own storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Maximum number of concepts returned by extraction.
    pub max_concepts: usize,

    /// Minimum confidence for a use-case match before falling back to the
    /// default template.
    pub min_confidence: u32,

    /// Minimum relevance score for a section to be suggested as an
    /// insertion point.
    pub min_placement_score: u32,

    /// Number of top placement suggestions returned (raised to the image
    /// count when more images are requested).
    pub top_suggestions: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisConfig {
    /// Create a configuration with the default thresholds.
    pub fn new() -> Self {
        Self {
            max_concepts: 8,
            min_confidence: 70,
            min_placement_score: 70,
            top_suggestions: 3,
        }
    }

    /// Set the maximum number of extracted concepts.
    pub fn with_max_concepts(mut self, max: usize) -> Self {
        self.max_concepts = max;
        self
    }

    /// Set the minimum use-case confidence threshold.
    pub fn with_min_confidence(mut self, min: u32) -> Self {
        self.min_confidence = min;
        self
    }

    /// Set the minimum placement score threshold.
    pub fn with_min_placement_score(mut self, min: u32) -> Self {
        self.min_placement_score = min;
        self
    }

    /// Set the number of top placement suggestions returned.
    pub fn with_top_suggestions(mut self, top: usize) -> Self {
        self.top_suggestions = top;
        self
    }
}
