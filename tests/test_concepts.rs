//! Integration tests for concept extraction and document profiling.

use illumark::concepts::{ConceptExtractor, ContentKind, Language};
use illumark::AnalysisConfig;

// =============================================================================
// CONCEPT RANKING
// =============================================================================

#[test]
fn test_heading_bigram_outranks_body_terms() {
    let note = "# Machine Learning\n\nNeural networks learn from training data.\n";
    let concepts = ConceptExtractor::new().extract_concepts(note);

    assert_eq!(concepts[0], "machine learning");
    assert!(concepts.iter().all(|c| c.chars().count() > 3));
}

#[test]
fn test_stopwords_never_surface() {
    let note = "The quick brown fox jumps over the lazy dog and then it rests.";
    let concepts = ConceptExtractor::new().extract_concepts(note);

    assert!(!concepts.iter().any(|c| c == "the"));
    assert!(!concepts.iter().any(|c| c == "and"));
    assert!(!concepts.iter().any(|c| c == "then"));
}

#[test]
fn test_emphasis_raises_term_weight() {
    let note = "plain words everywhere\nplain words everywhere\n**glaciers** mentioned once";
    let concepts = ConceptExtractor::new().extract_concepts(note);

    // A single bold mention earns enough weight to survive extraction.
    assert!(concepts.iter().any(|c| c.contains("glaciers")));
}

#[test]
fn test_configured_concept_limit() {
    let note = "# Ocean Currents\n\nWarm currents move tropical water toward polar regions \
                while cold currents return dense water along the seafloor.";
    let extractor =
        ConceptExtractor::with_config(AnalysisConfig::new().with_max_concepts(2));

    assert!(extractor.extract_concepts(note).len() <= 2);
}

#[test]
fn test_extraction_is_deterministic() {
    let note = "# Coral Reefs\n\nReefs host *thousands* of **marine species** in warm \
                shallow water.\n\n- biodiversity\n- symbiosis";
    let extractor = ConceptExtractor::new();

    assert_eq!(extractor.extract_concepts(note), extractor.extract_concepts(note));
}

// =============================================================================
// LANGUAGE AND CONTENT KIND
// =============================================================================

#[test]
fn test_korean_note_detected() {
    let extractor = ConceptExtractor::new();
    assert_eq!(extractor.detect_language("광합성은 빛을 에너지로 바꿉니다"), Language::Ko);
    assert_eq!(
        extractor.detect_language("Photosynthesis converts light"),
        Language::En
    );
}

#[test]
fn test_mixed_note_follows_dominant_script() {
    let extractor = ConceptExtractor::new();
    // A single Hangul word inside an English sentence stays English.
    assert_eq!(
        extractor.detect_language("The Korean word for science is 과학 as noted"),
        Language::En
    );
}

#[test]
fn test_content_kind_scientific() {
    let note = "Our experiment measured the cell membrane: the research data supports \
                the hypothesis.";
    assert_eq!(
        ConceptExtractor::new().detect_content_kind(note),
        ContentKind::Scientific
    );
}

#[test]
fn test_content_kind_defaults_to_personal_notes() {
    assert_eq!(
        ConceptExtractor::new().detect_content_kind("groceries: milk, eggs, bread"),
        ContentKind::PersonalNotes
    );
}

// =============================================================================
// PER-SECTION TOPICS
// =============================================================================

#[test]
fn test_topics_keyed_by_heading() {
    let note = "# Volcanoes\n\nMagma rises through vents.\n\n# Earthquakes\n\nPlates slip \
                along faults.";
    let topics = ConceptExtractor::new().topics_by_section(note);

    assert_eq!(topics.len(), 2);
    assert_eq!(topics[0].0, "Volcanoes");
    assert_eq!(topics[1].0, "Earthquakes");
    // Section topics come from body content, not the heading itself.
    assert!(topics[0].1.iter().any(|t| t.contains("magma")));
}

#[test]
fn test_headingless_section_gets_placeholder_key() {
    let note = "an opening line with no heading above it\n\n# Later Heading\nbody";
    let topics = ConceptExtractor::new().topics_by_section(note);

    assert_eq!(topics[0].0, "Section at line 1");
}
