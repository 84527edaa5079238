//! # Illumark
//!
//! Deterministic markdown analysis core for AI image placement.
//!
//! Illumark reads a markdown note and answers three questions: what is this
//! note about, what kind of illustration fits it, and where in the note
//! should generated images go. Everything is implemented with lexical
//! heuristics (regexes, keyword tables, weighted term frequency) so the same
//! input always produces the same output — no network, no model calls.
//!
//! ## Pipeline
//!
//! - **Structure parsing**: a single-pass markdown parser producing headings,
//!   sections, paragraphs, lists, and fenced code blocks with line numbers
//! - **Concept extraction**: weighted unigram/bigram frequency over heading,
//!   emphasis, and body channels, with English/Korean stopword-aware cleaning
//! - **Use-case classification**: keyword scoring against ten illustration
//!   use cases with regex context bonuses and a confidence threshold
//! - **Placement scoring**: per-section relevance of an image prompt, with
//!   insertion anchors, context previews, and greedy multi-image assignment
//! - **Prompt building**: slot-template instantiation over eleven named art
//!   styles plus validation and variation suffixes
//!
//! ## Quick Start
//!
//! ```
//! use illumark::{ConceptExtractor, PlacementScorer, UseCaseClassifier};
//!
//! let note = "# Machine Learning\n\nNeural networks learn from training data.\n";
//!
//! let concepts = ConceptExtractor::new().extract_concepts(note);
//! assert_eq!(concepts[0], "machine learning");
//!
//! let detected = UseCaseClassifier::new().detect(note, &concepts);
//! let suggestions =
//!     PlacementScorer::new().analyze_placement_options(note, "machine learning diagram", 1);
//! # let _ = (detected, suggestions);
//! ```
//!
//! ## License
//!
//! Licensed under either of the Apache License, Version 2.0 or the MIT
//! license, at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Analysis configuration
pub mod config;

// Document structure parsing
pub mod structure;

// Concept extraction and language detection
pub mod concepts;

// Use-case classification
pub mod classify;

// Image placement scoring
pub mod placement;

// Style catalog and prompt building
pub mod prompt;
pub mod styles;

// Lexical content profiling
pub mod profile;

pub use config::AnalysisConfig;
pub use error::{Error, Result};

pub use classify::{UseCaseClassifier, UseCaseId, UseCaseMatch, UseCaseTemplate};
pub use concepts::{ConceptExtractor, ContentKind, Language};
pub use placement::{InsertPosition, InsertionLocation, PlacementScorer, PlacementSuggestion};
pub use profile::{profile_content, ContentProfile};
pub use prompt::{PromptGenerator, PromptValidation};
pub use structure::{NoteStructure, Section, StructureParser};
pub use styles::{StyleTemplate, StyleTier};
