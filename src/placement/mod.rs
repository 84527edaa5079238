//! Placement scoring.
//!
//! Given a document and the intent text of a generated image, ranks document
//! sections as insertion candidates and resolves multi-image assignment
//! without reusing anchor lines.

pub mod scorer;

pub use scorer::{InsertPosition, InsertionLocation, PlacementScorer, PlacementSuggestion};
