//! Error types for the analysis library.
//!
//! The analysis core itself is total: parsing, extraction, classification, and
//! placement always produce a usable value, degrading to documented defaults on
//! sparse or malformed input. Errors only arise at the prompt-rendering boundary
//! and from strict catalog lookups.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while preparing image-generation prompts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A rendered prompt still contains unresolved `{slot}` markers.
    ///
    /// This indicates a catalog entry whose pattern uses a placeholder the
    /// renderer does not know about. It is a data error in the template,
    /// not a crash condition.
    #[error("Unresolved placeholders in prompt: {0}")]
    UnresolvedPlaceholders(String),

    /// No style with the given id exists in the style catalog.
    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    /// No use-case template with the given id exists in the catalog.
    #[error("Unknown use case: {0}")]
    UnknownUseCase(String),
}
