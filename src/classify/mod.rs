//! Use-case classification.
//!
//! Scores document content against a fixed catalog of visual-content
//! categories to choose a prompt template and style family. Scoring is
//! keyword- and regex-based, deterministic, and total: detection always
//! yields a template, falling back to a safe default over noisy weak matches.

pub mod bonus;
pub mod catalog;
pub mod detector;

pub use catalog::{
    default_template, template_by_id, template_by_name, UseCaseId, UseCaseTemplate,
    USE_CASE_TEMPLATES,
};
pub use detector::{UseCaseClassifier, UseCaseMatch};
