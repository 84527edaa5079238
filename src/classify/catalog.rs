//! Static catalog of use-case templates.
//!
//! The catalog is immutable, process-wide reference data; lookups are pure
//! functions over the table. Catalog order is load-bearing: equal-confidence
//! matches keep this order.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier for a use-case template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCaseId {
    /// Technical concepts, processes, systems, frameworks.
    EducationalDiagram,
    /// Abstract ideas, theories, mental models.
    ConceptVisualization,
    /// Step-by-step procedures, workflows, algorithms.
    ProcessFlow,
    /// Fiction writing, personas, character designs.
    CharacterIllustration,
    /// Environment descriptions, world-building, atmosphere.
    SceneSetting,
    /// Statistics, comparisons, relationships, metrics.
    DataVisualization,
    /// Historical events, figures, periods, artifacts.
    HistoricalRecreation,
    /// Biology, chemistry, physics concepts.
    ScientificIllustration,
    /// Spaces, structures, interior/exterior designs.
    ArchitecturalVisualization,
    /// UI/UX, physical products, prototypes.
    ProductMockup,
}

impl UseCaseId {
    /// The snake_case identifier string for this use case.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EducationalDiagram => "educational_diagram",
            Self::ConceptVisualization => "concept_visualization",
            Self::ProcessFlow => "process_flow",
            Self::CharacterIllustration => "character_illustration",
            Self::SceneSetting => "scene_setting",
            Self::DataVisualization => "data_visualization",
            Self::HistoricalRecreation => "historical_recreation",
            Self::ScientificIllustration => "scientific_illustration",
            Self::ArchitecturalVisualization => "architectural_visualization",
            Self::ProductMockup => "product_mockup",
        }
    }
}

/// A catalog entry pairing a content category with a prompt pattern and
/// recommended styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UseCaseTemplate {
    /// Template identifier.
    pub id: UseCaseId,

    /// Human-readable name.
    pub name: &'static str,

    /// What this template is for.
    pub description: &'static str,

    /// Prompt pattern with `{slot}` placeholders filled by the prompt
    /// renderer.
    pub prompt_pattern: &'static str,

    /// Style ids that suit this use case, best first.
    pub best_styles: &'static [&'static str],

    /// Indicator keywords scored against document content.
    pub keywords: &'static [&'static str],
}

/// The full use-case catalog, in scoring order.
pub static USE_CASE_TEMPLATES: [UseCaseTemplate; 10] = [
    UseCaseTemplate {
        id: UseCaseId::EducationalDiagram,
        name: "Educational Diagram",
        description: "Technical concepts, processes, systems, frameworks",
        prompt_pattern: "create a detailed educational diagram illustrating {concepts} showing {relationships} with clear labels and visual hierarchy",
        best_styles: &["illustration", "digital_art", "hyper_realism"],
        keywords: &[
            "learn", "teach", "explain", "concept", "framework", "system", "principle",
            "theory", "fundamentals", "basics", "introduction", "guide", "tutorial",
        ],
    },
    UseCaseTemplate {
        id: UseCaseId::ConceptVisualization,
        name: "Concept Visualization",
        description: "Abstract ideas, theories, mental models",
        prompt_pattern: "visualize the concept of {concepts} incorporating {elements} in an abstract yet clear composition",
        best_styles: &["digital_art", "watercolor", "illustration"],
        keywords: &[
            "idea", "theory", "abstract", "mental", "model", "philosophy", "thinking",
            "understanding", "perception", "cognition",
        ],
    },
    UseCaseTemplate {
        id: UseCaseId::ProcessFlow,
        name: "Process Flow",
        description: "Step-by-step procedures, workflows, algorithms",
        prompt_pattern: "create a step-by-step process flow diagram showing {process} with sequential stages",
        best_styles: &["illustration", "digital_art", "3d_render"],
        keywords: &[
            "step", "process", "flow", "workflow", "procedure", "algorithm", "sequence",
            "pipeline", "stages", "phases",
        ],
    },
    UseCaseTemplate {
        id: UseCaseId::CharacterIllustration,
        name: "Character Illustration",
        description: "Fiction writing, personas, character designs",
        prompt_pattern: "create a full character illustration of {character} with {traits} emphasizing distinctive features",
        best_styles: &["anime", "digital_art", "manga", "hyper_realism"],
        keywords: &[
            "character", "person", "protagonist", "hero", "villain", "persona", "figure",
            "portrait", "individual",
        ],
    },
    UseCaseTemplate {
        id: UseCaseId::SceneSetting,
        name: "Scene Setting",
        description: "Environment descriptions, world-building, atmosphere",
        prompt_pattern: "create an atmospheric scene depicting {setting} featuring {elements} with strong environmental storytelling",
        best_styles: &["digital_art", "cinematic", "watercolor", "oil_painting"],
        keywords: &[
            "scene", "environment", "landscape", "setting", "world", "place", "location",
            "atmosphere", "mood", "ambiance",
        ],
    },
    UseCaseTemplate {
        id: UseCaseId::DataVisualization,
        name: "Data Visualization",
        description: "Statistics, comparisons, relationships, metrics",
        prompt_pattern: "create a clear data visualization comparing {data} with intuitive visual encoding",
        best_styles: &["illustration", "digital_art", "3d_render"],
        keywords: &[
            "data", "statistics", "graph", "chart", "metrics", "numbers", "comparison",
            "analysis", "trend", "growth",
        ],
    },
    UseCaseTemplate {
        id: UseCaseId::HistoricalRecreation,
        name: "Historical Recreation",
        description: "Historical events, figures, periods, artifacts",
        prompt_pattern: "create a historically accurate recreation of {subject} with period-appropriate details",
        best_styles: &["hyper_realism", "oil_painting", "digital_art"],
        keywords: &[
            "history", "historical", "ancient", "medieval", "period", "era", "century",
            "civilization", "empire", "dynasty",
        ],
    },
    UseCaseTemplate {
        id: UseCaseId::ScientificIllustration,
        name: "Scientific Illustration",
        description: "Biology, chemistry, physics concepts, technical accuracy",
        prompt_pattern: "create a detailed scientific illustration of {subject} with technical accuracy and clear annotations",
        best_styles: &["hyper_realism", "illustration", "digital_art", "3d_render"],
        keywords: &[
            "science", "biology", "chemistry", "physics", "cell", "molecule", "atom",
            "organism", "experiment", "research",
        ],
    },
    UseCaseTemplate {
        id: UseCaseId::ArchitecturalVisualization,
        name: "Architectural Visualization",
        description: "Spaces, structures, designs, interior/exterior",
        prompt_pattern: "create an architectural visualization of {structure} with professional rendering quality",
        best_styles: &["3d_render", "hyper_realism", "illustration"],
        keywords: &[
            "architecture", "building", "structure", "design", "interior", "exterior",
            "space", "room", "house", "construction",
        ],
    },
    UseCaseTemplate {
        id: UseCaseId::ProductMockup,
        name: "Product Mockup",
        description: "UI/UX, physical products, prototypes, designs",
        prompt_pattern: "create a professional product mockup of {product} with clean presentation",
        best_styles: &["hyper_realism", "3d_render", "illustration"],
        keywords: &[
            "product", "mockup", "prototype", "design", "ui", "ux", "interface", "app",
            "device", "gadget",
        ],
    },
];

/// Look up a template by id.
pub fn template_by_id(id: UseCaseId) -> &'static UseCaseTemplate {
    USE_CASE_TEMPLATES
        .iter()
        .find(|t| t.id == id)
        .expect("every UseCaseId has a catalog entry")
}

/// Look up a template by its identifier string.
pub fn template_by_name(name: &str) -> Result<&'static UseCaseTemplate> {
    USE_CASE_TEMPLATES
        .iter()
        .find(|t| t.id.as_str() == name)
        .ok_or_else(|| Error::UnknownUseCase(name.to_string()))
}

/// The fallback template used when no strong match exists.
pub fn default_template() -> &'static UseCaseTemplate {
    template_by_id(UseCaseId::ConceptVisualization)
}
