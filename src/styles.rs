//! Static catalog of visual style templates.
//!
//! Styles carry the prompt boilerplate around a subject description: a
//! leading modifier clause and trailing quality enhancers. They are grouped
//! into quality tiers; lookups are pure functions over the table.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Quality tier of a style, flagship first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleTier {
    /// Flagship quality.
    S,
    /// High quality.
    A,
    /// Specialized.
    B,
    /// Niche.
    C,
}

impl StyleTier {
    /// Short label for the tier.
    pub fn label(self) -> &'static str {
        match self {
            Self::S => "Flagship Quality",
            Self::A => "High Quality",
            Self::B => "Specialized",
            Self::C => "Niche",
        }
    }

    /// One-line guidance on when the tier applies.
    pub fn description(self) -> &'static str {
        match self {
            Self::S => "Best for educational and professional content",
            Self::A => "Excellent for specialized use cases",
            Self::B => "Strong for specific content types",
            Self::C => "Use case specific styles",
        }
    }
}

/// A visual style catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleTemplate {
    /// Style identifier.
    pub id: &'static str,

    /// Human-readable name.
    pub name: &'static str,

    /// Quality tier.
    pub tier: StyleTier,

    /// Leading prompt clause establishing the style.
    pub modifier: &'static str,

    /// Trailing quality-enhancer clause.
    pub quality_enhancers: &'static str,

    /// Content this style suits.
    pub best_for: &'static [&'static str],
}

/// The full style catalog, grouped by tier.
pub static STYLE_TEMPLATES: [StyleTemplate; 11] = [
    StyleTemplate {
        id: "hyper_realism",
        name: "Hyper-Realism",
        tier: StyleTier::S,
        modifier: "In hyper-realistic photographic style with extreme detail and professional lighting,",
        quality_enhancers: "professional photography, studio lighting, extreme detail, 8K resolution",
        best_for: &["Product mockups", "Technical precision", "Realistic scenes", "Educational accuracy"],
    },
    StyleTemplate {
        id: "digital_art",
        name: "Digital Art",
        tier: StyleTier::S,
        modifier: "In modern digital painting style with rich colors and painterly textures,",
        quality_enhancers: "highly detailed, modern digital painting, vibrant colors, professional quality",
        best_for: &["Concept visualization", "Artistic scenes", "Landscapes", "Abstract ideas"],
    },
    StyleTemplate {
        id: "illustration",
        name: "Illustration",
        tier: StyleTier::S,
        modifier: "In clean editorial illustration style with vector-like clarity and modern design,",
        quality_enhancers: "vector-like clarity, clean lines, editorial quality, professional illustration",
        best_for: &["Infographics", "Educational diagrams", "Process flows", "Clean concepts"],
    },
    StyleTemplate {
        id: "3d_render",
        name: "3D Render",
        tier: StyleTier::A,
        modifier: "In professional 3D rendered style with realistic materials and lighting,",
        quality_enhancers: "professional 3D rendering, realistic materials, raytracing, high quality",
        best_for: &["Technical visualization", "Product mockups", "Architectural concepts"],
    },
    StyleTemplate {
        id: "anime",
        name: "Anime",
        tier: StyleTier::A,
        modifier: "In vibrant anime art style with expressive characters and dynamic composition,",
        quality_enhancers: "anime style, expressive, vibrant colors, dynamic poses, high quality",
        best_for: &["Characters", "Narrative scenes", "Action sequences", "Engaging visuals"],
    },
    StyleTemplate {
        id: "watercolor",
        name: "Watercolor",
        tier: StyleTier::A,
        modifier: "In delicate watercolor painting style with soft washes and organic textures,",
        quality_enhancers: "watercolor painting, soft washes, organic textures, artistic quality",
        best_for: &["Nature", "Abstract concepts", "Gentle scenes", "Artistic presentations"],
    },
    StyleTemplate {
        id: "manga",
        name: "Manga",
        tier: StyleTier::B,
        modifier: "In detailed manga illustration style with dramatic compositions and expressive characters,",
        quality_enhancers: "manga style, detailed linework, dramatic composition, expressive",
        best_for: &["Storytelling", "Character designs", "Action sequences", "Comics"],
    },
    StyleTemplate {
        id: "cinematic",
        name: "Cinematic",
        tier: StyleTier::B,
        modifier: "In dramatic cinematic style with movie-quality composition and lighting,",
        quality_enhancers: "cinematic composition, dramatic lighting, movie quality, epic scale",
        best_for: &["Dramatic scenes", "Epic moments", "Movie-poster aesthetic", "Storytelling"],
    },
    StyleTemplate {
        id: "oil_painting",
        name: "Oil Painting",
        tier: StyleTier::B,
        modifier: "In classical oil painting style with rich textures and masterful brushwork,",
        quality_enhancers: "oil painting, classical style, rich textures, masterful brushwork",
        best_for: &["Classical art", "Portraits", "Historical recreations", "Timeless scenes"],
    },
    StyleTemplate {
        id: "sketch",
        name: "Sketch",
        tier: StyleTier::C,
        modifier: "In artistic sketch style with hand-drawn lines and gestural marks,",
        quality_enhancers: "pencil sketch, hand-drawn, gestural, artistic",
        best_for: &["Rough concepts", "Ideation", "Hand-drawn aesthetic", "Draft visuals"],
    },
    StyleTemplate {
        id: "pixel_art",
        name: "Pixel Art",
        tier: StyleTier::C,
        modifier: "In detailed pixel art style with retro gaming aesthetic,",
        quality_enhancers: "pixel art, retro style, detailed pixels, gaming aesthetic",
        best_for: &["Retro themes", "Game design", "Nostalgia content", "8-bit aesthetic"],
    },
];

/// Look up a style by id.
pub fn style_by_id(id: &str) -> Option<&'static StyleTemplate> {
    STYLE_TEMPLATES.iter().find(|style| style.id == id)
}

/// Look up a style by id, failing on unknown ids.
pub fn require_style(id: &str) -> Result<&'static StyleTemplate> {
    style_by_id(id).ok_or_else(|| Error::UnknownStyle(id.to_string()))
}

/// The default style (hyper-realism).
pub fn default_style() -> &'static StyleTemplate {
    &STYLE_TEMPLATES[0]
}

/// All styles in a tier, catalog order.
pub fn styles_by_tier(tier: StyleTier) -> Vec<&'static StyleTemplate> {
    STYLE_TEMPLATES.iter().filter(|s| s.tier == tier).collect()
}

/// The first resolvable style from a use case's preference list, or the
/// default style when none resolves.
pub fn recommend_for_use_case(best_styles: &[&str]) -> &'static StyleTemplate {
    best_styles
        .iter()
        .find_map(|id| style_by_id(id))
        .unwrap_or_else(default_style)
}
