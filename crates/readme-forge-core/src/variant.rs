//! Template variants: named bundles of section headings applied to the same
//! underlying project data.
//!
//! Both variants render identical data-derived content in the same fixed order;
//! they differ only in the heading text and in the academic variant's fallback
//! sentence for an empty demo section.

use serde::{Deserialize, Serialize};

/// Which heading bundle to render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    /// Plain section headers ("Description", "Features", ...).
    #[default]
    Default,
    /// Research-oriented headers ("Academic Project Overview", ...).
    Academic,
}

/// The heading text for every section of the rendered document.
#[derive(Debug, Clone, Copy)]
pub struct SectionHeaders {
    pub description: &'static str,
    pub status: &'static str,
    pub technologies: &'static str,
    pub features: &'static str,
    pub installation: &'static str,
    pub usage: &'static str,
    pub demo: &'static str,
    pub social: &'static str,
    pub screenshots: &'static str,
    pub contributing: &'static str,
    pub license: &'static str,
    /// Sentence substituted for an empty demo body, if the variant has one.
    /// `None` means an empty demo omits the section entirely.
    pub demo_fallback: Option<&'static str>,
}

const DEFAULT_HEADERS: SectionHeaders = SectionHeaders {
    description: "Description",
    status: "Project Status",
    technologies: "Technologies",
    features: "Features",
    installation: "Installation",
    usage: "Usage",
    demo: "Demo",
    social: "Connect",
    screenshots: "Screenshots",
    contributing: "Contributing",
    license: "License",
    demo_fallback: None,
};

const ACADEMIC_HEADERS: SectionHeaders = SectionHeaders {
    description: "Academic Project Overview",
    status: "Research Context",
    technologies: "Methodologies & Technologies",
    features: "Research Highlights",
    installation: "Experimental Setup",
    usage: "Running the Experiments",
    demo: "Published Results",
    social: "Contact & Collaboration",
    screenshots: "Figures",
    contributing: "Collaboration & Contributions",
    license: "License & Citation",
    demo_fallback: Some("Results and artifacts will be linked here upon publication."),
};

impl TemplateVariant {
    /// The heading bundle for this variant.
    pub fn headers(&self) -> &'static SectionHeaders {
        match self {
            Self::Default => &DEFAULT_HEADERS,
            Self::Academic => &ACADEMIC_HEADERS,
        }
    }

    /// The CLI-facing identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Academic => "academic",
        }
    }

    /// Resolve a variant by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::Default),
            "academic" => Some(Self::Academic),
            _ => None,
        }
    }
}

impl std::str::FromStr for TemplateVariant {
    type Err = crate::error::ReadmeForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| crate::error::ReadmeForgeError::UnknownVariant(s.to_string()))
    }
}
