//! The project description record that the renderer consumes.
//!
//! A [`ProjectDescription`] is the full in-memory state of one editing session:
//! everything the user has entered, verbatim. Blank entries in the list fields
//! are kept here on purpose — the form may still be mid-edit — and are only
//! filtered out at render time by [`crate::render::render`].

use serde::{Deserialize, Serialize};

/// Everything known about the project being documented.
///
/// All fields default to empty; a `ProjectDescription` is always well-formed
/// input for the renderer, no matter how little of it has been filled in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDescription {
    pub title: String,
    pub description: String,
    /// Feature bullet points, in the order the user added them.
    pub features: Vec<String>,
    /// Shell commands, joined as lines of one fenced `bash` block.
    pub installation: Vec<String>,
    /// Usage example lines, joined as one plain fenced block.
    pub usage: Vec<String>,
    pub technologies: Vec<String>,
    /// Screenshot image URLs.
    pub screenshots: Vec<String>,
    /// Badge image URLs, as produced by [`crate::badge::BadgeKind::url_for`].
    pub badges: Vec<String>,
    pub social: SocialLinks,
    /// Demo link or free text. Empty means "no demo".
    pub demo: String,
    pub contributing: String,
    pub license: License,
    pub project_type: String,
    pub project_status: String,
}

/// Per-platform profile URLs. An empty string means the platform is unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub linkedin: String,
    pub twitter: String,
    pub website: String,
}

impl SocialLinks {
    /// Platform label / URL pairs, in display order, unset platforms included.
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("LinkedIn", self.linkedin.as_str()),
            ("Twitter", self.twitter.as_str()),
            ("Website", self.website.as_str()),
        ]
    }

    /// True when no platform has a non-blank URL.
    pub fn is_empty(&self) -> bool {
        self.entries().iter().all(|(_, url)| url.trim().is_empty())
    }
}

/// The supported license choices, rendered verbatim into the License section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum License {
    #[default]
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[serde(rename = "GPL-3.0")]
    Gpl3,
    #[serde(rename = "BSD-3-Clause")]
    Bsd3Clause,
    #[serde(rename = "ISC")]
    Isc,
    #[serde(rename = "None")]
    None,
}

impl License {
    /// The SPDX-style identifier shown in the rendered README.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mit => "MIT",
            Self::Apache2 => "Apache-2.0",
            Self::Gpl3 => "GPL-3.0",
            Self::Bsd3Clause => "BSD-3-Clause",
            Self::Isc => "ISC",
            Self::None => "None",
        }
    }

    /// Resolve a license by its identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "MIT" => Some(Self::Mit),
            "Apache-2.0" => Some(Self::Apache2),
            "GPL-3.0" => Some(Self::Gpl3),
            "BSD-3-Clause" => Some(Self::Bsd3Clause),
            "ISC" => Some(Self::Isc),
            "None" => Some(Self::None),
            _ => None,
        }
    }

    /// All supported licenses, in the order offered by the init form.
    pub const ALL: [License; 6] = [
        License::Mit,
        License::Apache2,
        License::Gpl3,
        License::Bsd3Clause,
        License::Isc,
        License::None,
    ];
}

impl std::str::FromStr for License {
    type Err = crate::error::ReadmeForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| crate::error::ReadmeForgeError::UnknownLicense(s.to_string()))
    }
}

impl ProjectDescription {
    /// A starter record for a freshly initialized project: the given title,
    /// one empty feature slot (matching the form's initial state), MIT license.
    pub fn starter(title: &str) -> Self {
        Self {
            title: title.to_string(),
            features: vec![String::new()],
            ..Self::default()
        }
    }
}
