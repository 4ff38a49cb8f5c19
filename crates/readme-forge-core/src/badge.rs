//! The badge catalog: shields.io URL generation keyed by badge kind.
//!
//! Badge URLs are generated once, at `badge add` time, and stored in the
//! project file as plain strings. The renderer never generates URLs itself, so
//! [`crate::render::render`] stays total even if a template were broken.

use serde_json::json;

use crate::error::Result;
use crate::render::slugify;
use crate::templates::{embedded, renderer::TemplateRenderer};

/// The badge types offered by the catalog.
///
/// Each kind maps to one embedded shields.io URL template; the mapping is an
/// explicit match rather than any string-keyed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Npm,
    Build,
    Coverage,
    Downloads,
    License,
    Stars,
    LastCommit,
    Contributors,
}

impl BadgeKind {
    /// All catalog entries, in display order.
    pub const ALL: [BadgeKind; 8] = [
        BadgeKind::Npm,
        BadgeKind::Build,
        BadgeKind::Coverage,
        BadgeKind::Downloads,
        BadgeKind::License,
        BadgeKind::Stars,
        BadgeKind::LastCommit,
        BadgeKind::Contributors,
    ];

    /// The CLI-facing identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Build => "build",
            Self::Coverage => "coverage",
            Self::Downloads => "downloads",
            Self::License => "license",
            Self::Stars => "stars",
            Self::LastCommit => "last-commit",
            Self::Contributors => "contributors",
        }
    }

    /// Resolve a badge kind by its identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "npm" => Some(Self::Npm),
            "build" => Some(Self::Build),
            "coverage" => Some(Self::Coverage),
            "downloads" => Some(Self::Downloads),
            "license" => Some(Self::License),
            "stars" => Some(Self::Stars),
            "last-commit" => Some(Self::LastCommit),
            "contributors" => Some(Self::Contributors),
            _ => None,
        }
    }

    /// One-line description shown by `badge list`.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Npm => "Latest published npm version",
            Self::Build => "CI workflow status",
            Self::Coverage => "Code coverage from codecov",
            Self::Downloads => "Monthly npm downloads",
            Self::License => "Repository license",
            Self::Stars => "GitHub star count",
            Self::LastCommit => "Time since the last commit",
            Self::Contributors => "Contributor count",
        }
    }

    /// The embedded URL template for this kind.
    pub fn template(&self) -> &'static str {
        match self {
            Self::Npm => embedded::BADGE_NPM,
            Self::Build => embedded::BADGE_BUILD,
            Self::Coverage => embedded::BADGE_COVERAGE,
            Self::Downloads => embedded::BADGE_DOWNLOADS,
            Self::License => embedded::BADGE_LICENSE,
            Self::Stars => embedded::BADGE_STARS,
            Self::LastCommit => embedded::BADGE_LAST_COMMIT,
            Self::Contributors => embedded::BADGE_CONTRIBUTORS,
        }
    }

    /// Generate the shields.io URL for this badge, keyed off the project title.
    pub fn url_for(&self, title: &str) -> Result<String> {
        let renderer = TemplateRenderer::new();
        let data = json!({ "slug": slugify(title) });
        renderer.render(self.template(), &data)
    }
}

impl std::str::FromStr for BadgeKind {
    type Err = crate::error::ReadmeForgeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| crate::error::ReadmeForgeError::UnknownBadge(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips() {
        for kind in BadgeKind::ALL {
            assert_eq!(BadgeKind::from_name(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert!(BadgeKind::from_name("sponsors").is_none());
        assert!(BadgeKind::from_name("").is_none());
    }

    #[test]
    fn test_parse_error_names_input() {
        let err = "sponsors".parse::<BadgeKind>().unwrap_err();
        assert!(err.to_string().contains("sponsors"));
    }

    #[test]
    fn test_url_uses_slugified_title() {
        let url = BadgeKind::Npm.url_for("My Cool Tool").unwrap();
        assert_eq!(url, "https://img.shields.io/npm/v/my-cool-tool");
    }

    #[test]
    fn test_every_template_renders() {
        for kind in BadgeKind::ALL {
            let url = kind.url_for("Demo App").unwrap();
            assert!(url.starts_with("https://img.shields.io/"), "{kind:?}: {url}");
            assert!(url.contains("demo-app"), "{kind:?}: {url}");
            assert!(!url.contains('\n'), "{kind:?}: {url}");
        }
    }
}
