//! Compile-time embedded badge URL templates.
//!
//! Each constant loads a template file from `templates/badges/` via
//! [`include_str!`]. The paths are relative to this source file
//! (`crates/readme-forge-core/src/templates/embedded.rs`).
//!
//! The files deliberately carry no trailing newline: their whole content is the
//! URL pattern, and a stray newline would end up inside the Markdown image link.

pub const BADGE_NPM: &str = include_str!("../../../../templates/badges/npm.tmpl");
pub const BADGE_BUILD: &str = include_str!("../../../../templates/badges/build.tmpl");
pub const BADGE_COVERAGE: &str = include_str!("../../../../templates/badges/coverage.tmpl");
pub const BADGE_DOWNLOADS: &str = include_str!("../../../../templates/badges/downloads.tmpl");
pub const BADGE_LICENSE: &str = include_str!("../../../../templates/badges/license.tmpl");
pub const BADGE_STARS: &str = include_str!("../../../../templates/badges/stars.tmpl");
pub const BADGE_LAST_COMMIT: &str = include_str!("../../../../templates/badges/last_commit.tmpl");
pub const BADGE_CONTRIBUTORS: &str = include_str!("../../../../templates/badges/contributors.tmpl");
