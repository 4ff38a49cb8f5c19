//! Unified error types for the readme-forge toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during readme-forge operations.
///
/// Note that [`crate::render::render`] itself never fails; errors only arise
/// around it — loading or saving the project file, generating badge URLs, or
/// writing the rendered document to disk.
#[derive(Error, Debug)]
pub enum ReadmeForgeError {
    // --- Project file ---

    /// The project file (`readme-forge.json`) was not found.
    #[error("project file not found at {path}")]
    ProjectFileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The project file exists but contains invalid JSON.
    #[error("failed to parse project file at {path}")]
    ProjectFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Attempted to initialize a project where a project file already exists.
    #[error("project file already exists: {0}")]
    ProjectExists(PathBuf),

    /// The current directory is not a readme-forge project (missing project file).
    #[error("not a readme-forge project (missing readme-forge.json)")]
    NotAProject,

    // --- Lookups ---

    /// The specified template variant is not one of: `default`, `academic`.
    #[error("unknown template variant: {0} (supported: default, academic)")]
    UnknownVariant(String),

    /// The specified badge kind is not part of the badge catalog.
    #[error("unknown badge kind: {0} (supported: npm, build, coverage, downloads, license, stars, last-commit, contributors)")]
    UnknownBadge(String),

    /// The specified license is not part of the supported set.
    #[error("unknown license: {0} (supported: MIT, Apache-2.0, GPL-3.0, BSD-3-Clause, ISC, None)")]
    UnknownLicense(String),

    // --- Templates ---

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, ReadmeForgeError>`.
pub type Result<T> = std::result::Result<T, ReadmeForgeError>;
