//! Project file creation and I/O.
//!
//! One editing session is backed by a single `readme-forge.json` file holding a
//! serialized [`ProjectDescription`]. The `init` command creates it, `badge add`
//! rewrites it, and `render`/`preview` load it.

use std::path::Path;

use crate::error::{ReadmeForgeError, Result};
use crate::model::ProjectDescription;

/// Default name of the project file in the working directory.
pub const PROJECT_FILE: &str = "readme-forge.json";

/// Load a project description from `path`.
pub fn load(path: &Path) -> Result<ProjectDescription> {
    let raw = std::fs::read_to_string(path).map_err(|source| {
        ReadmeForgeError::ProjectFileNotFound {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let project = serde_json::from_str(&raw).map_err(|source| ReadmeForgeError::ProjectFileParse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded project file");
    Ok(project)
}

/// Save a project description to `path` as pretty-printed JSON.
pub fn save(path: &Path, project: &ProjectDescription) -> Result<()> {
    let raw = serde_json::to_string_pretty(project).map_err(|source| {
        ReadmeForgeError::ProjectFileParse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    std::fs::write(path, raw)?;
    tracing::debug!(path = %path.display(), "saved project file");
    Ok(())
}

/// Create a new project file. Fails if one already exists at `path`.
pub fn create(path: &Path, project: &ProjectDescription) -> Result<()> {
    if path.exists() {
        return Err(ReadmeForgeError::ProjectExists(path.to_path_buf()));
    }
    save(path, project)
}

/// Load the project file for a command that requires an existing project.
///
/// Distinguishes "you are not in a project directory" ([`ReadmeForgeError::NotAProject`])
/// from a present-but-broken file, which surfaces as a parse error.
pub fn load_project(path: &Path) -> Result<ProjectDescription> {
    if !path.exists() {
        return Err(ReadmeForgeError::NotAProject);
    }
    load(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::License;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_FILE);

        let mut project = ProjectDescription::starter("My Tool");
        project.description = "A tool.".into();
        project.license = License::Isc;
        project.badges.push("https://img.shields.io/npm/v/my-tool".into());

        save(&path, &project).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded.title, "My Tool");
        assert_eq!(loaded.description, "A tool.");
        assert_eq!(loaded.license, License::Isc);
        assert_eq!(loaded.badges, project.badges);
    }

    #[test]
    fn test_create_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_FILE);

        let project = ProjectDescription::starter("demo");
        create(&path, &project).unwrap();

        let err = create(&path, &project).unwrap_err();
        assert!(matches!(err, ReadmeForgeError::ProjectExists(_)));
    }

    #[test]
    fn test_load_project_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_project(&dir.path().join(PROJECT_FILE)).unwrap_err();
        assert!(matches!(err, ReadmeForgeError::NotAProject));
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ReadmeForgeError::ProjectFileParse { .. }));
    }
}
