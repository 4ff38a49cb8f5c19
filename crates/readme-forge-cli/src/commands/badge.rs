use std::path::Path;

use anyhow::Result;

use readme_forge_core::badge::BadgeKind;
use readme_forge_core::project;

use crate::output;

/// Generate a badge URL from the catalog and append it to the project.
pub fn add(config_path: &Path, kind: BadgeKind) -> Result<()> {
    output::print_header("readme-forge badge add");

    let mut project = project::load_project(config_path)?;
    let url = kind.url_for(&project.title)?;

    project.badges.push(url.clone());
    project::save(config_path, &project)?;

    output::print_success(&format!("Added {} badge", kind.as_str()));
    output::print_key_value("URL", &url);
    output::print_key_value("Badges", &project.badges.len().to_string());

    Ok(())
}

/// List the badge catalog, and the project's current badges when a project
/// file is present. Works outside a project directory too.
pub fn list(config_path: &Path) -> Result<()> {
    output::print_header("Badge catalog");
    for kind in BadgeKind::ALL {
        output::print_key_value(kind.as_str(), kind.description());
    }

    if let Ok(project) = project::load_project(config_path) {
        println!();
        if project.badges.is_empty() {
            println!("  No badges added yet.");
        } else {
            println!("  Added:");
            for url in &project.badges {
                println!("    {url}");
            }
        }
    }

    Ok(())
}
