use std::path::Path;

use anyhow::Result;
use dialoguer::{Input, Select};

use readme_forge_core::model::{License, ProjectDescription, SocialLinks};
use readme_forge_core::project;

use crate::output;

/// Initialize a new readme-forge project file.
///
/// With `--defaults`, writes a starter record non-interactively. Otherwise
/// walks the full project form: free-text fields, entry-at-a-time loops for
/// the list fields, and a license picker. Fails if a project file already
/// exists at the config path.
pub fn run(config_path: &Path, title: &str, defaults: bool) -> Result<()> {
    output::print_header(&format!("readme-forge init: {title}"));

    output::print_step(1, 2, "Collecting project details");
    let project = if defaults {
        ProjectDescription::starter(title)
    } else {
        prompt_form(title)?
    };

    output::print_step(2, 2, "Writing project file");
    project::create(config_path, &project)?;

    output::print_success(&format!(
        "Project file written to {}",
        config_path.display()
    ));
    println!();
    println!("  Next steps:");
    println!("    readme-forge badge add stars");
    println!("    readme-forge preview");
    println!("    readme-forge render --template academic");
    println!();

    Ok(())
}

fn prompt_form(title: &str) -> Result<ProjectDescription> {
    let description: String = Input::new()
        .with_prompt("Project description")
        .allow_empty(true)
        .interact_text()?;

    let features = prompt_list("Feature")?;
    let technologies = prompt_list("Technology")?;
    let installation = prompt_list("Installation command")?;
    let usage = prompt_list("Usage line")?;
    let screenshots = prompt_list("Screenshot URL")?;

    let demo: String = Input::new()
        .with_prompt("Demo link (empty for none)")
        .allow_empty(true)
        .interact_text()?;

    let social = SocialLinks {
        linkedin: prompt_optional("LinkedIn URL")?,
        twitter: prompt_optional("Twitter URL")?,
        website: prompt_optional("Website URL")?,
    };

    let contributing: String = Input::new()
        .with_prompt("Contributing guidelines")
        .allow_empty(true)
        .interact_text()?;

    let project_type = prompt_optional("Project type (e.g. Web App, Library)")?;
    let project_status = prompt_optional("Project status (e.g. Active, Archived)")?;

    let license_names: Vec<&str> = License::ALL.iter().map(|l| l.as_str()).collect();
    let selection = Select::new()
        .with_prompt("License")
        .items(&license_names)
        .default(0)
        .interact()?;
    let license = License::ALL[selection];

    Ok(ProjectDescription {
        title: title.to_string(),
        description,
        features,
        installation,
        usage,
        technologies,
        screenshots,
        badges: Vec::new(),
        social,
        demo,
        contributing,
        license,
        project_type,
        project_status,
    })
}

/// Collect list entries one at a time; an empty answer ends the loop.
///
/// This is the CLI counterpart of the form's add/remove row buttons. Blank
/// entries are never stored here, but the renderer would filter them anyway.
fn prompt_list(label: &str) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    loop {
        let entry: String = Input::new()
            .with_prompt(format!("{label} {} (empty to finish)", entries.len() + 1))
            .allow_empty(true)
            .interact_text()?;
        if entry.trim().is_empty() {
            break;
        }
        entries.push(entry);
    }
    Ok(entries)
}

fn prompt_optional(label: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(format!("{label} (empty for none)"))
        .allow_empty(true)
        .interact_text()?)
}
