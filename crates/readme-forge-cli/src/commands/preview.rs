use std::path::Path;

use anyhow::Result;

use readme_forge_core::project;
use readme_forge_core::render::render;
use readme_forge_core::variant::TemplateVariant;

/// Render the README to stdout.
///
/// The CLI counterpart of the form's preview pane. Prints the raw Markdown and
/// nothing else, so the output can be piped into a pager or a Markdown viewer.
pub fn run(config_path: &Path, variant: TemplateVariant) -> Result<()> {
    let project = project::load_project(config_path)?;
    print!("{}", render(&project, variant));
    Ok(())
}
