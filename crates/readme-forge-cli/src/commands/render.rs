use std::path::Path;

use anyhow::Result;

use readme_forge_core::project;
use readme_forge_core::render::{download_filename, render};
use readme_forge_core::variant::TemplateVariant;

use crate::output;

/// Render the README and write it to disk (or stdout).
///
/// The default output name is `<slugified-title>-README.md`, matching what the
/// browser form's download button would have produced. `--copy` additionally
/// places the document on the clipboard; clipboard failure is reported as a
/// warning and never affects the rendered output or the exit status.
pub fn run(
    config_path: &Path,
    variant: TemplateVariant,
    output_path: Option<&Path>,
    stdout: bool,
    copy: bool,
) -> Result<()> {
    let project = project::load_project(config_path)?;
    let markdown = render(&project, variant);

    if copy {
        copy_to_clipboard(&markdown, stdout);
    }

    if stdout {
        // Nothing but the document itself; keeps the output pipe-friendly.
        print!("{markdown}");
        return Ok(());
    }

    output::print_header("readme-forge render");
    output::print_key_value("Template", variant.as_str());

    let default_name = download_filename(&project.title);
    let path = output_path.unwrap_or(Path::new(&default_name));
    std::fs::write(path, &markdown)?;

    output::print_success("README rendered");
    output::print_key_value("Output", &path.display().to_string());
    output::print_key_value("Size", &format!("{} bytes", markdown.len()));

    Ok(())
}

fn copy_to_clipboard(markdown: &str, quiet: bool) {
    let result = arboard::Clipboard::new().and_then(|mut clipboard| {
        clipboard.set_text(markdown.to_string())
    });
    match result {
        Ok(()) if quiet => tracing::info!("copied README to clipboard"),
        Ok(()) => output::print_success("Copied to clipboard"),
        Err(e) if quiet => tracing::warn!("clipboard unavailable: {e}"),
        Err(e) => output::print_warning(&format!("Clipboard unavailable: {e}")),
    }
}
