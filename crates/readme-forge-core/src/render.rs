//! The README renderer: a pure mapping from a [`ProjectDescription`] and a
//! [`TemplateVariant`] to a Markdown string.
//!
//! [`render`] is total — it returns a string for every well-formed record,
//! never fails, and has no side effects. A missing title simply renders as a
//! bare `# ` heading. User input is inserted verbatim; nothing is escaped.
//!
//! ## Section order
//!
//! badges → title → description → project-type/status → technologies →
//! features → installation → usage → demo → social → screenshots →
//! contributing → license.
//!
//! Sections whose backing data is empty after filtering are omitted outright
//! (no stray heading), with three exceptions: description, contributing, and
//! license always render their heading even over a blank body. That asymmetry
//! is part of the documented output contract.

use crate::model::ProjectDescription;
use crate::variant::TemplateVariant;

/// Render the project description as a Markdown README.
pub fn render(project: &ProjectDescription, variant: TemplateVariant) -> String {
    let headers = variant.headers();
    let mut sections: Vec<String> = Vec::new();

    // Badges sit above the title, one image per line, no heading.
    let badges = filtered(&project.badges);
    if !badges.is_empty() {
        let lines: Vec<String> = badges
            .iter()
            .map(|url| format!("![Badge]({url})"))
            .collect();
        sections.push(lines.join("\n"));
    }

    sections.push(format!("# {}", project.title));

    // Always present, even with a blank body.
    sections.push(section(headers.description, &project.description));

    let mut status_lines: Vec<String> = Vec::new();
    if !project.project_type.trim().is_empty() {
        status_lines.push(format!("**Project Type:** {}", project.project_type));
    }
    if !project.project_status.trim().is_empty() {
        status_lines.push(format!("**Status:** {}", project.project_status));
    }
    if !status_lines.is_empty() {
        sections.push(section(headers.status, &status_lines.join("\n")));
    }

    if let Some(body) = bullet_list(&project.technologies) {
        sections.push(section(headers.technologies, &body));
    }

    if let Some(body) = bullet_list(&project.features) {
        sections.push(section(headers.features, &body));
    }

    let installation = filtered(&project.installation);
    if !installation.is_empty() {
        let body = format!("```bash\n{}\n```", installation.join("\n"));
        sections.push(section(headers.installation, &body));
    }

    let usage = filtered(&project.usage);
    if !usage.is_empty() {
        let body = format!("```\n{}\n```", usage.join("\n"));
        sections.push(section(headers.usage, &body));
    }

    if !project.demo.trim().is_empty() {
        sections.push(section(headers.demo, &project.demo));
    } else if let Some(fallback) = headers.demo_fallback {
        sections.push(section(headers.demo, fallback));
    }

    if !project.social.is_empty() {
        let links: Vec<String> = project
            .social
            .entries()
            .iter()
            .filter(|(_, url)| !url.trim().is_empty())
            .map(|(platform, url)| format!("[{platform}]({url})"))
            .collect();
        sections.push(section(headers.social, &links.join(" | ")));
    }

    let screenshots = filtered(&project.screenshots);
    if !screenshots.is_empty() {
        let lines: Vec<String> = screenshots
            .iter()
            .map(|url| format!("![Screenshot]({url})"))
            .collect();
        sections.push(section(headers.screenshots, &lines.join("\n")));
    }

    // Always present, even with a blank body.
    sections.push(section(headers.contributing, &project.contributing));
    sections.push(section(headers.license, project.license.as_str()));

    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

/// Lowercase the title and replace whitespace runs with hyphens.
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// The filename the rendered document is saved under: `<slug>-README.md`.
pub fn download_filename(title: &str) -> String {
    format!("{}-README.md", slugify(title))
}

/// Drop entries that are empty or whitespace-only; keep the rest verbatim.
fn filtered(entries: &[String]) -> Vec<&str> {
    entries
        .iter()
        .map(String::as_str)
        .filter(|e| !e.trim().is_empty())
        .collect()
}

fn bullet_list(entries: &[String]) -> Option<String> {
    let kept = filtered(entries);
    if kept.is_empty() {
        return None;
    }
    Some(
        kept.iter()
            .map(|e| format!("- {e}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

/// A `## heading` block. A blank body yields the bare heading line.
fn section(heading: &str, body: &str) -> String {
    if body.trim().is_empty() {
        format!("## {heading}")
    } else {
        format!("## {heading}\n\n{body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{License, SocialLinks};

    fn sample() -> ProjectDescription {
        ProjectDescription {
            title: "Foo".into(),
            description: "Bar".into(),
            features: vec!["A".into(), "".into()],
            installation: vec!["npm i".into()],
            usage: vec!["run".into()],
            contributing: "PRs welcome".into(),
            license: License::Mit,
            ..ProjectDescription::default()
        }
    }

    #[test]
    fn test_worked_example_default_variant() {
        let out = render(&sample(), TemplateVariant::Default);

        assert!(out.contains("# Foo"));
        assert!(out.contains("## Description\n\nBar"));
        assert!(out.contains("- A"));
        assert!(!out.contains("- \n"), "blank feature must be filtered");
        assert!(out.contains("```bash\nnpm i\n```"));
        assert!(out.contains("```\nrun\n```"));
        assert!(out.contains("## License\n\nMIT"));
        assert!(!out.contains("![Badge]"));
        assert!(!out.contains("## Connect"));
        assert!(!out.contains("## Demo"));
    }

    #[test]
    fn test_render_is_total_on_empty_record() {
        let out = render(&ProjectDescription::default(), TemplateVariant::Default);
        assert!(out.contains("# \n"));
        assert!(out.contains("## Description"));
        assert!(out.contains("## Contributing"));
        assert!(out.contains("## License\n\nMIT"));
        // Nothing else sneaks in.
        assert!(!out.contains("## Features"));
        assert!(!out.contains("## Installation"));
        assert!(!out.contains("## Usage"));
        assert!(!out.contains("## Screenshots"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let project = sample();
        assert_eq!(
            render(&project, TemplateVariant::Academic),
            render(&project, TemplateVariant::Academic)
        );
    }

    #[test]
    fn test_whitespace_only_sequences_omit_sections() {
        let mut project = sample();
        project.features = vec!["  ".into(), "\t".into(), "".into()];
        project.installation = vec!["   ".into()];
        project.usage = vec![];
        project.technologies = vec!["".into()];

        let out = render(&project, TemplateVariant::Default);
        assert!(!out.contains("## Features"));
        assert!(!out.contains("## Installation"));
        assert!(!out.contains("## Usage"));
        assert!(!out.contains("## Technologies"));
    }

    #[test]
    fn test_badges_render_in_order_above_title() {
        let mut project = sample();
        project.badges = vec![
            "https://img.shields.io/npm/v/foo".into(),
            "".into(),
            "https://img.shields.io/github/stars/foo/foo".into(),
        ];

        let out = render(&project, TemplateVariant::Default);
        let npm = out.find("![Badge](https://img.shields.io/npm/v/foo)").unwrap();
        let stars = out
            .find("![Badge](https://img.shields.io/github/stars/foo/foo)")
            .unwrap();
        let title = out.find("# Foo").unwrap();
        assert!(npm < stars);
        assert!(stars < title);
        assert_eq!(out.matches("![Badge]").count(), 2);
    }

    #[test]
    fn test_social_line_pipe_separated() {
        let mut project = sample();
        project.social = SocialLinks {
            linkedin: "https://linkedin.com/in/foo".into(),
            twitter: String::new(),
            website: "https://foo.dev".into(),
        };

        let out = render(&project, TemplateVariant::Default);
        assert!(out.contains(
            "[LinkedIn](https://linkedin.com/in/foo) | [Website](https://foo.dev)"
        ));
        assert!(!out.contains("[Twitter]"));
    }

    #[test]
    fn test_status_block_omitted_when_both_blank() {
        let out = render(&sample(), TemplateVariant::Default);
        assert!(!out.contains("## Project Status"));

        let mut project = sample();
        project.project_type = "Web App".into();
        project.project_status = "Active".into();
        let out = render(&project, TemplateVariant::Default);
        assert!(out.contains("## Project Status\n\n**Project Type:** Web App\n**Status:** Active"));
    }

    #[test]
    fn test_academic_variant_relabels_headings() {
        let mut project = sample();
        project.technologies = vec!["Rust".into()];

        let default_out = render(&project, TemplateVariant::Default);
        let academic_out = render(&project, TemplateVariant::Academic);

        assert!(academic_out.contains("## Academic Project Overview\n\nBar"));
        assert!(academic_out.contains("## Methodologies & Technologies\n\n- Rust"));
        assert!(academic_out.contains("## Research Highlights\n\n- A"));
        assert!(!academic_out.contains("## Description"));
        assert!(!academic_out.contains("## Features"));

        // Same data-derived content under the mapped headings.
        assert!(default_out.contains("- Rust"));
        assert!(default_out.contains("- A"));
    }

    #[test]
    fn test_academic_demo_fallback_on_empty_demo() {
        let out = render(&sample(), TemplateVariant::Academic);
        assert!(out.contains(
            "## Published Results\n\nResults and artifacts will be linked here upon publication."
        ));

        let mut project = sample();
        project.demo = "https://demo.foo.dev".into();
        let out = render(&project, TemplateVariant::Academic);
        assert!(out.contains("## Published Results\n\nhttps://demo.foo.dev"));
    }

    #[test]
    fn test_screenshots_one_image_per_line() {
        let mut project = sample();
        project.screenshots = vec!["https://a.png".into(), "https://b.png".into()];
        let out = render(&project, TemplateVariant::Default);
        assert!(out.contains("## Screenshots\n\n![Screenshot](https://a.png)\n![Screenshot](https://b.png)"));
    }

    #[test]
    fn test_user_markdown_inserted_verbatim() {
        let mut project = sample();
        project.description = "**bold** and <em>html</em> & `code`".into();
        let out = render(&project, TemplateVariant::Default);
        assert!(out.contains("**bold** and <em>html</em> & `code`"));
    }

    #[test]
    fn test_slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("My Cool Tool"), "my-cool-tool");
        assert_eq!(slugify("  Spaced\tOut  "), "spaced-out");
        assert_eq!(slugify("already-slugged"), "already-slugged");
    }

    #[test]
    fn test_download_filename() {
        assert_eq!(download_filename("My Cool Tool"), "my-cool-tool-README.md");
    }
}
