//! readme-forge CLI — a README generator driven by a project form.
//!
//! Provides four commands covering the full editing loop: `init` (the form),
//! `preview` (the preview pane), `render` (the download button, with an
//! optional clipboard copy), and `badge` (the badge picker).
//!
//! All project state lives in a single `readme-forge.json` file; rendering is
//! a pure function over it, implemented in [`readme_forge_core::render`].

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use readme_forge_core::badge::BadgeKind;
use readme_forge_core::variant::TemplateVariant;

#[derive(Parser)]
#[command(
    name = "readme-forge",
    about = "Generate a polished README.md from a project form",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to readme-forge.json (default: ./readme-forge.json)
    #[arg(long, global = true, default_value = readme_forge_core::project::PROJECT_FILE)]
    config: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new project file, interactively or from defaults
    Init {
        /// Project title
        title: String,

        /// Skip the interactive form and write a starter project file
        #[arg(long)]
        defaults: bool,
    },

    /// Render the README and write it to disk
    Render {
        /// Template variant
        #[arg(long, value_enum, default_value = "default")]
        template: TemplateChoice,

        /// Output path (default: <slugified-title>-README.md)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Also copy the rendered document to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Render the README to stdout without touching the filesystem
    Preview {
        /// Template variant
        #[arg(long, value_enum, default_value = "default")]
        template: TemplateChoice,
    },

    /// Manage the badge list of the project
    Badge {
        #[command(subcommand)]
        action: BadgeAction,
    },
}

#[derive(Subcommand)]
enum BadgeAction {
    /// Generate a badge URL from the catalog and add it to the project
    Add {
        /// Badge kind
        #[arg(value_enum)]
        kind: BadgeChoice,
    },

    /// List the badge catalog and the badges already added
    List,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum TemplateChoice {
    Default,
    Academic,
}

impl TemplateChoice {
    pub fn variant(&self) -> TemplateVariant {
        match self {
            Self::Default => TemplateVariant::Default,
            Self::Academic => TemplateVariant::Academic,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum BadgeChoice {
    Npm,
    Build,
    Coverage,
    Downloads,
    License,
    Stars,
    LastCommit,
    Contributors,
}

impl BadgeChoice {
    pub fn kind(&self) -> BadgeKind {
        match self {
            Self::Npm => BadgeKind::Npm,
            Self::Build => BadgeKind::Build,
            Self::Coverage => BadgeKind::Coverage,
            Self::Downloads => BadgeKind::Downloads,
            Self::License => BadgeKind::License,
            Self::Stars => BadgeKind::Stars,
            Self::LastCommit => BadgeKind::LastCommit,
            Self::Contributors => BadgeKind::Contributors,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init { title, defaults } => {
            commands::init::run(&cli.config, &title, defaults)?;
        }
        Commands::Render {
            template,
            output,
            stdout,
            copy,
        } => {
            commands::render::run(
                &cli.config,
                template.variant(),
                output.as_deref(),
                stdout,
                copy,
            )?;
        }
        Commands::Preview { template } => {
            commands::preview::run(&cli.config, template.variant())?;
        }
        Commands::Badge { action } => match action {
            BadgeAction::Add { kind } => {
                commands::badge::add(&cli.config, kind.kind())?;
            }
            BadgeAction::List => {
                commands::badge::list(&cli.config)?;
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_to_project_file_constant() {
        let cli = Cli::try_parse_from(["readme-forge", "preview"]).unwrap();
        assert_eq!(
            cli.config,
            PathBuf::from(readme_forge_core::project::PROJECT_FILE)
        );
    }
}
