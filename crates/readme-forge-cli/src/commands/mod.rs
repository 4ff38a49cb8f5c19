//! CLI command implementations for readme-forge.
//!
//! Each module corresponds to a subcommand (`readme-forge <command>`).

pub mod badge;
pub mod init;
pub mod preview;
pub mod render;
