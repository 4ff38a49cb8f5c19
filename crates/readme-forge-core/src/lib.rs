//! Core library for the readme-forge toolkit.
//!
//! Provides the [`model::ProjectDescription`] record and the pure
//! [`render::render`] function that maps it to a Markdown README, along with
//! shared infrastructure: project-file I/O, the badge catalog, template
//! variants, and the Handlebars renderer for badge URL templates.
//!
//! The CLI front-end lives in the `readme-forge` binary crate; this crate is
//! interface-agnostic and performs no terminal or clipboard I/O.

pub mod badge;
pub mod error;
pub mod model;
pub mod project;
pub mod render;
pub mod templates;
pub mod variant;
