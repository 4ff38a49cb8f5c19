//! Template system for badge URL generation.
//!
//! Badge URL patterns are embedded into the binary at compile-time via
//! [`include_str!`] in the [`embedded`] module, then rendered at runtime with
//! [Handlebars](https://handlebarsjs.com/) via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Templates use Handlebars syntax. The only variable currently passed in is
//! `{{slug}}` — the slugified project title (see [`crate::render::slugify`]).
//!
//! ## Adding a new badge template
//!
//! 1. Create the `.tmpl` file under `templates/badges/`
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Wire it into [`crate::badge::BadgeKind::template`]
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must
//! stay in sync. The `include_str!` paths are relative to this file and checked
//! at compile-time.

pub mod embedded;
pub mod renderer;
