//! Handlebars-based renderer for badge URL templates.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled.
//! Strict mode ensures that any `{{variable}}` referenced in a template must be
//! present in the data context — otherwise rendering returns an error. A
//! silently-empty variable would produce a badge URL with a hole in the middle
//! that only fails once shields.io serves a broken image.

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{ReadmeForgeError, Result};

/// Template renderer for badge URL patterns.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        // Output is URLs, not HTML; `&` in a slug must stay `&`.
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| ReadmeForgeError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
