//! Mustache-style rendering of template content and paths

use crate::context::TemplateContext;
use anyhow::Result;
use handlebars::{no_escape, Handlebars};

/// A configured Handlebars registry.
///
/// HTML escaping is disabled (the output is code and config, not markup) and
/// strict mode is left off, so a placeholder whose field is absent from the
/// context substitutes the empty string rather than failing.
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(no_escape);
        Self { registry }
    }

    /// Render a template string against a context. Malformed placeholder
    /// syntax is an error; missing fields are not.
    pub fn render_str(&self, template: &str, context: &TemplateContext) -> Result<String> {
        Ok(self.registry.render_template(template, context)?)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_known_fields() {
        let renderer = Renderer::new();
        let context = TemplateContext::new().with("name", "world");

        let output = renderer.render_str("Hello, {{name}}!", &context).unwrap();
        assert_eq!(output, "Hello, world!");
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let renderer = Renderer::new();
        let context = TemplateContext::new();

        let output = renderer.render_str("[{{absent}}]", &context).unwrap();
        assert_eq!(output, "[]");
    }

    #[test]
    fn test_no_html_escaping() {
        let renderer = Renderer::new();
        let context = TemplateContext::new().with("code", "a < b && c > d");

        let output = renderer.render_str("{{code}}", &context).unwrap();
        assert_eq!(output, "a < b && c > d");
    }

    #[test]
    fn test_malformed_placeholder_is_an_error() {
        let renderer = Renderer::new();
        let context = TemplateContext::new().with("name", "world");

        assert!(renderer.render_str("{{#if name}}no close", &context).is_err());
    }

    #[test]
    fn test_plain_text_passes_through() {
        let renderer = Renderer::new();
        let context = TemplateContext::new();

        let output = renderer.render_str("no placeholders here", &context).unwrap();
        assert_eq!(output, "no placeholders here");
    }
}
