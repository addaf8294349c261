//! Handlebars renderer.

use ::handlebars::Handlebars;
use serde_json::Value;
use tracing::instrument;
use traycraft_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    error::TraycraftResult,
};

/// Renders inline Handlebars sources. Output is not HTML-escaped and
/// missing fields render empty.
pub struct HandlebarsRenderer {
    handlebars: Handlebars<'static>,
}

impl HandlebarsRenderer {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(::handlebars::no_escape);
        Self { handlebars }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    #[instrument(skip_all, fields(bytes = template.len()))]
    fn render(&self, template: &str, data: &Value) -> TraycraftResult<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(|e| {
                ApplicationError::RenderingFailed {
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_without_escaping() {
        let out = HandlebarsRenderer::new()
            .render("# {{name}} <{{url}}>", &json!({ "name": "a&b", "url": "x" }))
            .unwrap();
        assert_eq!(out, "# a&b <x>");
    }

    #[test]
    fn empty_description_skips_block() {
        let template = "# {{name}}\n{{#if description}}\n{{description}}\n{{/if}}\nend\n";
        let out = HandlebarsRenderer::new()
            .render(template, &json!({ "name": "clip-bar", "description": "" }))
            .unwrap();
        assert!(out.starts_with("# clip-bar\n"));
        assert!(out.ends_with("end\n"));
        assert!(!out.contains("description"));
    }

    #[test]
    fn missing_field_renders_empty() {
        let out = HandlebarsRenderer::new()
            .render("[{{repository}}]", &json!({}))
            .unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn malformed_template_is_rendering_error() {
        let err = HandlebarsRenderer::new()
            .render("{{#if x}}unclosed", &json!({}))
            .unwrap_err();
        assert!(err.to_string().contains("Template rendering failed"));
    }
}
