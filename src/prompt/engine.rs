use crate::error::PromptError;
use tera::{Context, Tera};

/// Tera-backed template engine for building structured prompts.
pub struct TeraEngine {
    tera: Tera,
}

impl TeraEngine {
    /// Create with inline templates (no filesystem).
    pub fn new() -> Self {
        Self {
            tera: Tera::default(),
        }
    }

    /// Register a template from a string.
    pub fn add_template(&mut self, name: &str, content: &str) -> Result<(), PromptError> {
        self.tera
            .add_raw_template(name, content)
            .map_err(|e| PromptError::Register(format!("{name}: {e}")))
    }

    /// Render a named template with the given context.
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String, PromptError> {
        self.tera
            .render(template_name, context)
            .map_err(|e| PromptError::Render(format!("{template_name}: {e}")))
    }
}
