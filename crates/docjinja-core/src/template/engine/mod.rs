//! Template engine implementation

use crate::config::{ConfigOptions, CONTEXT_KEY};
use crate::template::error::TemplateError;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde_json::{Map, Value};

/// Template name used when the caller does not provide one
const ANONYMOUS_TEMPLATE: &str = "<string>";

/// Template context holding JSON data for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateContext {
    data: Value,
}

impl TemplateContext {
    /// Create a new template context from a JSON value
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// Wrap configuration options under the `config_options` key
    pub fn from_config(config: &ConfigOptions) -> Self {
        let mut map = Map::new();
        map.insert(CONTEXT_KEY.to_string(), Value::Object(config.as_map().clone()));
        Self::new(Value::Object(map))
    }

    /// Get the underlying JSON value
    pub fn data(&self) -> &Value {
        &self.data
    }
}

impl Default for TemplateContext {
    fn default() -> Self {
        Self::new(Value::Object(Map::new()))
    }
}

/// String-template renderer exposed by a builder
///
/// Hooks render document sources through this trait; the builder decides
/// which implementation backs it.
pub trait TemplateRenderer: Send + Sync {
    /// Render `source` with `context`
    fn render_string(&self, source: &str, context: &TemplateContext)
        -> Result<String, TemplateError>;

    /// Render `source` with `context`, reporting errors against `name`
    fn render_named(
        &self,
        _name: &str,
        source: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.render_string(source, context)
    }
}

/// Template engine for rendering sources with JSON data
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_unknown_method_callback(minijinja_contrib::pycompat::unknown_method_callback);
        Self { env }
    }

    /// Render a template with the given context
    pub fn render(&self, template: &str, context: &TemplateContext) -> Result<String, TemplateError> {
        self.render_named(ANONYMOUS_TEMPLATE, template, context)
    }

    /// Render a template, naming it in error reports
    pub fn render_named(
        &self,
        name: &str,
        template: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.env
            .render_named_str(name, template, context.data())
            .map_err(|err| TemplateError::from_minijinja(name, &err))
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine").finish_non_exhaustive()
    }
}

impl TemplateRenderer for TemplateEngine {
    fn render_string(
        &self,
        source: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.render(source, context)
    }

    fn render_named(
        &self,
        name: &str,
        source: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        TemplateEngine::render_named(self, name, source, context)
    }
}

/// Convenience function to render a template
pub fn render(template: &str, context: &TemplateContext) -> Result<String, TemplateError> {
    TemplateEngine::new().render(template, context)
}

#[cfg(test)]
mod tests;
