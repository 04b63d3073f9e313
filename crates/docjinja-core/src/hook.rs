//! Configuration injection hook
//!
//! Renders every document source as a template, with the loaded
//! configuration options available as `config_options`, before the HTML
//! builder parses it. Builders producing any other format see the source
//! untouched.

use crate::app::App;
use crate::config::ConfigOptions;
use crate::error::Result;
use crate::event::{Event, ListenerId, SourceReadListener};
use crate::template::TemplateContext;
use serde::Serialize;

/// What [`setup`] reports back to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionMetadata {
    pub version: &'static str,
    pub parallel_read_safe: bool,
    pub listener: ListenerId,
}

/// `source-read` listener that renders sources with the configuration context
#[derive(Debug, Clone)]
pub struct ConfigInjection {
    context: TemplateContext,
}

impl ConfigInjection {
    pub fn new(config: &ConfigOptions) -> Self {
        Self {
            context: TemplateContext::from_config(config),
        }
    }

    pub fn context(&self) -> &TemplateContext {
        &self.context
    }
}

impl SourceReadListener for ConfigInjection {
    fn on_source_read(&self, app: &App, docname: &str, source: &mut String) -> Result<()> {
        let builder = app.builder();
        if !builder.format().is_html() {
            tracing::debug!(
                docname,
                format = %builder.format(),
                "not an html build, source left as is"
            );
            return Ok(());
        }

        let rendered = builder
            .templates()
            .render_named(docname, source.as_str(), &self.context)?;
        tracing::debug!(docname, "rendered configuration options into source");
        *source = rendered;
        Ok(())
    }
}

/// Register the injection hook on `app`
pub fn setup(app: &mut App, config: &ConfigOptions) -> ExtensionMetadata {
    let listener = app.connect(Event::SourceRead, ConfigInjection::new(config));
    ExtensionMetadata {
        version: env!("CARGO_PKG_VERSION"),
        parallel_read_safe: true,
        listener,
    }
}
