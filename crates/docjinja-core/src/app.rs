//! Build application handle passed to every listener

use crate::document::Document;
use crate::error::Result;
use crate::event::{Event, EventManager, ListenerId, SourceReadListener, DEFAULT_PRIORITY};
use crate::template::{TemplateEngine, TemplateRenderer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Output format produced by a builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Other(String),
}

impl OutputFormat {
    /// Parse a builder format name; only the exact name `html` is HTML
    pub fn parse(name: &str) -> Self {
        if name == "html" {
            OutputFormat::Html
        } else {
            OutputFormat::Other(name.to_string())
        }
    }

    pub fn is_html(&self) -> bool {
        matches!(self, OutputFormat::Html)
    }

    pub fn as_str(&self) -> &str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Other(name) => name,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(OutputFormat::parse(s))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active builder: its name, output format and template renderer
pub struct Builder {
    name: String,
    format: OutputFormat,
    templates: Arc<dyn TemplateRenderer>,
}

impl Builder {
    /// Create a builder that renders with the default [`TemplateEngine`]
    pub fn new(name: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            name: name.into(),
            format,
            templates: Arc::new(TemplateEngine::new()),
        }
    }

    /// Replace the template renderer
    pub fn with_templates(mut self, templates: Arc<dyn TemplateRenderer>) -> Self {
        self.templates = templates;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> &OutputFormat {
        &self.format
    }

    pub fn templates(&self) -> &dyn TemplateRenderer {
        self.templates.as_ref()
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("name", &self.name)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

/// Build application: the builder plus the listeners extensions connected
#[derive(Debug)]
pub struct App {
    builder: Builder,
    events: EventManager,
}

impl App {
    pub fn new(builder: Builder) -> Self {
        Self {
            builder,
            events: EventManager::new(),
        }
    }

    pub fn builder(&self) -> &Builder {
        &self.builder
    }

    pub fn events(&self) -> &EventManager {
        &self.events
    }

    /// Connect a listener with the default priority
    pub fn connect<L>(&mut self, event: Event, listener: L) -> ListenerId
    where
        L: SourceReadListener + 'static,
    {
        self.events.connect(event, listener, DEFAULT_PRIORITY)
    }

    pub fn connect_with_priority<L>(&mut self, event: Event, listener: L, priority: i32) -> ListenerId
    where
        L: SourceReadListener + 'static,
    {
        self.events.connect(event, listener, priority)
    }

    pub fn disconnect(&mut self, id: ListenerId) -> bool {
        self.events.disconnect(id)
    }

    /// Emit `source-read` for one document
    pub fn emit_source_read(&self, docname: &str, source: &mut String) -> Result<()> {
        self.events.emit_source_read(self, docname, source)
    }

    /// Read a document from disk and pass it through `source-read`
    ///
    /// Returns the text as the listeners left it.
    pub fn read_document(&self, document: &Document) -> Result<String> {
        let mut source = document.read_source()?;
        self.emit_source_read(document.docname(), &mut source)?;
        Ok(source)
    }
}
