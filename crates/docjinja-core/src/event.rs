//! Event registry for builder lifecycle hooks
//!
//! Extensions attach listeners to named events; the builder emits them while
//! it processes documents. Only `source-read` exists today: it fires once per
//! document, after the raw text is read and before it is parsed, and listeners
//! may rewrite the text in place.

use crate::app::App;
use crate::error::{DocjinjaError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Name of the event emitted after a document's source is read
pub const SOURCE_READ: &str = "source-read";

/// Priority given to listeners connected without an explicit one
pub const DEFAULT_PRIORITY: i32 = 500;

/// Builder lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    SourceRead,
}

impl Event {
    /// Canonical event name
    pub fn name(&self) -> &'static str {
        match self {
            Event::SourceRead => SOURCE_READ,
        }
    }

    /// Look up an event by its canonical name
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            SOURCE_READ => Ok(Event::SourceRead),
            other => Err(DocjinjaError::UnknownEvent(other.to_string())),
        }
    }
}

impl FromStr for Event {
    type Err = DocjinjaError;

    fn from_str(s: &str) -> Result<Self> {
        Event::from_name(s)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle returned by `connect`, used to disconnect a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Listener for the `source-read` event
///
/// `source` holds the document's raw text; whatever it contains when the
/// listener returns is what the next listener (and then the parser) sees.
pub trait SourceReadListener: Send + Sync {
    fn on_source_read(&self, app: &App, docname: &str, source: &mut String) -> Result<()>;
}

impl<F> SourceReadListener for F
where
    F: Fn(&App, &str, &mut String) -> Result<()> + Send + Sync,
{
    fn on_source_read(&self, app: &App, docname: &str, source: &mut String) -> Result<()> {
        self(app, docname, source)
    }
}

struct Registration {
    id: ListenerId,
    priority: i32,
    listener: Box<dyn SourceReadListener>,
}

/// Registered listeners, kept sorted by priority then registration order
#[derive(Default)]
pub struct EventManager {
    next_id: u64,
    source_read: Vec<Registration>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `event`
    ///
    /// Lower priorities run first; listeners with equal priority run in the
    /// order they were connected.
    pub fn connect<L>(&mut self, event: Event, listener: L, priority: i32) -> ListenerId
    where
        L: SourceReadListener + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;

        let registrations = match event {
            Event::SourceRead => &mut self.source_read,
        };
        let pos = registrations.partition_point(|r| r.priority <= priority);
        registrations.insert(
            pos,
            Registration {
                id,
                priority,
                listener: Box::new(listener),
            },
        );

        tracing::debug!(event = %event, listener = %id, priority, "connected listener");
        id
    }

    /// Remove a listener; returns false if `id` was not connected
    pub fn disconnect(&mut self, id: ListenerId) -> bool {
        let before = self.source_read.len();
        self.source_read.retain(|r| r.id != id);
        before != self.source_read.len()
    }

    /// Number of listeners connected to `event`
    pub fn listener_count(&self, event: Event) -> usize {
        match event {
            Event::SourceRead => self.source_read.len(),
        }
    }

    /// Run every `source-read` listener over `source`
    ///
    /// Stops at the first listener that fails and returns its error.
    pub fn emit_source_read(&self, app: &App, docname: &str, source: &mut String) -> Result<()> {
        for registration in &self.source_read {
            registration
                .listener
                .on_source_read(app, docname, source)?;
        }
        Ok(())
    }
}

impl fmt::Debug for EventManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<_> = self
            .source_read
            .iter()
            .map(|r| (r.id, r.priority))
            .collect();
        f.debug_struct("EventManager")
            .field("source_read", &ids)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, Builder, OutputFormat};

    fn html_app() -> App {
        App::new(Builder::new("html", OutputFormat::Html))
    }

    #[test]
    fn test_event_names() {
        assert_eq!(Event::SourceRead.name(), "source-read");
        assert_eq!(Event::from_name("source-read").unwrap(), Event::SourceRead);
        assert_eq!("source-read".parse::<Event>().unwrap(), Event::SourceRead);
    }

    #[test]
    fn test_unknown_event() {
        let err = Event::from_name("doctree-read").unwrap_err();
        assert!(matches!(err, DocjinjaError::UnknownEvent(name) if name == "doctree-read"));
    }

    #[test]
    fn test_listener_ids_are_unique() {
        let mut events = EventManager::new();
        let noop = |_: &App, _: &str, _: &mut String| -> Result<()> { Ok(()) };
        let a = events.connect(Event::SourceRead, noop, DEFAULT_PRIORITY);
        let b = events.connect(Event::SourceRead, noop, DEFAULT_PRIORITY);
        assert_ne!(a, b);
        assert!(a < b);
        assert_eq!(events.listener_count(Event::SourceRead), 2);
    }

    #[test]
    fn test_listeners_run_by_priority_then_registration() {
        let mut app = html_app();
        app.connect_with_priority(
            Event::SourceRead,
            |_: &App, _: &str, s: &mut String| -> Result<()> {
                s.push('b');
                Ok(())
            },
            DEFAULT_PRIORITY,
        );
        app.connect_with_priority(
            Event::SourceRead,
            |_: &App, _: &str, s: &mut String| -> Result<()> {
                s.push('a');
                Ok(())
            },
            100,
        );
        app.connect_with_priority(
            Event::SourceRead,
            |_: &App, _: &str, s: &mut String| -> Result<()> {
                s.push('c');
                Ok(())
            },
            DEFAULT_PRIORITY,
        );

        let mut source = String::new();
        app.emit_source_read("index", &mut source).unwrap();
        assert_eq!(source, "abc");
    }

    #[test]
    fn test_disconnect() {
        let mut app = html_app();
        let id = app.connect(Event::SourceRead, |_: &App, _: &str, s: &mut String| -> Result<()> {
            s.push_str("changed");
            Ok(())
        });
        assert!(app.disconnect(id));
        assert!(!app.disconnect(id));

        let mut source = String::from("original");
        app.emit_source_read("index", &mut source).unwrap();
        assert_eq!(source, "original");
    }

    #[test]
    fn test_emit_stops_at_first_error() {
        let mut app = html_app();
        app.connect(Event::SourceRead, |_: &App, docname: &str, _: &mut String| -> Result<()> {
            Err(DocjinjaError::UnknownEvent(docname.to_string()))
        });
        app.connect(Event::SourceRead, |_: &App, _: &str, s: &mut String| -> Result<()> {
            s.push_str("unreachable");
            Ok(())
        });

        let mut source = String::from("text");
        let err = app.emit_source_read("broken", &mut source).unwrap_err();
        assert!(matches!(err, DocjinjaError::UnknownEvent(name) if name == "broken"));
        assert_eq!(source, "text");
    }

    #[test]
    fn test_listener_receives_docname() {
        let mut app = html_app();
        app.connect(Event::SourceRead, |_: &App, docname: &str, s: &mut String| -> Result<()> {
            *s = docname.to_string();
            Ok(())
        });
        let mut source = String::new();
        app.emit_source_read("guide/install", &mut source).unwrap();
        assert_eq!(source, "guide/install");
    }
}
