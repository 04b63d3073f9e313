// Core modules
pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod event;
pub mod hook;
pub mod template;

// Re-export commonly used types
pub use app::{App, Builder, OutputFormat};
pub use config::ConfigOptions;
pub use document::Document;
pub use error::{DocjinjaError, Result};
pub use event::{Event, ListenerId, SourceReadListener};
pub use hook::{setup, ConfigInjection, ExtensionMetadata};
