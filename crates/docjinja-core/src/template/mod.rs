//! Template module - the string-template renderer used by builders
//!
//! Document sources are rendered as Jinja templates before they are parsed.
//! The rendering itself is delegated to [`minijinja`]; this module only fixes
//! how the environment is configured and how failures are reported.
//!
//! ## Behaviour
//!
//! - **Strict lookups**: referencing a key that is not in the context fails
//!   the render instead of producing an empty string
//! - **Verbatim text**: text without template syntax comes back unchanged,
//!   trailing newline included
//! - **No auto-escaping**: sources are markup, not HTML, so values are
//!   inserted as-is
//!
//! ## Syntax
//!
//! - Placeholders: `{{ config_options.key }}`
//! - Nested access: `{{ config_options.section.key }}`
//! - Loops and conditionals: `{% for item in config_options.items %}...{% endfor %}`
//! - Literal braces: `{{ '{{' }}` or `{% raw %}...{% endraw %}`

pub mod engine;
pub mod error;

pub use engine::{render, TemplateContext, TemplateEngine, TemplateRenderer};
pub use error::TemplateError;
