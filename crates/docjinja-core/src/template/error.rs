//! Template error types

use std::fmt;

/// Template rendering errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A lookup did not resolve against the context
    UndefinedKey {
        /// Name of the template (usually the docname)
        template: String,
        /// Line number where the error occurred, when known
        line: Option<usize>,
        /// Message reported by the renderer
        detail: String,
    },

    /// The source contains template syntax the renderer cannot parse
    MalformedSyntax {
        /// Name of the template (usually the docname)
        template: String,
        /// Line number where the error occurred, when known
        line: Option<usize>,
        /// Message reported by the renderer
        detail: String,
    },

    /// Any other failure raised while evaluating the template
    Render {
        /// Name of the template (usually the docname)
        template: String,
        /// Line number where the error occurred, when known
        line: Option<usize>,
        /// Message reported by the renderer
        detail: String,
    },
}

impl TemplateError {
    /// Convert a renderer error, keeping its kind, location and message
    pub(crate) fn from_minijinja(template: &str, err: &minijinja::Error) -> Self {
        let template = err.name().unwrap_or(template).to_string();
        let line = err.line();
        let detail = err
            .detail()
            .map(str::to_string)
            .unwrap_or_else(|| err.kind().to_string());

        match err.kind() {
            minijinja::ErrorKind::UndefinedError => TemplateError::UndefinedKey {
                template,
                line,
                detail,
            },
            minijinja::ErrorKind::SyntaxError => TemplateError::MalformedSyntax {
                template,
                line,
                detail,
            },
            _ => TemplateError::Render {
                template,
                line,
                detail,
            },
        }
    }

    /// Name of the template that failed
    pub fn template(&self) -> &str {
        match self {
            TemplateError::UndefinedKey { template, .. }
            | TemplateError::MalformedSyntax { template, .. }
            | TemplateError::Render { template, .. } => template,
        }
    }

    /// Line number where the error occurred, when the renderer reported one
    pub fn line(&self) -> Option<usize> {
        match self {
            TemplateError::UndefinedKey { line, .. }
            | TemplateError::MalformedSyntax { line, .. }
            | TemplateError::Render { line, .. } => *line,
        }
    }
}

fn write_location(f: &mut fmt::Formatter<'_>, template: &str, line: Option<usize>) -> fmt::Result {
    match line {
        Some(line) => write!(f, "'{}' line {}", template, line),
        None => write!(f, "'{}'", template),
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedKey {
                template,
                line,
                detail,
            } => {
                write!(f, "Undefined key in ")?;
                write_location(f, template, *line)?;
                write!(f, ": {}", detail)
            }
            TemplateError::MalformedSyntax {
                template,
                line,
                detail,
            } => {
                write!(f, "Malformed syntax in ")?;
                write_location(f, template, *line)?;
                write!(f, ": {}", detail)
            }
            TemplateError::Render {
                template,
                line,
                detail,
            } => {
                write!(f, "Rendering failed in ")?;
                write_location(f, template, *line)?;
                write!(f, ": {}", detail)
            }
        }
    }
}

impl std::error::Error for TemplateError {}
