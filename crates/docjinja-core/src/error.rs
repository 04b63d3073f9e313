use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocjinjaError {
    // Config errors
    #[error("CONFIG_READ_ERROR: failed to read '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CONFIG_PARSE_ERROR: failed to parse '{path}': {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("CONFIG_NOT_OBJECT: configuration must be a JSON object, found {found}")]
    ConfigNotObject { found: &'static str },

    // Template errors
    #[error("TEMPLATE_ERROR: {0}")]
    Template(#[from] crate::template::error::TemplateError),

    // Document errors
    #[error("DOCUMENT_READ_ERROR: failed to read '{path}': {source}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("DOCUMENT_OUTSIDE_SRCDIR: '{path}' is not inside source directory '{srcdir}'")]
    DocumentOutsideSrcdir { path: PathBuf, srcdir: PathBuf },

    // Event errors
    #[error("UNKNOWN_EVENT: no such event '{0}'")]
    UnknownEvent(String),
}

impl From<serde_json::Error> for DocjinjaError {
    fn from(err: serde_json::Error) -> Self {
        DocjinjaError::ConfigParse {
            path: PathBuf::from("<memory>"),
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DocjinjaError>;
