//! Source documents and their docnames

use crate::error::{DocjinjaError, Result};
use std::path::{Component, Path, PathBuf};

/// A source file together with its logical name
///
/// The docname is the path relative to the source directory, without its
/// extension and with `/` separators (`guide/install` for
/// `<srcdir>/guide/install.rst`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    docname: String,
    path: PathBuf,
}

impl Document {
    pub fn new(docname: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            docname: docname.into(),
            path: path.into(),
        }
    }

    /// Derive the document for `path` inside `srcdir`
    pub fn from_path(srcdir: &Path, path: &Path) -> Result<Self> {
        let docname = docname_for(srcdir, path)?;
        Ok(Self::new(docname, path))
    }

    pub fn docname(&self) -> &str {
        &self.docname
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File extension of the source, if any
    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|ext| ext.to_str())
    }

    /// Read the raw source text
    pub fn read_source(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(|source| DocjinjaError::DocumentRead {
            path: self.path.clone(),
            source,
        })
    }
}

/// Compute the docname of `path` relative to `srcdir`
pub fn docname_for(srcdir: &Path, path: &Path) -> Result<String> {
    let outside = || DocjinjaError::DocumentOutsideSrcdir {
        path: path.to_path_buf(),
        srcdir: srcdir.to_path_buf(),
    };

    let base = without_cur_dir(srcdir);
    let full = without_cur_dir(path);
    let relative = full.strip_prefix(&base).map_err(|_| outside())?;

    let mut parts = Vec::new();
    for component in relative.with_extension("").components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            _ => return Err(outside()),
        }
    }

    if parts.is_empty() {
        return Err(outside());
    }
    Ok(parts.join("/"))
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docname_top_level() {
        let name = docname_for(Path::new("docs"), Path::new("docs/index.rst")).unwrap();
        assert_eq!(name, "index");
    }

    #[test]
    fn test_docname_nested() {
        let name = docname_for(Path::new("docs"), Path::new("docs/guide/install.md")).unwrap();
        assert_eq!(name, "guide/install");
    }

    #[test]
    fn test_docname_with_current_dir_srcdir() {
        let name = docname_for(Path::new("."), Path::new("guide/install.rst")).unwrap();
        assert_eq!(name, "guide/install");

        let name = docname_for(Path::new("."), Path::new("./index.rst")).unwrap();
        assert_eq!(name, "index");
    }

    #[test]
    fn test_docname_outside_srcdir() {
        let err = docname_for(Path::new("docs"), Path::new("other/index.rst")).unwrap_err();
        assert!(matches!(err, DocjinjaError::DocumentOutsideSrcdir { .. }));
    }

    #[test]
    fn test_docname_rejects_parent_components() {
        let err = docname_for(Path::new("docs"), Path::new("docs/../secret.rst")).unwrap_err();
        assert!(matches!(err, DocjinjaError::DocumentOutsideSrcdir { .. }));
    }

    #[test]
    fn test_document_extension() {
        let doc = Document::from_path(Path::new("docs"), Path::new("docs/api.rst")).unwrap();
        assert_eq!(doc.docname(), "api");
        assert_eq!(doc.extension(), Some("rst"));
        assert_eq!(doc.path(), Path::new("docs/api.rst"));
    }

    #[test]
    fn test_read_missing_document() {
        let doc = Document::new("missing", "does/not/exist.rst");
        let err = doc.read_source().unwrap_err();
        assert!(matches!(err, DocjinjaError::DocumentRead { .. }));
    }
}
