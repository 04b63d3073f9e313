//! On-disk documentation source trees for tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::temp_dir_in_workspace;

/// Configuration document used by most tests
pub const SAMPLE_CONFIG: &str = r#"{
  "product": "Gateway",
  "version": "2.4.1",
  "server": {
    "port": 8080,
    "tls": { "enabled": true, "cert": "/etc/gateway/cert.pem" }
  },
  "plugins": ["auth", "metrics", "cache"]
}
"#;

/// A throwaway documentation source directory
///
/// Paths given to the `write_*` helpers are relative to the source directory;
/// parent directories are created as needed.
pub struct DocsFixture {
    temp: TempDir,
}

impl DocsFixture {
    /// Empty source directory
    pub fn new() -> Self {
        Self {
            temp: temp_dir_in_workspace(),
        }
    }

    /// Source directory with `_static/configuration.json` already written
    pub fn with_config(json: &str) -> Self {
        let fixture = Self::new();
        fixture.write_config(json);
        fixture
    }

    /// Source directory with [`SAMPLE_CONFIG`]
    pub fn sample() -> Self {
        Self::with_config(SAMPLE_CONFIG)
    }

    pub fn srcdir(&self) -> &Path {
        self.temp.path()
    }

    /// Write the configuration document at its default location
    pub fn write_config(&self, json: &str) -> PathBuf {
        self.write("_static/configuration.json", json)
    }

    /// Write a source document
    pub fn write_doc(&self, relative: &str, text: &str) -> PathBuf {
        self.write(relative, text)
    }

    /// Read a file back, relative to the source directory
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.srcdir().join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.srcdir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }
}

impl Default for DocsFixture {
    fn default() -> Self {
        Self::new()
    }
}
