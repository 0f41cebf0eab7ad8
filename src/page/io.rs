//! Loading page documents and looking pages up.

use super::{PageRecord, PageSet};
use crate::error::{Result, SyncError};
use std::path::Path;

impl PageSet {
    /// Load a page document from a YAML or JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SyncError::UserError(format!(
                "failed to read page file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a page document. JSON is accepted as a subset of YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| SyncError::UserError(format!("failed to parse page file: {}", e)))
    }

    /// Find a page by its path.
    pub fn find(&self, path: &str) -> Result<&PageRecord> {
        let wanted = path.trim();
        self.pages
            .iter()
            .find(|page| page.path == wanted)
            .ok_or_else(|| SyncError::UserError(format!("page not found: {}", wanted)))
    }

    /// Number of declared pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
