//! Page model consumed by the sync configuration resolver.
//!
//! The resolver never inspects pages directly. It relies on two traits:
//!
//! - [`Page`]: identity, the administrative-page predicate, and a capability
//!   query for sync map support
//! - [`SyncMapProvider`]: the capability itself, returning the raw map
//!
//! [`PageRecord`] is a concrete page that can be declared in a YAML or JSON
//! document and loaded through [`PageSet`].

use crate::config::RawValue;
use serde::{Deserialize, Serialize};

mod io;

/// Capability of pages that can declare a raw sync map.
pub trait SyncMapProvider {
    /// The raw, untrusted sync map, or `None` if the page declares nothing.
    fn sync_map(&self) -> Option<RawValue>;
}

/// A content node that may participate in markdown sync.
pub trait Page {
    /// Identifying path of the page, used in diagnostics.
    fn path(&self) -> &str;

    /// Whether the page belongs to the administrative area.
    fn is_admin(&self) -> bool;

    /// Capability query for sync map support.
    ///
    /// Pages without the capability keep the default.
    fn as_sync_map_provider(&self) -> Option<&dyn SyncMapProvider> {
        None
    }
}

/// A page declared in a page document.
///
/// The sync map capability is present only when the record has a `sync` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Page path (e.g., `/docs/intro`).
    pub path: String,

    /// Whether the page is administrative.
    #[serde(default)]
    pub admin: bool,

    /// Raw sync map as declared, untyped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync: Option<RawValue>,
}

impl PageRecord {
    /// Create a page record without a sync map.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Attach a raw sync map.
    pub fn with_sync(mut self, sync: RawValue) -> Self {
        self.sync = Some(sync);
        self
    }

    /// Mark the page as administrative.
    pub fn admin(mut self) -> Self {
        self.admin = true;
        self
    }
}

impl SyncMapProvider for PageRecord {
    fn sync_map(&self) -> Option<RawValue> {
        self.sync.clone()
    }
}

impl Page for PageRecord {
    fn path(&self) -> &str {
        &self.path
    }

    fn is_admin(&self) -> bool {
        self.admin
    }

    fn as_sync_map_provider(&self) -> Option<&dyn SyncMapProvider> {
        self.sync.as_ref().map(|_| self as &dyn SyncMapProvider)
    }
}

/// A collection of declared pages.
///
/// Document layout:
///
/// ```yaml
/// pages:
///   - path: /docs/intro
///     sync:
///       source: { path: content }
///       markdownField: body
///   - path: /admin
///     admin: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSet {
    #[serde(default)]
    pub pages: Vec<PageRecord>,
}
