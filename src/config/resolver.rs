//! Resolving a page's sync configuration.

use super::model::SyncConfig;
use crate::error::{Result, SyncError};
use crate::page::Page;
use tracing::debug;

/// Whether the page takes part in markdown sync.
pub fn supports_page<P: Page + ?Sized>(page: &P) -> bool {
    resolve(page).is_some()
}

/// Resolve the normalized sync configuration of a page.
///
/// Returns `None` for administrative pages, whatever their sync map says.
/// Also `None` when the page lacks the sync map capability, offers no map,
/// offers something other than a map, or leaves `source.path` or
/// `markdownField` blank.
pub fn resolve<P: Page + ?Sized>(page: &P) -> Option<SyncConfig> {
    if page.is_admin() {
        debug!(page = page.path(), "administrative page excluded from sync");
        return None;
    }

    let Some(provider) = page.as_sync_map_provider() else {
        debug!(page = page.path(), "page does not provide a sync map");
        return None;
    };

    let Some(raw) = provider.sync_map() else {
        debug!(page = page.path(), "page provided no sync map");
        return None;
    };

    if !raw.is_mapping() {
        debug!(page = page.path(), "sync map is not a key-value map");
        return None;
    }

    let config = SyncConfig::from_raw(&raw);
    if config.is_none() {
        debug!(
            page = page.path(),
            "sync map lacks a source path or markdown field"
        );
    }
    config
}

/// Resolve the sync configuration, failing if the page has none.
pub fn require_config<P: Page + ?Sized>(page: &P) -> Result<SyncConfig> {
    resolve(page).ok_or_else(|| SyncError::not_configured(page.path()))
}
