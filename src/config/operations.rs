//! SyncConfig construction, serialization, and path helpers.

use super::model::{AssetsConfig, SourceConfig, SyncConfig};
use super::normalize::{normalize_field_name, normalize_frontmatter, normalize_url_base};
use super::types::*;
use crate::error::{Result, SyncError};

impl SyncConfig {
    /// Build a normalized config from a raw sync map.
    ///
    /// Returns `None` when `raw` is not a map, or when `source.path` or
    /// `markdownField` is blank after coercion and trimming. Any other type
    /// mismatch degrades to an absent field rather than rejecting the map.
    pub fn from_raw(raw: &RawValue) -> Option<Self> {
        let map = raw.as_mapping()?;

        let source = section(map, KEY_SOURCE);
        let assets = section(map, KEY_ASSETS);

        let path = coerce_string(entry(source, KEY_SOURCE_PATH));
        let path = path.trim();
        let markdown_field = coerce_string(map.get(KEY_MARKDOWN_FIELD));
        let markdown_field = markdown_field.trim();

        if path.is_empty() || markdown_field.is_empty() {
            return None;
        }

        Some(Self {
            source: SourceConfig {
                path: with_trailing_slash(path),
                page_field: normalize_field_name(entry(source, KEY_SOURCE_PAGE_FIELD)),
                fallback: coerce_string(entry(source, KEY_SOURCE_FALLBACK)),
            },
            markdown_field: markdown_field.to_string(),
            html_field: normalize_field_name(map.get(KEY_HTML_FIELD)),
            hash_field: normalize_field_name(map.get(KEY_HASH_FIELD)),
            frontmatter: normalize_frontmatter(map.get(KEY_FRONTMATTER)),
            assets: AssetsConfig {
                image_base_url: normalize_url_base(entry(assets, KEY_IMAGE_BASE_URL)),
            },
        })
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            SyncError::UserError(format!("failed to serialize sync config to YAML: {}", e))
        })
    }

    /// Serialize config to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SyncError::UserError(format!("failed to serialize sync config to JSON: {}", e))
        })
    }

    /// Location of the markdown document for a page.
    ///
    /// `reference` is the value the page holds in `source.page_field`, relative
    /// to `source.path`. A blank reference falls back to `source.fallback`.
    /// Returns `None` when both are blank.
    pub fn source_document(&self, reference: Option<&str>) -> Option<String> {
        let reference = reference
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| self.source.fallback.trim());

        let relative = reference.trim_start_matches('/');
        if relative.is_empty() {
            return None;
        }

        Some(format!("{}{}", self.source.path, relative))
    }

    /// Absolute URL for an image referenced relative to `assets.image_base_url`.
    pub fn image_url(&self, relative: &str) -> Option<String> {
        let base = self.assets.image_base_url.as_deref()?;
        Some(format!("{}{}", base, relative.trim().trim_start_matches('/')))
    }
}
