//! SyncConfig struct definition.

use serde::Serialize;
use std::collections::BTreeMap;

/// Normalized sync configuration for a single page.
///
/// Built only through [`SyncConfig::from_raw`] or the page resolver, so every
/// instance upholds the normalization rules: `source.path` is non-empty and
/// ends in exactly one `/`, and optional field names are trimmed and never
/// blank. Serializes with the same camelCase keys as the raw map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncConfig {
    /// Where the markdown source document lives.
    pub source: SourceConfig,

    /// Page field holding the raw markdown.
    pub markdown_field: String,

    /// Page field receiving rendered HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_field: Option<String>,

    /// Page field holding the content hash used for change detection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_field: Option<String>,

    /// Page field name -> frontmatter key.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub frontmatter: BTreeMap<String, String>,

    /// Asset location settings.
    pub assets: AssetsConfig,
}

/// Source document settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceConfig {
    /// Base location of markdown documents, always ending in `/`.
    pub path: String,

    /// Page field holding a document reference relative to `path`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_field: Option<String>,

    /// Document used when the page provides no reference. May be empty.
    pub fallback: String,
}

/// Asset settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsConfig {
    /// Base URL for images, always ending in `/` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,
}
