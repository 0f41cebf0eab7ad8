//! Sync configuration resolution for pages.
//!
//! A page may declare a raw, loosely-typed sync map. This module turns it
//! into a normalized [`SyncConfig`], or decides the page is not configured.
//! Malformed sections degrade to absent fields; only a blank `source.path`
//! or `markdownField` rejects the whole map.

mod accessors;
mod model;
mod normalize;
mod operations;
mod resolver;
pub mod types;


// Re-export public API
pub use accessors::{
    get_frontmatter_map, get_hash_field, get_html_field, get_markdown_field, hash_field_name,
    html_field_name, markdown_field_name,
};
pub use model::{AssetsConfig, SourceConfig, SyncConfig};
pub use normalize::{normalize_field_name, normalize_frontmatter, normalize_url_base};
pub use resolver::{require_config, resolve, supports_page};
pub use types::RawValue;
