//! pagesync: per-page markdown sync configuration.
//!
//! Pages in a markdown-to-HTML sync workflow may declare a raw sync map.
//! This crate resolves that map into a normalized [`config::SyncConfig`]
//! and answers narrow questions about it, such as which page field holds
//! the markdown source. Resolution is pure: no I/O, no caching.

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod page;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{SyncConfig, require_config, resolve, supports_page};
pub use error::{Result, SyncError};
pub use page::{Page, PageRecord, PageSet, SyncMapProvider};
