//! Narrow accessors over the resolved configuration.
//!
//! The `*_field_name` functions serve write paths where a field name is
//! mandatory: an explicit override wins without looking at the page, and
//! only the fallback to configuration can fail. The `get_*` functions serve
//! read-only introspection and never fail.

use super::resolver::{require_config, resolve};
use crate::error::Result;
use crate::page::Page;
use std::collections::BTreeMap;

/// Trimmed override, or `None` when absent or blank.
fn explicit_override(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Name of the page field holding markdown source.
///
/// A non-blank `override_field` is returned trimmed, even for pages that are
/// not configured. Otherwise the page must be configured.
pub fn markdown_field_name<P: Page + ?Sized>(
    page: &P,
    override_field: Option<&str>,
) -> Result<String> {
    if let Some(field) = explicit_override(override_field) {
        return Ok(field);
    }
    Ok(require_config(page)?.markdown_field)
}

/// Name of the page field holding the content hash.
///
/// Same override rule as [`markdown_field_name`]. Without a dedicated
/// `hashField`, the markdown field is used.
pub fn hash_field_name<P: Page + ?Sized>(page: &P, override_field: Option<&str>) -> Result<String> {
    if let Some(field) = explicit_override(override_field) {
        return Ok(field);
    }
    let config = require_config(page)?;
    Ok(config.hash_field.unwrap_or(config.markdown_field))
}

/// Name of the page field receiving rendered HTML.
///
/// Same override rule as [`markdown_field_name`]. A configured page without
/// an `htmlField` yields `Ok(None)`.
pub fn html_field_name<P: Page + ?Sized>(
    page: &P,
    override_field: Option<&str>,
) -> Result<Option<String>> {
    if let Some(field) = explicit_override(override_field) {
        return Ok(Some(field));
    }
    Ok(require_config(page)?.html_field)
}

pub fn get_markdown_field<P: Page + ?Sized>(page: &P) -> Option<String> {
    resolve(page).map(|config| config.markdown_field)
}

pub fn get_html_field<P: Page + ?Sized>(page: &P) -> Option<String> {
    resolve(page).and_then(|config| config.html_field)
}

pub fn get_hash_field<P: Page + ?Sized>(page: &P) -> Option<String> {
    resolve(page).and_then(|config| config.hash_field)
}

/// Page field -> frontmatter key mapping, empty when unconfigured.
pub fn get_frontmatter_map<P: Page + ?Sized>(page: &P) -> BTreeMap<String, String> {
    resolve(page)
        .map(|config| config.frontmatter)
        .unwrap_or_default()
}
