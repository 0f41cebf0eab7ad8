//! Raw sync map types and the key names read from it.
//!
//! The raw map is untrusted and loosely typed, so it is carried as a
//! `serde_yaml::Value`. JSON input parses into the same representation.

use serde_yaml::{Mapping, Value};

/// A loosely-typed value as supplied by a page.
pub type RawValue = Value;

pub(crate) const KEY_SOURCE: &str = "source";
pub(crate) const KEY_SOURCE_PATH: &str = "path";
pub(crate) const KEY_SOURCE_PAGE_FIELD: &str = "pageField";
pub(crate) const KEY_SOURCE_FALLBACK: &str = "fallback";
pub(crate) const KEY_MARKDOWN_FIELD: &str = "markdownField";
pub(crate) const KEY_HTML_FIELD: &str = "htmlField";
pub(crate) const KEY_HASH_FIELD: &str = "hashField";
pub(crate) const KEY_FRONTMATTER: &str = "frontmatter";
pub(crate) const KEY_ASSETS: &str = "assets";
pub(crate) const KEY_IMAGE_BASE_URL: &str = "imageBaseUrl";

/// Look up a sub-section of a raw map.
///
/// A missing key and a key holding something other than a map both yield
/// `None`; callers treat that as an empty section.
pub(crate) fn section<'a>(map: &'a Mapping, key: &str) -> Option<&'a Mapping> {
    map.get(key).and_then(Value::as_mapping)
}

/// Look up a key inside an optional section.
pub(crate) fn entry<'a>(map: Option<&'a Mapping>, key: &str) -> Option<&'a Value> {
    map.and_then(|m| m.get(key))
}

/// Coerce a raw scalar to a string.
///
/// Strings pass through, numbers and booleans use their display form, and
/// anything else (absent, null, sequences, maps) becomes the empty string.
/// Finite floats print without a trailing `.0` when integral (`1.0` -> `"1"`).
pub(crate) fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if n.is_f64() && f.is_finite() => f.to_string(),
            _ => n.to_string(),
        },
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Tagged(tagged)) => coerce_string(Some(&tagged.value)),
        _ => String::new(),
    }
}

/// Ensure `value` ends in exactly one `/`.
pub(crate) fn with_trailing_slash(value: &str) -> String {
    format!("{}/", value.trim_end_matches('/'))
}
