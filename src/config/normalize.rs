//! Field-level sanitizers for raw sync map values.

use super::types::{RawValue, coerce_string, with_trailing_slash};
use std::collections::BTreeMap;

/// Normalize an optional field name.
///
/// Returns `None` unless `value` is a string that is non-empty after trimming.
pub fn normalize_field_name(value: Option<&RawValue>) -> Option<String> {
    let trimmed = value?.as_str()?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalize a base URL so it ends in exactly one `/`.
///
/// Returns `None` unless `value` is a string that is non-empty after trimming.
/// Idempotent on its own output.
pub fn normalize_url_base(value: Option<&RawValue>) -> Option<String> {
    let trimmed = value?.as_str()?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(with_trailing_slash(trimmed))
}

/// Normalize a page-field -> frontmatter-key mapping.
///
/// Non-map input yields an empty mapping. Keys and values are coerced to
/// strings and trimmed; entries blank on either side are dropped, and the
/// last entry wins when trimmed keys collide.
pub fn normalize_frontmatter(value: Option<&RawValue>) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();

    let Some(map) = value.and_then(RawValue::as_mapping) else {
        return result;
    };

    for (key, val) in map {
        let key = coerce_string(Some(key));
        let val = coerce_string(Some(val));
        let (key, val) = (key.trim(), val.trim());
        if key.is_empty() || val.is_empty() {
            continue;
        }
        result.insert(key.to_string(), val.to_string());
    }

    result
}
