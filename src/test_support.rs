use crate::config::RawValue;
use crate::page::{Page, PageRecord};

/// Parse a YAML snippet into a raw sync map.
pub(crate) fn raw(yaml: &str) -> RawValue {
    serde_yaml::from_str(yaml).unwrap()
}

/// A page declaring the given sync map.
pub(crate) fn synced_page(path: &str, yaml: &str) -> PageRecord {
    PageRecord::new(path).with_sync(raw(yaml))
}

/// A page type that never exposes the sync map capability.
pub(crate) struct PlainPage {
    pub(crate) path: String,
}

impl PlainPage {
    pub(crate) fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

impl Page for PlainPage {
    fn path(&self) -> &str {
        &self.path
    }

    fn is_admin(&self) -> bool {
        false
    }
}

pub(crate) const MINIMAL_SYNC: &str = r#"
source:
  path: content
markdownField: md
"#;

pub(crate) const FULL_SYNC: &str = r#"
source:
  path: "  docs///  "
  pageField: " slug "
  fallback: " index.md"
markdownField: "  body  "
htmlField: html
hashField: " body_hash "
frontmatter:
  title: title
  " summary ": " description "
  "": orphan
  tags: "   "
assets:
  imageBaseUrl: "https://cdn.example.com/img//"
"#;
