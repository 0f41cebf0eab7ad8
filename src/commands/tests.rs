//! Tests for command rendering.

use super::check::render_check;
use super::field::field_name;
use super::show::render_show;
use crate::cli::{FieldKind, OutputFormat};
use pagesync::{PageSet, SyncError};

const PAGES: &str = r#"
pages:
  - path: /docs/intro
    sync:
      source:
        path: content//
      markdownField: body
      htmlField: rendered
      hashField: digest
  - path: /docs/faq
    sync:
      source: { path: content }
      markdownField: " md "
  - path: /admin
    admin: true
    sync:
      source: { path: content }
      markdownField: body
  - path: /about
"#;

fn pages() -> PageSet {
    PageSet::from_yaml(PAGES).unwrap()
}

#[test]
fn test_render_check_lists_every_page() {
    let out = render_check(&pages());
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines[0].starts_with("/docs/intro"));
    assert!(lines[0].contains("sync"));
    assert!(lines[0].ends_with("body <- content/"));
    assert!(lines[1].ends_with("md <- content/"));
    assert!(lines[2].starts_with("/admin"));
    assert!(lines[2].ends_with("admin"));
    assert!(lines[3].starts_with("/about"));
    assert!(lines[3].ends_with('-'));
    assert!(out.ends_with("2 of 4 pages configured for sync\n"));
}

#[test]
fn test_render_check_empty() {
    let out = render_check(&PageSet::default());
    assert!(out.contains("0 of 0 pages configured for sync"));
}

#[test]
fn test_render_show_yaml() {
    let out = render_show(&pages(), "/docs/intro", OutputFormat::Yaml).unwrap();
    assert!(out.contains("path: content/"));
    assert!(out.contains("markdownField: body"));
    assert!(out.contains("htmlField: rendered"));
    assert!(out.ends_with('\n'));
}

#[test]
fn test_render_show_json() {
    let out = render_show(&pages(), "/docs/faq", OutputFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["markdownField"], "md");
    assert_eq!(json["source"]["path"], "content/");
}

#[test]
fn test_render_show_unconfigured_page() {
    let err = render_show(&pages(), "/about", OutputFormat::Yaml).unwrap_err();
    assert_eq!(err, SyncError::not_configured("/about"));
}

#[test]
fn test_render_show_admin_page() {
    let err = render_show(&pages(), "/admin", OutputFormat::Yaml).unwrap_err();
    assert_eq!(err, SyncError::not_configured("/admin"));
}

#[test]
fn test_field_name_admin_page() {
    let set = pages();
    let admin = set.find("/admin").unwrap();
    assert_eq!(
        field_name(admin, FieldKind::Markdown, None).unwrap_err(),
        SyncError::not_configured("/admin")
    );
    assert_eq!(
        field_name(admin, FieldKind::Html, Some("out")).unwrap(),
        "out"
    );
}

#[test]
fn test_render_show_unknown_page() {
    let err = render_show(&pages(), "/nope", OutputFormat::Yaml).unwrap_err();
    assert!(matches!(err, SyncError::UserError(_)));
}

#[test]
fn test_field_name_kinds() {
    let set = pages();
    let intro = set.find("/docs/intro").unwrap();
    let faq = set.find("/docs/faq").unwrap();

    assert_eq!(field_name(intro, FieldKind::Markdown, None).unwrap(), "body");
    assert_eq!(field_name(intro, FieldKind::Hash, None).unwrap(), "digest");
    assert_eq!(field_name(intro, FieldKind::Html, None).unwrap(), "rendered");
    assert_eq!(field_name(faq, FieldKind::Hash, None).unwrap(), "md");
}

#[test]
fn test_field_name_override_on_unconfigured_page() {
    let set = pages();
    let about = set.find("/about").unwrap();

    for kind in [FieldKind::Markdown, FieldKind::Hash, FieldKind::Html] {
        assert_eq!(field_name(about, kind, Some(" custom ")).unwrap(), "custom");
        assert_eq!(
            field_name(about, kind, None).unwrap_err(),
            SyncError::not_configured("/about")
        );
    }
}

#[test]
fn test_field_name_missing_html_field() {
    let set = pages();
    let faq = set.find("/docs/faq").unwrap();
    let err = field_name(faq, FieldKind::Html, None).unwrap_err();
    assert!(matches!(err, SyncError::UserError(_)));
    assert!(err.to_string().contains("/docs/faq"));
}
