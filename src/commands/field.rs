//! Implementation of the `pagesync field` command.

use crate::cli::{FieldArgs, FieldKind};
use pagesync::config::{hash_field_name, html_field_name, markdown_field_name};
use pagesync::{Page, PageSet, Result, SyncError};

/// Execute the `pagesync field` command.
pub fn cmd_field(args: FieldArgs) -> Result<()> {
    let pages = PageSet::load(&args.file)?;
    let page = pages.find(&args.page)?;
    println!(
        "{}",
        field_name(page, args.kind, args.override_field.as_deref())?
    );
    Ok(())
}

/// Resolve a single field name for a page.
///
/// All kinds follow the override-first rule of the library. A configured
/// page without an HTML field is a user error.
pub(crate) fn field_name<P: Page + ?Sized>(
    page: &P,
    kind: FieldKind,
    override_field: Option<&str>,
) -> Result<String> {
    match kind {
        FieldKind::Markdown => markdown_field_name(page, override_field),
        FieldKind::Hash => hash_field_name(page, override_field),
        FieldKind::Html => html_field_name(page, override_field)?.ok_or_else(|| {
            SyncError::UserError(format!("page '{}' has no HTML field configured", page.path()))
        }),
    }
}
