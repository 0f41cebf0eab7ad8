//! Implementation of the `pagesync check` command.
//!
//! Lists every declared page with its sync status.

use crate::cli::CheckArgs;
use pagesync::config::resolve;
use pagesync::{Page, PageSet, Result};
use tracing::info;

/// Execute the `pagesync check` command.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let pages = PageSet::load(&args.file)?;
    info!(file = %args.file.display(), pages = pages.len(), "checking pages");
    print!("{}", render_check(&pages));
    Ok(())
}

/// One line per page, then a summary.
///
/// Status is `sync` for supported pages, `admin` for administrative pages,
/// and `-` for everything else.
pub(crate) fn render_check(pages: &PageSet) -> String {
    let mut out = String::new();
    let width = pages
        .pages
        .iter()
        .map(|p| p.path().len())
        .max()
        .unwrap_or(0);

    let mut supported = 0;
    for page in &pages.pages {
        let (status, detail) = if page.is_admin() {
            ("admin", String::new())
        } else {
            match resolve(page) {
                Some(config) => {
                    supported += 1;
                    (
                        "sync",
                        format!("{} <- {}", config.markdown_field, config.source.path),
                    )
                }
                None => ("-", String::new()),
            }
        };

        out.push_str(
            format!("{:width$}  {:5}  {}", page.path(), status, detail, width = width)
                .trim_end(),
        );
        out.push('\n');
    }

    out.push_str(&format!(
        "\n{} of {} pages configured for sync\n",
        supported,
        pages.len()
    ));
    out
}
