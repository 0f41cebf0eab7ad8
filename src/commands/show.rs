//! Implementation of the `pagesync show` command.

use crate::cli::{OutputFormat, ShowArgs};
use pagesync::config::require_config;
use pagesync::{PageSet, Result};

/// Execute the `pagesync show` command.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let pages = PageSet::load(&args.file)?;
    let output = render_show(&pages, &args.page, args.format)?;
    print!("{}", output);
    Ok(())
}

/// Serialized config of one page, newline-terminated.
pub(crate) fn render_show(pages: &PageSet, page: &str, format: OutputFormat) -> Result<String> {
    let config = require_config(pages.find(page)?)?;
    let mut out = match format {
        OutputFormat::Yaml => config.to_yaml()?,
        OutputFormat::Json => config.to_json()?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
