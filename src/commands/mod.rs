//! Command implementations for pagesync.
//!
//! Each command loads the page document, runs the library resolver, and
//! prints the result. Rendering is split from printing so output can be
//! tested without capturing stdout.

mod check;
mod field;
mod show;

#[cfg(test)]
mod tests;

use crate::cli::Command;
use pagesync::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => check::cmd_check(args),
        Command::Show(args) => show::cmd_show(args),
        Command::Field(args) => field::cmd_field(args),
    }
}
