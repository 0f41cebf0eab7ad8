//! Exit code constants for the pagesync CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable page file, unknown page)
//! - 2: Page is not configured for markdown sync

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable or malformed input, unknown page.
pub const USER_ERROR: i32 = 1;

/// The requested page has no valid sync configuration.
pub const NOT_CONFIGURED: i32 = 2;
