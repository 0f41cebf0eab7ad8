//! Error types for pagesync.
//!
//! Uses thiserror for derive macros. Absence of configuration is usually
//! represented as `None`; only callers that need a field name get an error.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for pagesync operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The page has no usable sync configuration and no override was given.
    #[error("page '{path}' is not configured for markdown sync")]
    NotConfigured {
        /// Identifying path of the page, for diagnostics.
        path: String,
    },

    /// Bad arguments or unreadable input (CLI surface only).
    #[error("{0}")]
    UserError(String),
}

impl SyncError {
    /// Build a `NotConfigured` error for the given page path.
    pub fn not_configured(path: impl Into<String>) -> Self {
        SyncError::NotConfigured { path: path.into() }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncError::NotConfigured { .. } => exit_codes::NOT_CONFIGURED,
            SyncError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for pagesync operations.
pub type Result<T> = std::result::Result<T, SyncError>;
