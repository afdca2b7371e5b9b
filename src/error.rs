//! Rich diagnostic error types for leetdocs.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives;
//! [`DocsError`] wraps them so `main` can render any of them with full help text.

use miette::Diagnostic;
use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::ledger::LedgerError;

/// Top-level error type for a documentation run.
#[derive(Debug, Error, Diagnostic)]
pub enum DocsError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Site(#[from] SiteError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Site errors
// ---------------------------------------------------------------------------

/// Errors from reading solutions and writing the generated site.
#[derive(Debug, Error, Diagnostic)]
pub enum SiteError {
    #[error("I/O error on {path}: {source}")]
    #[diagnostic(
        code(leetdocs::site::io),
        help(
            "A filesystem operation failed. Check that the path exists, \
             has correct permissions, and that the disk is not full."
        )
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no solved-badge marker in {path}")]
    #[diagnostic(
        code(leetdocs::site::marker_missing),
        help(
            "The summary needs a line starting with \
             `<img src=\"https://img.shields.io/badge/Solved` followed by at least \
             four more lines (blank, easy, medium, hard). Add the badge block to \
             the README once and later runs will keep it up to date."
        )
    )]
    MarkerMissing { path: String },
}

impl SiteError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

pub type SiteResult<T> = std::result::Result<T, SiteError>;

/// Convenience alias for whole-run results.
pub type DocsResult<T> = std::result::Result<T, DocsError>;
