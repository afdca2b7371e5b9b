//! Rich diagnostic error types for the problem-metadata API.

use miette::Diagnostic;
use thiserror::Error;

/// Errors from catalog and question lookups.
#[derive(Debug, Error, Diagnostic)]
pub enum ApiError {
    #[error("request to \"{url}\" failed: {message}")]
    #[diagnostic(
        code(leetdocs::api::request),
        help(
            "The request did not complete. Check that the network is available \
             and that USER_AGENT / LEETCODE_SESSION are set if the site requires them."
        )
    )]
    Request { url: String, message: String },

    #[error("giving up on \"{target}\" after {attempts} attempts: {last_error}")]
    #[diagnostic(
        code(leetdocs::api::retries_exhausted),
        help(
            "Every attempt failed. Raise `retry.max_attempts` or `retry.max_delay_ms` \
             in leetdocs.toml if the site is rate-limiting, or try again later."
        )
    )]
    RetriesExhausted {
        target: String,
        attempts: u32,
        last_error: String,
    },

    #[error("failed to decode response from \"{url}\": {message}")]
    #[diagnostic(
        code(leetdocs::api::decode),
        help(
            "The server answered with a body that does not match the expected shape. \
             A logged-out session often returns an HTML page instead of JSON."
        )
    )]
    Decode { url: String, message: String },

    #[error("no question returned for slug \"{slug}\"")]
    #[diagnostic(
        code(leetdocs::api::question_missing),
        help("The slug may have been renamed upstream. Check the problem URL on the site.")
    )]
    QuestionMissing { slug: String },

    #[error("unknown difficulty: \"{value}\"")]
    #[diagnostic(
        code(leetdocs::api::unknown_difficulty),
        help("Difficulty must be Easy, Medium or Hard (levels 1, 2 or 3).")
    )]
    UnknownDifficulty { value: String },
}

/// Convenience alias for API results.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
