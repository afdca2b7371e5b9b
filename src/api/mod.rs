//! Problem metadata: the bulk catalog listing and per-problem GraphQL lookups.

pub mod client;
pub mod error;
pub mod model;

pub use client::{ClientConfig, LeetCodeClient, RetryPolicy};
pub use error::{ApiError, ApiResult};
pub use model::{Catalog, CatalogEntry, Difficulty, Question};

/// Slugs that were renamed upstream, mapped to the slug that still resolves.
const RENAMED_SLUGS: &[(&str, &str)] = &[("bulb-switcher-iv", "minimum-suffix-flips")];

/// Anything that can list problems and describe a single one.
///
/// Implemented over HTTP by [`LeetCodeClient`]; tests drive the pipeline with
/// an in-memory implementation.
pub trait ProblemSource {
    /// Fetch the full catalog, sorted by frontend id.
    fn fetch_catalog(&self) -> ApiResult<Catalog>;

    /// Fetch extended metadata for one slug.
    fn fetch_question(&self, slug: &str) -> ApiResult<Question>;
}

/// The slug to query for `slug`, accounting for known upstream renames.
pub fn lookup_slug(slug: &str) -> &str {
    RENAMED_SLUGS
        .iter()
        .find(|(old, _)| *old == slug)
        .map(|(_, new)| *new)
        .unwrap_or(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renamed_slug_is_remapped() {
        assert_eq!(lookup_slug("bulb-switcher-iv"), "minimum-suffix-flips");
    }

    #[test]
    fn other_slugs_pass_through() {
        assert_eq!(lookup_slug("two-sum"), "two-sum");
        assert_eq!(lookup_slug("minimum-suffix-flips"), "minimum-suffix-flips");
    }
}
