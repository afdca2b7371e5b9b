// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # leetdocs
//!
//! Generates a static documentation site for solved LeetCode problems.
//!
//! ## Architecture
//!
//! - **Problem metadata** (`api`): catalog listing and per-slug GraphQL lookups
//!   over one shared blocking HTTP agent, with bounded retry
//! - **Ledger** (`ledger`): per-problem time/space complexity and approach names
//! - **Solutions** (`solutions`): solution sources on disk, keyed by padded id
//! - **Pages** (`render`): Markdown page per problem with badges and code tabs
//! - **Navigation** (`nav`): `Problems` block appended to `mkdocs.yml`
//! - **Summary** (`summary`): solved-count badges rewritten in the README
//! - **Pipeline** (`pipeline`): runs the stages above in order
//!
//! ## Library usage
//!
//! ```no_run
//! use leetdocs::api::LeetCodeClient;
//! use leetdocs::config::DocsConfig;
//! use leetdocs::ledger::Ledger;
//! use leetdocs::pipeline::Pipeline;
//!
//! let config = DocsConfig::default();
//! let client = LeetCodeClient::new(config.client_config());
//! let ledger = Ledger::load(&config.ledger, config.timeout()).unwrap();
//! let report = Pipeline::new(&client, &config, ledger, false).unwrap().run().unwrap();
//! println!("{} pages", report.pages_written);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod ledger;
pub mod nav;
pub mod pipeline;
pub mod render;
pub mod solutions;
pub mod summary;

#[cfg(test)]
mod test_http;
