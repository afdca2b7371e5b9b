//! Run configuration.
//!
//! Paths and HTTP settings are read from TOML (`leetdocs.toml`, or the file
//! named by `LEETDOCS_CONFIG`). Every field has a default, so a missing file
//! is the same as an empty one. Credentials are read from the environment
//! only and never from the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::{ClientConfig, RetryPolicy};

/// Config file used when `LEETDOCS_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "leetdocs.toml";

/// Errors from loading configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(leetdocs::config::read),
        help("Ensure the config file is readable, or unset LEETDOCS_CONFIG to use defaults.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}")]
    #[diagnostic(
        code(leetdocs::config::parse),
        help("Check the TOML syntax in the config file: {message}")
    )]
    Parse { path: String, message: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Everything a run needs to know about where to read and write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Site root for API calls and problem links.
    pub base_url: String,
    /// Ledger JSON: a local path or an http(s) URL.
    pub ledger: String,
    pub solutions_dir: PathBuf,
    pub problems_dir: PathBuf,
    pub mkdocs_file: PathBuf,
    pub readme_file: PathBuf,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    pub retry: RetryPolicy,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://leetcode.com".into(),
            ledger: "ledger.json".into(),
            solutions_dir: PathBuf::from("solutions"),
            problems_dir: PathBuf::from("mkdocs/docs/problems"),
            mkdocs_file: PathBuf::from("mkdocs/mkdocs.yml"),
            readme_file: PathBuf::from("README.md"),
            timeout_secs: 10,
            retry: RetryPolicy::default(),
        }
    }
}

impl DocsConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&path.display().to_string(), &content)
    }

    pub fn parse(origin: &str, content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.into(),
            message: e.to_string(),
        })
    }

    /// Resolve the config for this process.
    ///
    /// `LEETDOCS_CONFIG` must point at an existing file; the default file is
    /// optional.
    pub fn discover() -> ConfigResult<Self> {
        if let Ok(path) = std::env::var("LEETDOCS_CONFIG") {
            return Self::load(Path::new(&path));
        }
        let default = Path::new(DEFAULT_CONFIG_FILE);
        if default.is_file() {
            Self::load(default)
        } else {
            tracing::debug!("no {DEFAULT_CONFIG_FILE}, using defaults");
            Ok(Self::default())
        }
    }

    /// Timeout applied to every HTTP request, including the ledger download.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// HTTP client settings, with credentials taken from the environment.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            timeout: self.timeout(),
            user_agent: non_empty_env("USER_AGENT"),
            session: non_empty_env("LEETCODE_SESSION"),
            retry: self.retry,
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
