//! Blocking HTTP client for the problem catalog and per-problem metadata.
//!
//! One `ureq::Agent` is built up front and shared by every request so the
//! connection pool and session cookie are reused across the whole run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::ProblemSource;
use crate::api::error::{ApiError, ApiResult};
use crate::api::model::{Catalog, Question, RawCatalog, RawQuestionResponse};

const QUESTION_QUERY: &str = r#"
query questionData($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    title
    difficulty
    likes
    dislikes
    topicTags {
      name
    }
  }
}
"#;

/// Bounded retry with exponential backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Zero is treated as one.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Delay before the second attempt; doubles after each failure.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    /// Upper bound for a single delay.
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

fn default_max_attempts() -> u32 {
    5
}
fn default_base_delay_ms() -> u64 {
    500
}
fn default_max_delay_ms() -> u64 {
    8_000
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl RetryPolicy {
    /// Policy that never sleeps. Used by tests.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            base_delay_ms: 0,
            max_delay_ms: 0,
        }
    }

    /// Delay after the `failures`-th consecutive failure (1-based).
    pub fn delay_for(&self, failures: u32) -> Duration {
        let factor = 2u32.saturating_pow(failures.saturating_sub(1));
        Duration::from_millis(self.base_delay_ms)
            .saturating_mul(factor)
            .min(Duration::from_millis(self.max_delay_ms))
    }

    /// Run `op` until it succeeds, fails with a non-retryable error, or the
    /// attempt budget is spent.
    ///
    /// Only [`ApiError::Request`] is retried. Everything else (decode errors,
    /// missing questions) is returned as-is on first occurrence.
    pub fn run<T>(&self, target: &str, mut op: impl FnMut() -> ApiResult<T>) -> ApiResult<T> {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 0;
        loop {
            attempt += 1;
            match op() {
                Ok(value) => return Ok(value),
                Err(ApiError::Request { message, .. }) if attempt >= max_attempts => {
                    return Err(ApiError::RetriesExhausted {
                        target: target.to_string(),
                        attempts: attempt,
                        last_error: message,
                    });
                }
                Err(ApiError::Request { url, message }) => {
                    let delay = self.delay_for(attempt);
                    tracing::warn!(
                        %url,
                        attempt,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %message,
                        "request failed, retrying"
                    );
                    std::thread::sleep(delay);
                }
                Err(other) => return Err(other),
            }
        }
    }
}

/// Connection settings for [`LeetCodeClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root, e.g. `https://leetcode.com`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    pub user_agent: Option<String>,
    /// Value of the `LEETCODE_SESSION` cookie.
    pub session: Option<String>,
    pub retry: RetryPolicy,
}

/// HTTP-backed [`ProblemSource`].
pub struct LeetCodeClient {
    agent: ureq::Agent,
    config: ClientConfig,
}

impl LeetCodeClient {
    pub fn new(config: ClientConfig) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        Self { agent, config }
    }

    /// Attach the headers every request carries.
    fn prepare(&self, request: ureq::Request) -> ureq::Request {
        let mut request = request.set("Connection", "keep-alive");
        if let Some(ua) = &self.config.user_agent {
            request = request.set("User-Agent", ua);
        }
        if let Some(session) = &self.config.session {
            request = request.set("Cookie", &format!("LEETCODE_SESSION={session}"));
        }
        request
    }

    fn read_body(url: &str, result: Result<ureq::Response, ureq::Error>) -> ApiResult<String> {
        let response = result.map_err(|e| ApiError::Request {
            url: url.into(),
            message: e.to_string(),
        })?;
        response.into_string().map_err(|e| ApiError::Request {
            url: url.into(),
            message: format!("read body: {e}"),
        })
    }
}

impl ProblemSource for LeetCodeClient {
    /// Single attempt: a failed catalog download ends the run.
    fn fetch_catalog(&self) -> ApiResult<Catalog> {
        let url = format!("{}/api/problems/all", self.config.base_url);

        let request = self.prepare(self.agent.get(&url));
        let body = Self::read_body(&url, request.call())?;

        let raw: RawCatalog = serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            url: url.clone(),
            message: e.to_string(),
        })?;
        let catalog = raw.into_catalog()?;
        tracing::info!(
            entries = catalog.len(),
            num_total = catalog.num_total,
            "fetched problem catalog"
        );
        Ok(catalog)
    }

    fn fetch_question(&self, slug: &str) -> ApiResult<Question> {
        let url = format!("{}/graphql", self.config.base_url);
        let referer = format!("{}/problems/{slug}", self.config.base_url);

        let payload = serde_json::json!({
            "operationName": "questionData",
            "variables": { "titleSlug": slug },
            "query": QUESTION_QUERY,
        });
        let payload = serde_json::to_string(&payload).map_err(|e| ApiError::Decode {
            url: url.clone(),
            message: format!("JSON serialize error: {e}"),
        })?;

        let body = self.config.retry.run(slug, || {
            let request = self
                .prepare(self.agent.post(&url))
                .set("Content-Type", "application/json")
                .set("Referer", &referer);
            Self::read_body(&url, request.send_string(&payload))
        })?;

        let resp: RawQuestionResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode {
                url: url.clone(),
                message: e.to_string(),
            })?;

        resp.data.question.ok_or_else(|| {
            tracing::warn!(slug, "question is null");
            ApiError::QuestionMissing { slug: slug.into() }
        })
    }
}
