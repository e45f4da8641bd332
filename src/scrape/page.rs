//! HTTP page client: one browsing session shared by a whole pipeline run.

use crate::Result;
use std::time::Duration;

/// Per-request timeout applied when the operator does not override it.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Browser-like user agent; some stats sites reject the default reqwest one.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Wrapper around a shared [`reqwest::Client`].
///
/// Built once per run; every fetch is bounded by the configured timeout so
/// no extraction can block indefinitely.
pub struct PageClient {
    client: reqwest::Client,
}

impl PageClient {
    /// Build the shared HTTP session.
    ///
    /// A failure here is the one total-pipeline failure mode: without a
    /// session no extraction can happen, and the caller must abort before
    /// any table is touched.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch a page body.
    ///
    /// Returns `Ok(None)` on a non-success status (page not there, try the
    /// next candidate location) and `Err` on transport failure or timeout.
    pub async fn fetch(&self, url: &str) -> Result<Option<String>> {
        let res = self.client.get(url).send().await?;
        if !res.status().is_success() {
            return Ok(None);
        }
        Ok(Some(res.text().await?))
    }
}
