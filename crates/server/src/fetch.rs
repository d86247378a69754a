//! Outbound page fetcher for the scrape path.
//!
//! Wraps a single `reqwest::Client` built at startup and injected through
//! [`crate::state::AppState`]. Pages are requested with browser-like headers
//! since most storefronts refuse obvious bot user agents. No retries; a
//! fixed timeout is the only cancellation in the system.

use std::time::Duration;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};
use thiserror::Error;

/// Per-request timeout for outbound page fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Errors that can occur while fetching a target page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request failed (connect, timeout, invalid URL).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Target responded with a non-success status.
    #[error("target returned HTTP {0}")]
    Status(u16),
}

/// HTTP client for fetching third-party product pages.
#[derive(Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Create a new page fetcher.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new() -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(FETCH_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a page and return its body as text.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the request fails, times out, or the target
    /// responds with a non-success status.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
