//! HTTP retrieval of the calendar feed.
//!
//! A thin wrapper over reqwest: one GET with a bounded timeout. Any
//! transport failure or non-success status aborts the run; retrying or
//! partial results are not part of the contract.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::{FeedError, FeedResult};

/// Configuration for the feed fetcher.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// User agent sent with the request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            user_agent: format!("busydates/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Retrieves raw iCalendar data over HTTP.
pub struct FeedFetcher {
    /// The underlying HTTP client.
    client: Client,
}

impl FeedFetcher {
    /// Creates a new fetcher with the given configuration.
    pub fn new(config: FetchConfig) -> FeedResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(FeedError::Network)?;

        Ok(Self { client })
    }

    /// Fetches the feed body from `url`.
    ///
    /// The URL is validated before any request is made. Non-success
    /// statuses are reported as [`FeedError::Status`]; an empty body is
    /// returned as-is and judged by the parser.
    pub async fn fetch(&self, url: &str) -> FeedResult<String> {
        let url = Url::parse(url).map_err(|e| FeedError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        debug!(url = %url, "Fetching calendar feed");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FeedError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status { status });
        }

        response.text().await.map_err(FeedError::Network)
    }
}
