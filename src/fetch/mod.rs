//! Page retrieval with a browser identity and a bounded timeout.
//!
//! Success is HTTP 200 only; every other outcome maps to a [`FetchError`]
//! that the caller downgrades to "no data" for the affected page.

mod error;

pub use error::FetchError;

use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Fetches raw page content over HTTP.
///
/// Wraps the shared browser-identity client; the request timeout is fixed at
/// client construction (see [`crate::client`]), so no fetch can hang
/// indefinitely.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a fetcher over an already-configured HTTP client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Retrieves the body of `url` as text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, timeout, any non-200
    /// status, or an unreadable body. Callers treat these as "no data" for
    /// the page; they are never propagated as fatal.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("fetching page");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::timeout(url)
            } else {
                FetchError::network(url, e)
            }
        })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!(status = status.as_u16(), "page request failed");
            return Err(FetchError::http_status(url, status.as_u16()));
        }

        response.text().await.map_err(|e| FetchError::body(url, e))
    }
}
