//! Shared HTTP client construction.
//!
//! One browser-identity client is built per session and cloned into each
//! component; reqwest clones share the underlying connection pool.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use crate::user_agent::{BROWSER_ACCEPT, BROWSER_USER_AGENT};

/// Timeout applied to every outbound request. No call may hang past this.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Builds the browser-identity HTTP client shared by the page fetcher, the
/// image store, and the search provider.
///
/// Configuration:
/// - browser User-Agent and Accept headers
/// - 10 second request timeout
/// - gzip decompression
#[must_use]
pub fn browser_client() -> Client {
    build_with_timeout(REQUEST_TIMEOUT_SECS)
}

/// Builds a browser-identity client with an explicit timeout.
///
/// # Panics
///
/// Panics if the HTTP client builder fails to build with the static
/// configuration. This should never happen in practice.
#[must_use]
#[allow(clippy::expect_used)]
pub fn build_with_timeout(timeout_secs: u64) -> Client {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));

    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .gzip(true)
        .user_agent(BROWSER_USER_AGENT)
        .default_headers(headers)
        .build()
        .expect("failed to build HTTP client with static configuration")
}
