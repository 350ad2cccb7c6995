//! Search providers: where candidate site URLs come from.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use scraper::{Html, Selector};
use thiserror::Error;
use tracing::{debug, instrument, warn};
use url::Url;

/// DuckDuckGo's HTML (non-JS) search frontend.
const DUCKDUCKGO_HTML_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// One result as returned by a provider, before any scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSearchResult {
    /// Landing page URL, already resolved past any redirect wrapper.
    pub href: String,
    /// Result title text.
    pub title: String,
}

/// Errors from a search provider.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The search request itself failed (connect, timeout, body read).
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The search endpoint answered with a non-200 status.
    #[error("search endpoint returned HTTP {status}")]
    HttpStatus {
        /// The status code received.
        status: u16,
    },
}

/// A source of search results for a text query.
///
/// The ranker depends on this trait rather than on any concrete engine, so
/// tests can substitute a canned provider.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Runs a text search, returning up to `max_results` results in the
    /// engine's own order.
    async fn text_search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<RawSearchResult>, SearchError>;
}

/// [`SearchProvider`] backed by DuckDuckGo's HTML frontend.
///
/// Scrapes result anchors out of the returned page; no API key required.
#[derive(Debug, Clone)]
pub struct DuckDuckGoProvider {
    client: Client,
    endpoint: String,
}

impl DuckDuckGoProvider {
    /// Provider against the public DuckDuckGo HTML endpoint.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, DUCKDUCKGO_HTML_ENDPOINT)
    }

    /// Provider against a custom endpoint. Used by tests to point at a
    /// local server.
    #[must_use]
    pub fn with_endpoint(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoProvider {
    #[instrument(skip(self))]
    async fn text_search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<RawSearchResult>, SearchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "search endpoint rejected query");
            return Err(SearchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let results = parse_results_page(&body, max_results);
        debug!(results = results.len(), "search page parsed");
        Ok(results)
    }
}

/// Pulls result anchors (`a.result__a`) out of a DuckDuckGo HTML results
/// page. Anchors without a usable href are skipped.
fn parse_results_page(html: &str, max_results: usize) -> Vec<RawSearchResult> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("a.result__a") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|anchor| {
            let href = resolve_redirect(anchor.value().attr("href")?)?;
            let title = anchor.text().collect::<String>().trim().to_string();
            Some(RawSearchResult { href, title })
        })
        .take(max_results)
        .collect()
}

/// Unwraps DuckDuckGo's `/l/?uddg=<encoded>` redirect links to the real
/// destination. Plain links pass through unchanged.
fn resolve_redirect(href: &str) -> Option<String> {
    let absolute = if href.starts_with("//") {
        format!("https:{href}")
    } else {
        href.to_string()
    };
    let parsed = Url::parse(&absolute).ok()?;

    if parsed.path().starts_with("/l/") {
        return parsed
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, value)| value.into_owned());
    }
    Some(absolute)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_link_passes_through() {
        assert_eq!(
            resolve_redirect("https://example.com/gallery").unwrap(),
            "https://example.com/gallery"
        );
    }

    #[test]
    fn test_resolve_unwraps_uddg_redirect() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fbio.univ.edu%2Fgallery&rut=abc123";
        assert_eq!(
            resolve_redirect(href).unwrap(),
            "https://bio.univ.edu/gallery"
        );
    }

    #[test]
    fn test_resolve_redirect_without_uddg_is_none() {
        assert_eq!(resolve_redirect("//duckduckgo.com/l/?rut=abc"), None);
    }

    #[test]
    fn test_parse_results_page_extracts_anchors() {
        let html = r#"
            <html><body>
              <a class="result__a" href="https://example.com/a">First hit</a>
              <a class="other" href="https://example.com/skip">not a result</a>
              <a class="result__a" href="https://example.com/b"> Second  hit </a>
            </body></html>
        "#;
        let results = parse_results_page(html, 10);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].href, "https://example.com/a");
        assert_eq!(results[0].title, "First hit");
        assert_eq!(results[1].title, "Second  hit");
    }

    #[test]
    fn test_parse_results_page_honors_max_results() {
        let html = r#"
            <a class="result__a" href="https://a.example/">a</a>
            <a class="result__a" href="https://b.example/">b</a>
            <a class="result__a" href="https://c.example/">c</a>
        "#;
        assert_eq!(parse_results_page(html, 2).len(), 2);
    }

    #[test]
    fn test_parse_results_page_skips_hrefless_anchors() {
        let html = r#"<a class="result__a">no destination</a>"#;
        assert!(parse_results_page(html, 10).is_empty());
    }
}
