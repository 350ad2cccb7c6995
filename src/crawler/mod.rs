//! Per-page crawl composition: fetch, extract, filter, acquire.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::extract;
use crate::fetch::PageFetcher;
use crate::filter;
use crate::store::{DownloadRecord, ImageStore};

/// Politeness delay between successful downloads from the same page. Bounds
/// the load imposed on a host per successful download, not per attempt.
pub const POLITENESS_DELAY_MS: u64 = 300;

/// Crawls a single page for images.
///
/// Each page crawl is independent: no state is shared with other pages
/// except the dedup filesystem check inside the store.
#[derive(Debug, Clone)]
pub struct SiteCrawler {
    fetcher: PageFetcher,
    store: ImageStore,
}

impl SiteCrawler {
    /// Composes a crawler from its fetch and store halves.
    #[must_use]
    pub fn new(fetcher: PageFetcher, store: ImageStore) -> Self {
        Self { fetcher, store }
    }

    /// Crawls `page_url`, acquiring at most `max_images` images.
    ///
    /// The cap counts successful acquisitions (`downloaded` or `exists`);
    /// filtered-out candidates and failed downloads do not consume it and the
    /// scan continues past them. The politeness delay runs between a
    /// successful acquisition and the next attempt; the final acquisition is
    /// never followed by one.
    ///
    /// A page fetch failure yields an empty result; it is not an error at
    /// this layer.
    #[instrument(skip(self), fields(url = %page_url))]
    pub async fn crawl_page(
        &self,
        page_url: &str,
        max_images: usize,
        keyword: Option<&str>,
    ) -> Vec<DownloadRecord> {
        info!(max_images, keyword, "crawling page");

        let Ok(parsed_url) = Url::parse(page_url) else {
            warn!("invalid page URL, skipping");
            return Vec::new();
        };

        let html = match self.fetcher.fetch(page_url).await {
            Ok(html) => html,
            Err(error) => {
                warn!(%error, "page fetch failed, skipping page");
                return Vec::new();
            }
        };

        let candidates = extract::extract_candidates(&html, &parsed_url);
        info!(candidates = candidates.len(), "page scan complete");

        let mut records = Vec::new();
        let mut needs_delay = false;
        for candidate in candidates {
            if records.len() >= max_images {
                break;
            }

            if !filter::should_pursue(&candidate, keyword) {
                debug!(url = %candidate.source_url, "candidate filtered out");
                continue;
            }

            // Delay ahead of the attempt following a success, so a final
            // success never leaves a trailing sleep.
            if needs_delay {
                sleep(Duration::from_millis(POLITENESS_DELAY_MS)).await;
                needs_delay = false;
            }

            let Some(mut record) = self.store.acquire(&candidate.source_url, page_url).await
            else {
                continue;
            };
            record.alt_text = candidate.alt_text;
            records.push(record);
            needs_delay = true;
        }

        info!(acquired = records.len(), "page crawl complete");
        records
    }
}
