//! End-to-end orchestration: search, rank, crawl, report.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::client;
use crate::crawler::SiteCrawler;
use crate::fetch::PageFetcher;
use crate::ranker::{RelevanceRanker, SearchProvider};
use crate::session::{CrawlSession, SessionError};
use crate::store::{DownloadRecord, ImageStore};

/// Default number of top-ranked sites to crawl.
pub const DEFAULT_MAX_SITES: usize = 3;

/// Default per-site image cap.
pub const DEFAULT_COUNT_PER_SITE: usize = 5;

/// How many raw search results to request before ranking.
const SEARCH_RESULTS: usize = 10;

/// Parameters for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    /// Full search query. Its first token doubles as the image keyword.
    pub query: String,
    /// Number of top-ranked sites to crawl.
    pub max_sites: usize,
    /// Image cap per site.
    pub count_per_site: usize,
}

impl PipelineRequest {
    /// Request with default site and image limits.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_sites: DEFAULT_MAX_SITES,
            count_per_site: DEFAULT_COUNT_PER_SITE,
        }
    }
}

/// Errors that abort a pipeline run outright.
///
/// Per-site and per-image failures never surface here; they are absorbed
/// inside the crawl and reflected only in the report counts.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The request cannot be acted on at all.
    #[error("invalid request: {reason}")]
    InvalidRequest {
        /// What was wrong with the request.
        reason: &'static str,
    },

    /// The output directory could not be prepared.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Outcome of crawling one ranked site.
#[derive(Debug, Serialize)]
pub struct SiteReport {
    /// The site's landing page URL.
    pub url: String,
    /// Title from the search result.
    pub title: String,
    /// Images acquired from this site.
    pub downloaded: Vec<DownloadRecord>,
}

/// Full outcome of one pipeline run.
#[derive(Debug, Serialize)]
pub struct PipelineReport {
    /// The query that was searched.
    pub query: String,
    /// Per-site outcomes, in crawl order.
    pub sites: Vec<SiteReport>,
    /// Total images acquired across all sites.
    pub total_images: usize,
    /// Directory the images live in.
    pub images_dir: String,
}

impl PipelineReport {
    /// Renders the human-readable run summary.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = format!("Search query: {}\n\n", self.query);

        if self.sites.is_empty() {
            out.push_str("No sites found.\n");
            return out;
        }

        for (index, site) in self.sites.iter().enumerate() {
            out.push_str(&format!("--- Source {}: {} ---\n", index + 1, site.title));
            out.push_str(&format!("{}\n", site.url));
            if site.downloaded.is_empty() {
                out.push_str("no usable images found\n");
            } else {
                let samples: Vec<&str> = site
                    .downloaded
                    .iter()
                    .take(2)
                    .map(|record| record.filename.as_str())
                    .collect();
                out.push_str(&format!(
                    "saved {} image(s) (samples: {})\n",
                    site.downloaded.len(),
                    samples.join(", ")
                ));
            }
            out.push('\n');
        }

        out.push_str(&format!(
            "Done: {} image(s) saved to {}\n",
            self.total_images, self.images_dir
        ));
        out
    }
}

/// First whitespace-separated token of the query, used to filter image
/// candidates. A query like "barn owl flight" keeps only images whose URL or
/// alt text mentions "barn".
fn crawl_keyword(query: &str) -> Option<&str> {
    query.split_whitespace().next()
}

/// Runs the full pipeline: search, rank, crawl top sites, report.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidRequest`] for a blank query. Everything
/// downstream of a valid request degrades to empty report sections instead
/// of erroring.
#[instrument(skip(session, provider), fields(query = %request.query))]
pub async fn run(
    request: &PipelineRequest,
    session: &CrawlSession,
    provider: Arc<dyn SearchProvider>,
) -> Result<PipelineReport, PipelineError> {
    if request.query.trim().is_empty() {
        return Err(PipelineError::InvalidRequest {
            reason: "query must not be empty",
        });
    }

    let http = client::browser_client();
    let ranker = RelevanceRanker::new(provider);
    let crawler = SiteCrawler::new(
        PageFetcher::new(http.clone()),
        ImageStore::new(http, session.images_dir()),
    );

    let ranked = ranker.rank_sites(&request.query, SEARCH_RESULTS).await;
    if ranked.is_empty() {
        warn!("no usable sites for query");
    }

    let keyword = crawl_keyword(&request.query);
    let mut sites = Vec::new();
    let mut total_images = 0;

    for site in ranked.into_iter().take(request.max_sites) {
        let downloaded = crawler
            .crawl_page(&site.url, request.count_per_site, keyword)
            .await;
        total_images += downloaded.len();
        sites.push(SiteReport {
            url: site.url,
            title: site.title,
            downloaded,
        });
    }

    info!(total_images, sites = sites.len(), "pipeline run complete");
    Ok(PipelineReport {
        query: request.query.clone(),
        sites,
        total_images,
        images_dir: session.images_dir().display().to_string(),
    })
}
