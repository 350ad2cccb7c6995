//! Site ranking: score search results by domain reputation.

mod domain;
mod provider;

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

pub use provider::{DuckDuckGoProvider, RawSearchResult, SearchError, SearchProvider};

/// Score every result starts from.
const BASE_SCORE: i32 = 50;

/// Score assigned to blocklisted domains. Low enough that no bonus can lift
/// it back above zero.
const BLOCKED_SCORE: i32 = -1000;

/// Bonus for educational institutions.
const EDU_BONUS: i32 = 20;

/// Registrable domains of aggregator and social platforms whose pages are
/// hostile to scraping or dominated by unrelated thumbnails.
const BLOCKED_DOMAINS: &[&str] = &["pinterest", "facebook", "twitter", "instagram", "tiktok"];

/// A search result that survived scoring, ready to crawl.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedSite {
    /// Landing page URL.
    pub url: String,
    /// Result title from the search engine.
    pub title: String,
    /// Reputation score; always positive in ranker output.
    pub score: i32,
}

/// Ranks search results by domain reputation.
#[derive(Clone)]
pub struct RelevanceRanker {
    provider: Arc<dyn SearchProvider>,
}

impl RelevanceRanker {
    /// Ranker over the given search provider.
    #[must_use]
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// Searches for `query` and returns scored sites, best first.
    ///
    /// Blocklisted and otherwise non-positive results are dropped. Ties keep
    /// the engine's original order. A provider failure is logged and yields
    /// an empty list; the caller decides whether that is fatal.
    #[instrument(skip(self))]
    pub async fn rank_sites(&self, query: &str, max_results: usize) -> Vec<RankedSite> {
        let raw = match self.provider.text_search(query, max_results).await {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "search failed, no sites to rank");
                return Vec::new();
            }
        };

        let mut sites: Vec<RankedSite> = raw
            .into_iter()
            .filter_map(|result| {
                let score = score_result(&result);
                if score > 0 {
                    Some(RankedSite {
                        url: result.href,
                        title: result.title,
                        score,
                    })
                } else {
                    debug!(url = %result.href, score, "result excluded");
                    None
                }
            })
            .collect();

        // Stable sort: equal scores keep the engine's order.
        sites.sort_by(|a, b| b.score.cmp(&a.score));
        info!(ranked = sites.len(), "sites ranked");
        sites
    }
}

fn score_result(result: &RawSearchResult) -> i32 {
    if let Some(domain) = domain::registrable_domain(&result.href) {
        if BLOCKED_DOMAINS.contains(&domain.as_str()) {
            return BLOCKED_SCORE;
        }
    }

    let mut score = BASE_SCORE;
    if domain::public_suffix(&result.href).as_deref() == Some("edu") {
        score += EDU_BONUS;
    }
    score
}
