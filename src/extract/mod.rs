//! Candidate image discovery in fetched page content.

use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

/// An extracted image reference, not yet filtered or downloaded.
///
/// Candidates are ephemeral: they exist only within one crawl pass and are
/// consumed exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    /// Fully resolved image URL.
    pub source_url: Url,
    /// Trimmed alt text, empty when the element carries none.
    pub alt_text: String,
}

/// Source attributes checked in order: the primary attribute first, then the
/// two most common lazy-load fallbacks.
const SOURCE_ATTRIBUTES: &[&str] = &["src", "data-src", "data-original"];

/// Extracts image candidates from `html`, resolving relative references
/// against `page_url`.
///
/// Elements without any usable source attribute are skipped, as are
/// references that do not resolve to a valid URL under standard join
/// semantics.
#[must_use]
pub fn extract_candidates(html: &str, page_url: &Url) -> Vec<ImageCandidate> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("img") else {
        return Vec::new();
    };

    let candidates: Vec<ImageCandidate> = document
        .select(&selector)
        .filter_map(|element| {
            let raw_src = SOURCE_ATTRIBUTES
                .iter()
                .find_map(|attr| element.value().attr(attr))?;
            let source_url = page_url.join(raw_src).ok()?;
            let alt_text = element
                .value()
                .attr("alt")
                .unwrap_or("")
                .trim()
                .to_string();
            Some(ImageCandidate {
                source_url,
                alt_text,
            })
        })
        .collect();

    debug!(page = %page_url, count = candidates.len(), "extracted image candidates");
    candidates
}
