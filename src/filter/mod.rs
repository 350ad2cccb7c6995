//! Candidate filtering: keyword match, extension plausibility, and an
//! icon/logo exclusion heuristic.
//!
//! The string-matching rules are intentionally approximate. A path segment
//! like `technology-icons` rejects a legitimate photo now and then, and a
//! keyword can match inside an unrelated URL token; that trade is accepted
//! for simplicity and the behavior is load-bearing for compatibility, so do
//! not tighten it.

use url::Url;

use crate::extract::ImageCandidate;

/// Extensions accepted without content inspection (lowercase).
const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "gif"];

/// URL substrings that mark site furniture rather than content images.
const FURNITURE_MARKERS: &[&str] = &["logo", "icon"];

/// Decides whether `candidate` is worth downloading.
///
/// Rules short-circuit in order:
/// 1. With a keyword, the candidate must mention it in the URL or the alt
///    text (case-insensitive containment).
/// 2. A present file extension must be in the accepted set; a missing
///    extension passes provisionally and is validated by decoding later.
/// 3. URLs mentioning "logo" or "icon" are rejected.
#[must_use]
pub fn should_pursue(candidate: &ImageCandidate, keyword: Option<&str>) -> bool {
    let url_lower = candidate.source_url.as_str().to_lowercase();

    if let Some(keyword) = keyword {
        let kw = keyword.to_lowercase();
        if !url_lower.contains(&kw) && !candidate.alt_text.to_lowercase().contains(&kw) {
            return false;
        }
    }

    if let Some(ext) = path_extension(&candidate.source_url) {
        if !ACCEPTED_EXTENSIONS.contains(&ext.as_str()) {
            return false;
        }
    }

    !FURNITURE_MARKERS
        .iter()
        .any(|marker| url_lower.contains(marker))
}

/// Lowercased extension of the URL path's final segment, without the dot.
///
/// Query strings and fragments are not part of the path and never contribute
/// an extension.
pub(crate) fn path_extension(url: &Url) -> Option<String> {
    let last_segment = url.path_segments()?.next_back()?;
    let dot_index = last_segment.rfind('.')?;
    let ext = &last_segment[dot_index + 1..];
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}
