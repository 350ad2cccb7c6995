//! Content identity: deterministic URL digests and storage filenames.

use sha2::{Digest, Sha256};
use url::Url;

use crate::filter::path_extension;

/// Hex length of a content identifier.
pub const IDENTIFIER_LEN: usize = 12;

/// Extension used when the URL path has none, or one too long to be a real
/// image extension.
const DEFAULT_EXTENSION: &str = ".jpg";

/// Longest plausible image extension, without the dot ("jpeg", "webp").
const MAX_EXTENSION_LEN: usize = 4;

/// Deterministic digest of a source URL, truncated to 12 hex characters.
///
/// The digest covers the exact URL string: the same source URL always maps
/// to the same identifier, and therefore the same storage path, across
/// process runs. Two different URLs serving identical bytes stay distinct;
/// dedup is URL-level, not byte-level.
#[must_use]
pub fn content_identifier(source_url: &str) -> String {
    let digest = Sha256::digest(source_url.as_bytes());
    hex::encode(digest)[..IDENTIFIER_LEN].to_string()
}

/// Storage filename for a source URL: `img_<12-hex-identifier><ext>`.
///
/// This naming is the on-disk contract: presence of the derived filename in
/// the output directory is the dedup signal for the source URL.
#[must_use]
pub fn storage_filename(source_url: &Url) -> String {
    let ext = path_extension(source_url)
        .filter(|ext| ext.len() <= MAX_EXTENSION_LEN)
        .map_or_else(|| DEFAULT_EXTENSION.to_string(), |ext| format!(".{ext}"));
    format!("img_{}{ext}", content_identifier(source_url.as_str()))
}
