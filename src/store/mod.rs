//! Verified, deduplicated image acquisition.
//!
//! The store is the only component that writes to disk. Payloads are held in
//! memory and fully verified (size floor, decode) before anything is
//! persisted; partially fetched or undecodable content never reaches the
//! output directory. Dedup is filesystem presence of the derived filename:
//! at most one network fetch per distinct source URL for the lifetime of the
//! output directory, independent of process restarts.

mod identity;

pub use identity::{IDENTIFIER_LEN, content_identifier, storage_filename};

use std::path::PathBuf;

use image::GenericImageView;
use reqwest::Client;
use reqwest::header::REFERER;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Payloads below this size are treated as tracking pixels or placeholders.
pub const MIN_IMAGE_BYTES: usize = 1024;

/// How a [`DownloadRecord`] came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadStatus {
    /// Fetched, verified, and written during this call.
    Downloaded,
    /// Already present on disk; no network access was performed.
    Exists,
}

/// The canonical output unit of the pipeline. Immutable once emitted by the
/// crawler.
#[derive(Debug, Clone, Serialize)]
pub struct DownloadRecord {
    /// Whether this call downloaded the image or found it already stored.
    pub status: DownloadStatus,
    /// Full path of the stored image.
    pub storage_path: PathBuf,
    /// The image URL that was (or would have been) fetched.
    pub source_url: String,
    /// The page the image was discovered on, sent as the Referer.
    pub referer_url: String,
    /// Basename of the stored image (`img_<id><ext>`).
    pub filename: String,
    /// Pixel dimensions, known only for freshly downloaded images.
    pub resolution: Option<(u32, u32)>,
    /// Alt text from the originating element; attached by the crawler.
    pub alt_text: String,
}

/// Downloads images with URL-level dedup against an output directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    client: Client,
    images_dir: PathBuf,
}

impl ImageStore {
    /// Creates a store writing into `images_dir` (already created by the
    /// session).
    #[must_use]
    pub fn new(client: Client, images_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            images_dir: images_dir.into(),
        }
    }

    /// Acquires one image, deduplicating by content identifier.
    ///
    /// Returns `None` on any per-item failure: transport error, non-200
    /// status, undersized payload, or decode failure. Those failures are
    /// deliberately quiet (debug level) so a single bad image never aborts
    /// the crawl of a page.
    ///
    /// If the derived path already exists the source URL is not fetched
    /// again and an [`DownloadStatus::Exists`] record is returned.
    #[instrument(skip(self), fields(url = %source_url))]
    pub async fn acquire(&self, source_url: &Url, referer_url: &str) -> Option<DownloadRecord> {
        let filename = storage_filename(source_url);
        let storage_path = self.images_dir.join(&filename);

        // An unreadable path is treated as absent; the write surfaces the
        // real IO error if there is one.
        if tokio::fs::try_exists(&storage_path).await.unwrap_or(false) {
            debug!(file = %filename, "image already on disk, skipping fetch");
            return Some(DownloadRecord {
                status: DownloadStatus::Exists,
                storage_path,
                source_url: source_url.to_string(),
                referer_url: referer_url.to_string(),
                filename,
                resolution: None,
                alt_text: String::new(),
            });
        }

        let payload = self.download(source_url, referer_url).await?;

        if payload.len() < MIN_IMAGE_BYTES {
            debug!(bytes = payload.len(), "payload below minimum size, rejecting");
            return None;
        }

        let decoded = match image::load_from_memory(&payload) {
            Ok(decoded) => decoded,
            Err(error) => {
                debug!(%error, "payload failed image verification, rejecting");
                return None;
            }
        };
        let resolution = decoded.dimensions();

        // Verified; only now may anything touch the filesystem.
        if let Err(error) = tokio::fs::write(&storage_path, &payload).await {
            warn!(path = %storage_path.display(), %error, "failed to write verified image");
            return None;
        }

        info!(
            file = %filename,
            bytes = payload.len(),
            width = resolution.0,
            height = resolution.1,
            "downloaded image"
        );

        Some(DownloadRecord {
            status: DownloadStatus::Downloaded,
            storage_path,
            source_url: source_url.to_string(),
            referer_url: referer_url.to_string(),
            filename,
            resolution: Some(resolution),
            alt_text: String::new(),
        })
    }

    /// Best-effort, retry-free GET with a Referer header naming the
    /// originating page (defeats simple referrer-checking anti-hotlinking).
    async fn download(&self, source_url: &Url, referer_url: &str) -> Option<Vec<u8>> {
        let response = match self
            .client
            .get(source_url.clone())
            .header(REFERER, referer_url)
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                debug!(%error, "image request failed");
                return None;
            }
        };

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            debug!(status = status.as_u16(), "image request rejected");
            return None;
        }

        match response.bytes().await {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(error) => {
                debug!(%error, "image body read failed");
                None
            }
        }
    }
}
