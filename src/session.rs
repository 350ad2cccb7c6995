//! Process-scoped crawl session state.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Subdirectory of the output root holding downloaded images.
///
/// The layout `<output>/images/img_<id><ext>` is an on-disk contract that
/// other tooling may rely on for dedup and inspection.
const IMAGES_SUBDIR: &str = "images";

/// Errors preparing the session's output directory.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The images directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Output-directory context for one orchestrator run.
///
/// Constructed once and handed to the components that need it; there is no
/// process-wide singleton. The set of already-materialized images is derived
/// from filesystem presence on demand, never cached in memory, so concurrent
/// or restarted runs against the same directory coordinate purely through
/// the filesystem.
#[derive(Debug, Clone)]
pub struct CrawlSession {
    output_dir: PathBuf,
    images_dir: PathBuf,
}

impl CrawlSession {
    /// Creates the session, ensuring `<output>/images/` exists.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::CreateDir`] when the directory cannot be
    /// created.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let output_dir = output_dir.into();
        let images_dir = output_dir.join(IMAGES_SUBDIR);
        std::fs::create_dir_all(&images_dir).map_err(|source| SessionError::CreateDir {
            path: images_dir.clone(),
            source,
        })?;
        debug!(images_dir = %images_dir.display(), "crawl session ready");
        Ok(Self {
            output_dir,
            images_dir,
        })
    }

    /// Root of the output tree.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Directory images are written into.
    #[must_use]
    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }
}
