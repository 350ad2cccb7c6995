//! Picstream Core Library
//!
//! This library provides the core functionality for the picstream tool,
//! which discovers candidate web pages for a topic, ranks them by domain
//! reputation, then crawls each page to extract, verify, and deduplicate
//! image downloads.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`client`] - shared browser-identity HTTP client construction
//! - [`fetch`] - page retrieval with a bounded timeout
//! - [`extract`] - image candidate discovery in fetched HTML
//! - [`filter`] - keyword, extension, and site-furniture filtering
//! - [`store`] - content-addressed, verified image store
//! - [`crawler`] - per-page crawl composition
//! - [`ranker`] - text search and domain-reputation ranking
//! - [`session`] - per-run output-directory context
//! - [`pipeline`] - orchestration boundary (query in, report out)

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod crawler;
pub mod extract;
pub mod fetch;
pub mod filter;
pub mod pipeline;
pub mod ranker;
pub mod session;
pub mod store;
pub mod user_agent;

// Re-export commonly used types
pub use crawler::{POLITENESS_DELAY_MS, SiteCrawler};
pub use extract::ImageCandidate;
pub use fetch::{FetchError, PageFetcher};
pub use pipeline::{
    DEFAULT_COUNT_PER_SITE, DEFAULT_MAX_SITES, PipelineError, PipelineReport, PipelineRequest,
    SiteReport,
};
pub use ranker::{
    DuckDuckGoProvider, RankedSite, RawSearchResult, RelevanceRanker, SearchError, SearchProvider,
};
pub use session::{CrawlSession, SessionError};
pub use store::{
    DownloadRecord, DownloadStatus, ImageStore, MIN_IMAGE_BYTES, content_identifier,
    storage_filename,
};
