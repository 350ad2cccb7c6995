//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use picstream_core::{DEFAULT_COUNT_PER_SITE, DEFAULT_MAX_SITES};

/// Search the web for a topic and download matching images.
///
/// Picstream searches for the query, ranks result sites by domain
/// reputation, then crawls the top sites and saves verified, deduplicated
/// images under the output directory.
#[derive(Parser, Debug)]
#[command(name = "picstream")]
#[command(author, version, about)]
pub struct Args {
    /// Search query; its first word is also used to filter image candidates
    pub query: String,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Number of top-ranked sites to crawl (1-10)
    #[arg(short = 's', long, default_value_t = DEFAULT_MAX_SITES as u8, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub max_sites: u8,

    /// Maximum images to save per site (1-50)
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT_PER_SITE as u8, value_parser = clap::value_parser!(u8).range(1..=50))]
    pub count_per_site: u8,

    /// Output directory; images land in an images/ subdirectory
    #[arg(short = 'o', long, default_value = "downloads")]
    pub output_dir: PathBuf,

    /// Print the run report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}
