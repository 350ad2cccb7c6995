//! CLI entry point for the picstream tool.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use picstream_core::{CrawlSession, DuckDuckGoProvider, PipelineRequest, client, pipeline};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");
    info!("Picstream starting");

    let session = CrawlSession::new(&args.output_dir)?;
    let provider = Arc::new(DuckDuckGoProvider::new(client::browser_client()));

    let mut request = PipelineRequest::new(&args.query);
    request.max_sites = usize::from(args.max_sites);
    request.count_per_site = usize::from(args.count_per_site);

    let report = pipeline::run(&request, &session, provider).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}
