//! Browser-identity header values shared by all outbound HTTP traffic.
//!
//! The crawler presents itself as a desktop browser on every request: many
//! image hosts reject unknown clients outright, and a single shared identity
//! keeps page fetches, image downloads, and search traffic consistent.

/// Browser User-Agent sent on every request.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Accept header matching what a browser sends for top-level navigation.
pub const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
