//! CLI argument definitions
//!
//! Every knob here shadows a config-file field; flags win over the file,
//! and the file wins over the compiled-in crawl defaults.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "acscrape")]
#[command(about = "Scrape the ACS meeting schedule into a consolidated JSON feed", version)]
pub(crate) struct Cli {
    /// Program day to crawl (YYYY-MM-DD); repeat for multiple days
    #[arg(short, long = "date", value_name = "DATE")]
    pub(crate) dates: Vec<String>,

    /// Numeric track filter passed to the listing endpoint
    #[arg(long, value_name = "ID")]
    pub(crate) track: Option<u32>,

    /// Division label attached to every session
    #[arg(long, value_name = "LABEL")]
    pub(crate) track_label: Option<String>,

    /// Origin for the listing endpoint and attend deep-links
    #[arg(long, value_name = "URL")]
    pub(crate) base_url: Option<String>,

    /// Output file path
    #[arg(short, long, value_name = "FILE")]
    pub(crate) output: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub(crate) timeout: Option<u64>,

    /// Maximum simultaneous fetches
    #[arg(short, long, value_name = "N")]
    pub(crate) concurrency: Option<usize>,

    /// User-Agent header override
    #[arg(long, value_name = "UA")]
    pub(crate) user_agent: Option<String>,

    /// Suppress progress output (warnings still print)
    #[arg(short, long)]
    pub(crate) quiet: bool,
}
