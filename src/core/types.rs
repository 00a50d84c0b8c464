//! Record types emitted by the pipeline
//!
//! Field declaration order is the JSON field order of the output feed;
//! both types are frozen once their page parse completes.

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use serde::Serialize;

/// One talk inside a session. Owned by its parent [`Session`]; it has no
/// identity outside that containment.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Presentation {
    pub(crate) title: String,
    pub(crate) time: String,
    pub(crate) presenters: Vec<String>,
    pub(crate) zoom_link: String,
}

/// One scheduled session for a single program day.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Session {
    /// Program day with the fixed -0500 suffix, e.g. "2021-04-13T00:00:00-0500"
    pub(crate) date: String,
    /// Division label attached by the crawl configuration
    pub(crate) track: String,
    pub(crate) title: String,
    /// Free-text schedule line, whitespace-collapsed
    pub(crate) time: String,
    pub(crate) presiders: Vec<String>,
    pub(crate) presentations: Vec<Presentation>,
    pub(crate) zoom_link: String,
}

/// Resolved crawl configuration. Built once from CLI + config file +
/// defaults, then passed by reference into the orchestrator; never mutated.
#[derive(Debug, Clone)]
pub(crate) struct CrawlConfig {
    pub(crate) dates: Vec<NaiveDate>,
    pub(crate) track: u32,
    pub(crate) track_label: String,
    pub(crate) base_url: String,
    pub(crate) output_path: PathBuf,
    pub(crate) timeout: Duration,
    pub(crate) concurrency: usize,
    pub(crate) user_agent: String,
    pub(crate) quiet: bool,
}
