//! Run orchestration: fetch everything, dedupe, summarize, export.
//!
//! Skipped panels and failed dates are warnings; the run fails only when
//! the configuration is unusable or the output file cannot be written.

use crate::core::{CrawlConfig, Session, dedupe_by_key};
use crate::error::AppError;
use crate::fetch;
use crate::output;

pub(crate) fn run(config: &CrawlConfig) -> Result<(), AppError> {
    let outcome = fetch::run(config)?;

    if outcome.skipped_panels > 0 {
        eprintln!(
            "Warning: {} panels skipped due to markup errors",
            outcome.skipped_panels
        );
    }
    if !outcome.failed_dates.is_empty() {
        eprintln!(
            "Warning: {} of {} dates failed to fetch",
            outcome.failed_dates.len(),
            config.dates.len()
        );
    }

    // The attend link is the one stable key a session has; overlapping
    // listing pages must not double-emit a session.
    let total = outcome.sessions.len();
    let sessions = dedupe_by_key(outcome.sessions, |s: &Session| Some(s.zoom_link.clone()));
    if sessions.len() < total {
        eprintln!(
            "Warning: dropped {} duplicate sessions",
            total - sessions.len()
        );
    }

    if !config.quiet {
        eprintln!(
            "Collected {} sessions from {} dates",
            sessions.len(),
            config.dates.len() - outcome.failed_dates.len()
        );
    }

    output::export(&sessions, &config.output_path)?;
    if !config.quiet {
        eprintln!("Wrote {}", config.output_path.display());
    }
    Ok(())
}
