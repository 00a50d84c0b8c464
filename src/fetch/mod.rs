//! Fetch orchestration
//!
//! One GET per configured date against the listing endpoint, issued through
//! a bounded rayon pool. Per-date results are buffered and flattened in
//! input date order, so output ordering never depends on completion order.
//! A failed date contributes nothing and never aborts its siblings.

use chrono::NaiveDate;
use rayon::prelude::*;
use scraper::Html;
use ureq::Agent;

use crate::consts::{
    DATE_FORMAT, LISTING_PATH, LISTING_SEARCH_INPUT, LISTING_TAG, LISTING_TIMEZONE,
};
use crate::core::{CrawlConfig, Session};
use crate::error::{AppError, FetchError};
use crate::scrape::{PageOutcome, ParseContext, parse_page};

#[derive(Debug, Default)]
pub(crate) struct RunOutcome {
    pub(crate) sessions: Vec<Session>,
    pub(crate) failed_dates: Vec<(NaiveDate, FetchError)>,
    pub(crate) skipped_panels: usize,
}

/// Listing URL for one program day: the crawl-fixed query constants plus
/// the date parameter.
pub(crate) fn listing_url(config: &CrawlConfig, date: NaiveDate) -> String {
    format!(
        "{}/{}?timezone={}&eventSearchInput={}&eventSearchDate={}&eventSearchTrack={}&eventSearchTag={}",
        config.base_url.trim_end_matches('/'),
        LISTING_PATH,
        LISTING_TIMEZONE,
        LISTING_SEARCH_INPUT,
        date.format(DATE_FORMAT),
        config.track,
        LISTING_TAG,
    )
}

fn build_agent(config: &CrawlConfig) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(config.timeout))
        .user_agent(config.user_agent.as_str())
        .http_status_as_error(false)
        .build()
        .into()
}

fn fetch_date(
    agent: &Agent,
    config: &CrawlConfig,
    date: NaiveDate,
) -> Result<PageOutcome, FetchError> {
    let url = listing_url(config, date);
    let response = agent
        .get(&url)
        .call()
        .map_err(|e| FetchError::Transport {
            url: url.clone(),
            source: Box::new(e),
        })?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url,
            status: status.as_u16(),
        });
    }
    let mut body = response.into_body();
    let text = body.read_to_string().map_err(|e| FetchError::Transport {
        url: url.clone(),
        source: Box::new(e),
    })?;

    let doc = Html::parse_document(&text);
    let ctx = ParseContext {
        base_url: &config.base_url,
        page_url: &url,
    };
    Ok(parse_page(&doc, date, &config.track_label, &ctx))
}

/// Fetch and parse every configured date, concatenating sessions in input
/// date order. Fetch failures are reported per-date and skipped.
pub(crate) fn run(config: &CrawlConfig) -> Result<RunOutcome, AppError> {
    let agent = build_agent(config);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.concurrency)
        .build()?;

    if !config.quiet {
        eprintln!(
            "Fetching {} listing pages ({} at a time)...",
            config.dates.len(),
            config.concurrency
        );
    }

    // collect() keeps input order; completion order is irrelevant.
    let per_date: Vec<(NaiveDate, Result<PageOutcome, FetchError>)> = pool.install(|| {
        config
            .dates
            .par_iter()
            .map(|&date| (date, fetch_date(&agent, config, date)))
            .collect()
    });

    let mut outcome = RunOutcome::default();
    for (date, result) in per_date {
        match result {
            Ok(page) => {
                if !config.quiet {
                    eprintln!(
                        "{}: {} sessions",
                        date.format(DATE_FORMAT),
                        page.sessions.len()
                    );
                }
                outcome.sessions.extend(page.sessions);
                outcome.skipped_panels += page.skipped_panels;
            }
            Err(err) => {
                eprintln!("Warning: skipping {}: {}", date.format(DATE_FORMAT), err);
                outcome.failed_dates.push((date, err));
            }
        }
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    fn config(base_url: &str) -> CrawlConfig {
        CrawlConfig {
            dates: vec![NaiveDate::from_ymd_opt(2021, 4, 13).unwrap()],
            track: 171,
            track_label: "[ORGN] Division of Organic Chemistry".to_string(),
            base_url: base_url.to_string(),
            output_path: PathBuf::from("out.json"),
            timeout: Duration::from_secs(2),
            concurrency: 2,
            user_agent: "test-agent".to_string(),
            quiet: true,
        }
    }

    #[test]
    fn listing_url_embeds_date_and_constants() {
        let cfg = config("https://acs.digitellinc.com/");
        let url = listing_url(&cfg, cfg.dates[0]);
        assert_eq!(
            url,
            "https://acs.digitellinc.com/acs/live/8/page/18/1\
             ?timezone=America%2FNew_York&eventSearchInput=\
             &eventSearchDate=2021-04-13&eventSearchTrack=171&eventSearchTag=0"
        );
    }

    #[test]
    fn listing_url_tolerates_missing_trailing_slash() {
        let cfg = config("http://localhost:8080");
        let url = listing_url(&cfg, cfg.dates[0]);
        assert!(url.starts_with("http://localhost:8080/acs/live/8/page/18/1?"));
    }

    #[test]
    fn unreachable_host_is_a_skipped_date_not_a_run_failure() {
        // Nothing listens on port 1; the connection is refused locally.
        let cfg = config("http://127.0.0.1:1/");
        let outcome = run(&cfg).unwrap();
        assert!(outcome.sessions.is_empty());
        assert_eq!(outcome.failed_dates.len(), 1);
        assert_eq!(outcome.failed_dates[0].0, cfg.dates[0]);
        assert!(matches!(
            outcome.failed_dates[0].1,
            FetchError::Transport { .. }
        ));
    }
}
