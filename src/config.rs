use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::cli::Cli;
use crate::consts::{
    DATE_FORMAT, DEFAULT_BASE_URL, DEFAULT_CONCURRENCY, DEFAULT_DATES, DEFAULT_OUTPUT,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TRACK, DEFAULT_TRACK_LABEL, DEFAULT_USER_AGENT,
};
use crate::core::CrawlConfig;
use crate::error::AppError;

/// Optional file configuration. Every field falls back to the compiled-in
/// crawl defaults; CLI flags override both.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) dates: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) track: Option<u32>,
    #[serde(default)]
    pub(crate) track_label: Option<String>,
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    #[serde(default)]
    pub(crate) output: Option<PathBuf>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) concurrency: Option<usize>,
    #[serde(default)]
    pub(crate) user_agent: Option<String>,
}

impl Config {
    pub(crate) fn load(quiet: bool) -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        if !quiet {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }
        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/acscrape/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("acscrape").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("acscrape").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.acscrape.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".acscrape.toml"));
        }

        paths
    }
}

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| AppError::InvalidDate {
        input: s.to_string(),
    })
}

impl CrawlConfig {
    /// Merge CLI flags over file config over compiled-in defaults into the
    /// immutable configuration the orchestrator runs with.
    pub(crate) fn resolve(cli: &Cli, config: &Config) -> Result<Self, AppError> {
        let date_strings: Vec<String> = if !cli.dates.is_empty() {
            cli.dates.clone()
        } else if let Some(dates) = &config.dates {
            dates.clone()
        } else {
            DEFAULT_DATES.iter().map(|s| s.to_string()).collect()
        };
        let mut dates = Vec::with_capacity(date_strings.len());
        for s in &date_strings {
            dates.push(parse_date(s)?);
        }

        let concurrency = cli
            .concurrency
            .or(config.concurrency)
            .unwrap_or(DEFAULT_CONCURRENCY);
        if concurrency == 0 {
            return Err(AppError::InvalidConcurrency);
        }

        let timeout_secs = cli
            .timeout
            .or(config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(CrawlConfig {
            dates,
            track: cli.track.or(config.track).unwrap_or(DEFAULT_TRACK),
            track_label: cli
                .track_label
                .clone()
                .or_else(|| config.track_label.clone())
                .unwrap_or_else(|| DEFAULT_TRACK_LABEL.to_string()),
            base_url: cli
                .base_url
                .clone()
                .or_else(|| config.base_url.clone())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            output_path: cli
                .output
                .clone()
                .or_else(|| config.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            timeout: Duration::from_secs(timeout_secs),
            concurrency,
            user_agent: cli
                .user_agent
                .clone()
                .or_else(|| config.user_agent.clone())
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            quiet: cli.quiet,
        })
    }
}
