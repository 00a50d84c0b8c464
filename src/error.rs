use std::path::PathBuf;

use thiserror::Error;

/// Configuration and bootstrap failures. Fatal before any fetch starts.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Concurrency must be at least 1")]
    InvalidConcurrency,

    #[error("Failed to start fetch workers: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("{0}")]
    Export(#[from] ExportError),
}

/// Per-panel parse failures. The offending panel is skipped with a warning;
/// sibling panels and the rest of the run continue.
#[derive(Debug, Error)]
pub(crate) enum PanelError {
    #[error("panel id \"{raw}\" has no digit run")]
    MalformedIdentifier { raw: String },

    #[error("panel {id} has no usable title")]
    MissingTitle { id: String },
}

/// Per-date fetch failures. The date contributes nothing; the run continues.
#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("GET {url} returned status {status}")]
    Status { url: String, status: u16 },
}

/// Output-stage failures. Fatal for the whole run.
#[derive(Debug, Error)]
pub(crate) enum ExportError {
    #[error("Failed to encode schedule JSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
