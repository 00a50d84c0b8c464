//! Panel identifier resolution
//!
//! Panel headings carry composite DOM ids like "panel-session-12345"; only
//! the digit run is meaningful. It keys the site's attend deep-link.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::PanelError;

/// Non-digit prefix followed by the first maximal digit run. Anything after
/// the run is ignored.
static ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D*(\d+)").unwrap());

/// Extract the numeric id from a composite DOM id string and build the
/// attend deep-link for it. The digit run is returned exactly as written
/// (leading zeros preserved). Ids with no digit run are a fatal parse error
/// for their panel.
pub(crate) fn resolve_id(raw: &str, base_url: &str) -> Result<(String, String), PanelError> {
    let digits = ID_RE
        .captures(raw)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| PanelError::MalformedIdentifier {
            raw: raw.to_string(),
        })?;
    let url = format!(
        "{}/acs/events/{}/attend",
        base_url.trim_end_matches('/'),
        digits
    );
    Ok((digits, url))
}
