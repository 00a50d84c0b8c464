/// Standard date format for crawl dates and query parameters: "2021-04-13"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fixed-offset suffix appended to each session's date in the output feed.
/// The site schedules everything in US Eastern; the feed pins -0500.
pub(crate) const DATE_TIME_SUFFIX: &str = "T00:00:00-0500";

/// Origin used for both the listing endpoint and attend deep-links.
pub(crate) const DEFAULT_BASE_URL: &str = "https://acs.digitellinc.com/";

/// Path of the paginated event listing under the base URL.
pub(crate) const LISTING_PATH: &str = "acs/live/8/page/18/1";

/// Crawl-fixed query constants, pre-encoded as the site expects them.
pub(crate) const LISTING_TIMEZONE: &str = "America%2FNew_York";
pub(crate) const LISTING_SEARCH_INPUT: &str = "";
pub(crate) const LISTING_TAG: u32 = 0;

/// Numeric track filter for the Division of Organic Chemistry.
pub(crate) const DEFAULT_TRACK: u32 = 171;
pub(crate) const DEFAULT_TRACK_LABEL: &str = "[ORGN] Division of Organic Chemistry";

/// Spring 2021 technical program days.
pub(crate) const DEFAULT_DATES: [&str; 4] =
    ["2021-04-13", "2021-04-14", "2021-04-15", "2021-04-16"];

pub(crate) const DEFAULT_OUTPUT: &str = "acs_s21_orgn.json";

pub(crate) const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/88.0.4324.96 Safari/537.36";

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub(crate) const DEFAULT_CONCURRENCY: usize = 4;
