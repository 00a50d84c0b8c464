//! Whole-page extraction for one program day
//!
//! Only direct children of the event-content container are session panels;
//! anything deeper belongs to the panel parser's own recursion.

use std::sync::LazyLock;

use chrono::NaiveDate;
use scraper::{Html, Selector};

use crate::consts::{DATE_FORMAT, DATE_TIME_SUFFIX};
use crate::core::{Presentation, Session};
use crate::scrape::panel::{PanelRecord, ParseContext, parse_panel};

static SESSION_PANELS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("#event-content > div.panel.panel-default.panel-session").unwrap()
});

#[derive(Debug, Default)]
pub(crate) struct PageOutcome {
    pub(crate) sessions: Vec<Session>,
    pub(crate) skipped_panels: usize,
}

/// Extract every session on a listing page, attaching the originating date
/// and the crawl's division label. A page with no session panels is a valid
/// empty day. Broken panels are skipped with a warning and counted.
pub(crate) fn parse_page(
    doc: &Html,
    date: NaiveDate,
    track: &str,
    ctx: &ParseContext<'_>,
) -> PageOutcome {
    let date_stamp = format!("{}{}", date.format(DATE_FORMAT), DATE_TIME_SUFFIX);
    let mut outcome = PageOutcome::default();
    for panel in doc.select(&SESSION_PANELS) {
        match parse_panel(panel, ctx, &mut outcome.skipped_panels) {
            Ok(record) => outcome.sessions.push(session_from(record, &date_stamp, track)),
            Err(err) => {
                outcome.skipped_panels += 1;
                eprintln!("Warning: skipping session panel on {}: {}", ctx.page_url, err);
            }
        }
    }
    outcome
}

fn session_from(record: PanelRecord, date_stamp: &str, track: &str) -> Session {
    Session {
        date: date_stamp.to_string(),
        track: track.to_string(),
        title: record.title,
        time: record.time,
        presiders: record.people,
        presentations: record.nested.into_iter().map(presentation_from).collect(),
        zoom_link: record.zoom_link,
    }
}

fn presentation_from(record: PanelRecord) -> Presentation {
    Presentation {
        title: record.title,
        time: record.time,
        presenters: record.people,
        zoom_link: record.zoom_link,
    }
}
