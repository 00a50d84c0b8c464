//! Single-panel extraction
//!
//! A panel's heading carries the composite DOM id and a title area with two
//! positional "heading line" blocks: slot 0 is the schedule time, slot 1 the
//! people list. Missing slots degrade to empty values; only a missing id or
//! title is fatal to the panel. Session panels nest presentation panels
//! inside `.panel-body`, one level deep.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::core::{collapse, filter_tokens, resolve_id, squeeze};
use crate::error::PanelError;

static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".panel-heading").unwrap());
static TITLE_AREA: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".panel-heading .panel-title .session-panel-title").unwrap()
});
static TITLE_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static HEADING_LINE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".session-panel-heading").unwrap());
static NESTED_PANELS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".panel-body .panel.panel-default.panel-session").unwrap()
});

/// Context threaded through a page parse, for link building and warnings.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParseContext<'a> {
    /// Origin for attend deep-links
    pub(crate) base_url: &'a str,
    /// Listing URL the HTML came from, named in skip warnings
    pub(crate) page_url: &'a str,
}

/// Common shape shared by sessions and presentations before date/track are
/// attached. `nested` is always empty for presentation panels.
#[derive(Debug, Clone)]
pub(crate) struct PanelRecord {
    pub(crate) title: String,
    pub(crate) time: String,
    pub(crate) people: Vec<String>,
    pub(crate) zoom_link: String,
    pub(crate) nested: Vec<PanelRecord>,
}

/// Parse one session panel, recursing into its nested presentation panels.
/// A failed nested panel is skipped and counted, never fatal to the parent.
pub(crate) fn parse_panel(
    panel: ElementRef<'_>,
    ctx: &ParseContext<'_>,
    skipped: &mut usize,
) -> Result<PanelRecord, PanelError> {
    parse_panel_at(panel, ctx, 0, skipped)
}

fn parse_panel_at(
    panel: ElementRef<'_>,
    ctx: &ParseContext<'_>,
    depth: usize,
    skipped: &mut usize,
) -> Result<PanelRecord, PanelError> {
    // The panel's own heading precedes any nested panel's in document order.
    let raw_id = panel
        .select(&HEADING)
        .next()
        .and_then(|heading| heading.attr("id"))
        .unwrap_or_default();
    let (_, zoom_link) = resolve_id(raw_id, ctx.base_url)?;

    let info = panel
        .select(&TITLE_AREA)
        .next()
        .ok_or_else(|| PanelError::MissingTitle {
            id: raw_id.to_string(),
        })?;

    // Titles may wrap across markup lines; squeeze the interior runs too.
    let title = info
        .select(&TITLE_LINK)
        .next()
        .map(|a| squeeze(&a.text().collect::<String>()))
        .unwrap_or_default();
    if title.is_empty() {
        return Err(PanelError::MissingTitle {
            id: raw_id.to_string(),
        });
    }

    // Two-slot positional convention: slot 0 time, slot 1 people.
    let lines: Vec<ElementRef<'_>> = info.select(&HEADING_LINE).collect();
    let time = lines
        .first()
        .map(|line| collapse(&line.text().collect::<String>()))
        .unwrap_or_default();
    let people = lines
        .get(1)
        .map(|line| filter_tokens(line.text()))
        .unwrap_or_default();

    let mut nested = Vec::new();
    if depth == 0 {
        for child in panel.select(&NESTED_PANELS) {
            match parse_panel_at(child, ctx, depth + 1, skipped) {
                Ok(record) => nested.push(record),
                Err(err) => {
                    *skipped += 1;
                    eprintln!(
                        "Warning: skipping presentation panel on {}: {}",
                        ctx.page_url, err
                    );
                }
            }
        }
    }

    Ok(PanelRecord {
        title,
        time,
        people,
        zoom_link,
        nested,
    })
}
