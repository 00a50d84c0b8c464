//! Text node cleanup for scraped markup
//!
//! The listing HTML pads everything with indentation and newlines and joins
//! name lists with bare "|" separator nodes. All functions here are pure.

/// Tokens that are markup separators rather than content.
const SENTINELS: &[&str] = &["|"];

/// Remove every run of 2+ whitespace characters entirely and trim the ends.
/// Single interior spaces survive, so "9:00 AM - 9:15 AM" keeps its spacing
/// while indentation runs around it vanish. Idempotent.
pub(crate) fn collapse(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            if chars.peek().is_some_and(|n| n.is_whitespace()) {
                while chars.peek().is_some_and(|n| n.is_whitespace()) {
                    chars.next();
                }
            } else {
                out.push(c);
            }
        } else {
            out.push(c);
        }
    }
    out.trim().to_string()
}

/// Collapse every whitespace run to a single space and trim the ends.
/// Used for prose-style fields where word spacing must survive.
pub(crate) fn squeeze(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trim each raw text node, dropping empties and separator sentinels.
/// Input order is preserved.
pub(crate) fn filter_tokens<'a, I>(nodes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    nodes
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty() && !SENTINELS.contains(t))
        .map(str::to_string)
        .collect()
}
