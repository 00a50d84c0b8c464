//! Core module - record types and the leaf utilities of the pipeline

mod dedup;
mod ident;
mod text;
mod types;

pub(crate) use dedup::dedupe_by_key;
pub(crate) use ident::resolve_id;
pub(crate) use text::{collapse, filter_tokens, squeeze};
pub(crate) use types::{CrawlConfig, Presentation, Session};
