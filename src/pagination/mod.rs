//! Pagination module
//!
//! Cursor pagination as used by every `list`/`query` endpoint of the open
//! platform: each page carries `has_more` and a `page_token` (some endpoints
//! name it `next_page_token`), and the token is sent back as the
//! `page_token` query parameter to get the next page.
//!
//! # Overview
//!
//! A [`Paginator`] turns a page-fetch closure and a [`PageShape`] into a
//! [`PageStream`]: a lazy, forward-only stream of [`PageEvent`]s. Each
//! successful page is yielded with its pagination fields stripped. A failed
//! fetch is yielded once as [`PageEvent::Failed`] and ends the stream, so a
//! consumer can tell "ran out of data" from "stopped on an error" without
//! handling errors mid-loop.

mod paginator;
mod types;

pub(crate) use paginator::failed_stream;
pub use paginator::{PageStream, Paginator};
pub use types::{CursorState, PageBody, PageEvent, PageShape, SplitPage};

#[cfg(test)]
mod tests;
