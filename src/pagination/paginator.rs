//! Paginator implementation
//!
//! Drives a page-fetch closure until the server reports no more pages or a
//! fetch fails.

use super::types::{CursorState, PageBody, PageEvent, PageShape};
use crate::error::{Error, Result};
use crate::types::JsonValue;
use futures::stream::{self, FusedStream, Stream, StreamExt};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::{debug, error, warn};

/// Builds page streams from a page-fetch closure
///
/// The closure receives the cursor for the page to fetch (`None` for the
/// first page) and returns that page's `data` object.
pub struct Paginator<F> {
    fetch: F,
    shape: PageShape,
}

impl<F, Fut> Paginator<F>
where
    F: FnMut(Option<String>) -> Fut + Send + 'static,
    Fut: Future<Output = Result<JsonValue>> + Send + 'static,
{
    /// Create a paginator
    pub fn new(shape: PageShape, fetch: F) -> Self {
        Self { fetch, shape }
    }

    /// Start iterating; every call starts from the first page
    pub fn into_stream<T>(self) -> PageStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let state = Some((self.fetch, self.shape, CursorState::new()));

        let inner = stream::unfold(state, |state| async move {
            let (mut fetch, shape, mut cursor) = state?;
            if !cursor.has_more {
                return None;
            }

            let token = cursor.page_token.take();
            let page_no = cursor.pages_fetched + 1;
            debug!("Fetching page {} (token: {:?})", page_no, token);

            let split = match fetch(token).await {
                Ok(data) => shape.split::<T>(data),
                Err(e) => Err(e),
            };

            match split {
                Ok(page) => {
                    if page.has_more && page.token.is_none() {
                        warn!(
                            "Page {} reports more pages but carries no token, next fetch starts without one",
                            page_no
                        );
                    }
                    debug!(
                        "Page {}: {} items, has_more={}",
                        page_no,
                        page.body.len(),
                        page.has_more
                    );
                    cursor.advance(page.has_more, page.token);
                    Some((PageEvent::Page(page.body), Some((fetch, shape, cursor))))
                }
                Err(e) => {
                    error!("Page {} failed, ending iteration: {}", page_no, e);
                    Some((PageEvent::Failed(e), None))
                }
            }
        });

        PageStream::new(Box::pin(inner))
    }
}

/// Lazy stream of pages
///
/// Yields [`PageEvent::Page`] per fetched page and, if a fetch fails, one
/// [`PageEvent::Failed`] before ending. Pages are fetched one at a time and
/// only when polled; dropping the stream stops the iteration. Once ended it
/// keeps returning `None`.
pub struct PageStream<T> {
    inner: Pin<Box<dyn Stream<Item = PageEvent<T>> + Send>>,
    done: bool,
}

impl<T> PageStream<T> {
    fn new(inner: Pin<Box<dyn Stream<Item = PageEvent<T>> + Send>>) -> Self {
        Self { inner, done: false }
    }

    /// Next page, or `None` when the stream has ended
    pub async fn next_page(&mut self) -> Option<Result<PageBody<T>>> {
        StreamExt::next(self).await.map(PageEvent::into_result)
    }

    /// Drain every page, failing on the failure marker
    pub async fn try_collect_pages(mut self) -> Result<Vec<PageBody<T>>> {
        let mut pages = Vec::new();
        while let Some(page) = self.next_page().await {
            pages.push(page?);
        }
        Ok(pages)
    }

    /// Drain every page and concatenate their items
    pub async fn try_collect_items(self) -> Result<Vec<T>> {
        let pages = self.try_collect_pages().await?;
        Ok(pages.into_iter().flat_map(|p| p.items).collect())
    }
}

impl<T> Stream for PageStream<T> {
    type Item = PageEvent<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.done {
            return Poll::Ready(None);
        }
        let next = self.inner.as_mut().poll_next(cx);
        if let Poll::Ready(None) = next {
            self.done = true;
        }
        next
    }
}

impl<T> FusedStream for PageStream<T> {
    fn is_terminated(&self) -> bool {
        self.done
    }
}

impl<T> std::fmt::Debug for PageStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageStream")
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

/// Stream that yields only the failure marker
///
/// Used when a request cannot even be built (bad payload, missing path
/// parameter) so callers see the same terminal event as a failed fetch.
pub(crate) fn failed_stream<T: Send + 'static>(err: Error) -> PageStream<T> {
    PageStream::new(Box::pin(stream::once(async move { PageEvent::Failed(err) })))
}
