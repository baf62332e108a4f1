//! Paginated stream for lazy iteration over paged endpoints.
//!
//! [`PaginatedStream`] implements `Stream`, fetching one page at a time by
//! page offset. Server-provided links are not used.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::ClientInner;
use crate::models::{Paginated, DEFAULT_PAGE_SIZE};
use crate::Result;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;
type PageFetcher<T> = Box<dyn Fn(i32) -> BoxFuture<Result<Paginated<T>>> + Send + Sync>;

/// A stream that yields items from every page of an endpoint.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use tastytrade::AccountNumber;
/// use tastytrade::api::TransactionsQuery;
///
/// # async fn example(client: tastytrade::TastytradeClient) -> tastytrade::Result<()> {
/// let account = AccountNumber::new("5WV12345");
/// let mut stream = client
///     .transactions()
///     .list_stream(&account, TransactionsQuery::default());
///
/// while let Some(transaction) = stream.next().await {
///     println!("{:?}", transaction?);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    fetch_page: PageFetcher<T>,
    current_items: std::vec::IntoIter<T>,
    next_page_offset: Option<i32>,
    pending_fetch: Option<BoxFuture<Result<Paginated<T>>>>,
}

impl<T> PaginatedStream<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Build a stream from a page fetcher, starting at offset 0.
    pub(crate) fn new<F>(fetch_page: F) -> Self
    where
        F: Fn(i32) -> BoxFuture<Result<Paginated<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            current_items: Vec::new().into_iter(),
            next_page_offset: Some(0),
            pending_fetch: None,
        }
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.next() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(fut) = this.pending_fetch.as_mut() {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending_fetch = None;
                        this.next_page_offset =
                            page.pagination.as_ref().and_then(|p| p.next_page());

                        if page.items.is_empty() {
                            return Poll::Ready(None);
                        }
                        this.current_items = page.items.into_iter();
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_page_offset = None;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            match this.next_page_offset.take() {
                Some(offset) => this.pending_fetch = Some((this.fetch_page)(offset)),
                None => return Poll::Ready(None),
            }
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

/// Builds a [`PaginatedStream`] over one endpoint with fixed filters.
pub(crate) struct PaginatedStreamBuilder {
    inner: Arc<ClientInner>,
    segments: Vec<String>,
    per_page: i32,
}

impl PaginatedStreamBuilder {
    pub(crate) fn new(inner: Arc<ClientInner>, segments: &[&str]) -> Self {
        Self {
            inner,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            per_page: DEFAULT_PAGE_SIZE,
        }
    }

    pub(crate) fn per_page(mut self, per_page: Option<i32>) -> Self {
        if let Some(per_page) = per_page {
            self.per_page = per_page;
        }
        self
    }

    /// Build the stream; `query` is sent with every page request.
    pub(crate) fn build<T, Q>(self, query: Q) -> PaginatedStream<T>
    where
        T: DeserializeOwned + Send + 'static,
        Q: Serialize + Clone + Send + Sync + 'static,
    {
        let Self {
            inner,
            segments,
            per_page,
        } = self;
        let segments: Arc<[String]> = segments.into();

        PaginatedStream::new(move |page_offset: i32| {
            let inner = inner.clone();
            let segments = segments.clone();
            let query = query.clone();

            Box::pin(async move {
                #[derive(Serialize)]
                #[serde(rename_all = "kebab-case")]
                struct PageQuery<Q> {
                    #[serde(flatten)]
                    filters: Q,
                    per_page: i32,
                    page_offset: i32,
                }

                let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
                let page_query = PageQuery {
                    filters: query,
                    per_page,
                    page_offset,
                };

                inner.paginated(&segments, &page_query).await
            })
        })
    }
}
