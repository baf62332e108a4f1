//! User, public, and pairs watchlists.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;

use crate::client::ClientInner;
use crate::models::{PairsWatchlist, Watchlist};
use crate::Result;

/// Service for the watchlist endpoints.
///
/// # Example
///
/// ```no_run
/// use tastytrade::models::{Watchlist, WatchlistEntry};
///
/// # async fn example(client: tastytrade::TastytradeClient) -> tastytrade::Result<()> {
/// let list = Watchlist::new("Tech")
///     .with_entry(WatchlistEntry::equity("AAPL"))
///     .with_entry(WatchlistEntry::equity("MSFT"));
/// client.watchlists().create(&list).await?;
///
/// for public in client.watchlists().public(false).await? {
///     println!("{}: {} symbols", public.name, public.watchlist_entries.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct WatchlistsService {
    inner: Arc<ClientInner>,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct PublicQuery {
    counts_only: bool,
}

impl WatchlistsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// The user's watchlists.
    pub async fn list(&self) -> Result<Vec<Watchlist>> {
        self.inner.list(&["watchlists"]).await
    }

    /// One of the user's watchlists.
    pub async fn get(&self, name: &str) -> Result<Watchlist> {
        self.inner.get(&["watchlists", name]).await
    }

    /// Create a watchlist.
    pub async fn create(&self, watchlist: &Watchlist) -> Result<Watchlist> {
        self.inner.post(&["watchlists"], watchlist).await
    }

    /// Replace the contents of the watchlist called `name`.
    pub async fn update(&self, name: &str, watchlist: &Watchlist) -> Result<Watchlist> {
        self.inner.put(&["watchlists", name], watchlist).await
    }

    /// Delete a watchlist.
    pub async fn delete(&self, name: &str) -> Result<()> {
        let request = self.inner.request(Method::DELETE, &["watchlists", name]);
        self.inner.execute(request).await
    }

    /// Curated watchlists. With `counts_only` the entries are left out.
    pub async fn public(&self, counts_only: bool) -> Result<Vec<Watchlist>> {
        self.inner
            .list_with_query(&["public-watchlists"], &PublicQuery { counts_only })
            .await
    }

    /// One curated watchlist.
    pub async fn public_by_name(&self, name: &str) -> Result<Watchlist> {
        self.inner.get(&["public-watchlists", name]).await
    }

    /// Curated pairs watchlists.
    pub async fn pairs(&self) -> Result<Vec<PairsWatchlist>> {
        self.inner.list(&["pairs-watchlists"]).await
    }

    /// One curated pairs watchlist.
    pub async fn pairs_by_name(&self, name: &str) -> Result<PairsWatchlist> {
        self.inner.get(&["pairs-watchlists", name]).await
    }
}
