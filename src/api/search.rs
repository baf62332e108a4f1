//! Symbol search.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::SymbolData;
use crate::Result;

/// Service for `/symbols/search`.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: tastytrade::TastytradeClient) -> tastytrade::Result<()> {
/// for hit in client.search().search("BRK/B").await? {
///     println!("{}: {:?}", hit.symbol, hit.description);
/// }
/// # Ok(())
/// # }
/// ```
pub struct SearchService {
    inner: Arc<ClientInner>,
}

impl SearchService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Symbols whose name or description starts with `prefix`.
    pub async fn search(&self, prefix: &str) -> Result<Vec<SymbolData>> {
        self.inner.list(&["symbols", "search", prefix]).await
    }
}
