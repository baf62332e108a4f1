//! Quote streamer credentials.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::QuoteStreamerToken;
use crate::Result;

/// Service for `/api-quote-tokens`.
pub struct QuoteTokensService {
    inner: Arc<ClientInner>,
}

impl QuoteTokensService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// A token for the market data streamer. Tokens expire after a day.
    pub async fn get(&self) -> Result<QuoteStreamerToken> {
        self.inner.get(&["api-quote-tokens"]).await
    }
}
