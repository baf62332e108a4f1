//! Margin requirements.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{
    AccountNumber, MarginRequirements, MarginRequirementsPublicConfiguration, NewOrder,
};
use crate::Result;

/// Service for `/margin`.
pub struct MarginService {
    inner: Arc<ClientInner>,
}

impl MarginService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Current margin report of an account, grouped by underlying.
    pub async fn requirements(&self, account_number: &AccountNumber) -> Result<MarginRequirements> {
        self.inner
            .get(&["margin", "accounts", account_number.as_str(), "requirements"])
            .await
    }

    /// Margin report as it would be after `order` fills.
    pub async fn dry_run(
        &self,
        account_number: &AccountNumber,
        order: &NewOrder,
    ) -> Result<MarginRequirements> {
        self.inner
            .post(&["margin", "accounts", account_number.as_str(), "dry-run"], order)
            .await
    }

    /// Parameters shared by all accounts.
    pub async fn public_configuration(&self) -> Result<MarginRequirementsPublicConfiguration> {
        self.inner
            .get(&["margin-requirements-public-configuration"])
            .await
    }
}
