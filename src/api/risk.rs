//! Per-account risk parameters.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{AccountNumber, EffectiveMarginRequirement, PositionLimit};
use crate::Result;

/// Service for margin overrides and position limits of an account.
///
/// # Example
///
/// ```no_run
/// use tastytrade::AccountNumber;
///
/// # async fn example(client: tastytrade::TastytradeClient) -> tastytrade::Result<()> {
/// let account = AccountNumber::new("5WV12345");
/// let limit = client.risk().position_limit(&account).await?;
/// println!("equity order size cap: {:?}", limit.equity_order_size);
/// # Ok(())
/// # }
/// ```
pub struct RiskService {
    inner: Arc<ClientInner>,
}

impl RiskService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Margin rates that apply to `underlying` in this account.
    pub async fn effective_margin_requirement(
        &self,
        account_number: &AccountNumber,
        underlying: &str,
    ) -> Result<EffectiveMarginRequirement> {
        self.inner
            .get(&[
                "accounts",
                account_number.as_str(),
                "margin-requirements",
                underlying,
                "effective",
            ])
            .await
    }

    /// Order size and position caps.
    pub async fn position_limit(&self, account_number: &AccountNumber) -> Result<PositionLimit> {
        self.inner
            .get(&["accounts", account_number.as_str(), "position-limit"])
            .await
    }
}
