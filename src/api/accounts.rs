//! Customer and account lookups.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Account, AccountItem, AccountNumber, Customer, TradingStatus};
use crate::Result;

/// Service for `/customers/me` and account status endpoints.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: tastytrade::TastytradeClient) -> tastytrade::Result<()> {
/// let customer = client.accounts().me().await?;
/// println!("hello, {:?}", customer.username);
///
/// for item in client.accounts().list().await? {
///     println!("{} ({:?})", item.account.account_number, item.authority_level);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// The logged-in customer.
    pub async fn me(&self) -> Result<Customer> {
        self.inner.get(&["customers", "me"]).await
    }

    /// Accounts the customer can access.
    pub async fn list(&self) -> Result<Vec<AccountItem>> {
        self.inner.list(&["customers", "me", "accounts"]).await
    }

    /// One account of the customer.
    pub async fn get(&self, account_number: &AccountNumber) -> Result<Account> {
        self.inner
            .get(&["customers", "me", "accounts", account_number.as_str()])
            .await
    }

    /// Trading permissions and restrictions.
    pub async fn trading_status(&self, account_number: &AccountNumber) -> Result<TradingStatus> {
        self.inner
            .get(&["accounts", account_number.as_str(), "trading-status"])
            .await
    }
}
