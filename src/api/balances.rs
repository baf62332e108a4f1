//! Balances, positions, and balance history.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::client::query::layout;
use crate::client::ClientInner;
use crate::models::{
    AccountBalance, AccountNumber, InstrumentType, NetLiqOhlc, Position, SnapshotTimeOfDay,
    TimeBack,
};
use crate::Result;

/// Service for balance and position endpoints of an account.
///
/// # Example
///
/// ```no_run
/// use tastytrade::AccountNumber;
/// use tastytrade::api::PositionsQuery;
///
/// # async fn example(client: tastytrade::TastytradeClient) -> tastytrade::Result<()> {
/// let account = AccountNumber::new("5WV12345");
///
/// let balance = client.balances().get(&account).await?;
/// println!("net liq: {:?}", balance.net_liquidating_value);
///
/// for position in client.balances().positions(&account, &PositionsQuery::default()).await? {
///     println!("{}: {} {:?}", position.symbol, position.quantity, position.quantity_direction);
/// }
/// # Ok(())
/// # }
/// ```
pub struct BalancesService {
    inner: Arc<ClientInner>,
}

/// Filters for open positions.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PositionsQuery {
    /// Only these underlyings
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub underlying_symbol: Vec<String>,
    /// Only this symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Only this instrument type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument_type: Option<InstrumentType>,
    /// Include positions closed today
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_closed_positions: Option<bool>,
    /// Underlying product code for futures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlying_product_code: Option<String>,
    /// Partition keys
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub partition_keys: Vec<String>,
    /// Net out positions across partitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_positions: Option<bool>,
    /// Include marks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_marks: Option<bool>,
}

/// Selects balance snapshots.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SnapshotsQuery {
    /// One day
    #[serde(
        serialize_with = "layout::date",
        skip_serializing_if = "Option::is_none"
    )]
    pub snapshot_date: Option<NaiveDate>,
    /// Start or end of the day
    pub time_of_day: SnapshotTimeOfDay,
    /// Range start
    #[serde(
        serialize_with = "layout::date",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<NaiveDate>,
    /// Range end
    #[serde(
        serialize_with = "layout::date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
}

impl Default for SnapshotsQuery {
    fn default() -> Self {
        Self {
            snapshot_date: None,
            time_of_day: SnapshotTimeOfDay::EndOfDay,
            start_date: None,
            end_date: None,
        }
    }
}

/// Selects the window of net liquidating value history.
///
/// Give either `time_back` or `start_time`.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NetLiqHistoryQuery {
    /// Window ending now
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_back: Option<TimeBack>,
    /// Window start
    #[serde(
        serialize_with = "layout::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<DateTime<Utc>>,
}

impl BalancesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Current balances.
    pub async fn get(&self, account_number: &AccountNumber) -> Result<AccountBalance> {
        self.inner
            .get(&["accounts", account_number.as_str(), "balances"])
            .await
    }

    /// Open positions.
    pub async fn positions(
        &self,
        account_number: &AccountNumber,
        query: &PositionsQuery,
    ) -> Result<Vec<Position>> {
        self.inner
            .list_with_query(&["accounts", account_number.as_str(), "positions"], query)
            .await
    }

    /// Balance snapshots.
    pub async fn snapshots(
        &self,
        account_number: &AccountNumber,
        query: &SnapshotsQuery,
    ) -> Result<Vec<AccountBalance>> {
        self.inner
            .list_with_query(
                &["accounts", account_number.as_str(), "balance-snapshots"],
                query,
            )
            .await
    }

    /// Net liquidating value history in OHLC buckets.
    pub async fn net_liq_history(
        &self,
        account_number: &AccountNumber,
        query: &NetLiqHistoryQuery,
    ) -> Result<Vec<NetLiqOhlc>> {
        self.inner
            .list_with_query(
                &["accounts", account_number.as_str(), "net-liq", "history"],
                query,
            )
            .await
    }
}
