//! Transaction history and daily fees.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::client::query::layout;
use crate::client::{ClientInner, PaginatedStream, PaginatedStreamBuilder};
use crate::models::{
    AccountNumber, InstrumentType, Paginated, SortOrder, TotalFees, Transaction, TransactionType,
};
use crate::Result;

/// Service for `/accounts/{account}/transactions`.
///
/// # Example
///
/// ```no_run
/// use tastytrade::AccountNumber;
/// use tastytrade::api::TransactionsQuery;
///
/// # async fn example(client: tastytrade::TastytradeClient) -> tastytrade::Result<()> {
/// let account = AccountNumber::new("5WV12345");
///
/// let page = client
///     .transactions()
///     .list(&account, &TransactionsQuery::default())
///     .await?;
/// for txn in &page.items {
///     println!("{:?}: {:?} {}", txn.transaction_type, txn.symbol, txn.net_amount());
/// }
/// # Ok(())
/// # }
/// ```
pub struct TransactionsService {
    inner: Arc<ClientInner>,
}

/// Filters for transaction history.
///
/// `per_page` and `page_offset` select one page for
/// [`TransactionsService::list`]; the stream ignores `page_offset`.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TransactionsQuery {
    /// Only this category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<TransactionType>,
    /// Only these categories
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TransactionType>,
    /// Only these sub-categories
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_type: Vec<String>,
    /// Symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Underlying symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlying_symbol: Option<String>,
    /// Instrument type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument_type: Option<InstrumentType>,
    /// Action (e.g. `Buy to Open`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Partition key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_key: Option<String>,
    /// Futures symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub futures_symbol: Option<String>,
    /// Sort direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
    /// Earliest day
    #[serde(
        serialize_with = "layout::date",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<NaiveDate>,
    /// Latest day
    #[serde(
        serialize_with = "layout::date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
    /// Earliest time
    #[serde(
        serialize_with = "layout::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_at: Option<DateTime<Utc>>,
    /// Latest time
    #[serde(
        serialize_with = "layout::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_at: Option<DateTime<Utc>>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i32>,
    /// Page number, starting at 0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_offset: Option<i32>,
}

#[derive(Serialize)]
struct FeesQuery {
    #[serde(serialize_with = "layout::date", skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
}

impl TransactionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// One page of transactions.
    pub async fn list(
        &self,
        account_number: &AccountNumber,
        query: &TransactionsQuery,
    ) -> Result<Paginated<Transaction>> {
        self.inner
            .paginated(&["accounts", account_number.as_str(), "transactions"], query)
            .await
    }

    /// Every transaction matching `query`, fetched page by page.
    pub fn list_stream(
        &self,
        account_number: &AccountNumber,
        mut query: TransactionsQuery,
    ) -> PaginatedStream<Transaction> {
        let per_page = query.per_page.take();
        query.page_offset = None;

        PaginatedStreamBuilder::new(
            self.inner.clone(),
            &["accounts", account_number.as_str(), "transactions"],
        )
        .per_page(per_page)
        .build(query)
    }

    /// One transaction.
    pub async fn get(&self, account_number: &AccountNumber, id: u64) -> Result<Transaction> {
        let id = id.to_string();
        self.inner
            .get(&["accounts", account_number.as_str(), "transactions", &id])
            .await
    }

    /// Fees charged on `date`, or today when `None`.
    pub async fn total_fees(
        &self,
        account_number: &AccountNumber,
        date: Option<NaiveDate>,
    ) -> Result<TotalFees> {
        self.inner
            .get_with_query(
                &["accounts", account_number.as_str(), "transactions", "total-fees"],
                &FeesQuery { date },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::query::to_pairs;

    #[test]
    fn test_transactions_query_encoding() {
        let query = TransactionsQuery {
            types: vec![TransactionType::Trade, TransactionType::ReceiveDeliver],
            symbol: Some("BRK/B".into()),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31),
            ..Default::default()
        };
        let pairs = to_pairs(&query).unwrap();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            ["types[]", "types[]", "symbol", "start-date", "end-date"]
        );
        assert_eq!(pairs[1].1, "Receive Deliver");
        assert_eq!(pairs[2].1, "BRK/B");
    }

    #[test]
    fn test_type_field_name() {
        let query = TransactionsQuery {
            r#type: Some(TransactionType::Dividend),
            ..Default::default()
        };
        assert_eq!(
            to_pairs(&query).unwrap(),
            vec![("type".to_string(), "Dividend".to_string())]
        );
    }
}
