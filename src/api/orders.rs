//! Orders service: placement, previews, edits, and history.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::client::query::layout;
use crate::client::{ClientInner, PaginatedStream, PaginatedStreamBuilder};
use crate::models::{
    AccountNumber, ComplexOrder, ComplexOrderResponse, InstrumentType, NewComplexOrder, NewOrder,
    Order, OrderEdit, OrderId, OrderResponse, OrderStatus, Paginated, SortOrder,
};
use crate::Result;

/// Service for the `/accounts/{account}/orders` and
/// `/accounts/{account}/complex-orders` endpoints.
///
/// # Example
///
/// ```no_run
/// use tastytrade::AccountNumber;
/// use tastytrade::models::{NewOrderBuilder, OrderLeg, OrderType, PriceEffect, TimeInForce};
/// use rust_decimal_macros::dec;
///
/// # async fn example(client: tastytrade::TastytradeClient) -> tastytrade::Result<()> {
/// let account = AccountNumber::new("5WV12345");
///
/// let order = NewOrderBuilder::new()
///     .time_in_force(TimeInForce::Day)
///     .order_type(OrderType::Limit)
///     .price(dec!(150.00))
///     .price_effect(PriceEffect::Debit)
///     .add_leg(OrderLeg::buy_equity("AAPL", dec!(10)))
///     .build()?;
///
/// let preview = client.orders().dry_run(&account, &order).await?;
/// println!("fees: {:?}", preview.fee_calculation);
///
/// let placed = client.orders().place(&account, &order).await?;
/// println!("order id: {:?}", placed.order.id);
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

/// Filters for order history.
///
/// `per_page` and `page_offset` select one page for
/// [`OrdersService::list`]; [`OrdersService::list_stream`] manages the
/// offset itself and only uses `per_page` as its batch size.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrdersQuery {
    /// Only these statuses
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<OrderStatus>,
    /// Underlying symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlying_symbol: Option<String>,
    /// Underlying instrument type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlying_instrument_type: Option<InstrumentType>,
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

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// One page of order history.
    pub async fn list(
        &self,
        account_number: &AccountNumber,
        query: &OrdersQuery,
    ) -> Result<Paginated<Order>> {
        self.inner
            .paginated(&["accounts", account_number.as_str(), "orders"], query)
            .await
    }

    /// Every order matching `query`, fetched page by page as the stream is
    /// polled.
    ///
    /// ```no_run
    /// use futures_util::StreamExt;
    /// use tastytrade::AccountNumber;
    /// use tastytrade::api::OrdersQuery;
    ///
    /// # async fn example(client: tastytrade::TastytradeClient) -> tastytrade::Result<()> {
    /// let account = AccountNumber::new("5WV12345");
    /// let mut stream = client.orders().list_stream(&account, OrdersQuery::default());
    ///
    /// while let Some(order) = stream.next().await {
    ///     let order = order?;
    ///     println!("{:?}: {:?}", order.id, order.status);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_stream(
        &self,
        account_number: &AccountNumber,
        mut query: OrdersQuery,
    ) -> PaginatedStream<Order> {
        let per_page = query.per_page.take();
        query.page_offset = None;

        PaginatedStreamBuilder::new(
            self.inner.clone(),
            &["accounts", account_number.as_str(), "orders"],
        )
        .per_page(per_page)
        .build(query)
    }

    /// Working orders.
    pub async fn live(&self, account_number: &AccountNumber) -> Result<Vec<Order>> {
        self.inner
            .list(&["accounts", account_number.as_str(), "orders", "live"])
            .await
    }

    /// One order.
    pub async fn get(&self, account_number: &AccountNumber, order_id: &OrderId) -> Result<Order> {
        self.inner
            .get(&["accounts", account_number.as_str(), "orders", order_id.as_str()])
            .await
    }

    /// Preview fees and buying power effect without submitting.
    pub async fn dry_run(
        &self,
        account_number: &AccountNumber,
        order: &NewOrder,
    ) -> Result<OrderResponse> {
        self.inner
            .post(
                &["accounts", account_number.as_str(), "orders", "dry-run"],
                order,
            )
            .await
    }

    /// Submit an order.
    pub async fn place(
        &self,
        account_number: &AccountNumber,
        order: &NewOrder,
    ) -> Result<OrderResponse> {
        self.inner
            .post(&["accounts", account_number.as_str(), "orders"], order)
            .await
    }

    /// Request cancellation. The returned order usually shows
    /// `Cancel Requested`.
    pub async fn cancel(
        &self,
        account_number: &AccountNumber,
        order_id: &OrderId,
    ) -> Result<Order> {
        self.inner
            .delete(&["accounts", account_number.as_str(), "orders", order_id.as_str()])
            .await
    }

    /// Replace a working order with a new one.
    pub async fn replace(
        &self,
        account_number: &AccountNumber,
        order_id: &OrderId,
        order: &NewOrder,
    ) -> Result<Order> {
        self.inner
            .put(
                &["accounts", account_number.as_str(), "orders", order_id.as_str()],
                order,
            )
            .await
    }

    /// Preview a replacement.
    pub async fn replace_dry_run(
        &self,
        account_number: &AccountNumber,
        order_id: &OrderId,
        order: &NewOrder,
    ) -> Result<OrderResponse> {
        self.inner
            .post(
                &[
                    "accounts",
                    account_number.as_str(),
                    "orders",
                    order_id.as_str(),
                    "dry-run",
                ],
                order,
            )
            .await
    }

    /// Change price or execution properties of a working order in place.
    pub async fn edit(
        &self,
        account_number: &AccountNumber,
        order_id: &OrderId,
        edit: &OrderEdit,
    ) -> Result<Order> {
        self.inner
            .patch(
                &["accounts", account_number.as_str(), "orders", order_id.as_str()],
                edit,
            )
            .await
    }

    /// Preview a complex order.
    pub async fn dry_run_complex(
        &self,
        account_number: &AccountNumber,
        order: &NewComplexOrder,
    ) -> Result<ComplexOrderResponse> {
        self.inner
            .post(
                &["accounts", account_number.as_str(), "complex-orders", "dry-run"],
                order,
            )
            .await
    }

    /// Submit a complex order.
    pub async fn place_complex(
        &self,
        account_number: &AccountNumber,
        order: &NewComplexOrder,
    ) -> Result<ComplexOrderResponse> {
        self.inner
            .post(&["accounts", account_number.as_str(), "complex-orders"], order)
            .await
    }

    /// One complex order.
    pub async fn get_complex(
        &self,
        account_number: &AccountNumber,
        order_id: &OrderId,
    ) -> Result<ComplexOrder> {
        self.inner
            .get(&[
                "accounts",
                account_number.as_str(),
                "complex-orders",
                order_id.as_str(),
            ])
            .await
    }

    /// Cancel every order of a complex order.
    pub async fn cancel_complex(
        &self,
        account_number: &AccountNumber,
        order_id: &OrderId,
    ) -> Result<ComplexOrder> {
        self.inner
            .delete(&[
                "accounts",
                account_number.as_str(),
                "complex-orders",
                order_id.as_str(),
            ])
            .await
    }

    /// Working complex orders.
    pub async fn live_complex(&self, account_number: &AccountNumber) -> Result<Vec<ComplexOrder>> {
        self.inner
            .list(&["accounts", account_number.as_str(), "complex-orders", "live"])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::query::to_pairs;
    use chrono::TimeZone;

    #[test]
    fn test_orders_query_encoding() {
        let query = OrdersQuery {
            status: vec![OrderStatus::Live, OrderStatus::Filled],
            underlying_symbol: Some("AAPL".into()),
            sort: Some(SortOrder::Desc),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 2),
            start_at: Some(Utc.with_ymd_and_hms(2024, 1, 2, 14, 30, 0).unwrap()),
            per_page: Some(50),
            ..Default::default()
        };

        let pairs = to_pairs(&query).unwrap();
        let pairs: Vec<(&str, &str)> = pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(
            pairs,
            [
                ("status[]", "Live"),
                ("status[]", "Filled"),
                ("underlying-symbol", "AAPL"),
                ("sort", "Desc"),
                ("start-date", "2024-01-02"),
                ("start-at", "2024-01-02T14:30:00Z"),
                ("per-page", "50"),
            ]
        );
    }

    #[test]
    fn test_empty_query_has_no_pairs() {
        assert!(to_pairs(&OrdersQuery::default()).unwrap().is_empty());
    }
}
