//! Instrument definitions and option chains.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::client::query::layout;
use crate::client::ClientInner;
use crate::models::{
    CompactOptionChain, Cryptocurrency, Equity, EquityOption, Future, FutureOption,
    FutureOptionProduct, FutureProduct, Lendability, NestedFutureOptionChain, NestedOptionChain,
    OptionType, Paginated, QuantityDecimalPrecision, Warrant,
};
use crate::Result;

/// Service for `/instruments`, `/option-chains`, and `/futures-option-chains`.
///
/// # Example
///
/// ```no_run
/// use tastytrade::api::EquitiesQuery;
///
/// # async fn example(client: tastytrade::TastytradeClient) -> tastytrade::Result<()> {
/// let query = EquitiesQuery {
///     symbol: vec!["AAPL".into(), "TSLA".into()],
///     ..Default::default()
/// };
/// let equities = client.instruments().equities(&query).await?;
///
/// for chain in client.instruments().nested_option_chain("AAPL").await? {
///     println!("{}: {} expirations", chain.underlying_symbol, chain.expirations.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct InstrumentsService {
    inner: Arc<ClientInner>,
}

/// Filters for equities.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct EquitiesQuery {
    /// Symbols
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub symbol: Vec<String>,
    /// Borrow status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lendability: Option<Lendability>,
    /// Only indices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_index: Option<bool>,
    /// Only ETFs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_etf: Option<bool>,
}

/// Page selection for active equities.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ActiveEquitiesQuery {
    /// Borrow status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lendability: Option<Lendability>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i32>,
    /// Page number, starting at 0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_offset: Option<i32>,
}

/// Filters for equity options.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct EquityOptionsQuery {
    /// OCC symbols
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub symbol: Vec<String>,
    /// Only options that still trade
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Include expired options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_expired: Option<bool>,
}

/// Filters for futures.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FuturesQuery {
    /// Symbols (e.g. `/ESZ4`)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub symbol: Vec<String>,
    /// Product codes (e.g. `ES`)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub product_code: Vec<String>,
}

/// Filters for futures options.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FutureOptionsQuery {
    /// Symbols
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub symbol: Vec<String>,
    /// Option root (e.g. `EW4`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_root_symbol: Option<String>,
    /// Expiration day
    #[serde(
        serialize_with = "layout::date",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration_date: Option<NaiveDate>,
    /// Call or put
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_type: Option<OptionType>,
    /// Strike
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_price: Option<Decimal>,
}

#[derive(Serialize)]
struct SymbolsQuery<'a> {
    symbol: &'a [&'a str],
}

impl InstrumentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Cryptocurrencies, all of them when `symbols` is empty.
    pub async fn cryptocurrencies(&self, symbols: &[&str]) -> Result<Vec<Cryptocurrency>> {
        self.inner
            .list_with_query(
                &["instruments", "cryptocurrencies"],
                &SymbolsQuery { symbol: symbols },
            )
            .await
    }

    /// One cryptocurrency (e.g. `BTC/USD`).
    pub async fn cryptocurrency(&self, symbol: &str) -> Result<Cryptocurrency> {
        self.inner
            .get(&["instruments", "cryptocurrencies", symbol])
            .await
    }

    /// One page of equities that currently trade.
    pub async fn active_equities(
        &self,
        query: &ActiveEquitiesQuery,
    ) -> Result<Paginated<Equity>> {
        self.inner
            .paginated(&["instruments", "equities", "active"], query)
            .await
    }

    /// Equities matching `query`.
    pub async fn equities(&self, query: &EquitiesQuery) -> Result<Vec<Equity>> {
        self.inner
            .list_with_query(&["instruments", "equities"], query)
            .await
    }

    /// One equity.
    pub async fn equity(&self, symbol: &str) -> Result<Equity> {
        self.inner.get(&["instruments", "equities", symbol]).await
    }

    /// Equity options matching `query`.
    pub async fn equity_options(&self, query: &EquityOptionsQuery) -> Result<Vec<EquityOption>> {
        self.inner
            .list_with_query(&["instruments", "equity-options"], query)
            .await
    }

    /// One equity option by OCC symbol.
    pub async fn equity_option(&self, symbol: &str) -> Result<EquityOption> {
        self.inner
            .get(&["instruments", "equity-options", symbol])
            .await
    }

    /// Futures matching `query`.
    pub async fn futures(&self, query: &FuturesQuery) -> Result<Vec<Future>> {
        self.inner
            .list_with_query(&["instruments", "futures"], query)
            .await
    }

    /// One future. The leading `/` of the symbol is kept.
    pub async fn future(&self, symbol: &str) -> Result<Future> {
        self.inner.get(&["instruments", "futures", symbol]).await
    }

    /// Every futures option product.
    pub async fn future_option_products(&self) -> Result<Vec<FutureOptionProduct>> {
        self.inner
            .list(&["instruments", "future-option-products"])
            .await
    }

    /// One futures option product.
    pub async fn future_option_product(
        &self,
        exchange: &str,
        root_symbol: &str,
    ) -> Result<FutureOptionProduct> {
        self.inner
            .get(&["instruments", "future-option-products", exchange, root_symbol])
            .await
    }

    /// Futures options matching `query`.
    pub async fn future_options(&self, query: &FutureOptionsQuery) -> Result<Vec<FutureOption>> {
        self.inner
            .list_with_query(&["instruments", "future-options"], query)
            .await
    }

    /// One futures option.
    pub async fn future_option(&self, symbol: &str) -> Result<FutureOption> {
        self.inner
            .get(&["instruments", "future-options", symbol])
            .await
    }

    /// Every futures product.
    pub async fn future_products(&self) -> Result<Vec<FutureProduct>> {
        self.inner.list(&["instruments", "future-products"]).await
    }

    /// One futures product.
    pub async fn future_product(&self, exchange: &str, code: &str) -> Result<FutureProduct> {
        self.inner
            .get(&["instruments", "future-products", exchange, code])
            .await
    }

    /// Quantity precision per instrument type and symbol.
    pub async fn quantity_decimal_precisions(&self) -> Result<Vec<QuantityDecimalPrecision>> {
        self.inner
            .list(&["instruments", "quantity-decimal-precisions"])
            .await
    }

    /// Warrants, all of them when `symbols` is empty.
    pub async fn warrants(&self, symbols: &[&str]) -> Result<Vec<Warrant>> {
        self.inner
            .list_with_query(&["instruments", "warrants"], &SymbolsQuery { symbol: symbols })
            .await
    }

    /// One warrant.
    pub async fn warrant(&self, symbol: &str) -> Result<Warrant> {
        self.inner.get(&["instruments", "warrants", symbol]).await
    }

    /// Every option on `underlying`, one entry per contract.
    pub async fn option_chain(&self, underlying: &str) -> Result<Vec<EquityOption>> {
        self.inner.list(&["option-chains", underlying]).await
    }

    /// Options on `underlying` grouped by expiration and strike.
    pub async fn nested_option_chain(&self, underlying: &str) -> Result<Vec<NestedOptionChain>> {
        self.inner
            .list(&["option-chains", underlying, "nested"])
            .await
    }

    /// Options on `underlying` as symbol lists.
    pub async fn compact_option_chain(
        &self,
        underlying: &str,
    ) -> Result<Vec<CompactOptionChain>> {
        self.inner
            .list(&["option-chains", underlying, "compact"])
            .await
    }

    /// Every futures option on `product_code` (e.g. `ES`).
    pub async fn futures_option_chain(&self, product_code: &str) -> Result<Vec<FutureOption>> {
        self.inner
            .list(&["futures-option-chains", product_code])
            .await
    }

    /// Futures options on `product_code` grouped by future and expiration.
    pub async fn nested_futures_option_chain(
        &self,
        product_code: &str,
    ) -> Result<NestedFutureOptionChain> {
        self.inner
            .get(&["futures-option-chains", product_code, "nested"])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::query::to_pairs;
    use rust_decimal_macros::dec;

    #[test]
    fn test_equities_query() {
        let query = EquitiesQuery {
            symbol: vec!["AAPL".into(), "BRK/B".into()],
            is_etf: Some(false),
            lendability: Some(Lendability::EasyToBorrow),
            ..Default::default()
        };
        assert_eq!(
            to_pairs(&query).unwrap(),
            vec![
                ("symbol[]".to_string(), "AAPL".to_string()),
                ("symbol[]".to_string(), "BRK/B".to_string()),
                ("lendability".to_string(), "Easy To Borrow".to_string()),
                ("is-etf".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_symbol_list_is_omitted() {
        assert!(to_pairs(&SymbolsQuery { symbol: &[] }).unwrap().is_empty());
    }

    #[test]
    fn test_future_options_query() {
        let query = FutureOptionsQuery {
            option_root_symbol: Some("EW4".into()),
            expiration_date: NaiveDate::from_ymd_opt(2019, 9, 27),
            option_type: Some(OptionType::Put),
            strike_price: Some(dec!(2975)),
            ..Default::default()
        };
        let pairs = to_pairs(&query).unwrap();
        assert_eq!(pairs[0], ("option-root-symbol".to_string(), "EW4".to_string()));
        assert_eq!(pairs[1], ("expiration-date".to_string(), "2019-09-27".to_string()));
        assert_eq!(pairs[2], ("option-type".to_string(), "P".to_string()));
        assert_eq!(pairs[3], ("strike-price".to_string(), "2975".to_string()));
    }
}
