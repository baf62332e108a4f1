//! Market metrics service.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::client::query::layout;
use crate::client::ClientInner;
use crate::models::{Dividend, EarningsReport, MarketMetric};
use crate::Result;

/// Service for market metrics operations.
///
/// Market metrics provide implied volatility rank/percentile, earnings dates,
/// dividend information, and other analytical data for underlyings.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: tastytrade::TastytradeClient) -> tastytrade::Result<()> {
/// let metrics = client.metrics().get(&["AAPL", "SPY"]).await?;
/// for m in metrics {
///     println!("{}: IV Rank = {:?}", m.symbol, m.implied_volatility_index_rank);
/// }
/// # Ok(())
/// # }
/// ```
pub struct MetricsService {
    inner: Arc<ClientInner>,
}

#[derive(Serialize)]
struct SymbolsQuery {
    symbols: String,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct EarningsQuery {
    #[serde(serialize_with = "layout::date", skip_serializing_if = "Option::is_none")]
    start_date: Option<NaiveDate>,
}

impl MetricsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get market metrics for symbols.
    pub async fn get(&self, symbols: &[&str]) -> Result<Vec<MarketMetric>> {
        let query = SymbolsQuery {
            symbols: symbols.join(","),
        };
        self.inner
            .list_with_query(&["market-metrics"], &query)
            .await
    }

    /// Past dividends of `symbol`.
    pub async fn dividends(&self, symbol: &str) -> Result<Vec<Dividend>> {
        self.inner
            .list(&[
                "market-metrics",
                "historic-corporate-events",
                "dividends",
                symbol,
            ])
            .await
    }

    /// Past earnings reports of `symbol`, optionally from `start_date` on.
    pub async fn earnings_reports(
        &self,
        symbol: &str,
        start_date: Option<NaiveDate>,
    ) -> Result<Vec<EarningsReport>> {
        self.inner
            .list_with_query(
                &[
                    "market-metrics",
                    "historic-corporate-events",
                    "earnings-reports",
                    symbol,
                ],
                &EarningsQuery { start_date },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::query::to_pairs;

    #[test]
    fn test_symbols_are_comma_joined() {
        let query = SymbolsQuery {
            symbols: ["AAPL", "SPY", "/ES"].join(","),
        };
        assert_eq!(
            to_pairs(&query).unwrap(),
            vec![("symbols".to_string(), "AAPL,SPY,/ES".to_string())]
        );
    }
}
