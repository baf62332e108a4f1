//! Market metrics and historic corporate events.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::Lendability;
use super::numeric::StringF32;

/// Volatility, liquidity, and fundamentals of one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MarketMetric {
    /// Symbol
    pub symbol: String,
    /// IV index
    #[serde(default)]
    pub implied_volatility_index: Option<StringF32>,
    /// IV index change over five days
    #[serde(rename = "implied-volatility-index-5-day-change", default)]
    pub implied_volatility_index_5_day_change: Option<StringF32>,
    /// IV rank
    #[serde(default)]
    pub implied_volatility_index_rank: Option<StringF32>,
    /// IV rank from the tos model
    #[serde(default)]
    pub tos_implied_volatility_index_rank: Option<StringF32>,
    /// IV rank from the tw model
    #[serde(default)]
    pub tw_implied_volatility_index_rank: Option<StringF32>,
    /// When the tos IV rank was computed
    #[serde(default)]
    pub tos_implied_volatility_index_rank_updated_at: Option<DateTime<Utc>>,
    /// Source of `implied_volatility_index_rank`
    #[serde(default)]
    pub implied_volatility_index_rank_source: Option<String>,
    /// IV percentile
    #[serde(default)]
    pub implied_volatility_percentile: Option<StringF32>,
    /// When IV was computed
    #[serde(default)]
    pub implied_volatility_updated_at: Option<DateTime<Utc>>,
    /// Liquidity value
    #[serde(default)]
    pub liquidity_value: Option<StringF32>,
    /// Liquidity rank
    #[serde(default)]
    pub liquidity_rank: Option<StringF32>,
    /// Liquidity rating, 0 to 5
    #[serde(default)]
    pub liquidity_rating: Option<i32>,
    /// IV per expiration
    #[serde(default)]
    pub option_expiration_implied_volatilities: Vec<ExpirationImpliedVolatility>,
    /// Beta
    #[serde(default)]
    pub beta: Option<StringF32>,
    /// Three-month correlation with SPY
    #[serde(rename = "corr-spy-3month", default)]
    pub corr_spy_3_month: Option<StringF32>,
    /// Market capitalization
    #[serde(default)]
    pub market_cap: Option<Decimal>,
    /// Price to earnings
    #[serde(default)]
    pub price_earnings_ratio: Option<StringF32>,
    /// Earnings per share
    #[serde(default)]
    pub earnings_per_share: Option<StringF32>,
    /// Dividend per share
    #[serde(default)]
    pub dividend_rate_per_share: Option<StringF32>,
    /// Dividend yield
    #[serde(default)]
    pub dividend_yield: Option<StringF32>,
    /// Last ex-dividend date
    #[serde(default)]
    pub dividend_ex_date: Option<NaiveDate>,
    /// Next dividend date
    #[serde(default)]
    pub dividend_next_date: Option<NaiveDate>,
    /// Last dividend pay date
    #[serde(default)]
    pub dividend_pay_date: Option<NaiveDate>,
    /// Next earnings report
    #[serde(default)]
    pub earnings: Option<EarningsInfo>,
    /// Listing market
    #[serde(default)]
    pub listed_market: Option<String>,
    /// Borrow status
    #[serde(default)]
    pub lendability: Option<Lendability>,
    /// Annual borrow rate
    #[serde(default)]
    pub borrow_rate: Option<StringF32>,
    /// 30-day historical volatility
    #[serde(rename = "historical-volatility-30-day", default)]
    pub historical_volatility_30_day: Option<StringF32>,
    /// 60-day historical volatility
    #[serde(rename = "historical-volatility-60-day", default)]
    pub historical_volatility_60_day: Option<StringF32>,
    /// 90-day historical volatility
    #[serde(rename = "historical-volatility-90-day", default)]
    pub historical_volatility_90_day: Option<StringF32>,
    /// IV minus 30-day HV
    #[serde(rename = "iv-hv-30-day-difference", default)]
    pub iv_hv_30_day_difference: Option<StringF32>,
    /// Last update
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MarketMetric {
    /// Returns `true` when IV rank is above one half.
    ///
    /// The API reports rank as a fraction between 0 and 1.
    pub fn is_high_iv_rank(&self) -> bool {
        self.implied_volatility_index_rank
            .is_some_and(|rank| rank.value() > 0.5)
    }

    /// Returns `true` when IV is above 30-day historical volatility.
    pub fn is_iv_elevated(&self) -> bool {
        self.iv_hv_30_day_difference
            .is_some_and(|diff| diff.value() > 0.0)
    }
}

/// Implied volatility of one expiration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExpirationImpliedVolatility {
    /// Expiration date
    pub expiration_date: NaiveDate,
    /// AM or PM settlement
    #[serde(default)]
    pub settlement_type: Option<String>,
    /// Standard or non-standard chain
    #[serde(default)]
    pub option_chain_type: Option<String>,
    /// Implied volatility
    #[serde(default)]
    pub implied_volatility: Option<StringF32>,
}

/// Upcoming earnings report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EarningsInfo {
    /// Shown to customers
    #[serde(default)]
    pub visible: bool,
    /// Expected report date
    #[serde(default)]
    pub expected_report_date: Option<NaiveDate>,
    /// Date is estimated
    #[serde(default)]
    pub estimated: bool,
    /// Late report flag
    #[serde(default)]
    pub late_flag: Option<i32>,
    /// Fiscal quarter end
    #[serde(default)]
    pub quarter_end_date: Option<NaiveDate>,
    /// Actual EPS
    #[serde(default)]
    pub actual_eps: Option<StringF32>,
    /// Consensus EPS estimate
    #[serde(default)]
    pub consensus_estimate: Option<StringF32>,
    /// Last update
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A past dividend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Dividend {
    /// Ex-date
    pub occurred_date: NaiveDate,
    /// Amount per share
    pub amount: Decimal,
}

/// A past earnings report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EarningsReport {
    /// Report date
    pub occurred_date: NaiveDate,
    /// Earnings per share
    #[serde(default)]
    pub eps: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_metric() {
        let json = r#"{
            "symbol": "AAPL",
            "implied-volatility-index": "0.2431",
            "implied-volatility-index-5-day-change": "-0.012",
            "implied-volatility-index-rank": "0.62",
            "implied-volatility-percentile": "NaN",
            "liquidity-rating": 4,
            "beta": "1.21",
            "corr-spy-3month": "0.78",
            "market-cap": "2850000000000",
            "lendability": "Easy To Borrow",
            "historical-volatility-30-day": "0.21",
            "iv-hv-30-day-difference": "0.0331",
            "option-expiration-implied-volatilities": [
                {"expiration-date": "2024-03-15", "settlement-type": "PM", "implied-volatility": "0.25"}
            ],
            "earnings": {"visible": true, "expected-report-date": "2024-05-02", "estimated": true}
        }"#;

        let metric: MarketMetric = serde_json::from_str(json).unwrap();
        assert!(metric.is_high_iv_rank());
        assert!(metric.is_iv_elevated());
        assert_eq!(metric.implied_volatility_percentile.unwrap().value(), 0.0);
        assert_eq!(metric.corr_spy_3_month.unwrap().value(), 0.78);
        assert_eq!(metric.market_cap, Some(dec!(2850000000000)));
        assert_eq!(metric.option_expiration_implied_volatilities.len(), 1);
        assert_eq!(
            metric.earnings.unwrap().expected_report_date,
            NaiveDate::from_ymd_opt(2024, 5, 2)
        );
    }

    #[test]
    fn test_corporate_events() {
        let dividend: Dividend =
            serde_json::from_str(r#"{"occurred-date": "2024-02-09", "amount": "0.24"}"#).unwrap();
        assert_eq!(dividend.amount, dec!(0.24));

        let report: EarningsReport =
            serde_json::from_str(r#"{"occurred-date": "2024-02-01", "eps": "2.18"}"#).unwrap();
        assert_eq!(report.eps, Some(dec!(2.18)));
    }
}
