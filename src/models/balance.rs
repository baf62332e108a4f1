//! Balances, positions, and balance history.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{InstrumentType, PriceEffect, QuantityDirection};
use super::AccountNumber;

/// Current balances of an account.
///
/// Also the shape of each balance snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AccountBalance {
    /// Account number
    #[serde(default)]
    pub account_number: Option<AccountNumber>,
    /// Cash balance
    #[serde(default)]
    pub cash_balance: Option<Decimal>,
    /// Long stock value
    #[serde(default)]
    pub long_equity_value: Option<Decimal>,
    /// Short stock value
    #[serde(default)]
    pub short_equity_value: Option<Decimal>,
    /// Long option value
    #[serde(default)]
    pub long_derivative_value: Option<Decimal>,
    /// Short option value
    #[serde(default)]
    pub short_derivative_value: Option<Decimal>,
    /// Long futures value
    #[serde(default)]
    pub long_futures_value: Option<Decimal>,
    /// Short futures value
    #[serde(default)]
    pub short_futures_value: Option<Decimal>,
    /// Long futures option value
    #[serde(default)]
    pub long_futures_derivative_value: Option<Decimal>,
    /// Short futures option value
    #[serde(default)]
    pub short_futures_derivative_value: Option<Decimal>,
    /// Long cryptocurrency value
    #[serde(default)]
    pub long_cryptocurrency_value: Option<Decimal>,
    /// Short cryptocurrency value
    #[serde(default)]
    pub short_cryptocurrency_value: Option<Decimal>,
    /// Long marginable value
    #[serde(default)]
    pub long_margineable_value: Option<Decimal>,
    /// Short marginable value
    #[serde(default)]
    pub short_margineable_value: Option<Decimal>,
    /// Margin equity
    #[serde(default)]
    pub margin_equity: Option<Decimal>,
    /// Equity buying power
    #[serde(default)]
    pub equity_buying_power: Option<Decimal>,
    /// Derivative buying power
    #[serde(default)]
    pub derivative_buying_power: Option<Decimal>,
    /// Day trading buying power
    #[serde(default)]
    pub day_trading_buying_power: Option<Decimal>,
    /// Futures margin requirement
    #[serde(default)]
    pub futures_margin_requirement: Option<Decimal>,
    /// Available trading funds
    #[serde(default)]
    pub available_trading_funds: Option<Decimal>,
    /// Maintenance requirement
    #[serde(default)]
    pub maintenance_requirement: Option<Decimal>,
    /// Maintenance call value
    #[serde(default)]
    pub maintenance_call_value: Option<Decimal>,
    /// Reg T call value
    #[serde(default)]
    pub reg_t_call_value: Option<Decimal>,
    /// Day trading call value
    #[serde(default)]
    pub day_trading_call_value: Option<Decimal>,
    /// Day equity call value
    #[serde(default)]
    pub day_equity_call_value: Option<Decimal>,
    /// Net liquidating value
    #[serde(default)]
    pub net_liquidating_value: Option<Decimal>,
    /// Cash available to withdraw
    #[serde(default)]
    pub cash_available_to_withdraw: Option<Decimal>,
    /// Day trade excess
    #[serde(default)]
    pub day_trade_excess: Option<Decimal>,
    /// Pending cash
    #[serde(default)]
    pub pending_cash: Option<Decimal>,
    /// Sign of `pending_cash`
    #[serde(default)]
    pub pending_cash_effect: Option<PriceEffect>,
    /// Long bond value
    #[serde(default)]
    pub long_bond_value: Option<Decimal>,
    /// Short bond value
    #[serde(default)]
    pub short_bond_value: Option<Decimal>,
    /// Cash settle balance
    #[serde(default)]
    pub cash_settle_balance: Option<Decimal>,
    /// Unsettled cryptocurrency fiat amount
    #[serde(default)]
    pub unsettled_cryptocurrency_fiat_amount: Option<Decimal>,
    /// Sign of `unsettled_cryptocurrency_fiat_amount`
    #[serde(default)]
    pub unsettled_cryptocurrency_fiat_effect: Option<PriceEffect>,
    /// Effective cryptocurrency buying power
    #[serde(default)]
    pub effective_cryptocurrency_buying_power: Option<Decimal>,
    /// Snapshot date
    #[serde(default)]
    pub snapshot_date: Option<NaiveDate>,
    /// Time-of-day marker of a snapshot
    #[serde(default)]
    pub time_of_day: Option<String>,
    /// Last update
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One bucket of net liquidating value history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NetLiqOhlc {
    /// Open
    #[serde(default)]
    pub open: Option<Decimal>,
    /// High
    #[serde(default)]
    pub high: Option<Decimal>,
    /// Low
    #[serde(default)]
    pub low: Option<Decimal>,
    /// Close
    #[serde(default)]
    pub close: Option<Decimal>,
    /// Pending cash open
    #[serde(default)]
    pub pending_cash_open: Option<Decimal>,
    /// Pending cash high
    #[serde(default)]
    pub pending_cash_high: Option<Decimal>,
    /// Pending cash low
    #[serde(default)]
    pub pending_cash_low: Option<Decimal>,
    /// Pending cash close
    #[serde(default)]
    pub pending_cash_close: Option<Decimal>,
    /// Total open
    #[serde(default)]
    pub total_open: Option<Decimal>,
    /// Total high
    #[serde(default)]
    pub total_high: Option<Decimal>,
    /// Total low
    #[serde(default)]
    pub total_low: Option<Decimal>,
    /// Total close
    #[serde(default)]
    pub total_close: Option<Decimal>,
    /// Bucket start, as sent by the API
    #[serde(default)]
    pub time: Option<String>,
}

/// An open position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Position {
    /// Account number
    pub account_number: AccountNumber,
    /// Symbol
    pub symbol: String,
    /// Instrument type
    pub instrument_type: InstrumentType,
    /// Underlying symbol
    #[serde(default)]
    pub underlying_symbol: Option<String>,
    /// Unsigned quantity
    pub quantity: Decimal,
    /// Long or short
    pub quantity_direction: QuantityDirection,
    /// Previous close
    #[serde(default)]
    pub close_price: Option<Decimal>,
    /// Average open price
    #[serde(default)]
    pub average_open_price: Option<Decimal>,
    /// Average close price over the year
    #[serde(default)]
    pub average_yearly_market_close_price: Option<Decimal>,
    /// Average close price of the day
    #[serde(default)]
    pub average_daily_market_close_price: Option<Decimal>,
    /// Contract multiplier
    #[serde(default)]
    pub multiplier: Option<Decimal>,
    /// Sign of the position's cost
    #[serde(default)]
    pub cost_effect: Option<PriceEffect>,
    /// Suppressed from display
    #[serde(default)]
    pub is_suppressed: bool,
    /// Frozen
    #[serde(default)]
    pub is_frozen: bool,
    /// Quantity restricted from trading
    #[serde(default)]
    pub restricted_quantity: Option<Decimal>,
    /// Realized gain today
    #[serde(default)]
    pub realized_day_gain: Option<Decimal>,
    /// Sign of `realized_day_gain`
    #[serde(default)]
    pub realized_day_gain_effect: Option<PriceEffect>,
    /// Date of `realized_day_gain`
    #[serde(default)]
    pub realized_day_gain_date: Option<NaiveDate>,
    /// Realized gain
    #[serde(default)]
    pub realized_today: Option<Decimal>,
    /// Sign of `realized_today`
    #[serde(default)]
    pub realized_today_effect: Option<PriceEffect>,
    /// Date of `realized_today`
    #[serde(default)]
    pub realized_today_date: Option<NaiveDate>,
    /// Expiration of derivatives
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Position {
    fn multiplier_or_one(&self) -> Decimal {
        self.multiplier.unwrap_or(Decimal::ONE)
    }

    /// Value at the previous close.
    pub fn market_value(&self) -> Option<Decimal> {
        self.close_price
            .map(|price| price * self.quantity * self.multiplier_or_one())
    }

    /// Profit or loss against the average open price at the previous close.
    pub fn unrealized_pnl(&self) -> Option<Decimal> {
        let (close, open) = (self.close_price?, self.average_open_price?);
        let pnl = (close - open) * self.quantity * self.multiplier_or_one();
        match self.quantity_direction {
            QuantityDirection::Long => Some(pnl),
            QuantityDirection::Short => Some(-pnl),
            QuantityDirection::Zero => Some(Decimal::ZERO),
            QuantityDirection::Unknown => None,
        }
    }

    /// Returns `true` for long positions.
    pub fn is_long(&self) -> bool {
        self.quantity_direction == QuantityDirection::Long
    }

    /// Returns `true` for short positions.
    pub fn is_short(&self) -> bool {
        self.quantity_direction == QuantityDirection::Short
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn position(json: &str) -> Position {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_equity_position() {
        let pos = position(
            r#"{
                "account-number": "5WV12345",
                "symbol": "AAPL",
                "instrument-type": "Equity",
                "underlying-symbol": "AAPL",
                "quantity": "100",
                "quantity-direction": "Long",
                "close-price": "150.0",
                "average-open-price": "140.0",
                "multiplier": "1",
                "cost-effect": "Debit"
            }"#,
        );

        assert!(pos.is_long());
        assert_eq!(pos.market_value(), Some(dec!(15000)));
        assert_eq!(pos.unrealized_pnl(), Some(dec!(1000)));
    }

    #[test]
    fn test_short_option_position() {
        let pos = position(
            r#"{
                "account-number": "5WV12345",
                "symbol": "AAPL  240119C00150000",
                "instrument-type": "Equity Option",
                "quantity": "2",
                "quantity-direction": "Short",
                "close-price": "5.50",
                "average-open-price": "3.00",
                "multiplier": "100"
            }"#,
        );

        assert!(pos.is_short());
        // (5.50 - 3.00) * 2 * 100, against a short
        assert_eq!(pos.unrealized_pnl(), Some(dec!(-500)));
    }

    #[test]
    fn test_balance_with_missing_fields() {
        let json = r#"{
            "account-number": "5WV12345",
            "cash-balance": "1000.50",
            "net-liquidating-value": "25000.00",
            "pending-cash-effect": "None",
            "snapshot-date": "2024-03-01"
        }"#;

        let balance: AccountBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.cash_balance, Some(dec!(1000.50)));
        assert_eq!(balance.pending_cash_effect, Some(PriceEffect::None));
        assert!(balance.equity_buying_power.is_none());
    }

    #[test]
    fn test_net_liq_bucket() {
        let json = r#"{"open": "100.0", "close": "101.5", "time": "2024-03-01 14:30:00+00"}"#;
        let bucket: NetLiqOhlc = serde_json::from_str(json).unwrap();
        assert_eq!(bucket.close, Some(dec!(101.5)));
        assert!(bucket.time.is_some());
    }
}
