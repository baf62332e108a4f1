//! Margin requirements and risk parameters.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::PriceEffect;
use super::numeric::StringF32;
use super::AccountNumber;

/// Margin report of an account, or of an account with a hypothetical
/// order applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MarginRequirements {
    /// Account number
    #[serde(default)]
    pub account_number: Option<AccountNumber>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Calculation type (e.g. `Reg T`)
    #[serde(default)]
    pub margin_calculation_type: Option<String>,
    /// Options level
    #[serde(default)]
    pub option_level: Option<String>,
    /// Margin requirement
    #[serde(default)]
    pub margin_requirement: Option<Decimal>,
    /// Sign of `margin_requirement`
    #[serde(default)]
    pub margin_requirement_effect: Option<PriceEffect>,
    /// Initial requirement
    #[serde(default)]
    pub initial_requirement: Option<Decimal>,
    /// Sign of `initial_requirement`
    #[serde(default)]
    pub initial_requirement_effect: Option<PriceEffect>,
    /// Maintenance requirement
    #[serde(default)]
    pub maintenance_requirement: Option<Decimal>,
    /// Sign of `maintenance_requirement`
    #[serde(default)]
    pub maintenance_requirement_effect: Option<PriceEffect>,
    /// Margin equity
    #[serde(default)]
    pub margin_equity: Option<Decimal>,
    /// Sign of `margin_equity`
    #[serde(default)]
    pub margin_equity_effect: Option<PriceEffect>,
    /// Option buying power
    #[serde(default)]
    pub option_buying_power: Option<Decimal>,
    /// Sign of `option_buying_power`
    #[serde(default)]
    pub option_buying_power_effect: Option<PriceEffect>,
    /// Reg T margin requirement
    #[serde(default)]
    pub reg_t_margin_requirement: Option<Decimal>,
    /// Sign of `reg_t_margin_requirement`
    #[serde(default)]
    pub reg_t_margin_requirement_effect: Option<PriceEffect>,
    /// Reg T option buying power
    #[serde(default)]
    pub reg_t_option_buying_power: Option<Decimal>,
    /// Sign of `reg_t_option_buying_power`
    #[serde(default)]
    pub reg_t_option_buying_power_effect: Option<PriceEffect>,
    /// Maintenance excess
    #[serde(default)]
    pub maintenance_excess: Option<Decimal>,
    /// Sign of `maintenance_excess`
    #[serde(default)]
    pub maintenance_excess_effect: Option<PriceEffect>,
    /// Per-underlying breakdown
    #[serde(default)]
    pub groups: Vec<MarginGroup>,
    /// Time of the account state the report is based on
    #[serde(default)]
    pub last_state_timestamp: Option<i64>,
}

/// Margin requirement of one underlying or strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MarginGroup {
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Group code
    #[serde(default)]
    pub code: Option<String>,
    /// Underlying symbol
    #[serde(default)]
    pub underlying_symbol: Option<String>,
    /// Underlying type
    #[serde(default)]
    pub underlying_type: Option<String>,
    /// Expected upward move, as a percentage
    #[serde(default)]
    pub expected_price_range_up_percent: Option<StringF32>,
    /// Expected downward move, as a percentage
    #[serde(default)]
    pub expected_price_range_down_percent: Option<StringF32>,
    /// Move at which losses exceed equity, as a percentage
    #[serde(default)]
    pub point_of_no_return_percent: Option<StringF32>,
    /// Calculation type
    #[serde(default)]
    pub margin_calculation_type: Option<String>,
    /// Margin requirement
    #[serde(default)]
    pub margin_requirement: Option<Decimal>,
    /// Sign of `margin_requirement`
    #[serde(default)]
    pub margin_requirement_effect: Option<PriceEffect>,
    /// Initial requirement
    #[serde(default)]
    pub initial_requirement: Option<Decimal>,
    /// Sign of `initial_requirement`
    #[serde(default)]
    pub initial_requirement_effect: Option<PriceEffect>,
    /// Maintenance requirement
    #[serde(default)]
    pub maintenance_requirement: Option<Decimal>,
    /// Sign of `maintenance_requirement`
    #[serde(default)]
    pub maintenance_requirement_effect: Option<PriceEffect>,
    /// Buying power
    #[serde(default)]
    pub buying_power: Option<Decimal>,
    /// Sign of `buying_power`
    #[serde(default)]
    pub buying_power_effect: Option<PriceEffect>,
    /// Nested groups
    #[serde(default)]
    pub groups: Vec<MarginGroup>,
    /// Price increase scenario, as a percentage
    #[serde(default)]
    pub price_increase_percent: Option<StringF32>,
    /// Price decrease scenario, as a percentage
    #[serde(default)]
    pub price_decrease_percent: Option<StringF32>,
}

/// Parameters the broker uses in its public margin model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MarginRequirementsPublicConfiguration {
    /// Risk-free rate
    #[serde(default)]
    pub risk_free_rate: Option<StringF32>,
}

/// Margin rates in effect for one underlying on an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EffectiveMarginRequirement {
    /// Underlying symbol
    pub underlying_symbol: String,
    /// Long equity initial rate
    #[serde(default)]
    pub long_equity_initial: Option<StringF32>,
    /// Short equity initial rate
    #[serde(default)]
    pub short_equity_initial: Option<StringF32>,
    /// Long equity maintenance rate
    #[serde(default)]
    pub long_equity_maintenance: Option<StringF32>,
    /// Short equity maintenance rate
    #[serde(default)]
    pub short_equity_maintenance: Option<StringF32>,
    /// Naked option standard rate
    #[serde(default)]
    pub naked_option_standard: Option<StringF32>,
    /// Naked option minimum rate
    #[serde(default)]
    pub naked_option_minimum: Option<StringF32>,
    /// Naked option floor
    #[serde(default)]
    pub naked_option_floor: Option<StringF32>,
    /// Clearing identifier
    #[serde(default)]
    pub clearing_identifier: Option<String>,
    /// Deleted
    #[serde(default)]
    pub is_deleted: bool,
}

/// Order and position size limits of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PositionLimit {
    /// Record ID
    #[serde(default)]
    pub id: Option<u64>,
    /// Account number
    #[serde(default)]
    pub account_number: Option<AccountNumber>,
    /// Largest equity order
    #[serde(default)]
    pub equity_order_size: Option<StringF32>,
    /// Largest equity option order
    #[serde(default)]
    pub equity_option_order_size: Option<StringF32>,
    /// Largest futures order
    #[serde(default)]
    pub future_order_size: Option<StringF32>,
    /// Largest futures option order
    #[serde(default)]
    pub future_option_order_size: Option<StringF32>,
    /// Opening order limit per underlying
    #[serde(default)]
    pub underlying_opening_order_limit: Option<StringF32>,
    /// Largest equity position
    #[serde(default)]
    pub equity_position_size: Option<StringF32>,
    /// Largest equity option position
    #[serde(default)]
    pub equity_option_position_size: Option<StringF32>,
    /// Largest futures position
    #[serde(default)]
    pub future_position_size: Option<StringF32>,
    /// Largest futures option position
    #[serde(default)]
    pub future_option_position_size: Option<StringF32>,
    /// Last update
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_margin_report() {
        let json = r#"{
            "account-number": "5WV12345",
            "margin-calculation-type": "Reg T",
            "option-level": "No Restrictions",
            "margin-requirement": "2503.5",
            "margin-requirement-effect": "Debit",
            "groups": [{
                "description": "AAPL",
                "underlying-symbol": "AAPL",
                "expected-price-range-up-percent": "0.15",
                "point-of-no-return-percent": "NaN",
                "margin-requirement": "2503.5",
                "margin-requirement-effect": "Debit"
            }],
            "last-state-timestamp": 1709900000000
        }"#;

        let report: MarginRequirements = serde_json::from_str(json).unwrap();
        assert_eq!(report.margin_requirement, Some(dec!(2503.5)));
        let group = &report.groups[0];
        assert_eq!(group.expected_price_range_up_percent.unwrap().value(), 0.15);
        assert_eq!(group.point_of_no_return_percent.unwrap().value(), 0.0);
    }

    #[test]
    fn test_effective_requirement() {
        let json = r#"{
            "underlying-symbol": "AAPL",
            "long-equity-initial": "0.5",
            "short-equity-initial": "0.5",
            "long-equity-maintenance": "0.25",
            "naked-option-standard": "0.2",
            "naked-option-minimum": "0.1",
            "naked-option-floor": ""
        }"#;
        let req: EffectiveMarginRequirement = serde_json::from_str(json).unwrap();
        assert_eq!(req.long_equity_maintenance.unwrap().value(), 0.25);
        assert_eq!(req.naked_option_floor.unwrap().value(), 0.0);
    }

    #[test]
    fn test_position_limit_accepts_numbers() {
        let json = r#"{"account-number": "5WV12345", "equity-order-size": 500000, "future-order-size": "500"}"#;
        let limit: PositionLimit = serde_json::from_str(json).unwrap();
        assert_eq!(limit.equity_order_size.unwrap().value(), 500000.0);
        assert_eq!(limit.future_order_size.unwrap().value(), 500.0);
    }
}
