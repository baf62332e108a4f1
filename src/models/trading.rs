//! Order previews: buying power, fees, and placement responses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::PriceEffect;
use super::order::{ComplexOrder, Order};

/// Effect of an order on buying power.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuyingPowerEffect {
    /// Change in margin requirement
    #[serde(default)]
    pub change_in_margin_requirement: Option<Decimal>,
    /// Sign of `change_in_margin_requirement`
    #[serde(default)]
    pub change_in_margin_requirement_effect: Option<PriceEffect>,
    /// Change in buying power
    #[serde(default)]
    pub change_in_buying_power: Option<Decimal>,
    /// Sign of `change_in_buying_power`
    #[serde(default)]
    pub change_in_buying_power_effect: Option<PriceEffect>,
    /// Buying power before the order
    #[serde(default)]
    pub current_buying_power: Option<Decimal>,
    /// Sign of `current_buying_power`
    #[serde(default)]
    pub current_buying_power_effect: Option<PriceEffect>,
    /// Buying power after the order
    #[serde(default)]
    pub new_buying_power: Option<Decimal>,
    /// Sign of `new_buying_power`
    #[serde(default)]
    pub new_buying_power_effect: Option<PriceEffect>,
    /// Margin requirement of the order alone
    #[serde(default)]
    pub isolated_order_margin_requirement: Option<Decimal>,
    /// Sign of `isolated_order_margin_requirement`
    #[serde(default)]
    pub isolated_order_margin_requirement_effect: Option<PriceEffect>,
    /// Spread order
    #[serde(default)]
    pub is_spread: bool,
    /// Net impact
    #[serde(default)]
    pub impact: Option<Decimal>,
    /// Sign of `impact`
    #[serde(default)]
    pub effect: Option<PriceEffect>,
}

impl BuyingPowerEffect {
    /// Returns `false` only when the preview reports negative buying power
    /// after the order.
    pub fn has_sufficient_buying_power(&self) -> bool {
        match (self.new_buying_power, self.new_buying_power_effect) {
            (Some(amount), Some(effect)) => effect != PriceEffect::Debit || amount.is_zero(),
            _ => true,
        }
    }

    /// Signed change in buying power.
    pub fn buying_power_change(&self) -> Option<Decimal> {
        let effect = self.change_in_buying_power_effect?;
        Some(effect.apply(self.change_in_buying_power?))
    }
}

/// Fees of an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FeeCalculation {
    /// Regulatory fees
    #[serde(default)]
    pub regulatory_fees: Option<Decimal>,
    /// Sign of `regulatory_fees`
    #[serde(default)]
    pub regulatory_fees_effect: Option<PriceEffect>,
    /// Clearing fees
    #[serde(default)]
    pub clearing_fees: Option<Decimal>,
    /// Sign of `clearing_fees`
    #[serde(default)]
    pub clearing_fees_effect: Option<PriceEffect>,
    /// Commission
    #[serde(default)]
    pub commission: Option<Decimal>,
    /// Sign of `commission`
    #[serde(default)]
    pub commission_effect: Option<PriceEffect>,
    /// Proprietary index option fees
    #[serde(default)]
    pub proprietary_index_option_fees: Option<Decimal>,
    /// Sign of `proprietary_index_option_fees`
    #[serde(default)]
    pub proprietary_index_option_fees_effect: Option<PriceEffect>,
    /// Total
    #[serde(default)]
    pub total_fees: Option<Decimal>,
    /// Sign of `total_fees`
    #[serde(default)]
    pub total_fees_effect: Option<PriceEffect>,
}

impl FeeCalculation {
    /// Total fees as an unsigned amount.
    pub fn total_fees_amount(&self) -> Decimal {
        self.total_fees.unwrap_or_default().abs()
    }
}

/// Warning or rejection attached to an order response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrderMessage {
    /// Machine-readable code
    pub code: String,
    /// Message
    #[serde(default)]
    pub message: String,
    /// Preflight ID to acknowledge the warning with
    #[serde(default)]
    pub preflight_id: Option<String>,
}

/// Response to placing, replacing, or dry-running an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrderResponse {
    /// The order as accepted or previewed
    pub order: Order,
    /// Buying power effect
    #[serde(default)]
    pub buying_power_effect: Option<BuyingPowerEffect>,
    /// Fees
    #[serde(default)]
    pub fee_calculation: Option<FeeCalculation>,
    /// Warnings
    #[serde(default)]
    pub warnings: Vec<OrderMessage>,
    /// Errors; a dry run with errors would be rejected
    #[serde(default)]
    pub errors: Vec<OrderMessage>,
}

impl OrderResponse {
    /// Returns `true` if the order has no errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Response to placing or dry-running a complex order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ComplexOrderResponse {
    /// The complex order as accepted or previewed
    pub complex_order: ComplexOrder,
    /// Buying power effect
    #[serde(default)]
    pub buying_power_effect: Option<BuyingPowerEffect>,
    /// Fees
    #[serde(default)]
    pub fee_calculation: Option<FeeCalculation>,
    /// Warnings
    #[serde(default)]
    pub warnings: Vec<OrderMessage>,
    /// Errors
    #[serde(default)]
    pub errors: Vec<OrderMessage>,
}

impl ComplexOrderResponse {
    /// Returns `true` if the order has no errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_buying_power_effect() {
        let effect = BuyingPowerEffect {
            change_in_buying_power: Some(dec!(500)),
            change_in_buying_power_effect: Some(PriceEffect::Debit),
            new_buying_power: Some(dec!(9500)),
            new_buying_power_effect: Some(PriceEffect::Credit),
            ..Default::default()
        };
        assert!(effect.has_sufficient_buying_power());
        assert_eq!(effect.buying_power_change(), Some(dec!(-500)));

        let overdrawn = BuyingPowerEffect {
            new_buying_power: Some(dec!(120)),
            new_buying_power_effect: Some(PriceEffect::Debit),
            ..Default::default()
        };
        assert!(!overdrawn.has_sufficient_buying_power());
    }

    #[test]
    fn test_fee_calculation() {
        let fees = FeeCalculation {
            total_fees: Some(dec!(-0.07)),
            total_fees_effect: Some(PriceEffect::Debit),
            ..Default::default()
        };
        assert_eq!(fees.total_fees_amount(), dec!(0.07));
    }

    #[test]
    fn test_dry_run_response() {
        let json = r#"{
            "order": {
                "account-number": "5WV12345",
                "time-in-force": "Day",
                "order-type": "Market",
                "status": "Received",
                "legs": [{"instrument-type": "Equity", "symbol": "AAPL", "quantity": "1", "action": "Buy"}]
            },
            "buying-power-effect": {
                "change-in-buying-power": "190.12",
                "change-in-buying-power-effect": "Debit",
                "is-spread": false
            },
            "fee-calculation": {"total-fees": "0.01", "total-fees-effect": "Debit"},
            "warnings": [{"code": "tif_next_valid_sesssion", "message": "Your order will begin working during next valid session."}]
        }"#;

        let response: OrderResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_valid());
        assert!(response.order.id.is_none());
        assert_eq!(response.warnings.len(), 1);
        assert_eq!(
            response.buying_power_effect.unwrap().buying_power_change(),
            Some(dec!(-190.12))
        );
    }
}
