//! Account transactions and fee totals.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::enums::{InstrumentType, PriceEffect, TransactionType};
use super::AccountNumber;

/// Accepts integer IDs as well as numeric strings.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Int(u64),
        Text(String),
    }

    match Option::<Id>::deserialize(deserializer)? {
        Some(Id::Int(id)) => Ok(Some(id)),
        Some(Id::Text(text)) => text.parse().map(Some).map_err(D::Error::custom),
        None => Ok(None),
    }
}

/// A transaction on an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Transaction {
    /// Transaction ID
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<u64>,
    /// Account number
    #[serde(default)]
    pub account_number: Option<AccountNumber>,
    /// Category
    #[serde(default)]
    pub transaction_type: Option<TransactionType>,
    /// Sub-category (e.g. `Buy to Open`)
    #[serde(default)]
    pub transaction_sub_type: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Underlying symbol
    #[serde(default)]
    pub underlying_symbol: Option<String>,
    /// Instrument type
    #[serde(default)]
    pub instrument_type: Option<InstrumentType>,
    /// Action
    #[serde(default)]
    pub action: Option<String>,
    /// Quantity
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Price
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Gross value
    #[serde(default)]
    pub value: Option<Decimal>,
    /// Sign of `value`
    #[serde(default)]
    pub value_effect: Option<PriceEffect>,
    /// Net value after fees
    #[serde(default)]
    pub net_value: Option<Decimal>,
    /// Sign of `net_value`
    #[serde(default)]
    pub net_value_effect: Option<PriceEffect>,
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
    /// Order that produced the transaction
    #[serde(default, deserialize_with = "lenient_id")]
    pub order_id: Option<u64>,
    /// Execution ID
    #[serde(default)]
    pub exec_id: Option<String>,
    /// External execution ID
    #[serde(default)]
    pub ext_exec_id: Option<String>,
    /// External group ID
    #[serde(default)]
    pub ext_group_id: Option<String>,
    /// External group fill ID
    #[serde(default)]
    pub ext_group_fill_id: Option<String>,
    /// Venue
    #[serde(default)]
    pub exchange: Option<String>,
    /// Executed
    #[serde(default)]
    pub executed_at: Option<DateTime<Utc>>,
    /// Trade date
    #[serde(default)]
    pub transaction_date: Option<NaiveDate>,
    /// Fees are estimates pending settlement
    #[serde(default)]
    pub is_estimated_fee: bool,
}

impl Transaction {
    /// Signed net amount.
    ///
    /// Uses `net_value` when sent, otherwise the signed gross value minus
    /// fees.
    pub fn net_amount(&self) -> Decimal {
        if let (Some(net), Some(effect)) = (self.net_value, self.net_value_effect) {
            return effect.apply(net);
        }
        let value = match (self.value, self.value_effect) {
            (Some(value), Some(effect)) => effect.apply(value),
            (Some(value), None) => value,
            _ => Decimal::ZERO,
        };
        let fees: Decimal = [self.regulatory_fees, self.clearing_fees, self.commission]
            .into_iter()
            .flatten()
            .map(|fee| fee.abs())
            .sum();
        value - fees
    }
}

/// Fees charged on one day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TotalFees {
    /// Total
    #[serde(default)]
    pub total_fees: Option<Decimal>,
    /// Sign of `total_fees`
    #[serde(default)]
    pub total_fees_effect: Option<PriceEffect>,
}
