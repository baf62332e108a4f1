//! Customer, account, and trading-status models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{AuthorityLevel, MarginOrCash};
use super::AccountNumber;

/// The logged-in customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Customer {
    /// Customer ID (e.g. `me`)
    #[serde(default)]
    pub id: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Username
    #[serde(default)]
    pub username: Option<String>,
    /// External identifier
    #[serde(default)]
    pub external_id: Option<String>,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Middle name
    #[serde(default)]
    pub middle_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Mobile phone number
    #[serde(default)]
    pub mobile_phone_number: Option<String>,
    /// Home address
    #[serde(default)]
    pub address: Option<Address>,
    /// Citizenship country code
    #[serde(default)]
    pub citizenship_country: Option<String>,
    /// Whether the customer agreed to margin terms
    #[serde(default)]
    pub agreed_to_margining: Option<bool>,
    /// Whether the customer declared an industry affiliation
    #[serde(default)]
    pub has_industry_affiliation: Option<bool>,
    /// Whether the customer is a professional market data subscriber
    #[serde(default)]
    pub is_professional: Option<bool>,
    /// Account types the customer may open
    #[serde(default)]
    pub permitted_account_types: Vec<PermittedAccountType>,
    /// When the customer signed up
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// An account type the customer may open.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PermittedAccountType {
    /// Account type name
    #[serde(default)]
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the type is tax advantaged
    #[serde(default)]
    pub is_tax_advantaged: bool,
    /// Whether the type is publicly available
    #[serde(default)]
    pub is_publicly_available: bool,
}

/// A postal address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Address {
    /// Street line 1
    #[serde(default)]
    pub street_one: Option<String>,
    /// Street line 2
    #[serde(default)]
    pub street_two: Option<String>,
    /// City
    #[serde(default)]
    pub city: Option<String>,
    /// State or province code
    #[serde(default)]
    pub state_region: Option<String>,
    /// Postal code
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Country code
    #[serde(default)]
    pub country: Option<String>,
    /// Domestic address
    #[serde(default)]
    pub is_domestic: bool,
    /// Foreign address
    #[serde(default)]
    pub is_foreign: bool,
}

/// A trading account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Account {
    /// Account number
    pub account_number: AccountNumber,
    /// External identifier
    #[serde(default)]
    pub external_id: Option<String>,
    /// When the account was opened
    #[serde(default)]
    pub opened_at: Option<DateTime<Utc>>,
    /// Nickname chosen by the customer
    #[serde(default)]
    pub nickname: Option<String>,
    /// Account type (e.g. `Individual`)
    #[serde(default)]
    pub account_type_name: Option<String>,
    /// Flagged as pattern day trader
    #[serde(default)]
    pub day_trader_status: bool,
    /// Margin or cash
    #[serde(default)]
    pub margin_or_cash: Option<MarginOrCash>,
    /// Closed
    #[serde(default)]
    pub is_closed: bool,
    /// Foreign account
    #[serde(default)]
    pub is_foreign: bool,
    /// Futures trading approved
    #[serde(default)]
    pub is_futures_approved: bool,
    /// Firm error account
    #[serde(default)]
    pub is_firm_error: bool,
    /// Firm proprietary account
    #[serde(default)]
    pub is_firm_proprietary: bool,
    /// Paper trading account
    #[serde(default)]
    pub is_test_drive: bool,
    /// Investment objective
    #[serde(default)]
    pub investment_objective: Option<String>,
    /// Options level the account is suitable for
    #[serde(default)]
    pub suitable_options_level: Option<String>,
    /// Funding date
    #[serde(default)]
    pub funding_date: Option<NaiveDate>,
    /// When the account was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// One entry of `/customers/me/accounts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AccountItem {
    /// The account
    pub account: Account,
    /// The customer's access to it
    #[serde(default)]
    pub authority_level: Option<AuthorityLevel>,
}

/// Trading permissions and restrictions on an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TradingStatus {
    /// Account number
    pub account_number: AccountNumber,
    /// Record ID
    #[serde(default)]
    pub id: Option<u64>,
    /// Day trades in the rolling window
    #[serde(default)]
    pub day_trade_count: Option<i32>,
    /// Equities margin calculation type
    #[serde(default)]
    pub equities_margin_calculation_type: Option<String>,
    /// Fee schedule
    #[serde(default)]
    pub fee_schedule_name: Option<String>,
    /// Futures margin rate multiplier
    #[serde(default)]
    pub futures_margin_rate_multiplier: Option<rust_decimal::Decimal>,
    /// Has a day-trade call outstanding
    #[serde(default)]
    pub has_intraday_equities_margin: bool,
    /// Account may only close positions
    #[serde(default)]
    pub is_closing_only: bool,
    /// Cryptocurrency trading allowed
    #[serde(default)]
    pub is_cryptocurrency_enabled: bool,
    /// Cryptocurrency positions may only be closed
    #[serde(default)]
    pub is_cryptocurrency_closing_only: bool,
    /// Account is frozen
    #[serde(default)]
    pub is_frozen: bool,
    /// Account is in margin call
    #[serde(default)]
    pub is_in_margin_call: bool,
    /// Account is in day-trade equity maintenance call
    #[serde(default)]
    pub is_in_day_trade_equity_maintenance_call: bool,
    /// Account is pattern day trader
    #[serde(default)]
    pub is_pattern_day_trader: bool,
    /// Futures trading enabled
    #[serde(default)]
    pub is_futures_enabled: bool,
    /// Futures positions may only be closed
    #[serde(default)]
    pub is_futures_closing_only: bool,
    /// Full equity margin required
    #[serde(default)]
    pub is_full_equity_margin_required: bool,
    /// Small notional futures intraday margin applies
    #[serde(default)]
    pub is_small_notional_futures_intra_day_enabled: bool,
    /// Risk-reducing orders only
    #[serde(default)]
    pub is_risk_reducing_only: bool,
    /// Account is closed
    #[serde(default)]
    pub is_closed: bool,
    /// Options level
    #[serde(default)]
    pub options_level: Option<String>,
    /// Short calls allowed
    #[serde(default)]
    pub short_calls_enabled: bool,
    /// Small notional futures margin rate
    #[serde(default)]
    pub small_notional_futures_margin_rate_multiplier: Option<rust_decimal::Decimal>,
    /// Pattern day trader reset date
    #[serde(default)]
    pub pdt_reset_on: Option<NaiveDate>,
    /// When the record was last changed
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TradingStatus {
    /// Returns `true` if the account may open new positions.
    pub fn can_open_positions(&self) -> bool {
        !(self.is_closed || self.is_frozen || self.is_closing_only || self.is_risk_reducing_only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_account_item() {
        let json = r#"{
            "account": {
                "account-number": "5WV12345",
                "external-id": "A0000123",
                "opened-at": "2024-01-15T10:30:00.000+00:00",
                "nickname": "Individual",
                "account-type-name": "Individual",
                "day-trader-status": false,
                "margin-or-cash": "Margin",
                "is-closed": false,
                "is-test-drive": true
            },
            "authority-level": "owner"
        }"#;

        let item: AccountItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.account.account_number.as_str(), "5WV12345");
        assert_eq!(item.account.margin_or_cash, Some(MarginOrCash::Margin));
        assert_eq!(item.authority_level, Some(AuthorityLevel::Owner));
        assert!(item.account.is_test_drive);
    }

    #[test]
    fn test_trading_status() {
        let json = r#"{
            "account-number": "5WV12345",
            "day-trade-count": 1,
            "is-closing-only": false,
            "is-frozen": false,
            "options-level": "No Restrictions",
            "pdt-reset-on": "2024-02-01"
        }"#;

        let status: TradingStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.day_trade_count, Some(1));
        assert!(status.can_open_positions());
        assert_eq!(
            status.pdt_reset_on,
            NaiveDate::from_ymd_opt(2024, 2, 1)
        );
    }

    #[test]
    fn test_customer_with_address() {
        let json = r#"{
            "id": "me",
            "email": "trader@example.com",
            "username": "trader",
            "address": {"city": "Chicago", "state-region": "IL", "is-domestic": true}
        }"#;

        let customer: Customer = serde_json::from_str(json).unwrap();
        let address = customer.address.unwrap();
        assert_eq!(address.city.as_deref(), Some("Chicago"));
        assert!(address.is_domestic);
        assert!(customer.permitted_account_types.is_empty());
    }
}
