//! Order entry and order records.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::*;
use super::{AccountNumber, OrderId};

/// An order to submit, dry-run, or use as a replacement.
///
/// Build one with [`NewOrderBuilder`], which checks the fields each order
/// type needs.
///
/// ```
/// use tastytrade::models::{NewOrderBuilder, OrderLeg, OrderType, PriceEffect, TimeInForce};
/// use rust_decimal_macros::dec;
///
/// let order = NewOrderBuilder::new()
///     .time_in_force(TimeInForce::Day)
///     .order_type(OrderType::Limit)
///     .price(dec!(150.00))
///     .price_effect(PriceEffect::Debit)
///     .add_leg(OrderLeg::buy_equity("AAPL", dec!(10)))
///     .build()
///     .unwrap();
///
/// assert_eq!(order.legs.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NewOrder {
    /// Time in force
    pub time_in_force: TimeInForce,
    /// Order type
    pub order_type: OrderType,
    /// Expiry date of a GTD order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtc_date: Option<NaiveDate>,
    /// Limit price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Sign of `price`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_effect: Option<PriceEffect>,
    /// Stop trigger
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_trigger: Option<Decimal>,
    /// Dollar amount of a notional order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    /// Sign of `value`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_effect: Option<PriceEffect>,
    /// Originating application
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Partition key for order routing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_key: Option<String>,
    /// Caller-chosen identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_identifier: Option<String>,
    /// Preflight check ID returned by a dry run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preflight_id: Option<String>,
    /// Legs
    pub legs: Vec<OrderLeg>,
    /// Conditional routing rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<OrderRules>,
}

/// Builder for [`NewOrder`].
#[derive(Debug, Default, Clone)]
pub struct NewOrderBuilder {
    time_in_force: Option<TimeInForce>,
    order_type: Option<OrderType>,
    gtc_date: Option<NaiveDate>,
    price: Option<Decimal>,
    price_effect: Option<PriceEffect>,
    stop_trigger: Option<Decimal>,
    value: Option<Decimal>,
    value_effect: Option<PriceEffect>,
    source: Option<String>,
    external_identifier: Option<String>,
    preflight_id: Option<String>,
    legs: Vec<OrderLeg>,
    rules: Option<OrderRules>,
}

impl NewOrderBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time in force.
    pub fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Set the order type.
    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }

    /// Set the expiry date of a GTD order.
    pub fn gtc_date(mut self, date: NaiveDate) -> Self {
        self.gtc_date = Some(date);
        self
    }

    /// Set the limit price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the sign of the limit price.
    pub fn price_effect(mut self, effect: PriceEffect) -> Self {
        self.price_effect = Some(effect);
        self
    }

    /// Set the stop trigger.
    pub fn stop_trigger(mut self, price: Decimal) -> Self {
        self.stop_trigger = Some(price);
        self
    }

    /// Set the dollar amount of a notional order.
    pub fn value(mut self, value: Decimal, effect: PriceEffect) -> Self {
        self.value = Some(value);
        self.value_effect = Some(effect);
        self
    }

    /// Tag the order with the originating application.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set a caller-chosen identifier.
    pub fn external_identifier(mut self, id: impl Into<String>) -> Self {
        self.external_identifier = Some(id.into());
        self
    }

    /// Carry the preflight ID from a dry run.
    pub fn preflight_id(mut self, id: impl Into<String>) -> Self {
        self.preflight_id = Some(id.into());
        self
    }

    /// Replace all legs.
    pub fn legs(mut self, legs: Vec<OrderLeg>) -> Self {
        self.legs = legs;
        self
    }

    /// Append a leg.
    pub fn add_leg(mut self, leg: OrderLeg) -> Self {
        self.legs.push(leg);
        self
    }

    /// Append a leg built from its parts.
    pub fn leg(
        self,
        instrument_type: InstrumentType,
        symbol: impl Into<String>,
        action: OrderAction,
        quantity: impl Into<Decimal>,
    ) -> Self {
        self.add_leg(OrderLeg::new(instrument_type, symbol, quantity.into(), action))
    }

    /// Attach conditional routing rules.
    pub fn rules(mut self, rules: OrderRules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Check required fields and build the order.
    pub fn build(self) -> crate::Result<NewOrder> {
        let invalid = |msg: &str| crate::Error::InvalidInput(msg.to_string());

        let time_in_force = self
            .time_in_force
            .ok_or_else(|| invalid("time_in_force is required"))?;
        let order_type = self
            .order_type
            .ok_or_else(|| invalid("order_type is required"))?;

        if self.legs.is_empty() {
            return Err(invalid("order must have at least one leg"));
        }
        if order_type.requires_price() && self.price.is_none() {
            return Err(invalid("limit orders require a price"));
        }
        if order_type.requires_stop_trigger() && self.stop_trigger.is_none() {
            return Err(invalid("stop orders require a stop_trigger"));
        }
        if order_type == OrderType::NotionalMarket && self.value.is_none() {
            return Err(invalid("notional orders require a value"));
        }
        if time_in_force == TimeInForce::Gtd && self.gtc_date.is_none() {
            return Err(invalid("GTD orders require a gtc_date"));
        }
        if self.price.is_some() && self.value.is_some() {
            return Err(invalid("price and value are mutually exclusive"));
        }

        Ok(NewOrder {
            time_in_force,
            order_type,
            gtc_date: self.gtc_date,
            price: self.price,
            price_effect: self.price_effect,
            stop_trigger: self.stop_trigger,
            value: self.value,
            value_effect: self.value_effect,
            source: self.source,
            partition_key: None,
            external_identifier: self.external_identifier,
            preflight_id: self.preflight_id,
            legs: self.legs,
            rules: self.rules,
        })
    }
}

/// A leg of a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrderLeg {
    /// Instrument type
    pub instrument_type: InstrumentType,
    /// Symbol
    pub symbol: String,
    /// Quantity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    /// Action
    pub action: OrderAction,
}

impl OrderLeg {
    /// Create a leg.
    pub fn new(
        instrument_type: InstrumentType,
        symbol: impl Into<String>,
        quantity: Decimal,
        action: OrderAction,
    ) -> Self {
        Self {
            instrument_type,
            symbol: symbol.into(),
            quantity: Some(quantity),
            action,
        }
    }

    /// Buy shares.
    pub fn buy_equity(symbol: impl Into<String>, quantity: Decimal) -> Self {
        Self::new(InstrumentType::Equity, symbol, quantity, OrderAction::Buy)
    }

    /// Sell shares.
    pub fn sell_equity(symbol: impl Into<String>, quantity: Decimal) -> Self {
        Self::new(InstrumentType::Equity, symbol, quantity, OrderAction::Sell)
    }

    /// Trade an equity option.
    pub fn equity_option(symbol: impl Into<String>, quantity: Decimal, action: OrderAction) -> Self {
        Self::new(InstrumentType::EquityOption, symbol, quantity, action)
    }

    /// Trade a futures contract.
    pub fn future(symbol: impl Into<String>, quantity: Decimal, action: OrderAction) -> Self {
        Self::new(InstrumentType::Future, symbol, quantity, action)
    }

    /// Trade a future option.
    pub fn future_option(symbol: impl Into<String>, quantity: Decimal, action: OrderAction) -> Self {
        Self::new(InstrumentType::FutureOption, symbol, quantity, action)
    }

    /// Trade a cryptocurrency. Quantity may be fractional.
    pub fn cryptocurrency(symbol: impl Into<String>, quantity: Decimal, action: OrderAction) -> Self {
        Self::new(InstrumentType::Cryptocurrency, symbol, quantity, action)
    }
}

/// Conditional routing rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrderRules {
    /// Earliest routing time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_after: Option<DateTime<Utc>>,
    /// When the order was routed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routed_at: Option<DateTime<Utc>>,
    /// Cancel time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_at: Option<DateTime<Utc>>,
    /// When the order was cancelled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
    /// Price conditions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<OrderCondition>,
}

/// A price condition that routes or cancels an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrderCondition {
    /// What happens when the condition triggers
    pub action: ConditionAction,
    /// Symbol watched
    pub symbol: String,
    /// Instrument type of `symbol`
    pub instrument_type: InstrumentType,
    /// Watched indicator (e.g. `last`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,
    /// Comparator
    pub comparator: PriceComparison,
    /// Threshold
    pub threshold: Decimal,
    /// Whether the condition has triggered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_threshold_based_on_notional: Option<bool>,
    /// Trigger time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggered_at: Option<DateTime<Utc>>,
}

/// Changes applied to a live order in place.
///
/// Only the price and execution properties of an order can be edited; legs
/// are fixed. Use a replacement order to change legs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrderEdit {
    /// New order type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    /// New time in force
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// New GTD expiry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtc_date: Option<NaiveDate>,
    /// New limit price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Sign of `price`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_effect: Option<PriceEffect>,
    /// New stop trigger
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_trigger: Option<Decimal>,
    /// New notional amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    /// Sign of `value`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_effect: Option<PriceEffect>,
    /// New external identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_identifier: Option<String>,
}

/// A complex order (OCO, OTO, OTOCO) to submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NewComplexOrder {
    /// Complex order kind
    #[serde(rename = "type")]
    pub order_type: ComplexOrderType,
    /// Order whose fill activates `orders` (OTO, OTOCO)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_order: Option<NewOrder>,
    /// Contingent orders
    pub orders: Vec<NewOrder>,
    /// Caller-chosen identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_identifier: Option<String>,
    /// Originating application
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl NewComplexOrder {
    /// One-cancels-other pair.
    pub fn oco(first: NewOrder, second: NewOrder) -> Self {
        Self {
            order_type: ComplexOrderType::Oco,
            trigger_order: None,
            orders: vec![first, second],
            external_identifier: None,
            source: None,
        }
    }

    /// Trigger order followed by a one-cancels-other pair.
    pub fn otoco(trigger: NewOrder, first: NewOrder, second: NewOrder) -> Self {
        Self {
            order_type: ComplexOrderType::Otoco,
            trigger_order: Some(trigger),
            orders: vec![first, second],
            external_identifier: None,
            source: None,
        }
    }

    /// Trigger order followed by one contingent order.
    pub fn oto(trigger: NewOrder, order: NewOrder) -> Self {
        Self {
            order_type: ComplexOrderType::Oto,
            trigger_order: Some(trigger),
            orders: vec![order],
            external_identifier: None,
            source: None,
        }
    }
}

/// An order on record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Order {
    /// Order ID; absent on dry runs
    #[serde(default)]
    pub id: Option<u64>,
    /// Account number
    #[serde(default)]
    pub account_number: Option<AccountNumber>,
    /// Time in force
    pub time_in_force: TimeInForce,
    /// Order type
    pub order_type: OrderType,
    /// Total size
    #[serde(default)]
    pub size: Option<Decimal>,
    /// Underlying symbol
    #[serde(default)]
    pub underlying_symbol: Option<String>,
    /// Underlying instrument type
    #[serde(default)]
    pub underlying_instrument_type: Option<InstrumentType>,
    /// Status
    pub status: OrderStatus,
    /// Limit price
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Sign of `price`
    #[serde(default)]
    pub price_effect: Option<PriceEffect>,
    /// Stop trigger
    #[serde(default)]
    pub stop_trigger: Option<Decimal>,
    /// Notional amount
    #[serde(default)]
    pub value: Option<Decimal>,
    /// Sign of `value`
    #[serde(default)]
    pub value_effect: Option<PriceEffect>,
    /// GTD expiry
    #[serde(default)]
    pub gtc_date: Option<NaiveDate>,
    /// Can be cancelled
    #[serde(default)]
    pub cancellable: bool,
    /// Can be edited
    #[serde(default)]
    pub editable: bool,
    /// Has been edited
    #[serde(default)]
    pub edited: bool,
    /// Caller-chosen identifier
    #[serde(default)]
    pub external_identifier: Option<String>,
    /// Who placed the order
    #[serde(default)]
    pub username: Option<String>,
    /// Originating application
    #[serde(default)]
    pub source: Option<String>,
    /// ID of the order this one replaced
    #[serde(default)]
    pub replaces_order_id: Option<u64>,
    /// ID of the order that replaced this one
    #[serde(default)]
    pub replacing_order_id: Option<u64>,
    /// Parent complex order
    #[serde(default)]
    pub complex_order_id: Option<u64>,
    /// Role inside the complex order
    #[serde(default)]
    pub complex_order_tag: Option<String>,
    /// Received
    #[serde(default)]
    pub received_at: Option<DateTime<Utc>>,
    /// Last update
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Reached a terminal state
    #[serde(default)]
    pub terminal_at: Option<DateTime<Utc>>,
    /// In-flight since
    #[serde(default)]
    pub in_flight_at: Option<DateTime<Utc>>,
    /// Live since
    #[serde(default)]
    pub live_at: Option<DateTime<Utc>>,
    /// Cancelled
    #[serde(default)]
    pub cancelled_at: Option<DateTime<Utc>>,
    /// Who cancelled the order
    #[serde(default)]
    pub cancel_user_id: Option<String>,
    /// Rejection reason
    #[serde(default)]
    pub reject_reason: Option<String>,
    /// Legs
    #[serde(default)]
    pub legs: Vec<OrderLegDetail>,
    /// Conditional routing rules
    #[serde(default)]
    pub rules: Option<OrderRules>,
}

impl Order {
    /// The order ID as a path identifier.
    pub fn order_id(&self) -> Option<OrderId> {
        self.id.map(OrderId::from)
    }

    /// Returns `true` if the order can be cancelled now.
    pub fn is_cancellable(&self) -> bool {
        self.cancellable && !self.status.is_terminal()
    }

    /// Returns `true` if the order can be edited now.
    pub fn is_editable(&self) -> bool {
        self.editable && !self.status.is_terminal()
    }

    /// Returns `true` if fully filled.
    pub fn is_filled(&self) -> bool {
        self.status == OrderStatus::Filled
    }

    /// Filled quantity summed over all legs.
    pub fn filled_quantity(&self) -> Decimal {
        self.legs
            .iter()
            .flat_map(|leg| leg.fills.iter())
            .map(|fill| fill.quantity)
            .sum()
    }
}

/// A leg of an order on record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrderLegDetail {
    /// Instrument type
    pub instrument_type: InstrumentType,
    /// Symbol
    pub symbol: String,
    /// Quantity ordered
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Quantity still open
    #[serde(default)]
    pub remaining_quantity: Option<Decimal>,
    /// Action
    pub action: OrderAction,
    /// Fills
    #[serde(default)]
    pub fills: Vec<Fill>,
}

/// One execution of an order leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Fill {
    /// Execution ID
    #[serde(default)]
    pub ext_exec_id: Option<String>,
    /// Group fill ID
    #[serde(default)]
    pub ext_group_fill_id: Option<String>,
    /// Fill ID
    #[serde(default)]
    pub fill_id: Option<String>,
    /// Quantity
    pub quantity: Decimal,
    /// Price
    pub fill_price: Decimal,
    /// Time
    #[serde(default)]
    pub filled_at: Option<DateTime<Utc>>,
    /// Venue
    #[serde(default)]
    pub destination_venue: Option<String>,
}

impl Fill {
    /// Notional value of the fill for a contract multiplier.
    pub fn value(&self, multiplier: Decimal) -> Decimal {
        self.quantity * self.fill_price * multiplier
    }
}

/// A complex order on record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ComplexOrder {
    /// Complex order ID; absent on dry runs
    #[serde(default)]
    pub id: Option<u64>,
    /// Account number
    #[serde(default)]
    pub account_number: Option<AccountNumber>,
    /// Complex order kind
    #[serde(rename = "type")]
    pub order_type: ComplexOrderType,
    /// Reached a terminal state
    #[serde(default)]
    pub terminal_at: Option<DateTime<Utc>>,
    /// Ratio price threshold
    #[serde(default)]
    pub ratio_price_threshold: Option<Decimal>,
    /// Ratio price comparator
    #[serde(default)]
    pub ratio_price_comparator: Option<String>,
    /// Whether the ratio threshold is notional
    #[serde(default)]
    pub ratio_price_is_threshold_based_on_notional: Option<bool>,
    /// Related orders
    #[serde(default)]
    pub related_orders: Vec<RelatedOrder>,
    /// Contingent orders
    #[serde(default)]
    pub orders: Vec<Order>,
    /// Trigger order
    #[serde(default)]
    pub trigger_order: Option<Order>,
}

impl ComplexOrder {
    /// The complex order ID as a path identifier.
    pub fn order_id(&self) -> Option<OrderId> {
        self.id.map(OrderId::from)
    }
}

/// Reference to an order inside a complex order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RelatedOrder {
    /// Order ID
    pub id: u64,
    /// Parent complex order ID
    #[serde(default)]
    pub complex_order_id: Option<u64>,
    /// Role inside the complex order
    #[serde(default)]
    pub complex_order_tag: Option<String>,
    /// Status
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_builder_valid() {
        let order = NewOrderBuilder::new()
            .time_in_force(TimeInForce::Day)
            .order_type(OrderType::Limit)
            .price(dec!(150.00))
            .price_effect(PriceEffect::Debit)
            .add_leg(OrderLeg::buy_equity("AAPL", dec!(10)))
            .build()
            .unwrap();

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "time-in-force": "Day",
                "order-type": "Limit",
                "price": "150.00",
                "price-effect": "Debit",
                "legs": [{
                    "instrument-type": "Equity",
                    "symbol": "AAPL",
                    "quantity": "10",
                    "action": "Buy"
                }]
            })
        );
    }

    #[test]
    fn test_order_builder_rejections() {
        let leg = || OrderLeg::buy_equity("AAPL", dec!(10));

        assert!(NewOrderBuilder::new()
            .order_type(OrderType::Market)
            .add_leg(leg())
            .build()
            .is_err());
        assert!(NewOrderBuilder::new()
            .time_in_force(TimeInForce::Day)
            .order_type(OrderType::Limit)
            .add_leg(leg())
            .build()
            .is_err());
        assert!(NewOrderBuilder::new()
            .time_in_force(TimeInForce::Day)
            .order_type(OrderType::Stop)
            .add_leg(leg())
            .build()
            .is_err());
        assert!(NewOrderBuilder::new()
            .time_in_force(TimeInForce::Gtd)
            .order_type(OrderType::Market)
            .add_leg(leg())
            .build()
            .is_err());
        assert!(NewOrderBuilder::new()
            .time_in_force(TimeInForce::Day)
            .order_type(OrderType::Market)
            .build()
            .is_err());
    }

    #[test]
    fn test_notional_order() {
        let order = NewOrderBuilder::new()
            .time_in_force(TimeInForce::Day)
            .order_type(OrderType::NotionalMarket)
            .value(dec!(100), PriceEffect::Debit)
            .add_leg(OrderLeg {
                instrument_type: InstrumentType::Equity,
                symbol: "AAPL".into(),
                quantity: None,
                action: OrderAction::Buy,
            })
            .build()
            .unwrap();

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["value"], "100");
        assert!(json["legs"][0].get("quantity").is_none());
    }

    #[test]
    fn test_order_edit_only_sends_changes() {
        let edit = OrderEdit {
            price: Some(dec!(151.25)),
            price_effect: Some(PriceEffect::Debit),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&edit).unwrap(),
            serde_json::json!({"price": "151.25", "price-effect": "Debit"})
        );
    }

    #[test]
    fn test_deserialize_order_with_fills() {
        let json = r#"{
            "id": 123456,
            "account-number": "5WV12345",
            "time-in-force": "Day",
            "order-type": "Limit",
            "size": "10",
            "underlying-symbol": "AAPL",
            "status": "Filled",
            "price": "150.0",
            "price-effect": "Debit",
            "cancellable": false,
            "editable": false,
            "legs": [{
                "instrument-type": "Equity",
                "symbol": "AAPL",
                "quantity": "10",
                "remaining-quantity": "0",
                "action": "Buy",
                "fills": [
                    {"quantity": "4", "fill-price": "149.99", "filled-at": "2024-01-02T15:00:00Z"},
                    {"quantity": "6", "fill-price": "150.0", "filled-at": "2024-01-02T15:00:01Z"}
                ]
            }]
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id(), Some(OrderId::new("123456")));
        assert!(order.is_filled());
        assert!(!order.is_cancellable());
        assert_eq!(order.filled_quantity(), dec!(10));
        assert_eq!(order.legs[0].fills[0].value(Decimal::ONE), dec!(599.96));
    }

    #[test]
    fn test_complex_order_constructors() {
        let exit = |price| {
            NewOrderBuilder::new()
                .time_in_force(TimeInForce::Gtc)
                .order_type(OrderType::Limit)
                .price(price)
                .price_effect(PriceEffect::Credit)
                .add_leg(OrderLeg::sell_equity("AAPL", dec!(10)))
                .build()
                .unwrap()
        };

        let oco = NewComplexOrder::oco(exit(dec!(160)), exit(dec!(140)));
        let json = serde_json::to_value(&oco).unwrap();
        assert_eq!(json["type"], "OCO");
        assert_eq!(json["orders"].as_array().unwrap().len(), 2);
        assert!(json.get("trigger-order").is_none());
    }
}
