//! Instrument definitions and option chains.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{InstrumentType, Lendability, OptionType};

/// Fields shared by every tradeable instrument.
pub trait Instrument {
    /// Symbol.
    fn symbol(&self) -> &str;
    /// Instrument type.
    fn instrument_type(&self) -> InstrumentType;
    /// Symbol used by the quote streamer.
    fn streamer_symbol(&self) -> Option<&str>;
    /// Accepting orders.
    fn is_active(&self) -> bool;
}

macro_rules! impl_instrument {
    ($ty:ty, $kind:expr) => {
        impl Instrument for $ty {
            fn symbol(&self) -> &str {
                &self.symbol
            }

            fn instrument_type(&self) -> InstrumentType {
                self.instrument_type.unwrap_or($kind)
            }

            fn streamer_symbol(&self) -> Option<&str> {
                self.streamer_symbol.as_deref()
            }

            fn is_active(&self) -> bool {
                self.active
            }
        }
    };
}

/// A price increment that applies below a threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TickSize {
    /// Increment
    pub value: Decimal,
    /// Upper bound of the price band; absent for the last band
    #[serde(default)]
    pub threshold: Option<Decimal>,
    /// Symbol the band applies to
    #[serde(default)]
    pub symbol: Option<String>,
}

/// What one option contract delivers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Deliverable {
    /// Deliverable ID
    #[serde(default)]
    pub id: Option<u64>,
    /// Root symbol
    #[serde(default)]
    pub root_symbol: Option<String>,
    /// Kind (e.g. `Shares`)
    #[serde(default)]
    pub deliverable_type: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Amount
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Delivered symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Delivered instrument type
    #[serde(default)]
    pub instrument_type: Option<InstrumentType>,
    /// Share of the deliverable
    #[serde(default)]
    pub percent: Option<String>,
}

/// A cryptocurrency pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Cryptocurrency {
    /// Instrument ID
    #[serde(default)]
    pub id: Option<u64>,
    /// Symbol (e.g. `BTC/USD`)
    pub symbol: String,
    /// Instrument type
    #[serde(default)]
    pub instrument_type: Option<InstrumentType>,
    /// Short description
    #[serde(default)]
    pub short_description: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Only closing orders accepted
    #[serde(default)]
    pub is_closing_only: bool,
    /// Accepting orders
    #[serde(default)]
    pub active: bool,
    /// Price increment
    #[serde(default)]
    pub tick_size: Option<Decimal>,
    /// Streamer symbol
    #[serde(default)]
    pub streamer_symbol: Option<String>,
    /// Venue symbols
    #[serde(default)]
    pub destination_venue_symbols: Vec<DestinationVenueSymbol>,
}

impl_instrument!(Cryptocurrency, InstrumentType::Cryptocurrency);

/// A cryptocurrency's symbol at one venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DestinationVenueSymbol {
    /// Record ID
    #[serde(default)]
    pub id: Option<u64>,
    /// Venue symbol
    pub symbol: String,
    /// Venue
    #[serde(default)]
    pub destination_venue: Option<String>,
    /// Maximum quantity precision
    #[serde(default)]
    pub max_quantity_precision: Option<i32>,
    /// Maximum price precision
    #[serde(default)]
    pub max_price_precision: Option<i32>,
    /// Routable
    #[serde(default)]
    pub routable: bool,
}

/// A stock or ETF.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Equity {
    /// Instrument ID
    #[serde(default)]
    pub id: Option<u64>,
    /// Symbol
    pub symbol: String,
    /// Instrument type
    #[serde(default)]
    pub instrument_type: Option<InstrumentType>,
    /// CUSIP
    #[serde(default)]
    pub cusip: Option<String>,
    /// Short description
    #[serde(default)]
    pub short_description: Option<String>,
    /// Index
    #[serde(default)]
    pub is_index: bool,
    /// Listing market
    #[serde(default)]
    pub listed_market: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Borrow status
    #[serde(default)]
    pub lendability: Option<Lendability>,
    /// Annual borrow rate
    #[serde(default)]
    pub borrow_rate: Option<Decimal>,
    /// Halted
    #[serde(default)]
    pub halted_at: Option<DateTime<Utc>>,
    /// Instrument collection for market hours
    #[serde(default)]
    pub market_time_instrument_collection: Option<String>,
    /// Only closing orders accepted
    #[serde(default)]
    pub is_closing_only: bool,
    /// Only closing option orders accepted
    #[serde(default)]
    pub is_options_closing_only: bool,
    /// Accepting orders
    #[serde(default)]
    pub active: bool,
    /// Fractional quantities accepted
    #[serde(default)]
    pub is_fractional_quantity_eligible: bool,
    /// Illiquid
    #[serde(default)]
    pub is_illiquid: bool,
    /// ETF
    #[serde(default)]
    pub is_etf: bool,
    /// Streamer symbol
    #[serde(default)]
    pub streamer_symbol: Option<String>,
    /// Stock price bands
    #[serde(default)]
    pub tick_sizes: Vec<TickSize>,
    /// Option price bands
    #[serde(default)]
    pub option_tick_sizes: Vec<TickSize>,
}

impl_instrument!(Equity, InstrumentType::Equity);

/// An option on a stock or index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EquityOption {
    /// OCC symbol
    pub symbol: String,
    /// Instrument type
    #[serde(default)]
    pub instrument_type: Option<InstrumentType>,
    /// Accepting orders
    #[serde(default)]
    pub active: bool,
    /// Strike
    pub strike_price: Decimal,
    /// Root symbol
    #[serde(default)]
    pub root_symbol: Option<String>,
    /// Underlying symbol
    pub underlying_symbol: String,
    /// Expiration date
    pub expiration_date: NaiveDate,
    /// American or European
    #[serde(default)]
    pub exercise_style: Option<String>,
    /// Contract size
    #[serde(default)]
    pub shares_per_contract: Option<i32>,
    /// Call or put
    pub option_type: OptionType,
    /// Standard or non-standard chain
    #[serde(default)]
    pub option_chain_type: Option<String>,
    /// Regular, Weekly, Quarterly, ...
    #[serde(default)]
    pub expiration_type: Option<String>,
    /// AM or PM settlement
    #[serde(default)]
    pub settlement_type: Option<String>,
    /// Trading stops
    #[serde(default)]
    pub stops_trading_at: Option<DateTime<Utc>>,
    /// Market time instrument collection
    #[serde(default)]
    pub market_time_instrument_collection: Option<String>,
    /// Days to expiration
    #[serde(default)]
    pub days_to_expiration: Option<i32>,
    /// Expires
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Only closing orders accepted
    #[serde(default)]
    pub is_closing_only: bool,
    /// Streamer symbol
    #[serde(default)]
    pub streamer_symbol: Option<String>,
}

impl_instrument!(EquityOption, InstrumentType::EquityOption);

impl EquityOption {
    /// Contract multiplier; 100 when not sent.
    pub fn multiplier(&self) -> i32 {
        self.shares_per_contract.unwrap_or(100)
    }

    /// Returns `true` once the expiration date is before `today`.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.expiration_date < today
    }
}

/// Roll schedule of a futures product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FutureRoll {
    /// Roll name
    #[serde(default)]
    pub name: Option<String>,
    /// Active contract count
    #[serde(default)]
    pub active_count: Option<i32>,
    /// Cash settled
    #[serde(default)]
    pub cash_settled: bool,
    /// Business days before expiration to roll
    #[serde(default)]
    pub business_days_offset: Option<i32>,
    /// Roll on first notice date
    #[serde(default)]
    pub first_notice: bool,
}

/// A futures product such as `ES`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FutureProduct {
    /// Root symbol (e.g. `/ES`)
    pub root_symbol: String,
    /// Product code (e.g. `ES`)
    pub code: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Clearing code
    #[serde(default)]
    pub clearing_code: Option<String>,
    /// Clearing exchange code
    #[serde(default)]
    pub clearing_exchange_code: Option<String>,
    /// Clearport code
    #[serde(default)]
    pub clearport_code: Option<String>,
    /// Legacy code
    #[serde(default)]
    pub legacy_code: Option<String>,
    /// Exchange (e.g. `CME`)
    #[serde(default)]
    pub exchange: Option<String>,
    /// Legacy exchange code
    #[serde(default)]
    pub legacy_exchange_code: Option<String>,
    /// Product type (e.g. `Physical`)
    #[serde(default)]
    pub product_type: Option<String>,
    /// Listed month codes
    #[serde(default)]
    pub listed_months: Vec<String>,
    /// Actively traded month codes
    #[serde(default)]
    pub active_months: Vec<String>,
    /// Notional multiplier
    #[serde(default)]
    pub notional_multiplier: Option<Decimal>,
    /// Tick size
    #[serde(default)]
    pub tick_size: Option<Decimal>,
    /// Display factor
    #[serde(default)]
    pub display_factor: Option<Decimal>,
    /// Streamer exchange code
    #[serde(default)]
    pub streamer_exchange_code: Option<String>,
    /// Small notional contract
    #[serde(default)]
    pub small_notional: bool,
    /// Back month first on calendar spreads
    #[serde(default)]
    pub back_month_first_calendar_symbol: bool,
    /// Roll on first notice date
    #[serde(default)]
    pub first_notice: bool,
    /// Cash settled
    #[serde(default)]
    pub cash_settled: bool,
    /// Security group
    #[serde(default)]
    pub security_group: Option<String>,
    /// Market sector
    #[serde(default)]
    pub market_sector: Option<String>,
    /// Roll schedule
    #[serde(default)]
    pub roll: Option<FutureRoll>,
}

/// A futures contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Future {
    /// Symbol (e.g. `/ESZ4`)
    pub symbol: String,
    /// Instrument type
    #[serde(default)]
    pub instrument_type: Option<InstrumentType>,
    /// Product code
    #[serde(default)]
    pub product_code: Option<String>,
    /// Contract size
    #[serde(default)]
    pub contract_size: Option<Decimal>,
    /// Tick size
    #[serde(default)]
    pub tick_size: Option<Decimal>,
    /// Notional multiplier
    #[serde(default)]
    pub notional_multiplier: Option<Decimal>,
    /// Main fraction
    #[serde(default)]
    pub main_fraction: Option<Decimal>,
    /// Sub fraction
    #[serde(default)]
    pub sub_fraction: Option<Decimal>,
    /// Display factor
    #[serde(default)]
    pub display_factor: Option<Decimal>,
    /// Last trade date
    #[serde(default)]
    pub last_trade_date: Option<NaiveDate>,
    /// Expiration date
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    /// First day only closing orders are accepted
    #[serde(default)]
    pub closing_only_date: Option<NaiveDate>,
    /// Accepting orders
    #[serde(default)]
    pub active: bool,
    /// Front month
    #[serde(default)]
    pub active_month: bool,
    /// Next front month
    #[serde(default)]
    pub next_active_month: bool,
    /// Only closing orders accepted
    #[serde(default)]
    pub is_closing_only: bool,
    /// Trading stops
    #[serde(default)]
    pub stops_trading_at: Option<DateTime<Utc>>,
    /// Expires
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Product group
    #[serde(default)]
    pub product_group: Option<String>,
    /// Exchange
    #[serde(default)]
    pub exchange: Option<String>,
    /// Roll target
    #[serde(default)]
    pub roll_target_symbol: Option<String>,
    /// Streamer exchange code
    #[serde(default)]
    pub streamer_exchange_code: Option<String>,
    /// Streamer symbol
    #[serde(default)]
    pub streamer_symbol: Option<String>,
    /// Back month first on calendar spreads
    #[serde(default)]
    pub back_month_first_calendar_symbol: bool,
    /// Tradeable
    #[serde(default)]
    pub is_tradeable: bool,
    /// Product
    #[serde(default)]
    pub future_product: Option<FutureProduct>,
    /// Price bands
    #[serde(default)]
    pub tick_sizes: Vec<TickSize>,
    /// Option price bands
    #[serde(default)]
    pub option_tick_sizes: Vec<TickSize>,
    /// Spread price bands
    #[serde(default)]
    pub spread_tick_sizes: Vec<TickSize>,
}

impl_instrument!(Future, InstrumentType::Future);

/// An option product on a futures product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FutureOptionProduct {
    /// Root symbol (e.g. `EW4`)
    pub root_symbol: String,
    /// Cash settled
    #[serde(default)]
    pub cash_settled: bool,
    /// Product code
    #[serde(default)]
    pub code: Option<String>,
    /// Legacy code
    #[serde(default)]
    pub legacy_code: Option<String>,
    /// Clearport code
    #[serde(default)]
    pub clearport_code: Option<String>,
    /// Clearing code
    #[serde(default)]
    pub clearing_code: Option<String>,
    /// Clearing exchange code
    #[serde(default)]
    pub clearing_exchange_code: Option<String>,
    /// Clearing price multiplier
    #[serde(default)]
    pub clearing_price_multiplier: Option<Decimal>,
    /// Display factor
    #[serde(default)]
    pub display_factor: Option<Decimal>,
    /// Exchange
    #[serde(default)]
    pub exchange: Option<String>,
    /// Product type
    #[serde(default)]
    pub product_type: Option<String>,
    /// Expiration type
    #[serde(default)]
    pub expiration_type: Option<String>,
    /// Days between expiration and settlement
    #[serde(default)]
    pub settlement_delay_days: Option<i32>,
    /// Rolls over
    #[serde(default)]
    pub is_rollover: bool,
    /// Market sector
    #[serde(default)]
    pub market_sector: Option<String>,
    /// Underlying futures product
    #[serde(default)]
    pub future_product: Option<FutureProduct>,
}

/// An option on a futures contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FutureOption {
    /// Symbol (e.g. `./ESZ9 EW4U9 190927P2975`)
    pub symbol: String,
    /// Instrument type
    #[serde(default)]
    pub instrument_type: Option<InstrumentType>,
    /// Underlying future
    pub underlying_symbol: String,
    /// Product code
    #[serde(default)]
    pub product_code: Option<String>,
    /// Expiration date
    pub expiration_date: NaiveDate,
    /// Root symbol
    #[serde(default)]
    pub root_symbol: Option<String>,
    /// Option root symbol
    #[serde(default)]
    pub option_root_symbol: Option<String>,
    /// Strike
    pub strike_price: Decimal,
    /// Exchange
    #[serde(default)]
    pub exchange: Option<String>,
    /// Exchange symbol
    #[serde(default)]
    pub exchange_symbol: Option<String>,
    /// Streamer symbol
    #[serde(default)]
    pub streamer_symbol: Option<String>,
    /// Call or put
    pub option_type: OptionType,
    /// American or European
    #[serde(default)]
    pub exercise_style: Option<String>,
    /// Vanilla option
    #[serde(default)]
    pub is_vanilla: bool,
    /// Primary deliverable
    #[serde(default)]
    pub is_primary_deliverable: bool,
    /// Future price ratio
    #[serde(default)]
    pub future_price_ratio: Option<Decimal>,
    /// Multiplier
    #[serde(default)]
    pub multiplier: Option<Decimal>,
    /// Underlying count
    #[serde(default)]
    pub underlying_count: Option<Decimal>,
    /// Confirmed
    #[serde(default)]
    pub is_confirmed: bool,
    /// Notional value
    #[serde(default)]
    pub notional_value: Option<Decimal>,
    /// Display factor
    #[serde(default)]
    pub display_factor: Option<Decimal>,
    /// Security exchange
    #[serde(default)]
    pub security_exchange: Option<String>,
    /// SX ID
    #[serde(default)]
    pub sx_id: Option<String>,
    /// Settlement type
    #[serde(default)]
    pub settlement_type: Option<String>,
    /// Strike factor
    #[serde(default)]
    pub strike_factor: Option<Decimal>,
    /// Maturity date
    #[serde(default)]
    pub maturity_date: Option<NaiveDate>,
    /// Exercisable weekly
    #[serde(default)]
    pub is_exercisable_weekly: bool,
    /// Last trade time
    #[serde(default)]
    pub last_trade_time: Option<String>,
    /// Days to expiration
    #[serde(default)]
    pub days_to_expiration: Option<i32>,
    /// Only closing orders accepted
    #[serde(default)]
    pub is_closing_only: bool,
    /// Accepting orders
    #[serde(default)]
    pub active: bool,
    /// Trading stops
    #[serde(default)]
    pub stops_trading_at: Option<DateTime<Utc>>,
    /// Expires
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Option product
    #[serde(default)]
    pub future_option_product: Option<FutureOptionProduct>,
}

impl_instrument!(FutureOption, InstrumentType::FutureOption);

/// Quantity precision accepted for an instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct QuantityDecimalPrecision {
    /// Instrument type
    pub instrument_type: InstrumentType,
    /// Symbol; absent when the rule covers the whole type
    #[serde(default)]
    pub symbol: Option<String>,
    /// Decimal places
    pub value: i32,
    /// Decimal places of the minimum increment
    #[serde(default)]
    pub minimum_increment_precision: Option<i32>,
}

/// A warrant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Warrant {
    /// Symbol
    pub symbol: String,
    /// Instrument type
    #[serde(default)]
    pub instrument_type: Option<InstrumentType>,
    /// Listing market
    #[serde(default)]
    pub listed_market: Option<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Only closing orders accepted
    #[serde(default)]
    pub is_closing_only: bool,
    /// Accepting orders
    #[serde(default)]
    pub active: bool,
    /// Streamer symbol
    #[serde(default)]
    pub streamer_symbol: Option<String>,
}

impl_instrument!(Warrant, InstrumentType::Warrant);

/// Equity option chain grouped by expiration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NestedOptionChain {
    /// Underlying symbol
    pub underlying_symbol: String,
    /// Root symbol
    #[serde(default)]
    pub root_symbol: Option<String>,
    /// Standard or non-standard
    #[serde(default)]
    pub option_chain_type: Option<String>,
    /// Contract size
    #[serde(default)]
    pub shares_per_contract: Option<i32>,
    /// Price bands
    #[serde(default)]
    pub tick_sizes: Vec<TickSize>,
    /// Deliverables
    #[serde(default)]
    pub deliverables: Vec<Deliverable>,
    /// Expirations
    #[serde(default)]
    pub expirations: Vec<OptionExpiration>,
}

/// One expiration of a nested chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OptionExpiration {
    /// Regular, Weekly, ...
    #[serde(default)]
    pub expiration_type: Option<String>,
    /// Expiration date
    pub expiration_date: NaiveDate,
    /// Days to expiration
    #[serde(default)]
    pub days_to_expiration: Option<i32>,
    /// AM or PM settlement
    #[serde(default)]
    pub settlement_type: Option<String>,
    /// Strikes
    #[serde(default)]
    pub strikes: Vec<OptionStrike>,
}

impl OptionExpiration {
    /// The strike listed at `price`.
    pub fn strike(&self, price: Decimal) -> Option<&OptionStrike> {
        self.strikes.iter().find(|s| s.strike_price == price)
    }
}

/// A strike with its call and put symbols.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OptionStrike {
    /// Strike
    pub strike_price: Decimal,
    /// Call symbol
    #[serde(default)]
    pub call: Option<String>,
    /// Call streamer symbol
    #[serde(default)]
    pub call_streamer_symbol: Option<String>,
    /// Put symbol
    #[serde(default)]
    pub put: Option<String>,
    /// Put streamer symbol
    #[serde(default)]
    pub put_streamer_symbol: Option<String>,
}

/// Equity option chain as flat symbol lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CompactOptionChain {
    /// Underlying symbol
    pub underlying_symbol: String,
    /// Root symbol
    #[serde(default)]
    pub root_symbol: Option<String>,
    /// Standard or non-standard
    #[serde(default)]
    pub option_chain_type: Option<String>,
    /// AM or PM settlement
    #[serde(default)]
    pub settlement_type: Option<String>,
    /// Contract size
    #[serde(default)]
    pub shares_per_contract: Option<i32>,
    /// Regular, Weekly, ...
    #[serde(default)]
    pub expiration_type: Option<String>,
    /// Deliverables
    #[serde(default)]
    pub deliverables: Vec<Deliverable>,
    /// OCC symbols
    #[serde(default)]
    pub symbols: Vec<String>,
    /// Streamer symbols, aligned with `symbols`
    #[serde(default)]
    pub streamer_symbols: Vec<String>,
}

/// Futures option chains grouped by future and expiration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NestedFutureOptionChain {
    /// Underlying futures
    #[serde(default)]
    pub futures: Vec<NestedFuture>,
    /// Chains, one per option product
    #[serde(default)]
    pub option_chains: Vec<FutureOptionChain>,
}

/// A future listed in a nested futures option chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NestedFuture {
    /// Symbol
    pub symbol: String,
    /// Root symbol
    #[serde(default)]
    pub root_symbol: Option<String>,
    /// Expiration date
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    /// Days to expiration
    #[serde(default)]
    pub days_to_expiration: Option<i32>,
    /// Front month
    #[serde(default)]
    pub active_month: bool,
    /// Next front month
    #[serde(default)]
    pub next_active_month: bool,
    /// Trading stops
    #[serde(default)]
    pub stops_trading_at: Option<DateTime<Utc>>,
    /// Expires
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Chain of one futures option product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FutureOptionChain {
    /// Underlying product symbol
    pub underlying_symbol: String,
    /// Root symbol
    #[serde(default)]
    pub root_symbol: Option<String>,
    /// American or European
    #[serde(default)]
    pub exercise_style: Option<String>,
    /// Expirations
    #[serde(default)]
    pub expirations: Vec<FutureOptionExpiration>,
}

/// One expiration of a futures option chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FutureOptionExpiration {
    /// Underlying future
    pub underlying_symbol: String,
    /// Root symbol
    #[serde(default)]
    pub root_symbol: Option<String>,
    /// Option root symbol
    #[serde(default)]
    pub option_root_symbol: Option<String>,
    /// Option contract symbol (e.g. `EW4U9`)
    #[serde(default)]
    pub option_contract_symbol: Option<String>,
    /// Asset
    #[serde(default)]
    pub asset: Option<String>,
    /// Expiration date
    pub expiration_date: NaiveDate,
    /// Days to expiration
    #[serde(default)]
    pub days_to_expiration: Option<i32>,
    /// Regular, Weekly, ...
    #[serde(default)]
    pub expiration_type: Option<String>,
    /// Settlement type
    #[serde(default)]
    pub settlement_type: Option<String>,
    /// Notional value
    #[serde(default)]
    pub notional_value: Option<Decimal>,
    /// Display factor
    #[serde(default)]
    pub display_factor: Option<Decimal>,
    /// Strike factor
    #[serde(default)]
    pub strike_factor: Option<Decimal>,
    /// Trading stops
    #[serde(default)]
    pub stops_trading_at: Option<DateTime<Utc>>,
    /// Expires
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Price bands
    #[serde(default)]
    pub tick_sizes: Vec<TickSize>,
    /// Strikes
    #[serde(default)]
    pub strikes: Vec<OptionStrike>,
}

/// A symbol search hit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SymbolData {
    /// Symbol
    pub symbol: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Listing market
    #[serde(default)]
    pub listed_market: Option<String>,
    /// Price increments
    #[serde(default)]
    pub price_increments: Option<String>,
    /// Trading hours
    #[serde(default)]
    pub trading_hours: Option<String>,
    /// Options listed
    #[serde(default)]
    pub options: bool,
    /// Instrument type
    #[serde(default)]
    pub instrument_type: Option<InstrumentType>,
}
