//! Closed sets of API string values.
//!
//! Each enum maps to the exact wire spelling. Enums the API is known to
//! extend carry a `#[serde(other)]` fallback so new values do not break
//! decoding.

use serde::{Deserialize, Serialize};

/// Kind of tradeable instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InstrumentType {
    /// Stock or ETF
    #[default]
    Equity,
    /// Option on an equity
    #[serde(rename = "Equity Option")]
    EquityOption,
    /// Offering of an equity
    #[serde(rename = "Equity Offering")]
    EquityOffering,
    /// Futures contract
    Future,
    /// Option on a futures contract
    #[serde(rename = "Future Option")]
    FutureOption,
    /// Cryptocurrency pair
    Cryptocurrency,
    /// Bond
    Bond,
    /// Fixed income security
    #[serde(rename = "Fixed Income Security")]
    FixedIncomeSecurity,
    /// Liquidity pool
    #[serde(rename = "Liquidity Pool")]
    LiquidityPool,
    /// Warrant
    Warrant,
    /// Index
    Index,
    /// Value added after this crate was written
    #[serde(other)]
    Unknown,
}

impl InstrumentType {
    /// Returns `true` for options and futures.
    pub fn is_derivative(&self) -> bool {
        matches!(
            self,
            InstrumentType::EquityOption | InstrumentType::Future | InstrumentType::FutureOption
        )
    }
}

/// How an order is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Fill at the limit price or better
    Limit,
    /// Fill at the prevailing price
    Market,
    /// Limit priced to cross the spread
    #[serde(rename = "Marketable Limit")]
    MarketableLimit,
    /// Market order armed at a stop price
    Stop,
    /// Limit order armed at a stop price
    #[serde(rename = "Stop Limit")]
    StopLimit,
    /// Market order sized by dollar value
    #[serde(rename = "Notional Market")]
    NotionalMarket,
}

impl OrderType {
    /// Returns `true` if the order carries a limit price.
    pub fn requires_price(&self) -> bool {
        matches!(
            self,
            OrderType::Limit | OrderType::MarketableLimit | OrderType::StopLimit
        )
    }

    /// Returns `true` if the order carries a stop trigger.
    pub fn requires_stop_trigger(&self) -> bool {
        matches!(self, OrderType::Stop | OrderType::StopLimit)
    }
}

/// Leg action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderAction {
    /// Open a long derivative position
    #[serde(rename = "Buy to Open")]
    BuyToOpen,
    /// Close a short derivative position
    #[serde(rename = "Buy to Close")]
    BuyToClose,
    /// Open a short derivative position
    #[serde(rename = "Sell to Open")]
    SellToOpen,
    /// Close a long derivative position
    #[serde(rename = "Sell to Close")]
    SellToClose,
    /// Equity or crypto buy
    Buy,
    /// Equity or crypto sell
    Sell,
}

impl OrderAction {
    /// Returns `true` for the buying side.
    pub fn is_buy(&self) -> bool {
        matches!(
            self,
            OrderAction::BuyToOpen | OrderAction::BuyToClose | OrderAction::Buy
        )
    }

    /// Returns `true` for the selling side.
    pub fn is_sell(&self) -> bool {
        !self.is_buy()
    }

    /// Returns `true` if the action opens a position.
    pub fn is_opening(&self) -> bool {
        matches!(
            self,
            OrderAction::BuyToOpen | OrderAction::SellToOpen | OrderAction::Buy
        )
    }
}

/// How long an order stays working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Until the end of the regular session
    Day,
    /// Until cancelled
    #[serde(rename = "GTC")]
    Gtc,
    /// Until the `gtc-date`
    #[serde(rename = "GTD")]
    Gtd,
    /// Day order eligible for extended hours
    Ext,
    /// GTC order eligible for extended hours
    #[serde(rename = "GTC Ext")]
    GtcExt,
    /// Fill what is possible immediately, cancel the rest
    #[serde(rename = "IOC")]
    Ioc,
}

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Accepted by tastytrade
    Received,
    /// Sent toward the exchange
    Routed,
    /// Between routing and acknowledgement
    #[serde(rename = "In Flight")]
    InFlight,
    /// Working at the exchange
    Live,
    /// Cancel sent, not yet confirmed
    #[serde(rename = "Cancel Requested")]
    CancelRequested,
    /// Replace sent, not yet confirmed
    #[serde(rename = "Replace Requested")]
    ReplaceRequested,
    /// Waiting on another order in a complex order
    Contingent,
    /// Fully filled
    Filled,
    /// Cancelled
    Cancelled,
    /// Expired
    Expired,
    /// Rejected
    Rejected,
    /// Removed by the system
    Removed,
    /// Partially filled, remainder removed
    #[serde(rename = "Partially Removed")]
    PartiallyRemoved,
    /// Value added after this crate was written
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Returns `true` once the order can no longer change.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Filled
                | OrderStatus::Cancelled
                | OrderStatus::Expired
                | OrderStatus::Rejected
                | OrderStatus::Removed
                | OrderStatus::PartiallyRemoved
        )
    }

    /// Returns `true` while the order can still fill.
    pub fn is_working(&self) -> bool {
        matches!(
            self,
            OrderStatus::Received
                | OrderStatus::Routed
                | OrderStatus::InFlight
                | OrderStatus::Live
                | OrderStatus::Contingent
        )
    }

    /// Returns `true` if the order may still be cancelled or replaced.
    pub fn is_editable(&self) -> bool {
        matches!(self, OrderStatus::Received | OrderStatus::Live)
    }
}

/// Sign of an accompanying money amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceEffect {
    /// Money received
    Credit,
    /// Money paid
    Debit,
    /// Zero amount
    None,
    /// Value added after this crate was written
    #[serde(other)]
    Unknown,
}

impl PriceEffect {
    /// `1` for credits, `-1` for debits, `0` otherwise.
    pub fn sign(&self) -> i32 {
        match self {
            PriceEffect::Credit => 1,
            PriceEffect::Debit => -1,
            PriceEffect::None | PriceEffect::Unknown => 0,
        }
    }

    /// Signed form of an unsigned amount carrying this effect.
    pub fn apply(&self, amount: rust_decimal::Decimal) -> rust_decimal::Decimal {
        amount.abs() * rust_decimal::Decimal::from(self.sign())
    }
}

/// Side of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityDirection {
    /// Long
    Long,
    /// Short
    Short,
    /// Closed out
    Zero,
    /// Value added after this crate was written
    #[serde(other)]
    Unknown,
}

/// Account margin type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarginOrCash {
    /// Margin account
    Margin,
    /// Cash account
    Cash,
    /// IRA with limited margin
    #[serde(rename = "IRA Margin")]
    IraMargin,
}

/// Kind of complex order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplexOrderType {
    /// One cancels other
    #[serde(rename = "OCO")]
    Oco,
    /// One triggers one cancels other
    #[serde(rename = "OTOCO")]
    Otoco,
    /// One triggers other
    #[serde(rename = "OTO")]
    Oto,
}

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    /// Call
    #[serde(rename = "C")]
    Call,
    /// Put
    #[serde(rename = "P")]
    Put,
}

impl OptionType {
    /// The single-letter code used in option symbols.
    pub fn as_char(&self) -> char {
        match self {
            OptionType::Call => 'C',
            OptionType::Put => 'P',
        }
    }

    /// Returns `true` for calls.
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns `true` for puts.
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }
}

/// Futures delivery month code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MonthCode {
    /// January
    #[serde(rename = "F")]
    January,
    /// February
    #[serde(rename = "G")]
    February,
    /// March
    #[serde(rename = "H")]
    March,
    /// April
    #[serde(rename = "J")]
    April,
    /// May
    #[serde(rename = "K")]
    May,
    /// June
    #[serde(rename = "M")]
    June,
    /// July
    #[serde(rename = "N")]
    July,
    /// August
    #[serde(rename = "Q")]
    August,
    /// September
    #[serde(rename = "U")]
    September,
    /// October
    #[serde(rename = "V")]
    October,
    /// November
    #[serde(rename = "X")]
    November,
    /// December
    #[serde(rename = "Z")]
    December,
}

impl MonthCode {
    const ALL: [MonthCode; 12] = [
        MonthCode::January,
        MonthCode::February,
        MonthCode::March,
        MonthCode::April,
        MonthCode::May,
        MonthCode::June,
        MonthCode::July,
        MonthCode::August,
        MonthCode::September,
        MonthCode::October,
        MonthCode::November,
        MonthCode::December,
    ];

    /// The exchange letter for this month.
    pub fn as_char(&self) -> char {
        match self {
            MonthCode::January => 'F',
            MonthCode::February => 'G',
            MonthCode::March => 'H',
            MonthCode::April => 'J',
            MonthCode::May => 'K',
            MonthCode::June => 'M',
            MonthCode::July => 'N',
            MonthCode::August => 'Q',
            MonthCode::September => 'U',
            MonthCode::October => 'V',
            MonthCode::November => 'X',
            MonthCode::December => 'Z',
        }
    }

    /// Month for a calendar month number (1 = January).
    pub fn from_month(month: u32) -> Option<Self> {
        month
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize))
            .copied()
    }

    /// Month for an exchange letter.
    pub fn from_char(code: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.as_char() == code)
    }
}

/// Access granted to a customer on an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthorityLevel {
    /// Owner
    Owner,
    /// May trade
    TradeOnly,
    /// May view
    ReadOnly,
}

/// What a triggered condition does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionAction {
    /// Send the order
    Route,
    /// Cancel the order
    Cancel,
}

/// Comparator in a price condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceComparison {
    /// Greater than or equal
    #[serde(rename = "GTE")]
    Gte,
    /// Less than or equal
    #[serde(rename = "LTE")]
    Lte,
}

/// Category of an account transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionType {
    /// Fill
    #[default]
    Trade,
    /// Exercise, assignment, or expiration
    #[serde(rename = "Receive Deliver")]
    ReceiveDeliver,
    /// Dividend
    Dividend,
    /// Interest
    Interest,
    /// Deposit or withdrawal
    #[serde(rename = "Money Movement")]
    MoneyMovement,
    /// Fee
    Fee,
    /// Credit or debit
    #[serde(rename = "Credit/Debit")]
    CreditDebit,
    /// Adjustment
    #[serde(rename = "Balance Adjustment")]
    BalanceAdjustment,
    /// Value added after this crate was written
    #[serde(other)]
    Other,
}

/// Borrow status of an equity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lendability {
    /// Shortable without a locate
    #[serde(rename = "Easy To Borrow")]
    EasyToBorrow,
    /// Shortable after a locate
    #[serde(rename = "Locate Required")]
    LocateRequired,
    /// Requires a pre-borrow
    Preborrow,
    /// Value added after this crate was written
    #[serde(other)]
    Unknown,
}

/// Sort direction for history endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first
    Desc,
}

/// Bucket size for net liquidating value history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeBack {
    /// One day
    #[serde(rename = "1d")]
    OneDay,
    /// One month
    #[serde(rename = "1m")]
    OneMonth,
    /// Three months
    #[serde(rename = "3m")]
    ThreeMonths,
    /// Six months
    #[serde(rename = "6m")]
    SixMonths,
    /// One year
    #[serde(rename = "1y")]
    OneYear,
    /// Everything on record
    #[serde(rename = "all")]
    All,
}

/// Intraday snapshot point for balance snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnapshotTimeOfDay {
    /// End of day
    #[serde(rename = "EOD")]
    EndOfDay,
    /// Beginning of day
    #[serde(rename = "BOD")]
    BeginningOfDay,
}
