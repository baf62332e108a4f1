//! Builders for exchange symbols.
//!
//! These are plain formatting functions: they do not validate their inputs
//! and always produce a string.
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use tastytrade::models::{EquityOptionsSymbology, FutureSymbology, MonthCode, OptionType};
//!
//! let occ = EquityOptionsSymbology {
//!     symbol: "AAPL".into(),
//!     strike: dec!(185),
//!     option_type: OptionType::Call,
//!     expiration: NaiveDate::from_ymd_opt(2023, 6, 16).unwrap(),
//! };
//! assert_eq!(occ.build(), "AAPL  230616C00185000");
//!
//! let future = FutureSymbology {
//!     product_code: "ES".into(),
//!     month_code: MonthCode::December,
//!     year_digit: 9,
//! };
//! assert_eq!(future.build(), "/ESZ9");
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use super::enums::{MonthCode, OptionType};

/// Strike in units of `10^-dp`, half away from zero, left-padded with
/// zeros to `width` digits.
fn scaled_strike(strike: Decimal, dp: u32, width: usize) -> String {
    let rounded = strike.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let text = rounded.abs().to_string();
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let digits = format!("{}{:0<width$}", whole, frac, width = dp as usize);
    let digits = match digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}{:0>width$}", sign, digits, width = width)
}

/// OCC symbol of an equity option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquityOptionsSymbology {
    /// Underlying ticker, at most six characters
    pub symbol: String,
    /// Strike price
    pub strike: Decimal,
    /// Call or put
    pub option_type: OptionType,
    /// Expiration date
    pub expiration: NaiveDate,
}

impl EquityOptionsSymbology {
    /// Format as `RRRRRRyymmddTSSSSSSSS`: the ticker padded to six
    /// characters, expiration, type letter, and strike in thousandths.
    pub fn build(&self) -> String {
        format!(
            "{:<6}{}{}{}",
            self.symbol,
            self.expiration.format("%y%m%d"),
            self.option_type.as_char(),
            scaled_strike(self.strike, 3, 8),
        )
    }
}

impl fmt::Display for EquityOptionsSymbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl FromStr for EquityOptionsSymbology {
    type Err = crate::Error;

    /// Parse a 21-character OCC symbol.
    fn from_str(s: &str) -> crate::Result<Self> {
        let invalid = || crate::Error::InvalidInput(format!("invalid OCC symbol: {s:?}"));

        if s.len() != 21 || !s.is_ascii() {
            return Err(invalid());
        }
        let (root, rest) = s.split_at(6);
        let (date, rest) = rest.split_at(6);
        let (kind, strike) = rest.split_at(1);

        let expiration = NaiveDate::parse_from_str(date, "%y%m%d").map_err(|_| invalid())?;
        let option_type = match kind {
            "C" => OptionType::Call,
            "P" => OptionType::Put,
            _ => return Err(invalid()),
        };
        let thousandths: i64 = strike.parse().map_err(|_| invalid())?;

        Ok(Self {
            symbol: root.trim_end().to_string(),
            strike: Decimal::new(thousandths, 3).normalize(),
            option_type,
            expiration,
        })
    }
}

/// Symbol of a futures contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FutureSymbology {
    /// Product code (e.g. `ES`)
    pub product_code: String,
    /// Delivery month
    pub month_code: MonthCode,
    /// Last digit of the delivery year
    pub year_digit: u8,
}

impl FutureSymbology {
    /// Format as `/` + product + month letter + year digit.
    pub fn build(&self) -> String {
        format!(
            "/{}{}{}",
            self.product_code,
            self.month_code.as_char(),
            self.year_digit
        )
    }
}

impl fmt::Display for FutureSymbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

/// Symbol of an option on a futures contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FutureOptionsSymbology {
    /// Option contract code (e.g. `EW4U9`)
    pub option_contract_code: String,
    /// Underlying futures symbol (e.g. `/ESZ9`)
    pub future_contract_code: String,
    /// Call or put
    pub option_type: OptionType,
    /// Strike price
    pub strike: Decimal,
    /// Expiration date
    pub expiration: NaiveDate,
}

impl FutureOptionsSymbology {
    /// Format as `.` + future + space + option code + space + `yymmdd`,
    /// type letter, and whole-number strike.
    pub fn build(&self) -> String {
        format!(
            ".{} {} {}{}{}",
            self.future_contract_code,
            self.option_contract_code,
            self.expiration.format("%y%m%d"),
            self.option_type.as_char(),
            scaled_strike(self.strike, 0, 0),
        )
    }
}

impl fmt::Display for FutureOptionsSymbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
