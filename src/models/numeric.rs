//! Numeric scalar for values the API quotes as strings.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A 32-bit float read from a quoted JSON numeral.
///
/// The API sends analytics values as strings (`"155.55"`), sometimes as
/// `"NaN"` or `""`. Both of those read as zero. Writing always produces a
/// bare JSON number, so the codec is intentionally asymmetric.
///
/// ```
/// use tastytrade::models::StringF32;
///
/// let v: StringF32 = serde_json::from_str("\"155.55\"").unwrap();
/// assert_eq!(v.value(), 155.55);
/// assert_eq!(serde_json::to_string(&v).unwrap(), "155.55");
///
/// let nan: StringF32 = serde_json::from_str("\"NaN\"").unwrap();
/// assert_eq!(serde_json::to_string(&nan).unwrap(), "0");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct StringF32(pub f32);

impl StringF32 {
    /// The wrapped value.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for StringF32 {
    fn from(v: f32) -> Self {
        StringF32(v)
    }
}

impl From<StringF32> for f32 {
    fn from(v: StringF32) -> Self {
        v.0
    }
}

impl fmt::Display for StringF32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for StringF32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // non-finite values have no JSON number form
        let v = if self.0.is_finite() { self.0 } else { 0.0 };
        // whole numbers go out without a fractional part
        if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
            serializer.serialize_i64(v as i64)
        } else {
            serializer.serialize_f32(v)
        }
    }
}

struct StringF32Visitor;

impl<'de> Visitor<'de> for StringF32Visitor {
    type Value = StringF32;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a quoted decimal numeral, \"NaN\", or \"\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<StringF32, E> {
        if v.is_empty() || v == "NaN" {
            return Ok(StringF32(0.0));
        }
        let parsed = v
            .parse::<f32>()
            .map_err(|err| E::custom(format!("invalid numeric string {:?}: {}", v, err)))?;
        if !parsed.is_finite() {
            return Err(E::custom(format!("invalid numeric string {:?}: not finite", v)));
        }
        Ok(StringF32(parsed))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<StringF32, E> {
        Ok(StringF32(v as f32))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<StringF32, E> {
        Ok(StringF32(v as f32))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<StringF32, E> {
        Ok(StringF32(v as f32))
    }
}

impl<'de> Deserialize<'de> for StringF32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StringF32Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> serde_json::Result<StringF32> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_decimal_string_round_trip() {
        let v = decode("\"155.55\"").unwrap();
        assert_eq!(v, StringF32(155.55));
        assert_eq!(serde_json::to_string(&v).unwrap(), "155.55");
    }

    #[test]
    fn test_nan_and_empty_read_as_zero() {
        for input in ["\"NaN\"", "\"\""] {
            let v = decode(input).unwrap();
            assert_eq!(v.value(), 0.0);
            assert_eq!(serde_json::to_string(&v).unwrap(), "0");
        }
    }

    #[test]
    fn test_non_numeric_string_fails() {
        assert!(decode("\".\"").is_err());
        assert!(decode("\"abc\"").is_err());
        assert!(decode("\"12,5\"").is_err());
    }

    #[test]
    fn test_non_finite_string_fails() {
        for input in ["\"nan\"", "\"inf\"", "\"infinity\"", "\"-Infinity\"", "\"NAN\"", "\"1e40\""] {
            assert!(decode(input).is_err(), "{} should not decode", input);
        }
    }

    #[test]
    fn test_non_finite_value_encodes_as_number() {
        assert_eq!(serde_json::to_string(&StringF32(f32::NAN)).unwrap(), "0");
        assert_eq!(serde_json::to_string(&StringF32(f32::INFINITY)).unwrap(), "0");
    }

    #[test]
    fn test_whole_and_negative_values() {
        let v = decode("\"-2975\"").unwrap();
        assert_eq!(serde_json::to_string(&v).unwrap(), "-2975");

        let v = decode("\"0.25\"").unwrap();
        assert_eq!(serde_json::to_string(&v).unwrap(), "0.25");
    }

    #[test]
    fn test_bare_number_accepted() {
        assert_eq!(decode("1.5").unwrap(), StringF32(1.5));
        assert_eq!(decode("3").unwrap(), StringF32(3.0));
    }

    #[test]
    fn test_inside_struct() {
        #[derive(Deserialize, Serialize)]
        #[serde(rename_all = "kebab-case")]
        struct Metric {
            implied_volatility_index: StringF32,
        }

        let m: Metric =
            serde_json::from_str(r#"{"implied-volatility-index": "0.2234"}"#).unwrap();
        assert_eq!(m.implied_volatility_index.value(), 0.2234);
        assert_eq!(
            serde_json::to_string(&m).unwrap(),
            r#"{"implied-volatility-index":0.2234}"#
        );
    }
}
