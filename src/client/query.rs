//! Query-string encoding for request parameters.
//!
//! Query parameters are declared as plain serde structs, the same way
//! request bodies are:
//!
//! ```
//! use serde::Serialize;
//! use tastytrade::client::query::to_pairs;
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "kebab-case")]
//! struct Query {
//!     symbol: Vec<&'static str>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     per_page: Option<i32>,
//!     is_etf: Option<bool>,
//! }
//!
//! let pairs = to_pairs(&Query { symbol: vec!["AAPL", "BRK/B"], per_page: Some(10), is_etf: None }).unwrap();
//! assert_eq!(pairs, vec![
//!     ("symbol[]".to_string(), "AAPL".to_string()),
//!     ("symbol[]".to_string(), "BRK/B".to_string()),
//!     ("per-page".to_string(), "10".to_string()),
//! ]);
//! ```
//!
//! Rules:
//! - `None` and unit values are omitted.
//! - Sequences become repeated `key[]` parameters; empty sequences are omitted.
//! - Enum unit variants use their serde (wire) names.
//! - Non-finite floats are rejected.
//! - Nested structs and maps are rejected.

use std::fmt::Display;

use serde::ser::{self, Impossible, Serialize};
use thiserror::Error;

/// Failure to encode a value as query parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A float that has no query-string representation
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),
    /// The top-level value was not a struct or map
    #[error("query must be a struct or map, found {0}")]
    NotAStruct(&'static str),
    /// A field held a shape the encoding cannot flatten
    #[error("field `{field}`: {kind} values are not supported")]
    UnsupportedField {
        /// Field name
        field: String,
        /// Offending shape
        kind: &'static str,
    },
    /// Map keys must be strings or scalars
    #[error("map keys must be scalars")]
    KeyMustBeScalar,
    /// Raised by a custom `Serialize` implementation
    #[error("{0}")]
    Custom(String),
}

impl ser::Error for QueryError {
    fn custom<T: Display>(msg: T) -> Self {
        QueryError::Custom(msg.to_string())
    }
}

/// Encode `value` into ordered query pairs.
pub fn to_pairs<T: Serialize + ?Sized>(value: &T) -> Result<Vec<(String, String)>, QueryError> {
    let mut pairs = Vec::new();
    value.serialize(TopSerializer { out: &mut pairs })?;
    Ok(pairs)
}

fn float_text(v: f64) -> Result<String, QueryError> {
    if v.is_nan() {
        Err(QueryError::UnsupportedValue("NaN".to_string()))
    } else if v.is_infinite() {
        let sign = if v > 0.0 { "+" } else { "-" };
        Err(QueryError::UnsupportedValue(format!("{}Inf", sign)))
    } else {
        Ok(v.to_string())
    }
}

// ---------------------------------------------------------------------------
// Top level: a struct or a map
// ---------------------------------------------------------------------------

struct TopSerializer<'a> {
    out: &'a mut Vec<(String, String)>,
}

impl<'a> TopSerializer<'a> {
    fn reject(kind: &'static str) -> Result<(), QueryError> {
        Err(QueryError::NotAStruct(kind))
    }
}

impl<'a> ser::Serializer for TopSerializer<'a> {
    type Ok = ();
    type Error = QueryError;
    type SerializeSeq = Impossible<(), QueryError>;
    type SerializeTuple = Impossible<(), QueryError>;
    type SerializeTupleStruct = Impossible<(), QueryError>;
    type SerializeTupleVariant = Impossible<(), QueryError>;
    type SerializeMap = MapFields<'a>;
    type SerializeStruct = StructFields<'a>;
    type SerializeStructVariant = Impossible<(), QueryError>;

    fn serialize_bool(self, _v: bool) -> Result<(), QueryError> {
        Self::reject("bool")
    }
    fn serialize_i8(self, _v: i8) -> Result<(), QueryError> {
        Self::reject("integer")
    }
    fn serialize_i16(self, _v: i16) -> Result<(), QueryError> {
        Self::reject("integer")
    }
    fn serialize_i32(self, _v: i32) -> Result<(), QueryError> {
        Self::reject("integer")
    }
    fn serialize_i64(self, _v: i64) -> Result<(), QueryError> {
        Self::reject("integer")
    }
    fn serialize_u8(self, _v: u8) -> Result<(), QueryError> {
        Self::reject("integer")
    }
    fn serialize_u16(self, _v: u16) -> Result<(), QueryError> {
        Self::reject("integer")
    }
    fn serialize_u32(self, _v: u32) -> Result<(), QueryError> {
        Self::reject("integer")
    }
    fn serialize_u64(self, _v: u64) -> Result<(), QueryError> {
        Self::reject("integer")
    }
    fn serialize_f32(self, _v: f32) -> Result<(), QueryError> {
        Self::reject("float")
    }
    fn serialize_f64(self, _v: f64) -> Result<(), QueryError> {
        Self::reject("float")
    }
    fn serialize_char(self, _v: char) -> Result<(), QueryError> {
        Self::reject("char")
    }
    fn serialize_str(self, _v: &str) -> Result<(), QueryError> {
        Self::reject("string")
    }
    fn serialize_bytes(self, _v: &[u8]) -> Result<(), QueryError> {
        Self::reject("bytes")
    }
    fn serialize_none(self) -> Result<(), QueryError> {
        Ok(())
    }
    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<(), QueryError> {
        value.serialize(self)
    }
    fn serialize_unit(self) -> Result<(), QueryError> {
        Ok(())
    }
    fn serialize_unit_struct(self, _name: &'static str) -> Result<(), QueryError> {
        Ok(())
    }
    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
    ) -> Result<(), QueryError> {
        Self::reject("enum")
    }
    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<(), QueryError> {
        value.serialize(self)
    }
    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<(), QueryError> {
        Self::reject("enum")
    }
    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, QueryError> {
        Err(QueryError::NotAStruct("sequence"))
    }
    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, QueryError> {
        Err(QueryError::NotAStruct("tuple"))
    }
    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, QueryError> {
        Err(QueryError::NotAStruct("tuple struct"))
    }
    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, QueryError> {
        Err(QueryError::NotAStruct("enum"))
    }
    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, QueryError> {
        Ok(MapFields {
            out: self.out,
            key: None,
        })
    }
    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, QueryError> {
        Ok(StructFields { out: self.out })
    }
    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, QueryError> {
        Err(QueryError::NotAStruct("enum"))
    }
}

struct StructFields<'a> {
    out: &'a mut Vec<(String, String)>,
}

impl<'a> ser::SerializeStruct for StructFields<'a> {
    type Ok = ();
    type Error = QueryError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), QueryError> {
        value.serialize(FieldSerializer {
            key,
            out: self.out,
            repeated: false,
        })
    }

    fn skip_field(&mut self, _key: &'static str) -> Result<(), QueryError> {
        Ok(())
    }

    fn end(self) -> Result<(), QueryError> {
        Ok(())
    }
}

struct MapFields<'a> {
    out: &'a mut Vec<(String, String)>,
    key: Option<String>,
}

impl<'a> ser::SerializeMap for MapFields<'a> {
    type Ok = ();
    type Error = QueryError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), QueryError> {
        let mut values = Vec::with_capacity(1);
        key.serialize(FieldSerializer {
            key: "",
            out: &mut values,
            repeated: false,
        })
        .map_err(|_| QueryError::KeyMustBeScalar)?;
        match values.pop() {
            Some((_, key)) if values.is_empty() => {
                self.key = Some(key);
                Ok(())
            }
            _ => Err(QueryError::KeyMustBeScalar),
        }
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), QueryError> {
        let key = self.key.take().ok_or(QueryError::KeyMustBeScalar)?;
        value.serialize(FieldSerializer {
            key: &key,
            out: self.out,
            repeated: false,
        })
    }

    fn end(self) -> Result<(), QueryError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Field values: scalars, options, and one level of sequence
// ---------------------------------------------------------------------------

struct FieldSerializer<'k, 'a> {
    key: &'k str,
    out: &'a mut Vec<(String, String)>,
    repeated: bool,
}

impl<'k, 'a> FieldSerializer<'k, 'a> {
    fn push(self, value: String) -> Result<(), QueryError> {
        let key = if self.repeated {
            format!("{}[]", self.key)
        } else {
            self.key.to_string()
        };
        self.out.push((key, value));
        Ok(())
    }

    fn unsupported(&self, kind: &'static str) -> QueryError {
        QueryError::UnsupportedField {
            field: self.key.to_string(),
            kind,
        }
    }
}

impl<'k, 'a> ser::Serializer for FieldSerializer<'k, 'a> {
    type Ok = ();
    type Error = QueryError;
    type SerializeSeq = RepeatedField<'k, 'a>;
    type SerializeTuple = RepeatedField<'k, 'a>;
    type SerializeTupleStruct = RepeatedField<'k, 'a>;
    type SerializeTupleVariant = Impossible<(), QueryError>;
    type SerializeMap = Impossible<(), QueryError>;
    type SerializeStruct = Impossible<(), QueryError>;
    type SerializeStructVariant = Impossible<(), QueryError>;

    fn serialize_bool(self, v: bool) -> Result<(), QueryError> {
        self.push(v.to_string())
    }
    fn serialize_i8(self, v: i8) -> Result<(), QueryError> {
        self.push(v.to_string())
    }
    fn serialize_i16(self, v: i16) -> Result<(), QueryError> {
        self.push(v.to_string())
    }
    fn serialize_i32(self, v: i32) -> Result<(), QueryError> {
        self.push(v.to_string())
    }
    fn serialize_i64(self, v: i64) -> Result<(), QueryError> {
        self.push(v.to_string())
    }
    fn serialize_u8(self, v: u8) -> Result<(), QueryError> {
        self.push(v.to_string())
    }
    fn serialize_u16(self, v: u16) -> Result<(), QueryError> {
        self.push(v.to_string())
    }
    fn serialize_u32(self, v: u32) -> Result<(), QueryError> {
        self.push(v.to_string())
    }
    fn serialize_u64(self, v: u64) -> Result<(), QueryError> {
        self.push(v.to_string())
    }
    fn serialize_f32(self, v: f32) -> Result<(), QueryError> {
        if !v.is_finite() {
            float_text(f64::from(v))?;
        }
        self.push(v.to_string())
    }
    fn serialize_f64(self, v: f64) -> Result<(), QueryError> {
        let text = float_text(v)?;
        self.push(text)
    }
    fn serialize_char(self, v: char) -> Result<(), QueryError> {
        self.push(v.to_string())
    }
    fn serialize_str(self, v: &str) -> Result<(), QueryError> {
        self.push(v.to_string())
    }
    fn serialize_bytes(self, _v: &[u8]) -> Result<(), QueryError> {
        Err(self.unsupported("bytes"))
    }
    fn serialize_none(self) -> Result<(), QueryError> {
        Ok(())
    }
    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<(), QueryError> {
        value.serialize(self)
    }
    fn serialize_unit(self) -> Result<(), QueryError> {
        Ok(())
    }
    fn serialize_unit_struct(self, _name: &'static str) -> Result<(), QueryError> {
        Ok(())
    }
    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<(), QueryError> {
        self.push(variant.to_string())
    }
    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<(), QueryError> {
        value.serialize(self)
    }
    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<(), QueryError> {
        Err(self.unsupported("enum payload"))
    }
    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, QueryError> {
        if self.repeated {
            return Err(self.unsupported("nested sequence"));
        }
        Ok(RepeatedField {
            key: self.key,
            out: self.out,
        })
    }
    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple, QueryError> {
        self.serialize_seq(Some(len))
    }
    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct, QueryError> {
        self.serialize_seq(Some(len))
    }
    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, QueryError> {
        Err(self.unsupported("enum payload"))
    }
    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, QueryError> {
        Err(self.unsupported("map"))
    }
    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, QueryError> {
        Err(self.unsupported("struct"))
    }
    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, QueryError> {
        Err(self.unsupported("enum payload"))
    }
}

struct RepeatedField<'k, 'a> {
    key: &'k str,
    out: &'a mut Vec<(String, String)>,
}

impl<'k, 'a> RepeatedField<'k, 'a> {
    fn element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), QueryError> {
        value.serialize(FieldSerializer {
            key: self.key,
            out: self.out,
            repeated: true,
        })
    }
}

impl<'k, 'a> ser::SerializeSeq for RepeatedField<'k, 'a> {
    type Ok = ();
    type Error = QueryError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), QueryError> {
        self.element(value)
    }

    fn end(self) -> Result<(), QueryError> {
        Ok(())
    }
}

impl<'k, 'a> ser::SerializeTuple for RepeatedField<'k, 'a> {
    type Ok = ();
    type Error = QueryError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), QueryError> {
        self.element(value)
    }

    fn end(self) -> Result<(), QueryError> {
        Ok(())
    }
}

impl<'k, 'a> ser::SerializeTupleStruct for RepeatedField<'k, 'a> {
    type Ok = ();
    type Error = QueryError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), QueryError> {
        self.element(value)
    }

    fn end(self) -> Result<(), QueryError> {
        Ok(())
    }
}

/// `serialize_with` helpers that render time values with a fixed layout.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// #[serde(rename_all = "kebab-case")]
/// struct Query {
///     #[serde(serialize_with = "tastytrade::client::query::layout::date")]
///     start_date: Option<DateTime<Utc>>,
/// }
/// ```
pub mod layout {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::Serializer;

    /// Values that carry a calendar date.
    pub trait HasDate {
        /// The calendar date of this value.
        fn calendar_date(&self) -> NaiveDate;
    }

    impl HasDate for NaiveDate {
        fn calendar_date(&self) -> NaiveDate {
            *self
        }
    }

    impl HasDate for DateTime<Utc> {
        fn calendar_date(&self) -> NaiveDate {
            self.date_naive()
        }
    }

    /// Render as `YYYY-MM-DD`; `None` is omitted.
    pub fn date<D, S>(value: &Option<D>, serializer: S) -> Result<S::Ok, S::Error>
    where
        D: HasDate,
        S: Serializer,
    {
        match value {
            Some(v) => serializer.collect_str(&v.calendar_date().format("%Y-%m-%d")),
            None => serializer.serialize_none(),
        }
    }

    /// Render as RFC 3339 with whole seconds and a `Z` suffix; `None` is
    /// omitted.
    pub fn datetime<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.collect_str(&v.format("%Y-%m-%dT%H:%M:%SZ")),
            None => serializer.serialize_none(),
        }
    }
}
