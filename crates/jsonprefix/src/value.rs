//! JSON value types and utilities.
//!
//! This module defines the [`Value`] enum stored in a [`PartialObject`], and
//! helpers for rendering JSON strings.
//!
//! [`PartialObject`]: crate::PartialObject
use alloc::{collections::BTreeMap, string::String, vec::Vec};

/// Object representation used for nested values decoded by the complete
/// document parse.
pub type Map = BTreeMap<String, Value>;
/// Array representation used for nested values decoded by the complete
/// document parse.
pub type Array = Vec<Value>;

/// A JSON value as defined by [RFC 8259].
///
/// The incremental scan only ever produces scalars (`Null`, `Boolean`,
/// `Integer`, `Number`, `String`). `Array` and `Object` appear only when the buffer was a
/// complete document and was decoded in one go.
///
/// # Examples
///
/// ```
/// use jsonprefix::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// The `null` literal.
    #[default]
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// An integer literal in `i64::MIN..=u64::MAX`, kept exact.
    ///
    /// Integer literals outside that range, and negative zero, are decoded
    /// as a [`Number`](Value::Number), the same as `serde_json` does.
    Integer(i128),
    /// Any other JSON number: a fraction, an exponent, or an integer too large
    /// for [`Integer`](Value::Integer).
    Number(f64),
    /// A decoded string.
    String(String),
    /// An array, only produced by the complete document parse.
    Array(Array),
    /// An object, only produced by the complete document parse.
    Object(Map),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Integer(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Self::from(u)
                } else if let Some(i) = n.as_i64() {
                    Self::from(i)
                } else {
                    // Without `arbitrary_precision` every number has an f64 view.
                    n.as_f64().map_or(Self::Null, Self::Number)
                }
            }
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Value {
    /// Returns `true` if the value is a scalar, i.e. anything the incremental
    /// scan can produce.
    ///
    /// ```
    /// use jsonprefix::Value;
    ///
    /// assert!(Value::Number(1.0).is_scalar());
    /// assert!(!Value::Array(vec![]).is_scalar());
    /// ```
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::Array(..) | Self::Object(..))
    }

    /// Returns the string content if the value is a [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number as an `f64` if the value is a [`Number`] or an
    /// [`Integer`]. Integers beyond 2^53 are rounded.
    ///
    /// [`Number`]: Value::Number
    /// [`Integer`]: Value::Integer
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the integer if the value is an [`Integer`] that fits in an
    /// `i64`.
    ///
    /// ```
    /// use jsonprefix::Value;
    ///
    /// assert_eq!(Value::from(-7_i64).as_i64(), Some(-7));
    /// assert_eq!(Value::from(u64::MAX).as_i64(), None);
    /// assert_eq!(Value::Number(1.5).as_i64(), None);
    /// ```
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Returns the boolean if the value is a [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// Escapes a string for inclusion in a JSON string literal.
///
/// Quotes, backslashes, control characters (<= U+001F) and the Unicode line
/// separators are replaced by their JSON escape sequences.
pub(crate) fn write_escaped_string<W: core::fmt::Write>(src: &str, f: &mut W) -> core::fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            // Pre-2019 JSON parsers choke on raw line separators.
            '\u{2028}' | '\u{2029}' => {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            c if c.is_ascii_control() => {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Integer(n) => write!(f, "{n}"),
            // Integral floats keep a fraction so they read back as floats.
            Value::Number(n) if n.is_finite() && *n % 1.0 == 0.0 => write!(f, "{n}.0"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => {
                f.write_str("\"")?;
                write_escaped_string(s, f)?;
                f.write_str("\"")
            }
            Value::Array(arr) => {
                f.write_str("[")?;
                for (i, v) in arr.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str("\"")?;
                    write_escaped_string(k, f)?;
                    write!(f, "\":{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(any(test, feature = "serde"))]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::{SerializeMap, SerializeSeq};

        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Integer(n) => match (i64::try_from(*n), u64::try_from(*n)) {
                (Ok(i), _) => serializer.serialize_i64(i),
                (_, Ok(u)) => serializer.serialize_u64(u),
                _ => serializer.serialize_i128(*n),
            },
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for v in arr {
                    seq.serialize_element(v)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(any(test, feature = "serde"))]
impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::Deserialize as _;

        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}
