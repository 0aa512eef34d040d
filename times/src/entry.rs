use std::borrow::Cow;

use serde::Deserialize;
use serde_json::{Number, Value};

/// A single form value as submitted by the client.
///
/// Clients are not trusted to send the expected JSON types, so every value is kept and
/// judged by the rule chain instead of failing the decode. A missing key and `null` are both
/// [`Field::Absent`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum Field {
    #[default]
    Absent,
    Text(String),
    Number(Number),
    Bool(bool),
    /// An array or object.
    Structured(Value),
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Field::Absent,
            Value::String(s) => Field::Text(s),
            Value::Number(n) => Field::Number(n),
            Value::Bool(b) => Field::Bool(b),
            v @ (Value::Array(_) | Value::Object(_)) => Field::Structured(v),
        }
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_owned())
    }
}

impl From<i64> for Field {
    fn from(n: i64) -> Self {
        Field::Number(n.into())
    }
}

impl Field {
    /// Whether the value counts as filled in. Empty text, zero, `false` and empty
    /// collections do not.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        match self {
            Field::Absent => false,
            Field::Text(s) => !s.is_empty(),
            Field::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Field::Bool(b) => *b,
            Field::Structured(Value::Array(a)) => !a.is_empty(),
            Field::Structured(Value::Object(o)) => !o.is_empty(),
            Field::Structured(_) => true,
        }
    }

    /// Whether anything other than nothing or the empty string was sent. Unlike
    /// [`Field::is_filled`] a zero counts.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Field::Absent => false,
            Field::Text(s) => !s.is_empty(),
            _ => true,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Field::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Free text view of the value. Values that are not filled in read as empty, other
    /// non-text values as their JSON rendering.
    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Field::Text(s) => Cow::Borrowed(s),
            v if !v.is_filled() => Cow::Borrowed(""),
            Field::Number(n) => Cow::Owned(n.to_string()),
            Field::Bool(b) => Cow::Owned(b.to_string()),
            Field::Structured(v) => Cow::Owned(v.to_string()),
            Field::Absent => Cow::Borrowed(""),
        }
    }

    /// Integer view of the value. Text is trimmed and read as a decimal integer, fractional
    /// numbers are truncated toward zero and booleans read as 0 or 1.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Field::Text(s) => s.trim().parse().ok(),
            Field::Number(n) => n
                .as_i64()
                .or_else(|| n.as_u64().map(|_| i64::MAX))
                .or_else(|| n.as_f64().map(|v| v.trunc() as i64)),
            Field::Bool(b) => Some(i64::from(*b)),
            Field::Absent | Field::Structured(_) => None,
        }
    }
}

/// One unvalidated worktime submission.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CandidateEntry {
    pub work_date: Field,
    pub start_time: Field,
    pub end_time: Field,
    pub break_minutes: Field,
    pub notes: Field,
}

impl CandidateEntry {
    /// Decodes a request body. Bodies that are not a JSON object decode to the empty entry.
    #[must_use]
    pub fn from_json(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(object @ Value::Object(_)) => serde_json::from_value(object).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}
