//! Field value types, comparison policy, and format validation

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::OnceLock;
use uuid::Uuid;

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Borrow the string contents, if this is a string value
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer contents, if this is an integer value
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float, converting integers
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The id contents, if this is a uuid value
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            FieldValue::Uuid(u) => Some(*u),
            _ => None,
        }
    }

    /// Whether this is the null value
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Case-insensitive substring containment, for free-text search.
    ///
    /// Only string values participate in search; every other variant
    /// reports no match.
    pub fn contains_ci(&self, term: &str) -> bool {
        match self {
            FieldValue::String(s) => s.to_lowercase().contains(&term.to_lowercase()),
            _ => false,
        }
    }

    /// Total comparison used by the comparator builder.
    ///
    /// - strings: case-insensitive lexicographic order
    /// - integers and floats: numeric order in any combination (NaN compares equal)
    /// - booleans: false < true
    /// - uuids and datetimes: natural order
    /// - anything else, including `Null`: `Ordering::Equal`
    ///
    /// Incomparable combinations deliberately compare equal instead of
    /// panicking or erroring, so a list with inconsistently-typed fields
    /// still sorts (keeping its prior relative order under a stable sort).
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        use FieldValue::*;
        match (self, other) {
            (String(a), String(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Integer(_) | Float(_), Integer(_) | Float(_)) => {
                // as_number is Some for both arms here
                match (self.as_number(), other.as_number()) {
                    (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                    _ => Ordering::Equal,
                }
            }
            (Boolean(a), Boolean(b)) => a.cmp(b),
            (Uuid(a), Uuid(b)) => a.cmp(b),
            (DateTime(a), DateTime(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }

    /// Render the value as a grouping key for aggregation.
    pub fn group_key(&self) -> std::string::String {
        match self {
            FieldValue::String(s) => s.clone(),
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::Uuid(u) => u.to_string(),
            FieldValue::DateTime(dt) => dt.to_rfc3339(),
            FieldValue::Null => "null".to_string(),
        }
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => FieldValue::String(s),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Integer(i)
                } else {
                    FieldValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::Bool(b) => FieldValue::Boolean(b),
            _ => FieldValue::Null,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

/// Conversion from a concrete struct field into a [`FieldValue`].
///
/// The `impl_record!` macro leans on this to generate `field_value` match
/// arms without per-field type annotations.
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.clone())
    }
}

impl ToFieldValue for i64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(*self)
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(*self)
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Boolean(*self)
    }
}

impl ToFieldValue for Uuid {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Uuid(*self)
    }
}

impl ToFieldValue for DateTime<Utc> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::DateTime(*self)
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        match self {
            Some(value) => value.to_field_value(),
            None => FieldValue::Null,
        }
    }
}

/// Field format validators for automatic validation
#[derive(Debug, Clone)]
pub enum FieldFormat {
    Email,
    Phone,
    Url,
    Custom(Regex),
}

impl FieldFormat {
    /// Validate a field value against this format
    pub fn validate(&self, value: &FieldValue) -> bool {
        let string_value = match value.as_string() {
            Some(s) => s,
            None => return false,
        };

        match self {
            FieldFormat::Email => Self::is_valid_email(string_value),
            FieldFormat::Phone => Self::is_valid_phone(string_value),
            FieldFormat::Url => Self::is_valid_url(string_value),
            FieldFormat::Custom(regex) => regex.is_match(string_value),
        }
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
        });
        regex.is_match(email)
    }

    fn is_valid_phone(phone: &str) -> bool {
        static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = PHONE_REGEX.get_or_init(|| {
            // At least 8 digits, max 15 (E.164 standard)
            Regex::new(r"^\+?[1-9]\d{7,14}$").unwrap()
        });
        regex.is_match(phone)
    }

    fn is_valid_url(url: &str) -> bool {
        static URL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());
        regex.is_match(url)
    }
}
