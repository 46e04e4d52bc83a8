use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One widget record: string keys to loosely-typed values, in key order.
pub type WidgetRecord = BTreeMap<String, WidgetValue>;

/// A value the reconciliation widget may carry.
///
/// Serialized untagged, so records look like plain JSON objects. Numbers
/// travel as exact JSON numbers (serde_json `arbitrary_precision`), keeping
/// every digit and the scale. `String` is tried before `Number` so that
/// numeric-looking text stays text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WidgetValue {
    Bool(bool),
    String(String),
    Number(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal),
    Map(WidgetRecord),
}

impl WidgetValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&WidgetRecord> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<bool> for WidgetValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for WidgetValue {
    fn from(value: i64) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<Decimal> for WidgetValue {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for WidgetValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for WidgetValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<WidgetRecord> for WidgetValue {
    fn from(value: WidgetRecord) -> Self {
        Self::Map(value)
    }
}
