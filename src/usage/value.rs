use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValueError;

/// Value carried by a leaf: a declared default on pattern leaves, a parsed
/// value on token leaves, or the accumulated result of a binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    /// Occurrence counter (e.g. `-vvv`)
    Int(i64),
    Str(String),
    /// Repeated values in encounter order
    List(Vec<String>),
}

impl Value {
    /// Whether a leaf declaring this value folds repeated matches into a
    /// single binding instead of appending a new one.
    pub fn accumulates(&self) -> bool {
        matches!(self, Value::Int(_) | Value::List(_))
    }

    /// Fold `increment` into this value in place.
    ///
    /// Counters add, lists append (a whole list, or the string form of a
    /// single scalar). Every other pairing is rejected.
    pub fn merge(&mut self, increment: Value) -> Result<(), ValueError> {
        match (self, increment) {
            (Value::Int(count), Value::Int(by)) => *count += by,
            (Value::List(items), Value::List(more)) => items.extend(more),
            (Value::List(items), Value::Str(item)) => items.push(item),
            (Value::List(items), scalar @ (Value::Bool(_) | Value::Int(_))) => {
                items.push(scalar.to_string())
            }
            (existing, increment) => {
                return Err(ValueError::IncompatibleMerge {
                    existing: existing.clone(),
                    increment,
                });
            }
        }
        Ok(())
    }
}

/// String form used when comparing a token's value against a command name.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => f.write_str(&items.join(" ")),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}
