//! The uniform output type of a [`Schema`](crate::schema::Schema).
//!
//! Each schema entry may produce a different Rust type (`f64`, `bool`,
//! [`CssUnit`], lists of those...). They are stored side by side in a
//! [`Record`](crate::schema::Record) as [`Value`]s.

use super::unit::CssUnit;
use crate::error::RulesetError;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
    String(String),
    Unit(CssUnit),
    List(Vec<Value>),
    /// A strict coercion rejected the raw value.
    Invalid(RulesetError),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_unit(&self) -> Option<&CssUnit> {
        match self {
            Value::Unit(unit) => Some(unit),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&RulesetError> {
        match self {
            Value::Invalid(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Value::Invalid(_))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<CssUnit> for Value {
    fn from(unit: CssUnit) -> Self {
        Value::Unit(unit)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Result<T, RulesetError>> for Value {
    fn from(result: Result<T, RulesetError>) -> Self {
        match result {
            Ok(value) => value.into(),
            Err(err) => Value::Invalid(err),
        }
    }
}
