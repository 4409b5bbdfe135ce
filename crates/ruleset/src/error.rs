//! Error types for ruleset coercion.
//!
//! Parsing a ruleset never fails. These errors describe values that could
//! not be coerced into the shape a schema asked for, and are carried as data
//! (see [`Value::Invalid`](crate::types::Value::Invalid)) rather than aborting
//! the rest of the ruleset.

use thiserror::Error;

/// Errors produced by the strict coercions.
///
/// # Examples
///
/// ```rust
/// use ruleset::coerce::css_unit3;
/// use ruleset::RulesetError;
///
/// assert_eq!(css_unit3(Some("")), Err(RulesetError::EmptyUnitList));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RulesetError {
    /// The attribute was not present in the ruleset, or had no `:` value.
    #[error("missing value")]
    Missing,

    /// The value has no leading numeric text.
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    /// A unit list coercion received zero values.
    #[error("expected at least one CSS unit value")]
    EmptyUnitList,

    /// A unit list coercion received more values than it can expand.
    #[error("expected at most {max} CSS unit values, found {found}")]
    TooManyUnits { max: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, RulesetError>;
