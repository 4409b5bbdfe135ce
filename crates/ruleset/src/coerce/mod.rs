//! Coercion functions: raw attribute text to typed values.
//!
//! A coercion function takes the raw value of an attribute, `None` when the
//! attribute is absent, and always produces an output. Bad input degrades to
//! a sentinel (`NaN`, an empty list, [`Unit::Undefined`]) instead of failing,
//! so one malformed attribute never spoils the rest of a ruleset.
//!
//! | Function | Output | Absent input |
//! |---|---|---|
//! | [`number`] | `f64` | `NaN` |
//! | [`deg`] | `f64` in `[0, 360)` | `NaN` |
//! | [`percent`] | `f64` | `NaN` |
//! | [`string`] | `String` | `""` |
//! | [`selector`] | `String` | `"*"` |
//! | [`bool`] | `bool` | `false` |
//! | [`truthy`] | `bool` | `false` |
//! | [`css_unit`] | [`CssUnit`] | [`CssUnit::UNDEFINED`] |
//!
//! Combinators in [`combinators`] build new coercion functions from these.

pub mod combinators;

pub use combinators::{css_unit3, css_unit4, css_unit_list, list_of, list_of_commas, optional};

use crate::error::{Result, RulesetError};
use crate::parser::numbers::{leading_digits, parse_float, trailing_unit};
use crate::types::{CssUnit, Unit};

/// Anything that turns an optional raw value into a typed one.
///
/// Implemented for every `Fn(Option<&str>) -> T`, so plain functions such as
/// [`number`] and closures returned by the combinators can be used wherever a
/// coercion is expected.
pub trait Coerce {
    type Output;

    fn coerce(&self, raw: Option<&str>) -> Self::Output;
}

impl<F, T> Coerce for F
where
    F: Fn(Option<&str>) -> T,
{
    type Output = T;

    fn coerce(&self, raw: Option<&str>) -> T {
        self(raw)
    }
}

/// Parses the leading number of the value. Non-numeric input yields `NaN`.
pub fn number(raw: Option<&str>) -> f64 {
    raw.and_then(parse_float).unwrap_or(f64::NAN)
}

/// Like [`number`], but reports absent or non-numeric input as an error.
pub fn try_number(raw: Option<&str>) -> Result<f64> {
    let raw = raw.ok_or(RulesetError::Missing)?;
    parse_float(raw).ok_or_else(|| RulesetError::InvalidNumber(raw.to_string()))
}

/// An angle in degrees, normalized into `[0, 360)`.
///
/// The first `deg` in the value is ignored, so `"370deg"` and `"370"` both
/// give `10`. Negative angles wrap around: `"-10deg"` gives `350`.
pub fn deg(raw: Option<&str>) -> f64 {
    let Some(degrees) = raw.and_then(|s| parse_float(&s.replacen("deg", "", 1))) else {
        return f64::NAN;
    };
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// A percentage as written, so `"50%"` gives `50.0`, not `0.5`.
pub fn percent(raw: Option<&str>) -> f64 {
    raw.and_then(|s| parse_float(&s.replacen('%', "", 1))).unwrap_or(f64::NAN)
}

pub fn string(raw: Option<&str>) -> String {
    raw.unwrap_or("").to_string()
}

/// A selector string, matching everything (`*`) when absent.
pub fn selector(raw: Option<&str>) -> String {
    raw.unwrap_or("*").to_string()
}

/// Values accepted as `true` by [`bool`], compared case-insensitively.
pub const TRUE_TOKENS: [&str; 4] = ["true", "1", "yes", "on"];

/// `true` only for the tokens in [`TRUE_TOKENS`].
///
/// ```rust
/// use ruleset::coerce::bool;
///
/// assert!(bool(Some(" TRUE ")));
/// assert!(!bool(Some("false")));
/// assert!(!bool(None));
/// ```
pub fn bool(raw: Option<&str>) -> bool {
    raw.map(str::trim).is_some_and(|value| {
        TRUE_TOKENS
            .iter()
            .any(|token| token.eq_ignore_ascii_case(value))
    })
}

/// `true` for any non-empty value, including `"false"` and `"0"`.
pub fn truthy(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| !value.is_empty())
}

/// Splits a value like `10px` into its number and unit.
///
/// ```rust
/// use ruleset::coerce::css_unit;
/// use ruleset::types::{CssUnit, Unit};
///
/// assert_eq!(css_unit(Some("10px")), CssUnit::new(10.0, "px"));
/// assert_eq!(css_unit(Some("10")).unit, Unit::Unitless);
/// assert_eq!(css_unit(Some("px")), CssUnit::UNDEFINED);
/// ```
pub fn css_unit(raw: Option<&str>) -> CssUnit {
    let Some(s) = raw else {
        return CssUnit::UNDEFINED;
    };
    let Ok((_, digits)) = leading_digits(s) else {
        return CssUnit::UNDEFINED;
    };

    let value = parse_float(digits).unwrap_or(f64::NAN);
    let unit = match trailing_unit(s) {
        Some(token) => Unit::token(token),
        None => Unit::Unitless,
    };

    CssUnit {
        value: Some(value),
        unit,
    }
}
