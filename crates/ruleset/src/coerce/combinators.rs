//! Combinators that build coercion functions out of other coercion functions,
//! plus the CSS shorthand expansions built on them.

use super::{Coerce, css_unit};
use crate::error::{Result, RulesetError};
use crate::types::CssUnit;

/// Substitutes `fallback` for an absent value before coercing.
///
/// ```rust
/// use ruleset::coerce::{number, optional};
///
/// let opacity = optional(number, "1");
/// assert_eq!(opacity(None), 1.0);
/// assert_eq!(opacity(Some("0.5")), 0.5);
/// ```
pub fn optional<C: Coerce>(
    coerce: C,
    fallback: impl Into<String>,
) -> impl Fn(Option<&str>) -> C::Output {
    let fallback = fallback.into();
    move |raw: Option<&str>| coerce.coerce(Some(raw.unwrap_or(fallback.as_str())))
}

/// Splits the value on `separator` and coerces each non-empty, trimmed item.
///
/// Absent input gives an empty list.
pub fn list_of<C: Coerce>(coerce: C, separator: char) -> impl Fn(Option<&str>) -> Vec<C::Output> {
    move |raw: Option<&str>| {
        raw.unwrap_or_default()
            .split(separator)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| coerce.coerce(Some(item)))
            .collect()
    }
}

/// [`list_of`] with `,` as the separator.
///
/// ```rust
/// use ruleset::coerce::{list_of_commas, number};
///
/// let numbers = list_of_commas(number);
/// assert_eq!(numbers(Some("1, 2,3")), vec![1.0, 2.0, 3.0]);
/// assert!(numbers(Some("")).is_empty());
/// ```
pub fn list_of_commas<C: Coerce>(coerce: C) -> impl Fn(Option<&str>) -> Vec<C::Output> {
    list_of(coerce, ',')
}

/// A space-separated list of CSS unit values, e.g. `1px 2em 50%`.
pub fn css_unit_list(raw: Option<&str>) -> Vec<CssUnit> {
    list_of(css_unit, ' ')(raw)
}

/// Expands one to three CSS unit values into exactly three.
///
/// `a` becomes `[a, a, a]`, `a b` becomes `[a, b, b]`, and three values are
/// kept as written.
pub fn css_unit3(raw: Option<&str>) -> Result<[CssUnit; 3]> {
    let units = css_unit_list(raw);
    match units.as_slice() {
        [] => Err(RulesetError::EmptyUnitList),
        [a] => Ok([a.clone(), a.clone(), a.clone()]),
        [a, b] => Ok([a.clone(), b.clone(), b.clone()]),
        [a, b, c] => Ok([a.clone(), b.clone(), c.clone()]),
        _ => Err(RulesetError::TooManyUnits {
            max: 3,
            found: units.len(),
        }),
    }
}

/// Expands CSS box shorthand (as in `padding` and `margin`) into
/// `[top, right, bottom, left]`-style quadruples.
///
/// | Input | Output |
/// |---|---|
/// | `a` | `[a, a, a, a]` |
/// | `a b` | `[a, a, b, b]` |
/// | `a b c` | `[a, b, b, c]` |
/// | `a b c d ...` | `[a, b, c, d]` |
pub fn css_unit4(raw: Option<&str>) -> Result<[CssUnit; 4]> {
    let units = css_unit_list(raw);
    match units.as_slice() {
        [] => Err(RulesetError::EmptyUnitList),
        [a] => Ok([a.clone(), a.clone(), a.clone(), a.clone()]),
        [a, b] => Ok([a.clone(), a.clone(), b.clone(), b.clone()]),
        [a, b, c] => Ok([a.clone(), b.clone(), b.clone(), c.clone()]),
        [a, b, c, d, extra @ ..] => {
            if !extra.is_empty() {
                log::debug!("ignoring {} CSS unit values past the fourth", extra.len());
            }
            Ok([a.clone(), b.clone(), c.clone(), d.clone()])
        }
    }
}
