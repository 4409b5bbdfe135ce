//! Numeric prefix and unit suffix recognizers.
//!
//! Attribute values are loose: `10px`, `50%`, `1.5e2`, ` 12 apples`. Numbers
//! are read the way a browser's `parseFloat` reads them, taking the longest
//! numeric prefix and ignoring whatever follows.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit0, digit1, one_of},
    combinator::{opt, recognize},
    sequence::{pair, tuple},
};

/// Digits with an optional fraction (`12`, `12.`, `12.5`) or a bare fraction (`.5`).
fn mantissa(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ))(input)
}

/// Exponent suffix such as `e3` or `E-2`. A dangling `e` (as in `10em`) is not one.
fn exponent(input: &str) -> IResult<&str, &str> {
    recognize(tuple((one_of("eE"), opt(one_of("+-")), digit1)))(input)
}

/// Recognizes the longest float literal at the start of `input`.
pub fn float_prefix(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(tuple((opt(one_of("+-")), mantissa, opt(exponent)))),
        recognize(pair(opt(one_of("+-")), tag("Infinity"))),
    ))(input)
}

/// Parses the leading float of `input`, skipping leading whitespace.
///
/// Returns `None` when no numeric prefix exists.
pub fn parse_float(input: &str) -> Option<f64> {
    let (_, literal) = float_prefix(input.trim_start()).ok()?;
    literal.parse::<f64>().ok()
}

/// The leading run of ASCII digits and dots (`10.5` in `10.5px`).
pub fn leading_digits(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_digit() || c == '.')(input)
}

/// The trailing run of ASCII letters and `%` (`px` in `10.5px`).
pub fn trailing_unit(input: &str) -> Option<&str> {
    let start = input
        .trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%')
        .len();
    (start < input.len()).then(|| &input[start..])
}
