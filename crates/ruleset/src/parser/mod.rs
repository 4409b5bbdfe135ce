//! Ruleset parsing.
//!
//! A ruleset is a flat list of `key: value` declarations separated by `;`,
//! the same shape as an HTML `style` attribute:
//!
//! ```text
//! ruleset  := rule (';' rule)*
//! rule     := key ':' value
//! ```
//!
//! Keys and values are trimmed. Empty segments (`;;`, a trailing `;`) are
//! skipped. Parsing never fails: a segment without `:` becomes a
//! [`Declaration`] whose value is `None`, and the remaining rules still parse.
//!
//! ## Submodules
//!
//! - [`ruleset`]: [`Ruleset`] and [`Declaration`] data structures
//! - [`numbers`]: numeric prefix and unit suffix recognizers
//!
//! ## Example
//!
//! ```rust
//! use ruleset::parser::parse_ruleset;
//!
//! let ruleset = parse_ruleset(" fill : red ; stroke-width: 2px ;");
//! assert_eq!(ruleset.get("fill"), Some("red"));
//! assert_eq!(ruleset.get("stroke-width"), Some("2px"));
//! ```

pub mod numbers;
pub mod ruleset;

pub use crate::parser::ruleset::{Declaration, Ruleset};

use nom::{
    IResult,
    bytes::complete::take_till,
    character::complete::char,
    combinator::{opt, rest},
    sequence::{pair, preceded},
};

/// Parser settings.
///
/// The default splits declarations on `;` and keys from values on `:`.
///
/// ```rust
/// use ruleset::parser::RulesetParser;
///
/// let parser = RulesetParser::default()
///     .with_declaration_separator(',')
///     .with_value_separator('=');
/// let ruleset = parser.parse("a=1, b=2");
/// assert_eq!(ruleset.get("b"), Some("2"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesetParser {
    pub declaration_separator: char,
    pub value_separator: char,
}

impl Default for RulesetParser {
    fn default() -> Self {
        Self {
            declaration_separator: ';',
            value_separator: ':',
        }
    }
}

impl RulesetParser {
    pub fn with_declaration_separator(mut self, separator: char) -> Self {
        self.declaration_separator = separator;
        self
    }

    pub fn with_value_separator(mut self, separator: char) -> Self {
        self.value_separator = separator;
        self
    }

    /// Parses a single declaration, splitting on the first value separator only.
    pub fn parse_rule(&self, rule: &str) -> Declaration {
        let separator = self.value_separator;
        let parsed: IResult<&str, (&str, Option<&str>)> = pair(
            take_till(|c: char| c == separator),
            opt(preceded(char(separator), rest)),
        )(rule);

        let (key, value) = match parsed {
            Ok((_, split)) => split,
            Err(_) => (rule, None),
        };

        if value.is_none() {
            log::trace!("declaration without '{}': {:?}", separator, rule);
        }

        Declaration::new(key.trim(), value.map(str::trim))
    }

    /// Parses a whole ruleset. Later duplicates of a key overwrite earlier ones.
    pub fn parse(&self, ruleset: &str) -> Ruleset {
        ruleset
            .split(self.declaration_separator)
            .filter(|segment| !segment.is_empty())
            .map(|segment| self.parse_rule(segment))
            .collect()
    }
}

/// Parses a single `key: value` declaration with the default separators.
pub fn parse_rule(rule: &str) -> Declaration {
    RulesetParser::default().parse_rule(rule)
}

/// Parses a `;`-separated ruleset with the default separators.
pub fn parse_ruleset(ruleset: &str) -> Ruleset {
    RulesetParser::default().parse(ruleset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rule_splits_on_first_separator() {
        let declaration = parse_rule(" time : 12:30 ");
        assert_eq!(declaration.key, "time");
        assert_eq!(declaration.value.as_deref(), Some("12:30"));
    }

    #[test]
    fn test_parse_rule_without_separator() {
        let declaration = parse_rule("  visible ");
        assert_eq!(declaration.key, "visible");
        assert_eq!(declaration.value, None);
    }

    #[test]
    fn test_parse_rule_empty_value() {
        let declaration = parse_rule("color:");
        assert_eq!(declaration.key, "color");
        assert_eq!(declaration.value.as_deref(), Some(""));
    }
}
