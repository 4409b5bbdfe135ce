//! Integration tests for ruleset parsing.
//!
//! Tests the `key: value; key: value` grammar:
//! - Whitespace trimming around keys and values
//! - Empty segments and empty input
//! - Duplicate keys (last value wins)
//! - Degraded declarations (missing `:`, extra `:`)
//! - Custom separators

use ruleset::coerce::number;
use ruleset::parser::{Declaration, Ruleset, RulesetParser, parse_rule, parse_ruleset};

fn pairs(ruleset: &Ruleset) -> Vec<(&str, Option<&str>)> {
    ruleset
        .iter()
        .map(|d| (d.key.as_str(), d.value.as_deref()))
        .collect()
}

// ============================================================================
// WELL-FORMED RULESETS
// ============================================================================

#[test]
fn test_two_declarations() {
    let ruleset = parse_ruleset("k1:v1;k2:v2");
    assert_eq!(pairs(&ruleset), vec![("k1", Some("v1")), ("k2", Some("v2"))]);
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    let spaced = parse_ruleset(" k1 : v1 ; k2 : v2 ");
    let tight = parse_ruleset("k1:v1;k2:v2");
    assert_eq!(spaced, tight);
}

#[test]
fn test_multiline_ruleset() {
    let ruleset = parse_ruleset(
        "
        fill: red;
        stroke: blue;
        ",
    );
    assert_eq!(ruleset.get("fill"), Some("red"));
    assert_eq!(ruleset.get("stroke"), Some("blue"));
}

#[test]
fn test_values_keep_inner_whitespace() {
    let ruleset = parse_ruleset("padding: 1px  2px 3px");
    assert_eq!(ruleset.get("padding"), Some("1px  2px 3px"));
}

#[test]
fn test_trailing_semicolon() {
    let ruleset = parse_ruleset("a:1;b:2;");
    assert_eq!(ruleset.len(), 2);
}

// ============================================================================
// EMPTY INPUT
// ============================================================================

#[test]
fn test_empty_string() {
    assert!(parse_ruleset("").is_empty());
}

#[test]
fn test_only_semicolons() {
    assert!(parse_ruleset(";;;").is_empty());
}

#[test]
fn test_repeated_semicolons_between_rules() {
    let ruleset = parse_ruleset("a:1;;;b:2");
    assert_eq!(pairs(&ruleset), vec![("a", Some("1")), ("b", Some("2"))]);
}

#[test]
fn test_whitespace_segment_becomes_empty_key() {
    // Only exactly-empty segments are dropped before trimming.
    let ruleset = parse_ruleset("a:1; ");
    assert_eq!(ruleset.len(), 2);
    assert!(ruleset.contains_key(""));
    assert_eq!(ruleset.get(""), None);
}

// ============================================================================
// DUPLICATE KEYS
// ============================================================================

#[test]
fn test_duplicate_key_last_wins() {
    let ruleset = parse_ruleset("a:1;a:2");
    assert_eq!(pairs(&ruleset), vec![("a", Some("2"))]);
}

#[test]
fn test_duplicate_key_keeps_first_position() {
    let ruleset = parse_ruleset("a:1;b:2;a:3");
    assert_eq!(pairs(&ruleset), vec![("a", Some("3")), ("b", Some("2"))]);
}

#[test]
fn test_duplicate_without_value_clears_value() {
    let ruleset = parse_ruleset("a:1;a");
    assert!(ruleset.contains_key("a"));
    assert_eq!(ruleset.get("a"), None);
}

// ============================================================================
// DEGRADED DECLARATIONS
// ============================================================================

#[test]
fn test_missing_colon_does_not_abort() {
    let ruleset = parse_ruleset("width:10px;broken;height:5px");
    assert_eq!(
        pairs(&ruleset),
        vec![
            ("width", Some("10px")),
            ("broken", None),
            ("height", Some("5px")),
        ]
    );
}

#[test]
fn test_extra_colons_stay_in_value() {
    let ruleset = parse_ruleset("time:12:30;url: http://example.com");
    assert_eq!(ruleset.get("time"), Some("12:30"));
    assert_eq!(ruleset.get("url"), Some("http://example.com"));
}

#[test]
fn test_empty_key() {
    let declaration = parse_rule(": value");
    assert_eq!(declaration, Declaration::new("", Some("value")));
}

#[test]
fn test_parse_rule_trims_both_sides() {
    let declaration = parse_rule("  stroke-width :  2px  ");
    assert_eq!(declaration, Declaration::new("stroke-width", Some("2px")));
}

// ============================================================================
// CUSTOM SEPARATORS
// ============================================================================

#[test]
fn test_custom_separators() {
    let parser = RulesetParser::default()
        .with_declaration_separator('&')
        .with_value_separator('=');
    let ruleset = parser.parse("a=1&b = two&&c");

    assert_eq!(
        pairs(&ruleset),
        vec![("a", Some("1")), ("b", Some("two")), ("c", None)]
    );
}

#[test]
fn test_default_separators_ignore_other_delimiters() {
    let ruleset = parse_ruleset("a=1&b=2");
    assert_eq!(pairs(&ruleset), vec![("a=1&b=2", None)]);
}

// ============================================================================
// RULESET API
// ============================================================================

#[test]
fn test_from_str() {
    let ruleset: Ruleset = "x: 1; y: 2".parse().unwrap();
    assert_eq!(ruleset.keys().collect::<Vec<_>>(), vec!["x", "y"]);
}

#[test]
fn test_coerce_single_entry() {
    let ruleset = parse_ruleset("opacity: 0.25");
    let opacity = ruleset.coerce("opacity", number);
    assert_eq!(opacity, 0.25);
    assert!(ruleset.coerce("missing", number).is_nan());
}

#[test]
fn test_into_iter_yields_declarations() {
    let ruleset = parse_ruleset("a:1;b:2");
    let keys: Vec<String> = ruleset.into_iter().map(|d| d.key).collect();
    assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
}

// ============================================================================
// LARGE RULESETS
// ============================================================================

#[test]
fn test_large_ruleset_with_duplicates() {
    let count = 50_000;
    let mut source = String::new();
    for i in 0..count {
        source.push_str(&format!("k{}:{};", i, i));
    }
    for i in (0..count).step_by(2) {
        source.push_str(&format!("k{}:updated{};", i, i));
    }

    let ruleset = parse_ruleset(&source);

    assert_eq!(ruleset.len(), count);
    assert_eq!(ruleset.get("k0"), Some("updated0"));
    assert_eq!(ruleset.get("k1"), Some("1"));
    assert_eq!(ruleset.get("k49998"), Some("updated49998"));
    assert_eq!(ruleset.get("k49999"), Some("49999"));

    let keys: Vec<&str> = ruleset.keys().take(3).collect();
    assert_eq!(keys, vec!["k0", "k1", "k2"]);
    assert_eq!(ruleset.keys().last(), Some("k49999"));
}
