//! # ruleset - CSS-style attribute rulesets
//!
//! Parses `key: value;` strings, the shape of an HTML `style` attribute or an
//! SVG presentation attribute, and coerces the raw values into typed data
//! according to a caller-declared schema.
//!
//! - **Parsing**: split a ruleset into a [`Ruleset`](parser::Ruleset) of raw declarations
//! - **Coercion**: turn raw text into numbers, angles, booleans and CSS units
//! - **Schemas**: declare the attributes you expect and get a typed [`Record`](schema::Record)
//!
//! ## Quick Start
//!
//! ```rust
//! use ruleset::coerce::{bool, css_unit, number};
//! use ruleset::schema::Schema;
//! use ruleset::types::CssUnit;
//!
//! let schema = Schema::new()
//!     .field("width", css_unit)
//!     .field("opacity", number)
//!     .field("hidden", bool);
//!
//! let record = schema.parse("width: 100%; opacity: 0.5; color: red");
//!
//! assert_eq!(record.get("width").and_then(|v| v.as_unit()), Some(&CssUnit::new(100.0, "%")));
//! assert_eq!(record.get("opacity").and_then(|v| v.as_number()), Some(0.5));
//! assert_eq!(record.get("hidden").and_then(|v| v.as_bool()), Some(false));
//! assert!(record.get("color").is_none());
//! ```
//!
//! ## Error Handling
//!
//! Nothing here aborts on bad input. A declaration without `:` keeps its key
//! with no value, non-numeric text becomes `NaN`, and shorthand expansions
//! that cannot be satisfied produce a [`RulesetError`] stored as
//! [`Value::Invalid`](types::Value::Invalid) next to the other attributes.
//!
//! ## Modules
//!
//! - [`parser`]: ruleset parsing and the raw data structures
//! - [`coerce`]: coercion functions and combinators
//! - [`schema`]: schema-driven coercion of a whole ruleset
//! - [`types`]: CSS unit values and the uniform [`Value`](types::Value)
//! - [`error`]: error types for strict coercions

pub mod coerce;
pub mod error;
pub mod parser;
pub mod schema;
pub mod types;

pub use coerce::Coerce;
pub use error::RulesetError;
pub use parser::{Declaration, Ruleset, RulesetParser, parse_rule, parse_ruleset};
pub use schema::{Record, Schema, through_schema};
pub use types::{CssUnit, Unit, Value};
