//! Schema-driven coercion of a whole ruleset.
//!
//! A [`Schema`] names the attributes a caller cares about and the coercion
//! function for each. Running a ruleset through it produces a [`Record`]
//! with exactly the schema's keys, in declaration order:
//!
//! - keys in the ruleset but not in the schema are dropped
//! - keys in the schema but not in the ruleset are coerced from `None`
//!
//! ```rust
//! use ruleset::coerce::{css_unit4, deg, number, optional, string};
//! use ruleset::schema::Schema;
//! use ruleset::types::CssUnit;
//!
//! let schema = Schema::new()
//!     .field("padding", css_unit4)
//!     .field("rotate", deg)
//!     .field("opacity", optional(number, "1"))
//!     .field("label", string);
//!
//! let record = schema.parse("padding: 1px 2px; rotate: 370deg; extra: ignored");
//! assert_eq!(record.len(), 4);
//! assert_eq!(record.get("rotate").and_then(|v| v.as_number()), Some(10.0));
//! assert_eq!(record.get("opacity").and_then(|v| v.as_number()), Some(1.0));
//! assert_eq!(record.get("label").and_then(|v| v.as_str()), Some(""));
//! assert!(record.get("extra").is_none());
//!
//! let padding = record.get("padding").and_then(|v| v.as_list()).unwrap();
//! assert_eq!(padding[1].as_unit(), Some(&CssUnit::new(1.0, "px")));
//! assert_eq!(padding[2].as_unit(), Some(&CssUnit::new(2.0, "px")));
//! ```

use crate::coerce::Coerce;
use crate::parser::{Ruleset, parse_ruleset};
use crate::types::Value;
use std::collections::HashMap;
use std::fmt;

type Coercer = Box<dyn Fn(Option<&str>) -> Value + Send + Sync>;

/// An ordered set of attribute names and their coercion functions.
#[derive(Default)]
pub struct Schema {
    fields: Vec<(String, Coercer)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an attribute. Declaring the same name again replaces the
    /// earlier coercion but keeps its position.
    pub fn field<C>(mut self, name: impl Into<String>, coercer: C) -> Self
    where
        C: Coerce + Send + Sync + 'static,
        C::Output: Into<Value>,
    {
        let name = name.into();
        let coercer: Coercer =
            Box::new(move |raw: Option<&str>| -> Value { coercer.coerce(raw).into() });

        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = coercer,
            None => self.fields.push((name, coercer)),
        }
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parses a ruleset string and coerces it through this schema.
    pub fn parse(&self, ruleset: &str) -> Record {
        through_schema(self, &parse_ruleset(ruleset))
    }

    /// Turns the schema into a reusable ruleset parser.
    pub fn into_parser(self) -> impl Fn(&str) -> Record {
        move |ruleset: &str| self.parse(ruleset)
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("fields", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Applies every schema field to the matching raw value.
pub fn through_schema(schema: &Schema, raw: &Ruleset) -> Record {
    let entries = schema
        .fields
        .iter()
        .map(|(key, coercer)| {
            let declaration = raw.declaration(key);
            if declaration.is_none() {
                log::debug!("attribute {:?} not in ruleset, using its default", key);
            }
            let value = declaration.and_then(|d| d.value.as_deref());
            (key.clone(), coercer(value))
        })
        .collect();

    Record { entries }
}

/// Typed attribute values, in schema order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    entries: Vec<(String, Value)>,
}

impl Record {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_map(self) -> HashMap<String, Value> {
        self.entries.into_iter().collect()
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
