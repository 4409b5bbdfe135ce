use crate::coerce::Coerce;
use std::collections::HashMap;
use std::convert::Infallible;
use std::str::FromStr;

/// A single `key: value` declaration.
///
/// `value` is `None` when the source segment had no `:` separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub key: String,
    pub value: Option<String>,
}

impl Declaration {
    pub fn new(key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        Self {
            key: key.into(),
            value: value.map(Into::into),
        }
    }
}

/// Raw declarations of a ruleset, keyed by attribute name.
///
/// Keys are unique. Inserting a key that already exists replaces its value
/// but keeps the position of the first occurrence.
///
/// # Examples
///
/// ```rust
/// use ruleset::parser::Ruleset;
///
/// let ruleset: Ruleset = "width: 10px; color: red; width: 20px".parse().unwrap();
/// assert_eq!(ruleset.get("width"), Some("20px"));
/// assert_eq!(ruleset.keys().collect::<Vec<_>>(), vec!["width", "color"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ruleset {
    declarations: Vec<Declaration>,
    positions: HashMap<String, usize>,
}

impl Ruleset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a declaration, overwriting the value of an existing key.
    pub fn insert(&mut self, declaration: Declaration) {
        match self.positions.get(&declaration.key) {
            Some(&index) => self.declarations[index].value = declaration.value,
            None => {
                self.positions.insert(declaration.key.clone(), self.declarations.len());
                self.declarations.push(declaration);
            }
        }
    }

    /// The raw value for `key`, or `None` if the key is absent or has no value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.declaration(key)
            .and_then(|declaration| declaration.value.as_deref())
    }

    pub fn declaration(&self, key: &str) -> Option<&Declaration> {
        self.positions
            .get(key)
            .map(|&index| &self.declarations[index])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(|d| d.key.as_str())
    }

    /// Applies a coercion function to the raw value of a single key.
    pub fn coerce<C: Coerce>(&self, key: &str, coercer: C) -> C::Output {
        coercer.coerce(self.get(key))
    }
}

impl FromStr for Ruleset {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(super::parse_ruleset(s))
    }
}

impl Extend<Declaration> for Ruleset {
    fn extend<I: IntoIterator<Item = Declaration>>(&mut self, iter: I) {
        for declaration in iter {
            self.insert(declaration);
        }
    }
}

impl FromIterator<Declaration> for Ruleset {
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        let mut ruleset = Ruleset::new();
        ruleset.extend(iter);
        ruleset
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Ruleset {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(key, value)| Declaration::new(key, Some(value)))
            .collect()
    }
}

impl IntoIterator for Ruleset {
    type Item = Declaration;
    type IntoIter = std::vec::IntoIter<Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Ruleset {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}
