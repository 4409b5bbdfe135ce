use std::fmt;

/// The unit part of a [`CssUnit`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Unit {
    /// A trailing run of ASCII letters and `%` (e.g. `px`, `em`, `%`).
    Token(String),
    /// A numeric value was found but no unit followed it.
    Unitless,
    /// No leading numeric text was found.
    #[default]
    Undefined,
}

impl Unit {
    pub fn token(unit: impl Into<String>) -> Self {
        Self::Token(unit.into())
    }

    /// The textual form of the unit: the token itself, `"none"` or `"undefined"`.
    pub fn as_str(&self) -> &str {
        match self {
            Unit::Token(token) => token,
            Unit::Unitless => "none",
            Unit::Undefined => "undefined",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A number paired with its CSS unit, such as `10px` or `50%`.
///
/// `value` is `None` only when `unit` is [`Unit::Undefined`]. A leading
/// run that is all dots (e.g. `.px`) parses to `Some(NaN)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CssUnit {
    pub value: Option<f64>,
    pub unit: Unit,
}

impl CssUnit {
    pub const UNDEFINED: Self = Self {
        value: None,
        unit: Unit::Undefined,
    };

    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            unit: Unit::Token(unit.into()),
        }
    }

    pub fn unitless(value: f64) -> Self {
        Self {
            value: Some(value),
            unit: Unit::Unitless,
        }
    }

    pub fn is_undefined(&self) -> bool {
        self.unit == Unit::Undefined
    }
}
