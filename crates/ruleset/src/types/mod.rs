pub mod unit;
pub mod value;

pub use unit::{CssUnit, Unit};
pub use value::Value;
