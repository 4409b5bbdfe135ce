//! Umbrella crate for the `ruleset` parser.
//!
//! Re-exports everything from [`ruleset`] and adds [`init_logger`] for
//! capturing the parser's diagnostics in a file.
//!
//! ```rust
//! use ruleset_rs::{Schema, coerce};
//!
//! let parse = Schema::new()
//!     .field("margin", coerce::css_unit4)
//!     .field("fill", coerce::string)
//!     .into_parser();
//!
//! let record = parse("fill: red; margin: 0 auto");
//! assert_eq!(record.get("fill").and_then(|v| v.as_str()), Some("red"));
//! ```

pub mod error;
pub mod log_init;

pub use error::LogInitError;
pub use log_init::init_logger;
pub use ruleset::*;

// Re-export the log crate so callers can match on the parser's log targets.
pub use log;
