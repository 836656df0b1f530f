//! `numformat` — fixed-point number format validation
//!
//! Regulatory document submission formats describe numeric fields with a
//! fixed-point notation `N(m.k)`: at most `m` budget units in total (the
//! sign, when present, plus integer and fractional digits) and at most `k`
//! fractional digits. This crate pre-validates textual field values against
//! such formats before any further processing.
//!
//! The entry point is [`NumberValidator`], constructed either directly or
//! by compiling a [`FormatSpec`] declared in configuration or parsed from
//! the textual `N(m.k)` notation.
//!
//! ```
//! use numformat::NumberValidator;
//!
//! let validator = NumberValidator::new(4, 2, true).unwrap();
//! assert!(validator.is_valid_number("+3.14"));
//! assert!(!validator.is_valid_number("-3.14"));
//! ```

pub mod error;
pub mod format;
pub mod validator;

pub use error::ConfigError;
pub use format::FormatSpec;
pub use validator::NumberValidator;
