//! Error types for `numformat`
//!
//! All errors here are configuration errors: they indicate a misconfigured
//! format, not a bad field value. Validation itself is total and never
//! surfaces through this type.

use thiserror::Error;

/// Format configuration errors.
///
/// Raised when a validator is constructed with invariant-violating
/// precision/scale, or when a textual format notation cannot be parsed.
/// Not recoverable by retry; the caller must supply a valid format.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Precision must be a positive number of budget units
    #[error("precision must be positive, got {precision}")]
    NonPositivePrecision {
        /// The rejected precision value
        precision: i32,
    },

    /// Scale must be non-negative and strictly less than precision
    #[error("scale must be non-negative and less than precision, got scale {scale} for precision {precision}")]
    ScaleOutOfRange {
        /// Precision the scale was checked against
        precision: i32,
        /// The rejected scale value
        scale: i32,
    },

    /// Textual format notation is not of the form `N(m)` or `N(m.k)`
    #[error("invalid format notation '{notation}': expected N(m) or N(m.k)")]
    InvalidNotation {
        /// The notation string that failed to parse
        notation: String,
    },
}
