//! Fixed-point number format validation.
//!
//! Compiles the digit-budget configuration into a reusable validator and
//! evaluates candidate field values against it. Validation is a total
//! function: malformed, empty, or absent input yields `false`, never an
//! error, so callers can use the result directly in boolean contexts.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::ConfigError;

/// Anchored shape of a fixed-point number: optional single sign, mandatory
/// integer digit run, optional separator (`.` or `,`) with a mandatory
/// fractional digit run. Both separators are accepted as a structural
/// choice of the document format, independent of runtime locale.
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-]?)(\d+)(?:[.,](\d+))?$").expect("valid regex"));

/// Validator for the fixed-point numeric format `N(precision.scale)`.
///
/// `precision` is the total budget: the sign (when present) plus integer
/// and fractional digits together must not exceed it. `scale` bounds the
/// fractional digit run alone. With `only_positive` set, a leading `-` is
/// rejected.
///
/// The validator holds no mutable state after construction; a single
/// instance may be shared across threads and invoked concurrently.
#[derive(Debug, Clone)]
pub struct NumberValidator {
    precision: usize,
    scale: usize,
    only_positive: bool,
}

impl NumberValidator {
    /// Creates a validator for the format `N(precision.scale)`.
    ///
    /// Inputs are signed so that invariant-violating configurations are
    /// rejected rather than unrepresentable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositivePrecision`] when `precision <= 0`,
    /// and [`ConfigError::ScaleOutOfRange`] when `scale < 0` or
    /// `scale >= precision`.
    pub fn new(precision: i32, scale: i32, only_positive: bool) -> Result<Self, ConfigError> {
        if precision <= 0 {
            return Err(ConfigError::NonPositivePrecision { precision });
        }
        if scale < 0 || scale >= precision {
            return Err(ConfigError::ScaleOutOfRange { precision, scale });
        }

        debug!(precision, scale, only_positive, "number format validator ready");

        // Lossless after the invariant checks above.
        Ok(Self {
            precision: precision.unsigned_abs() as usize,
            scale: scale.unsigned_abs() as usize,
            only_positive,
        })
    }

    /// Tests whether `value` is a well-formed fixed-point number within
    /// this format's budget.
    ///
    /// Total over its input domain: `None`, the empty string, and any
    /// structurally malformed string (whitespace anywhere, multiple signs
    /// or separators, a separator without digits on either side, non-digit
    /// characters) yield `false`.
    #[must_use]
    pub fn is_valid_number<'v>(&self, value: impl Into<Option<&'v str>>) -> bool {
        let Some(value) = value.into() else {
            return false;
        };
        let Some(caps) = NUMBER_RE.captures(value) else {
            return false;
        };

        let sign = caps.get(1).map_or("", |m| m.as_str());
        let int_digits = caps.get(2).map_or(0, |m| m.len());
        let frac_digits = caps.get(3).map_or(0, |m| m.len());

        // The sign consumes one unit of the overall digit budget.
        if sign.len() + int_digits + frac_digits > self.precision {
            return false;
        }
        if frac_digits > self.scale {
            return false;
        }

        !(self.only_positive && sign == "-")
    }

    /// Maximum total budget units (sign plus all digits).
    #[must_use]
    pub const fn precision(&self) -> usize {
        self.precision
    }

    /// Maximum fractional digits.
    #[must_use]
    pub const fn scale(&self) -> usize {
        self.scale
    }

    /// Whether a leading `-` is rejected.
    #[must_use]
    pub const fn only_positive(&self) -> bool {
        self.only_positive
    }
}
