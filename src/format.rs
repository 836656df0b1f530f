//! Declarative format specifications.
//!
//! Document-format descriptions write a numeric field format as `N(m.k)`,
//! where `m` is the maximum number of budget units in the value (the sign
//! for a negative number, plus integer and fractional digits, without the
//! decimal separator) and `k` is the maximum number of fractional digits.
//! An integer field is written `N(m)`.
//!
//! [`FormatSpec`] is the serde-facing counterpart of
//! [`NumberValidator`](crate::NumberValidator): it can be declared in a
//! schema/config file or parsed from the textual notation, then compiled
//! into a validator. Invariant checks run at compile time, not during
//! deserialization.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::validator::NumberValidator;

/// A fixed-point format declaration.
///
/// Fields are signed to mirror the validator's construction contract:
/// out-of-range values deserialize and parse fine and are rejected when
/// compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatSpec {
    /// Maximum total budget units (sign plus all digits).
    pub precision: i32,

    /// Maximum fractional digits. Defaults to 0 (integer format).
    #[serde(default)]
    pub scale: i32,

    /// Reject values with a leading `-`. Defaults to `false`. The textual
    /// notation carries no sign restriction, so parsing never sets this.
    #[serde(default)]
    pub only_positive: bool,
}

impl FormatSpec {
    /// Compiles this specification into a ready-to-use validator.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `precision` or `scale` violate the
    /// format invariants (see [`NumberValidator::new`]).
    pub fn compile(&self) -> Result<NumberValidator, ConfigError> {
        NumberValidator::new(self.precision, self.scale, self.only_positive)
    }
}

impl FromStr for FormatSpec {
    type Err = ConfigError;

    /// Parses the textual notation `N(m)` or `N(m.k)`.
    ///
    /// The whole string must be consumed; no surrounding whitespace or
    /// trailing characters are permitted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidNotation {
            notation: s.to_string(),
        };

        let body = s
            .strip_prefix("N(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;

        let (precision_str, scale_str) = match body.split_once('.') {
            Some((m, k)) => (m, Some(k)),
            None => (body, None),
        };

        let precision = parse_component(precision_str).ok_or_else(invalid)?;
        let scale = match scale_str {
            Some(k) => parse_component(k).ok_or_else(invalid)?,
            None => 0,
        };

        Ok(Self {
            precision,
            scale,
            only_positive: false,
        })
    }
}

/// Parses one notation component: a non-empty run of ASCII digits.
///
/// Signs are structurally impossible in the notation, so components are
/// always non-negative. Values beyond `i32::MAX` are rejected as malformed
/// notation rather than clamped.
fn parse_component(s: &str) -> Option<i32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
