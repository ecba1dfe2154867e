//! Human-readable notations used by players to talk about stats.
//!
//! Two codecs live here:
//! - [`number`]: compact suffix notation for large amounts (`1.5K`, `420.0T`, `2Qa`)
//! - [`duration`]: letter-suffixed durations (`1d 2h 3m 4s`)
//!
//! Both accept raw numeric text as a pass-through, so `"1500"` parses the same as
//! `1500.0`. Call sites that take "a number or its text" use [`NumberInput`] and
//! [`DurationInput`] so the parse happens once, at the boundary.

pub mod duration;
pub mod number;

pub use duration::TimeUnit;
pub use number::Magnitude;

use crate::error::{ErrorSeverity, FarmError};

/// Errors raised by the notation codecs.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum NotationError {
    /// Text does not follow the expected notation.
    #[error("can't parse \"{input}\": {reason}")]
    Parse { input: String, reason: &'static str },

    /// Value is at or beyond the largest representable compact magnitude.
    #[error("{value} exceeds the largest compact magnitude")]
    Overflow { value: f64 },

    /// NaN or infinity was handed to a formatter.
    #[error("{value} is not a finite number")]
    NonFinite { value: f64 },

    /// Compact notation covers non-negative amounts only.
    #[error("{value} is negative and has no compact form")]
    NegativeAmount { value: f64 },

    /// Durations are never negative.
    #[error("duration of {seconds} seconds is negative")]
    NegativeDuration { seconds: f64 },
}

impl NotationError {
    pub(crate) fn parse(input: &str, reason: &'static str) -> Self {
        Self::Parse {
            input: input.to_owned(),
            reason,
        }
    }
}

impl FarmError for NotationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "NOTATION_PARSE",
            Self::Overflow { .. } => "NOTATION_OVERFLOW",
            Self::NonFinite { .. } => "NOTATION_NON_FINITE",
            Self::NegativeAmount { .. } => "NOTATION_NEGATIVE_AMOUNT",
            Self::NegativeDuration { .. } => "NOTATION_NEGATIVE_DURATION",
        }
    }
}

/// Parses plain numeric text, rejecting NaN and infinities.
pub(crate) fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// An amount given either as a number or as compact text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumberInput<'a> {
    Value(f64),
    Text(&'a str),
}

impl NumberInput<'_> {
    /// Resolves to a numeric value, parsing compact text if needed.
    pub fn resolve(&self) -> Result<f64, NotationError> {
        match *self {
            Self::Value(value) => Ok(value),
            Self::Text(text) => number::parse(text),
        }
    }
}

impl From<f64> for NumberInput<'_> {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl From<u32> for NumberInput<'_> {
    fn from(value: u32) -> Self {
        Self::Value(f64::from(value))
    }
}

impl From<i32> for NumberInput<'_> {
    fn from(value: i32) -> Self {
        Self::Value(f64::from(value))
    }
}

impl From<u64> for NumberInput<'_> {
    fn from(value: u64) -> Self {
        Self::Value(value as f64)
    }
}

impl<'a> From<&'a str> for NumberInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for NumberInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

/// A duration given either as raw seconds or as duration text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DurationInput<'a> {
    Seconds(f64),
    Text(&'a str),
}

impl DurationInput<'_> {
    /// Resolves to seconds, parsing duration text if needed.
    pub fn resolve(&self) -> Result<f64, NotationError> {
        match *self {
            Self::Seconds(seconds) => Ok(seconds),
            Self::Text(text) => duration::parse(text),
        }
    }
}

impl From<f64> for DurationInput<'_> {
    fn from(seconds: f64) -> Self {
        Self::Seconds(seconds)
    }
}

impl From<u32> for DurationInput<'_> {
    fn from(seconds: u32) -> Self {
        Self::Seconds(f64::from(seconds))
    }
}

impl From<u64> for DurationInput<'_> {
    fn from(seconds: u64) -> Self {
        Self::Seconds(seconds as f64)
    }
}

impl<'a> From<&'a str> for DurationInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for DurationInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

/// Owned "number or compact text" value as it appears in player data files.
///
/// `{"amount": 1500}` and `{"amount": "1.5K"}` both deserialize.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum CompactValue {
    Number(f64),
    Text(String),
}

impl CompactValue {
    /// Borrows this value as a [`NumberInput`].
    pub fn as_input(&self) -> NumberInput<'_> {
        match self {
            Self::Number(value) => NumberInput::Value(*value),
            Self::Text(text) => NumberInput::Text(text),
        }
    }

    pub fn resolve(&self) -> Result<f64, NotationError> {
        self.as_input().resolve()
    }
}

impl From<f64> for CompactValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CompactValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_input_resolves_both_forms() {
        assert_eq!(NumberInput::from(1500.0).resolve(), Ok(1500.0));
        assert_eq!(NumberInput::from("1.5K").resolve(), Ok(1500.0));
        assert_eq!(NumberInput::from(42u64).resolve(), Ok(42.0));
    }

    #[test]
    fn duration_input_resolves_both_forms() {
        assert_eq!(DurationInput::from(90.0).resolve(), Ok(90.0));
        assert_eq!(DurationInput::from("1m 30s").resolve(), Ok(90.0));
    }

    #[test]
    fn compact_value_resolves() {
        assert_eq!(CompactValue::from("2B").resolve(), Ok(2e9));
        assert_eq!(CompactValue::from(7.0).resolve(), Ok(7.0));
        assert!(CompactValue::from("two").resolve().is_err());
    }

    #[test]
    fn parse_finite_rejects_special_values() {
        assert_eq!(parse_finite("12.5"), Some(12.5));
        assert_eq!(parse_finite("inf"), None);
        assert_eq!(parse_finite("NaN"), None);
        assert_eq!(parse_finite("12k"), None);
    }

    #[test]
    fn error_codes_are_stable() {
        let err = NotationError::parse("x", "bad");
        assert_eq!(err.error_code(), "NOTATION_PARSE");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.to_string(), "can't parse \"x\": bad");
    }
}
