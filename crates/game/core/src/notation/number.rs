//! Compact number notation.
//!
//! Amounts in the game grow across many orders of magnitude, so players write
//! them with a magnitude suffix: `K` (10³), `M` (10⁶), `B` (10⁹), `T` (10¹²),
//! `Qa` (10¹⁵) and `Qi` (10¹⁸). Parsing is case-insensitive; formatting always
//! uses the canonical casing.
//!
//! Formatting is lossy. The quantity in front of the suffix is rendered with
//! four significant digits in total (`1.234K`, `12.34M`, `123.4B`), so only
//! `parse(format(x))` is guaranteed to land within the rendered precision of `x`.

use super::{NotationError, parse_finite};

/// Smallest value that no longer fits in compact notation.
pub const CEILING: f64 = 1e21;

/// Values below this are formatted as plain numbers.
pub const COMPACT_THRESHOLD: f64 = 1e3;

/// Significant digits shown in front of the suffix.
const SIGNIFICANT_DIGITS: usize = 4;

/// A magnitude suffix of the compact notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Magnitude {
    Thousand,
    Million,
    Billion,
    Trillion,
    Quadrillion,
    Quintillion,
}

impl Magnitude {
    /// All magnitudes, smallest first.
    pub const ALL: [Magnitude; 6] = [
        Magnitude::Thousand,
        Magnitude::Million,
        Magnitude::Billion,
        Magnitude::Trillion,
        Magnitude::Quadrillion,
        Magnitude::Quintillion,
    ];

    /// Multiplier this suffix stands for.
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Thousand => 1e3,
            Self::Million => 1e6,
            Self::Billion => 1e9,
            Self::Trillion => 1e12,
            Self::Quadrillion => 1e15,
            Self::Quintillion => 1e18,
        }
    }

    /// Canonical suffix text.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Thousand => "K",
            Self::Million => "M",
            Self::Billion => "B",
            Self::Trillion => "T",
            Self::Quadrillion => "Qa",
            Self::Quintillion => "Qi",
        }
    }

    /// Looks up a suffix, ignoring ASCII case.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|magnitude| magnitude.suffix().eq_ignore_ascii_case(suffix))
    }

    /// Largest magnitude not exceeding `value`, if any.
    pub fn for_value(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .rev()
            .find(|magnitude| value >= magnitude.factor())
    }
}

/// Parses compact notation into a number.
///
/// Numeric text passes through unchanged. Otherwise the trailing letters are the
/// suffix and everything before them is the quantity; an empty quantity counts
/// as one, so `"K"` is 1000.
///
/// # Examples
/// ```
/// # use farm_core::notation::number;
/// assert_eq!(number::parse("2.5M").unwrap(), 2_500_000.0);
/// assert_eq!(number::parse("K").unwrap(), 1000.0);
/// assert_eq!(number::parse("750").unwrap(), 750.0);
/// ```
pub fn parse(text: &str) -> Result<f64, NotationError> {
    let text = text.trim();
    if let Some(value) = parse_finite(text) {
        return Ok(value);
    }

    let split = text
        .trim_end_matches(|c: char| c.is_ascii_alphabetic())
        .len();
    let (quantity, suffix) = text.split_at(split);
    if suffix.is_empty() {
        return Err(NotationError::parse(text, "expected a number or a magnitude suffix"));
    }

    let magnitude = Magnitude::from_suffix(suffix)
        .ok_or_else(|| NotationError::parse(text, "unknown magnitude suffix"))?;

    let quantity = quantity.trim();
    let quantity = if quantity.is_empty() {
        1.0
    } else {
        parse_finite(quantity)
            .ok_or_else(|| NotationError::parse(text, "quantity is not a number"))?
    };
    if quantity.is_sign_negative() {
        return Err(NotationError::parse(text, "quantity is negative"));
    }

    Ok(quantity * magnitude.factor())
}

/// Formats a number in compact notation.
///
/// # Errors
/// - [`NotationError::NonFinite`] for NaN and infinities
/// - [`NotationError::NegativeAmount`] for values below zero
/// - [`NotationError::Overflow`] for values at or above [`CEILING`]
///
/// # Examples
/// ```
/// # use farm_core::notation::number;
/// assert_eq!(number::format(999.0).unwrap(), "999");
/// assert_eq!(number::format(1234.0).unwrap(), "1.234K");
/// assert_eq!(number::format(420e12).unwrap(), "420.0T");
/// ```
pub fn format(value: f64) -> Result<String, NotationError> {
    if !value.is_finite() {
        return Err(NotationError::NonFinite { value });
    }
    if value == 0.0 {
        return Ok("0".to_owned());
    }
    if value < 0.0 {
        return Err(NotationError::NegativeAmount { value });
    }
    if value < COMPACT_THRESHOLD {
        return Ok(value.to_string());
    }
    if value >= CEILING {
        return Err(NotationError::Overflow { value });
    }

    let magnitude = Magnitude::for_value(value).unwrap_or(Magnitude::Thousand);
    let quantity = value / magnitude.factor();
    let precision = SIGNIFICANT_DIGITS.saturating_sub(integer_digits(quantity));

    Ok(format!("{quantity:.precision$}{}", magnitude.suffix()))
}

/// Number of digits before the decimal point (at least one).
fn integer_digits(value: f64) -> usize {
    let mut whole = value.abs().trunc();
    let mut digits = 1;
    while whole >= 10.0 {
        whole = (whole / 10.0).trunc();
        digits += 1;
    }
    digits
}
