//! Duration notation: whitespace-separated `{quantity}{unit}` tokens.
//!
//! Units are `d`, `h`, `m` and `s`. A token without a quantity counts one unit,
//! so `"d"` is a day. Plain numeric text is taken as seconds.

use super::{NotationError, parse_finite};

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 60.0 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: f64 = 24.0 * SECONDS_PER_HOUR;

/// A duration unit letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Day,
    Hour,
    Minute,
    Second,
}

impl TimeUnit {
    /// All units, largest first.
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Day,
        TimeUnit::Hour,
        TimeUnit::Minute,
        TimeUnit::Second,
    ];

    pub const fn seconds(&self) -> f64 {
        match self {
            Self::Day => SECONDS_PER_DAY,
            Self::Hour => SECONDS_PER_HOUR,
            Self::Minute => SECONDS_PER_MINUTE,
            Self::Second => 1.0,
        }
    }

    pub const fn letter(&self) -> char {
        match self {
            Self::Day => 'd',
            Self::Hour => 'h',
            Self::Minute => 'm',
            Self::Second => 's',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.letter() == letter)
    }
}

/// Parses duration text into seconds.
///
/// # Examples
/// ```
/// # use farm_core::notation::duration;
/// assert_eq!(duration::parse("1d 2h 3m 4s").unwrap(), 93784.0);
/// assert_eq!(duration::parse("h").unwrap(), 3600.0);
/// assert_eq!(duration::parse("90").unwrap(), 90.0);
/// ```
pub fn parse(text: &str) -> Result<f64, NotationError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0.0);
    }
    if let Some(seconds) = parse_finite(text) {
        return Ok(seconds);
    }

    text.split_whitespace()
        .try_fold(0.0, |total, token| {
            parse_token(text, token).map(|seconds| total + seconds)
        })
}

fn parse_token(input: &str, token: &str) -> Result<f64, NotationError> {
    let mut chars = token.chars();
    let letter = chars
        .next_back()
        .ok_or_else(|| NotationError::parse(input, "empty duration token"))?;
    let unit = TimeUnit::from_letter(letter)
        .ok_or_else(|| NotationError::parse(input, "unknown duration unit"))?;

    let quantity = chars.as_str();
    let quantity = if quantity.is_empty() {
        1.0
    } else {
        parse_finite(quantity)
            .filter(|quantity| *quantity > 0.0)
            .ok_or_else(|| NotationError::parse(input, "duration quantity must be positive"))?
    };

    Ok(quantity * unit.seconds())
}

/// Formats seconds as duration text.
///
/// Whole days, hours and minutes are taken greedily; the remainder is printed
/// as (possibly fractional) seconds. Zero components are skipped, so a zero
/// duration formats as the empty string.
///
/// # Examples
/// ```
/// # use farm_core::notation::duration;
/// assert_eq!(duration::format(93784.0).unwrap(), "1d 2h 3m 4s");
/// assert_eq!(duration::format(90.5).unwrap(), "1m 30.5s");
/// assert_eq!(duration::format(0.0).unwrap(), "");
/// ```
pub fn format(seconds: f64) -> Result<String, NotationError> {
    if !seconds.is_finite() {
        return Err(NotationError::NonFinite { value: seconds });
    }
    if seconds < 0.0 {
        return Err(NotationError::NegativeDuration { seconds });
    }

    let mut remaining = seconds;
    let mut components = [0.0; 4];
    for (slot, unit) in components.iter_mut().zip(TimeUnit::ALL) {
        if unit == TimeUnit::Second {
            *slot = remaining;
        } else {
            let whole = (remaining / unit.seconds()).floor();
            remaining -= whole * unit.seconds();
            *slot = whole;
        }
    }

    let parts: Vec<String> = components
        .iter()
        .zip(TimeUnit::ALL)
        .filter(|(value, _)| **value != 0.0)
        .map(|(value, unit)| format!("{value}{}", unit.letter()))
        .collect();

    Ok(parts.join(" "))
}
