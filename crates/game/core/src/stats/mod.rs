//! Stat accrual model.
//!
//! ```text
//! [ StatKind + aliases ]
//!      ↓
//! [ Stat: amount, base multiplier, delay, zone multiplier ]
//!      ↓
//! [ Statistics: four stats, zone broadcast, balance, soul attack ]
//! ```
//!
//! ## Principles
//!
//! 1. **Canonical fields only**: amount, base multiplier, delay and zone multiplier
//!    are stored; effective multiplier and rate are recomputed on every read
//! 2. **Validate before mutate**: a setter that fails leaves the stat untouched
//! 3. **Deterministic**: pure arithmetic, no I/O

pub mod kind;
pub mod soul_attack;
pub mod stat;
pub mod statistics;

pub use kind::StatKind;
pub use soul_attack::SoulAttackCurve;
pub use stat::Stat;
pub use statistics::{StatEntry, Statistics};

use crate::config::ConfigError;
use crate::error::{ErrorSeverity, FarmError};
use crate::notation::NotationError;

/// Errors raised by stat operations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StatError {
    /// A player-data key matched no alias of any stat.
    #[error("unknown stat \"{0}\"")]
    UnknownStat(String),

    /// Two player-data keys resolved to the same stat.
    #[error("stat {0} is given more than once")]
    DuplicateStat(StatKind),

    /// An argument is outside its domain.
    #[error("{argument} must be {expected}, got {value}")]
    InvalidArgument {
        argument: &'static str,
        expected: &'static str,
        value: f64,
    },

    /// The stat does not accrue, so no duration reaches the target.
    #[error("{0} has a zero accrual rate")]
    ZeroRate(StatKind),

    /// A ratio needs this stat's amount as a divisor.
    #[error("{0} amount is zero")]
    ZeroAmount(StatKind),

    /// Soul attack prediction against an opponent with no psychic power.
    #[error("opponent psychic power is zero")]
    ZeroOpponentPower,

    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl StatError {
    /// True for every variant caused by a zero divisor.
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(
            self,
            Self::ZeroRate(_) | Self::ZeroAmount(_) | Self::ZeroOpponentPower
        )
    }

    pub(crate) fn invalid(argument: &'static str, expected: &'static str, value: f64) -> Self {
        Self::InvalidArgument {
            argument,
            expected,
            value,
        }
    }
}

impl FarmError for StatError {
    fn severity(&self) -> ErrorSeverity {
        use StatError::*;
        match self {
            UnknownStat(_) | DuplicateStat(_) | InvalidArgument { .. } => {
                ErrorSeverity::Validation
            }
            ZeroRate(_) | ZeroAmount(_) | ZeroOpponentPower => ErrorSeverity::Arithmetic,
            Notation(err) => err.severity(),
            Config(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use StatError::*;
        match self {
            UnknownStat(_) => "STAT_UNKNOWN",
            DuplicateStat(_) => "STAT_DUPLICATE",
            InvalidArgument { .. } => "STAT_INVALID_ARGUMENT",
            ZeroRate(_) => "STAT_ZERO_RATE",
            ZeroAmount(_) => "STAT_ZERO_AMOUNT",
            ZeroOpponentPower => "STAT_ZERO_OPPONENT_POWER",
            Notation(err) => err.error_code(),
            Config(err) => err.error_code(),
        }
    }
}
