use crate::error::{ErrorSeverity, FarmError};
use crate::stats::StatKind;

/// Calculator constants and tunable parameters.
///
/// Delays are seconds per accrual cycle. Fist strength, body toughness and
/// psychic power accrue per click; tokens accrue per interval and always use
/// a fixed multiplier.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FarmConfig {
    pub fist_strength_delay: f64,
    pub body_toughness_delay: f64,
    pub psychic_power_delay: f64,
    pub tokens_delay: f64,
    /// Multiplier applied to tokens regardless of what player data says.
    pub tokens_multiplier: f64,
}

impl FarmConfig {
    // ===== defaults matching the live game =====
    pub const DEFAULT_FIST_STRENGTH_DELAY: f64 = 1.0;
    pub const DEFAULT_BODY_TOUGHNESS_DELAY: f64 = 1.25;
    pub const DEFAULT_PSYCHIC_POWER_DELAY: f64 = 1.5;
    pub const DEFAULT_TOKENS_DELAY: f64 = 60.0;
    pub const DEFAULT_TOKENS_MULTIPLIER: f64 = 5.0;

    /// Multiplier given to a stat when player data does not specify one.
    pub const DEFAULT_MULTIPLIER: f64 = 1.0;

    pub const fn new() -> Self {
        Self {
            fist_strength_delay: Self::DEFAULT_FIST_STRENGTH_DELAY,
            body_toughness_delay: Self::DEFAULT_BODY_TOUGHNESS_DELAY,
            psychic_power_delay: Self::DEFAULT_PSYCHIC_POWER_DELAY,
            tokens_delay: Self::DEFAULT_TOKENS_DELAY,
            tokens_multiplier: Self::DEFAULT_TOKENS_MULTIPLIER,
        }
    }

    /// Replaces the accrual delay of one stat (builder pattern).
    #[must_use]
    pub fn with_delay(mut self, kind: StatKind, delay: f64) -> Self {
        match kind {
            StatKind::FistStrength => self.fist_strength_delay = delay,
            StatKind::BodyToughness => self.body_toughness_delay = delay,
            StatKind::PsychicPower => self.psychic_power_delay = delay,
            StatKind::Tokens => self.tokens_delay = delay,
        }
        self
    }

    #[must_use]
    pub fn with_tokens_multiplier(mut self, multiplier: f64) -> Self {
        self.tokens_multiplier = multiplier;
        self
    }

    /// Accrual delay for a stat kind.
    pub fn delay(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::FistStrength => self.fist_strength_delay,
            StatKind::BodyToughness => self.body_toughness_delay,
            StatKind::PsychicPower => self.psychic_power_delay,
            StatKind::Tokens => self.tokens_delay,
        }
    }

    /// Checks that every delay is positive and the tokens multiplier is not negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in StatKind::ALL {
            let delay = self.delay(kind);
            if !(delay.is_finite() && delay > 0.0) {
                return Err(ConfigError::InvalidDelay { kind, delay });
            }
        }
        if !(self.tokens_multiplier.is_finite() && self.tokens_multiplier >= 0.0) {
            return Err(ConfigError::InvalidTokensMultiplier(self.tokens_multiplier));
        }
        Ok(())
    }
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors found while validating a [`FarmConfig`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("delay for {kind} must be a positive number of seconds, got {delay}")]
    InvalidDelay { kind: StatKind, delay: f64 },

    #[error("tokens multiplier must be a non-negative number, got {0}")]
    InvalidTokensMultiplier(f64),
}

impl FarmError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDelay { .. } => "CONFIG_INVALID_DELAY",
            Self::InvalidTokensMultiplier(_) => "CONFIG_INVALID_TOKENS_MULTIPLIER",
        }
    }
}
