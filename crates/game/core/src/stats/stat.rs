//! A single trained resource and its projections.
//!
//! Formulas:
//! - effective multiplier = base multiplier × (zone multiplier or 1)
//! - rate = effective multiplier / delay  (amount per second)
//! - projected amount = rate × duration
//! - time to reach = |target − amount| / rate

use super::{StatError, StatKind};
use crate::notation::{DurationInput, NumberInput, duration, number};
use crate::zones::Zone;

/// Mutable state of one stat.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Stat {
    kind: StatKind,
    amount: f64,
    base_multiplier: f64,
    delay: f64,
    zone_multiplier: Option<f64>,
}

impl Stat {
    /// Creates a stat outside any zone.
    ///
    /// # Errors
    /// [`StatError::InvalidArgument`] if `amount` or `multiplier` is negative or
    /// `delay` is not positive.
    pub fn new(
        kind: StatKind,
        amount: f64,
        multiplier: f64,
        delay: f64,
    ) -> Result<Self, StatError> {
        Ok(Self {
            kind,
            amount: check_amount(amount)?,
            base_multiplier: check_multiplier(multiplier)?,
            delay: check_delay(delay)?,
            zone_multiplier: None,
        })
    }

    /// Zero-amount stat from values already known to be valid.
    pub(crate) const fn empty(kind: StatKind, multiplier: f64, delay: f64) -> Self {
        Self {
            kind,
            amount: 0.0,
            base_multiplier: multiplier,
            delay,
            zone_multiplier: None,
        }
    }

    pub fn kind(&self) -> StatKind {
        self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Per-cycle yield before any zone bonus.
    pub fn base_multiplier(&self) -> f64 {
        self.base_multiplier
    }

    /// Seconds per accrual cycle.
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Multiplier of the zone currently farmed in, if any.
    pub fn zone_multiplier(&self) -> Option<f64> {
        self.zone_multiplier
    }

    /// Per-cycle yield including the zone bonus.
    pub fn multiplier(&self) -> f64 {
        self.base_multiplier * self.zone_multiplier.unwrap_or(1.0)
    }

    /// Amount gained per second.
    pub fn rate(&self) -> f64 {
        self.multiplier() / self.delay
    }

    /// Replaces the amount; text is parsed as compact notation.
    pub fn set_amount<'a>(&mut self, value: impl Into<NumberInput<'a>>) -> Result<(), StatError> {
        let amount = check_amount(value.into().resolve()?)?;
        self.amount = amount;
        Ok(())
    }

    pub fn set_multiplier(&mut self, multiplier: f64) -> Result<(), StatError> {
        self.base_multiplier = check_multiplier(multiplier)?;
        Ok(())
    }

    pub fn set_delay(&mut self, delay: f64) -> Result<(), StatError> {
        self.delay = check_delay(delay)?;
        Ok(())
    }

    /// Starts farming in `zone`.
    ///
    /// A zone for another stat kind is ignored and leaves the stat unchanged.
    /// Returns whether the zone was applied.
    pub fn enter_zone(&mut self, zone: &Zone) -> bool {
        if zone.kind() != self.kind {
            tracing::trace!(
                "{} ignores zone {} meant for {}",
                self.kind,
                zone.name(),
                zone.kind()
            );
            return false;
        }
        tracing::debug!(
            kind = %self.kind,
            zone = zone.name(),
            multiplier = zone.multiplier(),
            "entered farm zone"
        );
        self.zone_multiplier = Some(zone.multiplier());
        true
    }

    pub fn leave_zone(&mut self) {
        self.zone_multiplier = None;
    }

    /// Amount accrued over `duration` at the current rate.
    pub fn projected_amount<'a>(
        &self,
        duration: impl Into<DurationInput<'a>>,
    ) -> Result<f64, StatError> {
        Ok(self.rate() * duration.into().resolve()?)
    }

    pub fn projected_amount_compact<'a>(
        &self,
        duration: impl Into<DurationInput<'a>>,
    ) -> Result<String, StatError> {
        compact(self.projected_amount(duration)?)
    }

    /// Distance between the current amount and `target`, in either direction.
    pub fn amount_to_reach<'a>(
        &self,
        target: impl Into<NumberInput<'a>>,
    ) -> Result<f64, StatError> {
        Ok((target.into().resolve()? - self.amount).abs())
    }

    pub fn amount_to_reach_compact<'a>(
        &self,
        target: impl Into<NumberInput<'a>>,
    ) -> Result<String, StatError> {
        compact(self.amount_to_reach(target)?)
    }

    /// Amount held after farming for `duration`.
    pub fn amount_after<'a>(
        &self,
        duration: impl Into<DurationInput<'a>>,
    ) -> Result<f64, StatError> {
        Ok(self.amount + self.projected_amount(duration)?)
    }

    pub fn amount_after_compact<'a>(
        &self,
        duration: impl Into<DurationInput<'a>>,
    ) -> Result<String, StatError> {
        compact(self.amount_after(duration)?)
    }

    /// Seconds needed to farm `amount` from scratch.
    ///
    /// # Errors
    /// [`StatError::ZeroRate`] when the stat does not accrue.
    pub fn seconds_for<'a>(&self, amount: impl Into<NumberInput<'a>>) -> Result<f64, StatError> {
        let amount = amount.into().resolve()?;
        let rate = self.rate();
        if rate == 0.0 {
            return Err(StatError::ZeroRate(self.kind));
        }
        Ok(amount / rate)
    }

    /// Duration text for farming `amount` from scratch.
    pub fn time_for<'a>(&self, amount: impl Into<NumberInput<'a>>) -> Result<String, StatError> {
        Ok(duration::format(self.seconds_for(amount)?)?)
    }

    /// Seconds until the amount reaches `target`.
    pub fn seconds_to_reach<'a>(
        &self,
        target: impl Into<NumberInput<'a>>,
    ) -> Result<f64, StatError> {
        let remaining = self.amount_to_reach(target)?;
        self.seconds_for(remaining)
    }

    /// Duration text until the amount reaches `target`.
    pub fn time_to_reach<'a>(
        &self,
        target: impl Into<NumberInput<'a>>,
    ) -> Result<String, StatError> {
        Ok(duration::format(self.seconds_to_reach(target)?)?)
    }
}

fn compact(value: f64) -> Result<String, StatError> {
    Ok(number::format(value)?)
}

fn check_amount(amount: f64) -> Result<f64, StatError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        Err(StatError::invalid("amount", "a non-negative number", amount))
    }
}

fn check_multiplier(multiplier: f64) -> Result<f64, StatError> {
    if multiplier.is_finite() && multiplier >= 0.0 {
        Ok(multiplier)
    } else {
        Err(StatError::invalid(
            "multiplier",
            "a non-negative number",
            multiplier,
        ))
    }
}

fn check_delay(delay: f64) -> Result<f64, StatError> {
    if delay.is_finite() && delay > 0.0 {
        Ok(delay)
    } else {
        Err(StatError::invalid(
            "delay",
            "a positive number of seconds",
            delay,
        ))
    }
}
