//! Soul attack damage prediction.
//!
//! The outcome of a soul attack depends on the ratio `x` between the attacker's
//! and the defender's psychic power:
//!
//! ```text
//!  x ≤ 0.01          → -1
//!  0.01 < x ≤ 0.1    → -(min + (1 - min) × (0.1 - x) / 0.09)
//!  0.1 < x < 10      →  0            (neutral band)
//!  10 ≤ x < 100      →  min + (1 - min) × (x - 10) / 90
//!  x ≥ 100           →  1
//! ```
//!
//! Positive values are damage dealt, negative values damage taken, both
//! normalized to the defender's and attacker's health respectively.

use super::StatError;

/// Piecewise-linear damage curve with a neutral band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoulAttackCurve {
    approx_min_damage: f64,
}

impl SoulAttackCurve {
    pub const DEFAULT_APPROX_MIN_DAMAGE: f64 = 0.2;

    /// Ratio at and above which the attacker starts dealing damage.
    pub const DEALING_THRESHOLD: f64 = 10.0;
    /// Ratio at and above which the attacker deals full damage.
    pub const DEALING_FULL: f64 = 100.0;
    /// Ratio at and below which the attacker starts taking damage.
    pub const TAKING_THRESHOLD: f64 = 0.1;
    /// Width of the window below [`Self::TAKING_THRESHOLD`] that ramps to full damage taken.
    pub const TAKING_WINDOW: f64 = 0.09;

    /// Creates a curve whose first non-zero step is `approx_min_damage`.
    ///
    /// # Errors
    /// [`StatError::InvalidArgument`] unless `approx_min_damage` lies in `[0, 1]`.
    pub fn new(approx_min_damage: f64) -> Result<Self, StatError> {
        if !(0.0..=1.0).contains(&approx_min_damage) {
            return Err(StatError::invalid(
                "approximate minimal damage",
                "within [0, 1]",
                approx_min_damage,
            ));
        }
        Ok(Self { approx_min_damage })
    }

    pub fn approx_min_damage(&self) -> f64 {
        self.approx_min_damage
    }

    /// Normalized damage in `[-1, 1]` for a psychic power ratio.
    pub fn damage(&self, ratio: f64) -> f64 {
        let min = self.approx_min_damage;
        if ratio >= Self::DEALING_THRESHOLD {
            let progress =
                (ratio - Self::DEALING_THRESHOLD) / (Self::DEALING_FULL - Self::DEALING_THRESHOLD);
            (min + (1.0 - min) * progress).min(1.0)
        } else if ratio <= Self::TAKING_THRESHOLD {
            let progress = (Self::TAKING_THRESHOLD - ratio) / Self::TAKING_WINDOW;
            -(min + (1.0 - min) * progress).min(1.0)
        } else {
            0.0
        }
    }
}

impl Default for SoulAttackCurve {
    fn default() -> Self {
        Self {
            approx_min_damage: Self::DEFAULT_APPROX_MIN_DAMAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn neutral_band_is_zero() {
        let curve = SoulAttackCurve::default();
        assert_eq!(curve.damage(1.0), 0.0);
        assert_eq!(curve.damage(0.11), 0.0);
        assert_eq!(curve.damage(9.99), 0.0);
    }

    #[test]
    fn dealing_side_ramps_to_one() {
        let curve = SoulAttackCurve::default();
        assert_eq!(curve.damage(10.0), 0.2);
        assert!((curve.damage(55.0) - 0.6).abs() < EPS);
        assert!((curve.damage(100.0) - 1.0).abs() < EPS);
        assert_eq!(curve.damage(1000.0), 1.0);
    }

    #[test]
    fn taking_side_mirrors() {
        let curve = SoulAttackCurve::default();
        assert_eq!(curve.damage(0.1), -0.2);
        assert!((curve.damage(0.055) + 0.6).abs() < EPS);
        assert!((curve.damage(0.01) + 1.0).abs() < EPS);
        assert_eq!(curve.damage(0.001), -1.0);
        assert_eq!(curve.damage(0.0), -1.0);
    }

    #[test]
    fn curve_is_monotonic() {
        let curve = SoulAttackCurve::new(0.35).unwrap();
        let ratios = [0.0, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 9.0, 10.0, 40.0, 100.0, 500.0];
        for pair in ratios.windows(2) {
            assert!(curve.damage(pair[0]) <= curve.damage(pair[1]));
        }
    }

    #[test]
    fn custom_minimum_damage() {
        let curve = SoulAttackCurve::new(0.5).unwrap();
        assert_eq!(curve.damage(10.0), 0.5);
        assert_eq!(curve.damage(0.1), -0.5);
    }

    #[test]
    fn rejects_out_of_range_minimum() {
        assert!(SoulAttackCurve::new(-0.1).is_err());
        assert!(SoulAttackCurve::new(1.5).is_err());
        assert!(SoulAttackCurve::new(f64::NAN).is_err());
    }
}
