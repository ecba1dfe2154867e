//! Farm zone catalog.
//!
//! A zone is a location where training one stat is multiplied. Each zonable
//! stat has its own catalog, ordered by the amount the game expects before the
//! zone becomes reachable. These numbers mirror the live game's balance tables
//! and are data, not derived values.

use crate::stats::{StatError, StatKind};

/// A named farm location boosting a single stat.
///
/// Fields are private so every zone, catalog or custom, has a finite
/// non-negative requirement and a finite positive multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Zone {
    name: &'static str,
    kind: StatKind,
    /// Amount of `kind` the game requires to enter. Informational only.
    requires: f64,
    multiplier: f64,
}

impl Zone {
    /// Creates a custom zone.
    ///
    /// # Errors
    /// [`StatError::InvalidArgument`] if `requires` is negative or `multiplier`
    /// is not positive, or either is not finite.
    pub fn new(
        name: &'static str,
        kind: StatKind,
        requires: f64,
        multiplier: f64,
    ) -> Result<Self, StatError> {
        if !(requires.is_finite() && requires >= 0.0) {
            return Err(StatError::invalid(
                "zone requirement",
                "a non-negative number",
                requires,
            ));
        }
        if !(multiplier.is_finite() && multiplier > 0.0) {
            return Err(StatError::invalid(
                "zone multiplier",
                "a positive number",
                multiplier,
            ));
        }
        Ok(Self::catalog(name, kind, requires, multiplier))
    }

    const fn catalog(name: &'static str, kind: StatKind, requires: f64, multiplier: f64) -> Self {
        Self {
            name,
            kind,
            requires,
            multiplier,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> StatKind {
        self.kind
    }

    pub fn requires(&self) -> f64 {
        self.requires
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Whether `amount` meets this zone's entry requirement.
    pub fn is_unlocked_at(&self, amount: f64) -> bool {
        amount >= self.requires
    }
}

pub const FIST_STRENGTH_ZONES: [Zone; 5] = [
    Zone::catalog("rock", StatKind::FistStrength, 0.0, 10.0),
    Zone::catalog("crystal", StatKind::FistStrength, 0.0, 100.0),
    Zone::catalog("blueStar", StatKind::FistStrength, 1e9, 2000.0),
    Zone::catalog("greenStar", StatKind::FistStrength, 1e11, 40000.0),
    Zone::catalog("redStar", StatKind::FistStrength, 1e13, 8e5),
];

pub const BODY_TOUGHNESS_ZONES: [Zone; 8] = [
    Zone::catalog("iceBath", StatKind::BodyToughness, 100.0, 5.0),
    Zone::catalog("fireBath", StatKind::BodyToughness, 1e4, 10.0),
    Zone::catalog("iceberg", StatKind::BodyToughness, 1e5, 20.0),
    Zone::catalog("tornado", StatKind::BodyToughness, 1e6, 50.0),
    Zone::catalog("volcano", StatKind::BodyToughness, 1e7, 100.0),
    Zone::catalog("hellFirePit", StatKind::BodyToughness, 1e9, 2000.0),
    Zone::catalog("greenAcidPool", StatKind::BodyToughness, 1e11, 40000.0),
    Zone::catalog("redAcidPool", StatKind::BodyToughness, 1e13, 8e5),
];

pub const PSYCHIC_POWER_ZONES: [Zone; 5] = [
    Zone::catalog("fly", StatKind::PsychicPower, 0.0, 10.0),
    Zone::catalog("firstGrassLawn", StatKind::PsychicPower, 1e6, 100.0),
    Zone::catalog("secondGrassLawn", StatKind::PsychicPower, 1e9, 10000.0),
    Zone::catalog("bridge", StatKind::PsychicPower, 1e12, 1e6),
    Zone::catalog("waterfall", StatKind::PsychicPower, 1e15, 1e8),
];

/// Zones available to a stat kind, ordered by requirement. Empty for tokens.
pub fn zones_for(kind: StatKind) -> &'static [Zone] {
    match kind {
        StatKind::FistStrength => &FIST_STRENGTH_ZONES,
        StatKind::BodyToughness => &BODY_TOUGHNESS_ZONES,
        StatKind::PsychicPower => &PSYCHIC_POWER_ZONES,
        StatKind::Tokens => &[],
    }
}

/// Finds a zone of `kind` by name, ignoring ASCII case.
pub fn find(kind: StatKind, name: &str) -> Option<&'static Zone> {
    zones_for(kind)
        .iter()
        .find(|zone| zone.name.eq_ignore_ascii_case(name))
}

/// Finds a zone by name across every catalog.
pub fn lookup(name: &str) -> Option<&'static Zone> {
    StatKind::ZONABLE.into_iter().find_map(|kind| find(kind, name))
}

/// Best zone `amount` already qualifies for: highest multiplier among unlocked zones.
pub fn best_available(kind: StatKind, amount: f64) -> Option<&'static Zone> {
    zones_for(kind)
        .iter()
        .filter(|zone| zone.is_unlocked_at(amount))
        .max_by(|a, b| a.multiplier.total_cmp(&b.multiplier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_are_ordered_by_requirement() {
        for kind in StatKind::ZONABLE {
            let zones = zones_for(kind);
            assert!(!zones.is_empty());
            assert!(zones.windows(2).all(|w| w[0].requires <= w[1].requires));
            assert!(zones.iter().all(|zone| zone.kind == kind));
        }
    }

    #[test]
    fn tokens_have_no_zones() {
        assert!(zones_for(StatKind::Tokens).is_empty());
        assert_eq!(best_available(StatKind::Tokens, 1e20), None);
    }

    #[test]
    fn finds_by_name() {
        let bridge = find(StatKind::PsychicPower, "bridge").unwrap();
        assert_eq!(bridge.requires, 1e12);
        assert_eq!(bridge.multiplier, 1e6);

        assert_eq!(find(StatKind::PsychicPower, "rock"), None);
        assert_eq!(
            find(StatKind::BodyToughness, "HELLFIREPIT").map(|z| z.multiplier),
            Some(2000.0)
        );
    }

    #[test]
    fn lookup_searches_all_catalogs() {
        assert_eq!(lookup("redStar").map(|z| z.kind), Some(StatKind::FistStrength));
        assert_eq!(lookup("volcano").map(|z| z.kind), Some(StatKind::BodyToughness));
        assert_eq!(lookup("waterfall").map(|z| z.multiplier), Some(1e8));
        assert_eq!(lookup("moon"), None);
    }

    #[test]
    fn best_available_respects_requirements() {
        assert_eq!(
            best_available(StatKind::FistStrength, 0.0).map(|z| z.name),
            Some("crystal")
        );
        assert_eq!(
            best_available(StatKind::FistStrength, 2e11).map(|z| z.name),
            Some("greenStar")
        );
        assert_eq!(best_available(StatKind::BodyToughness, 50.0), None);
        assert_eq!(
            best_available(StatKind::PsychicPower, 1e15).map(|z| z.name),
            Some("waterfall")
        );
    }

    #[test]
    fn custom_zone_multiplier_must_be_positive() {
        let zone = Zone::new("pit", StatKind::PsychicPower, 0.0, 3.0).unwrap();
        assert_eq!(zone.multiplier(), 3.0);
        assert_eq!(zone.name(), "pit");

        for multiplier in [-10.0, 0.0, f64::NAN, f64::INFINITY] {
            let err = Zone::new("pit", StatKind::PsychicPower, 0.0, multiplier).unwrap_err();
            assert!(matches!(
                err,
                StatError::InvalidArgument {
                    argument: "zone multiplier",
                    ..
                }
            ));
        }
        assert!(Zone::new("pit", StatKind::PsychicPower, -1.0, 3.0).is_err());
    }
}
