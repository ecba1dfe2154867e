//! The player's four stats, handled as one calculator.

use super::{SoulAttackCurve, Stat, StatError, StatKind};
use crate::config::FarmConfig;
use crate::notation::{CompactValue, NumberInput};
use crate::zones::Zone;

/// One stat as it appears in player data.
///
/// Both fields accept a number or compact text. A missing amount means 0 and a
/// missing multiplier means 1.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatEntry {
    pub amount: Option<CompactValue>,
    pub multiplier: Option<CompactValue>,
}

impl StatEntry {
    pub fn new(amount: impl Into<CompactValue>, multiplier: impl Into<CompactValue>) -> Self {
        Self {
            amount: Some(amount.into()),
            multiplier: Some(multiplier.into()),
        }
    }

    pub fn with_amount(amount: impl Into<CompactValue>) -> Self {
        Self {
            amount: Some(amount.into()),
            multiplier: None,
        }
    }
}

/// Fist strength, body toughness, psychic power and tokens of one player.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Statistics {
    fist_strength: Stat,
    body_toughness: Stat,
    psychic_power: Stat,
    tokens: Stat,
}

impl Statistics {
    /// Fresh statistics: every amount at zero, default multipliers.
    pub fn new(config: &FarmConfig) -> Result<Self, StatError> {
        config.validate()?;
        let fresh = |kind: StatKind| {
            Stat::new(kind, 0.0, default_multiplier(kind, config), config.delay(kind))
        };
        Ok(Self {
            fist_strength: fresh(StatKind::FistStrength)?,
            body_toughness: fresh(StatKind::BodyToughness)?,
            psychic_power: fresh(StatKind::PsychicPower)?,
            tokens: fresh(StatKind::Tokens)?,
        })
    }

    /// Builds statistics from player data with the default configuration.
    ///
    /// See [`Statistics::load_with_config`].
    pub fn load<I, K>(entries: I) -> Result<Self, StatError>
    where
        I: IntoIterator<Item = (K, StatEntry)>,
        K: AsRef<str>,
    {
        Self::load_with_config(entries, &FarmConfig::default())
    }

    /// Builds statistics from `(stat name, entry)` pairs.
    ///
    /// Names are resolved through [`StatKind::from_alias`]. Stats missing from
    /// `entries` start empty. Tokens always use the configured tokens multiplier;
    /// a multiplier given for tokens is ignored.
    ///
    /// # Errors
    /// - [`StatError::UnknownStat`] for a name matching no alias
    /// - [`StatError::DuplicateStat`] when two names resolve to the same stat
    /// - [`StatError::Notation`] for malformed amounts or multipliers
    pub fn load_with_config<I, K>(entries: I, config: &FarmConfig) -> Result<Self, StatError>
    where
        I: IntoIterator<Item = (K, StatEntry)>,
        K: AsRef<str>,
    {
        let mut statistics = Self::new(config)?;
        let mut seen = Vec::with_capacity(StatKind::ALL.len());

        for (name, entry) in entries {
            let name = name.as_ref();
            let kind = StatKind::from_alias(name)
                .ok_or_else(|| StatError::UnknownStat(name.to_owned()))?;
            if seen.contains(&kind) {
                return Err(StatError::DuplicateStat(kind));
            }
            seen.push(kind);
            tracing::debug!("resolved stat name {:?} to {}", name, kind);

            let amount = match &entry.amount {
                Some(value) => value.resolve()?,
                None => 0.0,
            };
            let multiplier = match (&entry.multiplier, kind) {
                (Some(_), StatKind::Tokens) => {
                    tracing::debug!("ignoring tokens multiplier from player data");
                    config.tokens_multiplier
                }
                (Some(value), _) => value.resolve()?,
                (None, _) => default_multiplier(kind, config),
            };

            *statistics.stat_mut(kind) = Stat::new(kind, amount, multiplier, config.delay(kind))?;
        }

        Ok(statistics)
    }

    pub fn stat(&self, kind: StatKind) -> &Stat {
        match kind {
            StatKind::FistStrength => &self.fist_strength,
            StatKind::BodyToughness => &self.body_toughness,
            StatKind::PsychicPower => &self.psychic_power,
            StatKind::Tokens => &self.tokens,
        }
    }

    pub fn stat_mut(&mut self, kind: StatKind) -> &mut Stat {
        match kind {
            StatKind::FistStrength => &mut self.fist_strength,
            StatKind::BodyToughness => &mut self.body_toughness,
            StatKind::PsychicPower => &mut self.psychic_power,
            StatKind::Tokens => &mut self.tokens,
        }
    }

    pub fn fist_strength(&self) -> &Stat {
        &self.fist_strength
    }

    pub fn body_toughness(&self) -> &Stat {
        &self.body_toughness
    }

    pub fn psychic_power(&self) -> &Stat {
        &self.psychic_power
    }

    pub fn tokens(&self) -> &Stat {
        &self.tokens
    }

    /// All four stats in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Stat> {
        [
            &self.fist_strength,
            &self.body_toughness,
            &self.psychic_power,
            &self.tokens,
        ]
        .into_iter()
    }

    /// Starts farming in `zone`; only the stat of the zone's kind picks it up.
    ///
    /// Returns whether any stat applied the zone. Tokens are never offered a zone.
    pub fn enter_zone(&mut self, zone: &Zone) -> bool {
        let mut applied = false;
        for kind in StatKind::ZONABLE {
            applied |= self.stat_mut(kind).enter_zone(zone);
        }
        applied
    }

    /// Leaves whatever zone the zonable stats are farming in.
    pub fn leave_zone(&mut self) {
        for kind in StatKind::ZONABLE {
            self.stat_mut(kind).leave_zone();
        }
    }

    /// Mean of the six pairwise amount ratios between fist strength, body
    /// toughness and psychic power.
    ///
    /// Exactly 1.0 when the three amounts are equal, growing as one dominates.
    ///
    /// # Errors
    /// [`StatError::ZeroAmount`] if any of the three amounts is zero.
    pub fn balance_coefficient(&self) -> Result<f64, StatError> {
        let mut amounts = [0.0; 3];
        for (slot, kind) in amounts.iter_mut().zip(StatKind::ZONABLE) {
            let amount = self.stat(kind).amount();
            if amount == 0.0 {
                return Err(StatError::ZeroAmount(kind));
            }
            *slot = amount;
        }

        let [fs, bt, pp] = amounts;
        let ratios = [fs / bt, fs / pp, bt / fs, bt / pp, pp / fs, pp / bt];
        Ok(ratios.iter().sum::<f64>() / ratios.len() as f64)
    }

    /// Predicts normalized soul attack damage against an opponent, using the
    /// default minimal damage of the curve.
    ///
    /// See [`SoulAttackCurve`] for the shape of the result.
    pub fn predict_soul_attack_damage<'a>(
        &self,
        opponent_psychic_power: impl Into<NumberInput<'a>>,
    ) -> Result<f64, StatError> {
        self.predict_soul_attack_damage_with(
            opponent_psychic_power,
            SoulAttackCurve::DEFAULT_APPROX_MIN_DAMAGE,
        )
    }

    pub fn predict_soul_attack_damage_with<'a>(
        &self,
        opponent_psychic_power: impl Into<NumberInput<'a>>,
        approx_min_damage: f64,
    ) -> Result<f64, StatError> {
        let curve = SoulAttackCurve::new(approx_min_damage)?;
        let opponent = opponent_psychic_power.into().resolve()?;
        if opponent == 0.0 {
            return Err(StatError::ZeroOpponentPower);
        }
        if !(opponent.is_finite() && opponent > 0.0) {
            return Err(StatError::invalid(
                "opponent psychic power",
                "a positive number",
                opponent,
            ));
        }

        let ratio = self.psychic_power.amount() / opponent;
        Ok(curve.damage(ratio))
    }
}

impl Default for Statistics {
    fn default() -> Self {
        let config = FarmConfig::default();
        let fresh = |kind: StatKind| {
            Stat::empty(kind, default_multiplier(kind, &config), config.delay(kind))
        };
        Self {
            fist_strength: fresh(StatKind::FistStrength),
            body_toughness: fresh(StatKind::BodyToughness),
            psychic_power: fresh(StatKind::PsychicPower),
            tokens: fresh(StatKind::Tokens),
        }
    }
}

fn default_multiplier(kind: StatKind, config: &FarmConfig) -> f64 {
    match kind {
        StatKind::Tokens => config.tokens_multiplier,
        _ => FarmConfig::DEFAULT_MULTIPLIER,
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn entry_accepts_text_or_number() {
        let text: StatEntry = serde_json::from_str(r#"{"amount":"1.5K"}"#).unwrap();
        let number: StatEntry = serde_json::from_str(r#"{"amount":1500}"#).unwrap();

        assert_eq!(text, StatEntry::with_amount("1.5K"));
        assert_eq!(number, StatEntry::with_amount(1500.0));

        let stats = Statistics::load([("fs", text), ("hp", number)]).unwrap();
        assert_eq!(stats.fist_strength().amount(), 1500.0);
        assert_eq!(stats.body_toughness().amount(), 1500.0);
        assert_eq!(stats.body_toughness().base_multiplier(), 1.0);
    }

    #[test]
    fn entry_fields_default_when_missing() {
        let entry: StatEntry = serde_json::from_str("{}").unwrap();
        assert_eq!(entry, StatEntry::default());

        let entry: StatEntry = serde_json::from_str(r#"{"multiplier":"2K"}"#).unwrap();
        assert_eq!(entry.amount, None);
        assert_eq!(entry.multiplier, Some(CompactValue::Text("2K".to_owned())));
    }
}
