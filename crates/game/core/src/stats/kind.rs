//! The four resource kinds and the names players use for them.

/// A resource statistic tracked by the calculator.
///
/// Fist strength, body toughness and psychic power are trained by clicking and
/// can be boosted by farming in a zone. Tokens accrue on a timer and have no zones.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    FistStrength,
    BodyToughness,
    PsychicPower,
    Tokens,
}

impl StatKind {
    /// All kinds in canonical order.
    pub const ALL: [StatKind; 4] = [
        StatKind::FistStrength,
        StatKind::BodyToughness,
        StatKind::PsychicPower,
        StatKind::Tokens,
    ];

    /// Kinds that can be boosted by a zone.
    pub const ZONABLE: [StatKind; 3] = [
        StatKind::FistStrength,
        StatKind::BodyToughness,
        StatKind::PsychicPower,
    ];

    /// Names accepted for this kind in player data.
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::FistStrength => &["fs", "fist", "fist strength", "fiststrength"],
            Self::BodyToughness => &[
                "health",
                "hp",
                "bt",
                "body",
                "body toughness",
                "bodytoughness",
            ],
            Self::PsychicPower => &["pp", "psy", "psychic", "psychic power", "psychicpower"],
            Self::Tokens => &[
                "skull",
                "skulls",
                "tokens",
                "tokensamount",
                "tokens amount",
                "tokenscount",
                "tokens count",
            ],
        }
    }

    pub const fn is_zonable(&self) -> bool {
        !matches!(self, Self::Tokens)
    }

    /// Resolves a player-supplied name to a kind.
    ///
    /// Matching ignores case and everything that is not an ASCII letter, so
    /// `"Psychic Power"`, `"psychic_power"` and `"psychicPower"` all resolve.
    pub fn from_alias(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL.into_iter().find(|kind| {
            kind.aliases()
                .iter()
                .any(|alias| normalize(alias) == wanted)
        })
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
