//! Player data loader.
//!
//! Player data maps a stat name (any alias, e.g. `"pp"` or `"psychicPower"`) to
//! its amount and multiplier:
//!
//! ```json
//! {
//!     "psychicPower": { "amount": "580T", "multiplier": 2048 },
//!     "hp": { "amount": 1500000 }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use farm_core::{FarmConfig, StatEntry, Statistics};
use serde::{Deserialize, Serialize};

use crate::loaders::{DataFormat, LoadResult, read_file};

/// Raw player data keyed by stat name as written in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerData {
    pub stats: BTreeMap<String, StatEntry>,
}

impl PlayerData {
    /// Parses player data from a string in the given format.
    pub fn parse(content: &str, format: DataFormat) -> LoadResult<Self> {
        format.parse(content)
    }

    /// Resolves names and values into [`Statistics`].
    pub fn into_statistics(self, config: &FarmConfig) -> LoadResult<Statistics> {
        Statistics::load_with_config(self.stats, config)
            .map_err(|e| anyhow::anyhow!("Invalid player data: {}", e))
    }
}

/// Loader for player data from JSON, TOML or RON files.
pub struct PlayerDataLoader;

impl PlayerDataLoader {
    /// Load raw player data, choosing the format from the file extension.
    pub fn load(path: &Path) -> LoadResult<PlayerData> {
        let format = DataFormat::from_path(path)?;
        let content = read_file(path)?;
        let data = PlayerData::parse(&content, format)
            .map_err(|e| anyhow::anyhow!("{} in {}", e, path.display()))?;

        tracing::debug!(
            "loaded {} stat entries from {} ({:?})",
            data.stats.len(),
            path.display(),
            format
        );
        Ok(data)
    }

    /// Load player data and build [`Statistics`] with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the player data file
    /// * `config` - Delays and tokens multiplier to build stats with
    pub fn load_statistics(path: &Path, config: &FarmConfig) -> LoadResult<Statistics> {
        let statistics = Self::load(path)?
            .into_statistics(config)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::info!("loaded player statistics from {}", path.display());
        Ok(statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farm_core::CompactValue;

    #[test]
    fn parses_json_numbers_and_text() {
        let data = PlayerData::parse(
            r#"{ "pp": { "amount": "580T", "multiplier": 2048 }, "hp": { "amount": 12 } }"#,
            DataFormat::Json,
        )
        .unwrap();

        let pp = &data.stats["pp"];
        assert_eq!(pp.amount, Some(CompactValue::Text("580T".to_owned())));
        assert_eq!(pp.multiplier, Some(CompactValue::Number(2048.0)));
        assert_eq!(data.stats["hp"].multiplier, None);
    }

    #[test]
    fn parses_toml_tables() {
        let data = PlayerData::parse(
            "[fist]\namount = \"1.5M\"\nmultiplier = 64\n\n[tokens]\namount = 40\n",
            DataFormat::Toml,
        )
        .unwrap();

        let stats = data.into_statistics(&FarmConfig::default()).unwrap();
        assert_eq!(stats.fist_strength().amount(), 1.5e6);
        assert_eq!(stats.fist_strength().base_multiplier(), 64.0);
        assert_eq!(stats.tokens().amount(), 40.0);
    }

    #[test]
    fn parses_ron_maps() {
        let data = PlayerData::parse(
            r#"{ "psy": (amount: Some("2B"), multiplier: Some(3)) }"#,
            DataFormat::Ron,
        )
        .unwrap();

        let stats = data.into_statistics(&FarmConfig::default()).unwrap();
        assert_eq!(stats.psychic_power().amount(), 2e9);
        assert_eq!(stats.psychic_power().base_multiplier(), 3.0);
    }

    #[test]
    fn unknown_stat_is_reported() {
        let data = PlayerData::parse(r#"{ "mana": {} }"#, DataFormat::Json).unwrap();
        let err = data.into_statistics(&FarmConfig::default()).unwrap_err();
        assert!(err.to_string().contains("unknown stat \"mana\""));
    }
}
