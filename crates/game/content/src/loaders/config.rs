//! Calculator configuration loader.

use std::path::Path;

use farm_core::FarmConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for calculator configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to the [`FarmConfig`] defaults.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing FarmConfig
    ///
    /// # Returns
    ///
    /// Returns a validated FarmConfig.
    pub fn load(path: &Path) -> LoadResult<FarmConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::debug!("loaded farm config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parse and validate config from TOML text.
    pub fn parse(content: &str) -> LoadResult<FarmConfig> {
        let config: FarmConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farm_core::StatKind;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("psychic_power_delay = 1.05\n").unwrap();
        assert_eq!(config.delay(StatKind::PsychicPower), 1.05);
        assert_eq!(config.delay(StatKind::Tokens), FarmConfig::DEFAULT_TOKENS_DELAY);
        assert_eq!(config.tokens_multiplier, FarmConfig::DEFAULT_TOKENS_MULTIPLIER);
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), FarmConfig::default());
    }

    #[test]
    fn rejects_invalid_values() {
        let err = ConfigLoader::parse("tokens_delay = 0.0\n").unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = ConfigLoader::parse("tokens_delay = \"soon\"\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
