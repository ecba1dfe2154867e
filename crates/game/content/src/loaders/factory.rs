//! Content factory for building statistics from a data directory.

use std::path::{Path, PathBuf};

use farm_core::{FarmConfig, Statistics};

use crate::loaders::{ConfigLoader, DataFormat, LoadResult, PlayerDataLoader};

/// Content factory that loads calculator content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// └── player.json   (or player.toml / player.ron)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const PLAYER_FILE_STEM: &'static str = "player";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load configuration from `config.toml`, or defaults when the file is absent.
    pub fn load_config(&self) -> LoadResult<FarmConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(
                "no {} in {}, using defaults",
                Self::CONFIG_FILE,
                self.data_dir.display()
            );
            return Ok(FarmConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Path of the player data file, trying JSON, then TOML, then RON.
    pub fn player_file(&self) -> LoadResult<PathBuf> {
        DataFormat::ALL
            .into_iter()
            .map(|format| {
                self.data_dir
                    .join(Self::PLAYER_FILE_STEM)
                    .with_extension(format.extension())
            })
            .find(|path| path.exists())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No player data file (player.json, player.toml or player.ron) in {}",
                    self.data_dir.display()
                )
            })
    }

    /// Load configuration and player data, then build [`Statistics`].
    pub fn load_statistics(&self) -> LoadResult<Statistics> {
        let config = self.load_config()?;
        let path = self.player_file()?;
        PlayerDataLoader::load_statistics(&path, &config)
    }
}
