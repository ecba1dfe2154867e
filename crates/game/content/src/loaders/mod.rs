//! Content loaders for reading calculator data from files.
//!
//! This module provides loaders that turn JSON/TOML/RON files into farm-core types.

pub mod config;
pub mod factory;
pub mod player;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use player::{PlayerData, PlayerDataLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Serialization format of a data file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Toml,
    Ron,
}

impl DataFormat {
    /// Every format, in the order the factory probes for files.
    pub const ALL: [DataFormat; 3] = [DataFormat::Json, DataFormat::Toml, DataFormat::Ron];

    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
            Self::Ron => "ron",
        }
    }

    /// Picks the format from a file extension, ignoring case.
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| anyhow::anyhow!("File {} has no extension", path.display()))?;

        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(extension))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unsupported data format '{}' for {}",
                    extension,
                    path.display()
                )
            })
    }

    /// Deserializes `content` in this format.
    pub(crate) fn parse<T>(&self, content: &str) -> LoadResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        match self {
            Self::Json => serde_json::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse JSON: {}", e)),
            Self::Toml => {
                toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse TOML: {}", e))
            }
            Self::Ron => {
                ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse RON: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(
            DataFormat::from_path(Path::new("player.json")).unwrap(),
            DataFormat::Json
        );
        assert_eq!(
            DataFormat::from_path(Path::new("dir/Player.TOML")).unwrap(),
            DataFormat::Toml
        );
        assert_eq!(
            DataFormat::from_path(Path::new("player.ron")).unwrap(),
            DataFormat::Ron
        );
        assert!(DataFormat::from_path(Path::new("player.yaml")).is_err());
        assert!(DataFormat::from_path(Path::new("player")).is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
