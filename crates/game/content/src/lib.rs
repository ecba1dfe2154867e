//! Data-driven content loaders for the farm calculator.
//!
//! This crate reads files and hands their contents to farm-core:
//! - Player data (JSON, TOML or RON) into `Statistics`
//! - Calculator configuration (TOML) into `FarmConfig`
//!
//! All loaders use farm-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, DataFormat, LoadResult, PlayerData, PlayerDataLoader,
};
