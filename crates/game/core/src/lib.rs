//! Idle-game stat calculator.
//!
//! `farm-core` converts between compact player notations and exact values and
//! models how the four trained stats accrue over time. All APIs are pure and
//! synchronous; loading player data from disk lives in `farm-content`.
//!
//! ```
//! use farm_core::{StatEntry, StatKind, Statistics, zones};
//!
//! let mut stats = Statistics::load([("pp", StatEntry::new("580T", 2048.0))])?;
//! stats.enter_zone(zones::find(StatKind::PsychicPower, "bridge").unwrap());
//!
//! let pp = stats.psychic_power();
//! assert_eq!(pp.amount_to_reach_compact("1Qa")?, "420.0T");
//! assert_eq!(pp.time_to_reach("1Qa")?, "3d 13h 26m 57.1875s");
//! # Ok::<(), farm_core::StatError>(())
//! ```
pub mod config;
pub mod error;
pub mod notation;
pub mod stats;
pub mod zones;

pub use config::{ConfigError, FarmConfig};
pub use error::{ErrorSeverity, FarmError};
pub use notation::{CompactValue, DurationInput, Magnitude, NotationError, NumberInput, TimeUnit};
pub use stats::{SoulAttackCurve, Stat, StatEntry, StatError, StatKind, Statistics};
pub use zones::Zone;
