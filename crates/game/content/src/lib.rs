//! Data-driven arena content and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Enemy templates (prototype catalog via RON)
//! - Scenario scripts (hero and enemy rosters plus battles via RON)
//! - Arena configuration (via TOML)
//!
//! All loaders use arena-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    BattleSpec, ConfigLoader, ContentFactory, EnemyCatalog, EnemyLoader, EnemySpec, HeroSpec,
    LoadResult, Scenario, ScenarioLoader,
};
