//! Deterministic arena rules and data types shared across clients.
//!
//! `arena-core` defines the canonical combat rules (characters, creation
//! strategies, battle engine, history) and exposes pure APIs that the content
//! loaders and the client reuse. Combatants only change through
//! [`engine::BattleEngine`], which a [`Session`] drives on the caller's behalf.
pub mod character;
pub mod combat;
pub mod config;
pub mod create;
pub mod engine;
pub mod error;
pub mod history;
pub mod roster;
pub mod session;

pub use character::{Enemy, Hero, HeroClass, HeroKind};
pub use combat::{Combatant, Side, Strike};
pub use config::ArenaConfig;
pub use create::{
    ArcherFactory, CharacterFactory, CreationError, CreationStrategy, EnemyBuilder, EnemyFactory,
    EnemyTemplate, FighterFactory, HeroBuilder, HeroFactory, StandardCharacterFactory,
};
pub use engine::{
    Battle, BattleEngine, BattleError, BattlePhase, BattleReport, BattleSummary, Loser, Outcome,
};
pub use error::{ArenaError, ErrorSeverity, GameError, SelectionError};
pub use history::{BattleHistory, BattleRecord, Records, SnapshotError};
pub use roster::{EnemyId, HeroId, Roster};
pub use session::Session;
