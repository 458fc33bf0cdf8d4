//! Character creation strategies.
//!
//! Four interchangeable ways to produce a [`Hero`](crate::Hero) or
//! [`Enemy`](crate::Enemy):
//!
//! - **Direct**: `Hero::new`, `Enemy::new`
//! - **Builder**: [`HeroBuilder`], [`EnemyBuilder`]
//! - **Factory**: [`HeroFactory`] implementations looked up by type code
//!   through a [`CharacterFactory`], plus [`EnemyFactory`]
//! - **Prototype**: [`EnemyTemplate`] instances spawned from content data
//!
//! Every strategy funnels into one validation routine, so the invariants are enforced
//! in exactly one place.

pub mod builder;
pub mod factory;
pub mod prototype;

pub use builder::{EnemyBuilder, HeroBuilder};
pub use factory::{
    ArcherFactory, CharacterFactory, EnemyFactory, FighterFactory, HeroFactory,
    StandardCharacterFactory,
};
pub use prototype::EnemyTemplate;

use crate::error::{ErrorSeverity, GameError};

/// Which creation strategy the session should use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CreationStrategy {
    Direct,
    Builder,
    #[default]
    Factory,
}

/// Raw attributes common to heroes and enemies, prior to validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Stats {
    pub name: String,
    pub level: u32,
    pub damage: i32,
    pub health: i32,
}

/// Invariant violations rejected at creation time.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CreationError {
    /// Name is empty or whitespace only.
    #[error("name must not be empty")]
    EmptyName,

    /// Damage must be positive or battles could never end.
    #[error("damage must be positive (got {damage})")]
    NonPositiveDamage { damage: i32 },

    /// Levels start at 1.
    #[error("level must be at least 1")]
    ZeroLevel,
}

impl GameError for CreationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "CREATE_EMPTY_NAME",
            Self::NonPositiveDamage { .. } => "CREATE_NON_POSITIVE_DAMAGE",
            Self::ZeroLevel => "CREATE_ZERO_LEVEL",
        }
    }
}

/// The one validation routine every strategy goes through.
///
/// Health is not checked: a combatant created at or below zero health is
/// simply dead, and the battle engine refuses to field it.
pub(crate) fn validate(stats: &Stats) -> Result<(), CreationError> {
    if stats.name.trim().is_empty() {
        return Err(CreationError::EmptyName);
    }
    if stats.level == 0 {
        return Err(CreationError::ZeroLevel);
    }
    if stats.damage <= 0 {
        return Err(CreationError::NonPositiveDamage {
            damage: stats.damage,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(name: &str, level: u32, damage: i32) -> Stats {
        Stats {
            name: name.to_owned(),
            level,
            damage,
            health: 10,
        }
    }

    #[test]
    fn accepts_valid_stats() {
        assert_eq!(validate(&stats("Slime", 1, 1)), Ok(()));
    }

    #[test]
    fn rejects_blank_names() {
        assert_eq!(validate(&stats("", 1, 5)), Err(CreationError::EmptyName));
        assert_eq!(validate(&stats("   ", 1, 5)), Err(CreationError::EmptyName));
    }

    #[test]
    fn rejects_non_positive_damage() {
        assert_eq!(
            validate(&stats("Slime", 1, 0)),
            Err(CreationError::NonPositiveDamage { damage: 0 })
        );
        assert_eq!(
            validate(&stats("Slime", 1, -3)),
            Err(CreationError::NonPositiveDamage { damage: -3 })
        );
    }

    #[test]
    fn rejects_zero_level() {
        assert_eq!(
            validate(&stats("Slime", 0, 5)),
            Err(CreationError::ZeroLevel)
        );
    }

    #[test]
    fn zero_level_is_reported_before_damage() {
        assert_eq!(
            validate(&stats("Slime", 0, 0)),
            Err(CreationError::ZeroLevel)
        );
    }

    #[test]
    fn strategy_parses_from_config_strings() {
        assert_eq!(
            "builder".parse::<CreationStrategy>().ok(),
            Some(CreationStrategy::Builder)
        );
        assert_eq!(CreationStrategy::default(), CreationStrategy::Factory);
    }
}
