//! Prototype strategy: enemies stamped out from a template.
//!
//! Templates are plain data (typically loaded from RON by `arena-content`)
//! and produce independent [`Enemy`] instances on every spawn.

use crate::character::Enemy;
use crate::combat::Combatant;
use crate::create::{CreationError, Stats};

/// Enemy template defining every [`Enemy`] field.
///
/// Fields are public so content files can describe them directly; they are
/// validated each time the template is spawned.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dungeon: String,
    #[cfg_attr(feature = "serde", serde(default = "default_level"))]
    pub level: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_damage"))]
    pub damage: i32,
    #[cfg_attr(feature = "serde", serde(default = "default_health"))]
    pub health: i32,
}

#[cfg(feature = "serde")]
fn default_level() -> u32 {
    Enemy::DEFAULT_LEVEL
}

#[cfg(feature = "serde")]
fn default_damage() -> i32 {
    Enemy::DEFAULT_DAMAGE
}

#[cfg(feature = "serde")]
fn default_health() -> i32 {
    Enemy::DEFAULT_HEALTH
}

impl EnemyTemplate {
    /// Captures an existing enemy's current state as a template.
    pub fn from_enemy(enemy: &Enemy) -> Self {
        Self {
            name: enemy.name().to_owned(),
            dungeon: enemy.dungeon().to_owned(),
            level: enemy.level(),
            damage: enemy.damage(),
            health: enemy.health(),
        }
    }

    /// Creates a fresh enemy with the template's attributes.
    pub fn spawn(&self) -> Result<Enemy, CreationError> {
        self.spawn_as(self.name.clone())
    }

    /// Creates a fresh enemy with the template's attributes under a new name.
    pub fn spawn_as(&self, name: impl Into<String>) -> Result<Enemy, CreationError> {
        Enemy::from_stats(
            Stats {
                name: name.into(),
                level: self.level,
                damage: self.damage,
                health: self.health,
            },
            self.dungeon.clone(),
        )
    }
}
