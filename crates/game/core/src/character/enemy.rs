//! Data-driven enemies.

use core::fmt;

use crate::combat::{Combatant, Side, apply_damage, sealed};
use crate::create::{CreationError, EnemyBuilder, Stats, validate};

/// An enemy combatant.
///
/// Every attribute is supplied by the caller at creation time; the engine
/// never derives damage or health from level. Use
/// [`Enemy::scaled_by_level`] to opt into level-derived stats explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Enemy {
    name: String,
    /// Free-form origin tag.
    dungeon: String,
    level: u32,
    damage: i32,
    health: i32,
}

impl Enemy {
    pub const DEFAULT_LEVEL: u32 = 1;
    pub const DEFAULT_DAMAGE: i32 = 10;
    pub const DEFAULT_HEALTH: i32 = 50;

    /// Direct construction with every field supplied.
    pub fn new(
        name: impl Into<String>,
        dungeon: impl Into<String>,
        level: u32,
        damage: i32,
        health: i32,
    ) -> Result<Self, CreationError> {
        Self::from_stats(
            Stats {
                name: name.into(),
                level,
                damage,
                health,
            },
            dungeon.into(),
        )
    }

    /// Creates a builder with the documented defaults.
    pub fn builder(name: impl Into<String>) -> EnemyBuilder {
        EnemyBuilder::new(name)
    }

    /// Creates an enemy whose damage and health are the defaults multiplied
    /// by `level` (level 3 → damage 30, health 150).
    pub fn scaled_by_level(
        name: impl Into<String>,
        dungeon: impl Into<String>,
        level: u32,
    ) -> Result<Self, CreationError> {
        let factor = i32::try_from(level).unwrap_or(i32::MAX);
        Self::new(
            name,
            dungeon,
            level,
            Self::DEFAULT_DAMAGE.saturating_mul(factor),
            Self::DEFAULT_HEALTH.saturating_mul(factor),
        )
    }

    /// Single construction path shared by every creation strategy.
    pub(crate) fn from_stats(stats: Stats, dungeon: String) -> Result<Self, CreationError> {
        validate(&stats)?;
        Ok(Self {
            name: stats.name,
            dungeon,
            level: stats.level,
            damage: stats.damage,
            health: stats.health,
        })
    }

    pub fn dungeon(&self) -> &str {
        &self.dungeon
    }
}

impl sealed::Sealed for Enemy {
    fn absorb(&mut self, amount: i32) {
        self.health = apply_damage(self.health, amount);
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn side(&self) -> Side {
        Side::Enemy
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn damage(&self) -> i32 {
        self.damage
    }

    fn health(&self) -> i32 {
        self.health
    }
}

impl fmt::Display for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enemy name: {} | Enemy dungeon: {} | Enemy Level: {} | Damage: {} | HP: {}",
            self.name, self.dungeon, self.level, self.damage, self.health
        )
    }
}
