//! Fluent builders for heroes and enemies.
//!
//! Only the name (and, for heroes, the variant) is mandatory. Optional
//! setters may be applied in any order; unset fields keep their defaults.

use crate::character::{Enemy, Hero, HeroKind};
use crate::create::{CreationError, Stats};

/// Builder for constructing enemies.
///
/// Defaults: level 1, damage 10, health 50, empty dungeon tag.
#[derive(Clone, Debug)]
pub struct EnemyBuilder {
    name: String,
    dungeon: String,
    level: u32,
    damage: i32,
    health: i32,
}

impl EnemyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dungeon: String::new(),
            level: Enemy::DEFAULT_LEVEL,
            damage: Enemy::DEFAULT_DAMAGE,
            health: Enemy::DEFAULT_HEALTH,
        }
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn damage(mut self, damage: i32) -> Self {
        self.damage = damage;
        self
    }

    pub fn health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    /// Sets the dungeon/origin tag.
    pub fn dungeon(mut self, dungeon: impl Into<String>) -> Self {
        self.dungeon = dungeon.into();
        self
    }

    /// Builds the enemy.
    pub fn build(self) -> Result<Enemy, CreationError> {
        Enemy::from_stats(
            Stats {
                name: self.name,
                level: self.level,
                damage: self.damage,
                health: self.health,
            },
            self.dungeon,
        )
    }
}

/// Builder for constructing heroes.
///
/// Unset stats fall back to the variant's base values.
#[derive(Clone, Debug)]
pub struct HeroBuilder {
    kind: HeroKind,
    name: String,
    level: Option<u32>,
    damage: Option<i32>,
    health: Option<i32>,
    arrows: Option<u32>,
}

impl HeroBuilder {
    pub fn new(kind: HeroKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            level: None,
            damage: None,
            health: None,
            arrows: None,
        }
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn damage(mut self, damage: i32) -> Self {
        self.damage = Some(damage);
        self
    }

    pub fn health(mut self, health: i32) -> Self {
        self.health = Some(health);
        self
    }

    /// Overrides the starting ammunition. Ignored for variants without arrows.
    pub fn arrows(mut self, arrows: u32) -> Self {
        self.arrows = Some(arrows);
        self
    }

    /// Builds the hero.
    pub fn build(self) -> Result<Hero, CreationError> {
        let hero = Hero::from_stats(
            self.kind,
            Stats {
                name: self.name,
                level: self.level.unwrap_or(Hero::DEFAULT_LEVEL),
                damage: self.damage.unwrap_or(self.kind.base_damage()),
                health: self.health.unwrap_or(self.kind.base_health()),
            },
        )?;

        Ok(match self.arrows {
            Some(arrows) => hero.with_arrows(arrows),
            None => hero,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Combatant;

    #[test]
    fn builder_matches_direct_construction() {
        let built = EnemyBuilder::new("Slime")
            .level(5)
            .damage(10)
            .health(100)
            .dungeon("Cave")
            .build()
            .unwrap();
        let direct = Enemy::new("Slime", "Cave", 5, 10, 100).unwrap();

        assert_eq!(built, direct);
    }

    #[test]
    fn setter_order_does_not_matter() {
        let a = EnemyBuilder::new("Bat")
            .health(12)
            .dungeon("Cave")
            .level(2)
            .build()
            .unwrap();
        let b = EnemyBuilder::new("Bat")
            .level(2)
            .dungeon("Cave")
            .health(12)
            .build()
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn unset_fields_take_defaults() {
        let enemy = EnemyBuilder::new("Slime").build().unwrap();

        assert_eq!(enemy.level(), 1);
        assert_eq!(enemy.damage(), 10);
        assert_eq!(enemy.health(), 50);
        assert_eq!(enemy.dungeon(), "");
    }

    #[test]
    fn builder_runs_shared_validation() {
        assert_eq!(
            EnemyBuilder::new("Slime").damage(0).build(),
            Err(CreationError::NonPositiveDamage { damage: 0 })
        );
        assert_eq!(
            HeroBuilder::new(HeroKind::Fighter, "").build(),
            Err(CreationError::EmptyName)
        );
    }

    #[test]
    fn hero_builder_defaults_to_variant_stats() {
        let built = HeroBuilder::new(HeroKind::Archer, "Robin").build().unwrap();
        assert_eq!(built, Hero::archer("Robin").unwrap());
    }

    #[test]
    fn hero_builder_overrides_stats() {
        let hero = HeroBuilder::new(HeroKind::Fighter, "Conan")
            .health(400)
            .level(3)
            .build()
            .unwrap();

        assert_eq!(hero.health(), 400);
        assert_eq!(hero.level(), 3);
        assert_eq!(hero.damage(), 20);
    }

    #[test]
    fn arrows_only_apply_to_archers() {
        let archer = HeroBuilder::new(HeroKind::Archer, "Robin")
            .arrows(3)
            .build()
            .unwrap();
        assert_eq!(archer.arrows(), Some(3));

        let fighter = HeroBuilder::new(HeroKind::Fighter, "Conan")
            .arrows(3)
            .build()
            .unwrap();
        assert_eq!(fighter.arrows(), None);
    }
}
