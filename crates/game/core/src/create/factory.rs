//! Factory strategy.
//!
//! A [`CharacterFactory`] maps a hero type code to the matching
//! [`HeroFactory`] and hands out the single [`EnemyFactory`]. Unknown codes
//! come back as [`SelectionError::InvalidHeroType`], never as a panic.

use crate::character::{Enemy, Hero, HeroKind};
use crate::create::CreationError;
use crate::error::SelectionError;

/// Creates heroes of one fixed variant.
pub trait HeroFactory {
    /// Variant produced by this factory.
    fn kind(&self) -> HeroKind;

    fn create_hero(&self, name: &str) -> Result<Hero, CreationError> {
        Hero::new(self.kind(), name)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ArcherFactory;

impl HeroFactory for ArcherFactory {
    fn kind(&self) -> HeroKind {
        HeroKind::Archer
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FighterFactory;

impl HeroFactory for FighterFactory {
    fn kind(&self) -> HeroKind {
        HeroKind::Fighter
    }
}

/// Creates enemies. Enemies have no variants, so one factory covers them all.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnemyFactory;

impl EnemyFactory {
    pub fn create_enemy(
        &self,
        name: &str,
        dungeon: &str,
        level: u32,
        damage: i32,
        health: i32,
    ) -> Result<Enemy, CreationError> {
        Enemy::new(name, dungeon, level, damage, health)
    }
}

/// Bundles hero-factory lookup and enemy creation.
pub trait CharacterFactory {
    /// Returns the hero factory registered for `code`.
    fn hero_factory(&self, code: u8) -> Result<&dyn HeroFactory, SelectionError>;

    fn enemy_factory(&self) -> &EnemyFactory;
}

/// Default factory set: `1` → [`ArcherFactory`], `2` → [`FighterFactory`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardCharacterFactory {
    archer: ArcherFactory,
    fighter: FighterFactory,
    enemy: EnemyFactory,
}

impl StandardCharacterFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CharacterFactory for StandardCharacterFactory {
    fn hero_factory(&self, code: u8) -> Result<&dyn HeroFactory, SelectionError> {
        match HeroKind::try_from(code)? {
            HeroKind::Archer => Ok(&self.archer),
            HeroKind::Fighter => Ok(&self.fighter),
        }
    }

    fn enemy_factory(&self) -> &EnemyFactory {
        &self.enemy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create::{EnemyBuilder, HeroBuilder};

    #[test]
    fn codes_select_matching_variant() {
        let factory = StandardCharacterFactory::new();

        let archer = factory
            .hero_factory(1)
            .unwrap()
            .create_hero("Robin")
            .unwrap();
        assert_eq!(archer.kind(), HeroKind::Archer);

        let fighter = factory
            .hero_factory(2)
            .unwrap()
            .create_hero("Conan")
            .unwrap();
        assert_eq!(fighter.kind(), HeroKind::Fighter);
    }

    #[test]
    fn unknown_code_is_a_selection_error() {
        let factory = StandardCharacterFactory::new();

        for code in [0, 3, 255] {
            assert!(matches!(
                factory.hero_factory(code),
                Err(SelectionError::InvalidHeroType(c)) if c == code
            ));
        }
    }

    #[test]
    fn factories_agree_with_other_strategies() {
        let factory = StandardCharacterFactory::new();

        for kind in HeroKind::ALL {
            let from_factory = factory
                .hero_factory(kind.code())
                .unwrap()
                .create_hero("Ada")
                .unwrap();
            assert_eq!(from_factory, Hero::new(kind, "Ada").unwrap());
            assert_eq!(from_factory, HeroBuilder::new(kind, "Ada").build().unwrap());
        }

        let enemy = factory
            .enemy_factory()
            .create_enemy("Goblin", "Forest", 5, 15, 80)
            .unwrap();
        let built = EnemyBuilder::new("Goblin")
            .dungeon("Forest")
            .level(5)
            .damage(15)
            .health(80)
            .build()
            .unwrap();
        assert_eq!(enemy, built);
    }

    #[test]
    fn factory_rejects_empty_name() {
        let factory = StandardCharacterFactory::new();
        assert_eq!(
            factory.hero_factory(1).unwrap().create_hero(" "),
            Err(CreationError::EmptyName)
        );
    }
}
