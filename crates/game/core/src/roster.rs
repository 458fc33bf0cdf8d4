//! Live collections of heroes and enemies.
//!
//! The roster owns every combatant that has not been defeated. Entries keep
//! their creation order and are addressed by stable handles that are never
//! reused, so a handle taken before a battle stays meaningful after it.

use core::fmt;

use crate::character::{Enemy, Hero};
use crate::error::SelectionError;

/// Stable handle for a hero in a [`Roster`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroId(pub u32);

/// Stable handle for an enemy in a [`Roster`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyId(pub u32);

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hero#{}", self.0)
    }
}

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enemy#{}", self.0)
    }
}

/// Heroes and enemies still in play.
///
/// Only the battle engine removes entries, and only the defeated side.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    heroes: Vec<(HeroId, Hero)>,
    enemies: Vec<(EnemyId, Enemy)>,
    next_hero: u32,
    next_enemy: u32,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_hero(&mut self, hero: Hero) -> HeroId {
        let id = HeroId(self.next_hero);
        self.next_hero += 1;
        self.heroes.push((id, hero));
        id
    }

    pub fn add_enemy(&mut self, enemy: Enemy) -> EnemyId {
        let id = EnemyId(self.next_enemy);
        self.next_enemy += 1;
        self.enemies.push((id, enemy));
        id
    }

    pub fn hero(&self, id: HeroId) -> Option<&Hero> {
        self.heroes
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, hero)| hero)
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, enemy)| enemy)
    }

    /// Returns an iterator over heroes in creation order.
    pub fn heroes(&self) -> impl Iterator<Item = (HeroId, &Hero)> + Clone {
        self.heroes.iter().map(|(id, hero)| (*id, hero))
    }

    /// Returns an iterator over enemies in creation order.
    pub fn enemies(&self) -> impl Iterator<Item = (EnemyId, &Enemy)> + Clone {
        self.enemies.iter().map(|(id, enemy)| (*id, enemy))
    }

    /// Selects a hero by zero-based position.
    pub fn hero_at(&self, index: usize) -> Result<(HeroId, &Hero), SelectionError> {
        let len = self.heroes.len();
        self.heroes
            .get(index)
            .map(|(id, hero)| (*id, hero))
            .ok_or(SelectionError::HeroIndexOutOfRange { index, len })
    }

    /// Selects an enemy by zero-based position.
    pub fn enemy_at(&self, index: usize) -> Result<(EnemyId, &Enemy), SelectionError> {
        let len = self.enemies.len();
        self.enemies
            .get(index)
            .map(|(id, enemy)| (*id, enemy))
            .ok_or(SelectionError::EnemyIndexOutOfRange { index, len })
    }

    pub fn hero_count(&self) -> usize {
        self.heroes.len()
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    /// True when at least one hero and one enemy are available.
    pub fn can_battle(&self) -> bool {
        !self.heroes.is_empty() && !self.enemies.is_empty()
    }

    /// Borrows one hero and one enemy mutably at the same time.
    pub(crate) fn pair_mut(
        &mut self,
        hero: HeroId,
        enemy: EnemyId,
    ) -> Option<(&mut Hero, &mut Enemy)> {
        let hero = self
            .heroes
            .iter_mut()
            .find(|(entry, _)| *entry == hero)
            .map(|(_, hero)| hero)?;
        let enemy = self
            .enemies
            .iter_mut()
            .find(|(entry, _)| *entry == enemy)
            .map(|(_, enemy)| enemy)?;
        Some((hero, enemy))
    }

    /// Removes a defeated hero, preserving the order of the rest.
    pub(crate) fn remove_hero(&mut self, id: HeroId) -> Option<Hero> {
        let index = self.heroes.iter().position(|(entry, _)| *entry == id)?;
        Some(self.heroes.remove(index).1)
    }

    /// Removes a defeated enemy, preserving the order of the rest.
    pub(crate) fn remove_enemy(&mut self, id: EnemyId) -> Option<Enemy> {
        let index = self.enemies.iter().position(|(entry, _)| *entry == id)?;
        Some(self.enemies.remove(index).1)
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========= Heroes =========")?;
        if self.heroes.is_empty() {
            writeln!(f, "No heroes have been created.")?;
        }
        for (position, (_, hero)) in self.heroes.iter().enumerate() {
            writeln!(f, "{}. {}", position + 1, hero)?;
        }

        writeln!(f, "========= Enemies =========")?;
        if self.enemies.is_empty() {
            writeln!(f, "No enemies have been created.")?;
        }
        for (position, (_, enemy)) in self.enemies.iter().enumerate() {
            writeln!(f, "{}. {}", position + 1, enemy)?;
        }
        Ok(())
    }
}
