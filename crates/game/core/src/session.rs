//! Session: the explicit owner of roster and history.
//!
//! There is no global state. A caller constructs a [`Session`], creates
//! characters through any [`CreationStrategy`], and runs battles. The
//! session hands out shared views only; combatants change exclusively
//! through [`Session::execute_battle`].

use crate::character::{Enemy, Hero, HeroKind};
use crate::config::ArenaConfig;
use crate::create::{
    CharacterFactory, CreationStrategy, EnemyBuilder, HeroBuilder, StandardCharacterFactory,
};
use crate::engine::{BattleEngine, BattleReport};
use crate::error::ArenaError;
use crate::history::{BattleHistory, Records};
use crate::roster::{EnemyId, HeroId, Roster};

/// Arena state for one run of the program.
#[derive(Debug)]
pub struct Session {
    config: ArenaConfig,
    factory: StandardCharacterFactory,
    roster: Roster,
    history: BattleHistory,
}

impl Session {
    pub fn new(config: ArenaConfig) -> Self {
        let history = BattleHistory::with_capacity(config.max_battle_records);
        Self {
            config,
            factory: StandardCharacterFactory::new(),
            roster: Roster::new(),
            history,
        }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn history(&self) -> &BattleHistory {
        &self.history
    }

    /// Creates a hero of the type named by `code` and adds it to the roster.
    ///
    /// Every strategy yields the same hero for the same input.
    pub fn create_hero(
        &mut self,
        strategy: CreationStrategy,
        code: u8,
        name: &str,
    ) -> Result<HeroId, ArenaError> {
        let hero = match strategy {
            CreationStrategy::Direct => Hero::new(HeroKind::try_from(code)?, name)?,
            CreationStrategy::Builder => {
                HeroBuilder::new(HeroKind::try_from(code)?, name).build()?
            }
            CreationStrategy::Factory => self.factory.hero_factory(code)?.create_hero(name)?,
        };
        tracing::debug!(%strategy, "created {}", hero);
        Ok(self.roster.add_hero(hero))
    }

    /// Creates an enemy and adds it to the roster.
    pub fn create_enemy(
        &mut self,
        strategy: CreationStrategy,
        name: &str,
        origin: &str,
        level: u32,
        damage: i32,
        health: i32,
    ) -> Result<EnemyId, ArenaError> {
        let enemy = match strategy {
            CreationStrategy::Direct => Enemy::new(name, origin, level, damage, health)?,
            CreationStrategy::Builder => EnemyBuilder::new(name)
                .level(level)
                .damage(damage)
                .health(health)
                .dungeon(origin)
                .build()?,
            CreationStrategy::Factory => self
                .factory
                .enemy_factory()
                .create_enemy(name, origin, level, damage, health)?,
        };
        tracing::debug!(%strategy, "created {}", enemy);
        Ok(self.roster.add_enemy(enemy))
    }

    /// Adds an already validated hero, e.g. one built from content data.
    pub fn add_hero(&mut self, hero: Hero) -> HeroId {
        self.roster.add_hero(hero)
    }

    /// Adds an already validated enemy, e.g. one spawned from a template.
    pub fn add_enemy(&mut self, enemy: Enemy) -> EnemyId {
        self.roster.add_enemy(enemy)
    }

    pub fn execute_battle(
        &mut self,
        hero: HeroId,
        enemy: EnemyId,
    ) -> Result<BattleReport, ArenaError> {
        let report = BattleEngine::new(&mut self.roster, &mut self.history).execute(hero, enemy)?;
        tracing::info!(
            outcome = %report.outcome,
            rounds = report.rounds,
            "battle {} concluded",
            report.record
        );
        Ok(report)
    }

    /// Runs a battle between the combatants at the given roster positions.
    pub fn execute_battle_at(
        &mut self,
        hero_index: usize,
        enemy_index: usize,
    ) -> Result<BattleReport, ArenaError> {
        let (hero, _) = self.roster.hero_at(hero_index)?;
        let (enemy, _) = self.roster.enemy_at(enemy_index)?;
        self.execute_battle(hero, enemy)
    }

    pub fn battle_records(&self) -> Records<'_> {
        self.history.records()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ArenaConfig::default())
    }
}
