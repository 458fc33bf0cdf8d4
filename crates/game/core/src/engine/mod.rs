//! Battle execution against the live roster.
//!
//! The [`BattleEngine`] is the only code path that mutates combatants after
//! creation. A battle runs in a fixed order:
//! existence check → readiness check → snapshot → rounds → removal of the loser.
//! If anything fails before the rounds begin, neither the roster nor the
//! history has changed.

mod battle;
mod errors;

pub use battle::{Battle, BattlePhase, BattleSummary, Outcome};
pub use errors::BattleError;

use crate::combat::{Combatant, Strike};
use crate::error::GameError;
use crate::history::BattleHistory;
use crate::roster::{EnemyId, HeroId, Roster};

/// Complete outcome of a battle run through the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub hero: HeroId,
    pub enemy: EnemyId,
    pub outcome: Outcome,
    pub rounds: u32,
    /// Sequence number of the history record taken when the battle began.
    pub record: usize,
    pub strikes: Vec<Strike>,
}

impl BattleReport {
    /// Handle of the combatant removed from the roster.
    pub fn loser(&self) -> Loser {
        match self.outcome {
            Outcome::Victory => Loser::Enemy(self.enemy),
            Outcome::Defeat => Loser::Hero(self.hero),
        }
    }
}

/// The side that lost a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Loser {
    Hero(HeroId),
    Enemy(EnemyId),
}

/// Runs battles between roster entries and records their starting state.
pub struct BattleEngine<'a> {
    roster: &'a mut Roster,
    history: &'a mut BattleHistory,
}

impl<'a> BattleEngine<'a> {
    pub fn new(roster: &'a mut Roster, history: &'a mut BattleHistory) -> Self {
        Self { roster, history }
    }

    /// Fights one battle to completion.
    ///
    /// The winner stays in the roster with whatever health it has left. The
    /// loser is removed.
    pub fn execute(&mut self, hero: HeroId, enemy: EnemyId) -> Result<BattleReport, BattleError> {
        self.fight(hero, enemy).inspect_err(|error| {
            tracing::warn!(
                %hero,
                %enemy,
                code = error.error_code(),
                "battle rejected: {}",
                error
            );
        })
    }

    fn fight(&mut self, hero: HeroId, enemy: EnemyId) -> Result<BattleReport, BattleError> {
        if self.roster.hero(hero).is_none() {
            return Err(BattleError::HeroMissing(hero));
        }
        let (hero_entry, enemy_entry) = self
            .roster
            .pair_mut(hero, enemy)
            .ok_or(BattleError::EnemyMissing(enemy))?;

        let battle = Battle::start(hero_entry, enemy_entry)?;
        let record = self
            .history
            .snapshot(battle.enemy(), battle.hero())?
            .sequence();

        tracing::info!(
            %hero,
            %enemy,
            record,
            "battle started: {} vs {}",
            battle.hero().name(),
            battle.enemy().name()
        );

        let BattleSummary {
            outcome,
            rounds,
            strikes,
        } = battle.run();

        let report = BattleReport {
            hero,
            enemy,
            outcome,
            rounds,
            record,
            strikes,
        };

        match report.loser() {
            Loser::Enemy(id) => {
                if let Some(defeated) = self.roster.remove_enemy(id) {
                    tracing::info!(%id, rounds, "{} was defeated", defeated.name());
                }
            }
            Loser::Hero(id) => {
                if let Some(defeated) = self.roster.remove_hero(id) {
                    tracing::warn!(%id, rounds, "{} was defeated", defeated.name());
                }
            }
        }

        Ok(report)
    }
}
