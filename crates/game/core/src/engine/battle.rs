//! Round-by-round resolution of a single battle.
//!
//! ```text
//! NotStarted ──play_round──▶ InProgress ──▶ … ──▶ Concluded(Victory | Defeat)
//! ```
//!
//! Each round the hero strikes first. If the enemy survives it strikes back.
//! The battle concludes the moment either side drops to zero health or below.

use crate::character::{Enemy, Hero};
use crate::combat::{Combatant, Strike};
use crate::engine::BattleError;

/// Battle result from the hero's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    /// The enemy was defeated.
    Victory,
    /// The hero was defeated.
    Defeat,
}

/// Lifecycle of a [`Battle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BattlePhase {
    NotStarted,
    InProgress,
    Concluded(Outcome),
}

impl BattlePhase {
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Concluded(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_concluded(self) -> bool {
        matches!(self, Self::Concluded(_))
    }
}

/// Everything a finished battle produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleSummary {
    pub outcome: Outcome,
    /// Rounds played, including the final partial one.
    pub rounds: u32,
    /// Every blow in the order it landed.
    pub strikes: Vec<Strike>,
}

/// A battle between one hero and one enemy.
///
/// Holds both combatants mutably for the duration of the fight.
pub struct Battle<'a> {
    hero: &'a mut Hero,
    enemy: &'a mut Enemy,
    phase: BattlePhase,
    rounds: u32,
    strikes: Vec<Strike>,
}

impl<'a> Battle<'a> {
    /// Checks the battle preconditions and sets up a battle in `NotStarted`.
    ///
    /// Both combatants must be alive. Damage needs no check here: creation
    /// rejects non-positive damage and nothing changes it afterwards, so every
    /// started battle terminates.
    pub fn start(hero: &'a mut Hero, enemy: &'a mut Enemy) -> Result<Self, BattleError> {
        ensure_ready(&*hero)?;
        ensure_ready(&*enemy)?;

        Ok(Self {
            hero,
            enemy,
            phase: BattlePhase::NotStarted,
            rounds: 0,
            strikes: Vec::new(),
        })
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Rounds played so far.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn strikes(&self) -> &[Strike] {
        &self.strikes
    }

    pub fn hero(&self) -> &Hero {
        self.hero
    }

    pub fn enemy(&self) -> &Enemy {
        self.enemy
    }

    /// Plays one round and returns the resulting phase.
    ///
    /// Does nothing once the battle has concluded.
    pub fn play_round(&mut self) -> BattlePhase {
        if self.phase.is_concluded() {
            return self.phase;
        }

        self.phase = BattlePhase::InProgress;
        self.rounds += 1;

        let strike = self.hero.attack(&mut *self.enemy);
        tracing::debug!(round = self.rounds, "{}", strike);
        self.strikes.push(strike);
        if !self.enemy.is_alive() {
            self.phase = BattlePhase::Concluded(Outcome::Victory);
            return self.phase;
        }

        let strike = self.enemy.attack(&mut *self.hero);
        tracing::debug!(round = self.rounds, "{}", strike);
        self.strikes.push(strike);
        if !self.hero.is_alive() {
            self.phase = BattlePhase::Concluded(Outcome::Defeat);
        }

        self.phase
    }

    /// Plays rounds until the battle concludes.
    pub fn run(mut self) -> BattleSummary {
        let outcome = loop {
            if let Some(outcome) = self.play_round().outcome() {
                break outcome;
            }
        };

        BattleSummary {
            outcome,
            rounds: self.rounds,
            strikes: self.strikes,
        }
    }
}

fn ensure_ready<C: Combatant>(combatant: &C) -> Result<(), BattleError> {
    if !combatant.is_alive() {
        return Err(BattleError::Defeated {
            side: combatant.side(),
            name: combatant.name().to_owned(),
            health: combatant.health(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeroKind;
    use crate::combat::Side;
    use crate::create::{CreationError, EnemyBuilder, HeroBuilder};

    fn conan() -> Hero {
        HeroBuilder::new(HeroKind::Fighter, "Conan")
            .health(400)
            .build()
            .unwrap()
    }

    fn goblin() -> Enemy {
        Enemy::new("Goblin", "Forest", 5, 15, 80).unwrap()
    }

    #[test]
    fn rounds_step_through_phases() {
        let mut hero = conan();
        let mut enemy = goblin();
        let mut battle = Battle::start(&mut hero, &mut enemy).unwrap();
        assert_eq!(battle.phase(), BattlePhase::NotStarted);

        let expected_enemy_health = [60, 40, 20];
        for (round, health) in expected_enemy_health.into_iter().enumerate() {
            assert_eq!(battle.play_round(), BattlePhase::InProgress);
            assert_eq!(battle.enemy().health(), health);
            assert_eq!(battle.hero().health(), 400 - 15 * (round as i32 + 1));
        }

        assert_eq!(
            battle.play_round(),
            BattlePhase::Concluded(Outcome::Victory)
        );
        assert_eq!(battle.enemy().health(), 0);
        // The goblin died to the hero's blow and never struck in round 4.
        assert_eq!(battle.hero().health(), 355);
        assert_eq!(battle.rounds(), 4);
        assert_eq!(battle.strikes().len(), 7);
    }

    #[test]
    fn concluded_battle_ignores_further_rounds() {
        let mut hero = conan();
        let mut enemy = goblin();
        let mut battle = Battle::start(&mut hero, &mut enemy).unwrap();

        while !battle.play_round().is_concluded() {}
        let strikes = battle.strikes().len();

        assert_eq!(
            battle.play_round(),
            BattlePhase::Concluded(Outcome::Victory)
        );
        assert_eq!(battle.strikes().len(), strikes);
        assert_eq!(battle.rounds(), 4);
    }

    #[test]
    fn enemy_can_win() {
        let mut hero = Hero::archer("Robin").unwrap();
        let mut enemy = Enemy::new("Dragon", "Peak", 20, 60, 1_000).unwrap();

        let summary = Battle::start(&mut hero, &mut enemy).unwrap().run();

        assert_eq!(summary.outcome, Outcome::Defeat);
        assert_eq!(summary.rounds, 2);
        assert_eq!(hero.health(), -20);
        assert_eq!(enemy.health(), 1_000 - 2 * 40);
        assert_eq!(summary.strikes.last().unwrap().side, Side::Enemy);
    }

    #[test]
    fn six_round_battle_spends_six_arrows() {
        let mut hero = Hero::archer("Robin").unwrap();
        let mut enemy = Enemy::new("Troll", "Bridge", 4, 5, 240).unwrap();

        let summary = Battle::start(&mut hero, &mut enemy).unwrap().run();

        assert_eq!(summary.outcome, Outcome::Victory);
        assert_eq!(summary.rounds, 6);
        assert_eq!(hero.arrows(), Some(4));
        assert_eq!(hero.health(), 100 - 5 * 5);
    }

    #[test]
    fn arrows_floor_at_zero_without_stopping_the_fight() {
        let mut hero = Hero::archer("Robin").unwrap();
        let mut enemy = Enemy::new("Golem", "Quarry", 9, 1, 40 * 14).unwrap();

        let summary = Battle::start(&mut hero, &mut enemy).unwrap().run();

        assert_eq!(summary.outcome, Outcome::Victory);
        assert_eq!(summary.rounds, 14);
        assert_eq!(hero.arrows(), Some(0));
    }

    #[test]
    fn defeated_combatants_cannot_start() {
        let mut hero = conan();
        let mut enemy = Enemy::new("Ghost", "Crypt", 1, 5, 0).unwrap();

        let error = Battle::start(&mut hero, &mut enemy).err().unwrap();
        assert_eq!(
            error,
            BattleError::Defeated {
                side: Side::Enemy,
                name: "Ghost".into(),
                health: 0,
            }
        );
        assert!(error.is_precondition_violation());
    }

    #[test]
    fn zero_damage_combatants_cannot_be_fielded() {
        assert_eq!(
            Enemy::new("Statue", "Garden", 1, 0, 50),
            Err(CreationError::NonPositiveDamage { damage: 0 })
        );
        assert_eq!(
            EnemyBuilder::new("Statue").damage(-1).build(),
            Err(CreationError::NonPositiveDamage { damage: -1 })
        );
        assert_eq!(
            HeroBuilder::new(HeroKind::Fighter, "Monk").damage(0).build(),
            Err(CreationError::NonPositiveDamage { damage: 0 })
        );
    }

    #[test]
    fn outcome_is_reported_in_snake_case() {
        assert_eq!(Outcome::Victory.to_string(), "victory");
        assert_eq!(Outcome::Defeat.as_ref(), "defeat");
    }
}
