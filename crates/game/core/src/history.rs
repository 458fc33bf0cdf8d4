//! Battle history: point-in-time snapshots of both combatants.
//!
//! A [`BattleRecord`] is taken when a battle starts and never changes after
//! that. Records hold deep copies, so later combat against the live roster
//! entries cannot reach them.

use core::fmt;
use core::iter::FusedIterator;
use core::slice;

use crate::character::{Enemy, Hero};
use crate::config::ArenaConfig;
use crate::error::{ErrorSeverity, GameError};

/// Immutable (enemy, hero) pair captured at the start of a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BattleRecord {
    sequence: usize,
    enemy: Enemy,
    hero: Hero,
}

impl BattleRecord {
    /// Zero-based position of this record in the history.
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    /// Enemy as it stood when the battle began.
    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    /// Hero as it stood when the battle began.
    pub fn hero(&self) -> &Hero {
        &self.hero
    }
}

impl fmt::Display for BattleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Battle Record:")?;
        writeln!(f, "Enemy: {}", self.enemy)?;
        write!(f, "Hero: {}", self.hero)
    }
}

/// A snapshot could not be recorded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapshotError {
    /// The history already holds its configured maximum.
    #[error("battle history is full ({capacity} records)")]
    HistoryFull { capacity: usize },
}

impl GameError for SnapshotError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::HistoryFull { .. } => "SNAPSHOT_HISTORY_FULL",
        }
    }
}

/// Append-only, ordered sequence of battle records.
#[derive(Clone, Debug)]
pub struct BattleHistory {
    records: Vec<BattleRecord>,
    capacity: usize,
}

impl BattleHistory {
    /// Creates an empty history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(ArenaConfig::DEFAULT_MAX_BATTLE_RECORDS)
    }

    /// Creates an empty history that accepts at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    /// Records independent copies of both combatants.
    ///
    /// Either a complete record is appended or nothing is.
    pub fn snapshot(&mut self, enemy: &Enemy, hero: &Hero) -> Result<&BattleRecord, SnapshotError> {
        if self.records.len() >= self.capacity {
            return Err(SnapshotError::HistoryFull {
                capacity: self.capacity,
            });
        }

        let sequence = self.records.len();
        self.records.push(BattleRecord {
            sequence,
            enemy: enemy.clone(),
            hero: hero.clone(),
        });
        Ok(&self.records[sequence])
    }

    /// Returns a restartable iterator over records in creation order.
    pub fn records(&self) -> Records<'_> {
        Records {
            inner: self.records.iter(),
        }
    }

    pub fn get(&self, sequence: usize) -> Option<&BattleRecord> {
        self.records.get(sequence)
    }

    pub fn latest(&self) -> Option<&BattleRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for BattleHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only iterator over [`BattleRecord`]s. Clone it to start over.
#[derive(Clone, Debug)]
pub struct Records<'a> {
    inner: slice::Iter<'a, BattleRecord>,
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a BattleRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Records<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Records<'_> {}

impl FusedIterator for Records<'_> {}

impl<'a> IntoIterator for &'a BattleHistory {
    type Item = &'a BattleRecord;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.records()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Combatant;

    #[test]
    fn snapshot_is_independent_of_live_combatants() {
        let mut history = BattleHistory::new();
        let mut hero = Hero::archer("Robin").unwrap();
        let mut enemy = Enemy::new("Goblin", "Forest", 5, 15, 80).unwrap();

        history.snapshot(&enemy, &hero).unwrap();
        hero.attack(&mut enemy);
        enemy.attack(&mut hero);

        let record = history.latest().unwrap();
        assert_eq!(record.enemy().health(), 80);
        assert_eq!(record.hero().health(), 100);
        assert_eq!(record.hero().arrows(), Some(10));
        assert_eq!(enemy.health(), 40);
        assert_eq!(hero.arrows(), Some(9));
    }

    #[test]
    fn records_keep_creation_order_and_restart() {
        let mut history = BattleHistory::new();
        let hero = Hero::fighter("Conan").unwrap();
        for name in ["Slime", "Bat", "Rat"] {
            let enemy = Enemy::builder(name).build().unwrap();
            history.snapshot(&enemy, &hero).unwrap();
        }

        let records = history.records();
        let first_pass: Vec<_> = records.clone().map(|r| r.enemy().name()).collect();
        let second_pass: Vec<_> = records.map(|r| r.sequence()).collect();

        assert_eq!(first_pass, vec!["Slime", "Bat", "Rat"]);
        assert_eq!(second_pass, vec![0, 1, 2]);
        assert_eq!(history.records().len(), 3);
    }

    #[test]
    fn full_history_rejects_without_partial_record() {
        let mut history = BattleHistory::with_capacity(1);
        let hero = Hero::fighter("Conan").unwrap();
        let enemy = Enemy::builder("Slime").build().unwrap();

        history.snapshot(&enemy, &hero).unwrap();
        assert_eq!(
            history.snapshot(&enemy, &hero),
            Err(SnapshotError::HistoryFull { capacity: 1 })
        );
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn record_display_lists_both_sides() {
        let mut history = BattleHistory::new();
        let hero = Hero::fighter("Conan").unwrap();
        let enemy = Enemy::new("Slime", "Cave", 5, 10, 100).unwrap();

        let text = history.snapshot(&enemy, &hero).unwrap().to_string();
        assert!(text.starts_with("Battle Record:\nEnemy: Enemy name: Slime"));
        assert!(text.contains("Hero: Hero name: Conan"));
    }
}
