//! Error types for battle execution.

use crate::combat::Side;
use crate::error::{ErrorSeverity, GameError};
use crate::history::SnapshotError;
use crate::roster::{EnemyId, HeroId};

/// Errors surfaced while starting a battle.
///
/// Every variant except [`BattleError::Snapshot`] is a precondition
/// violation: the caller asked for a battle that must not be fought. In all
/// cases nothing was recorded and no combatant was touched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    #[error("hero {0} is not in the roster")]
    HeroMissing(HeroId),

    #[error("enemy {0} is not in the roster")]
    EnemyMissing(EnemyId),

    #[error("{side} '{name}' is already defeated (health {health})")]
    Defeated {
        side: Side,
        name: String,
        health: i32,
    },

    #[error("failed to record battle start: {0}")]
    Snapshot(#[from] SnapshotError),
}

impl BattleError {
    /// Returns true if the caller broke a battle precondition.
    pub fn is_precondition_violation(&self) -> bool {
        !matches!(self, Self::Snapshot(_))
    }
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::HeroMissing(_) | Self::EnemyMissing(_) | Self::Defeated { .. } => {
                ErrorSeverity::Internal
            }
            Self::Snapshot(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::HeroMissing(_) => "BATTLE_HERO_MISSING",
            Self::EnemyMissing(_) => "BATTLE_ENEMY_MISSING",
            Self::Defeated { .. } => "BATTLE_COMBATANT_DEFEATED",
            Self::Snapshot(error) => error.error_code(),
        }
    }
}
