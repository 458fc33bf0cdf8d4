//! Common error infrastructure for arena-core.
//!
//! This module provides the shared classification used by every error type in
//! the crate, plus the umbrella [`ArenaError`] returned by the [`Session`]
//! API. Domain-specific errors (`CreationError`, `BattleError`,
//! `SnapshotError`) live next to the code that raises them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each component has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **No Control Flow**: Combatant death is a predicate, never an error
//!
//! [`Session`]: crate::Session

use crate::create::CreationError;
use crate::engine::BattleError;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The caller picked something that does not exist; re-prompt
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: A contract the caller must uphold was broken
/// - **Fatal**: The operation could not complete and left no partial state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry with a different selection.
    ///
    /// Examples: unknown hero type code, roster index out of range
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: empty name, non-positive damage
    Validation,

    /// Internal error - the caller violated a precondition.
    ///
    /// Examples: battle started with a defeated combatant
    Internal,

    /// Fatal error - the operation was aborted.
    ///
    /// Examples: battle snapshot could not be recorded
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a caller bug or aborted operation.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all arena-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

// ============================================================================
// Selection Errors
// ============================================================================

/// A caller-chosen type code or roster position matched nothing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionError {
    /// Hero type code does not name a hero variant.
    #[error("invalid hero type code {0}")]
    InvalidHeroType(u8),

    /// Hero type name does not name a hero variant.
    #[error("unknown hero type '{0}'")]
    UnknownHeroType(String),

    /// Hero roster position is out of range.
    #[error("no hero at position {index} (roster holds {len})")]
    HeroIndexOutOfRange { index: usize, len: usize },

    /// Enemy roster position is out of range.
    #[error("no enemy at position {index} (roster holds {len})")]
    EnemyIndexOutOfRange { index: usize, len: usize },
}

impl GameError for SelectionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidHeroType(_) => "SELECTION_INVALID_HERO_TYPE",
            Self::UnknownHeroType(_) => "SELECTION_UNKNOWN_HERO_TYPE",
            Self::HeroIndexOutOfRange { .. } => "SELECTION_HERO_INDEX_OUT_OF_RANGE",
            Self::EnemyIndexOutOfRange { .. } => "SELECTION_ENEMY_INDEX_OUT_OF_RANGE",
        }
    }
}

// ============================================================================
// Umbrella Error
// ============================================================================

/// Errors surfaced by the [`Session`](crate::Session) API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Creation(#[from] CreationError),

    #[error(transparent)]
    Battle(#[from] BattleError),
}

impl GameError for ArenaError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Selection(error) => error.severity(),
            Self::Creation(error) => error.severity(),
            Self::Battle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Selection(error) => error.error_code(),
            Self::Creation(error) => error.error_code(),
            Self::Battle(error) => error.error_code(),
        }
    }
}
