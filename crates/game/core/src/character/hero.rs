//! Player-controlled heroes.

use core::fmt;

use crate::combat::{Combatant, Side, apply_damage, sealed};
use crate::create::{CreationError, Stats, validate};
use crate::error::SelectionError;

/// Hero variant selector.
///
/// Numeric codes (`1` = Archer, `2` = Fighter) are what the factory strategy
/// and the interactive shell use to pick a variant.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HeroKind {
    /// Ranged hero, high damage, low health, limited arrows.
    Archer,
    /// Melee hero, sturdy.
    Fighter,
}

impl HeroKind {
    pub const ALL: [HeroKind; 2] = [HeroKind::Archer, HeroKind::Fighter];

    /// Type code used by the factory strategy.
    pub const fn code(self) -> u8 {
        match self {
            Self::Archer => 1,
            Self::Fighter => 2,
        }
    }

    /// Maps a type code back to a variant.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Archer),
            2 => Some(Self::Fighter),
            _ => None,
        }
    }

    /// Fixed base damage of the variant.
    pub const fn base_damage(self) -> i32 {
        match self {
            Self::Archer => 40,
            Self::Fighter => 20,
        }
    }

    /// Starting health of the variant.
    pub const fn base_health(self) -> i32 {
        match self {
            Self::Archer => 100,
            Self::Fighter => 300,
        }
    }

    /// Parses a variant name, reporting unknown names as a selection error.
    pub fn parse(name: &str) -> Result<Self, SelectionError> {
        name.parse()
            .map_err(|_| SelectionError::UnknownHeroType(name.to_owned()))
    }
}

impl TryFrom<u8> for HeroKind {
    type Error = SelectionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(SelectionError::InvalidHeroType(code))
    }
}

/// Variant-specific hero state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HeroClass {
    /// Arrows are flavor state: firing with an empty quiver still deals full
    /// damage, and the counter stops at zero.
    Archer {
        arrows: u32,
    },
    Fighter,
}

impl HeroClass {
    /// Fresh class state for a newly created hero of `kind`.
    pub const fn new(kind: HeroKind) -> Self {
        match kind {
            HeroKind::Archer => Self::Archer {
                arrows: Hero::STARTING_ARROWS,
            },
            HeroKind::Fighter => Self::Fighter,
        }
    }

    pub const fn kind(&self) -> HeroKind {
        match self {
            Self::Archer { .. } => HeroKind::Archer,
            Self::Fighter => HeroKind::Fighter,
        }
    }
}

/// A hero: one of the [`HeroKind`] variants with its own fixed stats.
///
/// # Invariants
///
/// - `name` is non-empty, `damage > 0`, `level >= 1` (checked at creation)
/// - `health` only decreases, and only by being attacked
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hero {
    name: String,
    damage: i32,
    health: i32,
    level: u32,
    class: HeroClass,
}

impl Hero {
    pub const DEFAULT_LEVEL: u32 = 1;
    pub const STARTING_ARROWS: u32 = 10;

    /// Creates a level-1 hero with the variant's base stats.
    pub fn new(kind: HeroKind, name: impl Into<String>) -> Result<Self, CreationError> {
        Self::from_stats(
            kind,
            Stats {
                name: name.into(),
                level: Self::DEFAULT_LEVEL,
                damage: kind.base_damage(),
                health: kind.base_health(),
            },
        )
    }

    /// Shorthand for `Hero::new(HeroKind::Archer, name)`.
    pub fn archer(name: impl Into<String>) -> Result<Self, CreationError> {
        Self::new(HeroKind::Archer, name)
    }

    /// Shorthand for `Hero::new(HeroKind::Fighter, name)`.
    pub fn fighter(name: impl Into<String>) -> Result<Self, CreationError> {
        Self::new(HeroKind::Fighter, name)
    }

    /// Creates a builder for a hero of `kind`.
    pub fn builder(kind: HeroKind, name: impl Into<String>) -> crate::create::HeroBuilder {
        crate::create::HeroBuilder::new(kind, name)
    }

    /// Single construction path shared by every creation strategy.
    pub(crate) fn from_stats(kind: HeroKind, stats: Stats) -> Result<Self, CreationError> {
        validate(&stats)?;
        Ok(Self {
            name: stats.name,
            damage: stats.damage,
            health: stats.health,
            level: stats.level,
            class: HeroClass::new(kind),
        })
    }

    pub(crate) fn with_arrows(mut self, count: u32) -> Self {
        if let HeroClass::Archer { arrows } = &mut self.class {
            *arrows = count;
        }
        self
    }

    pub fn kind(&self) -> HeroKind {
        self.class.kind()
    }

    pub fn class(&self) -> HeroClass {
        self.class
    }

    /// Remaining arrows, or `None` for variants without ammunition.
    pub fn arrows(&self) -> Option<u32> {
        match self.class {
            HeroClass::Archer { arrows } => Some(arrows),
            HeroClass::Fighter => None,
        }
    }
}

impl sealed::Sealed for Hero {
    fn absorb(&mut self, amount: i32) {
        self.health = apply_damage(self.health, amount);
    }

    fn on_strike(&mut self) {
        if let HeroClass::Archer { arrows } = &mut self.class {
            *arrows = arrows.saturating_sub(1);
        }
    }
}

impl Combatant for Hero {
    fn name(&self) -> &str {
        &self.name
    }

    fn side(&self) -> Side {
        Side::Hero
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

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hero name: {} | Class: {} | Level: {} | Damage: {} | HP: {}",
            self.name,
            self.kind(),
            self.level,
            self.damage,
            self.health
        )?;
        if let HeroClass::Archer { arrows } = self.class {
            write!(f, " | Arrows: {arrows}")?;
        }
        Ok(())
    }
}
