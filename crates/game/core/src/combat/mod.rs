//! Combat capability shared by heroes and enemies.
//!
//! Both sides of a battle implement [`Combatant`], so the battle engine can
//! resolve a round without caring which kind of character is swinging.
//!
//! # Core Functions
//!
//! - `Combatant::attack`: lands one blow, returning a [`Strike`]
//! - `Combatant::is_alive`: `health > 0`
//! - `apply_damage`: health reduction (may go below zero)

pub mod damage;

pub use damage::apply_damage;

/// Which side of a battle a combatant fights on.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    Hero,
    Enemy,
}

impl Side {
    /// Returns the opposing side.
    pub const fn opponent(self) -> Self {
        match self {
            Self::Hero => Self::Enemy,
            Self::Enemy => Self::Hero,
        }
    }
}

/// A single blow landed by one combatant on another.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strike {
    /// Side of the attacker.
    pub side: Side,
    pub attacker: String,
    pub target: String,
    /// Damage dealt, always the attacker's damage attribute.
    pub damage: i32,
    /// Target health after the blow. Zero or below means the target is dead.
    pub target_health: i32,
}

impl Strike {
    /// Returns true if this blow left the target dead.
    pub fn is_lethal(&self) -> bool {
        self.target_health <= 0
    }
}

impl core::fmt::Display for Strike {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} hits {} for {} damage ({} HP left)",
            self.attacker, self.target, self.damage, self.target_health
        )
    }
}

pub(crate) mod sealed {
    /// Mutation hooks reachable only from inside the crate.
    pub trait Sealed {
        /// Applies incoming damage to this combatant's health.
        fn absorb(&mut self, amount: i32);

        /// Per-variant bookkeeping performed each time this combatant strikes.
        fn on_strike(&mut self) {}
    }
}

/// Anything that can attack and be attacked.
///
/// Health only ever changes through [`Combatant::attack`]; there is no setter
/// and no healing. The trait is sealed so external code cannot bypass that.
pub trait Combatant: sealed::Sealed {
    fn name(&self) -> &str;

    fn side(&self) -> Side;

    fn level(&self) -> u32;

    /// Damage dealt by every attack. Always positive for validated combatants.
    fn damage(&self) -> i32;

    fn health(&self) -> i32;

    /// Quick check if the combatant is alive.
    #[inline]
    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// Reduces `target`'s health by exactly `self.damage()`.
    ///
    /// Attacking an already defeated target is permitted and drives its health
    /// further below zero. The attacker's own health is never touched.
    fn attack<T>(&mut self, target: &mut T) -> Strike
    where
        T: Combatant,
        Self: Sized,
    {
        let damage = self.damage();
        self.on_strike();
        target.absorb(damage);

        Strike {
            side: self.side(),
            attacker: self.name().to_owned(),
            target: target.name().to_owned(),
            damage,
            target_health: target.health(),
        }
    }
}
