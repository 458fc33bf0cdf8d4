//! Character data model.
//!
//! - [`Hero`]: player-controlled, one of the [`HeroKind`] variants
//! - [`Enemy`]: caller-supplied stats, no variants
//!
//! Both implement [`Combatant`](crate::combat::Combatant). Fields are private;
//! health changes only through attacks.

pub mod enemy;
pub mod hero;

pub use enemy::Enemy;
pub use hero::{Hero, HeroClass, HeroKind};
