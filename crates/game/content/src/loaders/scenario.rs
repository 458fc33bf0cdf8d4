//! Scenario script loader.
//!
//! A scenario lists heroes and enemies to create and the battles to fight
//! between them. Battles refer to combatants by their position in the
//! scenario lists, not in the live roster, so earlier removals never shift
//! later references.

use std::path::Path;

use arena_core::{CreationError, CreationStrategy, Enemy, EnemyTemplate, Hero, HeroKind};
use serde::Deserialize;

use crate::loaders::{EnemyCatalog, LoadResult, read_file};

/// A hero entry. Unset stats fall back to the variant's base stats.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HeroSpec {
    pub kind: HeroKind,
    pub name: String,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub damage: Option<i32>,
    #[serde(default)]
    pub health: Option<i32>,
    #[serde(default)]
    pub arrows: Option<u32>,
}

impl HeroSpec {
    /// True when the entry only names a variant and keeps its base stats.
    pub fn is_plain(&self) -> bool {
        self.level.is_none()
            && self.damage.is_none()
            && self.health.is_none()
            && self.arrows.is_none()
    }

    /// Builds the hero, applying any overrides.
    pub fn build(&self) -> Result<Hero, CreationError> {
        let mut builder = Hero::builder(self.kind, self.name.clone());
        if let Some(level) = self.level {
            builder = builder.level(level);
        }
        if let Some(damage) = self.damage {
            builder = builder.damage(damage);
        }
        if let Some(health) = self.health {
            builder = builder.health(health);
        }
        if let Some(arrows) = self.arrows {
            builder = builder.arrows(arrows);
        }
        builder.build()
    }
}

/// An enemy entry: either a catalog template or inline stats.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub enum EnemySpec {
    /// Spawn from the enemy catalog, optionally renamed.
    Template {
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
    /// Spawn from stats written inline.
    Custom(EnemyTemplate),
}

impl EnemySpec {
    pub fn spawn(&self, catalog: &EnemyCatalog) -> LoadResult<Enemy> {
        match self {
            Self::Template { id, name } => match name {
                Some(name) => catalog.spawn_as(id, name),
                None => catalog.spawn(id),
            },
            Self::Custom(template) => template
                .spawn()
                .map_err(|e| anyhow::anyhow!("Enemy '{}' is invalid: {}", template.name, e)),
        }
    }
}

/// One battle, by scenario position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct BattleSpec {
    pub hero: usize,
    pub enemy: usize,
}

/// Heroes, enemies and the battles between them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    /// Strategy used for plain hero entries.
    #[serde(default)]
    pub strategy: CreationStrategy,
    #[serde(default)]
    pub heroes: Vec<HeroSpec>,
    #[serde(default)]
    pub enemies: Vec<EnemySpec>,
    #[serde(default)]
    pub battles: Vec<BattleSpec>,
}

impl Scenario {
    /// Checks that every battle refers to entries that exist.
    pub fn validate(&self) -> LoadResult<()> {
        for (index, battle) in self.battles.iter().enumerate() {
            if battle.hero >= self.heroes.len() {
                anyhow::bail!(
                    "Battle {} refers to hero {} but the scenario lists {}",
                    index,
                    battle.hero,
                    self.heroes.len()
                );
            }
            if battle.enemy >= self.enemies.len() {
                anyhow::bail!(
                    "Battle {} refers to enemy {} but the scenario lists {}",
                    index,
                    battle.enemy,
                    self.enemies.len()
                );
            }
        }
        Ok(())
    }
}

/// Loader for scenario scripts from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses and validates a scenario.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        scenario.validate()?;

        tracing::debug!(
            heroes = scenario.heroes.len(),
            enemies = scenario.enemies.len(),
            battles = scenario.battles.len(),
            "scenario loaded"
        );
        Ok(scenario)
    }
}
