//! Enemy template catalog loader.
//!
//! Loads prototype enemies from RON files. Each spawn produces a fresh,
//! independently validated [`Enemy`].

use std::path::Path;

use arena_core::{Enemy, EnemyTemplate};

use crate::loaders::{LoadResult, read_file};

/// Loader for enemy catalogs from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load an enemy catalog from a RON file.
    ///
    /// RON format: `Vec<(String, EnemyTemplate)>`, keyed by template id.
    pub fn load(path: &Path) -> LoadResult<EnemyCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EnemyCatalog> {
        let entries: Vec<(String, EnemyTemplate)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        let mut catalog = EnemyCatalog::default();
        for (id, template) in entries {
            catalog.insert(id, template)?;
        }
        Ok(catalog)
    }
}

/// Enemy templates addressable by id, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnemyCatalog {
    entries: Vec<(String, EnemyTemplate)>,
}

impl EnemyCatalog {
    /// Registers a template. Ids must be unique.
    pub fn insert(&mut self, id: impl Into<String>, template: EnemyTemplate) -> LoadResult<()> {
        let id = id.into();
        if self.get(&id).is_some() {
            anyhow::bail!("Duplicate enemy template id '{}'", id);
        }
        self.entries.push((id, template));
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&EnemyTemplate> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == id)
            .map(|(_, template)| template)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Spawns a fresh enemy from the template registered under `id`.
    pub fn spawn(&self, id: &str) -> LoadResult<Enemy> {
        let template = self.require(id)?;
        template
            .spawn()
            .map_err(|e| anyhow::anyhow!("Enemy template '{}' is invalid: {}", id, e))
    }

    /// Spawns a fresh enemy from `id` under a different name.
    pub fn spawn_as(&self, id: &str, name: &str) -> LoadResult<Enemy> {
        let template = self.require(id)?;
        template
            .spawn_as(name)
            .map_err(|e| anyhow::anyhow!("Enemy template '{}' is invalid: {}", id, e))
    }

    fn require(&self, id: &str) -> LoadResult<&EnemyTemplate> {
        self.get(id)
            .ok_or_else(|| anyhow::anyhow!("Unknown enemy template '{}'", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::Combatant;
    use tempfile::TempDir;

    const CATALOG: &str = r#"[
        ("goblin", (name: "Goblin", dungeon: "Forest", level: 5, damage: 15, health: 80)),
        ("slime", (name: "Slime")),
    ]"#;

    #[test]
    fn load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("enemies.ron");
        std::fs::write(&path, CATALOG).unwrap();

        let catalog = EnemyLoader::load(&path).unwrap();
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["goblin", "slime"]);
    }

    #[test]
    fn omitted_fields_use_enemy_defaults() {
        let catalog = EnemyLoader::parse(CATALOG).unwrap();
        let slime = catalog.spawn("slime").unwrap();

        assert_eq!(slime.level(), Enemy::DEFAULT_LEVEL);
        assert_eq!(slime.damage(), Enemy::DEFAULT_DAMAGE);
        assert_eq!(slime.health(), Enemy::DEFAULT_HEALTH);
        assert_eq!(slime.dungeon(), "");
    }

    #[test]
    fn spawned_enemies_match_direct_construction() {
        let catalog = EnemyLoader::parse(CATALOG).unwrap();

        assert_eq!(
            catalog.spawn("goblin").unwrap(),
            Enemy::new("Goblin", "Forest", 5, 15, 80).unwrap()
        );
        assert_eq!(catalog.spawn_as("goblin", "Grub").unwrap().name(), "Grub");
    }

    #[test]
    fn unknown_and_invalid_templates_are_errors() {
        let catalog = EnemyLoader::parse(r#"[("broken", (name: "Broken", damage: 0))]"#).unwrap();

        let error = catalog.spawn("missing").unwrap_err();
        assert!(error.to_string().contains("Unknown enemy template"));

        let error = catalog.spawn("broken").unwrap_err();
        assert!(error.to_string().contains("is invalid"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let source = r#"[("rat", (name: "Rat")), ("rat", (name: "Big Rat"))]"#;
        let error = EnemyLoader::parse(source).unwrap_err();
        assert!(error.to_string().contains("Duplicate enemy template id 'rat'"));
    }

    #[test]
    fn missing_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let error = EnemyLoader::load(&temp_dir.path().join("nope.ron")).unwrap_err();
        assert!(error.to_string().contains("Failed to read file"));
    }
}
