//! Content factory for loading arena data from a directory.

use std::path::{Path, PathBuf};

use arena_core::ArenaConfig;

use crate::loaders::{
    ConfigLoader, EnemyCatalog, EnemyLoader, LoadResult, Scenario, ScenarioLoader,
};

/// Content factory that loads all arena content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── enemies.ron
/// └── scenarios/
///     └── tournament.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load arena configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<ArenaConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(ArenaConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load enemy templates from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<EnemyCatalog> {
        let path = self.data_dir.join("enemies.ron");
        EnemyLoader::load(&path)
    }

    /// Load a scenario from `scenarios/{name}.ron`.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the scenario file (without `.ron` extension)
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self
            .data_dir
            .join("scenarios")
            .join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ContentFactory) {
        let temp_dir = TempDir::new().unwrap();
        let factory = ContentFactory::new(temp_dir.path());
        (temp_dir, factory)
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let (_temp, factory) = setup();
        assert_eq!(factory.load_config().unwrap(), ArenaConfig::default());
    }

    #[test]
    fn loads_every_file_kind() {
        let (temp, factory) = setup();
        std::fs::write(temp.path().join("config.toml"), "max_battle_records = 2\n").unwrap();
        std::fs::write(
            temp.path().join("enemies.ron"),
            r#"[("slime", (name: "Slime", dungeon: "Cave"))]"#,
        )
        .unwrap();
        std::fs::create_dir(temp.path().join("scenarios")).unwrap();
        std::fs::write(
            temp.path().join("scenarios").join("duel.ron"),
            r#"(
                heroes: [(kind: fighter, name: "Conan")],
                enemies: [Template(id: "slime")],
                battles: [(hero: 0, enemy: 0)],
            )"#,
        )
        .unwrap();

        assert_eq!(factory.load_config().unwrap().max_battle_records, 2);
        assert_eq!(factory.load_enemies().unwrap().len(), 1);
        assert_eq!(factory.load_scenario("duel").unwrap().battles.len(), 1);
        assert!(factory.load_scenario("missing").is_err());
    }
}
