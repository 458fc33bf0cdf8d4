//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

/// How the battle history is printed once the scenario finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration required to run a scenario headlessly.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    pub scenario: String,
    /// Overrides `max_battle_records` from `config.toml` when set.
    pub max_records: Option<usize>,
    pub output: OutputFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            scenario: Self::DEFAULT_SCENARIO.to_owned(),
            max_records: None,
            output: OutputFormat::default(),
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "crates/game/content/data";
    pub const DEFAULT_SCENARIO: &'static str = "tournament";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_DATA_DIR` - Content directory (default: `crates/game/content/data`)
    /// - `ARENA_SCENARIO` - Scenario name under `scenarios/` (default: `tournament`)
    /// - `ARENA_MAX_RECORDS` - History capacity override
    /// - `ARENA_OUTPUT` - `text` or `json` (default: `text`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("ARENA_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Ok(scenario) = env::var("ARENA_SCENARIO") {
            config.scenario = scenario;
        }

        config.max_records = read_env::<usize>("ARENA_MAX_RECORDS");

        if let Some(output) = read_env::<OutputFormat>("ARENA_OUTPUT") {
            config.output = output;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
