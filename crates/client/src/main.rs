//! Arena client binary.
//!
//! Composition root that loads content, replays a scenario through a fresh
//! [`Session`](arena_core::Session), and prints the battle history.
//!
//! # Examples
//!
//! ```bash
//! # Replay the bundled tournament
//! cargo run -p arena-client
//!
//! # JSON history, custom scenario
//! ARENA_OUTPUT=json ARENA_SCENARIO=duel cargo run -p arena-client
//! ```

use anyhow::{Context, Result};
use arena_client::{ClientConfig, print_history, replay};
use arena_content::ContentFactory;
use arena_core::Session;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    let content = ContentFactory::new(&config.data_dir);

    let mut arena_config = content
        .load_config()
        .with_context(|| format!("Failed to load config from {}", config.data_dir.display()))?;
    if let Some(max_records) = config.max_records {
        arena_config.max_battle_records = max_records;
    }

    let catalog = content.load_enemies()?;
    let scenario = content.load_scenario(&config.scenario)?;
    tracing::info!(
        scenario = %config.scenario,
        templates = catalog.len(),
        battles = scenario.battles.len(),
        "replaying scenario"
    );

    let mut session = Session::new(arena_config);
    let replay = replay(&mut session, &catalog, &scenario)?;

    let stdout = std::io::stdout();
    print_history(&mut stdout.lock(), &session, &replay, config.output)?;

    Ok(())
}
