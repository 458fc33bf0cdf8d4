//! Headless arena client.
//!
//! # Architecture
//!
//! ```text
//! ClientConfig (environment)
//!   ├─→ ContentFactory (config.toml, enemies.ron, scenarios/)
//!   ├─→ Session (roster + battle history)
//!   └─→ runner (scenario replay, history output)
//! ```

pub mod config;
pub mod runner;

pub use config::{ClientConfig, OutputFormat};
pub use runner::{Replay, print_history, replay};
