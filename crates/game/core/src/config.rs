/// Arena configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// Maximum number of battle records retained by a session.
    /// Starting a battle once the history is full fails with a snapshot error.
    pub max_battle_records: usize,
}

impl ArenaConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_BATTLE_RECORDS: usize = 1024;

    pub fn new() -> Self {
        Self {
            max_battle_records: Self::DEFAULT_MAX_BATTLE_RECORDS,
        }
    }

    pub fn with_max_battle_records(max_battle_records: usize) -> Self {
        Self { max_battle_records }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}
