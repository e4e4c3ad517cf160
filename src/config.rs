//! Settings for the demo binary, read from a RON file.

use crate::errors::{BattleResult, ConfigError};
use crate::items::Item;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Species of the player's creature.
    pub player_species: String,
    pub player_level: u32,
    /// Pause before each opponent turn, standing in for thinking time.
    pub think_delay_ms: u64,
    /// Fixed seed for a reproducible encounter; random when absent.
    pub seed: Option<u64>,
    /// Ball thrown after a win.
    pub ball: Item,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            player_species: "leafling".to_string(),
            player_level: 8,
            think_delay_ms: 400,
            seed: None,
            ball: Item::BasicBall,
        }
    }
}

impl DemoConfig {
    pub fn from_ron(src: &str) -> BattleResult<Self> {
        ron::from_str(src).map_err(|e| ConfigError::Parse(e.to_string()).into())
    }

    pub fn load(path: impl AsRef<Path>) -> BattleResult<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_ron(&src)
    }
}
