//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// Top-level game mode.
///
/// `Start → Playing` and `Upgrade → Playing` are driven by player commands;
/// every other transition is decided by the simulation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Title screen, waiting for the start command.
    #[default]
    Start,
    /// Simulation running.
    Playing,
    /// Level complete, waiting for the player to pick a tower upgrade.
    Upgrade,
    /// Final level cleared. Terminal until reset.
    Won,
    /// Every tower destroyed. Terminal until reset.
    Lost,
}

impl GameStatus {
    /// Whether this status only leaves through a reset.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// Ground installation an enemy projectile is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id")]
pub enum TargetRef {
    City(EntityId),
    Tower(EntityId),
}
