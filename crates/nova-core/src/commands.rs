//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Point};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave the title screen (or a finished game) and start a fresh run.
    StartGame,
    /// Launch an interceptor from the nearest armed tower toward a world point.
    FireAt { target: Point },
    /// Upgrade a tower and move on to the next level.
    UpgradeTower { tower_id: EntityId },
    /// Throw the current run away and go back to the title screen.
    ReturnToMenu,
}
