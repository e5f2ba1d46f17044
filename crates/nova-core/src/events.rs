//! Events emitted by the simulation for audio and UI feedback.
//!
//! Each tick or command returns the events it produced alongside the new
//! snapshot. Collaborators consume them once and discard them.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Interceptor left a tower.
    Launched {
        interceptor: EntityId,
        tower: EntityId,
        x: f64,
        y: f64,
        target_x: f64,
        target_y: f64,
    },
    /// Interceptor reached its target and detonated.
    Exploded {
        explosion: EntityId,
        x: f64,
        y: f64,
        max_radius: f64,
    },
    /// Enemy projectile reached the ground.
    Impacted { projectile: EntityId, x: f64, y: f64 },
    /// Enemy projectile caught in a blast.
    Intercepted {
        projectile: EntityId,
        x: f64,
        y: f64,
        points: u64,
    },
    CityDestroyed { city: EntityId },
    TowerDestroyed { tower: EntityId },
    /// A wave was cleared and the next one begins.
    WaveComplete { level: u32, wave: u32 },
    /// All waves of a level cleared; `bonus` was added for unspent ammo.
    LevelComplete { level: u32, bonus: u64 },
    Victory { score: u64 },
    Defeat { score: u64 },
}
