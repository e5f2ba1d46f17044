//! Simulation engine for NOVA DEFENSE.
//!
//! The simulation is a set of pure transitions over `WorldSnapshot`:
//! `advance` runs one fixed tick, `fire_at` and `upgrade` apply player
//! commands. `SimulationEngine` owns the single mutable snapshot slot, the
//! seeded RNG and the command queue.

pub mod commands;
pub mod engine;
pub mod step;
pub mod systems;
pub mod world_setup;

pub use commands::{fire_at, upgrade};
pub use engine::{SimConfig, SimulationEngine, TickOutput};
pub use nova_core as core;
pub use step::advance;
pub use world_setup::create_initial_state;

#[cfg(test)]
mod tests;
