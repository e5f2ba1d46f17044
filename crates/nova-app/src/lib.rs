//! Headless host for the missile defense simulation.
//!
//! Runs the engine on its own thread at a fixed rate, or synchronously for
//! a fixed number of ticks, and drives it with player commands from the
//! command line or an autopilot.

pub mod autopilot;
pub mod config;
pub mod control;
pub mod error;
pub mod game_loop;
pub mod state;

pub use nova_core as core;
