//! Simulation engine: owner of the mutable snapshot slot.
//!
//! `SimulationEngine` holds the current `WorldSnapshot`, the seeded RNG and
//! the pending player commands. Commands are applied at the tick boundary,
//! before the step runs, so a tick never observes a half-applied command.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use nova_core::commands::PlayerCommand;
use nova_core::enums::GameStatus;
use nova_core::events::GameEvent;
use nova_core::state::WorldSnapshot;

use crate::commands::{fire_at, upgrade};
use crate::step::advance;
use crate::world_setup::create_initial_state;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Result of one engine tick: the new snapshot and everything that happened
/// while producing it.
#[derive(Debug, Clone)]
pub struct TickOutput {
    pub snapshot: WorldSnapshot,
    pub events: Vec<GameEvent>,
}

/// The simulation engine. Owns the snapshot slot and all sim state.
pub struct SimulationEngine {
    snapshot: WorldSnapshot,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine on the title screen.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let snapshot = create_initial_state(&mut rng);
        Self {
            snapshot,
            rng,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply queued commands, advance one tick, and return the result.
    pub fn tick(&mut self, elapsed_ms: f64) -> TickOutput {
        self.process_commands();

        let (next, events) = advance(&self.snapshot, elapsed_ms, &mut self.rng);
        self.snapshot = next;
        self.events.extend(events);

        TickOutput {
            snapshot: self.snapshot.clone(),
            events: std::mem::take(&mut self.events),
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &WorldSnapshot {
        &self.snapshot
    }

    pub fn status(&self) -> GameStatus {
        self.snapshot.status
    }

    /// Replace the current snapshot wholesale (scenario setup, replays).
    pub fn load_snapshot(&mut self, snapshot: WorldSnapshot) {
        self.snapshot = snapshot;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                let status = self.snapshot.status;
                if status == GameStatus::Start || status.is_terminal() {
                    let mut fresh = create_initial_state(&mut self.rng);
                    fresh.status = GameStatus::Playing;
                    self.snapshot = fresh;
                    info!("game started");
                } else {
                    debug!("start ignored while {status:?}");
                }
            }
            PlayerCommand::FireAt { target } => {
                let (next, events) = fire_at(&self.snapshot, target);
                self.snapshot = next;
                self.events.extend(events);
            }
            PlayerCommand::UpgradeTower { tower_id } => {
                if self.snapshot.status == GameStatus::Upgrade {
                    self.snapshot = upgrade(&self.snapshot, tower_id);
                    info!("tower {tower_id} upgraded, level {} begins", self.snapshot.level);
                } else {
                    debug!("upgrade ignored while {:?}", self.snapshot.status);
                }
            }
            // Events from commands earlier in this drain still go out.
            PlayerCommand::ReturnToMenu => {
                self.snapshot = create_initial_state(&mut self.rng);
                debug!("returned to menu");
            }
        }
    }
}
