//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside the thread so it is never shared. Commands
//! arrive via `mpsc` channel. Each tick's snapshot replaces the shared slot
//! and its events are appended to the shared queue for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, warn};

use nova_core::commands::PlayerCommand;
use nova_core::constants::{TICK_MS, TICK_RATE};
use nova_core::events::GameEvent;
use nova_core::state::WorldSnapshot;
use nova_sim::engine::{SimConfig, SimulationEngine};

use crate::autopilot::Autopilot;
use crate::error::AppResult;
use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Handles returned by [`spawn_game_loop`].
pub struct GameLoopHandle {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    pub thread: JoinHandle<()>,
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<WorldSnapshot>>>,
    pending_events: Arc<Mutex<Vec<GameEvent>>>,
) -> AppResult<GameLoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("nova-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, &pending_events);
        })?;

    Ok(GameLoopHandle {
        command_tx: cmd_tx,
        thread,
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<WorldSnapshot>>,
    pending_events: &Mutex<Vec<GameEvent>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    debug!("game loop shutting down at tick {}", engine.snapshot().tick);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let output = engine.tick(TICK_MS);

        // 3. Publish events and the latest snapshot
        if !output.events.is_empty() {
            match pending_events.lock() {
                Ok(mut queue) => queue.extend(output.events),
                Err(_) => warn!("event queue lock poisoned, dropping events"),
            }
        }
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(output.snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Outcome of a synchronous run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub snapshot: WorldSnapshot,
    pub ticks: u64,
    pub launched: usize,
    pub intercepted: usize,
    pub impacted: usize,
}

impl RunSummary {
    pub fn from_snapshot(snapshot: WorldSnapshot) -> Self {
        Self {
            snapshot,
            ticks: 0,
            launched: 0,
            intercepted: 0,
            impacted: 0,
        }
    }

    pub fn record(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Launched { .. } => self.launched += 1,
                GameEvent::Intercepted { .. } => self.intercepted += 1,
                GameEvent::Impacted { .. } => self.impacted += 1,
                _ => {}
            }
        }
    }
}

/// Run up to `ticks` ticks on the calling thread, as fast as possible.
///
/// Starts a game, then feeds the autopilot (if any) the snapshot before each
/// tick. Stops early once the game is won or lost.
pub fn run_synchronous(
    config: SimConfig,
    ticks: u64,
    mut autopilot: Option<&mut Autopilot>,
) -> RunSummary {
    let mut engine = SimulationEngine::new(config);
    engine.queue_command(PlayerCommand::StartGame);
    let mut summary = RunSummary::from_snapshot(engine.snapshot().clone());

    for _ in 0..ticks {
        if let Some(pilot) = autopilot.as_deref_mut() {
            engine.queue_commands(pilot.decide(engine.snapshot()));
        }
        let output = engine.tick(TICK_MS);
        summary.ticks += 1;
        summary.record(&output.events);
        summary.snapshot = output.snapshot;
        if summary.snapshot.status.is_terminal() {
            break;
        }
    }
    summary
}
