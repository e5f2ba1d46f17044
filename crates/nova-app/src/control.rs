//! Control surface over a running game loop.
//!
//! These are the calls a frontend makes: start the loop, forward player
//! commands, poll the latest snapshot and drain events, shut down.

use log::info;

use nova_core::commands::PlayerCommand;
use nova_core::events::GameEvent;
use nova_core::state::WorldSnapshot;
use nova_sim::engine::SimConfig;

use crate::error::{AppError, AppResult};
use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: SimConfig) -> AppResult<()> {
    let mut running = state.running.lock().map_err(|_| AppError::LockPoisoned("running"))?;

    if *running {
        return Err(AppError::AlreadyRunning);
    }

    let seed = config.seed;
    let handle = game_loop::spawn_game_loop(
        config,
        state.latest_snapshot.clone(),
        state.pending_events.clone(),
    )?;

    *state.command_tx.lock().map_err(|_| AppError::LockPoisoned("command"))? =
        Some(handle.command_tx);
    *state.loop_handle.lock().map_err(|_| AppError::LockPoisoned("thread"))? =
        Some(handle.thread);
    *running = true;

    info!("game loop started with seed {seed}");
    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> AppResult<()> {
    let tx_lock = state.command_tx.lock().map_err(|_| AppError::LockPoisoned("command"))?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| AppError::ChannelClosed),
        None => Err(AppError::NotStarted),
    }
}

/// Get the latest snapshot (`None` until the loop has ticked once).
pub fn get_snapshot(state: &AppState) -> AppResult<Option<WorldSnapshot>> {
    let lock = state
        .latest_snapshot
        .lock()
        .map_err(|_| AppError::LockPoisoned("snapshot"))?;
    Ok(lock.clone())
}

/// Take every event produced since the previous drain, oldest first.
pub fn drain_events(state: &AppState) -> AppResult<Vec<GameEvent>> {
    let mut lock = state
        .pending_events
        .lock()
        .map_err(|_| AppError::LockPoisoned("events"))?;
    Ok(std::mem::take(&mut *lock))
}

/// Stop the game loop and wait for its thread to exit.
pub fn stop_simulation(state: &AppState) -> AppResult<()> {
    let mut running = state.running.lock().map_err(|_| AppError::LockPoisoned("running"))?;
    if !*running {
        return Err(AppError::NotStarted);
    }

    if let Some(tx) = state
        .command_tx
        .lock()
        .map_err(|_| AppError::LockPoisoned("command"))?
        .take()
    {
        // A closed channel means the loop already exited.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    let thread = state
        .loop_handle
        .lock()
        .map_err(|_| AppError::LockPoisoned("thread"))?
        .take();
    if let Some(thread) = thread {
        thread.join().map_err(|_| AppError::ThreadPanicked)?;
    }
    *running = false;

    info!("game loop stopped");
    Ok(())
}
