//! Wave and level progression.

use log::{debug, info};

use nova_core::constants::*;
use nova_core::enums::GameStatus;
use nova_core::events::GameEvent;
use nova_core::state::{rockets_per_wave, WorldSnapshot};

/// If the current wave is cleared, refill towers and move on: next wave,
/// upgrade screen at level end, or victory after the final level.
pub fn run(state: &mut WorldSnapshot, events: &mut Vec<GameEvent>) {
    if !state.wave_cleared() {
        return;
    }

    for tower in state.towers.iter_mut().filter(|t| t.active) {
        tower.ammo = tower.max_ammo;
    }

    if state.wave < WAVES_PER_LEVEL {
        events.push(GameEvent::WaveComplete {
            level: state.level,
            wave: state.wave,
        });
        state.wave += 1;
        state.rockets_spawned_in_wave = 0;
        state.total_rockets_per_wave = rockets_per_wave(state.level, state.wave);
        debug!(
            "level {} wave {} begins: {} rockets",
            state.level, state.wave, state.total_rockets_per_wave
        );
    } else if state.level < MAX_LEVELS {
        let bonus = POINTS_PER_REMAINING_AMMO.saturating_mul(state.total_ammo());
        state.score = state.score.saturating_add(bonus);
        state.status = GameStatus::Upgrade;
        events.push(GameEvent::LevelComplete {
            level: state.level,
            bonus,
        });
        info!("level {} complete, ammo bonus {bonus}", state.level);
    } else {
        state.status = GameStatus::Won;
        events.push(GameEvent::Victory { score: state.score });
        info!("final level cleared, score {}", state.score);
    }
}
