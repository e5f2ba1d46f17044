//! Loss check, run last so it overrides anything decided earlier in the tick.

use log::info;

use nova_core::enums::GameStatus;
use nova_core::events::GameEvent;
use nova_core::state::WorldSnapshot;

pub fn run(state: &mut WorldSnapshot, events: &mut Vec<GameEvent>) {
    if state.status == GameStatus::Lost || state.towers.iter().any(|t| t.active) {
        return;
    }
    state.status = GameStatus::Lost;
    events.push(GameEvent::Defeat { score: state.score });
    info!(
        "all towers destroyed at level {} wave {}, score {}",
        state.level, state.wave, state.score
    );
}
