//! The simulation step.

use rand::Rng;

use nova_core::enums::GameStatus;
use nova_core::events::GameEvent;
use nova_core::state::WorldSnapshot;

use crate::systems;

/// Advance the world by one fixed tick.
///
/// `elapsed_ms` is the host's frame delta. It is accepted for the host's
/// convenience and not used: every call is exactly one logical tick, so the
/// simulation speed is tied to the call rate, not to wall-clock time.
///
/// Returns the input unchanged (and no events) unless the game is playing.
pub fn advance<R: Rng + ?Sized>(
    snapshot: &WorldSnapshot,
    _elapsed_ms: f64,
    rng: &mut R,
) -> (WorldSnapshot, Vec<GameEvent>) {
    let mut state = snapshot.clone();
    let mut events = Vec::new();

    if state.status != GameStatus::Playing {
        return (state, events);
    }

    // 1. Wave / level progression
    systems::progression::run(&mut state, &mut events);
    // 2. Projectile motion
    systems::movement::run_projectiles(&mut state);
    // 3. Ground impacts
    systems::impact::run(&mut state, &mut events);
    // 4. Interceptor motion and detonation
    systems::movement::run_interceptors(&mut state, &mut events);
    // 5. Explosion envelope and expiry
    systems::explosions::run(&mut state);
    // 6. Blast vs projectile
    systems::intercept::run(&mut state, &mut events);
    // 7. Spawning
    systems::wave_spawner::run(&mut state, rng);
    // 8. Loss check
    systems::outcome::run(&mut state, &mut events);

    state.tick += 1;
    (state, events)
}
