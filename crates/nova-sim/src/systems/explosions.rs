//! Explosion lifetime: advance timers, recompute radii, expire.

use nova_core::components::Explosion;
use nova_core::state::WorldSnapshot;

pub fn run(state: &mut WorldSnapshot) {
    for explosion in &mut state.explosions {
        explosion.timer += 1;
        explosion.radius = Explosion::envelope(explosion.timer, explosion.duration, explosion.max_radius);
    }
    state.explosions.retain(|e| e.timer < e.duration);
}
