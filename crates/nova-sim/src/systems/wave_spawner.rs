//! Wave spawning system: drops new projectiles until the wave quota is met.

use glam::DVec2;
use rand::Rng;

use nova_core::components::Projectile;
use nova_core::constants::*;
use nova_core::state::{enemy_speed_bonus, spawn_chance, WorldSnapshot};

/// Roll for a spawn this tick. At most one projectile per tick, aimed at a
/// random installation that is still standing.
pub fn run<R: Rng + ?Sized>(state: &mut WorldSnapshot, rng: &mut R) {
    if state.rockets_spawned_in_wave >= state.total_rockets_per_wave {
        return;
    }

    let roll: f64 = rng.gen();
    if roll >= spawn_chance(state.level, state.wave) {
        return;
    }

    let targets = state.active_targets();
    if targets.is_empty() {
        return;
    }
    let target = targets[rng.gen_range(0..targets.len())];
    let Some(target_pos) = state.target_position(target) else {
        return;
    };

    let x = rng.gen_range(0.0..GAME_WIDTH);
    let speed = rng.gen_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED)
        + enemy_speed_bonus(state.level, state.wave);
    let initial_distance = DVec2::new(x, 0.0).distance(target_pos.into());

    let id = state.allocate_id();
    state.projectiles.push(Projectile {
        id,
        x,
        y: 0.0,
        target_x: target_pos.x,
        target_y: target_pos.y,
        target,
        speed,
        progress: 0.0,
        initial_distance,
    });
    state.rockets_spawned_in_wave += 1;
}
