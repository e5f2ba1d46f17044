//! Kinematic integration for projectiles and interceptors.
//!
//! Everything flies in a straight line at constant speed, one step per tick.

use glam::DVec2;

use nova_core::components::Explosion;
use nova_core::constants::{ARRIVAL_EPSILON, EXPLOSION_DURATION};
use nova_core::events::GameEvent;
use nova_core::state::WorldSnapshot;

/// Move `from` toward `to` by at most `speed`. Lands exactly on `to` when the
/// remaining distance is no larger than one step.
pub fn step_toward(from: DVec2, to: DVec2, speed: f64) -> DVec2 {
    let delta = to - from;
    let dist = delta.length();
    if dist <= speed {
        return to;
    }
    from + delta / dist * speed
}

/// Travelled fraction of a line of length `total` with `remaining` left.
fn progress(total: f64, remaining: f64) -> f64 {
    if total <= 0.0 {
        return 1.0;
    }
    (1.0 - remaining / total).clamp(0.0, 1.0)
}

/// Advance enemy projectiles toward their targets. A projectile within
/// `ARRIVAL_EPSILON` of its target counts as arrived (`progress == 1.0`).
pub fn run_projectiles(state: &mut WorldSnapshot) {
    for projectile in &mut state.projectiles {
        let pos = DVec2::new(projectile.x, projectile.y);
        let target = DVec2::new(projectile.target_x, projectile.target_y);
        let next = step_toward(pos, target, projectile.speed);

        projectile.x = next.x;
        projectile.y = next.y;
        let remaining = next.distance(target);
        projectile.progress = if remaining < ARRIVAL_EPSILON {
            1.0
        } else {
            progress(projectile.initial_distance, remaining)
        };
    }
}

/// Advance interceptors. One that would reach or pass its target this tick
/// is removed and detonates at the target point. Zero remaining distance
/// always detonates, so no zero-length direction is ever normalized.
pub fn run_interceptors(state: &mut WorldSnapshot, events: &mut Vec<GameEvent>) {
    let interceptors = std::mem::take(&mut state.interceptors);
    let mut flying = Vec::with_capacity(interceptors.len());

    for mut interceptor in interceptors {
        let pos = DVec2::new(interceptor.x, interceptor.y);
        let target = DVec2::new(interceptor.target_x, interceptor.target_y);
        let dist = pos.distance(target);

        if dist <= interceptor.speed {
            let id = state.allocate_id();
            state.explosions.push(Explosion {
                id,
                x: interceptor.target_x,
                y: interceptor.target_y,
                radius: 0.0,
                max_radius: interceptor.explosion_radius,
                timer: 0,
                duration: EXPLOSION_DURATION,
            });
            events.push(GameEvent::Exploded {
                explosion: id,
                x: interceptor.target_x,
                y: interceptor.target_y,
                max_radius: interceptor.explosion_radius,
            });
            continue;
        }

        let next = pos + (target - pos) / dist * interceptor.speed;
        interceptor.x = next.x;
        interceptor.y = next.y;
        let total = interceptor.start_point().distance_to(&interceptor.target_point());
        interceptor.progress = progress(total, next.distance(target));
        flying.push(interceptor);
    }

    state.interceptors = flying;
}
