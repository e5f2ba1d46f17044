//! Intercept evaluation: destroys projectiles caught inside a blast.

use glam::DVec2;

use nova_core::constants::{EXPLOSION_HIT_MARGIN, POINTS_PER_ROCKET};
use nova_core::events::GameEvent;
use nova_core::state::WorldSnapshot;

/// Remove every projectile within `radius + EXPLOSION_HIT_MARGIN` of some
/// explosion centre. Each kill scores once even when several blasts
/// overlap it.
pub fn run(state: &mut WorldSnapshot, events: &mut Vec<GameEvent>) {
    if state.explosions.is_empty() {
        return;
    }

    let blasts: Vec<(DVec2, f64)> = state
        .explosions
        .iter()
        .map(|e| (DVec2::new(e.x, e.y), e.radius + EXPLOSION_HIT_MARGIN))
        .collect();

    let mut killed = 0u64;
    state.projectiles.retain(|p| {
        let pos = DVec2::new(p.x, p.y);
        let caught = blasts
            .iter()
            .any(|(center, reach)| pos.distance(*center) < *reach);
        if caught {
            killed += 1;
            events.push(GameEvent::Intercepted {
                projectile: p.id,
                x: p.x,
                y: p.y,
                points: POINTS_PER_ROCKET,
            });
        }
        !caught
    });

    state.score += killed * POINTS_PER_ROCKET;
}
