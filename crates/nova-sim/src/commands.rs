//! Player command handlers: fire an interceptor, upgrade a tower.
//!
//! Both are pure transitions. Invalid input is a silent no-op: the caller
//! gets the same world back and can tell nothing happened by the absence
//! of events.

use log::debug;

use nova_core::components::{Interceptor, Tower};
use nova_core::constants::*;
use nova_core::enums::GameStatus;
use nova_core::events::GameEvent;
use nova_core::state::WorldSnapshot;
use nova_core::types::{EntityId, Point};

/// Launch an interceptor at `point` from the nearest tower that is active
/// and has ammo. Ties go to the earlier tower.
pub fn fire_at(snapshot: &WorldSnapshot, point: Point) -> (WorldSnapshot, Vec<GameEvent>) {
    let mut state = snapshot.clone();
    if state.status != GameStatus::Playing {
        return (state, Vec::new());
    }

    let Some(index) = nearest_armed_tower(&state.towers, point) else {
        debug!("fire at ({:.1}, {:.1}) ignored: no armed tower", point.x, point.y);
        return (state, Vec::new());
    };

    let tower = &mut state.towers[index];
    tower.ammo -= 1;
    let (tower_id, origin) = (tower.id, tower.position());
    let speed = BASE_MISSILE_SPEED * tower.speed_multiplier;
    let explosion_radius = BASE_EXPLOSION_RADIUS * tower.explosion_multiplier;

    let id = state.allocate_id();
    state.interceptors.push(Interceptor {
        id,
        tower: tower_id,
        start_x: origin.x,
        start_y: origin.y,
        x: origin.x,
        y: origin.y,
        target_x: point.x,
        target_y: point.y,
        progress: 0.0,
        speed,
        explosion_radius,
    });

    let events = vec![GameEvent::Launched {
        interceptor: id,
        tower: tower_id,
        x: origin.x,
        y: origin.y,
        target_x: point.x,
        target_y: point.y,
    }];
    (state, events)
}

fn nearest_armed_tower(towers: &[Tower], point: Point) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, tower) in towers.iter().enumerate() {
        if !tower.can_fire() {
            continue;
        }
        let dist = tower.position().distance_to(&point);
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    best.map(|(i, _)| i)
}

/// Upgrade one tower (+30% ammo capacity, interceptor speed and blast
/// radius, refilled) and start the next level.
///
/// A destroyed tower is upgraded too but stays destroyed, so it still cannot
/// fire. An unknown id upgrades nothing; the level advances either way.
pub fn upgrade(snapshot: &WorldSnapshot, tower_id: EntityId) -> WorldSnapshot {
    let mut state = snapshot.clone();

    match state.towers.iter_mut().find(|t| t.id == tower_id) {
        Some(tower) => {
            if !tower.active {
                debug!("upgrading destroyed tower {tower_id}");
            }
            tower.max_ammo = grown_capacity(tower.max_ammo);
            tower.ammo = tower.max_ammo;
            tower.speed_multiplier *= UPGRADE_FACTOR;
            tower.explosion_multiplier *= UPGRADE_FACTOR;
            tower.level = tower.level.saturating_add(1);
        }
        None => debug!("upgrade of unknown tower {tower_id} has no effect"),
    }

    next_level(&mut state);
    state
}

/// `ceil(capacity × 1.3)`. The float-to-int cast saturates at `u64::MAX`.
fn grown_capacity(capacity: u64) -> u64 {
    (capacity as f64 * UPGRADE_FACTOR).ceil() as u64
}

/// Move to wave 1 of the next level with an empty sky.
fn next_level(state: &mut WorldSnapshot) {
    state.status = GameStatus::Playing;
    state.level = (state.level + 1).min(MAX_LEVELS);
    state.wave = 1;
    state.rockets_spawned_in_wave = 0;
    state.total_rockets_per_wave = ROCKETS_PER_WAVE_BASE + state.level * ROCKETS_PER_LEVEL_STEP;
    state.projectiles.clear();
    state.interceptors.clear();
    state.explosions.clear();
}
