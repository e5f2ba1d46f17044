//! Entity factories for setting up a fresh world.
//!
//! Creates the six cities, three towers and the starfield.

use rand::Rng;

use nova_core::components::{City, Tower};
use nova_core::constants::*;
use nova_core::enums::GameStatus;
use nova_core::state::{rockets_per_wave, WorldSnapshot};
use nova_core::types::Point;

/// Fresh world on the title screen: every installation active, full ammo,
/// score 0, level 1 wave 1.
pub fn create_initial_state<R: Rng + ?Sized>(rng: &mut R) -> WorldSnapshot {
    let mut state = WorldSnapshot {
        status: GameStatus::Start,
        level: 1,
        wave: 1,
        total_rockets_per_wave: rockets_per_wave(1, 1),
        ..Default::default()
    };
    spawn_cities(&mut state);
    spawn_towers(&mut state);
    state.stars = generate_starfield(rng, STAR_COUNT);
    state
}

/// Place the six cities along the ground.
fn spawn_cities(state: &mut WorldSnapshot) {
    for x in CITY_XS {
        let id = state.allocate_id();
        state.cities.push(City {
            id,
            x,
            y: GAME_HEIGHT - CITY_GROUND_OFFSET,
            active: true,
        });
    }
}

/// Place the left, middle and right towers with their starting ammo.
fn spawn_towers(state: &mut WorldSnapshot) {
    for (x, ammo) in TOWER_XS.into_iter().zip(TOWER_INITIAL_AMMO) {
        let id = state.allocate_id();
        state.towers.push(Tower {
            id,
            x,
            y: GAME_HEIGHT - TOWER_GROUND_OFFSET,
            active: true,
            ammo,
            max_ammo: ammo,
            level: 1,
            speed_multiplier: 1.0,
            explosion_multiplier: 1.0,
        });
    }
}

/// Uniformly scattered background stars.
pub fn generate_starfield<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Point> {
    (0..count)
        .map(|_| Point::new(rng.gen_range(0.0..GAME_WIDTH), rng.gen_range(0.0..GAME_HEIGHT)))
        .collect()
}
