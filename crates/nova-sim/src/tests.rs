//! Tests for the simulation step, command handlers and engine.

use proptest::prelude::*;
use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use nova_core::commands::PlayerCommand;
use nova_core::components::Projectile;
use nova_core::constants::*;
use nova_core::enums::{GameStatus, TargetRef};
use nova_core::events::GameEvent;
use nova_core::state::{rockets_per_wave, WorldSnapshot};
use nova_core::types::Point;

use crate::engine::{SimConfig, SimulationEngine};
use crate::{advance, create_initial_state, fire_at};

/// Rolls 0.0 on every draw: a spawn every tick, aimed at the first target.
fn always_spawn() -> StepRng {
    StepRng::new(0, 0)
}

/// Rolls just under 1.0 on every draw: never spawns.
fn never_spawn() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

fn playing(seed: u64) -> WorldSnapshot {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut state = create_initial_state(&mut rng);
    state.status = GameStatus::Playing;
    state
}

/// A projectile hovering `dy` units above the installation it targets.
fn incoming(state: &mut WorldSnapshot, target: TargetRef, dy: f64) {
    let pos = state.target_position(target).unwrap();
    let id = state.allocate_id();
    state.projectiles.push(Projectile {
        id,
        x: pos.x,
        y: pos.y - dy,
        target_x: pos.x,
        target_y: pos.y,
        target,
        speed: 0.5,
        progress: 0.0,
        initial_distance: pos.y,
    });
}

// ---- Phase gating ----

#[test]
fn test_advance_is_a_no_op_outside_play() {
    for status in [
        GameStatus::Start,
        GameStatus::Upgrade,
        GameStatus::Won,
        GameStatus::Lost,
    ] {
        let mut state = playing(1);
        state.status = status;
        let city = TargetRef::City(state.cities[0].id);
        incoming(&mut state, city, 1.0);

        let (next, events) = advance(&state, TICK_MS, &mut always_spawn());
        assert_eq!(next, state, "{status:?} should freeze the world");
        assert!(events.is_empty());
    }
}

#[test]
fn test_elapsed_time_does_not_scale_motion() {
    let mut state = playing(1);
    let city = TargetRef::City(state.cities[2].id);
    incoming(&mut state, city, 300.0);

    let (fast, _) = advance(&state, 1.0, &mut never_spawn());
    let (slow, _) = advance(&state, 250.0, &mut never_spawn());
    assert_eq!(fast, slow);
    assert_eq!(fast.projectiles[0].y, state.projectiles[0].y + 0.5);
    assert_eq!(fast.tick, state.tick + 1);
}

// ---- Wave progression ----

#[test]
fn test_first_wave_clears_into_second() {
    let mut state = playing(11);
    assert_eq!(state.total_rockets_per_wave, 10);

    // Ten ticks of guaranteed spawns fill the quota.
    let mut rng = always_spawn();
    for _ in 0..10 {
        state = advance(&state, TICK_MS, &mut rng).0;
    }
    assert_eq!(state.rockets_spawned_in_wave, 10);
    assert_eq!(state.projectiles.len(), 10);

    // Let every projectile land unopposed.
    let mut rng = never_spawn();
    let mut wave_events = Vec::new();
    for _ in 0..5_000 {
        let (next, events) = advance(&state, TICK_MS, &mut rng);
        state = next;
        wave_events.extend(events);
        if state.wave == 2 {
            break;
        }
    }

    assert_eq!(state.wave, 2);
    assert_eq!(state.rockets_spawned_in_wave, 0);
    assert_eq!(state.total_rockets_per_wave, 5 + 2 * 2 + 3);
    assert_eq!(state.score, 0);
    assert_eq!(state.status, GameStatus::Playing);
    // Every spawn aimed at the first city.
    assert!(!state.cities[0].active);
    assert_eq!(state.active_city_count(), 5);
    assert!(wave_events.contains(&GameEvent::WaveComplete { level: 1, wave: 1 }));
    assert_eq!(
        wave_events
            .iter()
            .filter(|e| matches!(e, GameEvent::Impacted { .. }))
            .count(),
        10
    );
    assert_eq!(
        wave_events
            .iter()
            .filter(|e| matches!(e, GameEvent::CityDestroyed { .. }))
            .count(),
        1
    );
}

#[test]
fn test_wave_end_refills_towers() {
    let mut state = playing(2);
    state.rockets_spawned_in_wave = state.total_rockets_per_wave;
    state.towers[0].ammo = 1;
    state.towers[1].ammo = 0;

    let (next, _) = advance(&state, TICK_MS, &mut never_spawn());
    assert_eq!(next.towers[0].ammo, 15);
    assert_eq!(next.towers[1].ammo, 20);
    assert_eq!(next.wave, 2);
}

#[test]
fn test_level_end_moves_to_upgrade_with_ammo_bonus() {
    let mut state = playing(4);
    state.wave = WAVES_PER_LEVEL;
    state.total_rockets_per_wave = rockets_per_wave(1, WAVES_PER_LEVEL);
    state.rockets_spawned_in_wave = state.total_rockets_per_wave;
    state.score = 500;
    state.towers[0].ammo = 2;
    state.towers[1].active = false;
    state.towers[2].ammo = 9;

    let (next, events) = advance(&state, TICK_MS, &mut never_spawn());

    // Towers are refilled before the bonus is counted.
    let expected_bonus = 5 * (15 + 15);
    assert_eq!(next.status, GameStatus::Upgrade);
    assert_eq!(next.score, 500 + expected_bonus);
    assert!(events.contains(&GameEvent::LevelComplete {
        level: 1,
        bonus: expected_bonus
    }));

    // Frozen until the player upgrades.
    let (after, events) = advance(&next, TICK_MS, &mut always_spawn());
    assert_eq!(after, next);
    assert!(events.is_empty());
}

#[test]
fn test_final_level_wins() {
    let mut state = playing(4);
    state.level = MAX_LEVELS;
    state.wave = WAVES_PER_LEVEL;
    state.rockets_spawned_in_wave = state.total_rockets_per_wave;

    let (next, events) = advance(&state, TICK_MS, &mut never_spawn());
    assert_eq!(next.status, GameStatus::Won);
    assert!(matches!(events.last(), Some(GameEvent::Victory { .. })));
}

#[test]
fn test_heavily_upgraded_tower_completes_levels() {
    let mut state = playing(4);
    let left = state.towers[0].id;
    let mut capacity = 15u64;
    for _ in 0..98 {
        state.status = GameStatus::Upgrade;
        state = crate::upgrade(&state, left);
        capacity = (capacity as f64 * UPGRADE_FACTOR).ceil() as u64;
    }
    assert_eq!(state.level, 99);
    assert_eq!(state.towers[0].level, 99);
    assert_eq!(state.towers[0].max_ammo, capacity);
    assert!(capacity > u64::from(u32::MAX));

    // Finish level 99 with the left tower nearly empty.
    state.wave = WAVES_PER_LEVEL;
    state.total_rockets_per_wave = rockets_per_wave(99, WAVES_PER_LEVEL);
    state.rockets_spawned_in_wave = state.total_rockets_per_wave;
    state.towers[0].ammo = 1;
    let (next, events) = advance(&state, TICK_MS, &mut never_spawn());

    let bonus = 5 * (capacity + 20 + 15);
    assert_eq!(next.status, GameStatus::Upgrade);
    assert_eq!(next.score, bonus);
    assert!(events.contains(&GameEvent::LevelComplete { level: 99, bonus }));

    // One more upgrade reaches the last level, which ends in victory.
    let mut last = crate::upgrade(&next, left);
    assert_eq!(last.level, MAX_LEVELS);
    assert!(last.towers[0].max_ammo > capacity);
    last.wave = WAVES_PER_LEVEL;
    last.rockets_spawned_in_wave = last.total_rockets_per_wave;
    let (won, _) = advance(&last, TICK_MS, &mut never_spawn());
    assert_eq!(won.status, GameStatus::Won);
    assert_eq!(won.score, bonus);
}

// ---- Loss ----

#[test]
fn test_destroying_every_tower_loses() {
    let mut state = playing(5);
    for i in 0..3 {
        let id = state.towers[i].id;
        incoming(&mut state, TargetRef::Tower(id), 1.0);
    }

    let (next, events) = advance(&state, TICK_MS, &mut never_spawn());
    assert_eq!(next.status, GameStatus::Lost);
    assert_eq!(next.active_city_count(), 6);
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::TowerDestroyed { .. }))
            .count(),
        3
    );
    assert_eq!(events.last(), Some(&GameEvent::Defeat { score: 0 }));
}

#[test]
fn test_losing_cities_alone_does_not_lose() {
    let mut state = playing(5);
    for i in 0..6 {
        let id = state.cities[i].id;
        incoming(&mut state, TargetRef::City(id), 1.0);
    }
    let (next, _) = advance(&state, TICK_MS, &mut never_spawn());
    assert_eq!(next.active_city_count(), 0);
    assert_eq!(next.status, GameStatus::Playing);
}

#[test]
fn test_loss_overrides_level_completion() {
    let mut state = playing(5);
    state.wave = WAVES_PER_LEVEL;
    state.rockets_spawned_in_wave = state.total_rockets_per_wave;
    for tower in &mut state.towers {
        tower.active = false;
    }
    let (next, _) = advance(&state, TICK_MS, &mut never_spawn());
    assert_eq!(next.status, GameStatus::Lost);
}

// ---- Interception ----

#[test]
fn test_interceptor_explosion_destroys_projectile() {
    let mut state = playing(6);
    let city = TargetRef::City(state.cities[3].id);
    incoming(&mut state, city, 400.0);
    // Slow enough to still be inside the blast when it goes off.
    state.projectiles[0].speed = 0.01;
    let aim = state.projectiles[0].position();

    let (mut state, events) = fire_at(&state, aim);
    assert!(matches!(events[..], [GameEvent::Launched { .. }]));

    let mut all_events = Vec::new();
    for _ in 0..200 {
        let (next, events) = advance(&state, TICK_MS, &mut never_spawn());
        state = next;
        all_events.extend(events);
        if state.projectiles.is_empty() {
            break;
        }
    }

    assert!(state.projectiles.is_empty());
    assert_eq!(state.score, POINTS_PER_ROCKET);
    assert!(state.cities[3].active);
    assert!(all_events
        .iter()
        .any(|e| matches!(e, GameEvent::Exploded { .. })));
    assert!(all_events
        .iter()
        .any(|e| matches!(e, GameEvent::Intercepted { points: 20, .. })));
}

#[test]
fn test_explosion_envelope_through_the_step() {
    let state = playing(7);
    let target = Point::new(400.0, 300.0);
    let (mut state, _) = fire_at(&state, target);
    let tower = state.towers[1].position();
    let bound = (tower.distance_to(&target) / BASE_MISSILE_SPEED).ceil() as usize;

    let mut ticks = 0;
    while state.explosions.is_empty() {
        state = advance(&state, TICK_MS, &mut never_spawn()).0;
        ticks += 1;
        assert!(ticks <= bound, "explosion took more than {bound} ticks");
    }

    let explosion = &state.explosions[0];
    assert_eq!(explosion.center(), target);
    assert_eq!(explosion.max_radius, BASE_EXPLOSION_RADIUS);
    // Spawned and advanced in the same tick.
    assert_eq!(explosion.timer, 1);

    let mut peak = 0.0_f64;
    while !state.explosions.is_empty() {
        let e = &state.explosions[0];
        assert!(e.timer < e.duration);
        if e.timer == EXPLOSION_DURATION / 2 {
            peak = e.radius;
        }
        state = advance(&state, TICK_MS, &mut never_spawn()).0;
    }
    assert!((peak - BASE_EXPLOSION_RADIUS).abs() < 1e-9);
}

#[test]
fn test_fire_with_no_armed_tower_changes_nothing() {
    let mut state = playing(8);
    for tower in &mut state.towers {
        tower.active = false;
    }
    let (next, events) = fire_at(&state, Point::new(100.0, 100.0));
    assert_eq!(next.interceptors.len(), state.interceptors.len());
    assert_eq!(next.total_ammo(), state.total_ammo());
    assert!(events.is_empty());
}

// ---- Engine ----

#[test]
fn test_engine_start_and_fire() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    assert_eq!(engine.status(), GameStatus::Start);

    // Firing on the title screen does nothing.
    engine.queue_command(PlayerCommand::FireAt {
        target: Point::new(300.0, 200.0),
    });
    let out = engine.tick(TICK_MS);
    assert!(out.snapshot.interceptors.is_empty());
    assert!(out.events.is_empty());

    engine.queue_commands([
        PlayerCommand::StartGame,
        PlayerCommand::FireAt {
            target: Point::new(300.0, 200.0),
        },
    ]);
    let out = engine.tick(TICK_MS);
    assert_eq!(out.snapshot.status, GameStatus::Playing);
    assert_eq!(out.snapshot.interceptors.len(), 1);
    assert_eq!(out.snapshot.towers[1].ammo, 19);
    assert!(matches!(out.events[0], GameEvent::Launched { .. }));

    // Events are handed out once.
    let out = engine.tick(TICK_MS);
    assert!(!out
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::Launched { .. })));
}

#[test]
fn test_engine_upgrade_only_from_upgrade_screen() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::StartGame);
    engine.tick(TICK_MS);
    let left = engine.snapshot().towers[0].id;

    engine.queue_command(PlayerCommand::UpgradeTower { tower_id: left });
    engine.tick(TICK_MS);
    assert_eq!(engine.snapshot().level, 1);
    assert_eq!(engine.snapshot().towers[0].level, 1);

    let mut state = engine.snapshot().clone();
    state.status = GameStatus::Upgrade;
    engine.load_snapshot(state);

    engine.queue_command(PlayerCommand::UpgradeTower { tower_id: left });
    let out = engine.tick(TICK_MS);
    let tower = &out.snapshot.towers[0];
    assert_eq!(tower.max_ammo, 20);
    assert_eq!(tower.ammo, 20);
    assert_eq!(tower.level, 2);
    assert_eq!(out.snapshot.level, 2);
    assert_eq!(out.snapshot.status, GameStatus::Playing);
}

#[test]
fn test_engine_reset_and_replay_after_loss() {
    let mut engine = SimulationEngine::new(SimConfig { seed: 9 });
    engine.queue_command(PlayerCommand::StartGame);
    engine.tick(TICK_MS);

    let mut state = engine.snapshot().clone();
    state.status = GameStatus::Lost;
    state.score = 880;
    engine.load_snapshot(state);

    engine.queue_command(PlayerCommand::StartGame);
    let out = engine.tick(TICK_MS);
    assert_eq!(out.snapshot.status, GameStatus::Playing);
    assert_eq!(out.snapshot.score, 0);

    engine.queue_command(PlayerCommand::ReturnToMenu);
    let out = engine.tick(TICK_MS);
    assert_eq!(out.snapshot.status, GameStatus::Start);
    assert_eq!(out.snapshot.level, 1);
    assert_eq!(out.snapshot.towers.len(), 3);
}

#[test]
fn test_return_to_menu_keeps_earlier_events() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::StartGame);
    engine.tick(TICK_MS);

    engine.queue_commands([
        PlayerCommand::FireAt {
            target: Point::new(400.0, 200.0),
        },
        PlayerCommand::ReturnToMenu,
    ]);
    let out = engine.tick(TICK_MS);
    assert_eq!(out.snapshot.status, GameStatus::Start);
    assert!(out.snapshot.interceptors.is_empty());
    assert!(matches!(out.events[..], [GameEvent::Launched { .. }]));
}

// ---- Determinism ----

fn scripted_run(seed: u64, ticks: u64) -> Vec<String> {
    let mut engine = SimulationEngine::new(SimConfig { seed });
    engine.queue_command(PlayerCommand::StartGame);
    let mut frames = Vec::new();
    for tick in 0..ticks {
        if tick % 40 == 0 {
            if let Some(p) = engine.snapshot().projectiles.first() {
                let target = p.position();
                engine.queue_command(PlayerCommand::FireAt { target });
            }
        }
        let out = engine.tick(TICK_MS);
        frames.push(serde_json::to_string(&out.snapshot).unwrap());
    }
    frames
}

#[test]
fn test_determinism_same_seed() {
    assert_eq!(scripted_run(12345, 1_500), scripted_run(12345, 1_500));
}

#[test]
fn test_determinism_different_seeds() {
    assert_ne!(scripted_run(111, 600), scripted_run(222, 600));
}

// ---- Invariants ----

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_invariants_hold_every_tick(
        seed in any::<u64>(),
        shots in prop::collection::vec((0.0..GAME_WIDTH, 0.0..GAME_HEIGHT, 0u64..1_200), 0..60),
    ) {
        let mut engine = SimulationEngine::new(SimConfig { seed });
        engine.queue_command(PlayerCommand::StartGame);
        let mut last_score = 0;

        for tick in 0..1_200u64 {
            for &(x, y, _) in shots.iter().filter(|s| s.2 == tick) {
                engine.queue_command(PlayerCommand::FireAt { target: Point::new(x, y) });
            }
            if engine.status() == GameStatus::Upgrade {
                let id = engine.snapshot().towers[0].id;
                engine.queue_command(PlayerCommand::UpgradeTower { tower_id: id });
            }

            let snap = engine.tick(TICK_MS).snapshot;
            prop_assert!(snap.score >= last_score);
            last_score = snap.score;
            prop_assert_eq!(snap.cities.len(), 6);
            prop_assert_eq!(snap.towers.len(), 3);
            prop_assert!((1..=MAX_LEVELS).contains(&snap.level));
            prop_assert!((1..=WAVES_PER_LEVEL).contains(&snap.wave));
            for tower in &snap.towers {
                prop_assert!(tower.ammo <= tower.max_ammo);
            }
            for explosion in &snap.explosions {
                prop_assert!(explosion.timer < explosion.duration);
            }
        }
    }
}
