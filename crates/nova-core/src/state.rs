//! World snapshot: the complete game state, replaced wholesale every tick.

use serde::{Deserialize, Serialize};

use crate::components::*;
use crate::constants::*;
use crate::enums::{GameStatus, TargetRef};
use crate::types::{EntityId, Point};

/// Complete world state. Operations take a snapshot by reference and return
/// a new one; nothing mutates a published snapshot in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Never decreases.
    pub score: u64,
    pub status: GameStatus,
    pub projectiles: Vec<Projectile>,
    pub interceptors: Vec<Interceptor>,
    pub explosions: Vec<Explosion>,
    pub cities: Vec<City>,
    pub towers: Vec<Tower>,
    /// Decorative starfield, generated once at game start.
    pub stars: Vec<Point>,
    /// 1..=MAX_LEVELS.
    pub level: u32,
    /// 1..=WAVES_PER_LEVEL.
    pub wave: u32,
    pub rockets_spawned_in_wave: u32,
    pub total_rockets_per_wave: u32,
    /// Simulation steps taken while playing.
    pub tick: u64,
    /// Next entity id to hand out.
    pub next_id: u32,
}

impl WorldSnapshot {
    /// Hand out a fresh entity id.
    pub fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn tower(&self, id: EntityId) -> Option<&Tower> {
        self.towers.iter().find(|t| t.id == id)
    }

    pub fn city(&self, id: EntityId) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }

    /// Position of a target installation, if it exists.
    pub fn target_position(&self, target: TargetRef) -> Option<Point> {
        match target {
            TargetRef::City(id) => self.city(id).map(City::position),
            TargetRef::Tower(id) => self.tower(id).map(Tower::position),
        }
    }

    /// Every installation still standing, cities first then towers.
    pub fn active_targets(&self) -> Vec<TargetRef> {
        let cities = self
            .cities
            .iter()
            .filter(|c| c.active)
            .map(|c| TargetRef::City(c.id));
        let towers = self
            .towers
            .iter()
            .filter(|t| t.active)
            .map(|t| TargetRef::Tower(t.id));
        cities.chain(towers).collect()
    }

    pub fn active_city_count(&self) -> usize {
        self.cities.iter().filter(|c| c.active).count()
    }

    pub fn active_tower_count(&self) -> usize {
        self.towers.iter().filter(|t| t.active).count()
    }

    /// Unspent interceptors across active towers. Saturates instead of
    /// overflowing.
    pub fn total_ammo(&self) -> u64 {
        self.towers
            .iter()
            .filter(|t| t.active)
            .fold(0u64, |sum, t| sum.saturating_add(t.ammo))
    }

    /// Whether the current wave's quota has spawned and nothing is in flight.
    pub fn wave_cleared(&self) -> bool {
        self.rockets_spawned_in_wave >= self.total_rockets_per_wave && self.projectiles.is_empty()
    }
}

/// Projectile quota of a wave: `5 + wave*2 + level*3`.
pub fn rockets_per_wave(level: u32, wave: u32) -> u32 {
    ROCKETS_PER_WAVE_BASE + wave * ROCKETS_PER_WAVE_STEP + level * ROCKETS_PER_LEVEL_STEP
}

/// Per-tick probability of spawning a projectile.
pub fn spawn_chance(level: u32, wave: u32) -> f64 {
    SPAWN_CHANCE_BASE + level as f64 * SPAWN_CHANCE_PER_LEVEL + wave as f64 * SPAWN_CHANCE_PER_WAVE
}

/// Speed bonus added to every projectile spawned at this level and wave.
pub fn enemy_speed_bonus(level: u32, wave: u32) -> f64 {
    level as f64 * ENEMY_SPEED_PER_LEVEL + wave as f64 * ENEMY_SPEED_PER_WAVE
}
