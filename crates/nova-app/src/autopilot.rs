//! Scripted player used by the headless binary.
//!
//! Shoots at the projectile closest to the ground, leading it by the
//! interceptor's flight time, and skips projectiles already covered by a
//! blast or an interceptor in flight. On the upgrade screen it upgrades the
//! weakest standing tower.

use glam::DVec2;

use nova_core::commands::PlayerCommand;
use nova_core::components::{Projectile, Tower};
use nova_core::constants::{BASE_EXPLOSION_RADIUS, BASE_MISSILE_SPEED};
use nova_core::enums::GameStatus;
use nova_core::state::WorldSnapshot;
use nova_core::types::{EntityId, Point};

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Minimum ticks between shots.
    pub cooldown: u64,
    last_shot: Option<u64>,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(12)
    }
}

impl Autopilot {
    pub fn new(cooldown: u64) -> Self {
        Self {
            cooldown,
            last_shot: None,
        }
    }

    /// Commands to issue before the next tick of `snapshot`.
    pub fn decide(&mut self, snapshot: &WorldSnapshot) -> Vec<PlayerCommand> {
        match snapshot.status {
            GameStatus::Start => vec![PlayerCommand::StartGame],
            GameStatus::Upgrade => weakest_tower(&snapshot.towers)
                .map(|tower_id| PlayerCommand::UpgradeTower { tower_id })
                .into_iter()
                .collect(),
            GameStatus::Playing => self.aim(snapshot).into_iter().collect(),
            GameStatus::Won | GameStatus::Lost => Vec::new(),
        }
    }

    fn aim(&mut self, snapshot: &WorldSnapshot) -> Option<PlayerCommand> {
        if let Some(last) = self.last_shot {
            if snapshot.tick < last + self.cooldown {
                return None;
            }
        }

        let tower = snapshot.towers.iter().filter(|t| t.can_fire()).max_by_key(|t| t.ammo)?;
        let target = snapshot
            .projectiles
            .iter()
            .filter(|p| !is_covered(snapshot, p))
            .max_by(|a, b| a.y.total_cmp(&b.y))?;

        self.last_shot = Some(snapshot.tick);
        Some(PlayerCommand::FireAt {
            target: lead(tower, target),
        })
    }
}

/// Where `projectile` will be when an interceptor from `tower` gets there.
fn lead(tower: &Tower, projectile: &Projectile) -> Point {
    let pos = DVec2::from(projectile.position());
    let dir = (DVec2::from(projectile.target_point()) - pos).normalize_or_zero();
    let flight = DVec2::from(tower.position()).distance(pos)
        / (BASE_MISSILE_SPEED * tower.speed_multiplier);
    Point::from(pos + dir * projectile.speed * flight)
}

/// A projectile is covered when a live blast or an interceptor aim point
/// lies within blast range of it.
fn is_covered(snapshot: &WorldSnapshot, projectile: &Projectile) -> bool {
    let pos = projectile.position();
    snapshot
        .explosions
        .iter()
        .any(|e| e.center().distance_to(&pos) < e.max_radius)
        || snapshot
            .interceptors
            .iter()
            .any(|i| i.target_point().distance_to(&pos) < BASE_EXPLOSION_RADIUS)
}

/// Lowest upgrade level among standing towers; earlier towers win ties.
fn weakest_tower(towers: &[Tower]) -> Option<EntityId> {
    towers
        .iter()
        .filter(|t| t.active)
        .min_by_key(|t| t.level)
        .or_else(|| towers.first())
        .map(|t| t.id)
}
