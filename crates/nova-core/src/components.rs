//! Entity records held by the world snapshot.
//!
//! Records are plain data. Game logic lives in the sim systems, apart from
//! a few derived accessors (positions, the explosion envelope).

use serde::{Deserialize, Serialize};

use crate::enums::TargetRef;
use crate::types::{EntityId, Point};

/// Enemy rocket falling toward a city or tower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    pub target_x: f64,
    pub target_y: f64,
    /// Installation this projectile was aimed at when it spawned.
    pub target: TargetRef,
    /// Units per tick.
    pub speed: f64,
    /// Travelled fraction of the spawn-to-target line (1.0 on arrival).
    pub progress: f64,
    /// Straight-line distance at spawn, used to derive `progress`.
    pub initial_distance: f64,
}

impl Projectile {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn target_point(&self) -> Point {
        Point::new(self.target_x, self.target_y)
    }

    pub fn distance_to_target(&self) -> f64 {
        self.position().distance_to(&self.target_point())
    }
}

/// Player missile launched from a tower toward a commanded point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interceptor {
    pub id: EntityId,
    /// Tower that launched this interceptor.
    pub tower: EntityId,
    pub start_x: f64,
    pub start_y: f64,
    pub x: f64,
    pub y: f64,
    pub target_x: f64,
    pub target_y: f64,
    pub progress: f64,
    /// Units per tick.
    pub speed: f64,
    /// Max radius of the explosion spawned on arrival.
    pub explosion_radius: f64,
}

impl Interceptor {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn start_point(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    pub fn target_point(&self) -> Point {
        Point::new(self.target_x, self.target_y)
    }
}

/// Growing-then-shrinking blast disc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub max_radius: f64,
    /// Ticks elapsed since detonation.
    pub timer: u32,
    /// Lifetime in ticks.
    pub duration: u32,
}

impl Explosion {
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Radius at `timer` on the triangular envelope: a linear ramp from 0 to
    /// `max_radius` over the first half of `duration`, back to 0 over the second.
    pub fn envelope(timer: u32, duration: u32, max_radius: f64) -> f64 {
        if duration == 0 {
            return 0.0;
        }
        let half = duration as f64 / 2.0;
        let t = timer as f64;
        let scale = if t < half { t / half } else { 1.0 - (t - half) / half };
        (scale * max_radius).clamp(0.0, max_radius)
    }
}

/// Defended installation without a weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    pub active: bool,
}

impl City {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Ammo-limited interceptor launcher. Also a ground target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    pub active: bool,
    pub ammo: u64,
    /// Grows ×1.3 per upgrade, so it outgrows `u32` within the level cap.
    pub max_ammo: u64,
    /// Upgrade level, starting at 1.
    pub level: u32,
    pub speed_multiplier: f64,
    pub explosion_multiplier: f64,
}

impl Tower {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether this tower can launch an interceptor right now.
    pub fn can_fire(&self) -> bool {
        self.active && self.ammo > 0
    }
}
