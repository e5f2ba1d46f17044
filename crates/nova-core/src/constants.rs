//! Simulation constants and tuning parameters.

/// Nominal frame rate of the host loop (Hz). The simulation itself is
/// fixed-step: one `advance` call is one logical tick regardless of
/// elapsed wall-clock time.
pub const TICK_RATE: u32 = 60;

/// Milliseconds per tick at the nominal rate.
pub const TICK_MS: f64 = 1000.0 / TICK_RATE as f64;

// --- World bounds ---

/// World width in world units.
pub const GAME_WIDTH: f64 = 800.0;

/// World height in world units.
pub const GAME_HEIGHT: f64 = 600.0;

/// Number of decorative stars generated at game start.
pub const STAR_COUNT: usize = 100;

// --- Installations ---

/// Horizontal positions of the six cities.
pub const CITY_XS: [f64; 6] = [150.0, 250.0, 350.0, 450.0, 550.0, 650.0];

/// Cities sit this far above the bottom edge.
pub const CITY_GROUND_OFFSET: f64 = 30.0;

/// Horizontal positions of the three towers (left, middle, right).
pub const TOWER_XS: [f64; 3] = [50.0, 400.0, 750.0];

/// Towers sit this far above the bottom edge.
pub const TOWER_GROUND_OFFSET: f64 = 40.0;

/// Starting ammo per tower (left, middle, right).
pub const TOWER_INITIAL_AMMO: [u64; 3] = [15, 20, 15];

// --- Enemy projectiles ---

/// Minimum base speed of an enemy projectile (units/tick).
pub const ENEMY_MIN_SPEED: f64 = 0.25;

/// Maximum base speed of an enemy projectile (units/tick).
pub const ENEMY_MAX_SPEED: f64 = 0.75;

/// Extra projectile speed per level.
pub const ENEMY_SPEED_PER_LEVEL: f64 = 0.05;

/// Extra projectile speed per wave.
pub const ENEMY_SPEED_PER_WAVE: f64 = 0.02;

/// A projectile this close to its target clamps onto it instead of moving.
pub const ARRIVAL_EPSILON: f64 = 2.0;

/// A projectile this close to its target has impacted.
pub const IMPACT_RANGE: f64 = 5.0;

// --- Spawning ---

/// Base per-tick spawn probability.
pub const SPAWN_CHANCE_BASE: f64 = 0.01;

/// Spawn probability added per level.
pub const SPAWN_CHANCE_PER_LEVEL: f64 = 0.002;

/// Spawn probability added per wave.
pub const SPAWN_CHANCE_PER_WAVE: f64 = 0.005;

/// Projectile quota base for a wave.
pub const ROCKETS_PER_WAVE_BASE: u32 = 5;

/// Projectile quota added per wave number.
pub const ROCKETS_PER_WAVE_STEP: u32 = 2;

/// Projectile quota added per level.
pub const ROCKETS_PER_LEVEL_STEP: u32 = 3;

// --- Interceptors and explosions ---

/// Interceptor speed before tower multipliers (units/tick).
pub const BASE_MISSILE_SPEED: f64 = 5.0;

/// Explosion radius before tower multipliers (units).
pub const BASE_EXPLOSION_RADIUS: f64 = 35.0;

/// Explosion lifetime in ticks.
pub const EXPLOSION_DURATION: u32 = 60;

/// Extra reach of an explosion when testing projectile collisions.
pub const EXPLOSION_HIT_MARGIN: f64 = 2.0;

// --- Scoring ---

/// Points per projectile destroyed by an explosion.
pub const POINTS_PER_ROCKET: u64 = 20;

/// Bonus points per unspent interceptor at level end.
pub const POINTS_PER_REMAINING_AMMO: u64 = 5;

// --- Progression ---

/// Final level. Completing it wins the game.
pub const MAX_LEVELS: u32 = 100;

/// Waves per level.
pub const WAVES_PER_LEVEL: u32 = 10;

/// Multiplier applied to tower stats on upgrade.
pub const UPGRADE_FACTOR: f64 = 1.3;
