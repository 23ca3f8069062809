//! Behavior tuning parameters.

// --- Screen ---

pub const DEFAULT_SCREEN_WIDTH: f32 = 800.0;
pub const DEFAULT_SCREEN_HEIGHT: f32 = 600.0;

/// Distance beyond the screen edge at which an entity counts as off-screen (px).
pub const OFF_SCREEN_MARGIN: f32 = 100.0;

// --- Orbit ---

/// Default angular speed (degrees/second).
pub const DEFAULT_ORBIT_SPEED: f32 = 45.0;

/// Default seconds spent orbiting before an attack.
pub const DEFAULT_ORBIT_DURATION: f32 = 5.0;

/// Fraction of half the screen height used as the orbit ring radius.
pub const RETURN_ORBIT_FACTOR: f32 = 0.8;

/// Health fraction below which an enemy breaks off and retreats.
pub const RETREAT_HEALTH_THRESHOLD: f32 = 0.2;

// --- Attack ---

/// Default rush speed (px/s).
pub const DEFAULT_RUSH_SPEED: f32 = 300.0;

/// Suicide dive counts as impact below this distance to center (px).
pub const SUICIDE_IMPACT_DISTANCE: f32 = 20.0;

/// Single/paired rush arrival distance (px).
pub const RUSH_ARRIVAL_DISTANCE: f32 = 50.0;

/// Loopback rush arrival distance (px).
pub const LOOPBACK_ARRIVAL_DISTANCE: f32 = 30.0;

/// Any attack run is abandoned after this many seconds.
pub const ATTACK_TIMEOUT_SECS: f32 = 5.0;

// --- Retreat ---

/// Default retreat speed (px/s).
pub const DEFAULT_RETREAT_SPEED: f32 = 200.0;

/// Exit speed multiplier over the retreat speed.
pub const EXIT_SPEED_FACTOR: f32 = 1.5;

/// Returning enemies rejoin the orbit within this distance of the ring (px).
pub const ORBIT_REJOIN_TOLERANCE: f32 = 15.0;

/// Below this distance to center the outward direction is undefined (px).
pub const CENTER_EPSILON: f32 = 1.0;

// --- Hover ---

/// Default hover time (seconds).
pub const DEFAULT_HOVER_DURATION: f32 = 3.0;

/// Hover point sits this far above the screen center (px).
pub const HOVER_OFFSET: f32 = 100.0;

/// Exponential approach rate toward the hover point (1/s).
pub const HOVER_APPROACH_RATE: f32 = 4.0;

// --- Entry ---

/// Default entry path duration (seconds).
pub const DEFAULT_ENTRY_DURATION: f32 = 2.0;

/// Default spiral turns for spiral-in entry.
pub const DEFAULT_SPIRAL_TURNS: f32 = 1.0;

/// Default sweep for arc entry (degrees).
pub const DEFAULT_ARC_ANGLE: f32 = 180.0;

/// Outward bulge of the loop-entry path at mid-flight (px).
pub const LOOP_ENTRY_RADIUS: f32 = 60.0;

// --- Spawning ---

/// Default spawn ring radius (px from center).
pub const DEFAULT_SPAWN_RADIUS: f32 = 500.0;

/// Maximum random jitter applied to spawn angles (degrees).
pub const SPAWN_ANGLE_JITTER: f32 = 4.0;

/// Default enemy hit points.
pub const DEFAULT_ENEMY_HEALTH: f32 = 100.0;
