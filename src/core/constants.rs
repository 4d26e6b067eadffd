// Simulation cadence
pub const TICK_INTERVAL_MS: u64 = 16; // ~60 ticks per second
pub const MAX_FRAME_CATCHUP_MS: u64 = 100;

// Player (world units; the reference play field is a browser viewport)
pub const PLAYER_WIDTH: f64 = 180.0;
pub const PLAYER_HEIGHT: f64 = 180.0;
pub const PLAYER_X_FRACTION: f64 = 0.25;

// Physics, applied per tick
pub const GRAVITY: f64 = 0.05;
pub const FLAP_IMPULSE: f64 = -4.0;
pub const TERMINAL_VELOCITY: f64 = 5.0;

// Obstacles
pub const OBSTACLE_SPEED: f64 = 3.0;
pub const OBSTACLE_WIDTH: f64 = 600.0;
pub const GAP_HEIGHT: f64 = 300.0;
pub const GAP_MARGIN: f64 = 150.0;
pub const SPAWN_INTERVAL_MS: u64 = 2000;
pub const DESPAWN_X: f64 = -100.0;

// Collision leniency
pub const COLLISION_H_BUFFER: f64 = 200.0;
pub const COLLISION_V_BUFFER: f64 = 100.0;

// Default field when no geometry provider has reported yet
pub const DEFAULT_FIELD_WIDTH: f64 = 1920.0;
pub const DEFAULT_FIELD_HEIGHT: f64 = 1080.0;

// Terminal cell to world unit scaling
pub const UNITS_PER_COLUMN: f64 = 16.0;
pub const UNITS_PER_ROW: f64 = 36.0;
