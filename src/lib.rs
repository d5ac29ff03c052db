//! Gap Runner - a side-scrolling avoider game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, scrolling, collisions, game state)
//! - `config`: Data-driven tuning with validation
//! - `game`: Host-facing facade with fixed-step accumulator
//! - `render`: Flat sprite instances for an external renderer

pub mod config;
pub mod error;
pub mod game;
pub mod render;
pub mod sim;

pub use config::Tuning;
pub use error::ConfigError;
pub use game::Game;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: f32 = 60.0;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Viewport dimensions
    pub const VIEW_WIDTH: i32 = 400;
    pub const VIEW_HEIGHT: i32 = 600;

    /// Player defaults - fixed screen column, sprite frame 18px at 2.4x
    pub const PLAYER_START_X: f32 = 200.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    pub const PLAYER_SIZE: f32 = 18.0 * 2.4;

    /// Downward acceleration (units/s²)
    pub const GRAVITY: f32 = 400.0;
    /// Most negative (upward) velocity the control impulse may reach
    pub const MIN_VELOCITY: f32 = -240.0;
    /// Velocity removed per tick while the control is held
    pub const VELOCITY_INCREASE: f32 = 70.0;
    /// Rotation (radians) per unit of vertical velocity
    pub const ROTATION_FACTOR: f32 = 0.003;
    /// Rotation band outside which the tilt is no longer recomputed
    pub const ROTATION_LIMIT: f32 = 1.0;

    /// Horizontal scroll per tick
    pub const SCROLL_STEP: i32 = 1;

    /// Ground strip
    pub const GROUND_Y: i32 = 500;
    pub const GROUND_TILE_WIDTH: i32 = 100;
    pub const GROUND_TILE_HEIGHT: i32 = 100;
    pub const GROUND_TILE_COUNT: u32 = 6;
    pub const GROUND_WRAP_X: i32 = -100;

    /// Obstacle columns
    pub const COLUMN_TILES: u32 = 10;
    pub const OBSTACLE_TILE_SIZE: i32 = 50;
    pub const GAP_SIZE: u32 = 3;
    pub const GAP_MIN_START: u32 = 2;
    pub const COLUMN_COUNT: u32 = 2;
    pub const COLUMN_SPAWN_X: i32 = 400;
    pub const COLUMN_SPACING: i32 = 250;
    pub const COLUMN_WRAP_X: i32 = -50;

    /// A column crossing this x scores one point
    pub const SCORE_LINE_X: i32 = 150;

    // === Tuning limits ===
    /// Upper bound on tile and column counts
    pub const MAX_COUNT: u32 = 1 << 10;
    /// Largest magnitude of any position, dimension or step.
    /// With `MAX_COUNT` this keeps every derived coordinate inside i32.
    pub const MAX_COORD: i32 = 1 << 20;
    /// Pending events kept when the host never drains them
    pub const MAX_PENDING_EVENTS: usize = 256;
}
