//! Brick Breaker - A classic single-level brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bricks, collisions, input, update engine)
//! - `game_loop`: Fixed-rate driver threading the state through each tick
//! - `renderer`: Snapshot-to-vertex adapter and logging renderer
//! - `platform`: Host abstraction plus a headless implementation
//! - `config`: Data-driven constants (JSON)

pub mod config;
pub mod error;
pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{GameConfig, Pacing, TimestepMode};
pub use error::ConfigError;
pub use game_loop::{GameLoop, RunSummary};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (assumes ~60 Hz regardless of wall time)
    pub const SIM_DT: f32 = 0.016;
    /// Target loop period in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 16;
    /// Largest step accepted in measured-delta mode
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Pixels per tick, not time-scaled
    pub const PADDLE_STEP: f32 = 10.0;

    /// Ball defaults (square box)
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_START_VEL: (f32, f32) = (200.0, -200.0);

    /// Brick grid
    pub const BRICK_WIDTH: f32 = 80.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLS: u32 = 10;
    pub const BRICK_PADDING: f32 = 5.0;
    pub const BRICK_OFFSET_TOP: f32 = 50.0;
    pub const BRICK_SCORE: u64 = 10;
    /// Upper bound on `rows * cols` accepted from config
    pub const MAX_BRICKS: usize = 10_000;

    pub const STARTING_LIVES: u8 = 3;

    /// Paddle deflection: radians per unit of hit offset from paddle centre
    pub const PADDLE_DEFLECTION: f32 = 1.5;
}
