//! Game configuration
//!
//! Every gameplay constant lives here so a host can load them from JSON.
//! `Default` reproduces the values in [`crate::consts`].

use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// How the driver picks the step handed to the update engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimestepMode {
    /// Always `sim_dt`, regardless of elapsed wall time
    #[default]
    Fixed,
    /// Measured wall time since the previous tick, capped at `max_frame_dt`
    Measured,
}

/// How the driver waits at the end of each iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Pacing {
    /// Sleep a full interval every tick; drift accumulates
    #[default]
    FixedSleep,
    /// Sleep until an absolute deadline that advances by one interval
    DriftCorrected,
}

impl TimestepMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimestepMode::Fixed => "fixed",
            TimestepMode::Measured => "measured",
        }
    }
}

impl Pacing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pacing::FixedSleep => "fixed_sleep",
            Pacing::DriftCorrected => "drift_corrected",
        }
    }
}

/// Gameplay and loop constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels moved per sampled tick
    pub paddle_step: f32,

    // === Ball ===
    pub ball_size: f32,
    /// Velocity after serve and after every lost life (px/s)
    pub ball_start_vel: (f32, f32),
    /// Bounce angle (radians) per unit of hit offset from paddle centre
    pub paddle_deflection: f32,

    // === Bricks ===
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_rows: u32,
    pub brick_cols: u32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_score: u64,

    pub starting_lives: u8,

    // === Loop ===
    /// Step used by the update engine in fixed mode (seconds)
    pub sim_dt: f32,
    /// Target loop period (milliseconds)
    pub tick_interval_ms: u64,
    pub timestep: TimestepMode,
    pub pacing: Pacing,
    /// Cap on measured steps, so a stall can't launch the ball through walls
    pub max_frame_dt: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step: PADDLE_STEP,

            ball_size: BALL_SIZE,
            ball_start_vel: BALL_START_VEL,
            paddle_deflection: PADDLE_DEFLECTION,

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_score: BRICK_SCORE,

            starting_lives: STARTING_LIVES,

            sim_dt: SIM_DT,
            tick_interval_ms: TICK_INTERVAL_MS,
            timestep: TimestepMode::Fixed,
            pacing: Pacing::FixedSleep,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the engine can't run with.
    ///
    /// A brick grid wider than the screen is accepted; the default grid is.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("sim_dt", self.sim_dt),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if !(self.paddle_deflection.is_finite() && self.paddle_deflection >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "paddle_deflection must be finite and not negative, got {}",
                self.paddle_deflection
            )));
        }
        if self.paddle_step < 0.0 || self.brick_padding < 0.0 {
            return Err(ConfigError::Invalid(
                "paddle_step and brick_padding must not be negative".into(),
            ));
        }
        if self.paddle_width > self.screen_width || self.paddle_height > self.screen_height {
            return Err(ConfigError::Invalid("paddle does not fit the screen".into()));
        }
        if self.ball_size > self.screen_width || self.ball_size > self.screen_height {
            return Err(ConfigError::Invalid("ball does not fit the screen".into()));
        }
        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(ConfigError::Invalid(
                "brick grid needs at least one row and one column".into(),
            ));
        }
        if self.brick_count().is_none_or(|count| count > MAX_BRICKS) {
            return Err(ConfigError::Invalid(format!(
                "brick grid {}x{} exceeds {MAX_BRICKS} bricks",
                self.brick_rows, self.brick_cols
            )));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Invalid("starting_lives must be at least 1".into()));
        }
        Ok(())
    }

    /// Bricks in the grid, `None` if `rows * cols` overflows
    #[inline]
    pub fn brick_count(&self) -> Option<usize> {
        (self.brick_rows as usize).checked_mul(self.brick_cols as usize)
    }

    /// Rightmost legal paddle position (left edge)
    #[inline]
    pub fn paddle_max_x(&self) -> f32 {
        self.screen_width - self.paddle_width
    }

    /// Y of the paddle's top edge
    #[inline]
    pub fn paddle_top(&self) -> f32 {
        self.screen_height - self.paddle_height
    }

    /// Ball spawn point: screen centre (top-left of the ball box)
    #[inline]
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    #[inline]
    pub fn ball_start_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_start_vel.0, self.ball_start_vel.1)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
