//! Game state and core simulation types
//!
//! A `GameState` is one tick's complete snapshot. Stages take it by value
//! and return the next one; renderers only ever see `&GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bricks::{Brick, generate_bricks};
use super::collision::Aabb;
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Out of lives (game over)
    Lost,
    /// Every brick destroyed
    Won,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Playing => "Playing",
            GamePhase::Lost => "Lost",
            GamePhase::Won => "Won",
        }
    }

    /// Lost and Won are absorbing
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// The ball: a square box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Pixels per second
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    /// Ball at the spawn point with the serve velocity
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            pos: config.ball_spawn(),
            vel: config.ball_start_velocity(),
            size: config.ball_size,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.size))
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// The player's paddle, pinned to the bottom of the screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle centred horizontally
    pub fn centered(config: &GameConfig) -> Self {
        Self {
            x: (config.screen_width - config.paddle_width) / 2.0,
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    /// Paddle box; its top edge sits `height` above the screen bottom
    pub fn bounds(&self, config: &GameConfig) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, config.screen_height - self.height),
            Vec2::new(self.width, self.height),
        )
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub paddle: Paddle,
    pub ball: Ball,
    /// Layout order; length never changes during a game
    pub bricks: Vec<Brick>,
    pub lives: u8,
    pub score: u64,
    pub phase: GamePhase,
    /// Simulation ticks advanced while playing
    pub ticks: u64,
}

impl GameState {
    /// Fresh game: full brick field, centred paddle, ball served from centre
    pub fn new(config: &GameConfig) -> Self {
        Self::with_bricks(config, generate_bricks(config))
    }

    /// Fresh game over a custom brick list
    pub fn with_bricks(config: &GameConfig, bricks: Vec<Brick>) -> Self {
        Self {
            paddle: Paddle::centered(config),
            ball: Ball::spawn(config),
            bricks,
            lives: config.starting_lives,
            score: 0,
            phase: GamePhase::Playing,
            ticks: 0,
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::Lost
    }

    #[inline]
    pub fn is_game_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn active_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.active)
    }
}
