//! Collision primitives for axis-aligned boxes
//!
//! Everything in the playfield is an AABB in screen space (y grows down).
//! Overlap tests are inclusive: touching edges count as contact.

use glam::Vec2;

use crate::config::GameConfig;

/// Axis-aligned bounding box (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Horizontal extents overlap (inclusive)
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.min.x <= other.max().x && other.min.x <= self.max().x
    }

    /// Vertical extents overlap (inclusive)
    #[inline]
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.min.y <= other.max().y && other.min.y <= self.max().y
    }

    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }
}

/// Which screen edge the ball crossed this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallHit {
    Left,
    Right,
    Top,
    /// Fell past the bottom edge: costs a life
    Bottom,
}

/// Check the ball against the screen edges.
///
/// First match wins, in the order left, right, top, bottom. A ball past two
/// edges at once (a corner) only reports the first one.
pub fn wall_hit(ball_pos: Vec2, ball_size: f32, config: &GameConfig) -> Option<WallHit> {
    if ball_pos.x < 0.0 {
        Some(WallHit::Left)
    } else if ball_pos.x > config.screen_width - ball_size {
        Some(WallHit::Right)
    } else if ball_pos.y < 0.0 {
        Some(WallHit::Top)
    } else if ball_pos.y > config.screen_height {
        Some(WallHit::Bottom)
    } else {
        None
    }
}

/// Ball's bottom edge has reached the paddle's top edge and the two
/// overlap horizontally.
///
/// There is no lower bound: a ball that already slipped below the paddle
/// top while still over it counts as a hit.
pub fn paddle_hit(ball: &Aabb, paddle: &Aabb) -> bool {
    ball.max().y >= paddle.min.y && ball.overlaps_x(paddle)
}

/// Velocity after striking the paddle.
///
/// Keeps the incoming speed and always sends the ball upward. The angle
/// from vertical is `(hit_pos - 0.5) * deflection`, where `hit_pos` is the
/// ball centre's position across the paddle: straight up at the centre,
/// ±0.75 rad at the edges with the default factor of 1.5.
pub fn paddle_bounce(ball: &Aabb, paddle: &Aabb, vel: Vec2, deflection: f32) -> Vec2 {
    let ball_center_x = ball.min.x + ball.size.x / 2.0;
    let hit_pos = (ball_center_x - paddle.min.x) / paddle.size.x;
    let angle = (hit_pos - 0.5) * deflection;
    let speed = vel.length();
    Vec2::new(speed * angle.sin(), -speed * angle.cos())
}
