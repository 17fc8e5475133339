//! Brick field layout

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::config::GameConfig;

/// A destructible brick. Goes inactive once and is never restored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub active: bool,
}

impl Brick {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            active: true,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Lay out the fixed grid, row-major, every brick active.
///
/// The grid is centred horizontally from its nominal width (cells include
/// trailing padding). When that is wider than the screen the left offset
/// goes negative and the outer columns hang off the edges.
pub fn generate_bricks(config: &GameConfig) -> Vec<Brick> {
    let cell_w = config.brick_width + config.brick_padding;
    let cell_h = config.brick_height + config.brick_padding;
    let offset_left = (config.screen_width - config.brick_cols as f32 * cell_w) / 2.0;
    let size = Vec2::new(config.brick_width, config.brick_height);

    let mut bricks = Vec::with_capacity(config.brick_count().unwrap_or(0));
    for row in 0..config.brick_rows {
        for col in 0..config.brick_cols {
            let pos = Vec2::new(
                offset_left + col as f32 * cell_w,
                config.brick_offset_top + row as f32 * cell_h,
            );
            bricks.push(Brick::new(pos, size));
        }
    }
    bricks
}

/// Number of bricks still standing
pub fn active_count(bricks: &[Brick]) -> usize {
    bricks.iter().filter(|b| b.active).count()
}

/// True when no active bricks remain
pub fn all_cleared(bricks: &[Brick]) -> bool {
    !bricks.iter().any(|b| b.active)
}
