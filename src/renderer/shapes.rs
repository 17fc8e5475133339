//! Shape generation for 2D primitives
//!
//! All output is in screen pixels (origin top-left, y down); a GPU renderer
//! maps it to clip space.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::config::GameConfig;
use crate::sim::GameState;

/// Vertices per filled rectangle (two triangles)
pub const RECT_VERTICES: usize = 6;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; RECT_VERTICES] {
    let max = min + size;
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Build the whole frame: paddle, ball, then every active brick
pub fn scene(state: &GameState, config: &GameConfig) -> Vec<Vertex> {
    let bricks = state.active_bricks().count();
    let mut vertices = Vec::with_capacity((2 + bricks) * RECT_VERTICES);

    let paddle = state.paddle.bounds(config);
    vertices.extend(rect(paddle.min, paddle.size, colors::PADDLE));

    let ball = state.ball.bounds();
    vertices.extend(rect(ball.min, ball.size, colors::BALL));

    for brick in state.active_bricks() {
        vertices.extend(rect(brick.pos, brick.size, colors::BRICK));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), colors::BALL);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert!(xs.iter().all(|&x| x == 10.0 || x == 40.0));
        assert!(ys.iter().all(|&y| y == 20.0 || y == 60.0));
        assert!(verts.iter().all(|v| v.color == colors::BALL));
    }

    #[test]
    fn test_scene_layout() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        let verts = scene(&state, &config);
        assert_eq!(verts.len(), 52 * RECT_VERTICES);

        // Paddle first, at the bottom
        assert_eq!(verts[0], Vertex::new(350.0, 580.0, colors::PADDLE));
        assert_eq!(verts[5], Vertex::new(450.0, 600.0, colors::PADDLE));
        // Then the ball
        assert_eq!(verts[6], Vertex::new(400.0, 300.0, colors::BALL));
        assert_eq!(verts[12].color, colors::BRICK);

        // Inactive bricks are skipped
        state.bricks[0].active = false;
        state.bricks[1].active = false;
        assert_eq!(scene(&state, &config).len(), 50 * RECT_VERTICES);
    }
}
