//! Windowless renderer that reports snapshots through `log`

use super::Renderer;
use super::shapes;
use super::vertex::Vertex;
use crate::config::GameConfig;
use crate::sim::{GamePhase, GameState};

/// Builds each frame's geometry like a GPU renderer would, then logs a
/// summary every `every` frames and on phase changes.
#[derive(Debug)]
pub struct LogRenderer {
    game: GameConfig,
    every: u64,
    frames: u64,
    last_phase: Option<GamePhase>,
    /// Vertex count of the most recent frame
    last_vertex_count: usize,
    /// Size of the most recent frame's vertex data as uploaded to a GPU
    last_frame_bytes: usize,
}

impl LogRenderer {
    pub fn new(game: GameConfig, every: u64) -> Self {
        Self {
            game,
            every: every.max(1),
            frames: 0,
            last_phase: None,
            last_vertex_count: 0,
            last_frame_bytes: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_vertex_count(&self) -> usize {
        self.last_vertex_count
    }

    pub fn last_frame_bytes(&self) -> usize {
        self.last_frame_bytes
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, state: &GameState) {
        let vertices = shapes::scene(state, &self.game);
        self.last_vertex_count = vertices.len();
        self.last_frame_bytes = bytemuck::cast_slice::<Vertex, u8>(&vertices).len();

        let phase_changed = self.last_phase != Some(state.phase);
        if phase_changed || self.frames.is_multiple_of(self.every) {
            log::debug!(
                "frame {}: {} | score {} | lives {} | bricks {} | ball ({:.1}, {:.1}) | paddle {:.1} | {} bytes",
                self.frames,
                state.phase.as_str(),
                state.score,
                state.lives,
                state.active_bricks().count(),
                state.ball.pos.x,
                state.ball.pos.y,
                state.paddle.x,
                self.last_frame_bytes,
            );
        }
        if log::log_enabled!(log::Level::Trace) {
            if let Ok(json) = serde_json::to_string(state) {
                log::trace!("snapshot {}: {}", self.frames, json);
            }
        }

        self.last_phase = Some(state.phase);
        self.frames += 1;
    }
}
