//! Rendering module
//!
//! The game hands each finished snapshot to a [`Renderer`]. Nothing here
//! feeds back into gameplay.
//!
//! - `shapes`: snapshot to coloured triangles in pixel space
//! - `log_renderer`: windowless renderer that logs snapshots

pub mod log_renderer;
pub mod shapes;
pub mod vertex;

pub use log_renderer::LogRenderer;
pub use vertex::Vertex;

use crate::sim::GameState;

/// Consumer of read-only snapshots
pub trait Renderer {
    /// Clear and draw the whole frame for `state`
    fn render(&mut self, state: &GameState);
}
