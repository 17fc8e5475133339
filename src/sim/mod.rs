//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep by default
//! - Stable iteration order (bricks in row-major layout order)
//! - Each stage takes the state by value and hands back the next one
//! - No rendering or platform dependencies

pub mod bricks;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use bricks::{Brick, active_count, all_cleared, generate_bricks};
pub use collision::{Aabb, WallHit, paddle_bounce, paddle_hit, wall_hit};
pub use input::{Control, InputSource, KeyState, sample_input};
pub use state::{Ball, GamePhase, GameState, Paddle};
pub use tick::{TickEvents, advance, update, update_with_dt};
