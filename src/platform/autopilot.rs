//! Demo-mode paddle AI
//!
//! Tracks the ball with a little lead and a slow oscillating offset so the
//! rebound angle varies instead of settling into a loop.

use crate::sim::{Control, GameState, InputSource, KeyState};

/// How far ahead (seconds) to predict the ball's x position
const LEAD_SECS: f32 = 0.25;
/// Peak offset from the ball centre, as a fraction of paddle width
const OFFSET_FRACTION: f32 = 0.3;

/// Level-triggered input that chases the ball
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    held: KeyState,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys the autopilot would hold for this snapshot
    pub fn decide(state: &GameState) -> KeyState {
        if state.is_terminal() {
            return KeyState::NONE;
        }

        let paddle = &state.paddle;
        let ball = &state.ball;

        // Lead the ball, plus a slow wobble
        let t = state.ticks as f32 * 0.01;
        let wobble = t.sin() * 0.7 + (t * 0.7).sin() * 0.3;
        let target = ball.pos.x + ball.size / 2.0
            + ball.vel.x * LEAD_SECS
            + wobble * paddle.width * OFFSET_FRACTION;

        let center = paddle.x + paddle.width / 2.0;
        // Small dead zone keeps it from jittering
        let dead_zone = paddle.width * 0.05;
        if center > target + dead_zone {
            KeyState::LEFT
        } else if center < target - dead_zone {
            KeyState::RIGHT
        } else {
            KeyState::NONE
        }
    }
}

impl InputSource for Autopilot {
    fn is_active(&self, control: Control) -> bool {
        self.held.is_active(control)
    }

    fn observe(&mut self, state: &GameState) {
        self.held = Self::decide(state);
    }
}
