//! Paddle input sampling
//!
//! Input is level-triggered: each tick asks whether a control is held right
//! now. There is no debouncing and no press/release history.

use super::state::GameState;
use crate::config::GameConfig;

/// Logical paddle controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    MoveLeft,
    MoveRight,
}

/// Anything that can answer "is this control held right now?"
pub trait InputSource {
    fn is_active(&self, control: Control) -> bool;

    /// Read-only look at the snapshot that was just presented.
    ///
    /// Window hosts ignore it. Hosts that synthesise input (autopilot,
    /// scripted runs) use it to decide what is held on the next tick.
    fn observe(&mut self, _state: &GameState) {}
}

/// Plain held-key snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    pub const NONE: Self = Self {
        left: false,
        right: false,
    };
    pub const LEFT: Self = Self {
        left: true,
        right: false,
    };
    pub const RIGHT: Self = Self {
        left: false,
        right: true,
    };
}

impl InputSource for KeyState {
    fn is_active(&self, control: Control) -> bool {
        match control {
            Control::MoveLeft => self.left,
            Control::MoveRight => self.right,
        }
    }
}

/// Move the paddle one fixed step according to the held controls.
///
/// Left wins when both are held. The step is per tick, not time-scaled,
/// and the result is clamped to `[0, screen_width - paddle_width]`.
pub fn sample_input<I: InputSource + ?Sized>(
    input: &I,
    mut state: GameState,
    config: &GameConfig,
) -> GameState {
    let max_x = config.screen_width - state.paddle.width;
    if input.is_active(Control::MoveLeft) {
        state.paddle.x = (state.paddle.x - config.paddle_step).max(0.0);
    } else if input.is_active(Control::MoveRight) {
        state.paddle.x = (state.paddle.x + config.paddle_step).min(max_x);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(x: f32) -> (GameState, GameConfig) {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.paddle.x = x;
        (state, config)
    }

    #[test]
    fn test_step_left_and_right() {
        let (state, config) = state_at(350.0);
        let left = sample_input(&KeyState::LEFT, state.clone(), &config);
        assert_eq!(left.paddle.x, 340.0);
        let right = sample_input(&KeyState::RIGHT, state, &config);
        assert_eq!(right.paddle.x, 360.0);
    }

    #[test]
    fn test_no_input_is_identity() {
        let (state, config) = state_at(123.0);
        let next = sample_input(&KeyState::NONE, state.clone(), &config);
        assert_eq!(next, state);
    }

    #[test]
    fn test_left_wins_when_both_held() {
        let (state, config) = state_at(350.0);
        let both = KeyState {
            left: true,
            right: true,
        };
        assert_eq!(sample_input(&both, state, &config).paddle.x, 340.0);
    }

    #[test]
    fn test_clamped_at_edges() {
        let (state, config) = state_at(4.0);
        assert_eq!(sample_input(&KeyState::LEFT, state, &config).paddle.x, 0.0);

        let (state, config) = state_at(695.0);
        assert_eq!(sample_input(&KeyState::RIGHT, state, &config).paddle.x, 700.0);

        let (state, config) = state_at(700.0);
        assert_eq!(sample_input(&KeyState::RIGHT, state, &config).paddle.x, 700.0);
    }

    #[test]
    fn test_dyn_input_source() {
        struct AlwaysRight;
        impl InputSource for AlwaysRight {
            fn is_active(&self, control: Control) -> bool {
                control == Control::MoveRight
            }
        }
        let source: &dyn InputSource = &AlwaysRight;
        let (state, config) = state_at(0.0);
        assert_eq!(sample_input(source, state, &config).paddle.x, 10.0);
    }
}
