//! Windowless host
//!
//! Presents nothing; counts frames and simulates the quit key after a frame
//! limit or once the game has ended.

use super::Platform;
use crate::sim::{Control, GameState, InputSource, KeyState};

/// Replays a fixed list of held-key runs, one entry per presented frame
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    /// (keys held, number of frames)
    runs: Vec<(KeyState, u32)>,
    run: usize,
    frames_in_run: u32,
}

impl ScriptedInput {
    pub fn new(runs: Vec<(KeyState, u32)>) -> Self {
        Self {
            runs,
            run: 0,
            frames_in_run: 0,
        }
    }

    /// Keys held right now (nothing once the script runs out)
    pub fn current(&self) -> KeyState {
        self.runs
            .get(self.run)
            .map(|(keys, _)| *keys)
            .unwrap_or_default()
    }

    fn advance(&mut self) {
        let Some(&(_, frames)) = self.runs.get(self.run) else {
            return;
        };
        self.frames_in_run += 1;
        if self.frames_in_run >= frames {
            self.run += 1;
            self.frames_in_run = 0;
        }
    }
}

impl InputSource for ScriptedInput {
    fn is_active(&self, control: Control) -> bool {
        self.current().is_active(control)
    }

    fn observe(&mut self, _state: &GameState) {
        self.advance();
    }
}

/// Host with no window
#[derive(Debug)]
pub struct HeadlessPlatform<I> {
    input: I,
    /// Press quit after this many presented frames
    frame_limit: Option<u64>,
    /// Press quit once a Lost/Won snapshot has been presented
    quit_on_game_end: bool,
    frames_presented: u64,
    game_ended: bool,
    quit_pending: bool,
    close_requested: bool,
}

impl<I: InputSource> HeadlessPlatform<I> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            frame_limit: None,
            quit_on_game_end: false,
            frames_presented: 0,
            game_ended: false,
            quit_pending: false,
            close_requested: false,
        }
    }

    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    pub fn quit_on_game_end(mut self, enabled: bool) -> Self {
        self.quit_on_game_end = enabled;
        self
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn input(&self) -> &I {
        &self.input
    }
}

impl<I: InputSource> InputSource for HeadlessPlatform<I> {
    fn is_active(&self, control: Control) -> bool {
        self.input.is_active(control)
    }

    fn observe(&mut self, state: &GameState) {
        self.game_ended = state.is_terminal();
        self.input.observe(state);
    }
}

impl<I: InputSource> Platform for HeadlessPlatform<I> {
    fn swap_buffers(&mut self) {
        self.frames_presented += 1;
    }

    fn poll_events(&mut self) {
        let limit_hit = self
            .frame_limit
            .is_some_and(|limit| self.frames_presented >= limit);
        let ended = self.quit_on_game_end && self.game_ended;
        if (limit_hit || ended) && !self.close_requested {
            self.quit_pending = true;
        }
    }

    fn quit_pressed(&mut self) -> bool {
        std::mem::take(&mut self.quit_pending)
    }

    fn request_close(&mut self) {
        if !self.close_requested {
            log::debug!("Close requested after {} frames", self.frames_presented);
        }
        self.close_requested = true;
    }

    fn should_close(&self) -> bool {
        self.close_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::GamePhase;

    #[test]
    fn test_script_runs_in_order() {
        let state = GameState::new(&GameConfig::default());
        let mut script = ScriptedInput::new(vec![(KeyState::LEFT, 2), (KeyState::RIGHT, 1)]);
        assert!(script.is_active(Control::MoveLeft));
        script.observe(&state);
        assert!(script.is_active(Control::MoveLeft));
        script.observe(&state);
        assert!(script.is_active(Control::MoveRight));
        script.observe(&state);
        assert_eq!(script.current(), KeyState::NONE);
        // Exhausted scripts stay idle
        script.observe(&state);
        assert_eq!(script.current(), KeyState::NONE);
    }

    #[test]
    fn test_frame_limit_presses_quit_once() {
        let mut platform = HeadlessPlatform::new(KeyState::NONE).with_frame_limit(2);
        platform.swap_buffers();
        platform.poll_events();
        assert!(!platform.quit_pressed());

        platform.swap_buffers();
        platform.poll_events();
        assert!(platform.quit_pressed());
        // Edge, not level
        assert!(!platform.quit_pressed());

        assert!(!platform.should_close());
        platform.request_close();
        assert!(platform.should_close());
        assert_eq!(platform.frames_presented(), 2);
    }

    #[test]
    fn test_quit_on_game_end() {
        let mut state = GameState::new(&GameConfig::default());
        let mut platform = HeadlessPlatform::new(KeyState::NONE).quit_on_game_end(true);

        platform.observe(&state);
        platform.poll_events();
        assert!(!platform.quit_pressed());

        state.phase = GamePhase::Won;
        platform.observe(&state);
        platform.poll_events();
        assert!(platform.quit_pressed());
    }

    #[test]
    fn test_forwards_held_keys() {
        let platform = HeadlessPlatform::new(KeyState::RIGHT);
        assert!(platform.is_active(Control::MoveRight));
        assert!(!platform.is_active(Control::MoveLeft));
    }
}
