//! Platform abstraction layer
//!
//! The game core only needs a few things from its host:
//! - Held-key queries for the paddle controls (via [`InputSource`])
//! - Buffer swap and event pumping, opaque to the core
//! - A quit-key edge and a way to ask the window to close
//!
//! Window and context creation stay with the host. The headless host here
//! drives the game without a window (native binary, tests).

pub mod autopilot;
pub mod headless;

pub use autopilot::Autopilot;
pub use headless::{HeadlessPlatform, ScriptedInput};

use crate::sim::InputSource;

/// Host window/event boundary seen by the game loop
pub trait Platform: InputSource {
    /// Present the frame that was just rendered
    fn swap_buffers(&mut self);

    /// Drain pending host events, refreshing held-key state
    fn poll_events(&mut self);

    /// Quit key went down since the last poll (edge, not level)
    fn quit_pressed(&mut self) -> bool;

    /// Ask the host to close; `should_close` reports it from then on
    fn request_close(&mut self);

    fn should_close(&self) -> bool;
}
