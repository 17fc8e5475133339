//! Game loop driver
//!
//! ```text
//! Tick N:
//! ┌───────────────────────────────────────────────┐
//! │ 1. sample_input(platform, state)  -> state    │
//! │ 2. advance(state, dt)             -> state    │
//! │ 3. renderer.render(&state)                    │
//! │ 4. platform.swap_buffers()                    │
//! │ 5. platform.poll_events()                     │
//! │ 6. quit edge?  -> platform.request_close()    │
//! │ 7. pace to the tick interval                  │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! The loop owns the one `GameState` and moves it through each stage; the
//! renderer and platform only ever borrow a finished snapshot. The close
//! flag is checked at the top of each iteration, never mid-tick.

use std::time::{Duration, Instant};

use crate::config::{GameConfig, Pacing, TimestepMode};
use crate::platform::Platform;
use crate::renderer::Renderer;
use crate::sim::{GamePhase, GameState, TickEvents, advance, sample_input};

/// Result of a finished run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Loop iterations executed
    pub frames: u64,
    pub final_state: GameState,
}

/// Sleeps between iterations according to [`Pacing`]
#[derive(Debug)]
struct Pacer {
    mode: Pacing,
    interval: Duration,
    deadline: Instant,
}

impl Pacer {
    fn new(mode: Pacing, interval: Duration) -> Self {
        Self {
            mode,
            interval,
            deadline: Instant::now(),
        }
    }

    fn wait(&mut self) {
        if self.interval.is_zero() {
            return;
        }
        match self.mode {
            Pacing::FixedSleep => std::thread::sleep(self.interval),
            Pacing::DriftCorrected => {
                self.deadline += self.interval;
                let now = Instant::now();
                if let Some(remaining) = self.deadline.checked_duration_since(now) {
                    std::thread::sleep(remaining);
                } else if now.duration_since(self.deadline) > self.interval {
                    // More than a whole tick behind: drop the backlog
                    log::debug!(
                        "Fell {:?} behind schedule, resyncing",
                        now.duration_since(self.deadline)
                    );
                    self.deadline = now;
                }
            }
        }
    }
}

/// Fixed-rate driver for one game session
pub struct GameLoop {
    config: GameConfig,
    state: GameState,
}

impl GameLoop {
    /// New session with a fresh game
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(&config);
        Self { config, state }
    }

    /// Resume from an existing snapshot
    pub fn with_state(config: GameConfig, state: GameState) -> Self {
        Self { config, state }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run until the platform reports close. Returns the last snapshot.
    pub fn run<P, R>(self, platform: &mut P, renderer: &mut R) -> RunSummary
    where
        P: Platform,
        R: Renderer,
    {
        let Self { config, mut state } = self;

        log::info!(
            "Game loop starting (timestep: {}, pacing: {}, interval: {}ms)",
            config.timestep.as_str(),
            config.pacing.as_str(),
            config.tick_interval_ms
        );

        let mut pacer = Pacer::new(config.pacing, config.tick_interval());
        let mut last_tick = Instant::now();
        let mut frames = 0u64;

        while !platform.should_close() {
            let dt = match config.timestep {
                TimestepMode::Fixed => config.sim_dt,
                TimestepMode::Measured => {
                    let now = Instant::now();
                    let elapsed = now.duration_since(last_tick).as_secs_f32();
                    last_tick = now;
                    elapsed.min(config.max_frame_dt)
                }
            };

            state = sample_input(&*platform, state, &config);
            let (next, events) = advance(state, &config, dt);
            state = next;
            log_events(&state, &events);

            renderer.render(&state);
            platform.swap_buffers();
            platform.observe(&state);
            platform.poll_events();
            if platform.quit_pressed() {
                log::info!("Quit requested");
                platform.request_close();
            }

            frames += 1;
            pacer.wait();
        }

        log::info!(
            "Game loop closed after {} frames (score {}, lives {}, {})",
            frames,
            state.score,
            state.lives,
            state.phase.as_str()
        );

        RunSummary {
            frames,
            final_state: state,
        }
    }
}

fn log_events(state: &GameState, events: &TickEvents) {
    if events.bricks_destroyed > 0 {
        log::debug!(
            "Destroyed {} brick(s), score {}",
            events.bricks_destroyed,
            state.score
        );
    }
    if events.life_lost {
        log::debug!("Ball lost, {} lives remaining", state.lives);
    }
    if events.phase_changed {
        match state.phase {
            GamePhase::Lost => log::info!("Game over! Final score: {}", state.score),
            GamePhase::Won => log::info!("All bricks cleared! Final score: {}", state.score),
            GamePhase::Playing => {}
        }
    }
}
