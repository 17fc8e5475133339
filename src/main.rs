//! Brick Breaker entry point
//!
//! Runs a windowless demo: the autopilot plays one game and
//! frames are reported through the log (`RUST_LOG=debug` to see them).
//!
//! Usage: `brick-breaker [config.json]`

use brick_breaker::GameConfig;
use brick_breaker::GameLoop;
use brick_breaker::platform::{Autopilot, HeadlessPlatform};
use brick_breaker::renderer::LogRenderer;

fn main() {
    /// Stop the demo after this many frames even if the game is still going
    const DEMO_FRAME_LIMIT: u64 = 60 * 60 * 10;
    /// Log a frame summary once per simulated second
    const LOG_EVERY: u64 = 60;

    env_logger::init();
    log::info!("Brick Breaker starting...");
    log::info!("Running headless; the autopilot is playing");

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let mut platform = HeadlessPlatform::new(Autopilot::new())
        .with_frame_limit(DEMO_FRAME_LIMIT)
        .quit_on_game_end(true);
    let mut renderer = LogRenderer::new(config.clone(), LOG_EVERY);

    let summary = GameLoop::new(config).run(&mut platform, &mut renderer);
    let state = &summary.final_state;

    println!(
        "{} after {} frames: score {}, lives {}, bricks left {}",
        state.phase.as_str(),
        summary.frames,
        state.score,
        state.lives,
        state.active_bricks().count()
    );
}
