//! Fixed timestep simulation tick
//!
//! Advances the ball, resolves walls, paddle and bricks, then settles the
//! phase. One pass per tick; nothing is iterated to convergence.

use super::bricks::all_cleared;
use super::collision::{WallHit, paddle_bounce, paddle_hit, wall_hit};
use super::state::{Ball, GamePhase, GameState};
use crate::config::GameConfig;

/// What happened during one tick (for logging and hosts, not gameplay)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub wall: Option<WallHit>,
    pub paddle_hit: bool,
    pub bricks_destroyed: u32,
    pub life_lost: bool,
    /// Phase changed from Playing to Lost or Won this tick
    pub phase_changed: bool,
}

/// Advance the game by one fixed `config.sim_dt` step
pub fn update(state: GameState, config: &GameConfig) -> GameState {
    update_with_dt(state, config, config.sim_dt)
}

/// Advance the game by a caller-chosen step
pub fn update_with_dt(state: GameState, config: &GameConfig, dt: f32) -> GameState {
    advance(state, config, dt).0
}

/// Advance the game and report what happened.
///
/// Lost and Won are absorbing: a terminal state comes back untouched.
pub fn advance(mut state: GameState, config: &GameConfig, dt: f32) -> (GameState, TickEvents) {
    let mut events = TickEvents::default();
    if state.is_terminal() {
        return (state, events);
    }

    state.ticks += 1;

    // Euler step
    state.ball.pos += state.ball.vel * dt;

    // Walls: first match only, position is never corrected
    events.wall = wall_hit(state.ball.pos, state.ball.size, config);
    match events.wall {
        Some(WallHit::Left | WallHit::Right) => state.ball.vel.x = -state.ball.vel.x,
        Some(WallHit::Top) => state.ball.vel.y = -state.ball.vel.y,
        Some(WallHit::Bottom) => {
            state.lives = state.lives.saturating_sub(1);
            events.life_lost = true;
            if state.lives == 0 {
                // Ball freezes where it fell
                state.phase = GamePhase::Lost;
                events.phase_changed = true;
                return (state, events);
            }
            state.ball = Ball::spawn(config);
        }
        None => {}
    }

    // Paddle: redirect by strike position, keep speed
    let ball_box = state.ball.bounds();
    let paddle_box = state.paddle.bounds(config);
    if paddle_hit(&ball_box, &paddle_box) {
        state.ball.vel = paddle_bounce(
            &ball_box,
            &paddle_box,
            state.ball.vel,
            config.paddle_deflection,
        );
        events.paddle_hit = true;
    }

    // Bricks: every overlapping brick counts and flips vy, no early exit
    for brick in state.bricks.iter_mut().filter(|b| b.active) {
        if brick.bounds().overlaps(&ball_box) {
            brick.active = false;
            state.score += config.brick_score;
            state.ball.vel.y = -state.ball.vel.y;
            events.bricks_destroyed += 1;
        }
    }

    if all_cleared(&state.bricks) {
        state.phase = GamePhase::Won;
        events.phase_changed = true;
    }

    (state, events)
}
