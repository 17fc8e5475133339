//! Property tests for the update engine and input sampler

use brick_breaker::GameConfig;
use brick_breaker::sim::{
    GamePhase, GameState, KeyState, WallHit, active_count, advance, sample_input, update,
};
use glam::Vec2;
use proptest::prelude::*;

fn config() -> GameConfig {
    GameConfig::default()
}

prop_compose! {
    /// Playing state with the full field, ball anywhere around the screen
    fn playing_state()(
        x in -20.0f32..820.0,
        y in -20.0f32..620.0,
        vx in -400.0f32..400.0,
        vy in -400.0f32..400.0,
        paddle_x in 0.0f32..=700.0,
        lives in 1u8..=3,
        knocked_out in proptest::collection::vec(any::<bool>(), 50),
    ) -> GameState {
        let cfg = config();
        let mut state = GameState::new(&cfg);
        state.ball.pos = Vec2::new(x, y);
        state.ball.vel = Vec2::new(vx, vy);
        state.paddle.x = paddle_x;
        state.lives = lives;
        for (brick, out) in state.bricks.iter_mut().zip(knocked_out) {
            brick.active = !out;
        }
        // Keep at least one brick so the state is genuinely Playing
        state.bricks[0].active = true;
        state
    }
}

fn keys() -> impl Strategy<Value = KeyState> {
    (any::<bool>(), any::<bool>()).prop_map(|(left, right)| KeyState { left, right })
}

proptest! {
    #[test]
    fn terminal_states_are_absorbing(state in playing_state(), won in any::<bool>()) {
        let cfg = config();
        let mut terminal = state;
        terminal.phase = if won { GamePhase::Won } else { GamePhase::Lost };
        let once = update(terminal.clone(), &cfg);
        prop_assert_eq!(&once, &terminal);
        let twice = update(once, &cfg);
        prop_assert_eq!(twice, terminal);
    }

    #[test]
    fn lives_drop_only_on_bottom_exit(state in playing_state()) {
        let cfg = config();
        let before = state.lives;
        let integrated = state.ball.pos + state.ball.vel * cfg.sim_dt;
        let (next, events) = advance(state, &cfg, cfg.sim_dt);

        prop_assert!(next.lives <= before);
        if next.lives < before {
            prop_assert_eq!(before - next.lives, 1);
            prop_assert_eq!(events.wall, Some(WallHit::Bottom));
            prop_assert!(integrated.y > cfg.screen_height);
            prop_assert!(integrated.x >= 0.0 && integrated.x <= cfg.screen_width - cfg.ball_size);
            prop_assert!(integrated.y >= 0.0);
        } else {
            prop_assert_ne!(events.wall, Some(WallHit::Bottom));
        }
        prop_assert_eq!(next.is_game_over(), next.lives == 0);
    }

    #[test]
    fn score_tracks_destroyed_bricks(state in playing_state()) {
        let cfg = config();
        let active_before = active_count(&state.bricks);
        let score_before = state.score;
        let len_before = state.bricks.len();
        let was_active: Vec<bool> = state.bricks.iter().map(|b| b.active).collect();

        let next = update(state, &cfg);
        let destroyed = active_before - active_count(&next.bricks);

        prop_assert!(next.score >= score_before);
        prop_assert_eq!(next.score - score_before, destroyed as u64 * cfg.brick_score);
        prop_assert_eq!(next.bricks.len(), len_before);
        // Bricks never come back
        for (brick, active) in next.bricks.iter().zip(was_active) {
            prop_assert!(active || !brick.active);
        }
    }

    #[test]
    fn won_iff_field_cleared(state in playing_state()) {
        let cfg = config();
        let next = update(state, &cfg);
        if next.lives > 0 {
            prop_assert_eq!(next.is_game_won(), active_count(&next.bricks) == 0);
        }
        prop_assert!(!(next.is_game_won() && next.is_game_over()));
    }

    #[test]
    fn speed_survives_everything_but_a_reset(state in playing_state()) {
        let cfg = config();
        let speed = state.ball.speed();
        let (next, events) = advance(state, &cfg, cfg.sim_dt);
        if events.life_lost && !next.is_game_over() {
            prop_assert_eq!(next.ball.vel, cfg.ball_start_velocity());
        } else {
            prop_assert!((next.ball.speed() - speed).abs() <= speed * 1e-4 + 1e-3);
        }
    }

    #[test]
    fn paddle_bounce_always_goes_up(state in playing_state()) {
        let cfg = config();
        let (next, events) = advance(state, &cfg, cfg.sim_dt);
        if events.paddle_hit && events.bricks_destroyed == 0 && next.ball.speed() > 0.0 {
            prop_assert!(next.ball.vel.y <= 0.0);
        }
    }

    #[test]
    fn paddle_stays_on_screen(state in playing_state(), held in proptest::collection::vec(keys(), 1..200)) {
        let cfg = config();
        let mut state = state;
        for keys in held {
            state = sample_input(&keys, state, &cfg);
            prop_assert!(state.paddle.x >= 0.0);
            prop_assert!(state.paddle.x <= cfg.paddle_max_x());
        }
    }

    #[test]
    fn long_runs_keep_invariants(held in proptest::collection::vec(keys(), 1..600)) {
        let cfg = config();
        let mut state = GameState::new(&cfg);
        for keys in held {
            let lives = state.lives;
            let score = state.score;
            let was_terminal = state.is_terminal();
            let snapshot = state.clone();

            state = sample_input(&keys, state, &cfg);
            state = update(state, &cfg);

            prop_assert!(state.lives <= lives);
            prop_assert!(state.score >= score);
            prop_assert!(state.paddle.x >= 0.0 && state.paddle.x <= cfg.paddle_max_x());
            if was_terminal {
                prop_assert_eq!(state.phase, snapshot.phase);
                prop_assert_eq!(&state.ball, &snapshot.ball);
                prop_assert_eq!(state.score, snapshot.score);
            }
        }
    }
}
