//! Frame-stepped simulation tick
//!
//! One call advances the game by exactly one frame. System order is fixed:
//! player input, AI, movement, collision. Collision reads positions that
//! movement just wrote, and movement reads velocities the AI just wrote.

use super::ai::ai_control;
use super::collision::{Scored, collision};
use super::movement::movement;
use super::state::GameState;
use crate::consts::PADDLE_SPEED;

/// Keys the human paddle listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleKey {
    Up,
    Down,
}

/// A key edge for the human paddle, in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press(PaddleKey),
    Release(PaddleKey),
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Key edges polled since the previous tick
    pub keys: Vec<KeyAction>,
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub scored: Option<Scored>,
}

/// Apply key edges to the human paddle.
///
/// A press sets full speed in that direction, and releasing either key
/// stops the paddle, even if the other key is still held.
pub fn apply_keys(state: &mut GameState, keys: &[KeyAction]) {
    let paddle = &mut state.player1;
    for key in keys {
        paddle.vel.y = match key {
            KeyAction::Press(PaddleKey::Up) => -PADDLE_SPEED,
            KeyAction::Press(PaddleKey::Down) => PADDLE_SPEED,
            KeyAction::Release(_) => 0,
        };
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    apply_keys(state, &input.keys);
    ai_control(state);
    movement(state);
    let scored = collision(state);

    state.frame += 1;
    log::trace!(
        "frame {}: ball {:?} vel {:?}",
        state.frame,
        state.ball.body.pos,
        state.ball.vel
    );

    TickOutcome { scored }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Side;
    use glam::IVec2;

    fn press(key: PaddleKey) -> TickInput {
        TickInput {
            keys: vec![KeyAction::Press(key)],
        }
    }

    #[test]
    fn test_keys_drive_player_paddle() {
        let mut state = GameState::new(5);

        tick(&mut state, &press(PaddleKey::Up));
        assert_eq!(state.player1.vel.y, -3);
        assert_eq!(state.player1.body.pos.y, 247);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.player1.body.pos.y, 244);

        let release = TickInput {
            keys: vec![KeyAction::Release(PaddleKey::Up)],
        };
        tick(&mut state, &release);
        assert_eq!(state.player1.vel.y, 0);
        assert_eq!(state.player1.body.pos.y, 244);

        tick(&mut state, &press(PaddleKey::Down));
        assert_eq!(state.player1.body.pos.y, 247);
    }

    #[test]
    fn test_last_key_edge_wins() {
        let mut state = GameState::new(5);
        let input = TickInput {
            keys: vec![
                KeyAction::Press(PaddleKey::Up),
                KeyAction::Press(PaddleKey::Down),
                KeyAction::Release(PaddleKey::Up),
            ],
        };
        apply_keys(&mut state, &input.keys);
        assert_eq!(state.player1.vel.y, 0);
    }

    #[test]
    fn test_ball_travels_left_until_scoring() {
        // Ball starts at (390, 290) heading left with no vertical speed.
        let mut state = GameState::new(11);
        // Park the left paddle above the ball's path
        state.player1.body.pos.y = 0;
        let input = TickInput::default();

        let mut expected_x = 390;
        while expected_x > 0 {
            let outcome = tick(&mut state, &input);
            expected_x = (expected_x - 3).max(0);
            if expected_x > 0 {
                assert_eq!(outcome.scored, None);
                assert_eq!(state.ball.body.pos.x, expected_x);
                assert_eq!(state.ball.body.pos.y, 290);
            } else {
                // Clamped at x = 0 touches the goal line in the same frame.
                let scored = outcome.scored.expect("ball reached the left goal");
                assert_eq!(scored.winner, Side::Right);
            }
        }
        assert_eq!(state.frame, 130);
    }

    #[test]
    fn test_movement_clamps_ball_at_left_edge() {
        let mut state = GameState::new(11);
        state.ball.body.pos = IVec2::new(2, 100);

        crate::sim::movement::movement(&mut state);
        assert_eq!(state.ball.body.pos.x, 0);
    }

    #[test]
    fn test_center_hit_on_left_paddle() {
        let mut state = GameState::new(8);
        // One frame of movement puts the ball at x = 10, dead-center on paddle 1.
        state.ball.body.pos = IVec2::new(13, 290);
        state.ball.vel = IVec2::new(-3, 0);

        let outcome = tick(&mut state, &TickInput::default());

        assert_eq!(outcome.scored, None);
        assert_eq!(state.ball.body.pos, IVec2::new(10, 290));
        assert_eq!(state.ball.vel, IVec2::new(3, 0));
    }

    #[test]
    fn test_score_resets_ball() {
        let mut state = GameState::new(8);
        state.ball.body.pos = IVec2::new(2, 40);
        state.ball.vel = IVec2::new(-3, 1);

        let outcome = tick(&mut state, &TickInput::default());

        let scored = outcome.scored.expect("ball crossed the left goal line");
        assert_eq!(scored.scores, (0, 1));
        assert_eq!(state.player2.score, 1);
        assert_eq!(state.ball.body.pos, IVec2::new(390, 290));
        assert_eq!(state.ball.vel.x, -3);
        assert!((0..6).contains(&state.ball.vel.y));
    }

    #[test]
    fn test_ai_runs_before_movement() {
        let mut state = GameState::new(2);
        state.ball.vel = IVec2::new(3, 0);
        state.ball.body.pos = IVec2::new(500, 50);

        tick(&mut state, &TickInput::default());

        // AI picked -3 and movement applied it in the same frame
        assert_eq!(state.player2.vel.y, -3);
        assert_eq!(state.player2.body.pos.y, 247);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            press(PaddleKey::Down),
            TickInput::default(),
            TickInput {
                keys: vec![KeyAction::Release(PaddleKey::Down)],
            },
            press(PaddleKey::Up),
        ];

        for frame in 0..3000 {
            let input = &inputs[frame % inputs.len()];
            let a = tick(&mut state1, input);
            let b = tick(&mut state2, input);
            assert_eq!(a, b);
        }

        let json1 = serde_json::to_string(&state1).expect("serialize state1");
        let json2 = serde_json::to_string(&state2).expect("serialize state2");
        assert_eq!(json1, json2);
        assert!(state1.player1.score + state1.player2.score > 0);
    }
}
