//! Tracking AI for computer-controlled paddles
//!
//! Bang-bang control: the paddle only ever moves at full speed up, full
//! speed down, or not at all.

use super::state::{Ball, Fence, GameState, Player, Side};
use crate::consts::PADDLE_SPEED;

/// True if the ball is heading away from the goal `side` defends
fn moving_away(ball: &Ball, side: Side) -> bool {
    match side {
        Side::Right => ball.vel.x < 0,
        Side::Left => ball.vel.x > 0,
    }
}

/// Step toward `target` at full paddle speed, or hold when level
fn seek(current: i32, target: i32) -> i32 {
    match current.cmp(&target) {
        std::cmp::Ordering::Less => PADDLE_SPEED,
        std::cmp::Ordering::Greater => -PADDLE_SPEED,
        std::cmp::Ordering::Equal => 0,
    }
}

/// Desired vertical velocity for an AI paddle.
///
/// While the ball travels away, drift back to the middle of the court.
/// While it approaches, chase the ball center.
pub fn tracking_vy(paddle: &Player, ball: &Ball, fence: &Fence) -> i32 {
    let center_y = paddle.body.center_y();
    if moving_away(ball, paddle.side) {
        seek(center_y, fence.center_y())
    } else {
        seek(center_y, ball.body.center_y())
    }
}

/// AI system: sets `vel.y` on every AI-flagged player
pub fn ai_control(state: &mut GameState) {
    let GameState {
        ball,
        player1,
        player2,
        fence,
        ..
    } = state;

    for player in [player1, player2] {
        if player.ai {
            player.vel.y = tracking_vy(player, ball, fence);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::COURT;
    use glam::IVec2;
    use proptest::prelude::*;

    #[test]
    fn test_returns_to_center_when_ball_leaves() {
        let mut ball = Ball::new(390, 290);
        ball.vel = IVec2::new(-3, 0);

        let high = Player::new(780, 0, Side::Right, true);
        assert_eq!(tracking_vy(&high, &ball, &COURT), 3);

        let low = Player::new(780, 500, Side::Right, true);
        assert_eq!(tracking_vy(&low, &ball, &COURT), -3);

        let level = Player::new(780, 250, Side::Right, true);
        assert_eq!(tracking_vy(&level, &ball, &COURT), 0);
    }

    #[test]
    fn test_tracks_approaching_ball() {
        let paddle = Player::new(780, 250, Side::Right, true);

        let mut ball = Ball::new(500, 100);
        ball.vel = IVec2::new(3, 0);
        assert_eq!(tracking_vy(&paddle, &ball, &COURT), -3);

        ball.body.pos.y = 450;
        assert_eq!(tracking_vy(&paddle, &ball, &COURT), 3);

        ball.body.pos.y = 290;
        assert_eq!(tracking_vy(&paddle, &ball, &COURT), 0);
    }

    #[test]
    fn test_stationary_ball_counts_as_approaching() {
        let paddle = Player::new(780, 250, Side::Right, true);
        let ball = Ball::new(500, 100);
        assert_eq!(tracking_vy(&paddle, &ball, &COURT), -3);
    }

    #[test]
    fn test_left_side_ai_mirrors_direction() {
        let paddle = Player::new(0, 0, Side::Left, true);
        let mut ball = Ball::new(300, 500);

        // Ball heading right is moving away from a left paddle
        ball.vel = IVec2::new(3, 0);
        assert_eq!(tracking_vy(&paddle, &ball, &COURT), 3);

        ball.vel = IVec2::new(-3, 0);
        assert_eq!(tracking_vy(&paddle, &ball, &COURT), 3);
        ball.body.pos.y = 0;
        assert_eq!(tracking_vy(&paddle, &ball, &COURT), -3);
    }

    #[test]
    fn test_ai_control_skips_human_player() {
        let mut state = GameState::new(3);
        state.player1.vel.y = -3;
        state.ball.vel = IVec2::new(3, 0);
        state.ball.body.pos.y = 50;

        ai_control(&mut state);

        assert_eq!(state.player1.vel.y, -3);
        assert_eq!(state.player2.vel.y, -3);
    }

    proptest! {
        #[test]
        fn prop_ai_speed_is_bang_bang(
            py in 0i32..500,
            bx in 0i32..780,
            by in 0i32..580,
            vx in -6i32..6,
            left in any::<bool>(),
        ) {
            let side = if left { Side::Left } else { Side::Right };
            let paddle = Player::new(if left { 0 } else { 780 }, py, side, true);
            let mut ball = Ball::new(bx, by);
            ball.vel = IVec2::new(vx, 0);

            let vy = tracking_vy(&paddle, &ball, &COURT);
            prop_assert!([-3, 0, 3].contains(&vy));
        }
    }
}
