//! Ball collision response and scoring
//!
//! Runs once per frame after movement. Order inside a frame:
//! paddle bounce, wall bounce, then the goal-line check.

use glam::IVec2;
use rand::Rng;
use serde::Serialize;

use super::state::{Area, Ball, Body, Fence, GameState, Player, Side};
use crate::consts::*;

/// A point was scored this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scored {
    pub winner: Side,
    /// (player1, player2) after the increment
    pub scores: (u32, u32),
}

/// Strict AABB overlap; boxes that only share an edge do not overlap
pub fn overlaps(ball: Area, paddle: Area) -> bool {
    ball.left < paddle.right
        && ball.right > paddle.left
        && ball.top < paddle.bottom
        && ball.bottom > paddle.top
}

/// New vertical velocity after the ball hits `paddle`.
///
/// The farther from the paddle center the ball strikes, the steeper it
/// leaves. A dead-center hit (or a paddle too short to have steps) just
/// mirrors the incoming vy.
pub fn deflect_vy(ball_center_y: i32, paddle: &Body, vy: i32) -> i32 {
    let half_height = paddle.size.y / 2;
    let paddle_center_y = paddle.pos.y + half_height;
    let step = half_height / DEFLECTION_STEPS;

    if ball_center_y == paddle_center_y || step == 0 {
        return -vy;
    }

    let factor = (ball_center_y - paddle_center_y).abs() / step;
    let magnitude = (f64::from(factor) * DEFLECTION_PER_STEP).round_ties_even() as i32;
    if ball_center_y < paddle_center_y {
        -magnitude
    } else {
        magnitude
    }
}

/// Bounce off the first overlapping paddle. Returns true on a hit.
pub fn paddle_bounce(ball: &mut Ball, paddles: [&Player; 2]) -> bool {
    let ball_area = ball.body.area();
    let Some(paddle) = paddles
        .into_iter()
        .find(|p| overlaps(ball_area, p.body.area()))
    else {
        return false;
    };

    ball.vel.x = -ball.vel.x;
    ball.vel.y = deflect_vy(ball.body.center_y(), &paddle.body, ball.vel.y);
    true
}

/// Bounce off the top or bottom fence. Returns true on a hit.
pub fn wall_bounce(ball: &mut Ball, fence: &Fence) -> bool {
    let area = ball.body.area();
    if area.top <= fence.miny || area.bottom >= fence.maxy {
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Recenter the ball and serve it left with a random downward-ish vy
pub fn serve<R: Rng>(ball: &mut Ball, fence: &Fence, rng: &mut R) {
    ball.body.pos = fence.centered(ball.body.size);
    ball.vel = IVec2::new(BALL_SERVE_VX, rng.random_range(0..BALL_SERVE_VY_MAX));
}

/// Goal-line check. The left exit is tested first, so it wins a tie.
pub fn check_goal<R: Rng>(
    ball: &mut Ball,
    player1: &mut Player,
    player2: &mut Player,
    fence: &Fence,
    rng: &mut R,
) -> Option<Scored> {
    let area = ball.body.area();
    let winner = if area.left <= fence.minx {
        player2.score += 1;
        Side::Right
    } else if area.right >= fence.maxx {
        player1.score += 1;
        Side::Left
    } else {
        return None;
    };

    let scores = (player1.score, player2.score);
    serve(ball, fence, rng);
    Some(Scored { winner, scores })
}

/// Collision system over the whole game state
pub fn collision(state: &mut GameState) -> Option<Scored> {
    let GameState {
        ball,
        player1,
        player2,
        fence,
        rng,
        ..
    } = state;

    if paddle_bounce(ball, [&*player1, &*player2]) {
        log::trace!("paddle hit, ball vel now {:?}", ball.vel);
    }
    wall_bounce(ball, fence);
    check_goal(ball, player1, player2, fence, rng)
}
