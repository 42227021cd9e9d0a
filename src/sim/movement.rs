//! Velocity integration with fence clamping

use glam::IVec2;

use super::state::{Body, Fence, GameState};

/// Move a body by `vel`, then clamp it inside the fence.
///
/// The lower bound is applied first and the upper bound second, so a body
/// larger than the field ends up flush with the far edge.
pub fn step_body(body: &mut Body, vel: IVec2, fence: &Fence) {
    body.pos += vel;

    body.pos.x = body.pos.x.max(fence.minx);
    body.pos.y = body.pos.y.max(fence.miny);

    if body.pos.x + body.size.x > fence.maxx {
        body.pos.x = fence.maxx - body.size.x;
    }
    if body.pos.y + body.size.y > fence.maxy {
        body.pos.y = fence.maxy - body.size.y;
    }
}

/// Movement system: every entity with a velocity
pub fn movement(state: &mut GameState) {
    let fence = state.fence;
    step_body(&mut state.ball.body, state.ball.vel, &fence);
    step_body(&mut state.player1.body, state.player1.vel, &fence);
    step_body(&mut state.player2.body, state.player2.vel, &fence);
}
