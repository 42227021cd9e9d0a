//! Game state and core simulation types
//!
//! Entities are plain structs: one ball, two players, one fence. They are
//! created once in [`GameState::new`] and live for the whole game.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::*;

/// Axis-aligned bounding box edges, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Area {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Position + size of anything drawn as a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Body {
    /// Top-left corner
    pub pos: IVec2,
    pub size: IVec2,
}

impl Body {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    pub fn area(&self) -> Area {
        Area {
            left: self.pos.x,
            top: self.pos.y,
            right: self.pos.x + self.size.x,
            bottom: self.pos.y + self.size.y,
        }
    }

    pub fn center_y(&self) -> i32 {
        self.pos.y + self.size.y / 2
    }
}

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Left,
    Right,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ball {
    pub body: Body,
    /// Pixels per frame
    pub vel: IVec2,
}

impl Ball {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            body: Body::new(x, y, BALL_SIZE, BALL_SIZE),
            vel: IVec2::ZERO,
        }
    }
}

/// A paddle and the player behind it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub body: Body,
    /// Only `vel.y` is ever non-zero
    pub vel: IVec2,
    pub side: Side,
    /// Driven by the tracking AI instead of the keyboard
    pub ai: bool,
    pub score: u32,
}

impl Player {
    pub fn new(x: i32, y: i32, side: Side, ai: bool) -> Self {
        Self {
            body: Body::new(x, y, PADDLE_WIDTH, PADDLE_HEIGHT),
            vel: IVec2::ZERO,
            side,
            ai,
            score: 0,
        }
    }
}

/// Play field bounds every moving entity is kept inside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fence {
    pub minx: i32,
    pub miny: i32,
    pub maxx: i32,
    pub maxy: i32,
}

impl Fence {
    pub const fn new(minx: i32, miny: i32, maxx: i32, maxy: i32) -> Self {
        Self {
            minx,
            miny,
            maxx,
            maxy,
        }
    }

    pub fn center_x(&self) -> i32 {
        self.minx + (self.maxx - self.minx) / 2
    }

    pub fn center_y(&self) -> i32 {
        self.miny + (self.maxy - self.miny) / 2
    }

    /// Top-left position that centers a body of `size` in the field
    pub fn centered(&self, size: IVec2) -> IVec2 {
        IVec2::new(
            self.center_x() - size.x / 2,
            self.center_y() - size.y / 2,
        )
    }
}

/// The whole court
pub const COURT: Fence = Fence::new(0, 0, COURT_WIDTH, COURT_HEIGHT);

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Serve RNG, only drawn from on a score
    #[serde(skip)]
    pub rng: Pcg32,
    /// Frames simulated so far
    pub frame: u64,
    pub fence: Fence,
    pub ball: Ball,
    /// Left, keyboard-controlled
    pub player1: Player,
    /// Right, AI-controlled
    pub player2: Player,
}

impl GameState {
    /// Create a new game with the standard court layout
    pub fn new(seed: u64) -> Self {
        let fence = COURT;
        let mut ball = Ball::new(0, 0);
        ball.body.pos = fence.centered(ball.body.size);
        ball.vel = IVec2::new(BALL_SERVE_VX, 0);

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            frame: 0,
            fence,
            ball,
            player1: Player::new(fence.minx, PADDLE_START_Y, Side::Left, false),
            player2: Player::new(
                fence.maxx - PADDLE_WIDTH,
                PADDLE_START_Y,
                Side::Right,
                true,
            ),
        }
    }

    /// Current (player1, player2) scores
    pub fn scores(&self) -> (u32, u32) {
        (self.player1.score, self.player2.score)
    }
}
