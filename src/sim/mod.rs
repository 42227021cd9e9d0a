//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-stepped, integer pixel math only
//! - Seeded RNG only
//! - Fixed system order (input, AI, movement, collision)
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod movement;
pub mod state;
pub mod tick;

pub use ai::{ai_control, tracking_vy};
pub use collision::{Scored, collision, deflect_vy, overlaps};
pub use movement::{movement, step_body};
pub use state::{Area, Ball, Body, COURT, Fence, GameState, Player, Side};
pub use tick::{KeyAction, PaddleKey, TickInput, TickOutcome, apply_keys, tick};
