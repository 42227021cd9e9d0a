//! wgpu sprite rendering module
//!
//! Everything is drawn as textured quads in window pixel coordinates.
//! `Frame` is built on the CPU each frame and handed to `RenderState::present`.

pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod sprite;
pub mod vertex;

pub use frame::Frame;
pub use pipeline::{RenderState, SurfaceErrorAction};
pub use sprite::{ImageData, Sprite, TextureId};
pub use vertex::{Color, colors};
