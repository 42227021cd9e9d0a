//! Platform abstraction layer
//!
//! Handles the native window and event pump for:
//! - Window creation and GPU surface setup
//! - Input events, batched per frame
//! - Fixed inter-frame delay

pub mod input;
pub mod window;

pub use input::{InputEvent, Key, translate_window_event};
pub use window::{FrameControl, FrameHandler, WindowConfig, present_or_recover, run};
