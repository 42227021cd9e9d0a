//! Sprite Pong - classic two-paddle Pong plus a hello-world sprite blit
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collision, AI, scoring)
//! - `renderer`: wgpu sprite/rect/line renderer
//! - `platform`: winit window, input batching and frame pacing
//! - `resources`: Named resource directory lookup

pub mod platform;
pub mod renderer;
pub mod resources;
pub mod sim;

pub use resources::Resources;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Delay between frames (the loop is frame-stepped, not time-stepped)
    pub const FRAME_DELAY: Duration = Duration::from_millis(10);

    /// Hello-world window
    pub const HELLO_TITLE: &str = "Hello World!";
    pub const HELLO_WIDTH: u32 = 640;
    pub const HELLO_HEIGHT: u32 = 480;

    /// Pong court (also the window size)
    pub const PONG_TITLE: &str = "The Pong Game";
    pub const COURT_WIDTH: i32 = 800;
    pub const COURT_HEIGHT: i32 = 600;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const PADDLE_START_Y: i32 = 250;
    /// Paddle speed in pixels per frame (player keys and AI alike)
    pub const PADDLE_SPEED: i32 = 3;

    /// Ball defaults
    pub const BALL_SIZE: i32 = 20;
    /// Horizontal serve speed; the serve always goes left
    pub const BALL_SERVE_VX: i32 = -3;
    /// Serve vy is drawn from `0..BALL_SERVE_VY_MAX`
    pub const BALL_SERVE_VY_MAX: i32 = 6;

    /// Paddle hit: half-height is split into this many steps
    pub const DEFLECTION_STEPS: i32 = 10;
    /// vy gained per step of distance from paddle center
    pub const DEFLECTION_PER_STEP: f64 = 0.7;

    /// Center net: one dash every `NET_SPACING`, each `NET_DASH` long
    pub const NET_SPACING: i32 = 10;
    pub const NET_DASH: i32 = 5;
    pub const NET_WIDTH: f32 = 1.0;
}
