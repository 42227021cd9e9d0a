//! Window + frame loop
//!
//! Owns the winit event loop and window and wires them to the renderer.
//! Frames are paced by a fixed delay: the loop sleeps in `WaitUntil` between
//! frames and wakes early only to collect input into the next batch.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use super::input::{InputEvent, translate_window_event};
use crate::renderer::{RenderState, SurfaceErrorAction};

/// Window configuration
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub frame_delay: Duration,
}

/// Returned by a frame to keep going or stop the loop
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameControl {
    Continue,
    Exit,
}

/// A program driven by the frame loop
pub trait FrameHandler {
    /// Called once the window and GPU exist, before the first frame
    fn init(&mut self, gfx: &mut RenderState) -> Result<()>;

    /// Called once per frame with the events polled since the last one
    fn frame(&mut self, events: &[InputEvent], gfx: &mut RenderState) -> Result<FrameControl>;
}

/// Open the window and run frames until the handler exits or fails
pub fn run<H: FrameHandler>(config: WindowConfig, handler: H) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    let mut app = App::new(config, handler);

    event_loop
        .run_app(&mut app)
        .context("winit event loop terminated with error")?;

    match app.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct Active {
    window: Arc<Window>,
    gfx: RenderState,
}

struct App<H> {
    config: WindowConfig,
    handler: H,
    active: Option<Active>,
    pending: Vec<InputEvent>,
    next_frame: Instant,
    error: Option<anyhow::Error>,
}

impl<H: FrameHandler> App<H> {
    fn new(config: WindowConfig, handler: H) -> Self {
        Self {
            config,
            handler,
            active: None,
            pending: Vec::new(),
            next_frame: Instant::now(),
            error: None,
        }
    }

    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<Active> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(
                f64::from(self.config.width),
                f64::from(self.config.height),
            ))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        log::info!(
            "Opened window {:?} ({}x{})",
            self.config.title,
            self.config.width,
            self.config.height
        );

        let mut gfx = pollster::block_on(RenderState::new(
            window.clone(),
            (self.config.width, self.config.height),
        ))?;
        self.handler.init(&mut gfx)?;

        Ok(Active { window, gfx })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error = Some(err);
        event_loop.exit();
    }

    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let events = std::mem::take(&mut self.pending);

        match self.handler.frame(&events, &mut active.gfx) {
            Ok(FrameControl::Continue) => {}
            Ok(FrameControl::Exit) => {
                log::info!("Quit requested");
                event_loop.exit();
            }
            Err(err) => self.fail(event_loop, err),
        }
    }
}

impl<H: FrameHandler> ApplicationHandler for App<H> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.active.is_some() {
            return;
        }
        match self.open(event_loop) {
            Ok(active) => {
                active.window.request_redraw();
                self.active = Some(active);
                self.next_frame = Instant::now();
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::Resized(new_size) = &event {
            if let Some(active) = self.active.as_mut() {
                active.gfx.resize(new_size.width, new_size.height);
            }
        }

        if let Some(input) = translate_window_event(&event) {
            self.pending.push(input);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.error.is_some() || event_loop.exiting() {
            return;
        }

        let now = Instant::now();
        if now >= self.next_frame {
            self.run_frame(event_loop);
            self.next_frame = now + self.config.frame_delay;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

/// Present a frame, turning surface errors into a fatal error or a skipped frame
pub fn present_or_recover(gfx: &mut RenderState, frame: &crate::renderer::Frame) -> Result<()> {
    match gfx.present(frame) {
        Ok(()) => Ok(()),
        Err(err) => match gfx.handle_surface_error(&err) {
            SurfaceErrorAction::Fatal => Err(err).context("surface lost beyond recovery"),
            action => {
                log::warn!("Render error: {err:?} ({action:?})");
                Ok(())
            }
        },
    }
}
