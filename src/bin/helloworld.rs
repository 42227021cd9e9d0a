//! Hello world: blit `hello.bmp` into a 640x480 window

use anyhow::Result;

use sprite_pong::Resources;
use sprite_pong::consts::*;
use sprite_pong::platform::{self, FrameControl, FrameHandler, InputEvent, WindowConfig};
use sprite_pong::renderer::{Frame, ImageData, RenderState, Sprite, colors};

struct Hello {
    image: ImageData,
    sprite: Option<Sprite>,
}

impl Hello {
    fn draw(&self) -> Frame {
        let mut frame = Frame::new();
        frame.fill(colors::BLACK);
        if let Some(sprite) = &self.sprite {
            frame.blit(sprite);
        }
        frame
    }
}

impl FrameHandler for Hello {
    fn init(&mut self, gfx: &mut RenderState) -> Result<()> {
        self.sprite = Some(gfx.sprite_from_pixels(&self.image));
        Ok(())
    }

    fn frame(&mut self, events: &[InputEvent], gfx: &mut RenderState) -> Result<FrameControl> {
        if events.iter().any(InputEvent::is_quit) {
            return Ok(FrameControl::Exit);
        }
        platform::present_or_recover(gfx, &self.draw())?;
        Ok(FrameControl::Continue)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve and decode before any window exists; a missing file is fatal here
    let resources = Resources::bundled();
    let path = resources.get_path("hello.bmp")?;
    let image = ImageData::load(&path)?;
    log::info!(
        "Loaded {} ({}x{})",
        path.display(),
        image.width,
        image.height
    );

    let config = WindowConfig {
        title: HELLO_TITLE.to_string(),
        width: HELLO_WIDTH,
        height: HELLO_HEIGHT,
        frame_delay: FRAME_DELAY,
    };
    platform::run(
        config,
        Hello {
            image,
            sprite: None,
        },
    )
}
