//! Pong entry point
//!
//! Opens the court window and runs one simulation tick per frame.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use sprite_pong::consts::*;
use sprite_pong::platform::{self, FrameControl, FrameHandler, InputEvent, WindowConfig};
use sprite_pong::renderer::shapes::net_dashes;
use sprite_pong::renderer::{Frame, RenderState, Sprite, colors};
use sprite_pong::sim::{GameState, Scored, TickInput, tick};

/// Game instance holding all state
struct Pong {
    state: GameState,
    ball: Sprite,
    paddle1: Sprite,
    paddle2: Sprite,
    draw_net: bool,
}

impl Pong {
    fn new(seed: u64) -> Self {
        let state = GameState::new(seed);
        let mut game = Self {
            ball: Sprite::from_color(colors::BLUE, state.ball.body.size),
            paddle1: Sprite::from_color(colors::WHITE, state.player1.body.size),
            paddle2: Sprite::from_color(colors::WHITE, state.player2.body.size),
            state,
            draw_net: true,
        };
        game.sync_sprites();
        game
    }

    /// Copy simulated positions onto the sprites
    fn sync_sprites(&mut self) {
        self.ball.set_position(self.state.ball.body.pos);
        self.paddle1.set_position(self.state.player1.body.pos);
        self.paddle2.set_position(self.state.player2.body.pos);
    }

    /// Build the frame: black court, optional net, paddles, ball
    fn draw(&self) -> Frame {
        let mut frame = Frame::new();
        frame.fill(colors::BLACK);
        if self.draw_net {
            for (from, to) in net_dashes(&self.state.fence) {
                frame.draw_line(from, to, colors::NET, NET_WIDTH);
            }
        }
        frame.blit(&self.paddle1);
        frame.blit(&self.paddle2);
        frame.blit(&self.ball);
        frame
    }
}

fn score_line(scored: &Scored) -> String {
    format!("Score: {} to {}", scored.scores.0, scored.scores.1)
}

impl FrameHandler for Pong {
    fn init(&mut self, _gfx: &mut RenderState) -> Result<()> {
        log::info!("Game initialized with seed: {}", self.state.seed);
        Ok(())
    }

    fn frame(&mut self, events: &[InputEvent], gfx: &mut RenderState) -> Result<FrameControl> {
        if events.iter().any(InputEvent::is_quit) {
            let (p1, p2) = self.state.scores();
            log::info!("Final score: {} to {}", p1, p2);
            return Ok(FrameControl::Exit);
        }

        let input = TickInput {
            keys: events.iter().filter_map(InputEvent::paddle_action).collect(),
        };
        if let Some(scored) = tick(&mut self.state, &input).scored {
            log::info!("{}", score_line(&scored));
        }
        self.sync_sprites();

        platform::present_or_recover(gfx, &self.draw())?;
        Ok(FrameControl::Continue)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Pong starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();

    let config = WindowConfig {
        title: PONG_TITLE.to_string(),
        width: COURT_WIDTH as u32,
        height: COURT_HEIGHT as u32,
        frame_delay: FRAME_DELAY,
    };

    platform::run(config, Pong::new(seed))?;
    log::info!("Pong exited");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;
    use sprite_pong::renderer::TextureId;

    #[test]
    fn test_sprites_follow_simulation() {
        let mut game = Pong::new(1);
        tick(&mut game.state, &TickInput::default());
        game.sync_sprites();

        assert_eq!(game.ball.position(), IVec2::new(387, 290));
        assert_eq!(game.paddle1.position(), IVec2::new(0, 250));
        assert_eq!(game.paddle2.position(), IVec2::new(780, 250));
        assert_eq!(game.ball.size(), IVec2::new(20, 20));
    }

    #[test]
    fn test_frame_draws_net_and_sprites() {
        let game = Pong::new(1);
        let frame = game.draw();

        assert_eq!(frame.clear, colors::BLACK);
        // Everything is solid color, so one batch on the white texture
        assert_eq!(frame.batches.len(), 1);
        assert_eq!(frame.batches[0].texture, TextureId::WHITE);
        // 60 net dashes + 3 sprites, 6 vertices each
        assert_eq!(frame.vertex_count(), (60 + 3) * 6);
    }

    #[test]
    fn test_goal_reports_score_line() {
        let mut game = Pong::new(1);
        game.state.ball.body.pos = IVec2::new(0, 100);

        let scored = tick(&mut game.state, &TickInput::default())
            .scored
            .expect("left exit scores");
        assert_eq!(score_line(&scored), "Score: 0 to 1");
    }

    #[test]
    fn test_frame_without_net() {
        let mut game = Pong::new(1);
        game.draw_net = false;
        assert_eq!(game.draw().vertex_count(), 3 * 6);
    }
}
