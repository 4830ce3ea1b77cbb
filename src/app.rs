use std::time::Duration;

use ggez::event::EventHandler;
use ggez::input::keyboard::KeyInput;
use ggez::{graphics, Context, GameResult};
use log::info;

use crate::game::{GameConfig, GameState};
use crate::input::{Command, InputHandler};
use crate::render::{Renderer, BACKGROUND_COLOR};
use crate::ticker::Ticker;

/// Glues the rules to the window: the ticker drives `step`, keys go through
/// the input handler, and the renderer draws whatever the state holds.
pub struct SnakeApp {
    state: GameState,
    ticker: Ticker,
    input: InputHandler,
    renderer: Renderer,
}

impl SnakeApp {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            ticker: Ticker::new(config.tick_interval()),
            input: InputHandler::new(),
            renderer: Renderer::new(config.cell_size),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Runs every game step that came due during `dt`.
    pub fn advance(&mut self, dt: Duration) {
        for _ in 0..self.ticker.advance(dt) {
            self.state.step();
        }
    }

    /// Returns false when the command asks to leave the game.
    pub fn handle_command(&mut self, command: Command) -> bool {
        if command == Command::Quit {
            return false;
        }
        if self.input.apply(command, &mut self.state) {
            self.ticker.reset();
        }
        true
    }
}

impl EventHandler for SnakeApp {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        self.advance(ctx.time.delta());
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, BACKGROUND_COLOR);
        self.renderer.draw(ctx, &mut canvas, &self.state)?;
        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeat: bool) -> GameResult {
        if let Some(keycode) = input.keycode {
            if let Some(command) = self.input.map_key(keycode, repeat) {
                if !self.handle_command(command) {
                    ctx.request_quit();
                }
            }
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> GameResult<bool> {
        info!("closing, score {}", self.state.score());
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Direction};

    fn app() -> SnakeApp {
        SnakeApp::new(&GameConfig {
            seed: Some(1),
            ..Default::default()
        })
    }

    #[test]
    fn steps_follow_the_clock() {
        let mut app = app();
        app.advance(Duration::from_millis(100));
        assert_eq!(app.state().head(), Cell::new(5, 5));
        app.advance(Duration::from_millis(25));
        assert_eq!(app.state().head(), Cell::new(6, 5));
        app.advance(Duration::from_millis(250));
        assert_eq!(app.state().head(), Cell::new(8, 5));
    }

    #[test]
    fn paused_clock_does_not_move_snake() {
        let mut app = app();
        assert!(app.handle_command(Command::TogglePause));
        app.advance(Duration::from_millis(500));
        assert_eq!(app.state().head(), Cell::new(5, 5));
    }

    #[test]
    fn turn_applies_on_next_tick() {
        let mut app = app();
        app.handle_command(Command::Turn(Direction::Down));
        assert_eq!(app.state().head(), Cell::new(5, 5));
        app.advance(Duration::from_millis(125));
        assert_eq!(app.state().head(), Cell::new(5, 6));
    }

    #[test]
    fn quit_is_reported() {
        let mut app = app();
        assert!(!app.handle_command(Command::Quit));
    }
}
