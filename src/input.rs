use ggez::input::keyboard::KeyCode;
use log::info;

use crate::game::{Direction, GameState};

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Restart,
    Quit,
}

/// Maps raw keys to commands and commands to `GameState` calls.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Auto-repeat only feeds turns; holding P must not flicker the pause.
    pub fn map_key(&self, keycode: KeyCode, repeat: bool) -> Option<Command> {
        let command = match keycode {
            KeyCode::Up | KeyCode::W => Command::Turn(Direction::Up),
            KeyCode::Down | KeyCode::S => Command::Turn(Direction::Down),
            KeyCode::Left | KeyCode::A => Command::Turn(Direction::Left),
            KeyCode::Right | KeyCode::D => Command::Turn(Direction::Right),
            KeyCode::P => Command::TogglePause,
            KeyCode::R => Command::Restart,
            KeyCode::Escape => Command::Quit,
            _ => return None,
        };
        match command {
            Command::Turn(_) => Some(command),
            _ if repeat => None,
            _ => Some(command),
        }
    }

    /// Applies a command. Restart is only honoured once the game has ended;
    /// everything else defers to the rules in `GameState`. Returns true when
    /// the state was restarted.
    pub fn apply(&self, command: Command, state: &mut GameState) -> bool {
        match command {
            Command::Turn(direction) => state.set_direction(direction),
            Command::TogglePause => state.toggle_pause(),
            Command::Restart if state.is_game_over() => {
                info!("restarting after score {}", state.score());
                state.restart();
                return true;
            }
            Command::Restart | Command::Quit => {}
        }
        false
    }
}
