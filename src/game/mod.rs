//! Snake rules: movement, growth, collisions and food placement.
//!
//! Nothing in here touches the window, keyboard or clock, so the whole game
//! can be driven step by step from tests.

pub mod cell;
pub mod collision;
pub mod config;
pub mod direction;
pub mod food;
pub mod state;

pub use cell::Cell;
pub use collision::{detect_collision, Collision};
pub use config::GameConfig;
pub use direction::Direction;
pub use food::place_food;
pub use state::{GameState, Outcome};
