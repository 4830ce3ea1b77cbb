//! Grid Snake - the classic single-player snake on a fixed grid.
//!
//! - `game`: the rules, free of any windowing
//! - `ticker`: the fixed-timestep clock driving `GameState::step`
//! - `input`, `render`, `app`: ggez adapters around the rules

pub mod app;
pub mod error;
pub mod game;
pub mod input;
pub mod logger;
pub mod render;
pub mod ticker;

pub use error::{Result, SnakeError};
pub use game::{Cell, Direction, GameConfig, GameState, Outcome};
