use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use crate::error::{Result, SnakeError};

pub const BOARD_WIDTH: i32 = 20;
pub const BOARD_HEIGHT: i32 = 15;
pub const CELL_SIZE: f32 = 30.0;
pub const TICK_INTERVAL_MS: u64 = 125;
pub const SCORE_INCREMENT: u32 = 10;
/// Largest accepted side, in cells. Food placement and the grid draw both
/// walk every cell, so the board has to stay small.
pub const MAX_BOARD_SIDE: i32 = 200;

/// Head first, laid out horizontally facing right.
pub const INITIAL_SNAKE: [Cell; 3] = [Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)];

/// Startup configuration. Read once; nothing here changes while playing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in cells
    pub width: i32,
    /// Board height in cells
    pub height: i32,
    /// Side of one cell in pixels (presentation only)
    pub cell_size: f32,
    pub tick_interval_ms: u64,
    pub score_increment: u32,
    /// Fixed seed for food placement; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cell_size: CELL_SIZE,
            tick_interval_ms: TICK_INTERVAL_MS,
            score_increment: SCORE_INCREMENT,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Reads a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| SnakeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&contents).map_err(|source| SnakeError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // The start layout needs x in 3..=5 and y == 5, plus one cell ahead.
        if self.width < 6 || self.height < 6 {
            return Err(SnakeError::InvalidConfig(format!(
                "board {}x{} is too small for the starting snake (minimum 6x6)",
                self.width, self.height
            )));
        }
        if self.width > MAX_BOARD_SIDE || self.height > MAX_BOARD_SIDE {
            return Err(SnakeError::InvalidConfig(format!(
                "board {}x{} is too large (maximum {}x{})",
                self.width, self.height, MAX_BOARD_SIDE, MAX_BOARD_SIDE
            )));
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(SnakeError::InvalidConfig(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(SnakeError::InvalidConfig(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.score_increment == 0 {
            return Err(SnakeError::InvalidConfig(
                "score_increment must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Window size in pixels.
    pub fn screen_size(&self) -> (f32, f32) {
        (
            self.width as f32 * self.cell_size,
            self.height as f32 * self.cell_size,
        )
    }
}
