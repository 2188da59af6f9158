//! Game tunables.
//!
//! A [GameConfig] covers the pixel geometry used for drawing and movement timing
//! (cell size, tile margin, speed) plus the round layout (food count and the
//! length of a freshly spawned snake). It deserializes from json with every
//! field optional, and [GameConfig::validate] checks it against a board before a
//! game is built.
use std::error::Error;

use serde::{Deserialize, Serialize};

use crate::board::{Board, CellIndex, CellNum, Dimensions};
use crate::food::FOOD_TARGET;
use crate::snake::{Snake, MIN_LENGTH};
use crate::types::{Direction, GameError};

/// Edge length of a cell in pixels
pub const CELL_SIZE: u32 = 20;
/// Inset of food and wall tiles inside their cell, in pixels
pub const CELL_MARGIN: u32 = 2;

/// Tunables for a game. The defaults are the classic game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Edge length of a cell in pixels, one automatic move happens per cell size of offset
    pub cell_size: u32,
    /// Inset of food and wall tiles inside their cell, in pixels
    pub cell_margin: u32,
    /// Number of pellets kept on the board
    pub food_count: usize,
    /// Pixels of sub-cell offset gained per tick
    pub speed: u32,
    /// Cells in the snake at spawn. The head sits on the board centre and the body
    /// trails to the east, so a new snake heads west
    pub initial_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            cell_margin: CELL_MARGIN,
            food_count: FOOD_TARGET,
            speed: 1,
            initial_length: MIN_LENGTH,
        }
    }
}

impl GameConfig {
    /// Loads a config from json, missing fields take their default
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: GameConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Checks the config makes sense on its own and on the given board
    pub fn validate<T: CellNum, D: Dimensions>(
        &self,
        board: &Board<T, D>,
    ) -> Result<(), GameError> {
        if self.cell_size == 0 {
            return Err(GameError::InvalidConfig(
                "cell_size must be positive".to_string(),
            ));
        }
        if self.cell_margin.saturating_mul(2) >= self.cell_size {
            return Err(GameError::InvalidConfig(format!(
                "a margin of {} leaves nothing of a {} pixel cell",
                self.cell_margin, self.cell_size
            )));
        }
        self.spawn_body(board).map(|_| ())
    }

    /// The snake every round starts with
    pub fn spawn_body<T: CellNum, D: Dimensions>(
        &self,
        board: &Board<T, D>,
    ) -> Result<Snake<T>, GameError> {
        if self.initial_length < MIN_LENGTH {
            return Err(GameError::InvalidConfig(format!(
                "initial_length must be at least {}",
                MIN_LENGTH
            )));
        }

        let head = board.center()?;
        let mut body: Vec<CellIndex<T>> = vec![head];
        for _ in 1..self.initial_length {
            let last = body[body.len() - 1];
            let next = board
                .next_cell(last, Direction::East)
                .ok()
                .filter(|c| !board.is_wall(*c))
                .ok_or_else(|| {
                    GameError::InvalidConfig(format!(
                        "a snake of length {} doesn't fit on a {}x{} board",
                        self.initial_length,
                        board.width(),
                        board.height()
                    ))
                })?;
            body.push(next);
        }

        Snake::new(body, board.width())
    }
}
