//! The round state machine.
//!
//! A game sits on the title screen until it is started, plays until the snake hits
//! a wall, runs into itself or fills the board, then shows the end screen until
//! the player acknowledges it and it returns to the title.
//!
//! While playing the snake moves on two triggers. A fresh turn moves it at once
//! and resets the sub-cell offset. Without one, the offset grows by `speed`
//! pixels per tick and the snake steps forward each time a whole cell of offset
//! has built up.
mod food_gettable;
mod head_gettable;
mod length_gettable;
mod position_gettable;
mod size_determinable;
mod snake_body_gettable;
mod victor_determinable;
mod wall_queryable;

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use crate::board::{Board, CellIndex, CellNum, Classic, ClassicBoard, Dimensions};
use crate::config::GameConfig;
use crate::engine::{self, MoveOutcome};
use crate::food::FoodSet;
use crate::snake::Snake;
use crate::types::{CellKind, Direction, GameError, TerminationCause};
use crate::wire_representation::Snapshot;

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    #[allow(missing_docs)]
    MainTitle,
    #[allow(missing_docs)]
    Playing,
    #[allow(missing_docs)]
    End,
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundState::MainTitle => write!(f, "main title"),
            RoundState::Playing => write!(f, "playing"),
            RoundState::End => write!(f, "end"),
        }
    }
}

/// A single edge triggered input. At most one is observed per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// leave the title screen and start a round
    Start,
    /// steer the snake
    Turn(Direction),
    /// dismiss the end screen
    Acknowledge,
}

/// What a tick left behind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResult {
    #[allow(missing_docs)]
    pub state: RoundState,
    #[allow(missing_docs)]
    pub score: u64,
    /// why the round ended, set while on the end screen
    pub termination: Option<TerminationCause>,
}

/// A game: the board, the one snake and its food, and the screen it is on.
/// Randomness only comes from `rng`, so a seeded generator replays a game exactly
#[derive(Debug, Clone)]
pub struct Game<T: CellNum, D: Dimensions, R: Rng> {
    config: GameConfig,
    board: Board<T, D>,
    spawn: Snake<T>,
    snake: Snake<T>,
    food: FoodSet<T>,
    state: RoundState,
    pending: Option<Direction>,
    offset: u32,
    termination: Option<TerminationCause>,
    rng: R,
}

/// A game on the classic 32x24 board
pub type ClassicGame<R> = Game<u16, Classic, R>;

impl<R: Rng> ClassicGame<R> {
    /// the classic game with the default config
    pub fn classic(rng: R) -> Result<Self, GameError> {
        Game::new(ClassicBoard::classic(), GameConfig::default(), rng)
    }
}

impl<T: CellNum, D: Dimensions, R: Rng> Game<T, D, R> {
    /// builds a game sitting on the title screen with a fresh round laid out
    pub fn new(board: Board<T, D>, config: GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate(&board)?;
        let spawn = config.spawn_body(&board)?;
        let mut game = Game {
            food: FoodSet::new(config.food_count),
            snake: spawn.clone(),
            spawn,
            config,
            board,
            state: RoundState::MainTitle,
            pending: None,
            offset: 0,
            termination: None,
            rng,
        };
        game.new_round();
        Ok(game)
    }

    /// Restores a game from a snapshot. The snake, the food and the screen are
    /// checked against the board the same way play keeps them: food may not sit on
    /// a wall or the snake or exceed the configured count, and an end screen needs a
    /// cause. Outside the end screen a short food set is topped up to the target
    pub fn from_snapshot(
        board: Board<T, D>,
        config: GameConfig,
        rng: R,
        snapshot: &Snapshot,
    ) -> Result<Self, GameError> {
        if snapshot.width != board.width() || snapshot.height != board.height() {
            return Err(GameError::InvalidConfig(format!(
                "snapshot is {}x{} but the board is {}x{}",
                snapshot.width,
                snapshot.height,
                board.width(),
                board.height()
            )));
        }

        let mut game = Self::new(board, config, rng)?;
        let to_cell = |i: usize| {
            CellIndex::try_from_usize(i)
                .filter(|c| board.contains(*c))
                .ok_or(GameError::InvalidIndex { index: i as i64 })
        };

        let body = snapshot
            .snake
            .iter()
            .map(|i| to_cell(*i))
            .collect::<Result<Vec<_>, _>>()?;
        let snake = Snake::new(body, board.width())?;
        if let Some(cell) = snake.iter().find(|c| board.is_wall(**c)) {
            return Err(GameError::InternalInconsistency(format!(
                "snake covers wall cell {}",
                cell
            )));
        }

        let cells = snapshot
            .food
            .iter()
            .map(|i| to_cell(*i))
            .collect::<Result<Vec<_>, _>>()?;
        let mut food = FoodSet::with_cells(cells.iter().copied(), game.config.food_count);
        if food.len() != cells.len() {
            return Err(GameError::InternalInconsistency(
                "food cells repeat".to_string(),
            ));
        }
        if food.len() > food.target() {
            return Err(GameError::InternalInconsistency(format!(
                "{} food pellets but at most {} are kept on the board",
                food.len(),
                food.target()
            )));
        }
        if let Some(cell) = food
            .iter()
            .find(|c| board.is_wall(**c) || snake.contains(**c))
        {
            return Err(GameError::InternalInconsistency(format!(
                "food on cell {} is not on free grass",
                cell
            )));
        }

        let termination = match (snapshot.state, snapshot.termination) {
            (RoundState::End, None) => {
                return Err(GameError::InternalInconsistency(
                    "an ended round needs a termination cause".to_string(),
                ))
            }
            (RoundState::End, cause) => cause,
            _ => None,
        };

        if snapshot.state != RoundState::End {
            match food.replenish(&board, &snake, &mut game.rng) {
                Ok(()) | Err(GameError::AllCellsOccupied) => {}
                Err(e) => return Err(e),
            }
            if food.len() > cells.len() {
                debug!(restored = cells.len(), placed = food.len(), "topped up snapshot food");
            }
        }

        game.snake = snake;
        game.food = food;
        game.state = snapshot.state;
        game.offset = snapshot.offset;
        game.termination = termination;
        Ok(game)
    }

    /// Resets the snake, the food and every per-round value, and goes back to the title screen
    pub fn new_round(&mut self) -> RoundState {
        self.reset_round();
        self.state = RoundState::MainTitle;
        self.state
    }

    fn reset_round(&mut self) {
        self.snake = self.spawn.clone();
        self.food.clear();
        if let Err(e) = self
            .food
            .replenish(&self.board, &self.snake, &mut self.rng)
        {
            debug!(error = %e, placed = self.food.len(), "board too small for every pellet");
        }
        self.pending = None;
        self.offset = 0;
        self.termination = None;
    }

    /// Advances the game by one frame. `elapsed_ticks` is how many ticks the frame
    /// covers, it scales how far the sub-cell offset moves
    #[instrument(level = "trace", skip_all, fields(state = %self.state, ticks = elapsed_ticks))]
    pub fn update(&mut self, input: Option<Input>, elapsed_ticks: u32) -> UpdateResult {
        match self.state {
            RoundState::MainTitle => {
                if input == Some(Input::Start) {
                    self.reset_round();
                    self.state = RoundState::Playing;
                    info!("round started");
                }
            }
            RoundState::Playing => {
                if let Some(Input::Turn(direction)) = input {
                    self.pending = Some(direction);
                }
                self.tick(elapsed_ticks);
            }
            RoundState::End => {
                if input == Some(Input::Acknowledge) {
                    self.new_round();
                    debug!("back to the title screen");
                }
            }
        }

        self.result()
    }

    fn tick(&mut self, elapsed_ticks: u32) {
        self.offset = self
            .offset
            .saturating_add(self.config.speed.saturating_mul(elapsed_ticks));

        if let Some(direction) = self.pending.take() {
            match self.step(direction) {
                Ok(_) => self.offset = 0,
                Err(cause) => self.end_round(cause),
            }
            return;
        }

        while self.offset >= self.config.cell_size {
            let direction = match self.snake.direction(self.board.width()) {
                Ok(direction) => direction,
                Err(e) => {
                    error!(error = %e, "couldn't derive the snake's heading");
                    self.end_round(TerminationCause::Inconsistent);
                    return;
                }
            };
            if let Err(cause) = self.step(direction) {
                self.end_round(cause);
                return;
            }
            self.offset -= self.config.cell_size;
        }
    }

    fn step(&mut self, direction: Direction) -> Result<MoveOutcome<T>, TerminationCause> {
        let outcome = engine::step(
            &self.board,
            &mut self.snake,
            &mut self.food,
            &mut self.rng,
            direction,
        )?;
        if let MoveOutcome::AteFood(cell) = outcome {
            debug!(cell = %cell, length = self.snake.len(), score = self.score(), "ate food");
        }
        Ok(outcome)
    }

    fn end_round(&mut self, cause: TerminationCause) {
        info!(
            cause = %cause,
            length = self.snake.len(),
            score = self.score(),
            "round over"
        );
        self.termination = Some(cause);
        self.state = RoundState::End;
    }

    fn result(&self) -> UpdateResult {
        UpdateResult {
            state: self.state,
            score: self.score(),
            termination: self.termination,
        }
    }

    /// `(length - initial length) * 100 * length`, so every pellet is worth more than the last
    pub fn score(&self) -> u64 {
        let length = self.snake.len() as u64;
        let grown = length.saturating_sub(self.config.initial_length as u64);
        grown * 100 * length
    }

    #[allow(missing_docs)]
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// why the last round ended, only set on the end screen
    pub fn termination(&self) -> Option<TerminationCause> {
        self.termination
    }

    #[allow(missing_docs)]
    pub fn snake(&self) -> &Snake<T> {
        &self.snake
    }

    #[allow(missing_docs)]
    pub fn food(&self) -> &FoodSet<T> {
        &self.food
    }

    #[allow(missing_docs)]
    pub fn board(&self) -> &Board<T, D> {
        &self.board
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// pixels the snake has slid towards its next cell, for interpolated drawing
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// the heading of the snake
    pub fn direction(&self) -> Result<Direction, GameError> {
        self.snake.direction(self.board.width())
    }

    /// pixel width and height of the play field
    pub fn window_size(&self) -> (u32, u32) {
        self.board.pixel_size(self.config.cell_size)
    }

    /// top left pixel of the tile drawn for a cell, inset by the configured margin
    pub fn cell_origin(&self, index: CellIndex<T>) -> Result<(u32, u32), GameError> {
        self.board
            .cell_origin(index, self.config.cell_size, self.config.cell_margin)
    }

    /// what currently sits on a cell
    pub fn cell_kind(&self, index: CellIndex<T>) -> CellKind {
        if self.board.is_wall(index) {
            CellKind::Wall
        } else if self.snake.head() == index {
            CellKind::SnakeHead
        } else if self.snake.contains(index) {
            CellKind::SnakeBody
        } else if self.food.contains(index) {
            CellKind::Food
        } else {
            CellKind::Grass
        }
    }

    /// For each body cell, head first, the way a renderer should slide it by the
    /// current offset. The head and neck follow the heading, the tail follows its
    /// own heading and the rest of the body stays put
    pub fn segment_headings(
        &self,
    ) -> Result<Vec<(CellIndex<T>, Option<Direction>)>, GameError> {
        let width = self.board.width();
        let heading = self.snake.direction(width)?;
        let tail_heading = self.snake.tail_direction(width)?;
        let last = self.snake.len() - 1;

        Ok(self
            .snake
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let slide = if i == last {
                    Some(tail_heading)
                } else if i <= 1 {
                    Some(heading)
                } else {
                    None
                };
                (*cell, slide)
            })
            .collect())
    }

    /// a serializable view of the game
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.board.width(),
            height: self.board.height(),
            state: self.state,
            snake: self.snake.iter().map(|c| c.as_usize()).collect(),
            food: self.food.iter().map(|c| c.as_usize()).collect(),
            direction: self.direction().ok(),
            offset: self.offset,
            score: self.score(),
            termination: self.termination,
        }
    }
}

impl<T: CellNum, D: Dimensions, R: Rng> fmt::Display for Game<T, D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for (i, cell) in self.board.cells().enumerate() {
            let c = match self.cell_kind(cell) {
                CellKind::Wall => '#',
                CellKind::Food => 'f',
                CellKind::SnakeHead => 'H',
                CellKind::SnakeBody => 's',
                CellKind::Grass => '.',
            };
            write!(f, "{} ", c)?;
            if (i + 1) % self.board.width() as usize == 0 {
                writeln!(f)?;
            }
        }
        write!(
            f,
            "({} score: {} length: {})",
            self.state,
            self.score(),
            self.snake.len()
        )
    }
}
