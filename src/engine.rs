//! Movement and collision: where the head goes next, what it runs into, and what
//! that does to the snake and the food
use rand::Rng;
use tracing::{debug, error, instrument};

use crate::board::{Board, CellIndex, CellNum, Dimensions};
use crate::food::FoodSet;
use crate::snake::Snake;
use crate::types::{Direction, GameError, TerminationCause};

/// What happens when the head moves onto a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome<T: CellNum> {
    /// the cell is part of the wall ring
    HitWall,
    /// the cell is covered by the snake
    AteSelf,
    /// the cell holds a pellet
    AteFood(CellIndex<T>),
    /// the cell is free grass
    Normal,
}

impl<T: CellNum> MoveOutcome<T> {
    /// the round-ending cause for this outcome, None if the snake survives it
    pub fn termination(&self) -> Option<TerminationCause> {
        match self {
            MoveOutcome::HitWall => Some(TerminationCause::HitWall),
            MoveOutcome::AteSelf => Some(TerminationCause::AteSelf),
            MoveOutcome::AteFood(_) | MoveOutcome::Normal => None,
        }
    }
}

/// the cell the head moves onto when heading in `direction`
pub fn next_head<T: CellNum, D: Dimensions>(
    board: &Board<T, D>,
    head: CellIndex<T>,
    direction: Direction,
) -> Result<CellIndex<T>, GameError> {
    board.next_cell(head, direction)
}

/// Classifies a move onto `next_head`. The first matching rule wins: wall, then
/// snake, then food, otherwise a normal move
pub fn classify_move<T: CellNum>(
    next_head: CellIndex<T>,
    snake: &Snake<T>,
    is_wall: impl Fn(CellIndex<T>) -> bool,
    food: &FoodSet<T>,
) -> MoveOutcome<T> {
    if is_wall(next_head) {
        MoveOutcome::HitWall
    } else if snake.contains(next_head) {
        MoveOutcome::AteSelf
    } else if food.contains(next_head) {
        MoveOutcome::AteFood(next_head)
    } else {
        MoveOutcome::Normal
    }
}

/// Applies a classified move. A normal move advances the snake, eating grows it,
/// takes the pellet and drops a new one. Filling the board while replacing the
/// pellet ends the round as a [TerminationCause::Win]. Walls and self collisions
/// end the round and leave the snake untouched
pub fn apply_move<T: CellNum, D: Dimensions>(
    board: &Board<T, D>,
    snake: &mut Snake<T>,
    food: &mut FoodSet<T>,
    rng: &mut impl Rng,
    next_head: CellIndex<T>,
    outcome: MoveOutcome<T>,
) -> Result<MoveOutcome<T>, TerminationCause> {
    if let Some(cause) = outcome.termination() {
        return Err(cause);
    }

    match outcome {
        MoveOutcome::AteFood(cell) => {
            snake.grow(next_head);
            food.remove(cell);
            match food.place(board, snake, rng) {
                Ok(_) => {}
                Err(GameError::AllCellsOccupied) => {
                    debug!(length = snake.len(), "no room left for food");
                    return Err(TerminationCause::Win);
                }
                Err(e) => {
                    error!(error = %e, "food placement failed");
                    return Err(TerminationCause::Inconsistent);
                }
            }
        }
        _ => snake.advance(next_head),
    }

    Ok(outcome)
}

/// Moves the snake one cell in `direction`: computes the next head, classifies it
/// against the board, and applies it
#[instrument(level = "trace", skip_all, fields(direction = %direction))]
pub fn step<T: CellNum, D: Dimensions>(
    board: &Board<T, D>,
    snake: &mut Snake<T>,
    food: &mut FoodSet<T>,
    rng: &mut impl Rng,
    direction: Direction,
) -> Result<MoveOutcome<T>, TerminationCause> {
    let next = match next_head(board, snake.head(), direction) {
        Ok(next) => next,
        Err(e) => {
            error!(error = %e, head = %snake.head(), "head left the board");
            return Err(TerminationCause::Inconsistent);
        }
    };

    let outcome = classify_move(next, snake, |c| board.is_wall(c), food);
    apply_move(board, snake, food, rng, next, outcome)
}
