//! various types that are useful for working with the snake engine
use crate::board::Position;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{self, Debug};
use std::hash::Hash;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    /// x position
    pub x: i64,
    /// y position
    pub y: i64,
}

/// Represents a heading on the board. Rows grow downwards, so North is towards row 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[allow(missing_docs)]
    North,
    #[allow(missing_docs)]
    East,
    #[allow(missing_docs)]
    South,
    #[allow(missing_docs)]
    West,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::East => write!(f, "east"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
        }
    }
}

impl Direction {
    /// convert this direction to a unit vector
    pub fn to_vector(self) -> Vector {
        match self {
            Direction::North => Vector { x: 0, y: -1 },
            Direction::East => Vector { x: 1, y: 0 },
            Direction::South => Vector { x: 0, y: 1 },
            Direction::West => Vector { x: -1, y: 0 },
        }
    }

    /// create a Direction from the given vector, None if it isn't a unit step
    pub fn from_vector(vector: Vector) -> Option<Self> {
        match vector {
            Vector { x: 0, y: -1 } => Some(Self::North),
            Vector { x: 1, y: 0 } => Some(Self::East),
            Vector { x: 0, y: 1 } => Some(Self::South),
            Vector { x: -1, y: 0 } => Some(Self::West),
            _ => None,
        }
    }

    /// the change in linear cell index caused by one step in this direction
    pub fn index_delta(self, width: u8) -> i64 {
        match self {
            Direction::North => -(width as i64),
            Direction::East => 1,
            Direction::South => width as i64,
            Direction::West => -1,
        }
    }

    /// the direction of the single step leading from `from` to `to`, None if the
    /// two positions aren't grid adjacent
    pub fn between(from: Position, to: Position) -> Option<Self> {
        Self::from_vector(to.sub_vec(from.to_vector()).to_vector())
    }

    /// returns all four directions, in clockwise order starting at North
    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ]
    }

    /// the direction pointing the other way
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// checks if a given direction is not opposite this direction. e.g. North is not opposite to West, but is opposite to South
    pub fn is_not_opposite(&self, other: &Direction) -> bool {
        self.opposite() != *other
    }
}

/// What a single cell of the board currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    #[allow(missing_docs)]
    Grass,
    #[allow(missing_docs)]
    Food,
    #[allow(missing_docs)]
    Wall,
    #[allow(missing_docs)]
    SnakeHead,
    #[allow(missing_docs)]
    SnakeBody,
}

/// Why a round ended. These are outcomes of play, not failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminationCause {
    /// the head moved into a border cell
    HitWall,
    /// the head moved into a cell the snake already occupies
    AteSelf,
    /// food could not be replenished because the board is full
    Win,
    /// the engine found its own state broken, should never be seen in play
    Inconsistent,
}

impl TerminationCause {
    /// true if the round ended because the player filled the board
    pub fn is_victory(&self) -> bool {
        matches!(self, TerminationCause::Win)
    }
}

impl fmt::Display for TerminationCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationCause::HitWall => write!(f, "Hit Wall"),
            TerminationCause::AteSelf => write!(f, "Eat Self"),
            TerminationCause::Win => write!(f, "OK, You Win"),
            TerminationCause::Inconsistent => write!(f, "Inconsistent State"),
        }
    }
}

/// Errors raised by board geometry, snake construction and food placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// a linear cell index outside of the board
    InvalidIndex {
        #[allow(missing_docs)]
        index: i64,
    },
    /// a coordinate pair outside of the board
    InvalidPosition {
        #[allow(missing_docs)]
        x: i32,
        #[allow(missing_docs)]
        y: i32,
    },
    /// the snake or food layout breaks one of its invariants
    InternalInconsistency(String),
    /// there is no free cell left to place food on
    AllCellsOccupied,
    /// the configuration can't be used with the given board
    InvalidConfig(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidIndex { index } => write!(f, "cell index {} is off the board", index),
            GameError::InvalidPosition { x, y } => {
                write!(f, "position ({}, {}) is off the board", x, y)
            }
            GameError::InternalInconsistency(msg) => write!(f, "inconsistent state: {}", msg),
            GameError::AllCellsOccupied => write!(f, "all cells are occupied"),
            GameError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl Error for GameError {}

/// A game for which board positions can be identified and returned
pub trait PositionGettableGame {
    /// the native position type for this board
    type NativePositionType: Eq + Hash + Clone + Ord + PartialOrd + Debug;

    /// Check if the given position is a snake body (head included)
    fn position_is_snake_body(&self, pos: Self::NativePositionType) -> bool;

    /// Convert a native position to a Position
    fn position_from_native(
        &self,
        native: Self::NativePositionType,
    ) -> Result<Position, GameError>;

    /// Convert a position to the native type
    fn native_from_position(&self, pos: Position) -> Result<Self::NativePositionType, GameError>;
}

/// A game where positions can be checked for walls
pub trait WallQueryableGame: PositionGettableGame {
    /// Is this position a wall?
    fn is_wall(&self, pos: &Self::NativePositionType) -> bool;
}

/// A game for which the head of the snake can be got.
pub trait HeadGettableGame: PositionGettableGame {
    /// get the head position as a position struct
    fn get_head_as_position(&self) -> Position;

    /// get the head position as some "native" type for this game
    fn get_head_as_native_position(&self) -> Self::NativePositionType;
}

/// A game for which the food on the board can be queried
pub trait FoodGettableGame: PositionGettableGame {
    /// get all food as position structs
    fn get_all_food_as_positions(&self) -> Vec<Position>;

    /// get all food as the "native" type for this game
    fn get_all_food_as_native_positions(&self) -> Vec<Self::NativePositionType>;
}

/// A game where the entire snake body is gettable
pub trait SnakeBodyGettableGame: PositionGettableGame {
    /// return a Vec of the positions for the snake body, in order from head to tail
    fn get_snake_body_vec(&self) -> Vec<Self::NativePositionType>;
}

/// A game for which the length of the snake can be got.
pub trait LengthGettableGame {
    /// get the length of the snake
    fn get_length(&self) -> usize;
}

/// a game for which the size of the game board can be determined
pub trait SizeDeterminableGame {
    #[allow(missing_docs)]
    fn get_width(&self) -> u32;
    #[allow(missing_docs)]
    fn get_height(&self) -> u32;
}

/// A game which can have its outcome determined
pub trait VictorDeterminableGame: std::fmt::Debug {
    #[allow(missing_docs)]
    fn is_over(&self) -> bool;

    /// get the reason the last round ended, None while a round is running or before the first one
    fn get_termination(&self) -> Option<TerminationCause>;
}
