//! Board geometry: mapping between linear cell indices and coordinates, and the wall ring
mod cell_num;
pub mod dimensions;

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::types::{Direction, GameError, Vector};

pub use cell_num::CellNum;
pub use dimensions::{Classic, Custom, Dimensions, Fixed};

/// Width of the classic board in cells
pub const WIDTH: u8 = 32;
/// Height of the classic board in cells
pub const HEIGHT: u8 = 24;

/// A coordinate on the board, x is the column and y is the row, row 0 is at the top
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    #[allow(missing_docs)]
    pub x: i32,
    #[allow(missing_docs)]
    pub y: i32,
}

impl Position {
    #[allow(missing_docs)]
    pub fn add_vec(&self, v: Vector) -> Position {
        Position {
            x: (self.x as i64 + v.x) as i32,
            y: (self.y as i64 + v.y) as i32,
        }
    }

    #[allow(missing_docs)]
    pub fn sub_vec(&self, v: Vector) -> Position {
        Position {
            x: (self.x as i64 - v.x) as i32,
            y: (self.y as i64 - v.y) as i32,
        }
    }

    #[allow(missing_docs)]
    pub fn to_vector(&self) -> Vector {
        Vector {
            x: self.x as i64,
            y: self.y as i64,
        }
    }
}

/// wrapper type for an index in to the board
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct CellIndex<T: CellNum>(pub T);

impl<T: CellNum> CellIndex<T> {
    /// build a CellIndex from a usize, None if it doesn't fit in the cell type
    pub fn try_from_usize(u: usize) -> Option<Self> {
        T::try_from_usize(u).map(Self)
    }

    /// get a usize from a CellIndex
    pub fn as_usize(&self) -> usize {
        self.0.as_usize()
    }

    /// converts a cellindex to a position, needs to know the width of the board
    pub fn into_position(self, width: u8) -> Position {
        let y = (self.as_usize() / width as usize) as i32;
        let x = (self.as_usize() % width as usize) as i32;
        Position { x, y }
    }
}

impl<T: CellNum> std::fmt::Display for CellIndex<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The playing field. It only knows its dimensions, what sits on each cell is
/// derived from the snake and the food set
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board<T: CellNum, D: Dimensions> {
    dimensions: D,
    _cell: PhantomData<T>,
}

/// The 32x24 board of the classic game
pub type ClassicBoard = Board<u16, Classic>;

impl ClassicBoard {
    /// the classic 32x24 board
    pub fn classic() -> Self {
        Board {
            dimensions: Classic::from_dimensions(WIDTH, HEIGHT),
            _cell: PhantomData,
        }
    }
}

impl<T: CellNum, D: Dimensions> Board<T, D> {
    /// builds a board, will return an error if it is too small to have an interior
    /// or if the cell type can't index every cell
    pub fn new(dimensions: D) -> Result<Self, GameError> {
        if dimensions.width() < 3 || dimensions.height() < 3 {
            return Err(GameError::InvalidConfig(format!(
                "a {}x{} board has no room inside its walls",
                dimensions.width(),
                dimensions.height()
            )));
        }
        let cell_count = dimensions.width() as usize * dimensions.height() as usize;
        if T::try_from_usize(cell_count - 1).is_none() {
            return Err(GameError::InvalidConfig(format!(
                "{} cells don't fit in the cell index type",
                cell_count
            )));
        }

        Ok(Board {
            dimensions,
            _cell: PhantomData,
        })
    }

    /// builds a board from a width and a height
    pub fn from_dimensions(width: u8, height: u8) -> Result<Self, GameError> {
        Self::new(D::from_dimensions(width, height))
    }

    #[allow(missing_docs)]
    pub fn width(&self) -> u8 {
        self.dimensions.width()
    }

    #[allow(missing_docs)]
    pub fn height(&self) -> u8 {
        self.dimensions.height()
    }

    /// total number of cells, walls included
    pub fn cell_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// number of cells inside the wall ring
    pub fn interior_cell_count(&self) -> usize {
        (self.width() as usize - 2) * (self.height() as usize - 2)
    }

    /// determines if a given index is on the board
    pub fn contains(&self, index: CellIndex<T>) -> bool {
        index.as_usize() < self.cell_count()
    }

    /// true for the border ring. Indices past the end of the board count as wall too
    pub fn is_wall(&self, index: CellIndex<T>) -> bool {
        if !self.contains(index) {
            return true;
        }
        let width = self.width() as usize;
        let x = index.as_usize() % width;
        let y = index.as_usize() / width;
        y == 0 || y == self.height() as usize - 1 || x == 0 || x == width - 1
    }

    /// converts a cell index to its coordinates
    pub fn to_coord(&self, index: CellIndex<T>) -> Result<Position, GameError> {
        if !self.contains(index) {
            return Err(GameError::InvalidIndex {
                index: index.as_usize() as i64,
            });
        }
        Ok(index.into_position(self.width()))
    }

    /// converts coordinates to a cell index
    pub fn to_index(&self, x: i32, y: i32) -> Result<CellIndex<T>, GameError> {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return Err(GameError::InvalidPosition { x, y });
        }
        let linear = y as usize * self.width() as usize + x as usize;
        CellIndex::try_from_usize(linear).ok_or(GameError::InvalidPosition { x, y })
    }

    /// the cell one step away in the given direction. There is no clamping, a step
    /// out of the interior lands on (or past) the wall ring and the caller decides
    /// what that means
    pub fn next_cell(
        &self,
        index: CellIndex<T>,
        direction: Direction,
    ) -> Result<CellIndex<T>, GameError> {
        let next = index.as_usize() as i64 + direction.index_delta(self.width());
        T::try_from_i64(next)
            .map(CellIndex)
            .ok_or(GameError::InvalidIndex { index: next })
    }

    /// the cell in the middle of the board
    pub fn center(&self) -> Result<CellIndex<T>, GameError> {
        self.to_index(self.width() as i32 / 2, self.height() as i32 / 2)
    }

    /// every cell of the board in index order
    pub fn cells(&self) -> impl Iterator<Item = CellIndex<T>> {
        (0..self.cell_count()).filter_map(CellIndex::try_from_usize)
    }

    /// every wall cell in index order
    pub fn walls(&self) -> impl Iterator<Item = CellIndex<T>> {
        let board = *self;
        self.cells().filter(move |c| board.is_wall(*c))
    }

    /// every cell inside the wall ring in index order
    pub fn interior(&self) -> impl Iterator<Item = CellIndex<T>> {
        let board = *self;
        self.cells().filter(move |c| !board.is_wall(*c))
    }

    /// pixel width and height of the board for a given cell size
    pub fn pixel_size(&self, cell_size: u32) -> (u32, u32) {
        (
            self.width() as u32 * cell_size,
            self.height() as u32 * cell_size,
        )
    }

    /// top left pixel of a cell's tile, inset by the margin
    pub fn cell_origin(
        &self,
        index: CellIndex<T>,
        cell_size: u32,
        margin: u32,
    ) -> Result<(u32, u32), GameError> {
        let pos = self.to_coord(index)?;
        Ok((
            pos.x as u32 * cell_size + margin,
            pos.y as u32 * cell_size + margin,
        ))
    }
}
