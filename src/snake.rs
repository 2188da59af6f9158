//! The snake is an ordered run of cells, head first.
//!
//! Its heading is never stored, it is always derived from the two cells at the
//! front (or back, for the tail) so it can't drift from the body layout. Only
//! those front and back pairs have to be grid adjacent, the rest of the body is
//! checked for being one row or one column step apart in index space.
use std::collections::vec_deque::Iter;
use std::collections::VecDeque;

use itertools::Itertools;

use crate::board::{CellIndex, CellNum};
use crate::types::{Direction, GameError};

/// Smallest body a snake can be built with
pub const MIN_LENGTH: usize = 2;

/// A snake on a board of a known width
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snake<T: CellNum> {
    body: VecDeque<CellIndex<T>>,
}

fn step_between<T: CellNum>(
    from: CellIndex<T>,
    to: CellIndex<T>,
    width: u8,
) -> Option<Direction> {
    Direction::between(from.into_position(width), to.into_position(width))
}

impl<T: CellNum> Snake<T> {
    /// builds a snake from its cells in head to tail order. The body must have at least
    /// two cells and no repeats, and neighbouring cells must be one or `width` indices apart
    pub fn new(
        body: impl IntoIterator<Item = CellIndex<T>>,
        width: u8,
    ) -> Result<Self, GameError> {
        let body: VecDeque<CellIndex<T>> = body.into_iter().collect();
        if body.len() < MIN_LENGTH {
            return Err(GameError::InternalInconsistency(format!(
                "a snake needs at least {} cells, got {}",
                MIN_LENGTH,
                body.len()
            )));
        }

        if let Some((cell, _)) = body.iter().counts().into_iter().find(|(_, n)| *n > 1) {
            return Err(GameError::InternalInconsistency(format!(
                "cell {} appears more than once in the body",
                cell
            )));
        }

        if let Some((a, b)) = body
            .iter()
            .tuple_windows()
            .find(|(a, b)| {
                let delta = if a.as_usize() > b.as_usize() {
                    a.as_usize() - b.as_usize()
                } else {
                    b.as_usize() - a.as_usize()
                };
                delta != 1 && delta != width as usize
            })
        {
            return Err(GameError::InternalInconsistency(format!(
                "body cells {} and {} are not a single step apart",
                a, b
            )));
        }

        Ok(Snake { body })
    }

    #[allow(missing_docs)]
    pub fn head(&self) -> CellIndex<T> {
        self.body[0]
    }

    /// the cell right behind the head
    pub fn neck(&self) -> CellIndex<T> {
        self.body[1]
    }

    #[allow(missing_docs)]
    pub fn tail(&self) -> CellIndex<T> {
        self.body[self.body.len() - 1]
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// iterates over the body from head to tail
    pub fn iter(&self) -> Iter<'_, CellIndex<T>> {
        self.body.iter()
    }

    /// the body from head to tail
    pub fn cells(&self) -> Vec<CellIndex<T>> {
        self.body.iter().copied().collect()
    }

    /// whether the snake currently covers the given cell
    pub fn contains(&self, index: CellIndex<T>) -> bool {
        self.body.contains(&index)
    }

    /// the direction the head is travelling, from the neck towards the head
    pub fn direction(&self, width: u8) -> Result<Direction, GameError> {
        step_between(self.neck(), self.head(), width).ok_or_else(|| {
            GameError::InternalInconsistency(format!(
                "head {} and neck {} are not adjacent",
                self.head(),
                self.neck()
            ))
        })
    }

    /// the direction the tail is travelling, from the last cell towards the one before it
    pub fn tail_direction(&self, width: u8) -> Result<Direction, GameError> {
        let before_tail = self.body[self.body.len() - 2];
        step_between(self.tail(), before_tail, width).ok_or_else(|| {
            GameError::InternalInconsistency(format!(
                "tail {} and the cell before it {} are not adjacent",
                self.tail(),
                before_tail
            ))
        })
    }

    /// moves onto `new_head` and keeps every cell, the snake gets one longer
    pub fn grow(&mut self, new_head: CellIndex<T>) {
        self.body.push_front(new_head);
    }

    /// moves onto `new_head` and leaves the tail cell behind
    pub fn advance(&mut self, new_head: CellIndex<T>) {
        self.body.push_front(new_head);
        self.body.pop_back();
    }
}
