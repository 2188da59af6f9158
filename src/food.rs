//! Food placement: a small set of pellets, each dropped on a uniformly random free cell
use std::collections::HashSet;
use std::slice::Iter;

use fxhash::FxHashSet;
use rand::seq::IteratorRandom;
use rand::Rng;
use tracing::trace;

use crate::board::{Board, CellIndex, CellNum, Dimensions};
use crate::snake::Snake;
use crate::types::GameError;

/// Number of pellets on the board in the classic game
pub const FOOD_TARGET: usize = 3;

/// The pellets currently on the board, in the order they were placed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoodSet<T: CellNum> {
    cells: Vec<CellIndex<T>>,
    target: usize,
}

impl<T: CellNum> FoodSet<T> {
    /// an empty set that wants `target` pellets
    pub fn new(target: usize) -> Self {
        Self {
            cells: Vec::with_capacity(target),
            target,
        }
    }

    /// a set holding exactly the given pellets, repeats are dropped
    pub fn with_cells(cells: impl IntoIterator<Item = CellIndex<T>>, target: usize) -> Self {
        let mut set = Self::new(target);
        for cell in cells {
            if !set.contains(cell) {
                set.cells.push(cell);
            }
        }
        set
    }

    /// how many pellets the board should hold
    pub fn target(&self) -> usize {
        self.target
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[allow(missing_docs)]
    pub fn contains(&self, index: CellIndex<T>) -> bool {
        self.cells.contains(&index)
    }

    /// iterates over the pellets in placement order
    pub fn iter(&self) -> Iter<'_, CellIndex<T>> {
        self.cells.iter()
    }

    /// drops every pellet
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// removes the eaten pellet, leaving the others in their original order.
    /// Returns false if there was no pellet on that cell
    pub fn remove(&mut self, eaten: CellIndex<T>) -> bool {
        let before = self.cells.len();
        self.cells.retain(|c| *c != eaten);
        self.cells.len() != before
    }

    /// places one new pellet on a cell that is not a wall, not covered by the snake,
    /// and not already food. Every such cell is equally likely. When there is no such
    /// cell this returns [GameError::AllCellsOccupied], which means the board is full
    pub fn place<D: Dimensions>(
        &mut self,
        board: &Board<T, D>,
        snake: &Snake<T>,
        rng: &mut impl Rng,
    ) -> Result<CellIndex<T>, GameError> {
        let mut occupied: FxHashSet<CellIndex<T>> =
            HashSet::with_capacity_and_hasher(snake.len() + self.cells.len(), Default::default());
        occupied.extend(snake.iter().copied());
        occupied.extend(self.cells.iter().copied());

        let chosen = board
            .interior()
            .filter(|c| !occupied.contains(c))
            .choose(rng)
            .ok_or(GameError::AllCellsOccupied)?;

        trace!(cell = %chosen, "placed food");
        self.cells.push(chosen);
        Ok(chosen)
    }

    /// places pellets until the target is reached
    pub fn replenish<D: Dimensions>(
        &mut self,
        board: &Board<T, D>,
        snake: &Snake<T>,
        rng: &mut impl Rng,
    ) -> Result<(), GameError> {
        while self.cells.len() < self.target {
            self.place(board, snake, rng)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;
    use crate::board::{ClassicBoard, Custom};

    fn classic_snake() -> Snake<u16> {
        Snake::new(vec![CellIndex(400), CellIndex(401)], 32).unwrap()
    }

    #[test]
    fn test_replenish_avoids_walls_and_snake() {
        let board = ClassicBoard::classic();
        let snake = classic_snake();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut food = FoodSet::new(FOOD_TARGET);
            food.replenish(&board, &snake, &mut rng).unwrap();
            assert_eq!(food.len(), FOOD_TARGET);
            for cell in food.iter() {
                assert!(!board.is_wall(*cell));
                assert!(!snake.contains(*cell));
            }
            let unique: HashSet<_> = food.iter().collect();
            assert_eq!(unique.len(), FOOD_TARGET);
        }
    }

    #[test]
    fn test_place_is_reproducible() {
        let board = ClassicBoard::classic();
        let snake = classic_snake();
        let mut a = FoodSet::new(FOOD_TARGET);
        let mut b = FoodSet::new(FOOD_TARGET);
        a.replenish(&board, &snake, &mut SmallRng::seed_from_u64(42))
            .unwrap();
        b.replenish(&board, &snake, &mut SmallRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_place_on_full_board() {
        // 5x4 has a 3x2 interior: cells 6, 7, 8 and 11, 12, 13
        let board = Board::<u8, Custom>::from_dimensions(5, 4).unwrap();
        let snake = Snake::new(vec![CellIndex(6), CellIndex(7), CellIndex(8), CellIndex(13)], 5)
            .unwrap();
        let mut food = FoodSet::with_cells(vec![CellIndex(11)], 3);
        let mut rng = SmallRng::seed_from_u64(1);

        assert_eq!(food.place(&board, &snake, &mut rng), Ok(CellIndex(12)));
        assert_eq!(
            food.place(&board, &snake, &mut rng),
            Err(GameError::AllCellsOccupied)
        );
        assert_eq!(food.len(), 2);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut food = FoodSet::with_cells(vec![CellIndex(40u16), CellIndex(50), CellIndex(60)], 3);
        assert!(food.remove(CellIndex(50)));
        assert_eq!(
            food.iter().copied().collect::<Vec<_>>(),
            vec![CellIndex(40), CellIndex(60)]
        );
        assert!(!food.remove(CellIndex(50)));
        assert_eq!(food.len(), 2);
    }
}
