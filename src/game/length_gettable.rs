use rand::Rng;

use crate::{
    board::{CellNum, Dimensions},
    types::LengthGettableGame,
};

use super::Game;

impl<T: CellNum, D: Dimensions, R: Rng> LengthGettableGame for Game<T, D, R> {
    fn get_length(&self) -> usize {
        self.snake.len()
    }
}
