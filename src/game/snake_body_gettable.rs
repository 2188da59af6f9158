use rand::Rng;

use crate::{
    board::{CellNum, Dimensions},
    types::SnakeBodyGettableGame,
};

use super::Game;

impl<T: CellNum, D: Dimensions, R: Rng> SnakeBodyGettableGame for Game<T, D, R> {
    fn get_snake_body_vec(&self) -> Vec<Self::NativePositionType> {
        self.snake.cells()
    }
}
