use rand::Rng;

use crate::{
    board::{CellNum, Dimensions, Position},
    types::HeadGettableGame,
};

use super::Game;

impl<T: CellNum, D: Dimensions, R: Rng> HeadGettableGame for Game<T, D, R> {
    fn get_head_as_position(&self) -> Position {
        self.snake.head().into_position(self.board.width())
    }

    fn get_head_as_native_position(&self) -> Self::NativePositionType {
        self.snake.head()
    }
}
