use rand::Rng;

use crate::{
    board::{CellIndex, CellNum, Dimensions, Position},
    types::{GameError, PositionGettableGame},
};

use super::Game;

impl<T: CellNum, D: Dimensions, R: Rng> PositionGettableGame for Game<T, D, R> {
    type NativePositionType = CellIndex<T>;

    fn position_is_snake_body(&self, pos: Self::NativePositionType) -> bool {
        self.snake.contains(pos)
    }

    fn position_from_native(
        &self,
        native: Self::NativePositionType,
    ) -> Result<Position, GameError> {
        self.board.to_coord(native)
    }

    fn native_from_position(&self, pos: Position) -> Result<Self::NativePositionType, GameError> {
        self.board.to_index(pos.x, pos.y)
    }
}
