use rand::Rng;

use crate::{
    board::{CellNum, Dimensions},
    types::WallQueryableGame,
};

use super::Game;

impl<T: CellNum, D: Dimensions, R: Rng> WallQueryableGame for Game<T, D, R> {
    fn is_wall(&self, pos: &Self::NativePositionType) -> bool {
        self.board.is_wall(*pos)
    }
}
