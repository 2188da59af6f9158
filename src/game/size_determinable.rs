use rand::Rng;

use crate::{
    board::{CellNum, Dimensions},
    types::SizeDeterminableGame,
};

use super::Game;

impl<T: CellNum, D: Dimensions, R: Rng> SizeDeterminableGame for Game<T, D, R> {
    fn get_width(&self) -> u32 {
        self.board.width() as u32
    }

    fn get_height(&self) -> u32 {
        self.board.height() as u32
    }
}
