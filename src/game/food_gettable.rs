use rand::Rng;

use crate::{
    board::{CellNum, Dimensions, Position},
    types::FoodGettableGame,
};

use super::Game;

impl<T: CellNum, D: Dimensions, R: Rng> FoodGettableGame for Game<T, D, R> {
    fn get_all_food_as_positions(&self) -> Vec<Position> {
        self.food
            .iter()
            .map(|c| c.into_position(self.board.width()))
            .collect()
    }

    fn get_all_food_as_native_positions(&self) -> Vec<Self::NativePositionType> {
        self.food.iter().copied().collect()
    }
}
