use std::fmt::Debug;

use rand::Rng;

use crate::{
    board::{CellNum, Dimensions},
    types::{TerminationCause, VictorDeterminableGame},
};

use super::{Game, RoundState};

impl<T: CellNum, D: Dimensions, R: Rng + Debug> VictorDeterminableGame for Game<T, D, R> {
    fn is_over(&self) -> bool {
        self.state == RoundState::End
    }

    fn get_termination(&self) -> Option<TerminationCause> {
        self.termination
    }
}
