//! A simple baseline bot that plays uniformly random moves.
use std::fmt::{Debug, Formatter};

use rand::Rng;

use crate::ai::Bot;
use crate::board::Board;

/// Bot that picks a uniformly random move among the available ones.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<B: Board, R: Rng> Bot<B> for RandomBot<R> {
    fn select_move(&mut self, board: &B) -> B::Move {
        assert!(!board.is_done(), "cannot select a move on a done board");
        // unwrap is safe: a non-done board is not full
        board.random_available_move(&mut self.rng).unwrap()
    }
}
