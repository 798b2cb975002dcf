use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use crate::ai::minimax::{minimax, minimax_value, Heuristic};
use crate::ai::Bot;
use crate::board::Board;
use crate::pov::NonPov;
use crate::wdl::OutcomeWDL;

/// The base value of a decided game.
///
/// Dominates every reachable [Heuristic] sum, so a proven win or loss always outranks
/// a speculative evaluation. The game length is subtracted so that among proven wins the
/// fastest one scores highest, and among proven losses the slowest one does.
pub const WIN_SCORE: i32 = 100_000;

/// The value of `board` if it is finished, from the POV of `board.next_player()`,
/// or `None` while the game is in progress.
pub fn terminal_value<B: Board>(board: &B, length: u32) -> Option<i32> {
    board.outcome().map(|outcome| match outcome.pov(board.next_player()) {
        OutcomeWDL::Win => WIN_SCORE - length as i32,
        OutcomeWDL::Draw => 0,
        OutcomeWDL::Loss => -(WIN_SCORE - length as i32),
    })
}

/// Minimax [Heuristic] that only looks at game outcomes, every unfinished board is neutral.
/// With enough depth to exhaust the game tree this solves the game exactly,
/// which is feasible for Tic-Tac-Toe.
#[derive(Debug)]
pub struct SolverHeuristic;

impl<B: Board> Heuristic<B> for SolverHeuristic {
    type V = i32;

    fn value(&self, board: &B, length: u32) -> i32 {
        terminal_value(board, length).unwrap_or(0)
    }
}

/// Solve the value of `board` by exhaustive search up to `depth`.
pub fn solve_value<B: Board>(board: &B, depth: u32) -> i32 {
    minimax_value(board, &SolverHeuristic, depth)
}

/// Bot that plays outcome-optimal moves by exhausting the game tree up to a fixed depth.
pub struct SolverBot<B: Board> {
    depth: u32,
    ph: PhantomData<B>,
}

impl<B: Board> Debug for SolverBot<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SolverBot {{ depth: {} }}", self.depth)
    }
}

impl<B: Board> SolverBot<B> {
    pub fn new(depth: u32) -> Self {
        assert!(depth > 0);
        SolverBot { depth, ph: PhantomData }
    }
}

impl<B: Board> Bot<B> for SolverBot<B> {
    fn select_move(&mut self, board: &B) -> B::Move {
        assert!(!board.is_done(), "cannot select a move on a done board");
        minimax(board, &SolverHeuristic, self.depth).best_move.unwrap()
    }
}
