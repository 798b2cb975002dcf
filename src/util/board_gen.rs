//! Utilities to construct a [Board] in a desired state.
use rand::Rng;

use crate::board::Board;

/// Play the given moves, starting from `start`. Panics on an unavailable move.
pub fn board_with_moves<B: Board>(start: B, moves: &[B::Move]) -> B {
    let mut curr = start;
    for &mv in moves {
        assert!(!curr.is_done(), "board already done, playing {} on {}", mv, curr);
        assert!(curr.is_available_move(mv), "move {} not available on {}", mv, curr);
        // just checked
        curr.play(mv).unwrap();
    }
    curr
}

/// Generate a board by playing `n` random moves on `start`.
/// Restarts from scratch whenever a game finishes early.
pub fn random_board_with_moves<B: Board>(start: &B, n: u32, rng: &mut impl Rng) -> B {
    'new_try: loop {
        let mut board = start.clone();
        for _ in 0..n {
            if board.is_done() {
                continue 'new_try;
            }
            let mv = board.random_available_move(rng).unwrap();
            board.play(mv).unwrap();
        }
        return board;
    }
}

/// Generate a board by playing random moves until `cond(&board)` returns true.
pub fn random_board_with_condition<B: Board>(start: &B, rng: &mut impl Rng, mut cond: impl FnMut(&B) -> bool) -> B {
    if cond(start) {
        return start.clone();
    }
    assert!(!start.is_done(), "start board is done and does not match the condition");

    loop {
        let mut board = start.clone();
        while !board.is_done() {
            let mv = board.random_available_move(rng).unwrap();
            board.play(mv).unwrap();
            if cond(&board) {
                return board;
            }
        }
    }
}
