//! Utilities for collecting game statistics and testing game implementations.
use internal_iterator::InternalIterator;

use crate::board::Board;

/// The number of distinct move paths of exactly `depth` plies starting from `board`,
/// not counting games that finish earlier. See <https://www.chessprogramming.org/Perft>.
///
/// Plain recursion without memoization, fine for the small trees it is used on.
pub fn perft<B: Board>(board: &B, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.is_done() {
        return 0;
    }

    let mut total = 0;
    board.available_moves().for_each(|mv: B::Move| {
        total += perft(&board.clone_and_play(mv).unwrap(), depth - 1);
    });
    total
}
