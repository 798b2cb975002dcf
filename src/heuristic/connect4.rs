use crate::ai::minimax::Heuristic;
use crate::ai::solver::terminal_value;
use crate::board::{Board, Player};
use crate::games::connect4::Connect4;

/// Evaluates a [Connect4] position by counting partially built lines ("threats").
///
/// For every cell holding a player's piece, every length-4 window that starts at that
/// cell, runs along one of the 8 directions and fits on the board is scored, unless it
/// contains an opponent piece (a blocked window is worthless). Windows reachable from
/// several of the player's pieces are counted each time, which weights central,
/// multiply-overlapping positions higher on purpose.
///
/// The leaf value of the search is `threat_score(next) - threat_score(other)`.
#[derive(Debug)]
pub struct Connect4ThreatHeuristic;

/// Score of a window in which every cell is already filled by the player.
const WIN_WINDOW_SCORE: i32 = 1000;

/// Bonus added once when more than one window is already complete:
/// the opponent cannot answer both. Deliberately not scaled beyond two threats.
const DOUBLE_THREAT_BONUS: i32 = 25;

/// Window scores indexed by the number of empty cells in the window, then by how many of
/// those empties are unsupported (`empty - supported`). A supported empty cell can be
/// played immediately, a piece dropped in its column would come to rest there.
const WINDOW_SCORES: [&[i32]; 4] = [
    &[WIN_WINDOW_SCORE],
    // one cell missing: an immediate threat if playable right now
    &[10, 3],
    &[5, 2, 0],
    // three cells missing: worth noting only if the window is playable at all
    &[1, 1, 1, 0],
];

const DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// The total threat score of `player` on `board`. Non-negative, 0 on an empty board.
pub fn threat_score(board: &Connect4, player: Player) -> i32 {
    let mut total = 0;
    let mut complete_windows = 0;

    for row in 0..Connect4::HEIGHT {
        for col in 0..Connect4::WIDTH {
            if board.tile(col, row) != Some(player) {
                continue;
            }

            for &(dc, dr) in &DIRECTIONS {
                if let Some((empty, supported)) = window_counts(board, player, col, row, dc, dr) {
                    let score = WINDOW_SCORES[empty][empty - supported];
                    if score == WIN_WINDOW_SCORE {
                        complete_windows += 1;
                    }
                    total += score;
                }
            }
        }
    }

    if complete_windows > 1 {
        total += DOUBLE_THREAT_BONUS;
    }
    total
}

/// Classify the window of [Connect4::WIN_LENGTH] cells starting at `(col, row)` along
/// `(dc, dr)`: `None` if it leaves the board or contains an opponent piece, otherwise
/// `(empty, supported)` where `supported` counts the empties playable right now.
fn window_counts(board: &Connect4, player: Player, col: u8, row: u8, dc: i8, dr: i8) -> Option<(usize, usize)> {
    let mut empty = 0;
    let mut supported = 0;

    for step in 0..Connect4::WIN_LENGTH as i8 {
        let c = col as i8 + step * dc;
        let r = row as i8 + step * dr;
        if !(0..Connect4::WIDTH as i8).contains(&c) || !(0..Connect4::HEIGHT as i8).contains(&r) {
            return None;
        }

        match board.tile(c as u8, r as u8) {
            Some(p) if p == player => {}
            Some(_) => return None,
            None => {
                empty += 1;
                let on_bottom = r == 0;
                if on_bottom || board.tile(c as u8, (r - 1) as u8).is_some() {
                    supported += 1;
                }
            }
        }
    }

    Some((empty, supported))
}

impl Heuristic<Connect4> for Connect4ThreatHeuristic {
    type V = i32;

    fn value(&self, board: &Connect4, length: u32) -> i32 {
        if let Some(value) = terminal_value(board, length) {
            return value;
        }

        let player = board.next_player();
        threat_score(board, player) - threat_score(board, player.other())
    }

    /// Columns close to the previous move first, strong replies tend to be nearby.
    fn move_priority(&self, board: &Connect4, mv: u8) -> i32 {
        match board.last_move() {
            Some((col, _)) => (mv as i32 - col as i32).abs(),
            None => 0,
        }
    }
}
