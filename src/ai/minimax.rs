use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ops::Neg;

use internal_iterator::InternalIterator;

use crate::ai::Bot;
use crate::board::Board;

/// A position evaluator used by [minimax].
pub trait Heuristic<B: Board> {
    /// The type used to represent the value of a board.
    type V: Debug + Copy + Ord + Neg<Output = Self::V>;

    /// Return the value of `board` from the POV of `board.next_player()`.
    /// `length` is the number of moves played since the board the search was started on,
    /// it can be used to prefer faster wins and slower losses.
    ///
    /// Must handle finished boards, the search calls it at every terminal node.
    fn value(&self, board: &B, length: u32) -> Self::V;

    /// The priority used to order moves at interior nodes, lower values are tried first.
    /// Trying plausible strong replies early improves pruning.
    /// Ties keep the generation order. The default is no ordering at all.
    fn move_priority(&self, board: &B, mv: B::Move) -> i32 {
        let _ = (board, mv);
        0
    }
}

#[derive(Debug)]
pub struct MinimaxResult<V, M> {
    /// The value of this board.
    pub value: V,

    /// The best move to play, `None` if the board is done or the search depth was 0.
    /// Between equally valued moves the first one found is kept.
    pub best_move: Option<M>,
}

/// Evaluate `board` with alpha-beta minimax up to `depth` moves ahead, `heuristic` scoring
/// the depth-exhausted leaves. Returns both the value and the best root move.
/// The value is from the POV of `board.next_player()`.
pub fn minimax<B: Board, H: Heuristic<B>>(board: &B, heuristic: &H, depth: u32) -> MinimaxResult<H::V, B::Move> {
    let result = negamax_recurse(heuristic, board, 0, depth, None, None);
    if result.best_move.is_none() {
        assert!(
            board.is_done() || depth == 0,
            "negamax must find a move on a non-done board"
        );
    }
    result
}

/// Evaluate `board` like [minimax] but only return the value.
pub fn minimax_value<B: Board, H: Heuristic<B>>(board: &B, heuristic: &H, depth: u32) -> H::V {
    negamax_recurse(heuristic, board, 0, depth, None, None).value
}

/// The core search: fail-soft alpha-beta negamax.
/// Implementation based on <https://en.wikipedia.org/wiki/Negamax#Negamax_with_alpha_beta_pruning>.
///
/// `alpha` and `beta` are threaded through the whole sibling loop, they are never reset
/// between sibling subtrees. `None` stands for an unbounded window edge.
fn negamax_recurse<B: Board, H: Heuristic<B>>(
    heuristic: &H,
    board: &B,
    length: u32,
    depth_left: u32,
    alpha: Option<H::V>,
    beta: Option<H::V>,
) -> MinimaxResult<H::V, B::Move> {
    if board.is_done() || depth_left == 0 {
        return MinimaxResult {
            value: heuristic.value(board, length),
            best_move: None,
        };
    }

    let mut moves: Vec<B::Move> = board.available_moves().collect();
    // the root keeps the plain generation order so ties resolve predictably,
    // deeper nodes try moves near the previous reply first
    if length > 0 {
        moves.sort_by_key(|&mv| heuristic.move_priority(board, mv));
    }

    let mut best_value: Option<H::V> = None;
    let mut best_move: Option<B::Move> = None;
    let mut alpha = alpha;

    for mv in moves {
        // moves come from available_moves, so playing them cannot fail
        let child = board.clone_and_play(mv).unwrap();

        let child_value = -negamax_recurse(
            heuristic,
            &child,
            length + 1,
            depth_left - 1,
            beta.map(Neg::neg),
            alpha.map(Neg::neg),
        )
        .value;

        if best_value.map_or(true, |best| child_value > best) {
            best_value = Some(child_value);
            best_move = Some(mv);
        }
        if alpha.map_or(true, |alpha| child_value > alpha) {
            alpha = Some(child_value);
        }

        // beta cutoff: the opponent already has a better option elsewhere
        if let (Some(alpha), Some(beta)) = (alpha, beta) {
            if alpha >= beta {
                break;
            }
        }
    }

    MinimaxResult {
        // a non-done board always has at least one available move
        value: best_value.unwrap(),
        best_move,
    }
}

/// Bot that plays the best move as evaluated by [minimax] at a fixed depth.
pub struct MiniMaxBot<B: Board, H: Heuristic<B>> {
    depth: u32,
    heuristic: H,
    ph: PhantomData<B>,
}

impl<B: Board, H: Heuristic<B> + Debug> Debug for MiniMaxBot<B, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MiniMaxBot {{ depth: {}, heuristic: {:?} }}", self.depth, self.heuristic)
    }
}

impl<B: Board, H: Heuristic<B>> MiniMaxBot<B, H> {
    pub fn new(depth: u32, heuristic: H) -> Self {
        assert!(depth > 0, "requires depth > 0 to find the best move");
        MiniMaxBot {
            depth,
            heuristic,
            ph: PhantomData,
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl<B: Board, H: Heuristic<B> + Debug> Bot<B> for MiniMaxBot<B, H> {
    fn select_move(&mut self, board: &B) -> B::Move {
        assert!(!board.is_done(), "cannot select a move on a done board");
        // unwrap is safe: depth > 0 (see new) and the board is not done (see assert),
        // so minimax always reports a best move
        minimax(board, &self.heuristic, self.depth).best_move.unwrap()
    }
}
