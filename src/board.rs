use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;
use std::ops::ControlFlow;

use internal_iterator::InternalIterator;
use rand::Rng;

/// One of the two players. `A` always moves first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    A,
    B,
}

/// The absolute outcome of a finished game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Player),
    Draw,
}

/// Error returned when a move targets a cell that cannot be played.
///
/// This is always the caller's fault: the search only plays moves obtained from
/// [BoardMoves::available_moves], so it never sees this error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum InvalidMoveError {
    /// The target cell is already occupied, or the target column is full.
    Occupied,
    /// The move does not fit on the board at all.
    OutOfRange,
}

impl Display for InvalidMoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveError::Occupied => write!(f, "move targets an occupied cell or full column"),
            InvalidMoveError::OutOfRange => write!(f, "move does not fit on the board"),
        }
    }
}

impl Error for InvalidMoveError {}

/// The state of a game.
///
/// Boards are plain values: [Board::clone_and_play] builds a new board and never touches its
/// receiver, so a search tree can hold many boards without any sharing. The owner of the
/// "current game" board replaces it wholesale by assignment.
pub trait Board: 'static + Debug + Display + Clone + Eq + Hash + Send + Sync
where
    for<'a> Self: BoardMoves<'a, Self>,
{
    /// The type used to represent moves on this board.
    type Move: Debug + Display + Eq + Ord + Hash + Copy + Send + Sync;

    /// Return the next player to make a move.
    /// Fully determined by the number of moves played so far: `A` iff that count is even.
    fn next_player(&self) -> Player {
        if self.game_length() % 2 == 0 {
            Player::A
        } else {
            Player::B
        }
    }

    /// Return whether `mv` targets a playable cell.
    /// Only looks at cell occupancy, not at the outcome: a won board can still have open cells.
    fn is_available_move(&self, mv: Self::Move) -> bool;

    /// Play the move `mv`, modifying this board.
    /// Returns [InvalidMoveError] if the move is occupied or out of range.
    /// Panics if this board is already done: playing on a finished game is a contract
    /// violation, not a recoverable condition.
    fn play(&mut self, mv: Self::Move) -> Result<(), InvalidMoveError>;

    /// Clone this board, play `mv` on it and return the new board.
    /// The receiver is left untouched.
    fn clone_and_play(&self, mv: Self::Move) -> Result<Self, InvalidMoveError> {
        let mut next = self.clone();
        next.play(mv)?;
        Ok(next)
    }

    /// The outcome of this board, `None` while the game is still in progress.
    fn outcome(&self) -> Option<Outcome>;

    /// Whether this game is done.
    fn is_done(&self) -> bool {
        self.outcome().is_some()
    }

    /// Whether every playable cell is occupied, i.e. [BoardMoves::available_moves] is empty.
    /// A full board is always done, a done board can still have open cells.
    fn is_full(&self) -> bool {
        self.available_moves().count() == 0
    }

    /// The number of moves (plies) already played.
    fn game_length(&self) -> u32;

    /// Pick a uniformly random move from `available_moves`, or `None` if the board is full.
    /// Can be overridden for better performance.
    fn random_available_move(&self, rng: &mut impl Rng) -> Option<Self::Move> {
        let count = self.available_moves().count();
        if count == 0 {
            return None;
        }
        let index = rng.gen_range(0..count);
        self.available_moves().nth(index)
    }
}

/// A helper trait to get the correct lifetimes for [BoardMoves::available_moves].
/// This is a workaround for the lack of generic associated types,
/// see <https://github.com/rust-lang/rust/issues/44265>.
pub trait BoardMoves<'a, B: Board> {
    type AllMovesIterator: InternalIterator<Item = B::Move>;
    type AvailableMovesIterator: InternalIterator<Item = B::Move>;

    /// All theoretically possible moves, for any possible board.
    /// Moves returned by `available_moves` are always a subset of these moves.
    fn all_possible_moves() -> Self::AllMovesIterator;

    /// Return an iterator over the currently playable moves, in a fixed order:
    /// ascending columns for gravity games, row-major cells otherwise.
    /// Empty iff the board is full.
    fn available_moves(&'a self) -> Self::AvailableMovesIterator;
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::A => 'a',
            Player::B => 'b',
        }
    }
}

/// Implements [BoardMoves::available_moves] by filtering [BoardMoves::all_possible_moves]
/// through [Board::is_available_move]. Can be slower than generating moves directly.
#[derive(Debug)]
pub struct BruteforceMoveIterator<'a, B: Board> {
    board: &'a B,
}

impl<'a, B: Board> BruteforceMoveIterator<'a, B> {
    pub fn new(board: &'a B) -> Self {
        BruteforceMoveIterator { board }
    }
}

impl<'a, B: Board> InternalIterator for BruteforceMoveIterator<'a, B> {
    type Item = B::Move;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        B::all_possible_moves().try_for_each(|mv: B::Move| {
            if self.board.is_available_move(mv) {
                f(mv)
            } else {
                ControlFlow::Continue(())
            }
        })
    }
}
