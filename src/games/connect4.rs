use std::fmt::{Debug, Display, Formatter};
use std::ops::Range;

use internal_iterator::{Internal, IteratorExt};
use itertools::Itertools;

use crate::board::{Board, BoardMoves, BruteforceMoveIterator, InvalidMoveError, Outcome, Player};

const W: usize = 7;
const H: usize = 6;

/// The Connect Four game on a 7x6 board with gravity.
///
/// Rows are indexed from the bottom, so a piece dropped in an empty column lands at row 0.
/// A move is the column to drop a piece into, the row follows from gravity.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Connect4 {
    tiles: [[Option<Player>; W]; H],
    last_move: Option<(u8, u8)>,
    moves_played: u32,
    outcome: Option<Outcome>,
}

impl Default for Connect4 {
    fn default() -> Self {
        Connect4 {
            tiles: [[None; W]; H],
            last_move: None,
            moves_played: 0,
            outcome: None,
        }
    }
}

impl Connect4 {
    pub const WIDTH: u8 = W as u8;
    pub const HEIGHT: u8 = H as u8;
    pub const TILES: u8 = Self::WIDTH * Self::HEIGHT;
    pub const WIN_LENGTH: u8 = 4;

    /// The tile at `(col, row)`, with row 0 the bottom row.
    pub fn tile(&self, col: u8, row: u8) -> Option<Player> {
        assert!(col < Self::WIDTH && row < Self::HEIGHT);
        self.tiles[row as usize][col as usize]
    }

    /// The `(col, row)` of the most recently placed piece, `None` for the empty board.
    pub fn last_move(&self) -> Option<(u8, u8)> {
        self.last_move
    }

    /// The number of consecutive `player` tiles seen when walking from `(col, row)`
    /// (exclusive) in direction `(dc, dr)`.
    fn run_towards(&self, col: u8, row: u8, dc: i8, dr: i8, player: Player) -> u8 {
        let mut run = 0;
        let mut c = col as i8 + dc;
        let mut r = row as i8 + dr;
        while (0..Self::WIDTH as i8).contains(&c)
            && (0..Self::HEIGHT as i8).contains(&r)
            && self.tiles[r as usize][c as usize] == Some(player)
        {
            run += 1;
            c += dc;
            r += dr;
        }
        run
    }

    /// Whether the piece just placed at `(col, row)` completes a line of [Self::WIN_LENGTH].
    /// Only the four axes through that cell need checking, any new line passes through it.
    fn wins_through(&self, col: u8, row: u8, player: Player) -> bool {
        [(1, 0), (0, 1), (1, 1), (1, -1)].iter().any(|&(dc, dr)| {
            let run = 1 + self.run_towards(col, row, dc, dr, player) + self.run_towards(col, row, -dc, -dr, player);
            run >= Self::WIN_LENGTH
        })
    }
}

impl Board for Connect4 {
    type Move = u8;

    fn is_available_move(&self, mv: Self::Move) -> bool {
        mv < Self::WIDTH && self.tiles[H - 1][mv as usize].is_none()
    }

    fn play(&mut self, mv: Self::Move) -> Result<(), InvalidMoveError> {
        assert!(!self.is_done(), "cannot play on done board {:?}", self);
        if mv >= Self::WIDTH {
            return Err(InvalidMoveError::OutOfRange);
        }

        let col = mv as usize;
        let row = (0..H)
            .find(|&row| self.tiles[row][col].is_none())
            .ok_or(InvalidMoveError::Occupied)?;

        let player = self.next_player();
        self.tiles[row][col] = Some(player);
        self.last_move = Some((mv, row as u8));
        self.moves_played += 1;

        // no line can exist before the winner has placed WIN_LENGTH pieces
        let min_plies = 2 * Self::WIN_LENGTH as u32 - 1;
        if self.moves_played >= min_plies && self.wins_through(mv, row as u8, player) {
            self.outcome = Some(Outcome::WonBy(player));
        } else if self.moves_played == Self::TILES as u32 {
            self.outcome = Some(Outcome::Draw);
        }

        Ok(())
    }

    fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    fn game_length(&self) -> u32 {
        self.moves_played
    }
}

impl<'a> BoardMoves<'a, Connect4> for Connect4 {
    type AllMovesIterator = Internal<Range<u8>>;
    type AvailableMovesIterator = BruteforceMoveIterator<'a, Connect4>;

    fn all_possible_moves() -> Self::AllMovesIterator {
        (0..Self::WIDTH).into_internal()
    }

    fn available_moves(&'a self) -> Self::AvailableMovesIterator {
        BruteforceMoveIterator::new(self)
    }
}

fn tile_to_char(tile: Option<Player>) -> char {
    match tile {
        Some(player) => player.to_char(),
        None => '.',
    }
}

impl Debug for Connect4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Connect4 {{ moves_played: {}, last_move: {:?}, next_player: {:?}, outcome: {:?} }}",
            self.moves_played,
            self.last_move,
            self.next_player(),
            self.outcome,
        )
    }
}

impl Display for Connect4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in (0..Self::HEIGHT).rev() {
            for col in 0..Self::WIDTH {
                write!(f, "{}", tile_to_char(self.tile(col, row)))?;
            }
            if row == Self::HEIGHT / 2 {
                write!(f, "    {}", self.next_player().to_char())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", (0..Self::WIDTH).join(""))?;
        Ok(())
    }
}
