use std::fmt::{Debug, Display, Formatter};
use std::iter::Map;
use std::ops::Range;

use internal_iterator::{Internal, IteratorExt};

use crate::board::{Board, BoardMoves, BruteforceMoveIterator, InvalidMoveError, Outcome, Player};

const SIZE: usize = 3;
const WIN_LENGTH: u8 = 3;

/// A cell on a [TTTBoard], `(x, y)` with `y` 0 the top row.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coord(u8);

/// The classic Tic-Tac-Toe game on a 3x3 board, without gravity:
/// any empty cell is playable.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct TTTBoard {
    tiles: [Option<Player>; SIZE * SIZE],
    last_move: Option<Coord>,
    moves_played: u32,
    outcome: Option<Outcome>,
}

impl Default for TTTBoard {
    fn default() -> Self {
        TTTBoard {
            tiles: [None; SIZE * SIZE],
            last_move: None,
            moves_played: 0,
            outcome: None,
        }
    }
}

impl Coord {
    pub fn from_xy(x: u8, y: u8) -> Self {
        assert!(x < SIZE as u8);
        assert!(y < SIZE as u8);
        Coord(y * SIZE as u8 + x)
    }

    /// All cells in row-major order.
    pub fn all() -> Map<Range<u8>, fn(u8) -> Coord> {
        (0..(SIZE * SIZE) as u8).map(Coord)
    }

    pub fn x(self) -> u8 {
        self.0 % SIZE as u8
    }

    pub fn y(self) -> u8 {
        self.0 / SIZE as u8
    }
}

impl TTTBoard {
    pub fn tile(&self, coord: Coord) -> Option<Player> {
        self.tiles[coord.0 as usize]
    }

    /// The most recently played cell, `None` for the empty board.
    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    fn run_towards(&self, coord: Coord, dx: i8, dy: i8, player: Player) -> u8 {
        let mut run = 0;
        let mut x = coord.x() as i8 + dx;
        let mut y = coord.y() as i8 + dy;
        while (0..SIZE as i8).contains(&x)
            && (0..SIZE as i8).contains(&y)
            && self.tile(Coord::from_xy(x as u8, y as u8)) == Some(player)
        {
            run += 1;
            x += dx;
            y += dy;
        }
        run
    }

    /// Whether the piece just placed at `coord` completes a line of three.
    /// Only the four axes through that cell need checking.
    fn wins_through(&self, coord: Coord, player: Player) -> bool {
        [(1, 0), (0, 1), (1, 1), (1, -1)].iter().any(|&(dx, dy)| {
            let run = 1 + self.run_towards(coord, dx, dy, player) + self.run_towards(coord, -dx, -dy, player);
            run >= WIN_LENGTH
        })
    }
}

impl Board for TTTBoard {
    type Move = Coord;

    fn is_available_move(&self, mv: Self::Move) -> bool {
        self.tiles[mv.0 as usize].is_none()
    }

    fn play(&mut self, mv: Self::Move) -> Result<(), InvalidMoveError> {
        assert!(!self.is_done(), "cannot play on done board {:?}", self);
        if self.tiles[mv.0 as usize].is_some() {
            return Err(InvalidMoveError::Occupied);
        }

        let player = self.next_player();
        self.tiles[mv.0 as usize] = Some(player);
        self.last_move = Some(mv);
        self.moves_played += 1;

        let min_plies = 2 * WIN_LENGTH as u32 - 1;
        if self.moves_played >= min_plies && self.wins_through(mv, player) {
            self.outcome = Some(Outcome::WonBy(player));
        } else if self.moves_played == (SIZE * SIZE) as u32 {
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

impl<'a> BoardMoves<'a, TTTBoard> for TTTBoard {
    type AllMovesIterator = Internal<Map<Range<u8>, fn(u8) -> Coord>>;
    type AvailableMovesIterator = BruteforceMoveIterator<'a, TTTBoard>;

    fn all_possible_moves() -> Self::AllMovesIterator {
        Coord::all().into_internal()
    }

    fn available_moves(&'a self) -> Self::AvailableMovesIterator {
        BruteforceMoveIterator::new(self)
    }
}

fn tile_to_char(tile: Option<Player>) -> char {
    match tile {
        Some(player) => player.to_char(),
        None => ' ',
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Coord({}, {})", self.x(), self.y())
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

impl Debug for TTTBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TTTBoard {{ moves_played: {}, last_move: {:?}, next_player: {:?}, outcome: {:?} }}",
            self.moves_played,
            self.last_move,
            self.next_player(),
            self.outcome,
        )
    }
}

impl Display for TTTBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "+---+")?;
        for y in 0..SIZE as u8 {
            write!(f, "|")?;
            for x in 0..SIZE as u8 {
                write!(f, "{}", tile_to_char(self.tile(Coord::from_xy(x, y))))?;
            }
            write!(f, "|")?;
            if y == 1 {
                write!(f, "   {}", self.next_player().to_char())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "+---+")?;
        Ok(())
    }
}
