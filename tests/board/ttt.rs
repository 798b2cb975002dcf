use connect_games::board::{Board, InvalidMoveError, Outcome, Player};
use connect_games::games::ttt::{Coord, TTTBoard};
use connect_games::util::board_gen::board_with_moves;
use connect_games::util::tiny::consistent_rng;

use crate::board::board_test_main;

fn moves(xys: &[(u8, u8)]) -> Vec<Coord> {
    xys.iter().map(|&(x, y)| Coord::from_xy(x, y)).collect()
}

#[test]
fn empty() {
    board_test_main(&TTTBoard::default());
}

#[test]
fn one_move() {
    let mut board = TTTBoard::default();
    board.play(Coord::from_xy(1, 0)).unwrap();

    assert_eq!(Some(Player::A), board.tile(Coord::from_xy(1, 0)));
    assert_eq!(Some(Coord::from_xy(1, 0)), board.last_move());
    board_test_main(&board);
}

#[test]
fn occupied_rejected() {
    let mut board = TTTBoard::default();
    board.play(Coord::from_xy(1, 1)).unwrap();

    assert_eq!(
        Err(InvalidMoveError::Occupied),
        board.clone_and_play(Coord::from_xy(1, 1))
    );
}

/// A wins the moment the third cell of the top row is filled, not any earlier.
#[test]
fn top_row_win_lands_on_third_piece() {
    let moves = moves(&[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]);

    let mut board = TTTBoard::default();
    for (i, &mv) in moves.iter().enumerate() {
        assert_eq!(None, board.outcome(), "game over after only {} plies", i);
        board.play(mv).unwrap();
    }

    assert_eq!(Some(Outcome::WonBy(Player::A)), board.outcome());
    board_test_main(&board);
}

#[test]
fn column_win() {
    let board = board_with_moves(TTTBoard::default(), &moves(&[(0, 0), (1, 2), (0, 1), (1, 1), (0, 2)]));

    assert_eq!(Some(Outcome::WonBy(Player::A)), board.outcome());
    board_test_main(&board);
}

#[test]
fn diagonal_win() {
    let board = board_with_moves(TTTBoard::default(), &moves(&[(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)]));

    assert_eq!(Some(Outcome::WonBy(Player::A)), board.outcome());
}

#[test]
fn full_board_draw() {
    let board = board_with_moves(
        TTTBoard::default(),
        &moves(&[
            (0, 0),
            (1, 1),
            (2, 0),
            (1, 0),
            (1, 2),
            (0, 1),
            (2, 1),
            (2, 2),
            (0, 2),
        ]),
    );

    assert_eq!(Some(Outcome::Draw), board.outcome());
    assert_eq!(9, board.game_length());
    assert!(board.is_full());
    board_test_main(&board);
}

/// The last-move-centered win scan must agree with checking all 8 lines.
#[test]
fn outcome_matches_brute_force() {
    let mut rng = consistent_rng();

    for _ in 0..200 {
        let mut board = TTTBoard::default();
        loop {
            assert_eq!(
                winner_brute_force(&board),
                board.outcome(),
                "win scan mismatch on\n{}",
                board
            );

            match board.random_available_move(&mut rng) {
                Some(mv) if !board.is_done() => board.play(mv).unwrap(),
                _ => break,
            }
        }
    }
}

/// Reference implementation: check all 8 possible lines.
fn winner_brute_force(board: &TTTBoard) -> Option<Outcome> {
    const LINES: [[(u8, u8); 3]; 8] = [
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(2, 0), (1, 1), (0, 2)],
    ];

    for line in &LINES {
        let first = board.tile(Coord::from_xy(line[0].0, line[0].1));
        if first.is_some()
            && line
                .iter()
                .all(|&(x, y)| board.tile(Coord::from_xy(x, y)) == first)
        {
            return Some(Outcome::WonBy(first.unwrap()));
        }
    }

    if board.game_length() == 9 {
        Some(Outcome::Draw)
    } else {
        None
    }
}
