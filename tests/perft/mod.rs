use connect_games::board::Board;
use connect_games::games::connect4::Connect4;
use connect_games::games::ttt::TTTBoard;
use connect_games::util::game_stats::perft;

fn test_perft<B: Board>(board: &B, all_expected: &[u64]) {
    for (depth, &expected) in all_expected.iter().enumerate() {
        assert_eq!(expected, perft(board, depth as u32), "perft mismatch at depth {}", depth);
    }
}

/// Games that end early stop counting, so the deeper counts fall below `9!`.
#[test]
fn ttt_perft() {
    test_perft(
        &TTTBoard::default(),
        &[1, 9, 72, 504, 3024, 15120, 54720, 148176],
    );
}

#[test]
fn connect4_perft() {
    test_perft(
        &Connect4::default(),
        &[1, 7, 49, 343, 2401, 16807, 117649, 823536],
    );
}

#[test]
fn perft_on_done_board() {
    let mut board = TTTBoard::default();
    for mv in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
        board
            .play(connect_games::games::ttt::Coord::from_xy(mv.0, mv.1))
            .unwrap();
    }
    assert!(board.is_done());

    assert_eq!(1, perft(&board, 0));
    assert_eq!(0, perft(&board, 3));
}
