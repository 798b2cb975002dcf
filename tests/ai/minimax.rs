use internal_iterator::InternalIterator;

use connect_games::ai::minimax::{minimax, minimax_value, Heuristic, MiniMaxBot};
use connect_games::ai::simple::RandomBot;
use connect_games::ai::solver::SolverHeuristic;
use connect_games::ai::Bot;
use connect_games::board::Board;
use connect_games::games::connect4::Connect4;
use connect_games::games::ttt::TTTBoard;
use connect_games::heuristic::connect4::Connect4ThreatHeuristic;
use connect_games::util::board_gen::{board_with_moves, random_board_with_moves};
use connect_games::util::bot_game;
use connect_games::util::tiny::consistent_rng;

/// Reference implementation: full-width negamax without pruning or move ordering.
fn plain_negamax<B: Board, H: Heuristic<B>>(heuristic: &H, board: &B, length: u32, depth_left: u32) -> H::V {
    if board.is_done() || depth_left == 0 {
        return heuristic.value(board, length);
    }

    board
        .available_moves()
        .map(|mv: B::Move| -plain_negamax(heuristic, &board.clone_and_play(mv).unwrap(), length + 1, depth_left - 1))
        .max()
        .unwrap()
}

/// Pruning and move ordering must never change the value at the root.
#[test]
fn pruning_preserves_value_ttt() {
    let board = TTTBoard::default();

    for depth in 0..=9 {
        assert_eq!(
            plain_negamax(&SolverHeuristic, &board, 0, depth),
            minimax_value(&board, &SolverHeuristic, depth),
            "value mismatch at depth {}",
            depth
        );
    }
}

#[test]
fn pruning_preserves_value_connect4() {
    let mut rng = consistent_rng();

    for _ in 0..20 {
        let board = random_board_with_moves(&Connect4::default(), 8, &mut rng);

        for depth in 0..=4 {
            assert_eq!(
                plain_negamax(&Connect4ThreatHeuristic, &board, 0, depth),
                minimax_value(&board, &Connect4ThreatHeuristic, depth),
                "value mismatch at depth {} on\n{}",
                depth,
                board
            );
        }
    }
}

/// Both columns 1 and 5 finish the line, the first one found wins the tie.
#[test]
fn finds_immediate_win() {
    let board = board_with_moves(Connect4::default(), &[2, 0, 3, 0, 4, 0]);

    for depth in [1, 4] {
        let result = minimax(&board, &Connect4ThreatHeuristic, depth);
        assert_eq!(Some(1), result.best_move, "wrong move at depth {}", depth);

        let child = board.clone_and_play(1).unwrap();
        assert!(child.is_done());
    }
}

/// With three opponent pieces stacked in column 6 the only non-losing move is to block.
#[test]
fn blocks_immediate_loss() {
    let board = board_with_moves(Connect4::default(), &[0, 6, 1, 6, 0, 6]);

    for depth in [2, 4] {
        let result = minimax(&board, &Connect4ThreatHeuristic, depth);
        assert_eq!(Some(6), result.best_move, "wrong move at depth {}", depth);
    }
}

#[test]
fn depth_zero_reports_no_move() {
    let board = Connect4::default();
    let result = minimax(&board, &Connect4ThreatHeuristic, 0);

    assert_eq!(None, result.best_move);
    assert_eq!(0, result.value);
}

#[test]
#[should_panic]
fn bot_requires_positive_depth() {
    let _ = MiniMaxBot::<Connect4, _>::new(0, Connect4ThreatHeuristic);
}

#[test]
#[should_panic]
fn bot_rejects_done_board() {
    let board = board_with_moves(Connect4::default(), &[1, 2, 1, 2, 1, 2, 1]);
    assert!(board.is_done());

    let _ = MiniMaxBot::new(4, Connect4ThreatHeuristic).select_move(&board);
}

/// A shallow minimax search should comfortably beat random play from both sides.
#[test]
fn minimax_beats_random() {
    let result = bot_game::run(
        Connect4::default,
        &mut MiniMaxBot::new(4, Connect4ThreatHeuristic),
        &mut RandomBot::new(consistent_rng()),
        10,
    );

    println!("{:?}", result);
    assert_eq!(result.game_count, result.wdl_l.sum());
    assert!(
        result.wdl_l.win > result.wdl_l.loss,
        "minimax lost to random play: {:?}",
        result.wdl_l
    );
}
