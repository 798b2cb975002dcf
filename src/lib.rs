#![warn(missing_debug_implementations)]

//! A [Board](crate::board::Board) abstraction for two-player grid connection games,
//! with bots that play them.
//!
//! # Features
//!
//! The implemented games are:
//! * [Connect Four](https://en.wikipedia.org/wiki/Connect_Four)
//!     as [Connect4](crate::games::connect4::Connect4), a 7x6 board with gravity.
//! * [Tic Tac Toe](https://en.wikipedia.org/wiki/Tic-tac-toe)
//!     as [TTTBoard](crate::games::ttt::TTTBoard).
//!
//! Win detection is incremental: only the four line directions through the most recently
//! placed piece are scanned, instead of rescanning the whole grid after every move.
//!
//! Utilities that work for any [Board](crate::board::Board):
//! * Game-playing algorithms, specifically:
//!     * [RandomBot](crate::ai::simple::RandomBot),
//!         which simply picks a random move.
//!     * [MiniMaxBot](crate::ai::minimax::MiniMaxBot),
//!         which picks the best move as evaluated by a customizable heuristic at a fixed
//!         depth, implemented as fail-soft alpha-beta negamax. For Connect Four the
//!         [threat-counting heuristic](crate::heuristic::connect4::Connect4ThreatHeuristic)
//!         scores depth-exhausted positions.
//!     * [SolverBot](crate::ai::solver::SolverBot),
//!         which plays outcome-optimal moves by exhausting the game tree, feasible for
//!         Tic-Tac-Toe.
//! * Board generation functions, see [board_gen](crate::util::board_gen).
//! * A bot vs bot game runner to compare playing strength, see [bot_game](crate::util::bot_game).
//! * Perft move-path counting to validate move generators, see [game_stats](crate::util::game_stats).
//!
//! # Examples
//!
//! Play a full game of Connect Four between two search bots:
//!
//! ```
//! use connect_games::ai::Bot;
//! use connect_games::ai::minimax::MiniMaxBot;
//! use connect_games::board::Board;
//! use connect_games::games::connect4::Connect4;
//! use connect_games::heuristic::connect4::Connect4ThreatHeuristic;
//!
//! let mut board = Connect4::default();
//! let mut bot = MiniMaxBot::new(4, Connect4ThreatHeuristic);
//!
//! while !board.is_done() {
//!     let mv = bot.select_move(&board);
//!     board.play(mv).unwrap();
//! }
//!
//! println!("{}", board);
//! println!("{:?}", board.outcome());
//! ```

pub mod board;

pub mod pov;
pub mod wdl;

pub mod ai;

pub mod games;

pub mod heuristic;

pub mod util;
