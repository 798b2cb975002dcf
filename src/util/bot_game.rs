//! Run bots against each other and report the results.
use itertools::Itertools;

use crate::ai::Bot;
use crate::board::{Board, Player};
use crate::pov::NonPov;
use crate::wdl::WDL;

/// The result of a [run], everything from the POV of the first bot.
#[derive(Debug)]
pub struct BotGameResult {
    pub game_count: u32,
    pub wdl_l: WDL<u32>,
    pub average_game_length: f32,
}

/// Run `bot_l` against `bot_r`, playing `games_per_side * 2` games in total so both
/// bots play each side equally often. Games are played sequentially, the bots run to
/// completion on every move.
pub fn run<B: Board, L: Bot<B>, R: Bot<B>>(
    start: impl Fn() -> B,
    bot_l: &mut L,
    bot_r: &mut R,
    games_per_side: u32,
) -> BotGameResult {
    let mut wdl_l = WDL::<u32>::default();
    let mut total_moves = 0u32;

    let pairings = (0..games_per_side).cartesian_product([false, true]).collect_vec();
    let game_count = pairings.len() as u32;

    for (_, flip) in pairings {
        let player_l = if flip { Player::B } else { Player::A };

        let mut board = start();
        while !board.is_done() {
            let mv = if board.next_player() == player_l {
                bot_l.select_move(&board)
            } else {
                bot_r.select_move(&board)
            };
            board.play(mv).unwrap();
            total_moves += 1;
        }

        wdl_l += board.outcome().unwrap().pov(player_l).to_wdl();
    }

    BotGameResult {
        game_count,
        wdl_l,
        average_game_length: total_moves as f32 / game_count as f32,
    }
}
