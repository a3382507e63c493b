//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, play::PlayArgs, pvp::PvpArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "tictactotal",
    about = "A Tic-Tac-Total engine that plays perfectly using alpha-beta minimax search"
)]
pub enum TicTacTotal {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which will search the full game tree for the optimal move. Your side will be chosen at random unless you specify one with `--role`. The initial position can be specified in position notation with `--position` (default: empty board, odds to move)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine. The initial position can be specified in position notation with `--position` (default: empty board, odds to move)."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself, pausing `--delay` milliseconds between moves. The initial position can be specified in position notation with `--position` (default: empty board, odds to move)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Use the engine to determine the optimal move from a given position, provided in position notation with `--position` (required)."
    )]
    BestMove(BestMoveArgs),
}

impl crate::cli::commands::Command for TicTacTotal {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
            BestMove(cmd),
        }
    }
}
