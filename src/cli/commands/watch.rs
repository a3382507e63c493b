//! Watch command - watch the computer play against itself.

use std::time::Duration;

use structopt::StructOpt;
use tictactotal::board::Board;
use tictactotal::game::input_source::EngineInput;
use tictactotal::game::renderer::StatsRenderer;
use tictactotal::input_handler::notation::EMPTY_POSITION;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "1000")]
    pub delay: u64,
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: Board,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.starting_position);
        run_game_loop(
            EngineInput,
            StatsRenderer {
                delay_between_moves: Some(Duration::from_millis(self.delay)),
            },
            config,
        );
    }
}
