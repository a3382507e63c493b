//! Play command - play a game against the computer.

use structopt::StructOpt;
use tictactotal::board::role::Role;
use tictactotal::board::Board;
use tictactotal::game::input_source::ConditionalInput;
use tictactotal::game::renderer::ConditionalStatsRenderer;
use tictactotal::input_handler::notation::EMPTY_POSITION;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short = "r", long = "role", default_value = "random")]
    pub role: Role,
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: Board,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(self.starting_position);
        run_game_loop(
            ConditionalInput {
                human_role: self.role,
            },
            ConditionalStatsRenderer {
                human_role: self.role,
            },
            config,
        );
    }
}
