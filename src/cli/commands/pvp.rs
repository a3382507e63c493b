//! Pvp command - play a game against another human.

use structopt::StructOpt;
use tictactotal::board::Board;
use tictactotal::game::input_source::HumanInput;
use tictactotal::game::renderer::SimpleRenderer;
use tictactotal::input_handler::notation::EMPTY_POSITION;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: Board,
}

impl Command for PvpArgs {
    fn execute(self) {
        let config = create_config(self.starting_position);
        run_game_loop(HumanInput, SimpleRenderer, config);
    }
}
