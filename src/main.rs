use structopt::StructOpt;

use crate::cli::commands::Command;
use crate::cli::TicTacTotal;

mod cli;

fn main() {
    env_logger::init();
    TicTacTotal::from_args().execute();
}
