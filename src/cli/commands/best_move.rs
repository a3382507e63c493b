//! Best-move command - print the optimal move for a position.

use structopt::StructOpt;
use tictactotal::board::Board;
use tictactotal::input_handler::notation::serialize_notation;
use tictactotal::searcher::Searcher;

use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(long = "position")]
    pub position: Board,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let mut searcher = Searcher::new();
        match searcher.choose(&self.position) {
            Some(action) => {
                print!("{}", self.position);
                println!("Position: {}", serialize_notation(&self.position));
                println!("Best move: {}", action);
                if let Some(score) = searcher.last_score() {
                    println!("Score: {}", score);
                }
                println!("Positions searched: {}", searcher.searched_position_count());
            }
            None => println!("The game is already over"),
        }
    }
}
