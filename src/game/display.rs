use crate::board::action::Action;
use crate::board::role::Role;
use crate::board::Board;
use std::fmt::Write;
use termion::{clear, cursor};

pub struct GameDisplay {
    buffer: String,
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(1024),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All).unwrap();
    }

    pub fn render_game_state(
        &mut self,
        board: &Board,
        current_turn: Role,
        last_move: Option<Action>,
        stats: Option<&str>,
    ) {
        self.clear();

        write!(self.buffer, "{}", board).unwrap();

        // Game info
        let numbers = current_turn
            .numbers()
            .iter()
            .map(|number| number.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.buffer
            .push_str(&format!("\nTurn: {} (plays {})\n", current_turn, numbers));

        if let Some(action) = last_move {
            self.buffer.push_str(&format!("Last move: {}\n", action));
        }

        if let Some(stats) = stats {
            self.buffer.push_str(&format!("\n{}\n", stats));
        }

        // Print the complete frame
        print!("{}", self.buffer);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}
