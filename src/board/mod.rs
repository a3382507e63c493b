pub mod action;
pub mod error;
pub mod role;

mod display;


use smallvec::SmallVec;

use action::Action;
use error::BoardError;
use role::Role;

/// Number of tiles along each side of the grid.
pub const BOARD_SIZE: u8 = 3;

/// A row, column, or diagonal summing to this value wins the game.
pub const WIN_TARGET: u8 = 13;

/// Open tiles as (col, row) pairs. Small enough to live on the stack.
pub type TileList = SmallVec<[(u8, u8); 9]>;

/// Represents the state of a Tic-Tac-Total board: a 3x3 grid of tiles, each
/// open or holding a digit 1-6, plus whose turn it is. A finished position
/// belongs to the player who moved last: `apply` passes the turn after
/// placing, so the winner of a won board is the opposite of `turn()`.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[u8; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    turn: Role,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board with the odds player to move.
    pub fn new() -> Self {
        Self {
            cells: [[0; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            turn: Role::Odds,
        }
    }

    pub fn turn(&self) -> Role {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Role) {
        self.turn = turn;
    }

    pub fn toggle_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    /// Returns the number at (col, row), or None if the tile is open.
    pub fn get(&self, col: u8, row: u8) -> Option<u8> {
        match self.cells[row as usize][col as usize] {
            0 => None,
            number => Some(number),
        }
    }

    pub fn is_open(&self, col: u8, row: u8) -> bool {
        self.cells[row as usize][col as usize] == 0
    }

    /// Places a number on an open tile, ignoring turn and ownership. Position
    /// setup for tests and notation parsing; game moves go through `apply`.
    pub fn put(&mut self, col: u8, row: u8, number: u8) -> Result<(), BoardError> {
        if col >= BOARD_SIZE || row >= BOARD_SIZE {
            return Err(BoardError::TileOutOfBoundsError { col, row });
        }
        if number < 1 || number > 6 {
            return Err(BoardError::InvalidNumberError { number });
        }
        if !self.is_open(col, row) {
            return Err(BoardError::TileOccupiedError { col, row });
        }
        self.cells[row as usize][col as usize] = number;
        Ok(())
    }

    /// Applies an action for the player to move and passes the turn.
    pub fn apply(&mut self, action: Action) -> Result<(), BoardError> {
        if self.is_win() || self.is_tie() {
            return Err(BoardError::GameOverError);
        }
        if !self.turn.owns(action.number()) {
            return Err(BoardError::NumberNotOwnedError {
                number: action.number(),
                role: self.turn,
            });
        }
        self.put(action.col(), action.row(), action.number())?;
        self.toggle_turn();
        Ok(())
    }

    /// Open tiles in priority order: lowest column first, then lowest row.
    pub fn open_tiles(&self) -> TileList {
        let mut tiles = TileList::new();
        for col in 0..BOARD_SIZE {
            for row in 0..BOARD_SIZE {
                if self.is_open(col, row) {
                    tiles.push((col, row));
                }
            }
        }
        tiles
    }

    /// Legal (action, successor) pairs for the player to move, ordered by
    /// column, then row, then number. Empty exactly when the game is over.
    pub fn transitions(&self) -> Vec<(Action, Board)> {
        if self.is_win() || self.is_tie() {
            return Vec::new();
        }

        let numbers = self.turn.numbers();
        let open_tiles = self.open_tiles();
        let mut transitions = Vec::with_capacity(open_tiles.len() * numbers.len());

        for (col, row) in open_tiles {
            for &number in numbers.iter() {
                let mut successor = self.clone();
                successor.cells[row as usize][col as usize] = number;
                successor.toggle_turn();
                transitions.push((Action::new(col, row, number), successor));
            }
        }

        transitions
    }

    /// True if any row, column, or main diagonal sums to the win target.
    pub fn is_win(&self) -> bool {
        let size = BOARD_SIZE as usize;
        for i in 0..size {
            let row_sum: u8 = (0..size).map(|col| self.cells[i][col]).sum();
            if row_sum == WIN_TARGET {
                return true;
            }
            let col_sum: u8 = (0..size).map(|row| self.cells[row][i]).sum();
            if col_sum == WIN_TARGET {
                return true;
            }
        }

        let down_sum: u8 = (0..size).map(|i| self.cells[i][i]).sum();
        let up_sum: u8 = (0..size).map(|i| self.cells[size - 1 - i][i]).sum();
        down_sum == WIN_TARGET || up_sum == WIN_TARGET
    }

    /// True if the board is full without a winning line.
    pub fn is_tie(&self) -> bool {
        !self.is_win() && self.open_tiles().is_empty()
    }

    /// The final result, if the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_win() {
            Some(Outcome::Win {
                winner: self.turn.opposite(),
            })
        } else if self.is_tie() {
            Some(Outcome::Tie)
        } else {
            None
        }
    }
}

/// How a finished game ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Win { winner: Role },
    Tie,
}
