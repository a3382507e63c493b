use std::fmt;

/// One legal placement: a number dropped on the tile at (col, row).
/// Coordinates are 0-based with the origin at the top-left of the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Action {
    col: u8,
    row: u8,
    number: u8,
}

impl Action {
    pub fn new(col: u8, row: u8, number: u8) -> Self {
        Self { col, row, number }
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn number(&self) -> u8 {
        self.number
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on ({}, {})", self.number, self.col, self.row)
    }
}
