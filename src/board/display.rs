use super::{Board, BOARD_SIZE};
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "    0   1   2")?;
        writeln!(f, "  ┌───┬───┬───┐")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{} │", row)?;
            for col in 0..BOARD_SIZE {
                match self.get(col, row) {
                    Some(number) => write!(f, " {} │", number)?,
                    None => write!(f, " · │")?,
                }
            }
            writeln!(f)?;
            if row + 1 < BOARD_SIZE {
                writeln!(f, "  ├───┼───┼───┤")?;
            } else {
                writeln!(f, "  └───┴───┴───┘")?;
            }
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! t3_position {
    ($($tile:tt)*) => {{
        let mut board = Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let tiles: Vec<_> = stringify!($($tile)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 9 tiles
        assert_eq!(tiles.len(), 9, "Invalid number of tiles. Expected 9, got {}", tiles.len());
        // Iterate over the characters and fill the grid, top-left to bottom-right.
        for (i, &c) in tiles.iter().enumerate() {
            if c != '.' {
                let number = c.to_digit(10).expect("tile must be a digit or `.`") as u8;
                let col = (i % 3) as u8;
                let row = (i / 3) as u8;
                board
                    .put(col, row, number)
                    .expect("tile placement should succeed");
            }
        }
        board
    }};
}
