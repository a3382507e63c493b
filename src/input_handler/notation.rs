//! Compact position notation parsing and serialization.
//!
//! A position is written as three '/'-separated rows of three characters,
//! each `1`-`6` or `.` for an open tile, followed by the side to move
//! (`o` for odds, `e` for evens). The empty starting position is
//! `.../.../... o`.

use std::str::FromStr;

use crate::board::error::BoardError;
use crate::board::role::Role;
use crate::board::{Board, BOARD_SIZE};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotationParseError {
    #[error("Wrong number of fields")]
    WrongNumberOfFields,
    #[error("Wrong number of rows: 3 expected, {row_count:?} given")]
    InvalidRowCount { row_count: usize },
    #[error("Row has the wrong length: {invalid_row:?}")]
    InvalidRowLength { invalid_row: String },
    #[error("Invalid tile character: {invalid_character:?}")]
    InvalidTileCharacter { invalid_character: char },
    #[error("Invalid side to move: {invalid_side:?}")]
    InvalidSideToMove { invalid_side: String },
    #[error("Error placing number: {board_error:?}")]
    ErrorPlacingNumber { board_error: BoardError },
}

type NotationResult<T> = Result<T, NotationParseError>;

pub const EMPTY_POSITION: &str = ".../.../... o";

/// Parses position notation into a Board.
pub fn parse_notation(notation: &str) -> NotationResult<Board> {
    let parts: Vec<&str> = notation.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(NotationParseError::WrongNumberOfFields);
    }

    let mut board = Board::new();
    parse_rows(&mut board, parts[0])?;
    parse_side_to_move(&mut board, parts[1])?;

    Ok(board)
}

fn parse_rows(board: &mut Board, rows: &str) -> NotationResult<()> {
    let rows: Vec<&str> = rows.split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(NotationParseError::InvalidRowCount {
            row_count: rows.len(),
        });
    }

    for (row, row_str) in rows.iter().enumerate() {
        if row_str.chars().count() != BOARD_SIZE as usize {
            return Err(NotationParseError::InvalidRowLength {
                invalid_row: row_str.to_string(),
            });
        }
        for (col, c) in row_str.chars().enumerate() {
            match c {
                '.' => (),
                '1'..='6' => {
                    let number = c as u8 - b'0';
                    board
                        .put(col as u8, row as u8, number)
                        .map_err(|board_error| NotationParseError::ErrorPlacingNumber {
                            board_error,
                        })?;
                }
                _ => {
                    return Err(NotationParseError::InvalidTileCharacter {
                        invalid_character: c,
                    })
                }
            }
        }
    }

    Ok(())
}

fn parse_side_to_move(board: &mut Board, side: &str) -> NotationResult<()> {
    match side {
        "o" => board.set_turn(Role::Odds),
        "e" => board.set_turn(Role::Evens),
        _ => {
            return Err(NotationParseError::InvalidSideToMove {
                invalid_side: side.to_string(),
            })
        }
    }

    Ok(())
}

/// Serializes a Board back into position notation.
pub fn serialize_notation(board: &Board) -> String {
    let mut rows = Vec::with_capacity(BOARD_SIZE as usize);
    for row in 0..BOARD_SIZE {
        let mut row_str = String::with_capacity(BOARD_SIZE as usize);
        for col in 0..BOARD_SIZE {
            match board.get(col, row) {
                Some(number) => row_str.push((b'0' + number) as char),
                None => row_str.push('.'),
            }
        }
        rows.push(row_str);
    }

    let side = match board.turn() {
        Role::Odds => 'o',
        Role::Evens => 'e',
    };

    format!("{} {}", rows.join("/"), side)
}

impl FromStr for Board {
    type Err = NotationParseError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        parse_notation(notation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_position() {
        let board = parse_notation(EMPTY_POSITION).unwrap();
        assert_eq!(board.open_tiles().len(), 9);
        assert_eq!(board.turn(), Role::Odds);
    }

    #[test]
    fn test_parse_midgame_position() {
        let board = parse_notation("5../.1./..6 e").unwrap();
        assert_eq!(board.get(0, 0), Some(5));
        assert_eq!(board.get(1, 1), Some(1));
        assert_eq!(board.get(2, 2), Some(6));
        assert_eq!(board.open_tiles().len(), 6);
        assert_eq!(board.turn(), Role::Evens);
    }

    #[test]
    fn test_parse_rejects_missing_side_to_move() {
        assert!(matches!(
            parse_notation("5../.1./..6"),
            Err(NotationParseError::WrongNumberOfFields)
        ));
    }

    #[test]
    fn test_parse_rejects_wrong_row_count() {
        assert!(matches!(
            parse_notation("5../.1. o"),
            Err(NotationParseError::InvalidRowCount { row_count: 2 })
        ));
    }

    #[test]
    fn test_parse_rejects_a_long_row() {
        assert!(matches!(
            parse_notation("5.../.1./..6 o"),
            Err(NotationParseError::InvalidRowLength { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_bad_tile_characters() {
        assert!(matches!(
            parse_notation("7../.1./..6 o"),
            Err(NotationParseError::InvalidTileCharacter {
                invalid_character: '7'
            })
        ));
        assert!(matches!(
            parse_notation("x../.1./..6 o"),
            Err(NotationParseError::InvalidTileCharacter {
                invalid_character: 'x'
            })
        ));
    }

    #[test]
    fn test_parse_rejects_a_bad_side_to_move() {
        assert!(matches!(
            parse_notation("5../.1./..6 w"),
            Err(NotationParseError::InvalidSideToMove { .. })
        ));
    }

    #[test]
    fn test_serialize_midgame_position() {
        let board = parse_notation("5../.1./..6 e").unwrap();
        assert_eq!(serialize_notation(&board), "5../.1./..6 e");
    }

    #[test]
    fn test_serialize_empty_position() {
        assert_eq!(serialize_notation(&Board::new()), EMPTY_POSITION);
    }
}
