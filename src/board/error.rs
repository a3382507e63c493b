use thiserror::Error;

use crate::board::role::Role;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("tile ({col:?}, {row:?}) is out of bounds")]
    TileOutOfBoundsError { col: u8, row: u8 },
    #[error("tile ({col:?}, {row:?}) is already occupied")]
    TileOccupiedError { col: u8, row: u8 },
    #[error("{number:?} is not a playable number, expected 1-6")]
    InvalidNumberError { number: u8 },
    #[error("the {role} player cannot place {number:?}")]
    NumberNotOwnedError { number: u8, role: Role },
    #[error("cannot place a number, the game is already over")]
    GameOverError,
}
