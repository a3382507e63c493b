//! Move input parsing and validation.

use std::io;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static MOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-2])[ ,]*([0-2])[ ,]*([1-6])$").expect("MOVE_RE regex should be valid")
});

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user requested exit")]
    UserExit,
}

/// A move request read from the player.
#[derive(Debug, PartialEq, Eq)]
pub enum MoveInput {
    Place { col: u8, row: u8, number: u8 },
    UseEngine,
}

/// Reads one move from stdin. Expected format: `<col><row><number>` with
/// 0-based tile coordinates and the number to place, optionally separated by
/// spaces or commas, e.g. `0 2 5` or `025`. `quit`, `exit`, or end-of-input
/// request leaving the game.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let bytes_read = io::stdin().read_line(&mut input).map_err(|error| {
        InputError::IOError {
            error: error.to_string(),
        }
    })?;
    if bytes_read == 0 {
        return Err(InputError::UserExit);
    }

    parse_move(input.trim())
}

fn parse_move(raw: &str) -> Result<MoveInput, InputError> {
    match raw {
        "quit" | "exit" => return Err(InputError::UserExit),
        _ => (),
    }

    match MOVE_RE.captures(raw) {
        Some(caps) => Ok(MoveInput::Place {
            col: digit(&caps[1]),
            row: digit(&caps[2]),
            number: digit(&caps[3]),
        }),
        None => Err(InputError::InvalidInput {
            input: raw.to_string(),
        }),
    }
}

// capture groups are single ASCII digits by construction of MOVE_RE
fn digit(group: &str) -> u8 {
    group.as_bytes()[0] - b'0'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spaced_move() {
        assert_eq!(
            parse_move("0 2 5").unwrap(),
            MoveInput::Place {
                col: 0,
                row: 2,
                number: 5
            }
        );
    }

    #[test]
    fn test_parse_compact_move() {
        assert_eq!(
            parse_move("213").unwrap(),
            MoveInput::Place {
                col: 2,
                row: 1,
                number: 3
            }
        );
    }

    #[test]
    fn test_parse_comma_separated_move() {
        assert_eq!(
            parse_move("1, 1, 4").unwrap(),
            MoveInput::Place {
                col: 1,
                row: 1,
                number: 4
            }
        );
    }

    #[test]
    fn test_rejects_out_of_range_fields() {
        assert!(parse_move("3 0 1").is_err(), "column 3 is off the grid");
        assert!(parse_move("0 0 7").is_err(), "7 is not a playable number");
        assert!(parse_move("0 0 0").is_err(), "0 is not a playable number");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_move("").is_err());
        assert!(parse_move("a1b2").is_err());
        assert!(parse_move("0 2").is_err());
    }

    #[test]
    fn test_quit_requests_exit() {
        assert!(matches!(parse_move("quit"), Err(InputError::UserExit)));
        assert!(matches!(parse_move("exit"), Err(InputError::UserExit)));
    }
}
