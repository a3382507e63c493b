use std::time::Duration;

use crate::board::action::Action;
use crate::board::error::BoardError;
use crate::board::{Board, Outcome};
use crate::input_handler::MoveInput;
use crate::searcher::{Score, Searcher};
use thiserror::Error;

/// Core engine state and configuration
#[derive(Clone)]
pub struct EngineConfig {
    pub starting_position: Board,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_position: Board::default(),
        }
    }
}

/// Game state and runtime info
#[derive(Clone)]
pub struct GameState {
    board: Board,
    move_history: Vec<Action>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

impl GameState {
    fn new(starting_position: Board) -> Self {
        Self {
            board: starting_position,
            move_history: Vec::new(),
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Board error: {error:?}")]
    BoardError { error: BoardError },
    #[error("No moves available, the game is already over")]
    NoAvailableMoves,
}

/// The main engine that manages game state and provides move selection
pub struct Engine {
    state: GameState,
    searcher: Searcher,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: GameState::new(config.starting_position),
            searcher: Searcher::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn check_game_over(&self) -> Option<Outcome> {
        self.state.board.outcome()
    }

    pub fn valid_actions(&self) -> Vec<Action> {
        self.state
            .board
            .transitions()
            .into_iter()
            .map(|(action, _)| action)
            .collect()
    }

    pub fn make_move(&mut self, action: Action) -> Result<Action, EngineError> {
        self.state
            .board
            .apply(action)
            .map_err(|error| EngineError::BoardError { error })?;

        self.state.move_history.push(action);
        Ok(action)
    }

    pub fn make_best_move(&mut self) -> Result<Action, EngineError> {
        let best_action = self
            .searcher
            .choose(&self.state.board)
            .ok_or(EngineError::NoAvailableMoves)?;
        self.make_move(best_action)
    }

    pub fn make_move_from_input(&mut self, input: MoveInput) -> Result<Action, EngineError> {
        match input {
            MoveInput::Place { col, row, number } => self.make_move(Action::new(col, row, number)),
            MoveInput::UseEngine => self.make_best_move(),
        }
    }

    pub fn last_move(&self) -> Option<Action> {
        self.state.move_history.last().copied()
    }

    pub fn search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.searcher.searched_position_count(),
            last_score: self.searcher.last_score(),
            last_search_duration: self.searcher.last_search_duration(),
        }
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub last_score: Option<Score>,
    pub last_search_duration: Option<Duration>,
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::role::Role;
    use crate::t3_position;

    #[test]
    fn test_engine_finds_the_win_in_1() {
        let mut starting_position = t3_position! {
            6 . .
            5 . .
            . . 2
        };
        starting_position.set_turn(Role::Evens);

        let mut engine = Engine::with_config(EngineConfig { starting_position });

        let action = engine.make_best_move().unwrap();
        assert_eq!(action, Action::new(0, 2, 2), "{} does not win the game", action);
        assert_eq!(
            engine.check_game_over(),
            Some(Outcome::Win {
                winner: Role::Evens
            })
        );
    }

    #[test]
    fn test_engine_rejects_illegal_input() {
        let mut engine = Engine::new();
        let result = engine.make_move_from_input(MoveInput::Place {
            col: 0,
            row: 0,
            number: 2,
        });
        assert!(result.is_err(), "odds cannot open with an even number");
        assert_eq!(engine.last_move(), None);
    }

    #[test]
    fn test_engine_tracks_move_history_and_stats() {
        let mut engine = Engine::new();
        assert_eq!(engine.search_stats().positions_searched, 0);

        engine.make_move(Action::new(0, 0, 1)).unwrap();
        assert_eq!(engine.last_move(), Some(Action::new(0, 0, 1)));
        assert_eq!(engine.valid_actions().len(), 8 * 3);
    }
}
