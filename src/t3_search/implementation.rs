//! Board-backed implementation of the search trait.

use crate::board::action::Action;
use crate::board::Board;
use crate::searcher::GameState;

impl GameState for Board {
    type Action = Action;

    #[inline]
    fn is_win(&self) -> bool {
        Board::is_win(self)
    }

    #[inline]
    fn is_tie(&self) -> bool {
        Board::is_tie(self)
    }

    #[inline]
    fn transitions(&self) -> Vec<(Action, Board)> {
        Board::transitions(self)
    }
}
