//! Core trait for generic alpha-beta search.

use std::fmt::Debug;

/// Capability view of a two-player, zero-sum, perfect-information game
/// position. The searcher never inspects the position itself; everything it
/// needs is behind these three methods, so it can be exercised against
/// synthetic trees in tests as well as real boards.
pub trait GameState: Sized {
    /// Identifies one legal move. The searcher only stores and returns
    /// actions, never looks inside them.
    type Action: Clone + PartialEq + Debug;

    /// Returns true if the position, as given, is already won — by whichever
    /// player moved last to produce it.
    fn is_win(&self) -> bool;

    /// Returns true if the position is a finished game with no winner.
    /// Mutually exclusive with `is_win`.
    fn is_tie(&self) -> bool;

    /// Legal (action, successor) pairs for the player to move, in priority
    /// order: among otherwise equal outcomes, the earliest entry wins.
    /// Empty exactly when the position is a win or a tie.
    fn transitions(&self) -> Vec<(Self::Action, Self)>;
}
