//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a
//! window [alpha, beta] of scores that still matter along the current path.
//! Subtrees that provably fall outside the window are skipped. The game trees
//! searched here are small and fully enumerable, so the search is exhaustive
//! and exact: no evaluation heuristic, no depth cutoff, no caching.
//!
//! # Tie-breaking
//!
//! Outcomes are ordered by utility first, then by terminal depth: among equal
//! utilities, the smaller signed tie-break wins for either role, which delays
//! losses and hastens wins. All comparisons are strict, so among fully equal
//! outcomes the first action in the state's transition order is kept. The
//! pruning condition compares utilities only, never tie-breaks, which keeps
//! the chosen utility identical to an unpruned minimax.
//!
//! # Immediate wins
//!
//! Before recursing, each node scans its transitions for one that finishes
//! the game as a win. The first such move is returned without searching the
//! siblings: no deeper line can beat a win on the spot for the mover.

use std::time::{Duration, Instant};

use log::debug;

use super::score::Score;
use super::traits::GameState;

/// Exact minimax searcher with alpha-beta pruning. Holds no search state
/// between decisions, only observability counters for the last one.
pub struct Searcher {
    searched_position_count: usize,
    last_score: Option<Score>,
    last_duration: Option<Duration>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    pub fn new() -> Self {
        Self {
            searched_position_count: 0,
            last_score: None,
            last_duration: None,
        }
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    pub fn last_score(&self) -> Option<Score> {
        self.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.last_duration
    }

    fn reset_stats(&mut self) {
        self.searched_position_count = 0;
        self.last_score = None;
        self.last_duration = None;
    }

    /// Selects the optimal action for the player to move, under the
    /// utility / terminal-depth / earliest-move tie-break order. Returns
    /// `None` when the position is already decided.
    pub fn choose<S: GameState>(&mut self, state: &S) -> Option<S::Action> {
        if state.is_win() || state.is_tie() {
            return None;
        }

        self.reset_stats();
        let start = Instant::now();

        let (score, action) = self.minimax(state, 0, Score::MIN, Score::MAX, true);

        self.last_score = Some(score);
        self.last_duration = Some(start.elapsed());
        debug!(
            "chose {:?} scoring {} after searching {} positions",
            action, score, self.searched_position_count
        );

        action
    }

    fn minimax<S: GameState>(
        &mut self,
        state: &S,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> (Score, Option<S::Action>) {
        self.searched_position_count += 1;

        // A decided position belongs to the player who produced it: the
        // opponent of whoever is nominally to move here.
        if state.is_win() {
            let utility = if maximizing { -1 } else { 1 };
            return (
                Score::new(utility, terminal_tie_break(depth, maximizing)),
                None,
            );
        }
        if state.is_tie() {
            return (
                Score::new(0, terminal_tie_break(depth, maximizing)),
                None,
            );
        }

        let transitions = state.transitions();

        for (action, successor) in transitions.iter() {
            if successor.is_win() {
                let utility = if maximizing { 1 } else { -1 };
                return (Score::new(utility, i16::from(depth)), Some(action.clone()));
            }
        }

        let mut best = if maximizing { Score::MIN } else { Score::MAX };
        let mut best_action = None;

        for (action, successor) in transitions {
            let (score, _) = self.minimax(&successor, depth + 1, alpha, beta, !maximizing);

            if score.improves(&best, maximizing) {
                best = score;
                best_action = Some(action);
            }

            if maximizing {
                if score.improves(&alpha, true) {
                    alpha = score;
                }
            } else if score.improves(&beta, false) {
                beta = score;
            }

            // Pruning compares utilities only, never tie-breaks.
            if alpha.utility() >= beta.utility() {
                break;
            }
        }

        (best, best_action)
    }
}

fn terminal_tie_break(depth: u8, maximizing: bool) -> i16 {
    if maximizing {
        -i16::from(depth)
    } else {
        i16::from(depth)
    }
}
