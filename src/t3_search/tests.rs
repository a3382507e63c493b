//! Scenario tests for the searcher on real Tic-Tac-Total positions.

use crate::board::action::Action;
use crate::board::role::Role;
use crate::board::{Board, Outcome};
use crate::searcher::{GameState, Searcher};
use crate::t3_position;

/// Plain minimax over utilities with no pruning, as a reference.
fn exhaustive_utility<S: GameState>(state: &S, maximizing: bool) -> i8 {
    if state.is_win() {
        return if maximizing { -1 } else { 1 };
    }
    if state.is_tie() {
        return 0;
    }

    let child_utilities = state
        .transitions()
        .into_iter()
        .map(|(_, successor)| exhaustive_utility(&successor, !maximizing));

    if maximizing {
        child_utilities.max().expect("non-terminal states have transitions")
    } else {
        child_utilities.min().expect("non-terminal states have transitions")
    }
}

#[test]
fn test_no_action_on_a_won_board() {
    let board = t3_position! {
        6 5 2
        . . .
        . . .
    };
    let mut searcher = Searcher::new();
    assert_eq!(searcher.choose(&board), None);
}

#[test]
fn test_no_action_on_a_tied_board() {
    let board = t3_position! {
        1 2 1
        2 1 2
        2 1 1
    };
    let mut searcher = Searcher::new();
    assert_eq!(searcher.choose(&board), None);
}

#[test]
fn test_takes_the_winning_placement() {
    // Evens completes the first column: 6 + 5 + 2.
    let mut board = t3_position! {
        6 . .
        5 . .
        . . 2
    };
    board.set_turn(Role::Evens);

    let mut searcher = Searcher::new();
    assert_eq!(
        searcher.choose(&board),
        Some(Action::new(0, 2, 2)),
        "the immediate win should be taken without exploring other lines"
    );
    let score = searcher.last_score().expect("score is recorded after a search");
    assert_eq!(score.utility(), 1);
    assert_eq!(score.tie_break(), 0, "a win found at the root carries the root depth");
}

#[test]
fn test_forced_loss_still_yields_a_legal_action() {
    // Whatever odds places on the top row, evens completes it to 13.
    let board = t3_position! {
        . . 6
        1 1 2
        1 2 2
    };

    let mut searcher = Searcher::new();
    let action = searcher.choose(&board).expect("a live position yields an action");
    assert!(
        board.transitions().iter().any(|(a, _)| *a == action),
        "chosen action must be legal"
    );

    let score = searcher.last_score().expect("score is recorded after a search");
    assert_eq!(score.utility(), -1, "every odds line loses to the row-0 reply");
}

#[test]
fn test_tie_only_continuation_keeps_the_earliest_action() {
    // Only the center is open, and no center placement completes a line.
    let board = t3_position! {
        1 2 1
        2 . 2
        2 1 1
    };

    let mut searcher = Searcher::new();
    assert_eq!(
        searcher.choose(&board),
        Some(Action::new(1, 1, 1)),
        "equal tie outcomes should keep the lowest number at the tile"
    );
    let score = searcher.last_score().expect("score is recorded after a search");
    assert_eq!(score.utility(), 0);
}

#[test]
fn test_pruned_utility_matches_exhaustive_minimax_on_boards() {
    let mut midgame = t3_position! {
        1 2 .
        . 5 2
        . . 6
    };
    midgame.set_turn(Role::Odds);

    let mut forced_loss = t3_position! {
        . . 6
        1 1 2
        1 2 2
    };
    forced_loss.set_turn(Role::Odds);

    let mut last_tile = t3_position! {
        1 2 1
        2 . 2
        2 1 1
    };
    last_tile.set_turn(Role::Odds);

    for board in [midgame, forced_loss, last_tile].iter() {
        let expected = exhaustive_utility(board, true);
        let mut searcher = Searcher::new();
        searcher.choose(board).expect("positions under test are live");
        let score = searcher.last_score().expect("score is recorded after a search");
        assert_eq!(score.utility(), expected);
    }
}

#[test]
fn test_identical_boards_produce_identical_actions() {
    let mut board = t3_position! {
        1 2 .
        . 5 2
        . . 6
    };
    board.set_turn(Role::Odds);

    let mut first = Searcher::new();
    let mut second = Searcher::new();
    assert_eq!(first.choose(&board), second.choose(&board));
}

#[test]
fn test_optimal_playout_matches_the_root_score() {
    let mut board = t3_position! {
        1 2 .
        . 5 2
        . . 6
    };
    board.set_turn(Role::Odds);
    let root_turn = board.turn();

    let mut searcher = Searcher::new();
    let root_utility = {
        searcher.choose(&board).expect("position under test is live");
        searcher
            .last_score()
            .expect("score is recorded after a search")
            .utility()
    };

    let mut move_count = 0;
    while board.outcome().is_none() {
        let action = searcher.choose(&board).expect("live positions yield an action");
        board.apply(action).unwrap();
        move_count += 1;
        assert!(move_count <= 9, "playout should finish within the open tiles");
    }

    match board.outcome().expect("playout ended") {
        Outcome::Win { winner } => match root_utility {
            1 => assert_eq!(winner, root_turn, "a +1 root means the root mover wins"),
            -1 => assert_eq!(winner, root_turn.opposite()),
            _ => panic!("a tie-scored game should not produce a winner"),
        },
        Outcome::Tie => assert_eq!(root_utility, 0),
    }
}
