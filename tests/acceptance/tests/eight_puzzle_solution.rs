//! Eight-puzzle acceptance tests: the canonical five-move scenario,
//! optimality, path reconstruction, determinism, and exhaustion on an
//! unsolvable configuration.

use wavefront_harness::worlds::eight_puzzle::{Board, EightPuzzle};
use wavefront_search::contract::SearchProblem;
use wavefront_search::report::TerminationReasonV1;
use wavefront_search::search::{graph_search, tree_search};

fn canonical_problem() -> EightPuzzle {
    let initial = Board::from_rows(["312", "065", "748"]).expect("valid board");
    EightPuzzle::new(initial)
}

// ---------------------------------------------------------------------------
// Canonical scenario
// ---------------------------------------------------------------------------

#[test]
fn canonical_configuration_solves_in_five_moves() {
    let problem = canonical_problem();
    let result = graph_search(&problem).expect("configuration is solvable");

    assert_eq!(result.solution_depth(), 5, "known minimum for this board");

    let path = result.solution_path();
    assert_eq!(path.len(), 6, "five actions span six states");
    assert_eq!(
        path.last().unwrap().state.to_string(),
        "012\n345\n678",
        "final state must render exactly as the goal"
    );

    // Tie-breaking is fixed by the action enumeration order, so the exact
    // move sequence is reproducible.
    let tiles: Vec<u8> = path.iter().filter_map(|s| s.action).map(|a| a.tile).collect();
    assert_eq!(tiles, vec![6, 4, 7, 6, 3]);
}

#[test]
fn canonical_path_is_linked_by_result() {
    let problem = canonical_problem();
    let result = graph_search(&problem).expect("configuration is solvable");
    let path = result.solution_path();

    assert_eq!(*path[0].state, problem.initial());
    assert_eq!(path[0].action, None, "root step must carry no action");
    assert!(problem.is_goal(path.last().unwrap().state));

    for window in path.windows(2) {
        let action = window[1].action.expect("non-root steps carry an action");
        assert_eq!(
            problem.result(window[0].state, action),
            *window[1].state,
            "consecutive path states must be linked by result()"
        );
    }
}

#[test]
fn one_move_configuration_solves_with_single_slide() {
    let initial = Board::from_rows(["312", "045", "678"]).expect("valid board");
    let problem = EightPuzzle::new(initial);

    for result in [tree_search(&problem), graph_search(&problem)] {
        let result = result.expect("configuration is solvable");
        assert_eq!(result.solution_depth(), 1);

        let path = result.solution_path();
        assert_eq!(path[1].action.map(|a| a.tile), Some(3));
    }
}

#[test]
fn solved_configuration_returns_immediately() {
    let problem = EightPuzzle::new(EightPuzzle::goal_board());
    let result = graph_search(&problem).expect("root is the goal");

    assert_eq!(result.solution_depth(), 0);
    assert_eq!(result.report.total_expansions, 0);
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn report_bytes_identical_across_runs() {
    let problem = canonical_problem();

    let first = graph_search(&problem).expect("solvable");
    let first_bytes = first.report.to_json_bytes().unwrap();

    for _ in 1..5 {
        let other = graph_search(&problem).expect("solvable");
        let other_bytes = other.report.to_json_bytes().unwrap();
        assert_eq!(first_bytes, other_bytes, "report bytes differ across runs");
    }
}

// ---------------------------------------------------------------------------
// Exhaustion on an unsolvable configuration
// ---------------------------------------------------------------------------

#[test]
fn unsolvable_configuration_exhausts_its_component() {
    // Tiles 1 and 2 swapped relative to the goal: the goal lies in the other
    // half of the puzzle's state space.
    let initial = Board::from_rows(["021", "345", "678"]).expect("valid board");
    let problem = EightPuzzle::new(initial);

    let err = graph_search(&problem).expect_err("goal is unreachable");
    let report = err.report();
    assert_eq!(
        report.termination_reason,
        TerminationReasonV1::FrontierExhausted
    );
    // Each of the 181_440 reachable boards is expanded exactly once.
    assert_eq!(report.total_expansions, 181_440);
    assert_eq!(report.explored_states, 181_440);
}
