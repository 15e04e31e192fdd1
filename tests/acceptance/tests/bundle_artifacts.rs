//! Artifact acceptance tests: runner orchestration, bundle directory
//! round-trips, and report JSON shape.

use std::fs;

use acceptance_tests::GraphProblem;
use wavefront_harness::bundle::{
    write_bundle, MANIFEST_FILENAME, REPORT_FILENAME, SOLUTION_FILENAME,
};
use wavefront_harness::runner::{run_search, RunnerError};
use wavefront_harness::worlds::eight_puzzle::{Board, EightPuzzle};
use wavefront_search::report::SearchStrategyV1;

// ---------------------------------------------------------------------------
// Runner → bundle → disk round-trip
// ---------------------------------------------------------------------------

#[test]
fn bundle_round_trips_through_a_directory() {
    let initial = Board::from_rows(["312", "065", "748"]).expect("valid board");
    let problem = EightPuzzle::new(initial);

    let bundle =
        run_search("eight_puzzle", &problem, SearchStrategyV1::Graph).expect("solvable");

    let dir = tempfile::tempdir().unwrap();
    write_bundle(&bundle, dir.path()).unwrap();

    let solution = fs::read_to_string(dir.path().join(SOLUTION_FILENAME)).unwrap();
    assert_eq!(solution, bundle.solution_text);
    assert!(solution.starts_with("312\n065\n748"));
    assert!(solution.ends_with("012\n345\n678"));

    let report: serde_json::Value =
        serde_json::from_slice(&fs::read(dir.path().join(REPORT_FILENAME)).unwrap()).unwrap();
    assert_eq!(report["strategy"], "graph");
    assert_eq!(report["solution_depth"], 5);
    assert_eq!(report["termination_reason"]["type"], "goal_reached");
    assert!(report["total_expansions"].as_u64().unwrap() > 0);

    let manifest: serde_json::Value =
        serde_json::from_slice(&fs::read(dir.path().join(MANIFEST_FILENAME)).unwrap()).unwrap();
    assert_eq!(manifest["problem_id"], "eight_puzzle");
    assert_eq!(manifest["strategy"], "graph");
}

// ---------------------------------------------------------------------------
// Report JSON shape
// ---------------------------------------------------------------------------

#[test]
fn report_json_carries_all_counters() {
    let initial = Board::from_rows(["312", "045", "678"]).expect("valid board");
    let problem = EightPuzzle::new(initial);

    let bundle = run_search("eight_puzzle", &problem, SearchStrategyV1::Tree).expect("solvable");
    let report: serde_json::Value = serde_json::from_slice(&bundle.report_json).unwrap();

    for key in [
        "explored_states",
        "frontier_high_water",
        "nodes_created",
        "strategy",
        "termination_reason",
        "total_children_generated",
        "total_duplicates_suppressed",
        "total_expansions",
    ] {
        assert!(!report[key].is_null(), "missing report key: {key}");
    }
    assert_eq!(report["strategy"], "tree");
    assert_eq!(
        report["explored_states"], 0,
        "tree search keeps no explored set"
    );
}

// ---------------------------------------------------------------------------
// Failure surfaces the engine report
// ---------------------------------------------------------------------------

#[test]
fn runner_surfaces_no_solution_with_report() {
    let problem = GraphProblem {
        initial: 0,
        edges: vec![(0, 1)],
        goals: vec![99],
    };

    let err = run_search("probe", &problem, SearchStrategyV1::Graph)
        .expect_err("goal is unreachable");
    match err {
        RunnerError::Search(search_err) => {
            assert_eq!(search_err.report().total_expansions, 2);
        }
        RunnerError::ReportEncode { detail } => {
            panic!("unexpected encoding failure: {detail}")
        }
    }
}
