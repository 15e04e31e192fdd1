//! Shared fixtures for wavefront benchmark suites.

use wavefront_harness::worlds::eight_puzzle::{Board, EightPuzzle};

/// Boards at increasing known solution depths, for scaling runs.
///
/// Depths: 1, 5 (the canonical configuration), 10, and 18 moves.
pub const DEPTH_FIXTURES: &[(u32, [&str; 3])] = &[
    (1, ["312", "045", "678"]),
    (5, ["312", "065", "748"]),
    (10, ["325", "608", "714"]),
    (18, ["380", "654", "721"]),
];

/// Build the puzzle instance for a fixture's rows.
///
/// # Panics
///
/// Panics if the rows do not parse. Benchmark setup failures are fatal.
#[must_use]
pub fn puzzle_for(rows: [&str; 3]) -> EightPuzzle {
    let board = Board::from_rows(rows).expect("fixture board must parse");
    EightPuzzle::new(board)
}
