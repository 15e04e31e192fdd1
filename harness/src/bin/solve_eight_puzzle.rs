//! Solve the canonical eight-puzzle configuration and print the move path.

use std::process::ExitCode;

use wavefront_harness::render::render_path;
use wavefront_harness::worlds::eight_puzzle::{Board, EightPuzzle};
use wavefront_search::search::graph_search;

fn main() -> ExitCode {
    let initial = match Board::from_rows(["312", "065", "748"]) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("bad initial board: {err}");
            return ExitCode::FAILURE;
        }
    };
    let problem = EightPuzzle::new(initial);

    println!("Initial:");
    println!("{initial}");

    match graph_search(&problem) {
        Ok(result) => {
            println!();
            println!("Solution ({} moves):", result.solution_depth());
            println!("{}", render_path(&result.solution_path()));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
