//! Runner: execute a strategy over a problem and package the artifacts.
//!
//! The runner uses only engine APIs — it implements no search logic itself.
//! Worlds provide domain data; the runner owns orchestration.

use std::fmt::Display;

use wavefront_search::contract::SearchProblem;
use wavefront_search::error::SearchError;
use wavefront_search::report::SearchStrategyV1;
use wavefront_search::search::{graph_search, tree_search};

use crate::bundle::SolutionBundleV1;
use crate::render::render_path;

/// Typed failure for a runner invocation.
#[derive(Debug)]
pub enum RunnerError {
    /// The engine completed without finding a solution.
    Search(SearchError),
    /// Report serialization failed.
    ReportEncode { detail: String },
}

impl std::fmt::Display for RunnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(err) => write!(f, "search failed: {err}"),
            Self::ReportEncode { detail } => write!(f, "report encoding error: {detail}"),
        }
    }
}

impl std::error::Error for RunnerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(err) => Some(err),
            Self::ReportEncode { .. } => None,
        }
    }
}

impl From<SearchError> for RunnerError {
    fn from(err: SearchError) -> Self {
        Self::Search(err)
    }
}

/// Execute `strategy` over `problem` and package the outcome as a bundle.
///
/// # Errors
///
/// Returns [`RunnerError::Search`] when the engine finds no solution and
/// [`RunnerError::ReportEncode`] when the report cannot be serialized.
pub fn run_search<P>(
    problem_id: &str,
    problem: &P,
    strategy: SearchStrategyV1,
) -> Result<SolutionBundleV1, RunnerError>
where
    P: SearchProblem,
    P::State: Display,
    P::Action: Display,
{
    let result = match strategy {
        SearchStrategyV1::Tree => tree_search(problem)?,
        SearchStrategyV1::Graph => graph_search(problem)?,
    };

    let solution_text = render_path(&result.solution_path());
    let report_json = result
        .report
        .to_json_bytes()
        .map_err(|err| RunnerError::ReportEncode {
            detail: err.to_string(),
        })?;

    Ok(SolutionBundleV1 {
        problem_id: problem_id.to_string(),
        strategy,
        solution_text,
        report_json,
    })
}
