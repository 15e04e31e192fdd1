//! Typed search errors.
//!
//! `SearchError` is the engine's only failure: the frontier emptied without
//! reaching a goal state. The final [`SearchReportV1`] travels with the
//! error so callers can still account for the work a failed run did.
//!
//! [`SearchReportV1`]: crate::report::SearchReportV1

use crate::report::SearchReportV1;

/// Typed failure for a completed search that found no solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier was exhausted before any state satisfied the goal test.
    NoSolution { report: SearchReportV1 },
}

impl SearchError {
    /// The report for the failed run.
    #[must_use]
    pub fn report(&self) -> &SearchReportV1 {
        match self {
            Self::NoSolution { report } => report,
        }
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSolution { report } => {
                write!(
                    f,
                    "frontier exhausted after {} expansions without reaching a goal state",
                    report.total_expansions
                )
            }
        }
    }
}

impl std::error::Error for SearchError {}
