//! `SearchReportV1`: per-run summary artifact.
//!
//! Every search produces a report, success or failure. Successful runs carry
//! it in [`SearchResult`]; exhausted runs carry it inside
//! [`SearchError::NoSolution`] so the work done is never lost.
//!
//! [`SearchResult`]: crate::search::SearchResult
//! [`SearchError::NoSolution`]: crate::error::SearchError

/// Which exploration strategy a run used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategyV1 {
    /// No explored set; states may be re-expanded after leaving the frontier.
    Tree,
    /// Explored set consulted; each state is expanded at most once.
    Graph,
}

impl SearchStrategyV1 {
    /// Stable lowercase name used in serialized artifacts.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Graph => "graph",
        }
    }
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// Search found a goal state.
    GoalReached { node_id: u64 },
    /// Frontier emptied without finding a goal.
    FrontierExhausted,
}

/// Aggregate counters for one completed search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReportV1 {
    /// The strategy the run used.
    pub strategy: SearchStrategyV1,
    /// How the run ended.
    pub termination_reason: TerminationReasonV1,
    /// Number of frontier pops (nodes expanded).
    pub total_expansions: u64,
    /// Number of successor states computed across all expansions.
    pub total_children_generated: u64,
    /// Children discarded because their state was already enqueued (both
    /// strategies) or already explored (graph only).
    pub total_duplicates_suppressed: u64,
    /// Number of nodes allocated, root included.
    pub nodes_created: u64,
    /// Size of the explored set at termination (always 0 for tree search).
    pub explored_states: u64,
    /// High-water mark of frontier size.
    pub frontier_high_water: u64,
    /// Action count of the solution path (`None` when no goal was reached).
    pub solution_depth: Option<u32>,
}

impl SearchReportV1 {
    /// Convert to a `serde_json::Value`.
    ///
    /// `serde_json` maps sort keys, so the value serializes to the same
    /// bytes for identical runs.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "explored_states": self.explored_states,
            "frontier_high_water": self.frontier_high_water,
            "nodes_created": self.nodes_created,
            "solution_depth": self.solution_depth,
            "strategy": self.strategy.as_str(),
            "termination_reason": termination_reason_to_json(self.termination_reason),
            "total_children_generated": self.total_children_generated,
            "total_duplicates_suppressed": self.total_duplicates_suppressed,
            "total_expansions": self.total_expansions,
        })
    }

    /// Serialize the report to compact JSON bytes with sorted keys.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value())
    }
}

fn termination_reason_to_json(r: TerminationReasonV1) -> serde_json::Value {
    match r {
        TerminationReasonV1::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": "goal_reached"})
        }
        TerminationReasonV1::FrontierExhausted => {
            serde_json::json!({"type": "frontier_exhausted"})
        }
    }
}
