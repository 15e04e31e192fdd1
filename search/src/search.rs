//! Search entry points and the expansion loop.
//!
//! Both strategies share one loop; they differ only in the duplicate
//! suppression rule applied to generated children. Tree search consults the
//! frontier membership index alone, graph search additionally consults an
//! explored set populated at pop time.

use std::collections::HashSet;

use crate::contract::SearchProblem;
use crate::error::SearchError;
use crate::frontier::FifoFrontier;
use crate::node::{NodeArena, PathStep, SearchNode};
use crate::report::{SearchReportV1, SearchStrategyV1, TerminationReasonV1};

/// Result of a successful search.
///
/// Holds the arena of every node the run created, so the solution path (and
/// any ancestor of it) stays reachable after the engine returns.
#[derive(Debug)]
pub struct SearchResult<S, A> {
    goal_id: u64,
    /// All nodes created during the run, indexed by `node_id`.
    pub nodes: NodeArena<S, A>,
    /// The run summary.
    pub report: SearchReportV1,
}

impl<S, A> SearchResult<S, A> {
    /// Arena id of the goal node.
    #[must_use]
    pub fn goal_id(&self) -> u64 {
        self.goal_id
    }

    /// The goal node.
    #[must_use]
    pub fn goal_node(&self) -> Option<&SearchNode<S, A>> {
        self.nodes.get(self.goal_id)
    }

    /// The reconstructed initial→goal path. The first step is the initial
    /// state with no action.
    #[must_use]
    pub fn solution_path(&self) -> Vec<PathStep<'_, S, A>> {
        self.nodes.path_to(self.goal_id)
    }

    /// Number of actions in the solution (the goal node's depth).
    #[must_use]
    pub fn solution_depth(&self) -> u32 {
        self.goal_node().map_or(0, |n| n.depth)
    }
}

/// Run breadth-first tree search from the problem's initial state.
///
/// Tree search keeps no explored set: a child is discarded only when its
/// state is *currently* enqueued in the frontier, so a state may be
/// re-expanded after leaving it. On state spaces with cycles this variant
/// may never terminate; that is a property of the strategy, not a bug.
/// Use [`graph_search`] when termination on finite spaces must be
/// guaranteed.
///
/// # Errors
///
/// Returns [`SearchError::NoSolution`] when the frontier empties without
/// reaching a goal state.
pub fn tree_search<P: SearchProblem>(
    problem: &P,
) -> Result<SearchResult<P::State, P::Action>, SearchError> {
    run(problem, SearchStrategyV1::Tree)
}

/// Run breadth-first graph search from the problem's initial state.
///
/// Graph search commits each popped state to an explored set before
/// expanding it and admits a child only when its state is neither explored
/// nor currently enqueued, so every state is expanded at most once.
/// Terminates on any finite state space.
///
/// # Errors
///
/// Returns [`SearchError::NoSolution`] when the frontier empties without
/// reaching a goal state.
pub fn graph_search<P: SearchProblem>(
    problem: &P,
) -> Result<SearchResult<P::State, P::Action>, SearchError> {
    run(problem, SearchStrategyV1::Graph)
}

struct Counters {
    total_expansions: u64,
    total_children_generated: u64,
    total_duplicates_suppressed: u64,
}

fn run<P: SearchProblem>(
    problem: &P,
    strategy: SearchStrategyV1,
) -> Result<SearchResult<P::State, P::Action>, SearchError> {
    let mut arena: NodeArena<P::State, P::Action> = NodeArena::new();
    let mut frontier: FifoFrontier<P::State> = FifoFrontier::new();
    let mut explored: HashSet<P::State> = HashSet::new();
    let mut counters = Counters {
        total_expansions: 0,
        total_children_generated: 0,
        total_duplicates_suppressed: 0,
    };

    let root_state = problem.initial();
    let root_id = arena.alloc_root(root_state.clone());

    // Zero-length solution: actions() is never consulted.
    if problem.is_goal(&root_state) {
        let report = build_report(
            strategy,
            TerminationReasonV1::GoalReached { node_id: root_id },
            &counters,
            arena.len() as u64,
            explored.len() as u64,
            frontier.high_water(),
            Some(0),
        );
        return Ok(SearchResult {
            goal_id: root_id,
            nodes: arena,
            report,
        });
    }

    frontier.push(root_id, root_state);

    loop {
        let Some(entry) = frontier.pop() else {
            let report = build_report(
                strategy,
                TerminationReasonV1::FrontierExhausted,
                &counters,
                arena.len() as u64,
                explored.len() as u64,
                frontier.high_water(),
                None,
            );
            return Err(SearchError::NoSolution { report });
        };

        // Graph search commits the state at pop time, before expansion,
        // regardless of whether expansion finds new children.
        if strategy == SearchStrategyV1::Graph {
            explored.insert(entry.state.clone());
        }
        counters.total_expansions += 1;

        for action in problem.actions(&entry.state) {
            let child_state = problem.result(&entry.state, &action);
            counters.total_children_generated += 1;

            let suppressed = match strategy {
                SearchStrategyV1::Tree => frontier.contains(&child_state),
                SearchStrategyV1::Graph => {
                    explored.contains(&child_state) || frontier.contains(&child_state)
                }
            };
            if suppressed {
                // Suppressed children are never goal-tested.
                counters.total_duplicates_suppressed += 1;
                continue;
            }

            let child_id = arena.alloc_child(entry.node_id, action, child_state.clone());

            // Goal test at generation: short-circuits the remaining actions
            // and the remaining frontier.
            if problem.is_goal(&child_state) {
                let depth = arena.get(child_id).map_or(0, |n| n.depth);
                let report = build_report(
                    strategy,
                    TerminationReasonV1::GoalReached { node_id: child_id },
                    &counters,
                    arena.len() as u64,
                    explored.len() as u64,
                    frontier.high_water(),
                    Some(depth),
                );
                return Ok(SearchResult {
                    goal_id: child_id,
                    nodes: arena,
                    report,
                });
            }

            frontier.push(child_id, child_state);
        }
    }
}

fn build_report(
    strategy: SearchStrategyV1,
    termination_reason: TerminationReasonV1,
    counters: &Counters,
    nodes_created: u64,
    explored_states: u64,
    frontier_high_water: u64,
    solution_depth: Option<u32>,
) -> SearchReportV1 {
    SearchReportV1 {
        strategy,
        termination_reason,
        total_expansions: counters.total_expansions,
        total_children_generated: counters.total_children_generated,
        total_duplicates_suppressed: counters.total_duplicates_suppressed,
        nodes_created,
        explored_states,
        frontier_high_water,
        solution_depth,
    }
}
