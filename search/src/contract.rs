//! Search problem contract trait.

use std::hash::Hash;

/// Trait for problems that support breadth-first search.
///
/// A problem defines the state space: the starting state, the actions legal
/// in a state, the transition function, and the goal test. The engine treats
/// states and actions as opaque — states are only compared and hashed for
/// membership, actions are only carried on nodes for path reconstruction.
///
/// # Contract
///
/// - `actions` must be deterministic: same state → same actions in the same
///   order. The listed order fixes the order in which children are generated
///   and therefore enqueued (first-listed action's child enters the frontier
///   first).
/// - `result` must be deterministic: same `(state, action)` → same successor.
///   Calling it with an action not returned by `actions(state)` is outside
///   the contract; the engine never does this.
/// - `is_goal` must be a pure predicate, consistent across calls.
/// - All methods may be called any number of times during a run; they must
///   not observe or depend on search progress.
pub trait SearchProblem {
    /// One configuration of the problem's world. Equality is the engine's
    /// unit of deduplication: two states are the same iff they compare equal.
    type State: Clone + Eq + Hash;

    /// An opaque transition identifier, recorded on nodes for path
    /// reconstruction only.
    type Action: Clone;

    /// The starting state, fixed for the run.
    fn initial(&self) -> Self::State;

    /// All actions legal in `state`, in deterministic order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The successor reached by taking `action` in `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;
}
