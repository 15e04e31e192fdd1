//! Core search node types and the arena that owns them.
//!
//! Parent links are integer ids into the owning [`NodeArena`] rather than
//! shared-ownership references. Ancestry chains are strictly acyclic: depth
//! strictly decreases from child to parent, and the root has no parent.

/// An immutable node in the search tree.
///
/// The root node has `parent_id = None` and `action = None`; every non-root
/// node has both set. Nodes are never mutated after allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<S, A> {
    /// Monotonic node identifier assigned by the arena (equal to its index).
    pub node_id: u64,
    /// Parent node id (`None` for root).
    pub parent_id: Option<u64>,
    /// Full immutable state at this node.
    pub state: S,
    /// The action that produced this node from its parent (`None` for root).
    pub action: Option<A>,
    /// Tree depth (root = 0).
    pub depth: u32,
}

/// One step of a reconstructed solution path.
///
/// The first step of any path is the root and carries no action; every later
/// step names the action that produced its state from the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep<'a, S, A> {
    /// The state at this point of the path.
    pub state: &'a S,
    /// The action taken to reach `state`, `None` for the initial state.
    pub action: Option<&'a A>,
}

/// Owner of every node created by a search run.
///
/// `node_id` doubles as the index into the arena, so parent lookup during
/// path reconstruction is a direct index instead of a scan.
#[derive(Debug, Clone)]
pub struct NodeArena<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A> NodeArena<S, A> {
    /// Create a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocate the root node. Called once per run, before any expansion.
    pub fn alloc_root(&mut self, state: S) -> u64 {
        let node_id = self.nodes.len() as u64;
        self.nodes.push(SearchNode {
            node_id,
            parent_id: None,
            state,
            action: None,
            depth: 0,
        });
        node_id
    }

    /// Allocate a child of `parent_id` reached via `action`.
    ///
    /// `parent_id` must identify a node already in this arena.
    pub fn alloc_child(&mut self, parent_id: u64, action: A, state: S) -> u64 {
        let parent_depth = self.get(parent_id).map_or(0, |p| p.depth);
        let node_id = self.nodes.len() as u64;
        self.nodes.push(SearchNode {
            node_id,
            parent_id: Some(parent_id),
            state,
            action: Some(action),
            depth: parent_depth + 1,
        });
        node_id
    }

    /// Look up a node by id.
    #[must_use]
    pub fn get(&self, node_id: u64) -> Option<&SearchNode<S, A>> {
        usize::try_from(node_id)
            .ok()
            .and_then(|idx| self.nodes.get(idx))
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reconstruct the initial→goal path ending at `node_id`.
    ///
    /// Walks `parent_id` links up to the root, then reverses so the sequence
    /// runs from the initial state to the given node. The root step's action
    /// is `None`. An id that resolves to no node yields an empty path.
    #[must_use]
    pub fn path_to(&self, node_id: u64) -> Vec<PathStep<'_, S, A>> {
        let mut steps = Vec::new();
        let mut current = self.get(node_id);
        while let Some(node) = current {
            steps.push(PathStep {
                state: &node.state,
                action: node.action.as_ref(),
            });
            current = node.parent_id.and_then(|id| self.get(id));
        }
        steps.reverse();
        steps
    }
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
