//! Search-tree node structure.
//!
//! Uses arena-based allocation with index references (NodeId): the parent
//! link is a non-owning index into the tree, never a pointer, so the tree
//! has no lifetime ambiguity.

use serde::{Deserialize, Serialize};

use crate::grid::{Direction, GridPos};

/// Index into the SearchTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the search tree.
///
/// Created only by expansion from a parent, or as the root. The tree is
/// append-only for the duration of one search.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SearchNode {
    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Action taken to reach this node (`None` for root).
    pub action: Option<Direction>,

    /// Depth in the tree (root = 0).
    pub depth: u32,

    /// Accumulated path cost from the root.
    pub cost: f64,

    /// Grid state this node represents.
    pub state: GridPos,
}

impl SearchNode {
    /// Create a new node.
    #[must_use]
    pub fn new(parent: NodeId, action: Option<Direction>, depth: u32, cost: f64, state: GridPos) -> Self {
        Self {
            parent,
            action,
            depth,
            cost,
            state,
        }
    }

    /// Create a root node for the given state.
    #[must_use]
    pub fn root(state: GridPos) -> Self {
        Self::new(NodeId::NONE, None, 0, 0.0, state)
    }

    /// Check if this is a root node.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
