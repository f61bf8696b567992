//! Arena-based search tree.
//!
//! Nodes live in a flat `Vec<SearchNode>` and reference each other by
//! `NodeId` indices. The tree is rebuilt from scratch for every search and
//! discarded wholesale when the search ends or is superseded.

use serde::{Deserialize, Serialize};

use crate::grid::GridPos;
use crate::search::problem::SearchProblem;

use super::node::{NodeId, SearchNode};

/// Arena holding every node discovered during one search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
    root: NodeId,
}

impl SearchTree {
    /// Create a tree containing only a root node for `initial_state`.
    #[must_use]
    pub fn new(initial_state: GridPos) -> Self {
        let mut tree = Self {
            nodes: Vec::with_capacity(1024),
            root: NodeId::new(0),
        };
        tree.nodes.push(SearchNode::root(initial_state));
        tree
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Expand a node: allocate one child per successor of its state.
    ///
    /// Each child carries `depth + 1` and accumulates the cost of leaving
    /// the parent's state (not the destination's).
    pub fn expand(&mut self, id: NodeId, problem: &dyn SearchProblem) -> Vec<NodeId> {
        let parent = *self.get(id);
        problem
            .successors(parent.state)
            .into_iter()
            .map(|(state, action)| {
                self.alloc(SearchNode::new(
                    id,
                    Some(action),
                    parent.depth + 1,
                    parent.cost + problem.cost(parent.state),
                    state,
                ))
            })
            .collect()
    }

    /// Reconstruct the root-to-node path of states, excluding the root's
    /// own state.
    #[must_use]
    pub fn solution(&self, id: NodeId) -> Vec<GridPos> {
        let mut path = Vec::new();
        let mut node = self.get(id);

        while !node.is_root() {
            path.push(node.state);
            node = self.get(node.parent);
        }

        path.reverse();
        path
    }
}
