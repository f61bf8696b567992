//! Frontier selection strategies.
//!
//! Strategies are trait-based so the controller never hardcodes a ranking
//! rule. Greedy best-first is the shipped variant; cost-aware strategies
//! (uniform-cost, A*) can be added without touching the controller.

use super::node::NodeId;
use super::problem::SearchProblem;
use super::tree::SearchTree;

/// Policy for choosing which frontier node to expand next.
pub trait SelectionStrategy: Send {
    /// Remove and return the next node to expand.
    ///
    /// The frontier is not required to stay sorted between calls; the
    /// strategy re-derives order on every selection. Returns `None` only
    /// when the frontier is empty.
    fn select(
        &self,
        frontier: &mut Vec<NodeId>,
        tree: &SearchTree,
        problem: &dyn SearchProblem,
    ) -> Option<NodeId>;
}

/// Greedy best-first selection.
///
/// Ranks frontier nodes by ascending heuristic value alone; accumulated
/// path cost is ignored. A stable sort breaks ties by frontier order.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyBestFirst;

impl SelectionStrategy for GreedyBestFirst {
    fn select(
        &self,
        frontier: &mut Vec<NodeId>,
        tree: &SearchTree,
        problem: &dyn SearchProblem,
    ) -> Option<NodeId> {
        if frontier.is_empty() {
            return None;
        }

        frontier.sort_by(|&a, &b| {
            problem
                .heuristic(tree.get(a).state)
                .total_cmp(&problem.heuristic(tree.get(b).state))
        });

        Some(frontier.remove(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GridPos, Maze};
    use crate::search::node::SearchNode;
    use crate::search::problem::MazeProblem;

    fn open_problem(goal: GridPos) -> MazeProblem {
        let maze = Maze::from_rows(&vec![vec![0; 8]; 8]);
        MazeProblem::new(GridPos::new(0, 0), goal, maze).unwrap()
    }

    fn frontier_of(tree: &mut SearchTree, states: &[GridPos]) -> Vec<NodeId> {
        states
            .iter()
            .map(|&state| tree.alloc(SearchNode::new(tree.root(), None, 1, 1.0, state)))
            .collect()
    }

    #[test]
    fn test_select_picks_lowest_heuristic() {
        let problem = open_problem(GridPos::new(7, 7));
        let mut tree = SearchTree::new(GridPos::new(0, 0));
        let mut frontier = frontier_of(
            &mut tree,
            &[GridPos::new(1, 1), GridPos::new(6, 6), GridPos::new(3, 3)],
        );

        let chosen = GreedyBestFirst
            .select(&mut frontier, &tree, &problem)
            .unwrap();

        // (6,6) is closest to the goal.
        assert_eq!(tree.get(chosen).state, GridPos::new(6, 6));
        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn test_select_ignores_path_cost() {
        let problem = open_problem(GridPos::new(7, 0));
        let mut tree = SearchTree::new(GridPos::new(0, 0));

        // Cheap node far from the goal, expensive node next to it.
        let far = tree.alloc(SearchNode::new(tree.root(), None, 1, 0.0, GridPos::new(0, 1)));
        let near = tree.alloc(SearchNode::new(
            tree.root(),
            None,
            50,
            50.0,
            GridPos::new(6, 0),
        ));
        let mut frontier = vec![far, near];

        let chosen = GreedyBestFirst
            .select(&mut frontier, &tree, &problem)
            .unwrap();
        assert_eq!(chosen, near);
    }

    #[test]
    fn test_select_empty_frontier() {
        let problem = open_problem(GridPos::new(1, 1));
        let tree = SearchTree::new(GridPos::new(0, 0));
        let mut frontier = Vec::new();

        assert!(GreedyBestFirst
            .select(&mut frontier, &tree, &problem)
            .is_none());
    }

    #[test]
    fn test_select_stable_on_ties() {
        let problem = open_problem(GridPos::new(4, 4));
        let mut tree = SearchTree::new(GridPos::new(0, 0));

        // Equidistant states keep their frontier order.
        let first = tree.alloc(SearchNode::new(tree.root(), None, 1, 1.0, GridPos::new(4, 3)));
        let second = tree.alloc(SearchNode::new(tree.root(), None, 1, 1.0, GridPos::new(3, 4)));
        let mut frontier = vec![first, second];

        let chosen = GreedyBestFirst
            .select(&mut frontier, &tree, &problem)
            .unwrap();
        assert_eq!(chosen, first);
        assert_eq!(frontier, vec![second]);
    }
}
