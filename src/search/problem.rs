//! Search problem abstraction and the maze problem.
//!
//! `SearchProblem` is the seam between the search engine and the domain:
//! the engine only ever sees legal actions, transitions, costs, the goal
//! test, and a heuristic ranking signal.

use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::grid::{Direction, GridPos, Maze};

/// Legal actions from a state. Branching factor is at most 4.
pub type ActionSet = SmallVec<[Direction; 4]>;

/// Successor states paired with the action that reaches them.
pub type SuccessorSet = SmallVec<[(GridPos, Direction); 4]>;

/// A search space over grid positions.
///
/// The heuristic is treated purely as a ranking signal; it is not required
/// to be admissible.
pub trait SearchProblem: Send {
    /// Initial state of the search.
    fn initial_state(&self) -> GridPos;

    /// Legal directions out of `state`.
    fn actions(&self, state: GridPos) -> ActionSet;

    /// Deterministic transition: the state reached by `action` from `state`.
    fn result(&self, action: Direction, state: GridPos) -> GridPos;

    /// Cost of the edge leaving `state`.
    fn cost(&self, state: GridPos) -> f64;

    /// Whether `state` is the goal.
    fn goal_test(&self, state: GridPos) -> bool;

    /// Estimated remaining cost from `state`, used only to rank frontier
    /// nodes.
    fn heuristic(&self, state: GridPos) -> f64;

    /// All `(successor, action)` pairs reachable in one step from `state`.
    fn successors(&self, state: GridPos) -> SuccessorSet {
        self.actions(state)
            .into_iter()
            .map(|action| (self.result(action, state), action))
            .collect()
    }
}

/// Shortest-path problem on a wall/open maze.
#[derive(Clone, Debug)]
pub struct MazeProblem {
    initial_state: GridPos,
    goal_state: GridPos,
    maze: Maze,
}

impl MazeProblem {
    /// Bind a maze and endpoints into a problem instance.
    ///
    /// Both endpoints must be open, in-bounds cells.
    pub fn new(initial_state: GridPos, goal_state: GridPos, maze: Maze) -> Result<Self> {
        if maze.height() == 0 || maze.width() == 0 {
            return Err(Error::EmptyMaze);
        }
        if !maze.is_open(initial_state) {
            return Err(Error::BlockedEndpoint {
                role: "initial",
                pos: initial_state,
            });
        }
        if !maze.is_open(goal_state) {
            return Err(Error::BlockedEndpoint {
                role: "goal",
                pos: goal_state,
            });
        }

        Ok(Self {
            initial_state,
            goal_state,
            maze,
        })
    }

    /// The configured goal state.
    #[must_use]
    pub fn goal_state(&self) -> GridPos {
        self.goal_state
    }

    /// The bound maze.
    #[must_use]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }
}

impl SearchProblem for MazeProblem {
    fn initial_state(&self) -> GridPos {
        self.initial_state
    }

    fn actions(&self, state: GridPos) -> ActionSet {
        Direction::ALL
            .into_iter()
            .filter(|dir| self.maze.is_open(dir.apply(state)))
            .collect()
    }

    fn result(&self, action: Direction, state: GridPos) -> GridPos {
        action.apply(state)
    }

    fn cost(&self, _state: GridPos) -> f64 {
        1.0
    }

    fn goal_test(&self, state: GridPos) -> bool {
        self.goal_state == state
    }

    // Straight-line distance summed eight times. The scale factor is
    // uniform across states, so greedy ranking is unchanged; kept to match
    // the deployed dashboard's tuning.
    fn heuristic(&self, state: GridPos) -> f64 {
        (1..9).map(|_| state.distance(self.goal_state)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_maze(size: usize) -> Maze {
        Maze::from_rows(&vec![vec![0; size]; size])
    }

    #[test]
    fn test_actions_open_grid_interior() {
        let problem =
            MazeProblem::new(GridPos::new(1, 1), GridPos::new(3, 3), open_maze(5)).unwrap();

        let actions = problem.actions(GridPos::new(2, 2));
        assert_eq!(actions.len(), 4);
    }

    #[test]
    fn test_actions_clipped_at_border() {
        let problem =
            MazeProblem::new(GridPos::new(0, 0), GridPos::new(2, 2), open_maze(3)).unwrap();

        // Corner cell: only up and right lead to open cells.
        let actions = problem.actions(GridPos::new(0, 0));
        assert_eq!(actions.len(), 2);
        assert!(actions.contains(&Direction::Up));
        assert!(actions.contains(&Direction::Right));
    }

    #[test]
    fn test_actions_blocked_by_walls() {
        let maze = Maze::from_rows(&[
            vec![0, 1, 0],
            vec![0, 0, 0],
            vec![0, 1, 0],
        ]);
        let problem = MazeProblem::new(GridPos::new(0, 0), GridPos::new(2, 2), maze).unwrap();

        // (1, 1) has walls above and below.
        let actions = problem.actions(GridPos::new(1, 1));
        assert_eq!(actions.len(), 2);
        assert!(actions.contains(&Direction::Left));
        assert!(actions.contains(&Direction::Right));
    }

    #[test]
    fn test_successors_match_actions() {
        let problem =
            MazeProblem::new(GridPos::new(1, 1), GridPos::new(3, 3), open_maze(5)).unwrap();

        let state = GridPos::new(2, 2);
        let successors = problem.successors(state);
        assert_eq!(successors.len(), problem.actions(state).len());
        for (next, action) in successors {
            assert_eq!(next, problem.result(action, state));
        }
    }

    #[test]
    fn test_goal_test() {
        let problem =
            MazeProblem::new(GridPos::new(0, 0), GridPos::new(2, 2), open_maze(3)).unwrap();

        assert!(problem.goal_test(GridPos::new(2, 2)));
        assert!(!problem.goal_test(GridPos::new(2, 1)));
    }

    #[test]
    fn test_heuristic_eightfold_scaling() {
        let problem =
            MazeProblem::new(GridPos::new(0, 0), GridPos::new(3, 4), open_maze(6)).unwrap();

        // Distance from origin to (3, 4) is 5; the signal is scaled by 8.
        assert!((problem.heuristic(GridPos::new(0, 0)) - 40.0).abs() < 1e-9);
        assert_eq!(problem.heuristic(GridPos::new(3, 4)), 0.0);
    }

    #[test]
    fn test_heuristic_preserves_ranking() {
        let problem =
            MazeProblem::new(GridPos::new(0, 0), GridPos::new(4, 0), open_maze(5)).unwrap();

        // Closer states rank lower regardless of the scale factor.
        assert!(problem.heuristic(GridPos::new(3, 0)) < problem.heuristic(GridPos::new(1, 0)));
    }

    #[test]
    fn test_rejects_blocked_endpoints() {
        let maze = Maze::from_rows(&[vec![1, 0], vec![0, 0]]);

        let err = MazeProblem::new(GridPos::new(0, 0), GridPos::new(1, 1), maze.clone())
            .unwrap_err();
        assert!(matches!(err, Error::BlockedEndpoint { role: "initial", .. }));

        let err = MazeProblem::new(GridPos::new(1, 0), GridPos::new(5, 5), maze).unwrap_err();
        assert!(matches!(err, Error::BlockedEndpoint { role: "goal", .. }));
    }

    #[test]
    fn test_rejects_empty_maze() {
        let err = MazeProblem::new(
            GridPos::new(0, 0),
            GridPos::new(0, 0),
            Maze::from_rows(&[]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyMaze));
    }
}
