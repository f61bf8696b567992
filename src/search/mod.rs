//! Informed graph search over grid mazes.
//!
//! ## Overview
//!
//! - **Arena tree**: nodes reference parents by `NodeId` index, never by
//!   pointer; the whole tree is discarded when a search ends.
//! - **Trait seams**: `SearchProblem` abstracts the domain,
//!   `SelectionStrategy` the frontier ranking. Greedy best-first is the
//!   shipped strategy; it ranks by heuristic alone and ignores path cost.
//! - **Observable**: one progress event per expansion step, paced by a
//!   configurable delay so a live view can keep up, then one terminal
//!   event with the outcome and solution path.
//!
//! ## Usage
//!
//! ```rust
//! use maze_search::grid::{GridPos, Maze};
//! use maze_search::search::{MazeProblem, SearchConfig, SearchEngine};
//!
//! let maze = Maze::from_rows(&[vec![0, 0, 0], vec![1, 1, 0]]);
//! let problem = MazeProblem::new(GridPos::new(0, 0), GridPos::new(2, 1), maze).unwrap();
//!
//! let config = SearchConfig::default().with_step_delay(std::time::Duration::ZERO);
//! let mut engine = SearchEngine::new(problem, config);
//!
//! let mut events = Vec::new();
//! let report = engine.run(&mut events);
//! println!("{:?}: {:?}", report.outcome, report.path);
//! ```

pub mod config;
pub mod engine;
pub mod node;
pub mod problem;
pub mod stats;
pub mod strategy;
pub mod tree;

pub use config::SearchConfig;
pub use engine::SearchEngine;
pub use node::{NodeId, SearchNode};
pub use problem::{ActionSet, MazeProblem, SearchProblem, SuccessorSet};
pub use stats::SearchStats;
pub use strategy::{GreedyBestFirst, SelectionStrategy};
pub use tree::SearchTree;
