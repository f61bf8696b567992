//! # maze-search
//!
//! A live-reconfigurable informed graph-search engine for grid mazes.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: this crate searches. Rendering, player movement,
//!    leaderboards, and the transport carrying events between processes
//!    are external collaborators behind narrow seams (`EventSink`,
//!    `SearchGate`).
//!
//! 2. **Recreate, don't reuse**: problem, strategy, frontier, and closed
//!    set are rebuilt from scratch per search and have no life outside it.
//!    Only the gate and its busy flag are process-lifetime state.
//!
//! 3. **One search in flight**: the busy flag covers a search from start
//!    to terminal outcome. New configurations wait in a single
//!    last-write-wins slot; there is no cancellation.
//!
//! ## Architecture
//!
//! - **Arena search tree**: parent links are `NodeId` indices into a flat
//!   node vector, never pointers.
//!
//! - **Trait seams**: `SearchProblem` for the domain, `SelectionStrategy`
//!   for frontier ranking (greedy best-first shipped), `EventSink` for
//!   observers.
//!
//! - **Paced event stream**: one progress event per expansion step,
//!   throttled to a human-observable rate for live visualization.
//!
//! ## Modules
//!
//! - `grid`: positions, directions, maze cells
//! - `search`: problem, node arena, strategy, controller, stats
//! - `events`: progress/terminal events and the sink seam
//! - `gate`: pending-configuration slot + busy flag
//! - `driver`: background worker running the driving loop

pub mod driver;
pub mod error;
pub mod events;
pub mod gate;
pub mod grid;
pub mod search;

// Re-export commonly used types
pub use crate::driver::SearchDriver;
pub use crate::error::{Error, Result};
pub use crate::events::{EventSink, Outcome, SearchEvent, SearchReport};
pub use crate::gate::{ConfigRequest, PendingConfig, SearchGate};
pub use crate::grid::{Cell, Direction, GridPos, Maze};
pub use crate::search::{
    GreedyBestFirst, MazeProblem, NodeId, SearchConfig, SearchEngine, SearchNode, SearchProblem,
    SearchStats, SearchTree, SelectionStrategy,
};
