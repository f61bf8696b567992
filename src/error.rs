//! Error types for maze-search.
//!
//! Errors cover configuration and construction only. Search exhaustion is
//! a normal `Outcome::Fail`, never an error.

use crate::grid::GridPos;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// maze-search error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Maze has no cells
    #[error("Maze is empty")]
    EmptyMaze,

    /// A search endpoint lies outside the grid or on a wall
    #[error("{role} state {pos} is not an open cell")]
    BlockedEndpoint {
        /// Which endpoint ("initial" or "goal")
        role: &'static str,
        /// The offending position
        pos: GridPos,
    },
}
