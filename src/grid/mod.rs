//! Grid-world primitives: positions, movement directions, and the maze.
//!
//! These are the state & action model of the search domain. They carry no
//! search-specific behavior; the `search` module builds on them.

pub mod direction;
pub mod maze;
pub mod pos;

pub use direction::Direction;
pub use maze::{Cell, Maze};
pub use pos::GridPos;
