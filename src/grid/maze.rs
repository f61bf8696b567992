//! Maze grid.
//!
//! A rectangular grid of wall/open cells. Immutable once bound to a
//! problem instance; indexed `[row][col]`.

use serde::{Deserialize, Serialize};

use super::GridPos;

/// A single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Impassable cell.
    Wall,
    /// Walkable cell.
    Open,
}

/// A rectangular maze grid.
///
/// Built from rows of `0`/`1` as delivered on the wire (`1` = wall).
/// Positions outside the grid read as `Wall`, so neighbor checks never
/// index out of bounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    rows: Vec<Vec<Cell>>,
}

impl Maze {
    /// Build a maze from wire-format rows (`1` = wall, anything else open).
    #[must_use]
    pub fn from_rows(raw: &[Vec<u8>]) -> Self {
        let rows = raw
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| if v == 1 { Cell::Wall } else { Cell::Open })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (width of the first row; rows are rectangular).
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Cell at a position; out-of-bounds positions read as `Wall`.
    #[must_use]
    pub fn cell(&self, pos: GridPos) -> Cell {
        if pos.row < 0 || pos.col < 0 {
            return Cell::Wall;
        }
        self.rows
            .get(pos.row as usize)
            .and_then(|row| row.get(pos.col as usize))
            .copied()
            .unwrap_or(Cell::Wall)
    }

    /// Whether a position is an open, in-bounds cell.
    #[must_use]
    pub fn is_open(&self, pos: GridPos) -> bool {
        self.cell(pos) == Cell::Open
    }
}
