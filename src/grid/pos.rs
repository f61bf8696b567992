//! Grid positions.
//!
//! A position is a `(col, row)` pair. On the wire it is the two-element
//! array `[col, row]`, matching the dashboard protocol.

use serde::{Deserialize, Serialize};

/// A cell position on the grid, `(col, row)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct GridPos {
    /// Column (x).
    pub col: i32,
    /// Row (y).
    pub row: i32,
}

impl GridPos {
    /// Create a position from column and row.
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Euclidean distance to another position.
    #[must_use]
    pub fn distance(self, other: GridPos) -> f64 {
        let dc = (self.col - other.col) as f64;
        let dr = (self.row - other.row) as f64;
        (dc * dc + dr * dr).sqrt()
    }
}

impl From<[i32; 2]> for GridPos {
    fn from([col, row]: [i32; 2]) -> Self {
        Self { col, row }
    }
}

impl From<GridPos> for [i32; 2] {
    fn from(pos: GridPos) -> Self {
        [pos.col, pos.row]
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_equality() {
        assert_eq!(GridPos::new(3, 7), GridPos::new(3, 7));
        assert_ne!(GridPos::new(3, 7), GridPos::new(7, 3));
    }

    #[test]
    fn test_pos_distance() {
        let a = GridPos::new(0, 0);
        let b = GridPos::new(3, 4);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn test_pos_wire_format() {
        let pos = GridPos::new(4, 9);
        let json = serde_json::to_string(&pos).unwrap();
        assert_eq!(json, "[4,9]");

        let back: GridPos = serde_json::from_str("[4,9]").unwrap();
        assert_eq!(back, pos);
    }
}
