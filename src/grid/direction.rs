//! Movement directions.

use serde::{Deserialize, Serialize};

use super::GridPos;

/// One of the four axis movement directions.
///
/// `Up` increments the row and `Right` increments the column, matching
/// the maze coordinate convention (row 0 at the bottom).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four candidate directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Left,
        Direction::Down,
    ];

    /// Unit displacement `(dcol, drow)` for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Apply this direction's unit displacement to a position.
    #[must_use]
    pub fn apply(self, pos: GridPos) -> GridPos {
        let (dc, dr) = self.delta();
        GridPos::new(pos.col + dc, pos.row + dr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_is_unit_step() {
        for dir in Direction::ALL {
            let (dc, dr) = dir.delta();
            assert_eq!(dc.abs() + dr.abs(), 1);
        }
    }

    #[test]
    fn test_apply() {
        let pos = GridPos::new(2, 2);
        assert_eq!(Direction::Up.apply(pos), GridPos::new(2, 3));
        assert_eq!(Direction::Down.apply(pos), GridPos::new(2, 1));
        assert_eq!(Direction::Left.apply(pos), GridPos::new(1, 2));
        assert_eq!(Direction::Right.apply(pos), GridPos::new(3, 2));
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "\"up\"");
        let dir: Direction = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(dir, Direction::Left);
    }
}
