//! Actions: coordinates of the cell a move fills.

use crate::types::Board;
use serde::{Deserialize, Serialize};

/// A move target: the `(row, col)` of a cell.
///
/// Coordinates are not checked on construction. [`apply`](crate::apply)
/// rejects actions that fall outside the board or hit an occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// Row index (0-2 on the board).
    pub row: usize,
    /// Column index (0-2 on the board).
    pub col: usize,
}

impl Action {
    /// All nine on-board actions in row-major order.
    pub const ALL: [Action; 9] = [
        Action::new(0, 0),
        Action::new(0, 1),
        Action::new(0, 2),
        Action::new(1, 0),
        Action::new(1, 1),
        Action::new(1, 2),
        Action::new(2, 0),
        Action::new(2, 1),
        Action::new(2, 2),
    ];

    /// Creates an action.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major cell index, or `None` when off the board.
    pub fn index(&self) -> Option<usize> {
        if self.row < Board::SIZE && self.col < Board::SIZE {
            Some(self.row * Board::SIZE + self.col)
        } else {
            None
        }
    }

    /// Human-readable name of the target cell.
    pub fn label(&self) -> &'static str {
        match self.index() {
            Some(0) => "top-left",
            Some(1) => "top-center",
            Some(2) => "top-right",
            Some(3) => "middle-left",
            Some(4) => "center",
            Some(5) => "middle-right",
            Some(6) => "bottom-left",
            Some(7) => "bottom-center",
            Some(8) => "bottom-right",
            _ => "off-board",
        }
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_row_major() {
        assert_eq!(Action::new(0, 0).index(), Some(0));
        assert_eq!(Action::new(1, 1).index(), Some(4));
        assert_eq!(Action::new(2, 2).index(), Some(8));
    }

    #[test]
    fn test_index_off_board() {
        assert_eq!(Action::new(3, 0).index(), None);
        assert_eq!(Action::new(0, 7).index(), None);
        assert_eq!(Action::new(0, 7).label(), "off-board");
    }

    #[test]
    fn test_all_is_sorted() {
        let mut sorted = Action::ALL;
        sorted.sort();
        assert_eq!(sorted, Action::ALL);
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::from((0, 2)).to_string(), "(0, 2)");
        assert_eq!(Action::new(0, 2).label(), "top-right");
    }
}
