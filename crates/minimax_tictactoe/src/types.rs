//! Core domain types for tic-tac-toe.

use crate::error::BoardError;
use crate::invariants::{BoardInvariants, InvariantSet};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum Mark {
    /// Player X (moves first, maximizes utility).
    X,
    /// Player O (moves second, minimizes utility).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Utility of a win by this mark, from X's perspective.
    pub fn win_utility(self) -> i32 {
        match self {
            Mark::X => 1,
            Mark::O => -1,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Character used for this cell in board notation.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Cell::Occupied(Mark::X)),
            'O' | 'o' => Some(Cell::Occupied(Mark::O)),
            '.' | '_' | '-' => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: moves produce a new board through
/// [`apply`](crate::apply) and never modify an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Side length of the board.
    pub const SIZE: usize = 3;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < Self::SIZE && col < Self::SIZE {
            Some(self.cells[row * Self::SIZE + col])
        } else {
            None
        }
    }

    /// Checks if the cell at `(row, col)` is on the board and empty.
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Occupied(mark))
            .count()
    }

    /// Number of occupied cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Returns a copy of this board with the cell at `index` replaced.
    pub(crate) fn with_cell(mut self, index: usize, cell: Cell) -> Self {
        self.cells[index] = cell;
        self
    }

    /// Builds a board from raw cells, checking the board invariants.
    #[instrument]
    pub fn from_cells(cells: [Cell; 9]) -> Result<Self, BoardError> {
        let board = Self { cells };
        BoardInvariants::check_all(&board).map_err(|violations| {
            BoardError::InvariantViolation {
                description: violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            }
        })?;
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(Self::SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = cells.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Parses board notation: nine cells in row-major order.
///
/// `X`/`O` (either case) are marks, `.`, `_` and `-` are empty cells.
/// Whitespace, `/` and `|` are ignored so rows can be separated.
impl FromStr for Board {
    type Err = BoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            if c.is_whitespace() || c == '/' || c == '|' {
                continue;
            }
            let cell = Cell::from_symbol(c).ok_or(BoardError::InvalidCell { found: c })?;
            cells.push(cell);
        }

        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|v: Vec<Cell>| BoardError::InvalidLength { found: v.len() })?;
        Self::from_cells(cells)
    }
}

/// Result of a board, derived from its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner and empty cells remain.
    InProgress,
    /// A mark holds a complete line.
    Won(Mark),
    /// Full board with no winner.
    Draw,
}

impl Outcome {
    /// Returns true unless the game is still in progress.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    /// Score from X's perspective: +1 X wins, -1 O wins, 0 otherwise.
    pub fn utility(self) -> i32 {
        match self {
            Outcome::Won(mark) => mark.win_utility(),
            Outcome::InProgress | Outcome::Draw => 0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|c| *c == Cell::Empty));
        assert_eq!(board.filled(), 0);
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
        assert_eq!(board.get(2, 2), Some(Cell::Empty));
    }

    #[test]
    fn test_parse_with_separators() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(board.get(0, 1), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.get(1, 0), Some(Cell::Occupied(Mark::O)));
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 2);
    }

    #[test]
    fn test_parse_accepts_lowercase_and_underscores() {
        let board: Board = "x__ _o_ ___".parse().unwrap();
        assert_eq!(board.get(0, 0), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.get(1, 1), Some(Cell::Occupied(Mark::O)));
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        let err = "XO.".parse::<Board>().unwrap_err();
        assert_eq!(err, BoardError::InvalidLength { found: 3 });
    }

    #[test]
    fn test_parse_rejects_bad_cell() {
        let err = "XO?......".parse::<Board>().unwrap_err();
        assert_eq!(err, BoardError::InvalidCell { found: '?' });
    }

    #[test]
    fn test_parse_rejects_unbalanced_marks() {
        let err = "OO.......".parse::<Board>().unwrap_err();
        assert!(matches!(err, BoardError::InvariantViolation { .. }));

        let err = "XXX......".parse::<Board>().unwrap_err();
        assert!(matches!(err, BoardError::InvariantViolation { .. }));
    }

    #[test]
    fn test_display_round_trip() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.to_string(), "X O .\n. X .\n. . O");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_outcome_utility() {
        assert_eq!(Outcome::Won(Mark::X).utility(), 1);
        assert_eq!(Outcome::Won(Mark::O).utility(), -1);
        assert_eq!(Outcome::Draw.utility(), 0);
        assert!(!Outcome::InProgress.is_over());
    }
}
