//! Win detection.

use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// The eight winning lines as row-major cell indices.
///
/// Order is significant: rows top to bottom, columns left to right,
/// then the main diagonal and the anti-diagonal.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Yields the owner of every complete line, in [`LINES`] order.
pub fn line_owners(board: &Board) -> impl Iterator<Item = Mark> + '_ {
    let cells = board.cells();
    LINES.iter().filter_map(move |&[a, b, c]| match cells[a] {
        Cell::Occupied(mark) if cells[b] == cells[a] && cells[c] == cells[a] => Some(mark),
        _ => None,
    })
}

/// Returns the mark holding the first complete line, if any.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    line_owners(board).next()
}
