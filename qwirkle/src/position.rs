use serde::{Deserialize, Serialize};

/// A coordinate on the board.
///
/// Coordinates are signed so that positions just outside of the grid can
/// be expressed, e.g. when a bot reports a placement on a row that
/// [`Board::adjust_padding()`](crate::Board::adjust_padding) inserted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Moves the position by the given amount of rows and columns.
    #[must_use]
    pub fn offset(self, rows: i32, cols: i32) -> Self {
        Self {
            row: self.row + rows,
            col: self.col + cols,
        }
    }

    /// Like [`Self::offset()`], but `None` if a coordinate would overflow.
    pub fn checked_offset(self, rows: i32, cols: i32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(rows)?,
            col: self.col.checked_add(cols)?,
        })
    }

    /// The four orthogonal neighbors, in the order left, right, up, down.
    pub fn neighbors(self) -> [Position; 4] {
        [
            self.offset(0, -1),
            self.offset(0, 1),
            self.offset(-1, 0),
            self.offset(1, 0),
        ]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
