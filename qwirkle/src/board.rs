mod error;
mod line;

pub use error::*;
pub use line::*;

use tracing::trace;

use crate::{Position, Tile};

/// The tiles on the table.
///
/// The grid is a rectangle of at least 1 x 1 cells that only ever grows,
/// see [`Self::adjust_padding()`]. Coordinates are `(row, col)` indices
/// into the grid, with `(0, 0)` in the top left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Indexed by `[row][col]`. All rows have the same length.
    grid: Vec<Vec<Option<Tile>>>,
    /// There is exactly one entry in this list for every cell with a tile on it,
    /// in the order the tiles were placed.
    played_positions: Vec<Position>,
}

/// A copy of a board's complete state, see [`Board::state()`].
#[derive(Clone, Debug)]
pub struct BoardState {
    grid: Vec<Vec<Option<Tile>>>,
    played_positions: Vec<Position>,
}

impl Board {
    /// Creates an empty 1 x 1 board.
    pub fn new() -> Self {
        Self {
            grid: vec![vec![None]],
            played_positions: Vec::new(),
        }
    }

    /// Creates a board from a list of rows.
    ///
    /// The positions of the tiles are collected in row-major order.
    pub fn from_grid(grid: Vec<Vec<Option<Tile>>>) -> Result<Self, ConstructionError> {
        let num_cols = grid.first().map(Vec::len).unwrap_or(0);
        if num_cols == 0 {
            return Err(ConstructionError::EmptyGrid);
        }

        let mut played_positions = Vec::new();
        for (row_idx, row) in grid.iter().enumerate() {
            if row.len() != num_cols {
                return Err(ConstructionError::RaggedRow {
                    row: row_idx,
                    expected: num_cols,
                    found: row.len(),
                });
            }
            for (col_idx, cell) in row.iter().enumerate() {
                if cell.is_some() {
                    played_positions.push(Position::new(row_idx as i32, col_idx as i32));
                }
            }
        }

        Ok(Self {
            grid,
            played_positions,
        })
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid[0].len()
    }

    pub fn grid(&self) -> &[Vec<Option<Tile>>] {
        &self.grid
    }

    /// The positions of all tiles, in the order they were placed.
    pub fn played_positions(&self) -> &[Position] {
        &self.played_positions
    }

    /// Whether there is no tile on the board yet.
    pub fn is_empty(&self) -> bool {
        self.played_positions.is_empty()
    }

    pub fn is_in_bounds(&self, position: Position) -> bool {
        self.grid_index(position).is_some()
    }

    /// Returns the tile at the given position, if any.
    ///
    /// Positions outside of the grid are empty.
    pub fn get(&self, position: Position) -> Option<Tile> {
        let (row, col) = self.grid_index(position)?;
        self.grid[row][col]
    }

    /// Makes sure that the outermost ring of cells is empty, by adding an
    /// empty row or column on each side that has a tile on its edge.
    ///
    /// Returns how many rows and columns were inserted before the existing
    /// ones. Existing positions move by that amount, and so do the
    /// [played positions](Self::played_positions).
    pub fn adjust_padding(&mut self) -> (i32, i32) {
        let mut inserted_rows = 0;
        let mut inserted_cols = 0;

        if self.grid[0].iter().any(Option::is_some) {
            self.grid.insert(0, vec![None; self.cols()]);
            inserted_rows = 1;
        }
        if self.grid[self.rows() - 1].iter().any(Option::is_some) {
            self.grid.push(vec![None; self.cols()]);
        }
        if self.grid.iter().any(|row| row[0].is_some()) {
            for row in self.grid.iter_mut() {
                row.insert(0, None);
            }
            inserted_cols = 1;
        }
        let last_col = self.cols() - 1;
        if self.grid.iter().any(|row| row[last_col].is_some()) {
            for row in self.grid.iter_mut() {
                row.push(None);
            }
        }

        if inserted_rows != 0 || inserted_cols != 0 {
            for position in self.played_positions.iter_mut() {
                *position = position.offset(inserted_rows, inserted_cols);
            }
        }
        (inserted_rows, inserted_cols)
    }

    /// Whether the tile may be placed on the given position.
    ///
    /// See [`Self::check_move()`] for the reason why it can't.
    pub fn is_valid_move(&self, tile: Tile, position: Position) -> bool {
        match self.check_move(tile, position) {
            Ok(()) => true,
            Err(err) => {
                trace!(%tile, %err, "Rejected move");
                false
            }
        }
    }

    /// Checks whether the tile may be placed on the given position.
    ///
    /// On an empty 1 x 1 board, only the origin is allowed. Otherwise, the
    /// position must be on the board, be empty, have an occupied neighbor,
    /// and the tile must form a valid line both horizontally and vertically.
    /// The first violated condition, in this order, is returned.
    pub fn check_move(&self, tile: Tile, position: Position) -> Result<(), IllegalTilePlaced> {
        if self.is_empty() && self.rows() == 1 && self.cols() == 1 {
            return if position == Position::new(0, 0) {
                Ok(())
            } else {
                Err(IllegalTilePlaced::NotAtOrigin { position })
            };
        }

        if !self.is_in_bounds(position) {
            return Err(IllegalTilePlaced::OutOfBounds { position });
        }
        if self.get(position).is_some() {
            return Err(IllegalTilePlaced::SpaceTaken { position });
        }
        if !position.neighbors().into_iter().any(|n| self.get(n).is_some()) {
            return Err(IllegalTilePlaced::NoAdjacentTile { position });
        }
        if !Self::is_valid_line(&self.adjacent_horizontal_line(tile, position)) {
            return Err(IllegalTilePlaced::InvalidHorizontalLine { position });
        }
        if !Self::is_valid_line(&self.adjacent_vertical_line(tile, position)) {
            return Err(IllegalTilePlaced::InvalidVerticalLine { position });
        }
        Ok(())
    }

    /// Puts the tile on the board, without checking whether that's legal.
    ///
    /// Panics if the position is outside of the grid.
    pub fn play_tile(&mut self, tile: Tile, position: Position) {
        let (row, col) = self
            .grid_index(position)
            .unwrap_or_else(|| panic!("Tile {} played out of bounds on {}", tile, position));
        if self.grid[row][col].replace(tile).is_none() {
            self.played_positions.push(position);
        }
    }

    /// The empty cells next to the given position, in the order left, right, up, down.
    pub fn adjacent_empty_positions(&self, position: Position) -> Vec<Position> {
        position
            .neighbors()
            .into_iter()
            .filter(|&n| self.is_in_bounds(n) && self.get(n).is_none())
            .collect()
    }

    /// Takes a snapshot that can be restored with [`Self::restore_state()`].
    pub fn state(&self) -> BoardState {
        BoardState {
            grid: self.grid.clone(),
            played_positions: self.played_positions.clone(),
        }
    }

    /// Replaces the whole board with a snapshot.
    ///
    /// Panics if the snapshot is smaller than the current board, since a board
    /// never shrinks.
    pub fn restore_state(&mut self, state: BoardState) {
        let BoardState {
            grid,
            played_positions,
        } = state;
        assert!(
            grid.len() >= self.rows() && grid[0].len() >= self.cols(),
            "Restored a {}x{} snapshot onto a {}x{} board",
            grid.len(),
            grid[0].len(),
            self.rows(),
            self.cols()
        );
        self.grid = grid;
        self.played_positions = played_positions;
    }

    // Converts a position into grid indices, if it is on the board.
    fn grid_index(&self, position: Position) -> Option<(usize, usize)> {
        let row = usize::try_from(position.row).ok()?;
        let col = usize::try_from(position.col).ok()?;
        (row < self.rows() && col < self.cols()).then_some((row, col))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
