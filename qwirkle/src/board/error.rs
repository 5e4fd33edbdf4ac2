use crate::Position;

/// The reason why a tile can't be placed, see [`Board::check_move()`](crate::Board::check_move).
///
/// These are routine outcomes when searching for moves, not defects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalTilePlaced {
    /// The board is empty and the tile was not placed on the origin.
    NotAtOrigin { position: Position },
    OutOfBounds { position: Position },
    SpaceTaken { position: Position },
    NoAdjacentTile { position: Position },
    InvalidHorizontalLine { position: Position },
    InvalidVerticalLine { position: Position },
}

impl std::error::Error for IllegalTilePlaced {}

impl std::fmt::Display for IllegalTilePlaced {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalTilePlaced::NotAtOrigin { position } =>
                write!(f, "The first tile must be placed on (0, 0), not on {}", position),
            IllegalTilePlaced::OutOfBounds { position } =>
                write!(f, "Tile was placed out of the bounds of the board, on {}", position),
            IllegalTilePlaced::SpaceTaken { position } =>
                write!(f, "Tile was placed on {}, which already holds a tile", position),
            IllegalTilePlaced::NoAdjacentTile { position } =>
                write!(f, "Tile was placed on {}, which has no adjacent tile", position),
            IllegalTilePlaced::InvalidHorizontalLine { position } =>
                write!(f, "Tile placed on {} does not fit into its horizontal line", position),
            IllegalTilePlaced::InvalidVerticalLine { position } =>
                write!(f, "Tile placed on {} does not fit into its vertical line", position),
        }
    }
}

/// The error type for [`Board::from_grid()`](crate::Board::from_grid).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstructionError {
    /// The grid has no rows, or its rows have no cells.
    EmptyGrid,
    /// A row differs in length from the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl std::error::Error for ConstructionError {}

impl std::fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstructionError::EmptyGrid => write!(f, "A board needs at least one cell"),
            ConstructionError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} of the grid has {} cells, but the first row has {}",
                row, found, expected
            ),
        }
    }
}
