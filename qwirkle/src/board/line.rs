use crate::{Board, Color, Position, Shape, Tile, TilesSet};

/// One of the two directions a line can run in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
}

impl Axis {
    // (rows, cols) to move one step towards the end of a line
    fn step(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
        }
    }
}

/// The attribute that all tiles of a line have in common.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Aspect {
    Shape(Shape),
    Color(Color),
}

impl Aspect {
    /// Determined by the first two tiles of a line. If they are identical,
    /// the shape takes precedence.
    fn governing(first: Tile, second: Tile) -> Option<Self> {
        if first.shape == second.shape {
            Some(Aspect::Shape(first.shape))
        } else if first.color == second.color {
            Some(Aspect::Color(first.color))
        } else {
            None
        }
    }

    fn matches(self, tile: Tile) -> bool {
        match self {
            Aspect::Shape(shape) => tile.shape == shape,
            Aspect::Color(color) => tile.color == color,
        }
    }
}

impl Board {
    /// The line that `tile` would form when placed on `position`, along the row.
    ///
    /// The tile itself comes first, followed by the tiles to its right
    /// (nearest first) and then the tiles to its left (nearest first).
    /// Scanning stops at the first empty cell or at the edge of the board.
    pub fn adjacent_horizontal_line(&self, tile: Tile, position: Position) -> Vec<Tile> {
        self.adjacent_line(tile, position, Axis::Horizontal)
    }

    /// Like [`Self::adjacent_horizontal_line()`], but along the column: the tile,
    /// then the tiles below it, then the tiles above it.
    pub fn adjacent_vertical_line(&self, tile: Tile, position: Position) -> Vec<Tile> {
        self.adjacent_line(tile, position, Axis::Vertical)
    }

    pub fn adjacent_line(&self, tile: Tile, position: Position, axis: Axis) -> Vec<Tile> {
        let (d_row, d_col) = axis.step();
        let mut line = vec![tile];
        for sign in [1, -1] {
            let mut cursor = position;
            while let Some((next, neighbor)) =
                self.next_tile(cursor, sign * d_row, sign * d_col)
            {
                line.push(neighbor);
                cursor = next;
            }
        }
        line
    }

    /// The first and last position of the contiguous run of tiles through
    /// `position` along `axis`.
    ///
    /// `position` itself is treated as occupied, whether it is or not.
    pub fn line_bounds(&self, position: Position, axis: Axis) -> (Position, Position) {
        let (d_row, d_col) = axis.step();
        let mut start = position;
        while let Some((previous, _)) = self.next_tile(start, -d_row, -d_col) {
            start = previous;
        }
        let mut end = position;
        while let Some((next, _)) = self.next_tile(end, d_row, d_col) {
            end = next;
        }
        (start, end)
    }

    // The neighboring position in the given direction, if it holds a tile
    fn next_tile(&self, position: Position, d_row: i32, d_col: i32) -> Option<(Position, Tile)> {
        let next = position.checked_offset(d_row, d_col)?;
        Some((next, self.get(next)?))
    }

    /// Whether all tiles in the line share a shape or all share a color,
    /// without any tile occurring twice.
    ///
    /// Lines of zero or one tiles are always valid.
    pub fn is_valid_line(line: &[Tile]) -> bool {
        let aspect = match line {
            [first, second, ..] => match Aspect::governing(*first, *second) {
                Some(aspect) => aspect,
                None => return false,
            },
            _ => return true,
        };

        let mut seen = TilesSet::new();
        for &tile in line {
            if seen.contains(tile) || !aspect.matches(tile) {
                return false;
            }
            seen = seen.insert(tile);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::tile;

    quickcheck! {
        fn short_lines_are_valid(tiles: Vec<Tile>) -> bool {
            let line: Vec<Tile> = tiles.into_iter().take(1).collect();
            Board::is_valid_line(&line)
        }

        fn lines_with_duplicates_are_invalid(tiles: Vec<Tile>, duplicate: Tile, idx: usize) -> bool {
            let mut line = tiles;
            line.push(duplicate);
            let idx = idx % line.len();
            line.insert(idx, duplicate);
            !Board::is_valid_line(&line)
        }
    }

    #[test]
    fn same_color_line() {
        assert!(Board::is_valid_line(&[tile!("Bs"), tile!("Bo"), tile!("B*")]));
        assert!(!Board::is_valid_line(&[tile!("Bs"), tile!("Bo"), tile!("Ro")]));
    }

    #[test]
    fn same_shape_line() {
        assert!(Board::is_valid_line(&[tile!("Rx"), tile!("Gx"), tile!("Px")]));
        assert!(!Board::is_valid_line(&[tile!("Rx"), tile!("Gx"), tile!("Gc")]));
    }

    #[test]
    fn first_two_tiles_decide_the_aspect() {
        // Shares color with the second, but the first two share the shape
        assert!(!Board::is_valid_line(&[tile!("Rd"), tile!("Gd"), tile!("Go")]));
        assert!(!Board::is_valid_line(&[tile!("Rd"), tile!("Go")]));
    }

    #[test]
    fn vertical_line_lists_tiles_below_before_tiles_above() {
        let board = Board::from_grid(vec![
            vec![Some(tile!("Ro"))],
            vec![None],
            vec![Some(tile!("Rs"))],
        ])
        .unwrap();
        assert_eq!(
            board.adjacent_vertical_line(tile!("Rd"), Position::new(1, 0)),
            vec![tile!("Rd"), tile!("Rs"), tile!("Ro")]
        );
    }

    #[test]
    fn scanning_from_the_coordinate_limits() {
        let board = Board::from_grid(vec![vec![Some(tile!("Ro"))]]).unwrap();
        for position in [
            Position::new(i32::MAX, i32::MAX),
            Position::new(i32::MIN, i32::MIN),
        ] {
            let lines = [
                board.adjacent_vertical_line(tile!("Rd"), position),
                board.adjacent_horizontal_line(tile!("Rd"), position),
            ];
            assert!(lines.iter().all(|line| line == &[tile!("Rd")]));
            assert_eq!(board.line_bounds(position, Axis::Vertical), (position, position));
            assert_eq!(board.line_bounds(position, Axis::Horizontal), (position, position));
        }
    }

    #[test]
    fn lines_through_position() {
        let board = Board::from_grid(vec![
            vec![None, Some(tile!("Ys")), None, None],
            vec![Some(tile!("Rs")), None, Some(tile!("Gs")), Some(tile!("Ps"))],
            vec![None, Some(tile!("Yo")), None, None],
            vec![None, Some(tile!("Y*")), None, None],
        ])
        .unwrap();
        let center = Position::new(1, 1);
        assert_eq!(
            board.adjacent_horizontal_line(tile!("Bs"), center),
            vec![tile!("Bs"), tile!("Gs"), tile!("Ps"), tile!("Rs")]
        );
        assert_eq!(
            board.adjacent_vertical_line(tile!("Yd"), center),
            vec![tile!("Yd"), tile!("Yo"), tile!("Y*"), tile!("Ys")]
        );
        assert_eq!(
            board.adjacent_vertical_line(tile!("Yd"), Position::new(1, 3)),
            vec![tile!("Yd")]
        );
        assert_eq!(
            board.line_bounds(center, Axis::Vertical),
            (Position::new(0, 1), Position::new(3, 1))
        );
        assert_eq!(
            board.line_bounds(Position::new(1, 2), Axis::Horizontal),
            (Position::new(1, 2), Position::new(1, 3))
        );
    }
}
