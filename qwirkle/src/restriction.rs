use crate::{Position, TurnMoves};

/// Where the next tile of a turn may go, given the tiles already placed in it.
///
/// All tiles of a turn must be placed in a single row or column.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TileRestriction {
    /// Nothing placed yet.
    None,
    /// One tile placed, at the anchor.
    SameRowOrCol(Position),
    /// The first two tiles share the anchor's row.
    SameRow(Position),
    /// The first two tiles share the anchor's column.
    SameCol(Position),
}

impl TileRestriction {
    pub fn from_moves(moves: &TurnMoves) -> Self {
        match moves.positions() {
            [] => TileRestriction::None,
            [anchor] => TileRestriction::SameRowOrCol(*anchor),
            [anchor, second, ..] => {
                if anchor.row == second.row {
                    TileRestriction::SameRow(*anchor)
                } else {
                    TileRestriction::SameCol(*anchor)
                }
            }
        }
    }

    pub fn allows(&self, position: Position) -> bool {
        match *self {
            TileRestriction::None => true,
            TileRestriction::SameRowOrCol(anchor) => {
                position.row == anchor.row || position.col == anchor.col
            }
            TileRestriction::SameRow(anchor) => position.row == anchor.row,
            TileRestriction::SameCol(anchor) => position.col == anchor.col,
        }
    }

    /// Keeps only the allowed positions, in their original order.
    pub fn filter(&self, positions: Vec<Position>) -> Vec<Position> {
        positions
            .into_iter()
            .filter(|&position| self.allows(position))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile;

    #[test]
    fn derived_from_first_two_placements() {
        let mut moves = TurnMoves::new();
        assert_eq!(TileRestriction::from_moves(&moves), TileRestriction::None);

        moves.append(tile!("Bo"), Position::new(2, 3));
        assert_eq!(
            TileRestriction::from_moves(&moves),
            TileRestriction::SameRowOrCol(Position::new(2, 3))
        );

        moves.append(tile!("B*"), Position::new(3, 3));
        assert_eq!(
            TileRestriction::from_moves(&moves),
            TileRestriction::SameCol(Position::new(2, 3))
        );

        // Only the first two count
        moves.append(tile!("Bc"), Position::new(2, 4));
        assert_eq!(
            TileRestriction::from_moves(&moves),
            TileRestriction::SameCol(Position::new(2, 3))
        );

        let mut moves = TurnMoves::new();
        moves.append(tile!("Bo"), Position::new(2, 3));
        moves.append(tile!("B*"), Position::new(2, 1));
        assert_eq!(
            TileRestriction::from_moves(&moves),
            TileRestriction::SameRow(Position::new(2, 3))
        );
    }

    #[test]
    fn allowed_positions() {
        let anchor = Position::new(1, 1);
        let positions = vec![
            Position::new(1, 5),
            Position::new(4, 1),
            Position::new(0, 0),
        ];
        assert_eq!(TileRestriction::None.filter(positions.clone()), positions);
        assert_eq!(
            TileRestriction::SameRowOrCol(anchor).filter(positions.clone()),
            vec![Position::new(1, 5), Position::new(4, 1)]
        );
        assert_eq!(
            TileRestriction::SameRow(anchor).filter(positions.clone()),
            vec![Position::new(1, 5)]
        );
        assert_eq!(
            TileRestriction::SameCol(anchor).filter(positions),
            vec![Position::new(4, 1)]
        );
    }
}
