use serde::{Deserialize, Serialize};

use crate::{Position, Tile, TilePlacement};

/// The tiles placed so far in the turn that is being explored.
///
/// Moves are undone in the reverse order they were made.
#[derive(Clone, Debug, Default)]
pub struct TurnMoves {
    tiles: Vec<Tile>,
    positions: Vec<Position>,
}

/// Returned by [`TurnMoves::discard_last()`] when there is nothing to discard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyTurnMoves;

impl std::error::Error for EmptyTurnMoves {}

impl std::fmt::Display for EmptyTurnMoves {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tried to discard a move, but no moves were made")
    }
}

/// A complete sequence of placements for one turn, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play(pub Vec<TilePlacement>);

impl TurnMoves {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, tile: Tile, position: Position) {
        self.tiles.push(tile);
        self.positions.push(position);
    }

    /// Removes the most recent move and returns it.
    pub fn discard_last(&mut self) -> Result<(Tile, Position), EmptyTurnMoves> {
        match (self.tiles.pop(), self.positions.pop()) {
            (Some(tile), Some(position)) => Ok((tile, position)),
            _ => Err(EmptyTurnMoves),
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tile, Position)> + '_ {
        self.tiles.iter().copied().zip(self.positions.iter().copied())
    }

    /// Copies the moves made so far.
    pub fn to_play(&self) -> Play {
        Play(
            self.iter()
                .map(|(tile, position)| TilePlacement { tile, position })
                .collect(),
        )
    }
}

impl Play {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TilePlacement> + '_ {
        self.0.iter()
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "(pass)");
        }
        for (idx, placement) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}{}", placement.tile, placement.position)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile;

    #[test]
    fn discard_is_last_in_first_out() {
        let mut moves = TurnMoves::new();
        moves.append(tile!("Ro"), Position::new(0, 1));
        moves.append(tile!("Rs"), Position::new(0, 2));
        assert_eq!(moves.len(), 2);
        assert_eq!(moves.discard_last(), Ok((tile!("Rs"), Position::new(0, 2))));
        assert_eq!(moves.discard_last(), Ok((tile!("Ro"), Position::new(0, 1))));
        assert_eq!(moves.discard_last(), Err(EmptyTurnMoves));
        assert!(moves.is_empty());
    }

    #[test]
    fn play_is_an_independent_copy() {
        let mut moves = TurnMoves::new();
        moves.append(tile!("Ro"), Position::new(0, 1));
        let play = moves.to_play();
        moves.append(tile!("Rs"), Position::new(0, 2));
        moves.discard_last().unwrap();
        moves.discard_last().unwrap();
        assert_eq!(
            play,
            Play(vec![TilePlacement {
                tile: tile!("Ro"),
                position: Position::new(0, 1)
            }])
        );
        assert_eq!(play.to_string(), "Ro(0, 1)");
    }
}
