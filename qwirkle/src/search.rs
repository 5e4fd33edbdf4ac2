use std::collections::BTreeSet;

use tracing::debug;

use crate::{Board, Play, Position, Tile, TileRestriction, TurnMoves};

/// Finds all plays that can be made with the given hand.
///
/// Tiles can be placed in any order and any number, including none at all.
/// Every placement must be legal on the board as it is after the earlier
/// placements of the same play, and all placements of a play lie in a single
/// row or column. Plays are returned in the order they are found, which is
/// depth-first. Identical tiles in the hand produce identical plays, which
/// are kept.
///
/// The board and the hand are used as scratch space, but are back in their
/// original state when this function returns.
///
/// Positions just outside of the grid are never considered, so the board
/// should usually be [padded](Board::adjust_padding) first.
pub fn find_valid_plays(board: &mut Board, hand: &mut [Tile]) -> Vec<Play> {
    TurnSearch::new(board, hand).run()
}

/// Backtracking search behind [`find_valid_plays()`].
///
/// The hand is split in two: the tiles in `hand[..depth]` have been placed,
/// the rest is still available. Placing a tile swaps it to the end of the
/// placed part, and undoing the placement swaps it back.
pub struct TurnSearch<'a> {
    board: &'a mut Board,
    hand: &'a mut [Tile],
    moves: TurnMoves,
    plays: Vec<Play>,
}

impl<'a> TurnSearch<'a> {
    pub fn new(board: &'a mut Board, hand: &'a mut [Tile]) -> Self {
        Self {
            board,
            hand,
            moves: TurnMoves::new(),
            plays: Vec::new(),
        }
    }

    pub fn run(mut self) -> Vec<Play> {
        // Not placing anything is always possible
        self.plays.push(self.moves.to_play());
        self.search(0);
        debug!(
            hand_size = self.hand.len(),
            num_plays = self.plays.len(),
            "Finished turn search"
        );
        self.plays
    }

    fn search(&mut self, depth: usize) {
        // Every play was recorded when its last tile was placed
        if depth == self.hand.len() {
            return;
        }

        let positions = self.playable_positions();
        for i in depth..self.hand.len() {
            let tile = self.hand[i];
            for &position in &positions {
                if !self.board.is_valid_move(tile, position) {
                    continue;
                }

                let state = self.board.state();
                self.board.play_tile(tile, position);
                self.moves.append(tile, position);
                self.plays.push(self.moves.to_play());
                self.hand.swap(depth, i);

                self.search(depth + 1);

                self.moves
                    .discard_last()
                    .expect("Turn moves out of sync with the search depth");
                self.board.restore_state(state);
                self.hand.swap(depth, i);
            }
        }
    }

    /// The empty cells next to any tile, in the order they are first found,
    /// that are in line with the tiles placed in this turn.
    ///
    /// On an empty board, this is just the origin.
    fn playable_positions(&self) -> Vec<Position> {
        if self.board.is_empty() {
            return vec![Position::new(0, 0)];
        }

        let mut seen = BTreeSet::new();
        let mut positions = Vec::new();
        for &played_position in self.board.played_positions() {
            for position in self.board.adjacent_empty_positions(played_position) {
                if seen.insert(position) {
                    positions.push(position);
                }
            }
        }
        TileRestriction::from_moves(&self.moves).filter(positions)
    }
}
