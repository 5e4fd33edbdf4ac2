use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::{find_valid_plays, Axis, Board, Play, Tile, NUM_ASPECT_VALUES};

/// Extra points for completing a line with every shape or every color.
pub const QWIRKLE_BONUS: u32 = 6;

/// The points scored by making the play on the board.
///
/// Every line of at least two tiles that contains a newly placed tile
/// counts its length once, and a line of six tiles counts the
/// [`QWIRKLE_BONUS`] on top. A tile that forms no line at all, which is
/// only possible on the very first turn, is worth a single point.
///
/// The board itself is not changed. Panics if a position of the play is
/// not on the board.
pub fn score_play(board: &Board, play: &Play) -> u32 {
    if play.is_empty() {
        return 0;
    }

    let mut board = board.clone();
    for placement in play.iter() {
        board.play_tile(placement.tile, placement.position);
    }

    let mut lines = BTreeSet::new();
    for placement in play.iter() {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let (start, end) = board.line_bounds(placement.position, axis);
            if start != end {
                lines.insert((axis, start, end));
            }
        }
    }
    if lines.is_empty() {
        return 1;
    }

    lines
        .into_iter()
        .map(|(_, start, end)| {
            // One of the two differences is zero
            let len = (end.row - start.row + end.col - start.col + 1) as u32;
            if len as usize == NUM_ASPECT_VALUES {
                len + QWIRKLE_BONUS
            } else {
                len
            }
        })
        .sum()
}

/// All plays with the highest score, in the order they were found, and that score.
///
/// There is always at least one play, since not placing any tile is a play
/// (worth zero points).
pub fn best_plays(board: &mut Board, hand: &mut [Tile]) -> (u32, Vec<Play>) {
    let mut top_score = 0;
    let mut top_choices = Vec::new();
    for play in find_valid_plays(board, hand) {
        let score = score_play(board, &play);
        match score.cmp(&top_score) {
            Ordering::Less => {}
            Ordering::Equal => {
                top_choices.push(play);
            }
            Ordering::Greater => {
                top_choices = vec![play];
                top_score = score;
            }
        }
    }
    (top_score, top_choices)
}
