use quickcheck::{Arbitrary, Gen};

use crate::{Board, Color, Position, Shape, Tile, COLORS, SHAPES};

/// A board built by legal moves from an empty board, plus a small hand.
#[derive(Clone, Debug)]
pub struct BoardInput {
    // Has at least one tile, and is padded
    pub board: Board,
    // Zero to three tiles, possibly with duplicates
    pub hand: Vec<Tile>,
}

impl Arbitrary for BoardInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut board = Board::new();
        board.play_tile(Tile::arbitrary(g), Position::new(0, 0));
        board.adjust_padding();

        let num_attempts = u8::arbitrary(g) % 12;
        for _ in 0..num_attempts {
            let tile = Tile::arbitrary(g);
            let mut valid_positions = Vec::new();
            for row in 0..board.rows() as i32 {
                for col in 0..board.cols() as i32 {
                    if board.is_valid_move(tile, Position::new(row, col)) {
                        valid_positions.push(Position::new(row, col));
                    }
                }
            }
            if let Some(&position) = g.choose(valid_positions.as_slice()) {
                board.play_tile(tile, position);
                board.adjust_padding();
            }
        }

        let hand_size = u8::arbitrary(g) % 4;
        let hand = (0..hand_size).map(|_| Tile::arbitrary(g)).collect();

        BoardInput { board, hand }
    }
}

impl Arbitrary for Shape {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&SHAPES).unwrap()
    }
}

impl Arbitrary for Color {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&COLORS).unwrap()
    }
}

impl Arbitrary for Tile {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            shape: Shape::arbitrary(g),
            color: Color::arbitrary(g),
        }
    }
}
