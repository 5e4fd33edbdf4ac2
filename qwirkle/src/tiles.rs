use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of distinct shapes, which is also the number of distinct colors.
///
/// A line can never be longer than this without containing a duplicate.
pub const NUM_ASPECT_VALUES: usize = 6;

/// A tile, identified by its shape and color.
///
/// There are 36 distinct tiles. In a real game every distinct tile exists
/// three times, so a hand may contain duplicates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub shape: Shape,
    pub color: Color,
}

/// The shape of a [tile](Tile).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Shape {
    Circle,
    Square,
    Diamond,
    Star,
    Clover,
    Cross,
}

/// The color of a [tile](Tile).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

pub static SHAPES: [Shape; NUM_ASPECT_VALUES] = [
    Shape::Circle,
    Shape::Square,
    Shape::Diamond,
    Shape::Star,
    Shape::Clover,
    Shape::Cross,
];

pub static COLORS: [Color; NUM_ASPECT_VALUES] = [
    Color::Red,
    Color::Orange,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Purple,
];

impl Shape {
    pub fn symbol(self) -> char {
        match self {
            Shape::Circle => 'o',
            Shape::Square => 's',
            Shape::Diamond => 'd',
            Shape::Star => '*',
            Shape::Clover => 'c',
            Shape::Cross => 'x',
        }
    }
}

impl Color {
    pub fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Purple => 'P',
        }
    }
}

impl Tile {
    pub fn new(shape: Shape, color: Color) -> Self {
        Self { shape, color }
    }

    /// Index in `0..36`, used by [`TilesSet`](crate::TilesSet).
    pub(crate) fn to_index(self) -> u8 {
        self.shape as u8 * NUM_ASPECT_VALUES as u8 + self.color as u8
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.color.letter(), self.shape.symbol())
    }
}

/// The error type for the [`FromStr`] instance of [`Tile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileFromStrErr {
    LessThanTwoChars,
    MoreThanTwoChars,
    InvalidColor,
    InvalidShape,
}

impl std::error::Error for TileFromStrErr {}

impl std::fmt::Display for TileFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileFromStrErr::LessThanTwoChars => write!(f, "Tile code has less than two characters"),
            TileFromStrErr::MoreThanTwoChars => write!(f, "Tile code has more than two characters"),
            TileFromStrErr::InvalidColor => write!(f, "Tile code starts with an unknown color letter"),
            TileFromStrErr::InvalidShape => write!(f, "Tile code ends with an unknown shape symbol"),
        }
    }
}

impl FromStr for Tile {
    type Err = TileFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let color_char = chars.next().ok_or(TileFromStrErr::LessThanTwoChars)?;
        let shape_char = chars.next().ok_or(TileFromStrErr::LessThanTwoChars)?;
        if chars.next().is_some() {
            return Err(TileFromStrErr::MoreThanTwoChars);
        }
        let color = COLORS
            .iter()
            .copied()
            .find(|c| c.letter() == color_char)
            .ok_or(TileFromStrErr::InvalidColor)?;
        let shape = SHAPES
            .iter()
            .copied()
            .find(|s| s.symbol() == shape_char)
            .ok_or(TileFromStrErr::InvalidShape)?;
        Ok(Tile { shape, color })
    }
}

/// Shorthand for creating tiles from a two-character code.
///
/// The first character is the [color](Color) (`R`, `O`, `Y`, `G`, `B` or `P`),
/// the second is the [shape](Shape): `o` circle, `s` square, `d` diamond,
/// `*` star, `c` clover, `x` cross.
///
/// This macro is just calling the [`FromStr`] instance of [`Tile`].
/// ```
/// # use qwirkle::{tile, Tile, Shape, Color};
/// assert_eq!(
///     tile!("B*"),
///     Tile { shape: Shape::Star, color: Color::Blue }
/// );
/// ```
#[macro_export]
macro_rules! tile {
    ($code:literal) => {
        <$crate::Tile as std::str::FromStr>::from_str($code)
            .expect("Invalid tile code given to tile! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use tile;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tile_has_its_own_index() {
        let indices: Vec<u8> = SHAPES
            .iter()
            .flat_map(|&shape| {
                COLORS
                    .iter()
                    .map(move |&color| Tile::new(shape, color).to_index())
            })
            .collect();
        assert_eq!(indices, (0..36).collect::<Vec<u8>>());
    }

    #[test]
    fn parse_errors() {
        assert_eq!("B".parse::<Tile>(), Err(TileFromStrErr::LessThanTwoChars));
        assert_eq!("Bss".parse::<Tile>(), Err(TileFromStrErr::MoreThanTwoChars));
        assert_eq!("Ks".parse::<Tile>(), Err(TileFromStrErr::InvalidColor));
        assert_eq!("Bq".parse::<Tile>(), Err(TileFromStrErr::InvalidShape));
    }

    #[test]
    fn display_uses_tile_code() {
        assert_eq!(tile!("Px").to_string(), "Px");
        assert_eq!(Tile::new(Shape::Clover, Color::Green).to_string(), "Gc");
    }

    #[test]
    fn serializes_with_lowercase_names() {
        let json = serde_json::to_string(&tile!("Rd")).unwrap();
        assert_eq!(json, r#"{"shape":"diamond","color":"red"}"#);
    }
}
