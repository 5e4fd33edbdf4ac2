use crate::Tile;

/// A compact set of distinct [`Tile`]s, used to spot a tile that occurs
/// twice in a line.
///
/// ```
/// use qwirkle::{tile, TilesSet};
/// let mut set = TilesSet::new();
/// // This is an immutable data type, so functions like `insert` return a new `TilesSet`.
/// set = set.insert(tile!("Bs"));
/// set = set.insert(tile!("Bs"));  // Inserting a second time has no effect
/// assert!(set.contains(tile!("Bs")));
/// assert!(!set.contains(tile!("Ro")));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TilesSet {
    // Only the low 36 bits are used.
    bits: u64,
}

impl TilesSet {
    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn contains(self, tile: Tile) -> bool {
        (self.bits & (1u64 << tile.to_index())) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, tile: Tile) -> Self {
        Self {
            bits: self.bits | (1u64 << tile.to_index()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tile, COLORS, SHAPES};

    #[test]
    fn tiles_differing_in_one_aspect_are_distinct() {
        let set = TilesSet::new().insert(tile!("Gc"));
        assert!(set.contains(tile!("Gc")));
        assert!(!set.contains(tile!("Go")));
        assert!(!set.contains(tile!("Rc")));
    }

    #[test]
    fn holds_all_tiles() {
        let mut set = TilesSet::new();
        for shape in SHAPES {
            for color in COLORS {
                let tile = Tile::new(shape, color);
                assert!(!set.contains(tile));
                set = set.insert(tile);
            }
        }
        assert_eq!(set.bits.count_ones(), 36);
    }
}
