use serde::{Deserialize, Serialize};

use crate::{Position, Tile};

/// Request for a bot to do something.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Request to play the next turn.
    ///
    /// The response should be a [`PlayTurnResponse`].
    PlayTurn {
        /// The hand of the player. May contain the same tile more than once.
        hand: Vec<Tile>,
        /// The board, as a rectangular grid of rows. `null` marks an empty cell.
        ///
        /// An empty board is `[[null]]`, and the first tile must be placed on
        /// `(0, 0)`.
        grid: Vec<Vec<Option<Tile>>>,
    },
    /// The bot should shut down.
    Bye,
}

/// Specifies which tile to place, and where.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePlacement {
    pub tile: Tile,
    pub position: Position,
}

/// The tiles to place in this turn, in order.
///
/// Positions refer to the grid of the request. They may lie one step
/// outside of it, in which case the board has to grow to hold them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayTurnResponse(pub Vec<TilePlacement>);
