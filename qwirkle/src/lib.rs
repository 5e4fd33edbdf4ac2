pub use board::*;
pub use position::*;
pub use protocol_types::*;
pub use restriction::*;
pub use scoring::*;
pub use search::*;
pub use tiles::*;
pub use tiles_set::*;
pub use turn_moves::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod position;
mod protocol_types;
mod restriction;
mod scoring;
mod search;
mod tiles;
mod tiles_set;
mod turn_moves;
mod visualization;
