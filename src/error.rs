//! Errors reported by field construction and editing.

use thiserror::Error;

use crate::field::tile::TileKind;
use crate::grid::Coord;

#[derive(Error, Debug)]
pub enum Error {
    /// A construction parameter is unusable. The field, if any,
    /// retains its previous state.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// An edit command addressed coordinates outside the field.
    #[error("coordinates {coord} are outside the {width}x{height} field")]
    OutOfBounds { coord: Coord, width: u32, height: u32 },

    /// A tile kind without an entry in the tileset.
    #[error("tile kind {kind:?} has no tileset entry")]
    UnknownTile { kind: TileKind },
}

pub type Result<T> = std::result::Result<T, Error>;
