//! This module defines the error types used throughout the crate.

use thiserror::Error;

use crate::cube333::geometry::Facelet;
use crate::cube333::{Corner, CornerTwist, Edge, EdgeFlip};

/// Error type for converting integers to (C like) enums using TryFrom
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TryFromIntToEnumError {
    /// attempted to convert integer into enum value, but integer was out of bounds
    #[error("attempted to convert integer into enum value, but integer was out of bounds")]
    OutOfBounds,
}

/// Error for building a `CubieCube` out of raw bytes which do not describe a cube, e.g. a corner
/// permutation with a repeated piece. Only the structure is checked, not physical legality.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CubieCubeError {
    /// The corner permutation was not a permutation of `0..8`.
    #[error("corner permutation is not a permutation of 0..8")]
    CornerPermutation,
    /// A corner orientation value was not one of 0, 1 or 2.
    #[error("corner orientation at position {0} is out of range")]
    CornerOrientation(usize),
    /// The edge permutation was not a permutation of `0..12`.
    #[error("edge permutation is not a permutation of 0..12")]
    EdgePermutation,
    /// An edge orientation value was not 0 or 1.
    #[error("edge orientation at position {0} is out of range")]
    EdgeOrientation(usize),
}

/// Error for when the stickers of a `StickerCube` cannot be read back as a `CubieCube`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StickerToCubieError {
    /// A center sticker does not carry the reference color of its face.
    #[error("center {0:?} has the wrong color")]
    WrongCenter(Facelet),
    /// The stickers at a corner position do not match any corner piece.
    #[error("stickers at corner position {0:?} do not form a corner piece")]
    UnknownCorner(Corner),
    /// The stickers at an edge position do not match any edge piece.
    #[error("stickers at edge position {0:?} do not form an edge piece")]
    UnknownEdge(Edge),
    /// A corner piece appears at more than one position.
    #[error("corner piece {0:?} appears more than once")]
    DuplicateCorner(Corner),
    /// An edge piece appears at more than one position.
    #[error("edge piece {0:?} appears more than once")]
    DuplicateEdge(Edge),
}

/// Error for parsing a `StickerCube` from its 54 letter string form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseStickerCubeError {
    /// The string did not contain exactly 54 stickers.
    #[error("expected 54 stickers, found {0}")]
    Length(usize),
    /// A character was not one of the color initials `WBRYGO`.
    #[error("unknown color {1:?} at sticker {0}")]
    UnknownColor(usize, char),
}

/// Error for computing orientation coordinates of a cube whose orientation sums are illegal. The
/// orientation of the first corner and edge is implied by the others, so these cubes have no
/// coordinate.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cube has illegal orientation (twist {co:?}, flip {eo:?})")]
pub struct OrientationError {
    /// The corner twist coset we are in.
    pub co: CornerTwist,
    /// The edge flip coset we are in.
    pub eo: EdgeFlip,
}
