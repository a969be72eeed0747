//! Implementation of the 3x3x3 Rubik's cube, in a cubie representation (permutation and
//! orientation of each piece) and a sticker representation (the color of each facelet), along with
//! conversions between the two and dense integer indices of cube states.

/// Implements `TryFrom<u8>` and `From<_> for u8` for a fieldless enum with an `ARRAY` constant
/// listing its variants in discriminant order.
macro_rules! u8_enum {
    ($ty:ident) => {
        impl TryFrom<u8> for $ty {
            type Error = $crate::error::TryFromIntToEnumError;

            fn try_from(n: u8) -> Result<Self, Self::Error> {
                Self::ARRAY
                    .get(n as usize)
                    .copied()
                    .ok_or($crate::error::TryFromIntToEnumError::OutOfBounds)
            }
        }

        impl From<$ty> for u8 {
            fn from(v: $ty) -> u8 {
                v as u8
            }
        }
    };
}
pub(crate) use u8_enum;

pub mod coordcube;
pub mod geometry;
pub mod stickercube;

pub use stickercube::StickerCube;

use crate::error::CubieCubeError;
use geometry::{Face, Facelet, CORNER_FACELETS, CORNER_FACES, EDGE_FACELETS, EDGE_FACES};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A corner piece, or equivalently a corner position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Corner {
    UBL,
    UBR,
    UFR,
    UFL,
    DBL,
    DBR,
    DFR,
    DFL,
}

/// An edge piece, or equivalently an edge position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Edge {
    UB,
    UR,
    UF,
    UL,
    BL,
    BR,
    FR,
    FL,
    DB,
    DR,
    DF,
    DL,
}

/// The twist of a corner in its position. A corner with twist `n` has the sticker that belongs
/// on its U/D face sitting `3 - n` slots along its position's U/D, B/F, L/R facelets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(test, derive(Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CornerTwist {
    /// No twist
    #[default]
    Oriented,
    /// Twisted once
    Clockwise,
    /// Twisted twice
    AntiClockwise,
}

/// Whether an edge is flipped in its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(test, derive(Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum EdgeFlip {
    /// Stickers in reference order
    #[default]
    Oriented,
    /// Stickers swapped
    Flipped,
}

impl Corner {
    /// Every corner, in order of representation.
    pub const ARRAY: [Corner; 8] = [
        Corner::UBL,
        Corner::UBR,
        Corner::UFR,
        Corner::UFL,
        Corner::DBL,
        Corner::DBR,
        Corner::DFR,
        Corner::DFL,
    ];

    /// The faces this corner piece belongs to, in U/D, B/F, L/R order.
    pub const fn faces(self) -> [Face; 3] {
        CORNER_FACES[self as usize]
    }

    /// The facelets of this corner position, in U/D, B/F, L/R order.
    pub const fn facelets(self) -> [Facelet; 3] {
        CORNER_FACELETS[self as usize]
    }
}

impl Edge {
    /// Every edge, in order of representation.
    pub const ARRAY: [Edge; 12] = [
        Edge::UB,
        Edge::UR,
        Edge::UF,
        Edge::UL,
        Edge::BL,
        Edge::BR,
        Edge::FR,
        Edge::FL,
        Edge::DB,
        Edge::DR,
        Edge::DF,
        Edge::DL,
    ];

    /// The faces this edge piece belongs to.
    pub const fn faces(self) -> [Face; 2] {
        EDGE_FACES[self as usize]
    }

    /// The facelets of this edge position.
    pub const fn facelets(self) -> [Facelet; 2] {
        EDGE_FACELETS[self as usize]
    }
}

impl CornerTwist {
    /// Every twist, in order of representation.
    pub const ARRAY: [CornerTwist; 3] = [
        CornerTwist::Oriented,
        CornerTwist::Clockwise,
        CornerTwist::AntiClockwise,
    ];

    /// Twist once more.
    pub fn clockwise(self) -> CornerTwist {
        self.twist_by(CornerTwist::Clockwise)
    }

    /// Twist once less.
    pub fn anticlockwise(self) -> CornerTwist {
        self.twist_by(CornerTwist::AntiClockwise)
    }

    /// Add two twists.
    pub fn twist_by(self, other: CornerTwist) -> CornerTwist {
        Self::ARRAY[(self as usize + other as usize) % 3]
    }

    /// The twist that undoes this one.
    pub fn inverse(self) -> CornerTwist {
        Self::ARRAY[(3 - self as usize) % 3]
    }
}

impl EdgeFlip {
    /// Every flip, in order of representation.
    pub const ARRAY: [EdgeFlip; 2] = [EdgeFlip::Oriented, EdgeFlip::Flipped];

    /// Flip the edge.
    pub fn flip(self) -> EdgeFlip {
        self.flip_by(EdgeFlip::Flipped)
    }

    /// Add two flips.
    pub fn flip_by(self, other: EdgeFlip) -> EdgeFlip {
        Self::ARRAY[(self as usize) ^ (other as usize)]
    }
}

u8_enum!(Corner);
u8_enum!(Edge);
u8_enum!(CornerTwist);
u8_enum!(EdgeFlip);

/// A cube state stored as the permutation and orientation of its pieces. Index `i` of each array
/// describes position `i`: which piece sits there, and how it is oriented.
///
/// Every combination of permutations and orientations is representable, including states that
/// cannot be reached by turning a physical cube. See [`CubieCube::illegal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "CubieCubeRepr", into = "CubieCubeRepr")
)]
pub struct CubieCube {
    /// Corner permutation
    pub cp: [Corner; 8],
    /// Corner orientation
    pub co: [CornerTwist; 8],
    /// Edge permutation
    pub ep: [Edge; 12],
    /// Edge orientation
    pub eo: [EdgeFlip; 12],
}

// Deserialized cubes go through `CubieCube::new`, so a duplicated piece is rejected.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CubieCubeRepr {
    cp: [Corner; 8],
    co: [CornerTwist; 8],
    ep: [Edge; 12],
    eo: [EdgeFlip; 12],
}

#[cfg(feature = "serde")]
impl TryFrom<CubieCubeRepr> for CubieCube {
    type Error = CubieCubeError;

    fn try_from(r: CubieCubeRepr) -> Result<CubieCube, CubieCubeError> {
        CubieCube::new(
            r.cp.map(u8::from),
            r.co.map(u8::from),
            r.ep.map(u8::from),
            r.eo.map(u8::from),
        )
    }
}

#[cfg(feature = "serde")]
impl From<CubieCube> for CubieCubeRepr {
    fn from(cube: CubieCube) -> CubieCubeRepr {
        CubieCubeRepr {
            cp: cube.cp,
            co: cube.co,
            ep: cube.ep,
            eo: cube.eo,
        }
    }
}

impl Default for CubieCube {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl CubieCube {
    /// The solved cube stored as a const.
    pub const SOLVED: CubieCube = CubieCube {
        cp: Corner::ARRAY,
        co: [CornerTwist::Oriented; 8],
        ep: Edge::ARRAY,
        eo: [EdgeFlip::Oriented; 12],
    };

    /// Build a cube from raw piece numbers and orientation values. This checks that both
    /// permutations really are permutations and that orientations are in range, but does not
    /// check that the state is reachable.
    pub fn new(
        cp: [u8; 8],
        co: [u8; 8],
        ep: [u8; 12],
        eo: [u8; 12],
    ) -> Result<CubieCube, CubieCubeError> {
        if !is_permutation(&cp) {
            return Err(CubieCubeError::CornerPermutation);
        }
        if !is_permutation(&ep) {
            return Err(CubieCubeError::EdgePermutation);
        }

        let mut cube = CubieCube::SOLVED;
        for i in 0..8 {
            cube.cp[i] = Corner::ARRAY[cp[i] as usize];
            cube.co[i] = co[i]
                .try_into()
                .map_err(|_| CubieCubeError::CornerOrientation(i))?;
        }
        for i in 0..12 {
            cube.ep[i] = Edge::ARRAY[ep[i] as usize];
            cube.eo[i] = eo[i]
                .try_into()
                .map_err(|_| CubieCubeError::EdgeOrientation(i))?;
        }

        Ok(cube)
    }

    /// The 40 byte interchange form of this cube: corner permutation, corner orientation, edge
    /// permutation and edge orientation, in that order.
    pub fn to_bytes(&self) -> [u8; 40] {
        let mut bytes = [0; 40];
        for i in 0..8 {
            bytes[i] = self.cp[i].into();
            bytes[8 + i] = self.co[i].into();
        }
        for i in 0..12 {
            bytes[16 + i] = self.ep[i].into();
            bytes[28 + i] = self.eo[i].into();
        }
        bytes
    }

    /// The total corner twist. This is `Oriented` for every reachable state.
    pub fn co_parity(&self) -> CornerTwist {
        self.co
            .iter()
            .fold(CornerTwist::Oriented, |acc, &t| acc.twist_by(t))
    }

    /// The total edge flip. This is `Oriented` for every reachable state.
    pub fn eo_parity(&self) -> EdgeFlip {
        self.eo
            .iter()
            .fold(EdgeFlip::Oriented, |acc, &f| acc.flip_by(f))
    }

    /// Whether the corner and edge permutations have different parities. This is false for every
    /// reachable state.
    pub fn perm_parity(&self) -> bool {
        odd_permutation(&self.cp.map(u8::from)) != odd_permutation(&self.ep.map(u8::from))
    }

    /// Whether this state cannot be reached by turning a physical cube.
    pub fn illegal(&self) -> bool {
        self.co_parity() != CornerTwist::Oriented
            || self.eo_parity() != EdgeFlip::Oriented
            || self.perm_parity()
    }
}

impl TryFrom<[u8; 40]> for CubieCube {
    type Error = CubieCubeError;

    fn try_from(bytes: [u8; 40]) -> Result<CubieCube, CubieCubeError> {
        let mut cp = [0; 8];
        let mut co = [0; 8];
        let mut ep = [0; 12];
        let mut eo = [0; 12];
        cp.copy_from_slice(&bytes[0..8]);
        co.copy_from_slice(&bytes[8..16]);
        ep.copy_from_slice(&bytes[16..28]);
        eo.copy_from_slice(&bytes[28..40]);
        CubieCube::new(cp, co, ep, eo)
    }
}

fn is_permutation(arr: &[u8]) -> bool {
    let mut seen = 0u16;
    for &p in arr {
        if p as usize >= arr.len() || seen & (1 << p) != 0 {
            return false;
        }
        seen |= 1 << p;
    }
    true
}

fn odd_permutation(arr: &[u8]) -> bool {
    let mut inversions = 0;
    for i in 0..arr.len() {
        inversions += arr[i + 1..].iter().filter(|&&x| x < arr[i]).count();
    }
    inversions % 2 == 1
}
