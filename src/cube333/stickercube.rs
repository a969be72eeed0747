//! A cube stored as the color of each of its 54 stickers, and conversions to and from the cubie
//! representation.

use super::geometry::{Color, Face, Facelet};
use super::{Corner, CornerTwist, CubieCube, Edge, EdgeFlip};
use crate::error::{ParseStickerCubeError, StickerToCubieError};

use log::trace;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// A cube stored as a sticker color for each facelet, indexed in the order of
/// [`Facelet::ARRAY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StickerCube {
    facelets: [Color; 54],
}

impl Default for StickerCube {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl StickerCube {
    /// The solved cube, where every sticker has the color of the face it lies on.
    pub const SOLVED: StickerCube = {
        let mut facelets = [Color::White; 54];
        let mut i = 0;
        while i < 54 {
            facelets[i] = Color::ARRAY[i / 9];
            i += 1;
        }
        StickerCube { facelets }
    };

    /// Build a sticker cube from raw sticker colors. Nothing is checked; use
    /// [`to_cubie`](StickerCube::to_cubie) to find out whether the stickers describe a cube.
    pub fn from_facelets(facelets: [Color; 54]) -> StickerCube {
        StickerCube { facelets }
    }

    /// The color of every sticker, in facelet order.
    pub fn facelets(&self) -> &[Color; 54] {
        &self.facelets
    }

    /// Read the pieces back off the stickers. Fails if a center is the wrong color, if some
    /// position's stickers are not a (possibly twisted or flipped) piece, or if a piece appears
    /// twice.
    pub fn to_cubie(&self) -> Result<CubieCube, StickerToCubieError> {
        let res = self.read_cubie();
        if let Err(e) = &res {
            trace!("rejected sticker cube {}: {e}", self.to_facelet_string());
        }
        res
    }

    fn read_cubie(&self) -> Result<CubieCube, StickerToCubieError> {
        for face in Face::ARRAY {
            if self[face.center()] != face.color() {
                return Err(StickerToCubieError::WrongCenter(face.center()));
            }
        }

        let mut cube = CubieCube::SOLVED;

        let mut seen = [false; 8];
        for (i, pos) in Corner::ARRAY.into_iter().enumerate() {
            let (piece, twist) = read_corner(pos.facelets().map(|f| self[f]))
                .ok_or(StickerToCubieError::UnknownCorner(pos))?;
            if std::mem::replace(&mut seen[piece as usize], true) {
                return Err(StickerToCubieError::DuplicateCorner(piece));
            }
            cube.cp[i] = piece;
            cube.co[i] = twist;
        }

        let mut seen = [false; 12];
        for (i, pos) in Edge::ARRAY.into_iter().enumerate() {
            let (piece, flip) = read_edge(pos.facelets().map(|f| self[f]))
                .ok_or(StickerToCubieError::UnknownEdge(pos))?;
            if std::mem::replace(&mut seen[piece as usize], true) {
                return Err(StickerToCubieError::DuplicateEdge(piece));
            }
            cube.ep[i] = piece;
            cube.eo[i] = flip;
        }

        Ok(cube)
    }

    /// The 54 color initials of this cube in facelet order. This is the form parsed by
    /// [`FromStr`].
    pub fn to_facelet_string(&self) -> String {
        self.facelets.iter().map(|c| c.initial()).collect()
    }

    /// The grid printed by [`Display`](fmt::Display), with facelet names padded to four
    /// characters in place of colors. Useful for working out which sticker is which.
    pub fn layout() -> String {
        let mut s = String::new();
        for r in 0..3 {
            for f in 0..6 {
                for c in 0..3 {
                    let name = format!("{:?}", Facelet::ARRAY[f * 9 + r * 3 + c]);
                    s.push_str(&format!("{name:<4}"));
                }
                s.push(' ');
            }
            s.push('\n');
        }
        s
    }
}

/// Find the corner piece and twist whose stickers, rotated by the twist, are `colors`.
fn read_corner(colors: [Color; 3]) -> Option<(Corner, CornerTwist)> {
    CornerTwist::ARRAY.into_iter().find_map(|twist| {
        let t = twist as usize;
        let faces: [Face; 3] = std::array::from_fn(|k| colors[(k + 3 - t) % 3].face());
        Corner::ARRAY
            .into_iter()
            .find(|c| c.faces() == faces)
            .map(|c| (c, twist))
    })
}

/// Find the edge piece and flip whose stickers, swapped if flipped, are `colors`.
fn read_edge(colors: [Color; 2]) -> Option<(Edge, EdgeFlip)> {
    EdgeFlip::ARRAY.into_iter().find_map(|flip| {
        let f = flip as usize;
        let faces: [Face; 2] = std::array::from_fn(|k| colors[(k + f) % 2].face());
        Edge::ARRAY
            .into_iter()
            .find(|e| e.faces() == faces)
            .map(|e| (e, flip))
    })
}

impl From<&CubieCube> for StickerCube {
    fn from(cube: &CubieCube) -> StickerCube {
        let mut facelets = [Color::White; 54];

        for face in Face::ARRAY {
            facelets[face.center() as usize] = face.color();
        }

        for (i, pos) in Corner::ARRAY.into_iter().enumerate() {
            let faces = cube.cp[i].faces();
            let t = cube.co[i] as usize;
            for (k, f) in pos.facelets().into_iter().enumerate() {
                facelets[f as usize] = faces[(k + t) % 3].color();
            }
        }

        for (i, pos) in Edge::ARRAY.into_iter().enumerate() {
            let faces = cube.ep[i].faces();
            let t = cube.eo[i] as usize;
            for (k, f) in pos.facelets().into_iter().enumerate() {
                facelets[f as usize] = faces[(k + t) % 2].color();
            }
        }

        StickerCube { facelets }
    }
}

impl From<CubieCube> for StickerCube {
    fn from(cube: CubieCube) -> StickerCube {
        StickerCube::from(&cube)
    }
}

impl TryFrom<&StickerCube> for CubieCube {
    type Error = StickerToCubieError;

    fn try_from(cube: &StickerCube) -> Result<CubieCube, StickerToCubieError> {
        cube.to_cubie()
    }
}

impl Index<Facelet> for StickerCube {
    type Output = Color;

    fn index(&self, f: Facelet) -> &Color {
        &self.facelets[f as usize]
    }
}

impl IndexMut<Facelet> for StickerCube {
    fn index_mut(&mut self, f: Facelet) -> &mut Color {
        &mut self.facelets[f as usize]
    }
}

// Rows of all six faces side by side, each face followed by a space, e.g. the solved cube's
// first row is `WWW BBB RRR YYY GGG OOO `.
impl fmt::Display for StickerCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..3 {
            for face in 0..6 {
                for c in 0..3 {
                    write!(f, "{}", self.facelets[face * 9 + r * 3 + c].initial())?;
                }
                f.write_str(" ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for StickerCube {
    type Err = ParseStickerCubeError;

    fn from_str(s: &str) -> Result<StickerCube, ParseStickerCubeError> {
        let len = s.chars().count();
        if len != 54 {
            trace!("sticker string has {len} stickers");
            return Err(ParseStickerCubeError::Length(len));
        }

        let mut facelets = [Color::White; 54];
        for (i, ch) in s.chars().enumerate() {
            facelets[i] = Color::from_initial(ch).ok_or_else(|| {
                trace!("unknown sticker {ch:?} at {i}");
                ParseStickerCubeError::UnknownColor(i, ch)
            })?;
        }

        Ok(StickerCube { facelets })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StickerCube {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_facelet_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StickerCube {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
