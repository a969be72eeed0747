//! The fixed geometry of a 3x3x3: faces, sticker colors, the 54 facelet slots, and tables relating
//! each corner and edge to the facelets it occupies and the faces it belongs to.
//!
//! Facelets are ordered face by face (U, R, F, D, L, B), and row-major within a face. Corner
//! tables list their three entries in U/D, B/F, L/R axis order, and edge tables list the U/D or
//! B/F sticker first.

use super::{Corner, Edge};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A face of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Face {
    /// Up
    U,
    /// Right
    R,
    /// Front
    F,
    /// Down
    D,
    /// Left
    L,
    /// Back
    B,
}

/// A sticker color. Color `i` is the color of face `i` on a solved cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Color {
    White,
    Blue,
    Red,
    Yellow,
    Green,
    Orange,
}

impl Face {
    /// Every face, in order of representation.
    pub const ARRAY: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// The color of this face on a solved cube.
    pub const fn color(self) -> Color {
        Color::ARRAY[self as usize]
    }

    /// The facelet in the middle of this face.
    pub const fn center(self) -> Facelet {
        Facelet::ARRAY[self as usize * 9 + 4]
    }
}

impl Color {
    /// Every color, in order of representation.
    pub const ARRAY: [Color; 6] = [
        Color::White,
        Color::Blue,
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Orange,
    ];

    /// The face that has this color on a solved cube.
    pub const fn face(self) -> Face {
        Face::ARRAY[self as usize]
    }

    /// The single letter used when printing this color.
    pub const fn initial(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Orange => 'O',
        }
    }

    /// The color with the given initial, if there is one.
    pub fn from_initial(c: char) -> Option<Color> {
        Color::ARRAY.into_iter().find(|col| col.initial() == c)
    }
}

/// A sticker slot on the cube. Names list the face the sticker is on first, followed by the faces
/// of its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[rustfmt::skip]
#[allow(missing_docs)]
pub enum Facelet {
    UBL, UB, UBR, UL, U, UR, UFL, UF, UFR,
    RUB, RU, RUF, RB, R, RF, RDB, RD, RDF,
    FLU, FU, FUR, FL, F, FR, FLD, FD, FRD,
    DFL, DF, DFR, DL, D, DR, DBL, DB, DBR,
    LUB, LU, LUF, LB, L, LF, LDB, LD, LDF,
    BUR, BU, BUL, BR, B, BL, BDR, BD, BDL,
}

/// The piece a facelet belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cubie {
    /// The fixed center of a face.
    Center(Face),
    /// A corner position.
    Corner(Corner),
    /// An edge position.
    Edge(Edge),
}

impl Facelet {
    /// Every facelet, in order of representation.
    #[rustfmt::skip]
    pub const ARRAY: [Facelet; 54] = {
        use Facelet::*;
        [
            UBL, UB, UBR, UL, U, UR, UFL, UF, UFR,
            RUB, RU, RUF, RB, R, RF, RDB, RD, RDF,
            FLU, FU, FUR, FL, F, FR, FLD, FD, FRD,
            DFL, DF, DFR, DL, D, DR, DBL, DB, DBR,
            LUB, LU, LUF, LB, L, LF, LDB, LD, LDF,
            BUR, BU, BUL, BR, B, BL, BDR, BD, BDL,
        ]
    };

    /// The face this sticker lies on.
    pub const fn face(self) -> Face {
        Face::ARRAY[self as usize / 9]
    }

    /// The piece this sticker belongs to.
    pub const fn cubie(self) -> Cubie {
        FACELET_CUBIES[self as usize]
    }

    /// Whether this is the center sticker of its face.
    pub const fn is_center(self) -> bool {
        matches!(self.cubie(), Cubie::Center(_))
    }

    /// Whether this sticker belongs to a corner.
    pub const fn is_corner(self) -> bool {
        matches!(self.cubie(), Cubie::Corner(_))
    }

    /// Whether this sticker belongs to an edge.
    pub const fn is_edge(self) -> bool {
        matches!(self.cubie(), Cubie::Edge(_))
    }
}

/// The facelets of each corner position, in U/D, B/F, L/R order.
pub const CORNER_FACELETS: [[Facelet; 3]; 8] = {
    use Facelet::*;
    [
        [UBL, BUL, LUB],
        [UBR, BUR, RUB],
        [UFR, FUR, RUF],
        [UFL, FLU, LUF],
        [DBL, BDL, LDB],
        [DBR, BDR, RDB],
        [DFR, FRD, RDF],
        [DFL, FLD, LDF],
    ]
};

/// The faces of each corner piece, in U/D, B/F, L/R order.
pub const CORNER_FACES: [[Face; 3]; 8] = {
    use Face::*;
    [
        [U, B, L],
        [U, B, R],
        [U, F, R],
        [U, F, L],
        [D, B, L],
        [D, B, R],
        [D, F, R],
        [D, F, L],
    ]
};

/// The facelets of each edge position.
pub const EDGE_FACELETS: [[Facelet; 2]; 12] = {
    use Facelet::*;
    [
        [UB, BU],
        [UR, RU],
        [UF, FU],
        [UL, LU],
        [BL, LB],
        [BR, RB],
        [FR, RF],
        [FL, LF],
        [DB, BD],
        [DR, RD],
        [DF, FD],
        [DL, LD],
    ]
};

/// The faces of each edge piece, in the same order as `EDGE_FACELETS`.
pub const EDGE_FACES: [[Face; 2]; 12] = {
    use Face::*;
    [
        [U, B],
        [U, R],
        [U, F],
        [U, L],
        [B, L],
        [B, R],
        [F, R],
        [F, L],
        [D, B],
        [D, R],
        [D, F],
        [D, L],
    ]
};

const FACELET_CUBIES: [Cubie; 54] = {
    let mut arr = [Cubie::Center(Face::U); 54];

    let mut f = 0;
    while f < 6 {
        arr[f * 9 + 4] = Cubie::Center(Face::ARRAY[f]);
        f += 1;
    }

    let mut c = 0;
    while c < 8 {
        let mut k = 0;
        while k < 3 {
            arr[CORNER_FACELETS[c][k] as usize] = Cubie::Corner(Corner::ARRAY[c]);
            k += 1;
        }
        c += 1;
    }

    let mut e = 0;
    while e < 12 {
        arr[EDGE_FACELETS[e][0] as usize] = Cubie::Edge(Edge::ARRAY[e]);
        arr[EDGE_FACELETS[e][1] as usize] = Cubie::Edge(Edge::ARRAY[e]);
        e += 1;
    }

    arr
};

super::u8_enum!(Face);
super::u8_enum!(Color);
super::u8_enum!(Facelet);
