//! Coordinates of a `CubieCube`, and dense indices built from them.
//!
//! [`CubieCube::index`] folds the corner and edge permutation ranks into one integer as
//! `8! * edge_rank + corner_rank`, ignoring orientation. [`CubieCube::full_index`] extends it with
//! the corner twist and edge flip coordinates in mixed radix, which needs 128 bits as the
//! `8! * 12! * 3^7 * 2^11` states do not fit in a `u64`.

use super::{Corner, CornerTwist, CubieCube, Edge, EdgeFlip};
use crate::coord::{Coordinate, FromCoordinate};
use crate::error::OrientationError;
use crate::perm::{rank_array, unrank_array, FACTORIALS};

use log::debug;

/// The number of values of [`CubieCube::index`].
pub const INDEX_COUNT: u64 = FACTORIALS[8] as u64 * FACTORIALS[12] as u64;

/// The number of values of [`CubieCube::full_index`].
pub const FULL_INDEX_COUNT: u128 =
    INDEX_COUNT as u128 * COCoord::COUNT as u128 * EOCoord::COUNT as u128;

/// A coordinate representation of the corner orientation of a cube. The twist of the first
/// corner is implied by the others.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct COCoord(u16);

/// A coordinate representation of the corner permutation of a cube, as its permutation rank.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct CPCoord(u16);

/// A coordinate representation of the edge orientation of a cube. The flip of the first edge is
/// implied by the others.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct EOCoord(u16);

/// A coordinate representation of the edge permutation of a cube, as its permutation rank.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct EPCoord(u32);

impl Coordinate<CubieCube> for COCoord {
    // 3^7
    const COUNT: usize = 2187;
    const SOLVED: Self = COCoord(0);

    fn from_puzzle(puzzle: &CubieCube) -> Self {
        COCoord(to_o_coord::<8, 3>(&puzzle.co.map(|n| n.into())))
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        assert!(n < Self::COUNT, "corner orientation coordinate {n} out of range");
        COCoord(n as u16)
    }
}

impl FromCoordinate<COCoord> for CubieCube {
    fn set_coord(&mut self, coord: COCoord) {
        let mut first = CornerTwist::Oriented;
        let mut n = coord.0 as usize;

        for i in (1..8).rev() {
            self.co[i] = CornerTwist::ARRAY[n % 3];
            first = first.twist_by(self.co[i].inverse());
            n /= 3;
        }

        self.co[0] = first;
    }
}

impl Coordinate<CubieCube> for CPCoord {
    // 8!
    const COUNT: usize = 40320;
    // The identity is the last permutation in rank order.
    const SOLVED: Self = CPCoord(40319);

    fn from_puzzle(puzzle: &CubieCube) -> Self {
        CPCoord(rank_array(&puzzle.cp.map(|n| n.into())) as u16)
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        assert!(n < Self::COUNT, "corner permutation coordinate {n} out of range");
        CPCoord(n as u16)
    }
}

impl FromCoordinate<CPCoord> for CubieCube {
    fn set_coord(&mut self, coord: CPCoord) {
        self.cp = unrank_array::<8>(coord.0 as u32).map(|n| Corner::ARRAY[n as usize]);
    }
}

impl Coordinate<CubieCube> for EOCoord {
    // 2^11
    const COUNT: usize = 2048;
    const SOLVED: Self = EOCoord(0);

    fn from_puzzle(puzzle: &CubieCube) -> Self {
        EOCoord(to_o_coord::<12, 2>(&puzzle.eo.map(|n| n.into())))
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        assert!(n < Self::COUNT, "edge orientation coordinate {n} out of range");
        EOCoord(n as u16)
    }
}

impl FromCoordinate<EOCoord> for CubieCube {
    fn set_coord(&mut self, coord: EOCoord) {
        let mut first = EdgeFlip::Oriented;
        let mut n = coord.0 as usize;

        for i in (1..12).rev() {
            self.eo[i] = EdgeFlip::ARRAY[n % 2];
            first = first.flip_by(self.eo[i]);
            n /= 2;
        }

        self.eo[0] = first;
    }
}

impl Coordinate<CubieCube> for EPCoord {
    // 12!
    const COUNT: usize = 479001600;
    const SOLVED: Self = EPCoord(479001599);

    fn from_puzzle(puzzle: &CubieCube) -> Self {
        EPCoord(rank_array(&puzzle.ep.map(|n| n.into())))
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        assert!(n < Self::COUNT, "edge permutation coordinate {n} out of range");
        EPCoord(n as u32)
    }
}

impl FromCoordinate<EPCoord> for CubieCube {
    fn set_coord(&mut self, coord: EPCoord) {
        self.ep = unrank_array::<12>(coord.0).map(|n| Edge::ARRAY[n as usize]);
    }
}

/// Implementation of a coord cube, representing pieces using coordinates, which are values which
/// are isomorphic to arrays represented in a cubie cube. Only cubes whose twists and flips sum to
/// zero have a coord cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordCube {
    /// Corner orientation
    pub co: COCoord,
    /// Corner permutation
    pub cp: CPCoord,
    /// Edge orientation
    pub eo: EOCoord,
    /// Edge permutation
    pub ep: EPCoord,
}

impl CoordCube {
    /// The solved cube stored as a const.
    pub const SOLVED: Self = CoordCube {
        co: COCoord::SOLVED,
        cp: CPCoord::SOLVED,
        eo: EOCoord::SOLVED,
        ep: EPCoord::SOLVED,
    };

    /// Convert a `CoordCube` to a `CubieCube`.
    pub fn to_cubie(self) -> CubieCube {
        let mut cube = CubieCube::SOLVED;
        cube.set_coord(self.co);
        cube.set_coord(self.cp);
        cube.set_coord(self.eo);
        cube.set_coord(self.ep);
        cube
    }

    /// The permutation only index, see [`CubieCube::index`].
    pub fn index(self) -> u64 {
        CPCoord::COUNT as u64 * self.ep.0 as u64 + self.cp.0 as u64
    }

    /// The index of every coordinate together, see [`CubieCube::full_index`].
    pub fn full_index(self) -> u128 {
        let n = self.index() as u128 * COCoord::COUNT as u128 + self.co.0 as u128;
        n * EOCoord::COUNT as u128 + self.eo.0 as u128
    }

    /// Inverse of [`full_index`](CoordCube::full_index).
    ///
    /// # Panics
    ///
    /// Panics if `n` is not less than [`FULL_INDEX_COUNT`].
    pub fn from_full_index(n: u128) -> CoordCube {
        assert!(n < FULL_INDEX_COUNT, "full index {n} is out of range");
        let eo = EOCoord((n % EOCoord::COUNT as u128) as u16);
        let n = n / EOCoord::COUNT as u128;
        let co = COCoord((n % COCoord::COUNT as u128) as u16);
        let n = (n / COCoord::COUNT as u128) as u64;
        let cp = CPCoord((n % CPCoord::COUNT as u64) as u16);
        let ep = EPCoord((n / CPCoord::COUNT as u64) as u32);
        CoordCube { co, cp, eo, ep }
    }
}

impl TryFrom<&CubieCube> for CoordCube {
    type Error = OrientationError;

    fn try_from(cube: &CubieCube) -> Result<CoordCube, OrientationError> {
        cube.to_coord()
    }
}

impl CubieCube {
    /// Tries to convert a `CubieCube` to a `CoordCube`. This fails when the corner twists or edge
    /// flips do not sum to zero. Permutation parity is not checked.
    pub fn to_coord(&self) -> Result<CoordCube, OrientationError> {
        let co = self.co_parity();
        let eo = self.eo_parity();
        if co != CornerTwist::Oriented || eo != EdgeFlip::Oriented {
            debug!("no coordinates for cube with twist {co:?} and flip {eo:?}");
            return Err(OrientationError { co, eo });
        }

        Ok(CoordCube {
            co: COCoord::from_puzzle(self),
            cp: CPCoord::from_puzzle(self),
            eo: EOCoord::from_puzzle(self),
            ep: EPCoord::from_puzzle(self),
        })
    }

    /// A dense index of the permutation of this cube, `8! * edge_rank + corner_rank`, in
    /// `0..INDEX_COUNT`. Orientation is ignored, so differently oriented cubes can share an index.
    pub fn index(&self) -> u64 {
        let corner_rank = CPCoord::from_puzzle(self).0 as u64;
        let edge_rank = EPCoord::from_puzzle(self).0 as u64;
        FACTORIALS[8] as u64 * edge_rank + corner_rank
    }

    /// The cube with the given permutation [`index`](CubieCube::index) and no twisted or flipped
    /// pieces.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`INDEX_COUNT`].
    pub fn from_index(index: u64) -> CubieCube {
        assert!(index < INDEX_COUNT, "index {index} is out of range");
        let mut cube = CubieCube::SOLVED;
        cube.set_coord(CPCoord((index % CPCoord::COUNT as u64) as u16));
        cube.set_coord(EPCoord((index / CPCoord::COUNT as u64) as u32));
        cube
    }

    /// A dense index of the whole state of this cube, in `0..FULL_INDEX_COUNT`. This is
    /// [`index`](CubieCube::index) followed by the corner orientation digits (base 3) and the edge
    /// orientation digits (base 2) of every piece but the first.
    pub fn full_index(&self) -> Result<u128, OrientationError> {
        self.to_coord().map(CoordCube::full_index)
    }

    /// Inverse of [`full_index`](CubieCube::full_index).
    ///
    /// # Panics
    ///
    /// Panics if `n` is not less than [`FULL_INDEX_COUNT`].
    pub fn from_full_index(n: u128) -> CubieCube {
        CoordCube::from_full_index(n).to_cubie()
    }
}

fn to_o_coord<const COUNT: usize, const STATES: u16>(arr: &[u8; COUNT]) -> u16 {
    arr.iter()
        .skip(1)
        .fold(0, |acc, &i| (acc * STATES) + i as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::strategies::{any_cubie, legal_cubie};

    #[test]
    fn invertable_conversion() {
        assert_eq!(CubieCube::SOLVED.to_coord().unwrap(), CoordCube::SOLVED);
        assert_eq!(CoordCube::SOLVED.to_cubie(), CubieCube::SOLVED);
        assert!(CPCoord::from_puzzle(&CubieCube::SOLVED).solved());
        assert!(EPCoord::from_puzzle(&CubieCube::SOLVED).solved());
    }

    #[test]
    fn coordinate_bounds() {
        assert_eq!(COCoord::from_repr(COCoord::COUNT - 1).repr(), COCoord::COUNT - 1);
        assert_eq!(CPCoord::from_repr(CPCoord::COUNT - 1), CPCoord::SOLVED);
        assert_eq!(EOCoord::from_repr(EOCoord::COUNT - 1).repr(), EOCoord::COUNT - 1);
        assert_eq!(EPCoord::from_repr(EPCoord::COUNT - 1), EPCoord::SOLVED);
    }

    #[test]
    #[should_panic]
    fn corner_orientation_out_of_range() {
        COCoord::from_repr(COCoord::COUNT);
    }

    #[test]
    #[should_panic]
    fn corner_permutation_out_of_range() {
        CPCoord::from_repr(CPCoord::COUNT);
    }

    #[test]
    #[should_panic]
    fn edge_orientation_out_of_range() {
        EOCoord::from_repr(EOCoord::COUNT);
    }

    #[test]
    #[should_panic]
    fn edge_permutation_out_of_range() {
        EPCoord::from_repr(EPCoord::COUNT);
    }

    #[test]
    fn solved_index() {
        assert_eq!(CubieCube::SOLVED.index(), INDEX_COUNT - 1);
        assert_eq!(CubieCube::from_index(INDEX_COUNT - 1), CubieCube::SOLVED);
        assert_eq!(
            CubieCube::SOLVED.full_index(),
            Ok((INDEX_COUNT as u128 - 1) * 2187 * 2048)
        );
    }

    #[test]
    fn counts() {
        assert_eq!(INDEX_COUNT, 19_313_344_512_000);
        assert_eq!(FULL_INDEX_COUNT, 86_504_006_548_979_712_000);
        assert!(FULL_INDEX_COUNT > u64::MAX as u128);
    }

    #[test_log::test]
    fn conversion_errors() {
        let mut twist = CubieCube::SOLVED;
        twist.co[0] = CornerTwist::Clockwise;
        assert_eq!(
            twist.to_coord(),
            Err(OrientationError {
                co: CornerTwist::Clockwise,
                eo: EdgeFlip::Oriented,
            })
        );
        twist.co[1] = CornerTwist::Clockwise;
        assert_eq!(
            twist.full_index(),
            Err(OrientationError {
                co: CornerTwist::AntiClockwise,
                eo: EdgeFlip::Oriented,
            })
        );
        twist.co[2] = CornerTwist::Clockwise;
        assert!(twist.to_coord().is_ok());

        let mut flip = CubieCube::SOLVED;
        flip.eo[0] = EdgeFlip::Flipped;
        assert_eq!(
            CoordCube::try_from(&flip),
            Err(OrientationError {
                co: CornerTwist::Oriented,
                eo: EdgeFlip::Flipped,
            })
        );
        assert_eq!(
            flip.to_coord().unwrap_err().to_string(),
            "cube has illegal orientation (twist Oriented, flip Flipped)"
        );
        flip.eo[1] = EdgeFlip::Flipped;
        assert!(flip.to_coord().is_ok());

        // Permutation parity does not matter.
        let mut swap = CubieCube::SOLVED;
        swap.ep.swap(0, 3);
        assert!(swap.to_coord().is_ok());
    }

    #[test]
    fn orientation_ignored_by_index() {
        let mut cube = CubieCube::SOLVED;
        cube.co[3] = CornerTwist::AntiClockwise;
        cube.eo[7] = EdgeFlip::Flipped;
        assert_eq!(cube.index(), CubieCube::SOLVED.index());
        assert_ne!(cube.full_index(), CubieCube::SOLVED.full_index());
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn convert_invertible_co(c in (0..2187u16).prop_map(COCoord)) {
            let mut cube = CubieCube::SOLVED;
            cube.set_coord(c);
            assert_eq!(cube.co_parity(), CornerTwist::Oriented);
            assert_eq!(c, COCoord::from_puzzle(&cube));
        }

        #[test]
        fn convert_invertible_eo(c in (0..2048u16).prop_map(EOCoord)) {
            let mut cube = CubieCube::SOLVED;
            cube.set_coord(c);
            assert_eq!(cube.eo_parity(), EdgeFlip::Oriented);
            assert_eq!(c, EOCoord::from_puzzle(&cube));
        }

        #[test]
        fn convert_invertible_cp(c in (0..40320u16).prop_map(CPCoord)) {
            let mut cube = CubieCube::SOLVED;
            cube.set_coord(c);
            assert_eq!(c, CPCoord::from_puzzle(&cube));
        }

        #[test]
        fn convert_invertible_ep(c in (0..479001600u32).prop_map(EPCoord)) {
            let mut cube = CubieCube::SOLVED;
            cube.set_coord(c);
            assert_eq!(c, EPCoord::from_puzzle(&cube));
        }

        #[test]
        fn index_roundtrip(n in 0..INDEX_COUNT) {
            prop_assert_eq!(CubieCube::from_index(n).index(), n);
        }

        #[test]
        fn index_is_deterministic(cube in any_cubie()) {
            let copy = CubieCube::try_from(cube.to_bytes()).unwrap();
            prop_assert_eq!(cube.index(), copy.index());
            prop_assert!(cube.index() < INDEX_COUNT);
        }

        #[test]
        fn corner_change_moves_index_by_corner_rank(a in any_cubie(), b in any_cubie()) {
            let mut b = b;
            b.ep = a.ep;
            let delta = b.index() as i64 - a.index() as i64;
            let rank_delta = CPCoord::from_puzzle(&b).repr() as i64
                - CPCoord::from_puzzle(&a).repr() as i64;
            prop_assert_eq!(delta, rank_delta);
        }

        #[test]
        fn full_index_roundtrip(cube in legal_cubie()) {
            let n = cube.full_index().unwrap();
            prop_assert!(n < FULL_INDEX_COUNT);
            prop_assert_eq!(CubieCube::from_full_index(n), cube);
        }

        #[test]
        fn from_full_index_roundtrip(n in 0..FULL_INDEX_COUNT) {
            prop_assert_eq!(CubieCube::from_full_index(n).full_index(), Ok(n));
        }
    }
}
