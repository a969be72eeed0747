//! We give a general description of a coordinate, which is a dense integer encoding of some part
//! of a puzzle's state, for use as an index into lookup tables.

/// A coordinate type, encoding part of the state of the puzzle P.
pub trait Coordinate<P>: Copy + Default + Eq {
    /// The number of possible coordinate states. Every representation lies in `0..COUNT`.
    const COUNT: usize;

    /// The coordinate of the solved puzzle. This need not be represented by 0.
    const SOLVED: Self;

    /// Obtain the coordinate that corresponds to the given puzzle.
    fn from_puzzle(puzzle: &P) -> Self;

    /// Determine whether the given coordinate represents a solved state
    fn solved(self) -> bool {
        self == Self::SOLVED
    }

    /// A representation of this coordinate as a usize, for use in table lookups.
    fn repr(self) -> usize;

    /// Convert the representation of a coordinate to the coordinate itself. Panics unless `n` is
    /// less than `COUNT`.
    fn from_repr(n: usize) -> Self;
}

/// Gives the ability to set a coordinate onto a puzzle.
pub trait FromCoordinate<C>: Sized
where
    C: Coordinate<Self>,
{
    /// Modify the puzzle so that its coordinate for `C` is `coord`.
    fn set_coord(&mut self, coord: C);
}
