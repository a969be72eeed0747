//! Ranking and unranking of small permutations, following Myrvold and Ruskey's linear time
//! algorithm (<https://webhome.cs.uvic.ca/~ruskey/Publications/RankPerm/MyrvoldRuskey.pdf>).
//!
//! A permutation of length `n` is a slice holding each of `0..n` exactly once. Its rank is an
//! integer in `0..n!`, and ranking and unranking are inverse bijections for every fixed `n`. The
//! ordering is the one induced by the algorithm, which is not lexicographic; in particular the
//! identity permutation has rank `n! - 1`.
//!
//! These functions sit on the hot path of table generation, so malformed input is treated as a
//! programming error and panics rather than returning an error.

/// The longest permutation that can be ranked. `12!` is the largest factorial that fits in a
/// `u32`, and 12 is the number of edges on a 3x3x3.
pub const MAX_RANK_LEN: usize = 12;

/// A precomputed factorial table, where `FACTORIALS[n]` is `n!` for `n` in `0..=12`.
pub const FACTORIALS: [u32; MAX_RANK_LEN + 1] = {
    let mut arr = [0; MAX_RANK_LEN + 1];
    arr[0] = 1;
    let mut i = 1;
    while i < arr.len() {
        arr[i] = arr[i - 1] * i as u32;
        i += 1;
    }
    arr
};

/// Compute the rank of a permutation of `0..perm.len()`. The input is not modified.
///
/// # Panics
///
/// Panics if the slice is longer than [`MAX_RANK_LEN`] or is not a permutation.
///
/// ```rust
/// use cube_codec::perm::{rank, unrank};
///
/// let r = rank(&[2, 0, 1]);
/// let mut perm = [0; 3];
/// unrank(&mut perm, r);
/// assert_eq!(perm, [2, 0, 1]);
/// ```
pub fn rank(perm: &[u8]) -> u32 {
    let n = perm.len();
    assert!(n <= MAX_RANK_LEN, "cannot rank a permutation of length {n}");

    let mut copy = [0u8; MAX_RANK_LEN];
    let mut index = [0u8; MAX_RANK_LEN];
    let mut seen = 0u16;
    for (i, &p) in perm.iter().enumerate() {
        assert!(
            (p as usize) < n && seen & (1 << p) == 0,
            "{perm:?} is not a permutation"
        );
        seen |= 1 << p;
        copy[i] = p;
        index[p as usize] = i as u8;
    }

    let mut rank = 0;
    let mut potential = 1;
    for i in (1..n).rev() {
        let choice = copy[i];
        // Move `i` into its home slot, remembering where the displaced value went.
        copy.swap(i, index[i] as usize);
        index.swap(choice as usize, i);
        rank += choice as u32 * potential;
        potential *= i as u32 + 1;
    }

    rank
}

/// Write the permutation of `0..perm.len()` with the given rank into `perm`. This is the inverse
/// of [`rank`].
///
/// # Panics
///
/// Panics if the slice is longer than [`MAX_RANK_LEN`] or if `rank` is not less than
/// `perm.len()!`.
pub fn unrank(perm: &mut [u8], mut rank: u32) {
    let n = perm.len();
    assert!(n <= MAX_RANK_LEN, "cannot unrank a permutation of length {n}");
    assert!(
        rank < FACTORIALS[n],
        "rank {rank} is out of range for permutations of length {n}"
    );

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i as u8;
    }

    for i in (1..=n).rev() {
        perm.swap(i - 1, (rank % i as u32) as usize);
        rank /= i as u32;
    }
}

/// [`rank`] for a fixed length array.
pub fn rank_array<const N: usize>(perm: &[u8; N]) -> u32 {
    rank(perm)
}

/// [`unrank`] into a fresh fixed length array.
pub fn unrank_array<const N: usize>(rank: u32) -> [u8; N] {
    let mut perm = [0; N];
    unrank(&mut perm, rank);
    perm
}
