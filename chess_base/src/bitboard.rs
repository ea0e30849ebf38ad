use crate::types::Coord;
use derive_more::BitOr;
use std::fmt;

/// Set of squares
///
/// Each square owns one bit, at position [`Coord::index()`]. Iteration goes in the same
/// order as [`Coord::iter()`].
#[derive(Default, Copy, Clone, PartialEq, Eq, Hash, BitOr)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    #[inline]
    const fn bit(coord: Coord) -> u64 {
        1 << coord.index()
    }

    /// Returns the set with `coord` added
    #[inline]
    pub const fn with(self, coord: Coord) -> Bitboard {
        Bitboard(self.0 | Self::bit(coord))
    }

    #[inline]
    pub fn set(&mut self, coord: Coord) {
        self.0 |= Self::bit(coord);
    }

    #[inline]
    pub const fn has(&self, coord: Coord) -> bool {
        self.0 & Self::bit(coord) != 0
    }

    /// Number of squares in the set
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn iter(&self) -> Iter {
        Iter(self.0)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the squares of a [`Bitboard`]
pub struct Iter(u64);

impl Iterator for Iter {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        // Drop the lowest bit
        self.0 &= self.0 - 1;
        Some(Coord::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl IntoIterator for Bitboard {
    type Item = Coord;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl FromIterator<Coord> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Bitboard {
        let mut res = Bitboard::EMPTY;
        for coord in iter {
            res.set(coord);
        }
        res
    }
}
