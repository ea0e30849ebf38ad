//! Enumerating legal moves
//!
//! Everything here is built upon [`legal::is_legal()`] by trying every destination square, so
//! the results always agree with direct legality queries on the same board.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::legal;
use crate::moves::Move;
use crate::types::{Color, Coord};

use std::ops::{Deref, DerefMut};
use std::slice;

use arrayvec::ArrayVec;

/// Upper bound on the number of moves of one side
///
/// With `k` pieces of one color, there are at most `k * (64 - k)` pairs of a source with such
/// piece and a destination without it, which never exceeds `32 * 32`.
pub const MAX_MOVES: usize = 1024;

#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct MoveList(ArrayVec<Move, MAX_MOVES>);

impl Deref for MoveList {
    type Target = ArrayVec<Move, MAX_MOVES>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList(ArrayVec::new())
    }
}

/// Returns the set of all squares to which the piece on `src` may legally move
///
/// Used for highlighting candidate squares. The result contains `dst` iff
/// `legal::is_legal(b, src, dst)` holds. If `src` is empty, the result is empty.
pub fn legal_destinations(b: &Board, src: Coord) -> Bitboard {
    Coord::iter()
        .filter(|&dst| legal::is_legal(b, src, dst))
        .collect()
}

/// Returns all legal moves of all pieces with color `c`
///
/// Moves are ordered by source square, then by destination square.
pub fn gen_all(b: &Board, c: Color) -> MoveList {
    let mut res = MoveList::new();
    for src in b.color(c) {
        for dst in legal_destinations(b, src) {
            res.push(Move::new(src, dst));
        }
    }
    res
}

/// Returns `true` if any piece of color `c` has a legal move
pub fn has_moves(b: &Board, c: Color) -> bool {
    b.color(c)
        .into_iter()
        .any(|src| !legal_destinations(b, src).is_empty())
}
