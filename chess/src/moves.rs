//! Moves and making them on the board

use crate::board::Board;
use crate::legal;
use crate::types::{Cell, Coord, CoordParseError};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing a move from string like `e2e4`
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ParseError {
    /// Bad string length
    #[error("bad string length")]
    BadLength,
    /// Bad source square
    #[error("bad source: {0}")]
    BadSrc(CoordParseError),
    /// Bad destination square
    #[error("bad destination: {0}")]
    BadDst(CoordParseError),
}

/// Move from one square to another
///
/// A move doesn't remember anything about the board it's made on, it's just a pair of squares.
/// Whether it can be made is decided by [`Move::is_legal()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    src: Coord,
    dst: Coord,
}

impl Move {
    #[inline]
    pub const fn new(src: Coord, dst: Coord) -> Move {
        Move { src, dst }
    }

    #[inline]
    pub const fn src(&self) -> Coord {
        self.src
    }

    #[inline]
    pub const fn dst(&self) -> Coord {
        self.dst
    }

    /// Returns the move in the opposite direction
    #[inline]
    pub const fn reversed(&self) -> Move {
        Move {
            src: self.dst,
            dst: self.src,
        }
    }

    /// Returns `true` if the move is legal on board `b`
    ///
    /// See [`legal::is_legal()`] for details.
    #[inline]
    pub fn is_legal(&self, b: &Board) -> bool {
        legal::is_legal(b, self.src, self.dst)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.src, self.dst)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Move, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(ParseError::BadLength);
        }
        let src = Coord::from_str(&s[0..2]).map_err(ParseError::BadSrc)?;
        let dst = Coord::from_str(&s[2..4]).map_err(ParseError::BadDst)?;
        Ok(Move { src, dst })
    }
}

/// Makes move `mv` on board `b` and returns the captured cell
///
/// The piece from the source square is moved to the destination square, the source square
/// becomes empty. Whatever stood on the destination is overwritten; the returned cell is empty
/// if nothing was captured.
///
/// No legality check is performed here. Callers must check the move via [`legal::is_legal()`]
/// first, otherwise the board may end up in a state not reachable by legal moves.
pub fn make_move(b: &mut Board, mv: Move) -> Cell {
    let piece = b.get(mv.src);
    let captured = b.get(mv.dst);
    b.clear(mv.src);
    b.put(mv.dst, piece);
    captured
}
