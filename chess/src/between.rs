//! Obstruction checks along ranks, files and diagonals

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::geometry;
use crate::types::Coord;

/// Iterator over the squares strictly between two colinear squares, starting from the one
/// nearest to the source
struct Walk {
    cur: Coord,
    dst: Coord,
    step: (isize, isize),
}

impl Walk {
    fn new(src: Coord, dst: Coord) -> Walk {
        let (dr, dc) = geometry::delta(src, dst);
        Walk {
            cur: src,
            dst,
            step: (dr.signum(), dc.signum()),
        }
    }
}

impl Iterator for Walk {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let next = self.cur.try_shift(self.step.0, self.step.1)?;
        if next == self.dst {
            return None;
        }
        self.cur = next;
        Some(next)
    }
}

#[inline]
fn is_colinear(src: Coord, dst: Coord) -> bool {
    geometry::is_line(src, dst) || geometry::is_diag(src, dst)
}

/// Returns `true` if all the squares strictly between `src` and `dst` are empty
///
/// `src` and `dst` must lie on a common rank, file or diagonal. For adjacent squares
/// there is nothing in between, so the path is always clear.
pub fn is_path_clear(b: &Board, src: Coord, dst: Coord) -> bool {
    debug_assert!(src != dst, "path endpoints must differ");
    debug_assert!(is_colinear(src, dst), "path endpoints must be colinear");
    strict_between(src, dst)
        .into_iter()
        .all(|c| b.get(c).is_empty())
}

/// Returns `true` if all the squares strictly between `src` and `dst` on the same file
/// are empty
///
/// Used for the double pawn step, where exactly one square lies in between.
pub fn is_pawn_path_clear(b: &Board, src: Coord, dst: Coord) -> bool {
    debug_assert!(src.file() == dst.file(), "pawn path must be vertical");
    is_path_clear(b, src, dst)
}

/// Returns the set of squares strictly between `src` and `dst`
///
/// If the squares are not colinear or are equal, returns an empty set.
pub fn strict_between(src: Coord, dst: Coord) -> Bitboard {
    if src == dst || !is_colinear(src, dst) {
        return Bitboard::EMPTY;
    }
    Walk::new(src, dst).collect()
}
