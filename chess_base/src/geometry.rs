use crate::types::{Color, Coord, Rank};

/// Row delta of a single pawn step for color `c`
pub const fn pawn_forward_delta(c: Color) -> isize {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Rank from which the pawns of color `c` are allowed to make a double step
pub const fn pawn_start_rank(c: Color) -> Rank {
    match c {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    }
}

/// Returns signed `(row, col)` delta from `src` to `dst`
pub const fn delta(src: Coord, dst: Coord) -> (isize, isize) {
    (
        dst.row() as isize - src.row() as isize,
        dst.col() as isize - src.col() as isize,
    )
}

/// Returns `true` if `src` and `dst` lie on the same row or column
pub const fn is_line(src: Coord, dst: Coord) -> bool {
    src.row() == dst.row() || src.col() == dst.col()
}

/// Returns `true` if `src` and `dst` lie on the same diagonal
pub const fn is_diag(src: Coord, dst: Coord) -> bool {
    let (dr, dc) = delta(src, dst);
    dr.abs() == dc.abs()
}
