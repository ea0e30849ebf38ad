//! Move legality checks
//!
//! Legality here means only movement geometry: the piece must be able to reach the destination
//! according to its kind, the path must be unobstructed for sliding pieces, and a piece cannot
//! capture a piece of its own color. The king is allowed to move to attacked squares and to stay
//! in check, and there is no castling, enpassant or promote.

use crate::between;
use crate::board::Board;
use crate::geometry;
use crate::types::{Color, Coord, Piece};

fn is_pawn_legal(b: &Board, color: Color, src: Coord, dst: Coord) -> bool {
    let (dr, dc) = geometry::delta(src, dst);
    let dir = geometry::pawn_forward_delta(color);
    let target = b.get(dst);

    if dc == 0 && target.is_empty() {
        if dr == dir {
            return true;
        }
        if dr == 2 * dir && src.rank() == geometry::pawn_start_rank(color) {
            return between::is_pawn_path_clear(b, src, dst);
        }
        return false;
    }

    // Diagonal step is capture-only. Same color is already rejected, so any piece here is
    // the opponent's.
    dc.abs() == 1 && dr == dir && target.is_occupied()
}

fn is_rook_legal(b: &Board, src: Coord, dst: Coord) -> bool {
    geometry::is_line(src, dst) && between::is_path_clear(b, src, dst)
}

fn is_knight_legal(src: Coord, dst: Coord) -> bool {
    let (dr, dc) = geometry::delta(src, dst);
    matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1))
}

fn is_bishop_legal(b: &Board, src: Coord, dst: Coord) -> bool {
    geometry::is_diag(src, dst) && between::is_path_clear(b, src, dst)
}

fn is_king_legal(src: Coord, dst: Coord) -> bool {
    let (dr, dc) = geometry::delta(src, dst);
    dr.abs() <= 1 && dc.abs() <= 1
}

/// Returns `true` if the piece on `src` may move to `dst`
///
/// This function never fails. It returns `false` if `src` is empty, if `src == dst`, or if `dst`
/// contains a piece of the same color as the moving one. Otherwise, the result depends on the
/// kind of the moving piece:
///
/// - pawn moves one square forward to an empty square, two squares forward from its starting
///   rank if both squares are empty, or one square diagonally forward to capture an opponent's
///   piece;
/// - rook moves along a rank or a file;
/// - bishop moves along a diagonal;
/// - queen moves as rook or as bishop;
/// - knight jumps two squares in one direction and one square in the other;
/// - king moves to any adjacent square.
///
/// Sliding pieces (rook, bishop and queen) cannot jump over other pieces.
///
/// # Example
///
/// ```
/// # use geochess::{legal, Board, Coord};
/// #
/// let b = Board::initial();
/// let e2 = Coord::from_row_col(6, 4);
/// assert!(legal::is_legal(&b, e2, Coord::from_row_col(4, 4)));
/// assert!(!legal::is_legal(&b, e2, Coord::from_row_col(3, 4)));
/// ```
pub fn is_legal(b: &Board, src: Coord, dst: Coord) -> bool {
    let (color, piece) = match b.get(src).parts() {
        Some(parts) => parts,
        None => return false,
    };
    if src == dst || b.get(dst).color() == Some(color) {
        return false;
    }
    match piece {
        Piece::Pawn => is_pawn_legal(b, color, src, dst),
        Piece::Rook => is_rook_legal(b, src, dst),
        Piece::Knight => is_knight_legal(src, dst),
        Piece::Bishop => is_bishop_legal(b, src, dst),
        Piece::Queen => is_rook_legal(b, src, dst) || is_bishop_legal(b, src, dst),
        Piece::King => is_king_legal(src, dst),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, File, Rank};

    fn sq(row: usize, col: usize) -> Coord {
        Coord::from_row_col(row, col)
    }

    fn full_board_except(hole: Coord) -> Board {
        let mut b = Board::empty();
        for c in Coord::iter() {
            if c != hole {
                let color = if c.row() < 4 {
                    Color::Black
                } else {
                    Color::White
                };
                b.put(c, Cell::from_parts(color, Piece::Pawn));
            }
        }
        b
    }

    #[test]
    fn test_empty_source() {
        let b = Board::initial();
        for dst in Coord::iter() {
            assert!(!is_legal(&b, sq(4, 4), dst));
        }
    }

    #[test]
    fn test_null_move() {
        let mut b = Board::empty();
        for piece in Piece::ALL {
            b.put(sq(4, 4), Cell::from_parts(Color::White, piece));
            assert!(!is_legal(&b, sq(4, 4), sq(4, 4)), "{:?}", piece);
        }
    }

    #[test]
    fn test_pawn_white() {
        let mut b = Board::initial();
        let e2 = sq(6, 4);
        assert!(is_legal(&b, e2, sq(5, 4)));
        assert!(is_legal(&b, e2, sq(4, 4)));
        assert!(!is_legal(&b, e2, sq(3, 4)));
        assert!(!is_legal(&b, e2, sq(5, 3)));
        assert!(!is_legal(&b, e2, sq(5, 5)));
        assert!(!is_legal(&b, e2, sq(7, 4)));

        // Blocked double step, by either color
        for color in [Color::White, Color::Black] {
            b.put(sq(5, 4), Cell::from_parts(color, Piece::Knight));
            assert!(!is_legal(&b, e2, sq(4, 4)));
            assert!(!is_legal(&b, e2, sq(5, 4)));
        }
        b.clear(sq(5, 4));

        // Occupied destination blocks forward moves
        b.put(sq(4, 4), Cell::from_parts(Color::Black, Piece::Pawn));
        assert!(!is_legal(&b, e2, sq(4, 4)));
        assert!(is_legal(&b, e2, sq(5, 4)));
        b.clear(sq(4, 4));

        // Diagonal capture
        b.put(sq(5, 3), Cell::from_parts(Color::Black, Piece::Bishop));
        assert!(is_legal(&b, e2, sq(5, 3)));
        b.put(sq(5, 3), Cell::from_parts(Color::White, Piece::Bishop));
        assert!(!is_legal(&b, e2, sq(5, 3)));
    }

    #[test]
    fn test_pawn_black() {
        let mut b = Board::initial();
        let d7 = sq(1, 3);
        assert!(is_legal(&b, d7, sq(2, 3)));
        assert!(is_legal(&b, d7, sq(3, 3)));
        assert!(!is_legal(&b, d7, sq(0, 3)));
        assert!(!is_legal(&b, d7, sq(2, 4)));

        b.put(sq(2, 4), Cell::from_parts(Color::White, Piece::Pawn));
        assert!(is_legal(&b, d7, sq(2, 4)));
        assert!(is_legal(&b, sq(1, 5), sq(2, 4)));
        assert!(!is_legal(&b, sq(1, 4), sq(2, 4)));
    }

    #[test]
    fn test_pawn_double_only_from_start() {
        let mut b = Board::empty();
        let pawn = Cell::from_parts(Color::White, Piece::Pawn);
        b.put(sq(5, 2), pawn);
        assert!(is_legal(&b, sq(5, 2), sq(4, 2)));
        assert!(!is_legal(&b, sq(5, 2), sq(3, 2)));

        let pawn = Cell::from_parts(Color::Black, Piece::Pawn);
        b.put(sq(2, 6), pawn);
        assert!(is_legal(&b, sq(2, 6), sq(3, 6)));
        assert!(!is_legal(&b, sq(2, 6), sq(4, 6)));
    }

    #[test]
    fn test_pawn_sideways_backward() {
        let mut b = Board::empty();
        b.put(sq(4, 4), Cell::from_parts(Color::White, Piece::Pawn));
        b.put(sq(4, 3), Cell::from_parts(Color::Black, Piece::Pawn));
        b.put(sq(5, 5), Cell::from_parts(Color::Black, Piece::Pawn));
        assert!(!is_legal(&b, sq(4, 4), sq(4, 3)));
        assert!(!is_legal(&b, sq(4, 4), sq(4, 5)));
        assert!(!is_legal(&b, sq(4, 4), sq(5, 4)));
        assert!(!is_legal(&b, sq(4, 4), sq(5, 5)));
    }

    #[test]
    fn test_rook() {
        let mut b = Board::empty();
        let a1 = sq(7, 0);
        b.put(a1, Cell::from_parts(Color::White, Piece::Rook));
        assert!(is_legal(&b, a1, sq(7, 7)));
        assert!(is_legal(&b, a1, sq(0, 0)));
        assert!(!is_legal(&b, a1, sq(6, 1)));
        assert!(!is_legal(&b, a1, sq(5, 1)));

        for col in 1..7 {
            let mut blocked = b;
            blocked.put(sq(7, col), Cell::from_parts(Color::Black, Piece::Pawn));
            assert!(!is_legal(&blocked, a1, sq(7, 7)), "blocked at col {}", col);
            assert!(is_legal(&blocked, a1, sq(7, col)));
        }

        b.put(sq(7, 7), Cell::from_parts(Color::Black, Piece::Rook));
        assert!(is_legal(&b, a1, sq(7, 7)));
        b.put(sq(7, 7), Cell::from_parts(Color::White, Piece::Rook));
        assert!(!is_legal(&b, a1, sq(7, 7)));
    }

    #[test]
    fn test_knight() {
        let b = Board::initial();
        let b1 = Coord::from_parts(File::B, Rank::R1);
        assert_eq!(b1, sq(7, 1));
        assert!(is_legal(&b, b1, sq(5, 0)));
        assert!(is_legal(&b, b1, sq(5, 2)));
        assert!(!is_legal(&b, b1, sq(6, 3)));
        assert!(!is_legal(&b, b1, sq(4, 1)));

        // Obstruction never blocks a knight
        let mut full = full_board_except(sq(5, 0));
        full.put(b1, Cell::from_parts(Color::White, Piece::Knight));
        assert!(is_legal(&full, b1, sq(5, 0)));
        assert!(!is_legal(&full, b1, sq(5, 2)));
    }

    #[test]
    fn test_bishop() {
        let mut b = Board::empty();
        let c1 = sq(7, 2);
        b.put(c1, Cell::from_parts(Color::White, Piece::Bishop));
        assert!(is_legal(&b, c1, sq(2, 7)));
        assert!(is_legal(&b, c1, sq(5, 0)));
        assert!(!is_legal(&b, c1, sq(6, 2)));
        assert!(!is_legal(&b, c1, sq(5, 3)));

        b.put(sq(4, 5), Cell::from_parts(Color::Black, Piece::Pawn));
        assert!(is_legal(&b, c1, sq(4, 5)));
        assert!(!is_legal(&b, c1, sq(3, 6)));
        assert!(!is_legal(&b, c1, sq(2, 7)));
    }

    #[test]
    fn test_queen() {
        let mut b = Board::empty();
        let d4 = sq(4, 3);
        b.put(d4, Cell::from_parts(Color::Black, Piece::Queen));
        assert!(is_legal(&b, d4, sq(4, 7)));
        assert!(is_legal(&b, d4, sq(0, 3)));
        assert!(is_legal(&b, d4, sq(7, 6)));
        assert!(is_legal(&b, d4, sq(0, 7)));
        assert!(!is_legal(&b, d4, sq(2, 4)));
        assert!(!is_legal(&b, d4, sq(6, 4)));

        b.put(sq(5, 4), Cell::from_parts(Color::Black, Piece::Pawn));
        assert!(!is_legal(&b, d4, sq(7, 6)));
        assert!(!is_legal(&b, d4, sq(5, 4)));
        assert!(is_legal(&b, d4, sq(7, 3)));
    }

    #[test]
    fn test_king() {
        let mut b = Board::empty();
        let e1 = sq(7, 4);
        b.put(e1, Cell::from_parts(Color::White, Piece::King));
        for dst in [sq(6, 4), sq(6, 3), sq(6, 5), sq(7, 3), sq(7, 5)] {
            assert!(is_legal(&b, e1, dst));
        }
        assert!(!is_legal(&b, e1, sq(5, 4)));
        assert!(!is_legal(&b, e1, sq(7, 6)));
        assert!(!is_legal(&b, e1, sq(7, 2)));

        b.put(sq(6, 4), Cell::from_parts(Color::White, Piece::Pawn));
        assert!(!is_legal(&b, e1, sq(6, 4)));

        // No check safety: the king may step next to an enemy rook's line
        b.put(sq(0, 3), Cell::from_parts(Color::Black, Piece::Rook));
        assert!(is_legal(&b, e1, sq(7, 3)));
    }

    #[test]
    fn test_same_color_never_legal() {
        let b = Board::initial();
        for src in b.occupied() {
            let color = b.get(src).color();
            for dst in b.occupied() {
                if b.get(dst).color() == color {
                    assert!(!is_legal(&b, src, dst), "{} -> {}", src, dst);
                }
            }
        }
    }
}
