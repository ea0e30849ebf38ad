//! Board and related things

use crate::bitboard::Bitboard;
use crate::moves::{self, Move};
use crate::types::{Cell, Color, Coord, File, Piece, Rank};

use std::fmt::{self, Display, Write};
use std::iter;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing the board from the piece placement part of FEN
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum CellsParseError {
    /// Placement contains non-ASCII characters
    #[error("non-ASCII data in board")]
    NonAscii,
    /// Rank is too large
    #[error("too many items in rank {0}")]
    RankOverflow(Rank),
    /// Rank is too small
    #[error("not enough items in rank {0}")]
    RankUnderflow(Rank),
    /// Too many ranks
    #[error("too many ranks")]
    Overflow,
    /// Not enough ranks
    #[error("not enough ranks")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// Pieces of the back rank, from file a to file h
const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Game board
///
/// The board is just a grid of 64 cells, each of them is either empty or contains a piece. It
/// doesn't track the side to move, move counts, captured pieces or history, and it performs
/// no validation: any combination of cells is allowed.
///
/// # Example
///
/// ```
/// # use geochess::{Board, Cell, Color, Coord, Piece};
/// #
/// let mut board = Board::empty();
/// board.put(Coord::from_row_col(6, 1), Cell::from_parts(Color::White, Piece::King));
/// board.put("d5".parse().unwrap(), Cell::from_parts(Color::Black, Piece::King));
/// assert_eq!(board.as_fen(), "8/8/8/3k4/8/8/1K6/8");
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Cell; 64],
}

impl Board {
    /// Returns an empty board
    ///
    /// Does the same as [`Board::default()`], except that this function is `const`.
    #[inline]
    pub const fn empty() -> Board {
        Board {
            cells: [Cell::EMPTY; 64],
        }
    }

    /// Returns a board with the initial position
    ///
    /// Black occupies the two top rows (rows 0 and 1), White occupies the two bottom
    /// rows (rows 6 and 7).
    pub fn initial() -> Board {
        let mut res = Board::empty();
        for (col, &piece) in BACK_RANK.iter().enumerate() {
            for (color, back, front) in [(Color::Black, 0, 1), (Color::White, 7, 6)] {
                res.put(Coord::from_row_col(back, col), Cell::from_parts(color, piece));
                res.put(
                    Coord::from_row_col(front, col),
                    Cell::from_parts(color, Piece::Pawn),
                );
            }
        }
        res
    }

    /// Parses a board from the piece placement part of FEN
    ///
    /// Does the same as [`Board::from_str`]. It is recommended to use this function instead of
    /// `from_str()` for better readability.
    #[inline]
    pub fn from_fen(fen: &str) -> Result<Board, CellsParseError> {
        Board::from_str(fen)
    }

    /// Returns the contents of the square with coordinate `c`
    #[inline]
    pub fn get(&self, c: Coord) -> Cell {
        self.cells[c.index()]
    }

    /// Puts `cell` to the square with coordinate `c`
    ///
    /// Whatever was on this square before is overwritten.
    #[inline]
    pub fn put(&mut self, c: Coord, cell: Cell) {
        self.cells[c.index()] = cell;
    }

    /// Makes the square with coordinate `c` empty
    #[inline]
    pub fn clear(&mut self, c: Coord) {
        self.put(c, Cell::EMPTY);
    }

    /// Returns the set of all the occupied squares
    pub fn occupied(&self) -> Bitboard {
        self.color(Color::White) | self.color(Color::Black)
    }

    /// Returns the set of all the squares occupied by pieces of color `c`
    pub fn color(&self, c: Color) -> Bitboard {
        Coord::iter()
            .filter(|&p| self.get(p).color() == Some(c))
            .collect()
    }

    /// Convenience alias for [`moves::make_move`](crate::moves::make_move)
    #[inline]
    pub fn make_move(&mut self, mv: Move) -> Cell {
        moves::make_move(self, mv)
    }

    /// Wraps the board to allow pretty-printing with the given style `Style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geochess::{Board, board::PrettyStyle};
    /// #
    /// let b = Board::initial();
    ///
    /// let res = r#"
    /// 8|rnbqkbnr
    /// 7|pppppppp
    /// 6|........
    /// 5|........
    /// 4|........
    /// 3|........
    /// 2|PPPPPPPP
    /// 1|RNBQKBNR
    /// -+--------
    ///  |abcdefgh
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
    ///
    /// let res = r#"
    /// 8│♜♞♝♛♚♝♞♜
    /// 7│♟♟♟♟♟♟♟♟
    /// 6│........
    /// 5│........
    /// 4│........
    /// 3│........
    /// 2│♙♙♙♙♙♙♙♙
    /// 1│♖♘♗♕♔♗♘♖
    /// ─┼────────
    ///  │abcdefgh
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Utf8).to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty {
            board: self,
            side: None,
            style,
        }
    }

    /// Same as [`Board::pretty()`], but also shows the side to move in the bottom left corner
    #[inline]
    pub fn pretty_with_side(&self, side: Color, style: PrettyStyle) -> Pretty<'_> {
        Pretty {
            board: self,
            side: Some(side),
            style,
        }
    }

    /// Converts the board into the piece placement part of FEN
    ///
    /// Does the same as `Board::to_string()`. It is recommended to use this function instead of
    /// `to_string()` for better readability.
    #[inline]
    pub fn as_fen(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::empty()
    }
}

/// Fills one rank of `board` from its FEN description, like `2p1P3`
fn parse_rank(board: &mut Board, rank: Rank, s: &str) -> Result<(), CellsParseError> {
    let mut files = File::iter();
    for ch in s.chars() {
        if let Some(skip @ 1..=8) = ch.to_digit(10) {
            for _ in 0..skip {
                files.next().ok_or(CellsParseError::RankOverflow(rank))?;
            }
            continue;
        }
        let cell = Cell::from_char(ch).ok_or(CellsParseError::UnexpectedChar(ch))?;
        let file = files.next().ok_or(CellsParseError::RankOverflow(rank))?;
        board.put(Coord::from_parts(file, rank), cell);
    }
    match files.next() {
        Some(_) => Err(CellsParseError::RankUnderflow(rank)),
        None => Ok(()),
    }
}

impl FromStr for Board {
    type Err = CellsParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        if !s.is_ascii() {
            return Err(CellsParseError::NonAscii);
        }
        let mut board = Board::empty();
        let mut ranks = s.split('/');
        for rank in Rank::iter() {
            let part = ranks.next().ok_or(CellsParseError::Underflow)?;
            parse_rank(&mut board, rank, part)?;
        }
        if ranks.next().is_some() {
            return Err(CellsParseError::Overflow);
        }
        Ok(board)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter() {
            if rank != Rank::R8 {
                f.write_char('/')?;
            }
            let mut gap = 0;
            for file in File::iter() {
                let cell = self.get(Coord::from_parts(file, rank));
                if cell.is_empty() {
                    gap += 1;
                    continue;
                }
                if gap != 0 {
                    write!(f, "{}", gap)?;
                    gap = 0;
                }
                write!(f, "{}", cell)?;
            }
            if gap != 0 {
                write!(f, "{}", gap)?;
            }
        }
        Ok(())
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Characters used to draw the frame
struct Frame {
    vert: char,
    horz: char,
    corner: char,
    white: char,
    black: char,
}

impl PrettyStyle {
    fn frame(self) -> Frame {
        match self {
            PrettyStyle::Ascii => Frame {
                vert: '|',
                horz: '-',
                corner: '+',
                white: 'W',
                black: 'B',
            },
            PrettyStyle::Utf8 => Frame {
                vert: '│',
                horz: '─',
                corner: '┼',
                white: '○',
                black: '●',
            },
        }
    }

    fn cell(self, cell: Cell) -> char {
        match self {
            PrettyStyle::Ascii => cell.as_char(),
            PrettyStyle::Utf8 => cell.as_utf8_char(),
        }
    }
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    board: &'a Board,
    side: Option<Color>,
    style: PrettyStyle,
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let frame = self.style.frame();
        for rank in Rank::iter() {
            write!(f, "{}{}", rank, frame.vert)?;
            for file in File::iter() {
                let cell = self.board.get(Coord::from_parts(file, rank));
                f.write_char(self.style.cell(cell))?;
            }
            writeln!(f)?;
        }

        let line: String = iter::repeat(frame.horz).take(8).collect();
        writeln!(f, "{}{}{}", frame.horz, frame.corner, line)?;

        let indicator = match self.side {
            Some(Color::White) => frame.white,
            Some(Color::Black) => frame.black,
            None => ' ',
        };
        write!(f, "{}{}", indicator, frame.vert)?;
        for file in File::iter() {
            write!(f, "{}", file)?;
        }
        writeln!(f)
    }
}
