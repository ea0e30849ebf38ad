use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error parsing a square name like `e2`
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoordParseError {
    #[error("bad file {0:?}, expected a letter from a to h")]
    UnexpectedFileChar(char),
    #[error("bad rank {0:?}, expected a digit from 1 to 8")]
    UnexpectedRankChar(char),
    #[error("square name must have two chars")]
    BadLength,
}

const FILE_CHARS: &str = "abcdefgh";
const RANK_CHARS: &str = "87654321";

/// Column of the board, `A` is column 0
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    #[inline]
    pub const fn col(self) -> usize {
        self as usize
    }

    /// # Panics
    ///
    /// Panics if `col` is not in range `0..8`.
    #[inline]
    pub const fn from_col(col: usize) -> File {
        File::ALL[col]
    }

    pub fn iter() -> impl Iterator<Item = File> {
        File::ALL.into_iter()
    }

    pub fn from_char(c: char) -> Option<File> {
        FILE_CHARS.find(c).map(File::from_col)
    }

    pub fn as_char(self) -> char {
        FILE_CHARS.as_bytes()[self.col()] as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Row of the board
///
/// Rows are counted from Black's side: [`Rank::R8`] is row 0 and [`Rank::R1`] is row 7, so
/// White pawns advance towards lower rows.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Rank {
    R8,
    R7,
    R6,
    R5,
    R4,
    R3,
    R2,
    R1,
}

impl Rank {
    /// All ranks, from top row to bottom row
    pub const ALL: [Rank; 8] = [
        Rank::R8,
        Rank::R7,
        Rank::R6,
        Rank::R5,
        Rank::R4,
        Rank::R3,
        Rank::R2,
        Rank::R1,
    ];

    #[inline]
    pub const fn row(self) -> usize {
        self as usize
    }

    /// # Panics
    ///
    /// Panics if `row` is not in range `0..8`.
    #[inline]
    pub const fn from_row(row: usize) -> Rank {
        Rank::ALL[row]
    }

    pub fn iter() -> impl Iterator<Item = Rank> {
        Rank::ALL.into_iter()
    }

    pub fn from_char(c: char) -> Option<Rank> {
        RANK_CHARS.find(c).map(Rank::from_row)
    }

    pub fn as_char(self) -> char {
        RANK_CHARS.as_bytes()[self.row()] as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Square on the board, addressed by row and column
///
/// Row 0 is the top row (rank 8, Black's side), column 0 is the leftmost column (file a).
/// Coordinates are ordered row by row, which is also the order of [`Coord::index()`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Creates a coordinate from row and column
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in range `0..8`.
    #[inline]
    pub const fn from_row_col(row: usize, col: usize) -> Coord {
        assert!(row < 8 && col < 8, "row and column must be between 0 and 7");
        Coord {
            row: row as u8,
            col: col as u8,
        }
    }

    #[inline]
    pub const fn from_parts(file: File, rank: Rank) -> Coord {
        Coord::from_row_col(rank.row(), file.col())
    }

    /// Inverse of [`Coord::index()`]
    ///
    /// # Panics
    ///
    /// Panics if `index >= 64`.
    #[inline]
    pub const fn from_index(index: usize) -> Coord {
        assert!(index < 64, "square index must be between 0 and 63");
        Coord::from_row_col(index / 8, index % 8)
    }

    #[inline]
    pub const fn row(&self) -> usize {
        self.row as usize
    }

    #[inline]
    pub const fn col(&self) -> usize {
        self.col as usize
    }

    #[inline]
    pub const fn file(&self) -> File {
        File::from_col(self.col())
    }

    #[inline]
    pub const fn rank(&self) -> Rank {
        Rank::from_row(self.row())
    }

    /// Position of the square in row-major order, in range `0..64`
    #[inline]
    pub const fn index(&self) -> usize {
        self.row() * 8 + self.col()
    }

    /// Returns the coordinate shifted by `delta_row` rows and `delta_col` columns, or `None`
    /// if it falls off the board
    pub fn try_shift(self, delta_row: isize, delta_col: isize) -> Option<Coord> {
        let row = self.row as isize + delta_row;
        let col = self.col as isize + delta_col;
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return None;
        }
        Some(Coord::from_row_col(row as usize, col as usize))
    }

    /// Iterates over all the squares in row-major order
    pub fn iter() -> impl Iterator<Item = Coord> {
        (0..64).map(Coord::from_index)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({})", self)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Coord, Self::Err> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(CoordParseError::BadLength),
        };
        let file = File::from_char(file).ok_or(CoordParseError::UnexpectedFileChar(file))?;
        let rank = Rank::from_char(rank).ok_or(CoordParseError::UnexpectedRankChar(rank))?;
        Ok(Coord::from_parts(file, rank))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color
    #[inline]
    pub const fn inv(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of the piece
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Piece {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl Piece {
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
    ];

    /// Lowercase letter of the piece, as used in FEN
    pub const fn as_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Rook => 'r',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Chess symbol of the piece with color `c`
    pub const fn glyph(self, c: Color) -> char {
        match (c, self) {
            (Color::White, Piece::Pawn) => '♙',
            (Color::White, Piece::Rook) => '♖',
            (Color::White, Piece::Knight) => '♘',
            (Color::White, Piece::Bishop) => '♗',
            (Color::White, Piece::Queen) => '♕',
            (Color::White, Piece::King) => '♔',
            (Color::Black, Piece::Pawn) => '♟',
            (Color::Black, Piece::Rook) => '♜',
            (Color::Black, Piece::Knight) => '♞',
            (Color::Black, Piece::Bishop) => '♝',
            (Color::Black, Piece::Queen) => '♛',
            (Color::Black, Piece::King) => '♚',
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        Piece::ALL.into_iter().find(|p| p.as_char() == c)
    }
}

/// Contents of a single square: either empty or a piece of some color
#[derive(Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell(Option<(Color, Piece)>);

impl Cell {
    pub const EMPTY: Cell = Cell(None);

    #[inline]
    pub const fn from_parts(c: Color, p: Piece) -> Cell {
        Cell(Some((c, p)))
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    #[inline]
    pub const fn is_occupied(&self) -> bool {
        self.0.is_some()
    }

    /// Returns color and kind of the piece, or `None` if the cell is empty
    #[inline]
    pub const fn parts(&self) -> Option<(Color, Piece)> {
        self.0
    }

    #[inline]
    pub const fn color(&self) -> Option<Color> {
        match self.0 {
            Some((c, _)) => Some(c),
            None => None,
        }
    }

    #[inline]
    pub const fn piece(&self) -> Option<Piece> {
        match self.0 {
            Some((_, p)) => Some(p),
            None => None,
        }
    }

    /// FEN letter of the piece (uppercase for White), or `.` for an empty cell
    pub fn as_char(&self) -> char {
        match self.0 {
            Some((Color::White, p)) => p.as_char().to_ascii_uppercase(),
            Some((Color::Black, p)) => p.as_char(),
            None => '.',
        }
    }

    /// Chess symbol of the piece, or `.` for an empty cell
    pub fn as_utf8_char(&self) -> char {
        match self.0 {
            Some((c, p)) => p.glyph(c),
            None => '.',
        }
    }

    /// Parses a FEN piece letter
    ///
    /// Empty cells have no letter of their own, so this never returns [`Cell::EMPTY`].
    pub fn from_char(c: char) -> Option<Cell> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Piece::from_char(c.to_ascii_lowercase()).map(|p| Cell::from_parts(color, p))
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({})", self.as_char())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
