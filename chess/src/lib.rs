//! # geochess
//!
//! Move legality engine for a two-player game played on a chess board with the usual chess
//! pieces. Pieces move according to standard chess geometry, but the rules stop there: there is
//! no check, checkmate, castling, enpassant or promote, and the game never ends by itself.
//!
//! The main entry points are:
//!
//! - [`Board`]: the grid of cells, with the initial position and FEN-like text form;
//! - [`legal::is_legal()`]: whether a piece may move from one square to another;
//! - [`movegen::legal_destinations()`]: all the squares a piece may move to;
//! - [`Game`]: a game session with the side to move and piece selection.
//!
//! # Example
//!
//! ```
//! use geochess::{legal, movegen, Board, Coord, Move};
//!
//! let mut board = Board::initial();
//! let g1 = Coord::from_row_col(7, 6);
//! let dests: Vec<_> = movegen::legal_destinations(&board, g1)
//!     .into_iter()
//!     .map(|c| c.to_string())
//!     .collect();
//! assert_eq!(dests, vec!["f3".to_string(), "h3".to_string()]);
//!
//! let mv: Move = "g1f3".parse().unwrap();
//! assert!(legal::is_legal(&board, mv.src(), mv.dst()));
//! board.make_move(mv);
//! assert_eq!(board.as_fen(), "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R");
//! ```

pub mod between;
pub mod board;
pub mod game;
pub mod legal;
pub mod movegen;
pub mod moves;

pub use geochess_base::{bitboard, geometry, types};

pub use bitboard::Bitboard;
pub use board::Board;
pub use game::{ClickResult, Game, MoveError, Turn};
pub use moves::Move;
pub use types::{Cell, Color, Coord, File, Piece, Rank};
