//! Game session: board, side to move and the current selection

use crate::bitboard::Bitboard;
use crate::board::{Board, Pretty, PrettyStyle};
use crate::moves::{self, Move};
use crate::types::{Cell, Color, Coord};
use crate::{legal, movegen};

use thiserror::Error;
use tracing::{debug, trace};

/// Error making a move via [`Game::try_move()`]
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum MoveError {
    /// There is no piece on the source square
    #[error("no piece on {0}")]
    EmptySource(Coord),
    /// The piece on the source square belongs to the side not to move
    #[error("piece on {src} belongs to {owner}, but {side} is to move")]
    WrongSide {
        src: Coord,
        owner: Color,
        side: Color,
    },
    /// The move is not legal
    #[error("move {0} is not legal")]
    Illegal(Move),
}

/// Side to move
///
/// The game starts with White to move, and the side flips after each move. There is no terminal
/// state.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Turn {
    #[default]
    WhiteToMove,
    BlackToMove,
}

impl Turn {
    #[inline]
    pub const fn new(side: Color) -> Turn {
        match side {
            Color::White => Turn::WhiteToMove,
            Color::Black => Turn::BlackToMove,
        }
    }

    #[inline]
    pub const fn side(&self) -> Color {
        match *self {
            Turn::WhiteToMove => Color::White,
            Turn::BlackToMove => Color::Black,
        }
    }

    /// Passes the move to the other side
    #[inline]
    pub fn advance(&mut self) {
        *self = Turn::new(self.side().inv());
    }
}

/// Result of [`Game::click()`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClickResult {
    /// A piece was selected, contains the squares to highlight
    Selected { src: Coord, highlights: Bitboard },
    /// The selection was cleared
    Deselected,
    /// The selected piece was moved. The selection is cleared
    Moved { mv: Move, captured: Cell },
    /// Nothing happened
    Ignored,
}

/// Game session
///
/// Owns the board, the side to move and the currently selected square. All the state of one
/// game lives here, so independent games are just independent values.
///
/// # Example
///
/// ```
/// # use geochess::{Color, Game};
/// #
/// let mut game = Game::new();
/// game.try_move("e2e4".parse().unwrap()).unwrap();
/// assert_eq!(game.current_turn(), Color::Black);
/// assert!(game.try_move("d2d4".parse().unwrap()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Turn,
    selected: Option<Coord>,
}

impl Game {
    /// Starts a new game from the initial position with White to move
    pub fn new() -> Game {
        Game::from_board(Board::initial(), Color::White)
    }

    /// Starts a game from an arbitrary position
    pub fn from_board(board: Board, side: Color) -> Game {
        Game {
            board,
            turn: Turn::new(side),
            selected: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.turn.side()
    }

    #[inline]
    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    /// Passes the move to the other side
    ///
    /// Clears the selection, as the selected piece cannot belong to the new side to move.
    pub fn advance_turn(&mut self) {
        self.selected = None;
        self.turn.advance();
        debug!(side = %self.current_turn(), "turn passed");
    }

    #[inline]
    pub fn is_legal(&self, src: Coord, dst: Coord) -> bool {
        legal::is_legal(&self.board, src, dst)
    }

    #[inline]
    pub fn legal_destinations(&self, src: Coord) -> Bitboard {
        movegen::legal_destinations(&self.board, src)
    }

    /// Returns all legal moves for the side to move
    #[inline]
    pub fn moves(&self) -> movegen::MoveList {
        movegen::gen_all(&self.board, self.current_turn())
    }

    /// Makes the move on the board and returns the captured cell
    ///
    /// Neither the legality of the move is checked, nor the turn is passed. Use
    /// [`Game::try_move()`] to make a move with all the checks. The selection is cleared.
    pub fn apply_move(&mut self, mv: Move) -> Cell {
        self.selected = None;
        let piece = self.board.get(mv.src());
        let captured = moves::make_move(&mut self.board, mv);
        debug!(%mv, %piece, %captured, "move applied");
        captured
    }

    /// Checks that the move can be made by the side to move, makes it and passes the turn
    ///
    /// Returns the captured cell.
    pub fn try_move(&mut self, mv: Move) -> Result<Cell, MoveError> {
        if let Err(err) = self.check_move(mv) {
            debug!(%mv, %err, "move rejected");
            return Err(err);
        }
        let captured = self.apply_move(mv);
        self.advance_turn();
        Ok(captured)
    }

    fn check_move(&self, mv: Move) -> Result<(), MoveError> {
        let side = self.current_turn();
        match self.board.get(mv.src()).color() {
            None => return Err(MoveError::EmptySource(mv.src())),
            Some(owner) if owner != side => {
                return Err(MoveError::WrongSide {
                    src: mv.src(),
                    owner,
                    side,
                })
            }
            Some(_) => {}
        }
        let legal = self.is_legal(mv.src(), mv.dst());
        #[cfg(feature = "selftest")]
        assert_eq!(
            legal,
            self.legal_destinations(mv.src()).has(mv.dst()),
            "enumerated destinations disagree with legality check for {}",
            mv
        );
        if !legal {
            return Err(MoveError::Illegal(mv));
        }
        Ok(())
    }

    fn select(&mut self, src: Coord) -> ClickResult {
        self.selected = Some(src);
        let highlights = self.legal_destinations(src);
        trace!(%src, moves = highlights.len(), "selected");
        ClickResult::Selected { src, highlights }
    }

    fn deselect(&mut self) -> ClickResult {
        match self.selected.take() {
            Some(src) => {
                trace!(%src, "deselected");
                ClickResult::Deselected
            }
            None => ClickResult::Ignored,
        }
    }

    /// Handles a click on square `coord`
    ///
    /// - If nothing is selected, clicking a piece of the side to move selects it.
    /// - Clicking the selected square again clears the selection.
    /// - Clicking a legal destination of the selected piece makes the move and passes the turn.
    /// - Clicking another piece of the side to move selects it instead.
    /// - Any other click clears the selection.
    pub fn click(&mut self, coord: Coord) -> ClickResult {
        let own = self.board.get(coord).color() == Some(self.current_turn());
        let src = match self.selected {
            None if own => return self.select(coord),
            None => return ClickResult::Ignored,
            Some(src) => src,
        };
        debug_assert_eq!(self.board.get(src).color(), Some(self.current_turn()));
        if src == coord {
            return self.deselect();
        }
        let mv = Move::new(src, coord);
        if self.is_legal(src, coord) {
            let captured = self.apply_move(mv);
            self.advance_turn();
            return ClickResult::Moved { mv, captured };
        }
        if own {
            return self.select(coord);
        }
        self.deselect()
    }

    /// Pretty-prints the board with the side to move indicator
    ///
    /// See [`Board::pretty()`] for details.
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        self.board.pretty_with_side(self.current_turn(), style)
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
