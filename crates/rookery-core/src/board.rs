//! The chess board: piece placement and castling rights.

use std::fmt;
use std::ops::{Index, IndexMut};

use tracing::debug;

use crate::castling_rights::CastlingRights;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::side::Side;

/// Back-rank arrangement from file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete board state.
///
/// Every square holds a [`Piece`]; empty squares hold [`Piece::NULL`], so
/// lookups never fail. Mutation during play and search goes through
/// [`Board::make_move`] and [`Board::reverse_move`]. `Clone` gives the
/// independent copy a search works on.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Pieces in row-major order (`x + 8 * y`).
    squares: [Piece; Position::COUNT],
    castling: CastlingRights,
}

impl Board {
    /// Return the standard starting position.
    pub fn new() -> Board {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// Return a board with no pieces and both castling rights set.
    pub fn empty() -> Board {
        Board {
            squares: [Piece::NULL; Position::COUNT],
            castling: CastlingRights::ALL,
        }
    }

    /// Build a board holding exactly the given pieces. Castling rights start set.
    pub fn from_pieces<I>(pieces: I) -> Board
    where
        I: IntoIterator<Item = (Piece, Position)>,
    {
        let mut board = Board::empty();
        for (piece, pos) in pieces {
            board[pos] = piece;
        }
        board
    }

    /// Build a board from the persisted 64-cell layout.
    pub fn from_pieces_data(data: &[i32]) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        board.load_pieces_data(data)?;
        Ok(board)
    }

    /// Put every piece back on its starting square and restore both castling rights.
    pub fn reset(&mut self) {
        self.squares = [Piece::NULL; Position::COUNT];
        self.castling = CastlingRights::ALL;

        for side in Side::ALL {
            let home = side.home_rank();
            let pawns = side.pawn_rank();
            for (x, kind) in (0i8..).zip(BACK_RANK) {
                self[Position::new(x, home)] = Piece::new(kind, side);
                self[Position::new(x, pawns)] = Piece::new(PieceKind::Pawn, side);
            }
        }
    }

    /// Replace the placement with the persisted layout. Castling rights are left untouched.
    ///
    /// Cells are read in row-major order; a shorter slice fills the leading
    /// squares and leaves the rest empty. Nothing is modified on error.
    pub fn load_pieces_data(&mut self, data: &[i32]) -> Result<(), BoardError> {
        if data.len() > Position::COUNT {
            return Err(BoardError::TooManySquares { len: data.len() });
        }

        let mut squares = [Piece::NULL; Position::COUNT];
        for (index, (&code, square)) in data.iter().zip(squares.iter_mut()).enumerate() {
            *square = Piece::from_code(code).ok_or(BoardError::InvalidPieceCode { index, code })?;
        }

        self.squares = squares;
        debug!(cells = data.len(), "loaded board layout");
        Ok(())
    }

    /// Return the persisted 64-cell layout.
    pub fn pieces_data(&self) -> [i32; Position::COUNT] {
        self.squares.map(|piece| i32::from(piece.code()))
    }

    /// Return the piece on `pos`, or `None` if `pos` is off the board.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        pos.in_bounds().then(|| self.squares[pos.index()])
    }

    /// Put `piece` on `pos`, returning the piece that stood there.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    #[inline]
    pub fn set_piece(&mut self, pos: Position, piece: Piece) -> Piece {
        std::mem::replace(&mut self[pos], piece)
    }

    /// Iterate over every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Piece, Position)> + '_ {
        Position::all()
            .map(|pos| (self.squares[pos.index()], pos))
            .filter(|(piece, _)| !piece.is_null())
    }

    /// Iterate over `side`'s pieces in row-major order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Piece, Position)> + '_ {
        self.pieces().filter(move |(piece, _)| piece.side() == side)
    }

    /// Return the square of `side`'s king, or `None` if it is not on the board.
    pub fn king_position(&self, side: Side) -> Option<Position> {
        let king = Piece::new(PieceKind::King, side);
        self.pieces().find(|&(piece, _)| piece == king).map(|(_, pos)| pos)
    }

    /// Material balance from `side`'s point of view.
    pub fn score(&self, side: Side) -> i32 {
        self.pieces()
            .map(|(piece, _)| {
                if piece.side() == side {
                    piece.score()
                } else {
                    -piece.score()
                }
            })
            .sum()
    }

    /// Return `true` if `side` may still castle.
    #[inline]
    pub fn castling(&self, side: Side) -> bool {
        self.castling.has(side)
    }

    /// Set `side`'s castling right.
    #[inline]
    pub fn set_castling(&mut self, side: Side, value: bool) {
        self.castling = self.castling.with(side, value);
    }

    /// Return both castling rights.
    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Replace both castling rights.
    #[inline]
    pub(crate) fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling = rights;
    }

    /// Return the persisted `[white, black]` castling flags.
    #[inline]
    pub fn castling_flags(&self) -> [bool; 2] {
        self.castling.flags()
    }

    /// Replace both castling rights from the persisted `[white, black]` flags.
    #[inline]
    pub fn set_castling_flags(&mut self, flags: [bool; 2]) {
        self.castling = CastlingRights::from_flags(flags);
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Index<Position> for Board {
    type Output = Piece;

    #[inline]
    fn index(&self, pos: Position) -> &Piece {
        &self.squares[pos.index()]
    }
}

impl IndexMut<Position> for Board {
    #[inline]
    fn index_mut(&mut self, pos: Position) -> &mut Piece {
        &mut self.squares[pos.index()]
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("pieces", &self.pieces().count())
            .field("castling", &self.castling)
            .finish()
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, Black on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..8i8 {
            write!(f, "{}  ", 8 - y)?;
            for x in 0..8i8 {
                let c = self.0[Position::new(x, y)].letter();
                if x < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
