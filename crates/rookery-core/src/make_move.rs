//! In-place move execution and its exact inverse.

use crate::board::Board;
use crate::castling_rights::CastlingRights;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::side::Side;

/// File the king starts on.
pub(crate) const KING_FILE: i8 = 4;

/// What [`Board::reverse_move`] needs to undo a [`Board::make_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveUndo {
    removed: Piece,
    castling: CastlingRights,
}

impl MoveUndo {
    /// The piece that stood on the target square before the move.
    ///
    /// Null for quiet moves; the castling rook for castling moves.
    #[inline]
    pub fn removed(self) -> Piece {
        self.removed
    }

    /// Castling rights in force before the move.
    #[inline]
    pub fn castling(self) -> CastlingRights {
        self.castling
    }
}

impl Board {
    /// Apply `mv` in place. The move is trusted, not validated.
    ///
    /// Pawns reaching the far rank become queens. A king moving onto its own
    /// rook castles. A king or rook move may clear its side's castling right
    /// (see [`Board::is_castling_candidate`]).
    pub fn make_move(&mut self, mv: Move) -> MoveUndo {
        let castling = self.castling_rights();
        let piece = mv.piece();
        let side = piece.side();

        let removed = if mv.is_castling(self[mv.target()]) {
            self.castling_move(mv.target(), side)
        } else if mv.is_promotion() {
            self.relocate(Piece::new(PieceKind::Queen, side), mv.current(), mv.target())
        } else {
            if self.castling(side)
                && piece.kind().can_castle()
                && self.is_castling_candidate(piece, mv.current())
            {
                self.set_castling(side, false);
            }
            self.relocate(piece, mv.current(), mv.target())
        };

        MoveUndo { removed, castling }
    }

    /// Undo `mv`, which must be the most recent move made on this board.
    pub fn reverse_move(&mut self, mv: Move, undo: MoveUndo) {
        if mv.is_castling(undo.removed) {
            self.reverse_castling_move(mv.target(), mv.piece().side());
        } else {
            self[mv.target()] = undo.removed;
            self[mv.current()] = mv.piece();
        }
        self.set_castling_rights(undo.castling);
    }

    fn relocate(&mut self, piece: Piece, from: Position, to: Position) -> Piece {
        self[from] = Piece::NULL;
        self.set_piece(to, piece)
    }

    /// King and rook squares after castling toward the rook on `rook_origin`.
    fn castled_squares(rook_origin: Position) -> (Position, Position) {
        let rank = rook_origin.y();
        if rook_origin.x() == 0 {
            (Position::new(2, rank), Position::new(3, rank))
        } else {
            (Position::new(6, rank), Position::new(5, rank))
        }
    }

    fn castling_move(&mut self, rook_origin: Position, side: Side) -> Piece {
        let king_origin = Position::new(KING_FILE, side.home_rank());
        let (king_target, rook_target) = Self::castled_squares(rook_origin);
        let rook = self[rook_origin];

        self[king_origin] = Piece::NULL;
        self[rook_origin] = Piece::NULL;
        self[king_target] = Piece::new(PieceKind::King, side);
        self[rook_target] = Piece::new(PieceKind::Rook, side);
        self.set_castling(side, false);

        rook
    }

    fn reverse_castling_move(&mut self, rook_origin: Position, side: Side) {
        let king_origin = Position::new(KING_FILE, side.home_rank());
        let (king_target, rook_target) = Self::castled_squares(rook_origin);

        self[king_target] = Piece::NULL;
        self[rook_target] = Piece::NULL;
        self[king_origin] = Piece::new(PieceKind::King, side);
        self[rook_origin] = Piece::new(PieceKind::Rook, side);
    }

    /// Decide whether moving `piece` off `from` costs its side the castling right.
    ///
    /// A king move always does. For a rook, the first two same-side rooks in
    /// row-major order are inspected: with fewer than two on the board the
    /// move counts; otherwise it counts only if the other rook is not on the
    /// opposite corner of `from`'s rank, i.e. both rooks have now left home.
    /// This is positional inference, not per-rook history, and it misjudges
    /// boards with extra promoted rooks.
    fn is_castling_candidate(&self, piece: Piece, from: Position) -> bool {
        if piece.kind() == PieceKind::King {
            return true;
        }

        let rook = Piece::new(PieceKind::Rook, piece.side());
        let mut rooks = self
            .pieces()
            .filter(|&(p, _)| p == rook)
            .map(|(_, pos)| pos);
        let (Some(first), Some(second)) = (rooks.next(), rooks.next()) else {
            return true;
        };

        let other = if first == from { second } else { first };
        let other_home = if from.x() == 0 {
            Position::new(7, from.y())
        } else {
            Position::new(0, from.y())
        };
        other != other_home
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;
    use crate::side::Side;

    fn pos(x: i8, y: i8) -> Position {
        Position::new(x, y)
    }

    fn mv(board: &Board, from: Position, to: Position) -> Move {
        Move::new(board[from], from, to)
    }

    #[test]
    fn quiet_move_and_capture_roundtrip() {
        let mut board = Board::from_pieces([
            (Piece::WHITE_PAWN, pos(1, 6)),
            (Piece::BLACK_PAWN, pos(0, 3)),
        ]);
        let original = board.clone();

        let push = mv(&board, pos(1, 6), pos(1, 4));
        let undo_push = board.make_move(push);
        assert_eq!(undo_push.removed(), Piece::NULL);
        assert_eq!(board[pos(1, 4)], Piece::WHITE_PAWN);
        assert!(board[pos(1, 6)].is_null());

        let capture = mv(&board, pos(0, 3), pos(1, 4));
        let undo_capture = board.make_move(capture);
        assert_eq!(undo_capture.removed(), Piece::WHITE_PAWN);
        assert_eq!(board[pos(1, 4)], Piece::BLACK_PAWN);

        board.reverse_move(capture, undo_capture);
        board.reverse_move(push, undo_push);
        assert_eq!(board, original);
    }

    fn castling_board() -> Board {
        Board::from_pieces([
            (Piece::WHITE_KING, pos(4, 7)),
            (Piece::WHITE_ROOK, pos(0, 7)),
            (Piece::WHITE_ROOK, pos(7, 7)),
        ])
    }

    #[test]
    fn queenside_castling() {
        let mut board = castling_board();
        let castle = mv(&board, pos(4, 7), pos(0, 7));
        let undo = board.make_move(castle);

        assert_eq!(undo.removed().kind(), PieceKind::Rook);
        assert_eq!(board[pos(2, 7)], Piece::WHITE_KING);
        assert_eq!(board[pos(3, 7)], Piece::WHITE_ROOK);
        assert!(board[pos(0, 7)].is_null());
        assert!(board[pos(4, 7)].is_null());
        assert!(!board.castling(Side::White));

        board.reverse_move(castle, undo);
        assert_eq!(board, castling_board());
        assert!(board.castling(Side::White));
    }

    #[test]
    fn kingside_castling() {
        let mut board = castling_board();
        let castle = mv(&board, pos(4, 7), pos(7, 7));
        let undo = board.make_move(castle);

        assert_eq!(board[pos(6, 7)], Piece::WHITE_KING);
        assert_eq!(board[pos(5, 7)], Piece::WHITE_ROOK);
        assert!(board[pos(7, 7)].is_null());
        assert!(!board.castling(Side::White));

        board.reverse_move(castle, undo);
        assert_eq!(board, castling_board());
    }

    #[test]
    fn black_castling_uses_top_rank() {
        let mut board = Board::from_pieces([
            (Piece::BLACK_KING, pos(4, 0)),
            (Piece::BLACK_ROOK, pos(7, 0)),
        ]);
        let castle = mv(&board, pos(4, 0), pos(7, 0));
        board.make_move(castle);
        assert_eq!(board[pos(6, 0)], Piece::BLACK_KING);
        assert_eq!(board[pos(5, 0)], Piece::BLACK_ROOK);
        assert!(!board.castling(Side::Black));
        assert!(board.castling(Side::White));
    }

    #[test]
    fn king_move_clears_right_until_reversed() {
        let mut board = castling_board();
        let step = mv(&board, pos(4, 7), pos(4, 6));
        let undo_step = board.make_move(step);
        assert!(!board.castling(Side::White));

        let back = mv(&board, pos(4, 6), pos(4, 7));
        let undo_back = board.make_move(back);
        assert!(!board.castling(Side::White));

        board.reverse_move(back, undo_back);
        assert!(!board.castling(Side::White), "right returns only when the triggering move is undone");
        board.reverse_move(step, undo_step);
        assert!(board.castling(Side::White));
    }

    #[test]
    fn right_survives_until_both_rooks_leave_home() {
        let mut board = castling_board();

        let first = mv(&board, pos(0, 7), pos(0, 6));
        let undo_first = board.make_move(first);
        assert!(board.castling(Side::White), "other rook still home");

        let second = mv(&board, pos(7, 7), pos(7, 6));
        let undo_second = board.make_move(second);
        assert!(!board.castling(Side::White));

        let home_again = mv(&board, pos(7, 6), pos(7, 7));
        let undo_home = board.make_move(home_again);
        assert!(!board.castling(Side::White));

        board.reverse_move(home_again, undo_home);
        board.reverse_move(second, undo_second);
        assert!(board.castling(Side::White));
        board.reverse_move(first, undo_first);
        assert!(board.castling(Side::White));
        assert_eq!(board, castling_board());
    }

    #[test]
    fn lone_rook_move_clears_right() {
        let mut board = castling_board();
        board[pos(7, 7)] = Piece::NULL;
        assert!(board.castling(Side::White));

        let slide = mv(&board, pos(0, 7), pos(1, 7));
        let undo = board.make_move(slide);
        assert!(!board.castling(Side::White));

        board.reverse_move(slide, undo);
        assert!(board.castling(Side::White));
    }

    #[test]
    fn other_side_right_is_untouched() {
        let mut board = Board::new();
        board[pos(5, 7)] = Piece::NULL;
        board[pos(6, 7)] = Piece::NULL;
        let castle = mv(&board, pos(4, 7), pos(7, 7));
        board.make_move(castle);
        assert!(!board.castling(Side::White));
        assert!(board.castling(Side::Black));
    }

    #[test]
    fn promotion_to_queen_and_back() {
        let mut board = Board::from_pieces([
            (Piece::WHITE_PAWN, pos(0, 1)),
            (Piece::BLACK_PAWN, pos(0, 6)),
        ]);
        let original = board.clone();

        let white = mv(&board, pos(0, 1), pos(0, 0));
        let undo = board.make_move(white);
        assert_eq!(board[pos(0, 0)], Piece::WHITE_QUEEN);
        board.reverse_move(white, undo);
        assert_eq!(board[pos(0, 1)], Piece::WHITE_PAWN);
        assert!(board[pos(0, 0)].is_null());

        let black = mv(&board, pos(0, 6), pos(0, 7));
        let undo = board.make_move(black);
        assert_eq!(board[pos(0, 7)], Piece::BLACK_QUEEN);
        board.reverse_move(black, undo);
        assert_eq!(board, original);
    }

    #[test]
    fn capturing_promotion_restores_victim() {
        let mut board = Board::from_pieces([
            (Piece::WHITE_PAWN, pos(3, 1)),
            (Piece::BLACK_ROOK, pos(4, 0)),
        ]);
        let original = board.clone();

        let capture = mv(&board, pos(3, 1), pos(4, 0));
        let undo = board.make_move(capture);
        assert_eq!(undo.removed(), Piece::BLACK_ROOK);
        assert_eq!(board[pos(4, 0)], Piece::WHITE_QUEEN);

        board.reverse_move(capture, undo);
        assert_eq!(board, original);
    }

    #[test]
    fn undo_records_prior_rights() {
        let mut board = castling_board();
        board.set_castling(Side::Black, false);
        let undo = board.make_move(mv(&board, pos(4, 7), pos(3, 7)));
        assert_eq!(undo.castling().flags(), [true, false]);
        assert_eq!(board.castling_flags(), [false, false]);
    }
}
