//! Pseudo-legal move generation.
//!
//! Moves respect each piece's movement shape and never land on a same-side
//! piece (the castling encoding excepted), but may leave the mover's own king
//! in check. King safety is filtered by the caller via
//! [`Board::detect_check_after`].

use std::ops::ControlFlow;

use crate::board::Board;
use crate::chess_move::Move;
use crate::make_move::KING_FILE;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::side::Side;

/// Generated moves in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList { moves: Vec::new() }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Return an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Return `true` if the list holds `mv`.
    pub fn contains(&self, mv: Move) -> bool {
        self.moves.contains(&mv)
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Board {
    /// Generate every pseudo-legal move of `side`, piece by piece in row-major order.
    pub fn generate_moves(&self, side: Side) -> MoveList {
        let mut list = MoveList::new();
        let _ = self.visit_moves(side, |mv| {
            list.push(mv);
            ControlFlow::Continue(())
        });
        list
    }

    /// Generate the pseudo-legal moves of `piece` standing on `from`.
    ///
    /// `piece` is taken as given, not read from the board, so callers can ask
    /// "where could this piece go from here".
    pub fn generate_moves_for(&self, piece: Piece, from: Position) -> MoveList {
        let mut list = MoveList::new();
        let _ = self.visit_moves_for(piece, from, |mv| {
            list.push(mv);
            ControlFlow::Continue(())
        });
        list
    }

    /// Feed every pseudo-legal move of `side` to `visit` until it breaks.
    ///
    /// Returns `Break` if `visit` stopped the walk early.
    pub fn visit_moves<F>(&self, side: Side, mut visit: F) -> ControlFlow<()>
    where
        F: FnMut(Move) -> ControlFlow<()>,
    {
        for (piece, from) in self.pieces_of(side) {
            self.scan_piece(piece, from, &mut visit)?;
        }
        ControlFlow::Continue(())
    }

    /// Feed the pseudo-legal moves of `piece` on `from` to `visit` until it breaks.
    pub fn visit_moves_for<F>(&self, piece: Piece, from: Position, mut visit: F) -> ControlFlow<()>
    where
        F: FnMut(Move) -> ControlFlow<()>,
    {
        self.scan_piece(piece, from, &mut visit)
    }

    fn scan_piece<F>(&self, piece: Piece, from: Position, visit: &mut F) -> ControlFlow<()>
    where
        F: FnMut(Move) -> ControlFlow<()>,
    {
        if piece.is_null() || !from.in_bounds() {
            return ControlFlow::Continue(());
        }

        let side = piece.side();
        let kind = piece.kind();

        for &dir in kind.directions() {
            let step = dir * side.sign();
            let pawn_push = kind == PieceKind::Pawn && dir.is_orthogonal();
            let pawn_capture = kind == PieceKind::Pawn && !pawn_push;

            let mut target = from + step;
            while target.in_bounds() {
                let occupant = self[target];
                if !occupant.is_null() {
                    if !pawn_push && occupant.side() != side {
                        visit(Move::new(piece, from, target))?;
                    }
                    break;
                }
                if pawn_capture {
                    break;
                }

                visit(Move::new(piece, from, target))?;

                if kind.is_range_limited() {
                    if pawn_push && from.y() == side.pawn_rank() {
                        let double = target + step;
                        if double.in_bounds() && self[double].is_null() {
                            visit(Move::new(piece, from, double))?;
                        }
                    }
                    break;
                }
                target = target + step;
            }
        }

        if kind == PieceKind::King {
            self.scan_castling(piece, from, visit)?;
        }
        ControlFlow::Continue(())
    }

    /// Castling moves for a king on its home square, queenside first.
    fn scan_castling<F>(&self, king: Piece, from: Position, visit: &mut F) -> ControlFlow<()>
    where
        F: FnMut(Move) -> ControlFlow<()>,
    {
        let side = king.side();
        let home = side.home_rank();
        if from != Position::new(KING_FILE, home) || !self.castling(side) {
            return ControlFlow::Continue(());
        }

        let rook = Piece::new(PieceKind::Rook, side);
        for (corner, mut between) in [(0i8, 1i8..KING_FILE), (7, KING_FILE + 1..7)] {
            let rook_square = Position::new(corner, home);
            if self[rook_square] == rook && between.all(|x| self[Position::new(x, home)].is_null()) {
                visit(Move::new(king, from, rook_square))?;
            }
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use super::MoveList;
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::piece::Piece;
    use crate::position::Position;
    use crate::side::Side;

    fn pos(x: i8, y: i8) -> Position {
        Position::new(x, y)
    }

    fn targets(list: &MoveList) -> Vec<Position> {
        list.iter().map(|mv| mv.target()).collect()
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let board = Board::new();
        assert_eq!(board.generate_moves(Side::White).len(), 20);
        assert_eq!(board.generate_moves(Side::Black).len(), 20);
    }

    #[test]
    fn moves_follow_row_major_piece_order() {
        let board = Board::new();
        let moves = board.generate_moves(Side::Black);
        // Knight b8 is the first black piece with a move.
        assert_eq!(moves[0].current(), pos(1, 0));
        assert_eq!(moves[0].piece(), Piece::BLACK_KNIGHT);
    }

    #[test]
    fn knight_in_corner() {
        let board = Board::empty();
        let moves = board.generate_moves_for(Piece::WHITE_KNIGHT, pos(0, 0));
        let mut got = targets(&moves);
        got.sort_by_key(|p| p.index());
        assert_eq!(got, vec![pos(2, 1), pos(1, 2)]);
    }

    #[test]
    fn rook_slides_until_blocked() {
        let board = Board::from_pieces([
            (Piece::WHITE_ROOK, pos(0, 7)),
            (Piece::WHITE_PAWN, pos(0, 5)),
            (Piece::BLACK_KNIGHT, pos(3, 7)),
        ]);
        let got = targets(&board.generate_moves_for(Piece::WHITE_ROOK, pos(0, 7)));
        assert!(got.contains(&pos(0, 6)));
        assert!(!got.contains(&pos(0, 5)), "own piece blocks");
        assert!(got.contains(&pos(3, 7)), "capture");
        assert!(!got.contains(&pos(4, 7)), "beyond capture");
        assert_eq!(got.len(), 4);
    }

    #[test]
    fn queen_in_center_of_empty_board() {
        let board = Board::empty();
        assert_eq!(board.generate_moves_for(Piece::BLACK_QUEEN, pos(3, 3)).len(), 27);
    }

    #[test]
    fn bishop_directions_are_distinct() {
        let board = Board::empty();
        let moves = board.generate_moves_for(Piece::WHITE_BISHOP, pos(3, 3));
        assert_eq!(moves.len(), 13);
        let mut got = targets(&moves);
        got.sort_by_key(|p| p.index());
        got.dedup();
        assert_eq!(got.len(), 13);
    }

    #[test]
    fn king_steps_once() {
        let board = Board::empty();
        assert_eq!(board.generate_moves_for(Piece::WHITE_KING, pos(3, 3)).len(), 8);
    }

    #[test]
    fn pawn_double_push_from_start() {
        let board = Board::new();
        let got = targets(&board.generate_moves_for(Piece::WHITE_PAWN, pos(4, 6)));
        assert_eq!(got, vec![pos(4, 5), pos(4, 4)]);

        let got = targets(&board.generate_moves_for(Piece::BLACK_PAWN, pos(4, 1)));
        assert_eq!(got, vec![pos(4, 2), pos(4, 3)]);
    }

    #[test]
    fn pawn_off_start_rank_single_push() {
        let board = Board::empty();
        let got = targets(&board.generate_moves_for(Piece::WHITE_PAWN, pos(2, 5)));
        assert_eq!(got, vec![pos(2, 4)]);
    }

    #[test]
    fn pawn_blocked_by_any_piece() {
        let board = Board::from_pieces([
            (Piece::WHITE_PAWN, pos(2, 6)),
            (Piece::BLACK_PAWN, pos(2, 5)),
        ]);
        assert!(board.generate_moves_for(Piece::WHITE_PAWN, pos(2, 6)).is_empty());
    }

    #[test]
    fn pawn_far_square_blocked() {
        let board = Board::from_pieces([
            (Piece::WHITE_PAWN, pos(2, 6)),
            (Piece::WHITE_KNIGHT, pos(2, 4)),
        ]);
        let got = targets(&board.generate_moves_for(Piece::WHITE_PAWN, pos(2, 6)));
        assert_eq!(got, vec![pos(2, 5)]);
    }

    #[test]
    fn pawn_captures_diagonally_only() {
        let board = Board::from_pieces([
            (Piece::BLACK_PAWN, pos(3, 3)),
            (Piece::WHITE_ROOK, pos(2, 4)),
            (Piece::BLACK_ROOK, pos(4, 4)),
        ]);
        let got = targets(&board.generate_moves_for(Piece::BLACK_PAWN, pos(3, 3)));
        assert_eq!(got, vec![pos(3, 4), pos(2, 4)]);
    }

    #[test]
    fn castling_both_wings() {
        let board = Board::from_pieces([
            (Piece::WHITE_KING, pos(4, 7)),
            (Piece::WHITE_ROOK, pos(0, 7)),
            (Piece::WHITE_ROOK, pos(7, 7)),
        ]);
        let moves = board.generate_moves_for(Piece::WHITE_KING, pos(4, 7));
        assert!(moves.contains(Move::new(Piece::WHITE_KING, pos(4, 7), pos(0, 7))));
        assert!(moves.contains(Move::new(Piece::WHITE_KING, pos(4, 7), pos(7, 7))));
    }

    #[test]
    fn castling_needs_empty_path_and_right() {
        let mut board = Board::from_pieces([
            (Piece::BLACK_KING, pos(4, 0)),
            (Piece::BLACK_ROOK, pos(0, 0)),
            (Piece::BLACK_ROOK, pos(7, 0)),
            (Piece::BLACK_KNIGHT, pos(1, 0)),
        ]);
        let castles = |board: &Board| {
            board
                .generate_moves_for(Piece::BLACK_KING, pos(4, 0))
                .iter()
                .filter(|mv| mv.is_castling(board[mv.target()]))
                .count()
        };
        assert_eq!(castles(&board), 1, "knight blocks queenside");

        board.set_castling(Side::Black, false);
        assert_eq!(castles(&board), 0);
    }

    #[test]
    fn no_castling_off_home_square() {
        let board = Board::from_pieces([
            (Piece::WHITE_KING, pos(3, 7)),
            (Piece::WHITE_ROOK, pos(0, 7)),
        ]);
        let moves = board.generate_moves_for(Piece::WHITE_KING, pos(3, 7));
        assert!(!moves.iter().any(|mv| mv.target() == pos(0, 7)));
    }

    #[test]
    fn visitor_stops_early() {
        let board = Board::new();
        let mut seen = 0;
        let flow = board.visit_moves(Side::White, |_| {
            seen += 1;
            if seen == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert!(flow.is_break());
        assert_eq!(seen, 3);
    }

    #[test]
    fn null_piece_has_no_moves() {
        let board = Board::new();
        assert!(board.generate_moves_for(Piece::NULL, pos(3, 3)).is_empty());
    }
}
