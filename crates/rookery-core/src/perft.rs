//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::side::Side;

/// Count the leaf nodes of the legal move tree at the given depth, `side` to move.
///
/// Pseudo-legal moves that leave the mover in check are not counted. Depth 0
/// returns 1 (the current position).
pub fn perft(board: &mut Board, side: Side, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for mv in board.generate_moves(side) {
        let undo = board.make_move(mv);
        if !board.detect_check(side) {
            nodes += if depth == 1 { 1 } else { perft(board, !side, depth - 1) };
        }
        board.reverse_move(mv, undo);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(move, node_count)` pairs sorted alphabetically.
pub fn divide(board: &mut Board, side: Side, depth: usize) -> Vec<(String, u64)> {
    let mut results = Vec::new();
    for mv in board.generate_moves(side) {
        let undo = board.make_move(mv);
        if !board.detect_check(side) {
            let count = if depth <= 1 { 1 } else { perft(board, !side, depth - 1) };
            results.push((mv.to_string(), count));
        }
        board.reverse_move(mv, undo);
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::position::Position;

    #[test]
    fn perft_startpos_depth_1() {
        let mut board = Board::new();
        assert_eq!(perft(&mut board, Side::White, 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        let mut board = Board::new();
        assert_eq!(perft(&mut board, Side::White, 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        let mut board = Board::new();
        assert_eq!(perft(&mut board, Side::White, 3), 8_902);
        assert_eq!(board, Board::new(), "perft must leave the board untouched");
    }

    #[test]
    #[ignore] // slow
    fn perft_startpos_depth_4() {
        let mut board = Board::new();
        assert_eq!(perft(&mut board, Side::White, 4), 197_281);
    }

    #[test]
    fn perft_black_mirrors_white() {
        let mut board = Board::new();
        assert_eq!(perft(&mut board, Side::Black, 2), 400);
    }

    #[test]
    fn divide_startpos() {
        let mut board = Board::new();
        let results = divide(&mut board, Side::White, 2);
        assert_eq!(results.len(), 20);
        assert!(results.iter().all(|(_, n)| *n == 20));
        assert_eq!(results[0].0, "a2a3");
    }

    #[test]
    fn pinned_piece_moves_are_not_counted() {
        let mut board = Board::from_pieces([
            (Piece::WHITE_KING, Position::new(4, 7)),
            (Piece::WHITE_KNIGHT, Position::new(4, 6)),
            (Piece::BLACK_ROOK, Position::new(4, 0)),
            (Piece::BLACK_KING, Position::new(0, 0)),
        ]);
        board.set_castling_flags([false, false]);
        // Knight is pinned; king has d1, f1, d2, f2.
        assert_eq!(perft(&mut board, Side::White, 1), 4);
    }
}
