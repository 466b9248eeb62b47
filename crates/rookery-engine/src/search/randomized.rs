//! Random mover.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rookery_core::{Board, Move, Side};
use tracing::trace;

use crate::search::{Algorithm, SearchResult, scripted_opening};
use crate::state::ChessState;

/// Player that picks uniformly among all pseudo-legal moves.
///
/// Ignores depth and state, except for the scripted opening.
#[derive(Debug, Clone)]
pub struct Randomized {
    rng: StdRng,
}

impl Randomized {
    /// Create a random player whose choices are fixed by `seed`.
    pub fn new(seed: u64) -> Randomized {
        Randomized::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a random player drawing from `rng`.
    pub fn from_rng(rng: StdRng) -> Randomized {
        Randomized { rng }
    }
}

impl Algorithm for Randomized {
    fn name(&self) -> &'static str {
        "random"
    }

    fn search(&mut self, _depth: u8, side: Side, state: ChessState, board: &Board) -> SearchResult {
        if let Some(result) = scripted_opening(board, side, state) {
            return result;
        }

        let moves = board.generate_moves(side);
        let best_move = moves.as_slice().choose(&mut self.rng).copied().unwrap_or(Move::NULL);
        trace!(%side, candidates = moves.len(), chosen = %best_move, "random move");

        SearchResult {
            best_move,
            score: None,
            nodes: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rookery_core::{Board, Piece, Position, Side};

    use super::Randomized;
    use crate::search::Algorithm;
    use crate::state::ChessState;

    #[test]
    fn same_seed_same_moves() {
        let board = Board::new();
        let mut a = Randomized::new(17);
        let mut b = Randomized::new(17);
        for _ in 0..10 {
            assert_eq!(
                a.calculate_move(0, Side::Black, ChessState::Default, &board),
                b.calculate_move(0, Side::Black, ChessState::Default, &board)
            );
        }
    }

    #[test]
    fn picks_only_generated_moves_and_reaches_all_of_them() {
        let board = Board::new();
        let legal = board.generate_moves(Side::White);
        let mut random = Randomized::new(3);
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let mv = random.calculate_move(2, Side::White, ChessState::Default, &board);
            assert!(legal.contains(mv));
            seen.insert(mv);
        }
        // Every move, including the last one generated, gets picked.
        assert_eq!(seen.len(), legal.len());
        assert!(seen.contains(&legal[legal.len() - 1]));
    }

    #[test]
    fn single_move_is_always_chosen() {
        let board = Board::from_pieces([
            (Piece::WHITE_PAWN, Position::new(3, 5)),
            (Piece::BLACK_KING, Position::new(0, 0)),
        ]);
        let mut random = Randomized::new(0);
        let mv = random.calculate_move(1, Side::White, ChessState::Default, &board);
        assert_eq!(mv.target(), Position::new(3, 4));
    }

    #[test]
    fn no_moves_gives_null() {
        let board = Board::from_pieces([(Piece::BLACK_KING, Position::new(0, 0))]);
        let mut random = Randomized::new(0);
        assert!(random.calculate_move(1, Side::White, ChessState::Default, &board).is_null());
    }
}
