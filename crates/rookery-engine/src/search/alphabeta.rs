//! Negamax search with fail-hard alpha-beta pruning.

use rookery_core::{Board, Move, Side};
use tracing::debug;

use crate::search::{Algorithm, INF, SearchContext, SearchResult, scripted_opening};
use crate::state::ChessState;

/// Alpha-beta player scoring leaves by material balance.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaBeta;

impl AlphaBeta {
    /// Create an alpha-beta player.
    pub fn new() -> AlphaBeta {
        AlphaBeta
    }
}

impl Algorithm for AlphaBeta {
    fn name(&self) -> &'static str {
        "alphabeta"
    }

    fn search(&mut self, depth: u8, side: Side, state: ChessState, board: &Board) -> SearchResult {
        if let Some(result) = scripted_opening(board, side, state) {
            return result;
        }

        let depth = depth.max(1);
        debug!(algorithm = self.name(), %side, depth, %state, "search started");

        let mut ctx = SearchContext::new(board);
        let beta = INF;
        let mut alpha = -INF;
        let mut best_move = Move::NULL;

        for mv in ctx.root_moves(side, state) {
            let undo = ctx.board.make_move(mv);
            let score = -alphabeta(&mut ctx, !side, depth - 1, -beta, -alpha);
            ctx.board.reverse_move(mv, undo);

            if best_move.is_null() || score > alpha {
                alpha = score;
                best_move = mv;
            }
        }

        ctx.finish(self.name(), best_move, alpha)
    }
}

/// Score of the position for `side` to move, within `[alpha, beta]`.
///
/// A node without moves returns `alpha`.
fn alphabeta(ctx: &mut SearchContext, side: Side, depth: u8, mut alpha: i32, beta: i32) -> i32 {
    ctx.nodes += 1;

    if depth == 0 {
        return ctx.board.score(side);
    }

    for mv in ctx.board.generate_moves(side) {
        let undo = ctx.board.make_move(mv);
        let score = -alphabeta(ctx, !side, depth - 1, -beta, -alpha);
        ctx.board.reverse_move(mv, undo);

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }
    alpha
}
