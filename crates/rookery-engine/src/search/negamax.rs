//! Plain negamax search.

use rookery_core::{Board, Move, Side};
use tracing::debug;

use crate::search::{Algorithm, INF, SearchContext, SearchResult, scripted_opening};
use crate::state::ChessState;

/// Exhaustive negamax player scoring leaves by material balance.
///
/// Visits every node to the requested depth; [`AlphaBeta`](crate::AlphaBeta)
/// returns the same scores with fewer nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegaMax;

impl NegaMax {
    /// Create a negamax player.
    pub fn new() -> NegaMax {
        NegaMax
    }
}

impl Algorithm for NegaMax {
    fn name(&self) -> &'static str {
        "negamax"
    }

    fn search(&mut self, depth: u8, side: Side, state: ChessState, board: &Board) -> SearchResult {
        if let Some(result) = scripted_opening(board, side, state) {
            return result;
        }

        let depth = depth.max(1);
        debug!(algorithm = self.name(), %side, depth, %state, "search started");

        let mut ctx = SearchContext::new(board);
        let mut best_score = -INF;
        let mut best_move = Move::NULL;

        for mv in ctx.root_moves(side, state) {
            let undo = ctx.board.make_move(mv);
            let score = -negamax(&mut ctx, !side, depth - 1);
            ctx.board.reverse_move(mv, undo);

            if best_move.is_null() || score > best_score {
                best_score = score;
                best_move = mv;
            }
        }

        ctx.finish(self.name(), best_move, best_score)
    }
}

/// Score of the position for `side` to move. A node without moves scores `-INF`.
fn negamax(ctx: &mut SearchContext, side: Side, depth: u8) -> i32 {
    ctx.nodes += 1;

    if depth == 0 {
        return ctx.board.score(side);
    }

    let mut best = -INF;
    for mv in ctx.board.generate_moves(side) {
        let undo = ctx.board.make_move(mv);
        let score = -negamax(ctx, !side, depth - 1);
        ctx.board.reverse_move(mv, undo);
        best = best.max(score);
    }
    best
}
