//! Search algorithms and the common move-selection contract.

pub mod alphabeta;
pub mod negamax;
pub mod randomized;

use std::fmt;
use std::str::FromStr;

use rookery_core::{Board, Move, Piece, PieceKind, Position, Side};
use tracing::debug;

use crate::error::EngineError;
use crate::state::ChessState;

use self::alphabeta::AlphaBeta;
use self::negamax::NegaMax;
use self::randomized::Randomized;

/// Score representing an unreachable bound. Its negation never overflows.
pub const INF: i32 = i32::MAX;

/// File of the king pawn pushed by the scripted opening.
const OPENING_FILE: i8 = 4;

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Move to play, or [`Move::NULL`] if the side has no candidate move.
    pub best_move: Move,
    /// Score of `best_move` from the mover's perspective, when one was searched.
    pub score: Option<i32>,
    /// Nodes visited below the root.
    pub nodes: u64,
}

impl SearchResult {
    /// A result that involved no search.
    fn unscored(best_move: Move) -> SearchResult {
        SearchResult {
            best_move,
            score: None,
            nodes: 0,
        }
    }
}

/// A move-selection strategy.
pub trait Algorithm {
    /// Short lowercase name, used in logs.
    fn name(&self) -> &'static str;

    /// Search `board` for `side`'s move.
    ///
    /// `board` is not modified; implementations work on their own copy.
    fn search(&mut self, depth: u8, side: Side, state: ChessState, board: &Board) -> SearchResult;

    /// Pick `side`'s move, discarding search statistics.
    fn calculate_move(&mut self, depth: u8, side: Side, state: ChessState, board: &Board) -> Move {
        self.search(depth, side, state, board).best_move
    }
}

/// The scripted king-pawn double push for `side`, if it is playable on `board`.
pub fn opening_move(board: &Board, side: Side) -> Option<Move> {
    let pawn = Piece::new(PieceKind::Pawn, side);
    let forward = Position::new(0, -side.sign());
    let from = Position::new(OPENING_FILE, side.pawn_rank());
    let over = from + forward;
    let to = over + forward;

    (board[from] == pawn && board[over].is_null() && board[to].is_null())
        .then(|| Move::new(pawn, from, to))
}

/// Answer from the scripted opening when `state` calls for it.
pub(crate) fn scripted_opening(board: &Board, side: Side, state: ChessState) -> Option<SearchResult> {
    if state != ChessState::Opening {
        return None;
    }
    let mv = opening_move(board, side);
    if mv.is_none() {
        debug!(%side, "scripted opening unavailable, searching instead");
    }
    mv.map(SearchResult::unscored)
}

/// Mutable search state: the working board copy and node counter.
pub(crate) struct SearchContext {
    pub(crate) board: Board,
    pub(crate) nodes: u64,
}

impl SearchContext {
    pub(crate) fn new(board: &Board) -> SearchContext {
        SearchContext {
            board: board.clone(),
            nodes: 0,
        }
    }

    /// Candidate root moves for `side`.
    ///
    /// When `state` says `side` is in check, moves that do not resolve the
    /// check are dropped.
    pub(crate) fn root_moves(&mut self, side: Side, state: ChessState) -> Vec<Move> {
        let moves = self.board.generate_moves(side);
        if !state.is_check_for(side) {
            return moves.into_iter().collect();
        }
        moves
            .into_iter()
            .filter(|&mv| !self.board.detect_check_after(side, mv))
            .collect()
    }

    pub(crate) fn finish(self, algorithm: &str, best_move: Move, score: i32) -> SearchResult {
        let score = (!best_move.is_null()).then_some(score);
        debug!(
            algorithm,
            best = %best_move,
            score = ?score,
            nodes = self.nodes,
            "search finished"
        );
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }
}

/// Selectable algorithm, e.g. from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlgorithmKind {
    /// Negamax with fail-hard alpha-beta pruning.
    #[default]
    AlphaBeta,
    /// Plain negamax.
    NegaMax,
    /// Uniformly random pseudo-legal moves.
    Random,
}

impl AlgorithmKind {
    /// All selectable algorithms.
    pub const ALL: [AlgorithmKind; 3] = [AlgorithmKind::AlphaBeta, AlgorithmKind::NegaMax, AlgorithmKind::Random];

    /// Construct the algorithm. `seed` only affects [`AlgorithmKind::Random`].
    pub fn build(self, seed: u64) -> Box<dyn Algorithm + Send> {
        match self {
            AlgorithmKind::AlphaBeta => Box::new(AlphaBeta::new()),
            AlgorithmKind::NegaMax => Box::new(NegaMax::new()),
            AlgorithmKind::Random => Box::new(Randomized::new(seed)),
        }
    }

    /// Name accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            AlgorithmKind::AlphaBeta => "alphabeta",
            AlgorithmKind::NegaMax => "negamax",
            AlgorithmKind::Random => "random",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alphabeta" | "alpha-beta" | "ab" => Ok(AlgorithmKind::AlphaBeta),
            "negamax" | "nm" => Ok(AlgorithmKind::NegaMax),
            "random" | "randomized" => Ok(AlgorithmKind::Random),
            _ => Err(EngineError::UnknownAlgorithm { name: s.to_string() }),
        }
    }
}
