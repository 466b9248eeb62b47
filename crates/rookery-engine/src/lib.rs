//! Move selection for rookery: alpha-beta, negamax and random players.

pub mod error;
pub mod search;
pub mod state;

pub use error::EngineError;
pub use search::alphabeta::AlphaBeta;
pub use search::negamax::NegaMax;
pub use search::randomized::Randomized;
pub use search::{Algorithm, AlgorithmKind, INF, SearchResult, opening_move};
pub use state::ChessState;
