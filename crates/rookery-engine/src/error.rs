//! Engine configuration errors.

/// Errors from configuring a search algorithm.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The algorithm name did not match any known algorithm.
    #[error("unknown algorithm: {name} (expected alphabeta, negamax or random)")]
    UnknownAlgorithm {
        /// The name that failed to parse.
        name: String,
    },
}
