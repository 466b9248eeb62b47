//! Game driver errors.

use rookery_core::BoardError;

/// Errors that can occur while driving a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A search was requested while the previous one is still running.
    #[error("a search is already in flight")]
    SearchInFlight,

    /// The search worker thread panicked.
    #[error("search worker panicked")]
    SearchPanicked,

    /// A saved game could not be restored.
    #[error("invalid saved game: {source}")]
    InvalidSave {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },

    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
}
