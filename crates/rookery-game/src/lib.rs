//! Turn-by-turn game driver for rookery: players, AI workers and saved games.

mod ai;
mod cancel;
mod error;
mod game;
mod params;
mod player;
mod saved;

pub use ai::{AiController, SearchTask};
pub use cancel::CancelToken;
pub use error::GameError;
pub use game::{Game, GameStatus, TurnOutcome};
pub use params::{GameMode, GameParameters};
pub use player::{PlayerController, PlayerHandle};
pub use saved::SavedGame;
