//! Game configuration.

use rookery_core::Side;
use rookery_engine::AlgorithmKind;

/// Who controls which side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// A human plays `player_side`; the AI plays the other side.
    SinglePlayer {
        /// The side moved by the human.
        player_side: Side,
    },
    /// Humans play both sides.
    TwoPlayer,
    /// The AI plays both sides.
    SelfPlay,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::SinglePlayer {
            player_side: Side::White,
        }
    }
}

/// Configuration knobs for a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameParameters {
    /// Search algorithm used by AI-controlled sides.
    pub algorithm: AlgorithmKind,
    /// Search depth in plies.
    pub depth: u8,
    /// Who controls which side.
    pub mode: GameMode,
    /// Seed for the random player.
    pub seed: u64,
}

impl GameParameters {
    /// Return `true` if `side` is moved by the AI.
    pub fn is_ai(&self, side: Side) -> bool {
        match self.mode {
            GameMode::SinglePlayer { player_side } => side != player_side,
            GameMode::TwoPlayer => false,
            GameMode::SelfPlay => true,
        }
    }
}

impl Default for GameParameters {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmKind::AlphaBeta,
            depth: 3,
            mode: GameMode::default(),
            seed: 0,
        }
    }
}
