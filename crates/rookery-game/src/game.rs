//! The game loop: one turn per [`Game::update`].

use rookery_core::{Board, Move, Position, Side};
use rookery_engine::ChessState;
use tracing::{debug, info, warn};

use crate::ai::AiController;
use crate::cancel::CancelToken;
use crate::error::GameError;
use crate::params::GameParameters;
use crate::player::{PlayerController, PlayerHandle};
use crate::saved::SavedGame;

/// Whether the game is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves are still being made.
    Running,
    /// The side to move was mated.
    Checkmate {
        /// The side that delivered mate.
        winner: Side,
    },
    /// The side to move has no move that keeps its king safe, and is not in check.
    Stalemate,
}

impl GameStatus {
    /// Return `true` once the game has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// What one call to [`Game::update`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// `side` played `mv`; the other side is now to move.
    Moved {
        /// The side that moved.
        side: Side,
        /// The move played.
        mv: Move,
    },
    /// The player's wait was cancelled; nothing changed.
    Interrupted,
    /// The controller produced no move; nothing changed.
    NoMove,
    /// The side to move is mated.
    Checkmate {
        /// The side that delivered mate.
        winner: Side,
    },
    /// The side to move is stalemated.
    Stalemate,
}

/// A game between any mix of human and AI sides.
pub struct Game {
    params: GameParameters,
    board: Board,
    side: Side,
    state: ChessState,
    status: GameStatus,
    plies: u32,
    resumed: bool,
    cancel: CancelToken,
    ai: AiController,
    player: PlayerController,
    handle: PlayerHandle,
}

impl Game {
    /// Start a new game from the opening position, White to move.
    pub fn new(params: GameParameters) -> Game {
        let (player, handle) = PlayerController::channel();
        Game {
            params,
            board: Board::new(),
            side: Side::White,
            state: ChessState::Opening,
            status: GameStatus::Running,
            plies: 0,
            resumed: false,
            cancel: CancelToken::new(),
            ai: AiController::new(params.algorithm, params.depth, params.seed),
            player,
            handle,
        }
    }

    /// Resume a saved game.
    ///
    /// Resumed games never use the scripted opening.
    pub fn from_saved(params: GameParameters, saved: &SavedGame) -> Result<Game, GameError> {
        let board = saved.to_board()?;
        let mut game = Game::new(params);
        game.state = ChessState::detect(&board, saved.current_side, false);
        game.board = board;
        game.side = saved.current_side;
        game.resumed = true;
        debug!(side = %game.side, state = %game.state, "restored saved game");
        Ok(game)
    }

    /// Snapshot the game for later [`Game::from_saved`].
    pub fn save(&self) -> SavedGame {
        debug!(side = %self.side, plies = self.plies, "saving game");
        SavedGame::capture(&self.board, self.side)
    }

    /// Return to the opening position, White to move.
    ///
    /// Clears any cancellation and drops pending player requests.
    pub fn reset(&mut self) {
        self.board.reset();
        self.side = Side::White;
        self.state = ChessState::Opening;
        self.status = GameStatus::Running;
        self.plies = 0;
        self.resumed = false;
        self.cancel.clear();
        let dropped = self.player.discard_pending();
        info!(dropped, "game reset");
    }

    /// Play one turn for the side to move.
    ///
    /// Ends the game on checkmate or stalemate, otherwise asks the side's
    /// controller for a move and plays it. Blocks while a human is deciding
    /// or the AI is searching.
    pub fn update(&mut self) -> Result<TurnOutcome, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        let side = self.side;
        let in_check = self.board.detect_check(side);
        if !self.board.has_escape(side) {
            return Ok(self.end(side, in_check));
        }

        let opening = !self.resumed && self.plies < 2;
        self.state = if in_check {
            ChessState::check_for(side)
        } else if opening {
            ChessState::Opening
        } else {
            ChessState::Default
        };

        let mv = if self.params.is_ai(side) {
            let result = self.ai.search(&self.board, side, self.state)?;
            debug!(%side, nodes = result.nodes, score = ?result.score, "ai search done");
            result.best_move
        } else {
            match self.player.wait_for_move(&mut self.board, side, &self.cancel) {
                Some(mv) => mv,
                None => return Ok(TurnOutcome::Interrupted),
            }
        };

        if mv.is_null() {
            warn!(%side, "controller produced no move");
            return Ok(TurnOutcome::NoMove);
        }

        self.board.make_move(mv);
        self.plies += 1;
        self.side = !side;
        info!(%side, %mv, ply = self.plies, "move played");
        Ok(TurnOutcome::Moved { side, mv })
    }

    fn end(&mut self, side: Side, in_check: bool) -> TurnOutcome {
        if in_check {
            let winner = !side;
            self.status = GameStatus::Checkmate { winner };
            info!(%winner, plies = self.plies, "checkmate");
            TurnOutcome::Checkmate { winner }
        } else {
            self.status = GameStatus::Stalemate;
            info!(plies = self.plies, "stalemate");
            TurnOutcome::Stalemate
        }
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    pub fn current_side(&self) -> Side {
        self.side
    }

    /// State used for the most recent (or, before any turn, the next) move.
    pub fn state(&self) -> ChessState {
        self.state
    }

    /// Whether the game is still running.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves played since the game started or was resumed.
    pub fn plies(&self) -> u32 {
        self.plies
    }

    /// The parameters the game was created with.
    pub fn params(&self) -> &GameParameters {
        &self.params
    }

    /// Token that interrupts a waiting human player.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Handle for submitting human moves.
    pub fn player_handle(&self) -> PlayerHandle {
        self.handle.clone()
    }

    /// Split the moves of the piece on `from` for highlighting; see
    /// [`PlayerController::legal_targets`].
    pub fn legal_targets(&self, from: Position) -> (Vec<Position>, Vec<Position>) {
        PlayerController::legal_targets(&self.board, from, self.side)
    }
}
