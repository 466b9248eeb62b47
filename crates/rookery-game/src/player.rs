//! Human-controlled side: moves arrive from a UI over a channel.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use rookery_core::{Board, Move, Position, Side};
use tracing::debug;

use crate::cancel::CancelToken;

/// How often a waiting player checks for cancellation.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Sending half given to the UI. Clones feed the same player.
#[derive(Debug, Clone)]
pub struct PlayerHandle {
    requests: Sender<(Position, Position)>,
}

impl PlayerHandle {
    /// Ask to move the piece on `from` to `to`.
    ///
    /// Returns `false` if the game has gone away. Requests that are not legal
    /// for the side to move are dropped when they are read.
    pub fn request(&self, from: Position, to: Position) -> bool {
        self.requests.send((from, to)).is_ok()
    }
}

/// Receiving half owned by the game.
#[derive(Debug)]
pub struct PlayerController {
    requests: Receiver<(Position, Position)>,
}

impl PlayerController {
    /// Create a controller and the handle that feeds it.
    pub fn channel() -> (PlayerController, PlayerHandle) {
        let (tx, rx) = mpsc::channel();
        (PlayerController { requests: rx }, PlayerHandle { requests: tx })
    }

    /// Block until a legal move for `side` arrives.
    ///
    /// Returns `None` if `cancel` fires or every handle is dropped.
    pub fn wait_for_move(&self, board: &mut Board, side: Side, cancel: &CancelToken) -> Option<Move> {
        loop {
            if cancel.is_cancelled() {
                debug!(%side, "player wait cancelled");
                return None;
            }
            match self.requests.recv_timeout(POLL_INTERVAL) {
                Ok((from, to)) => match resolve(board, side, from, to) {
                    Some(mv) => return Some(mv),
                    None => debug!(%side, %from, %to, "ignoring illegal move request"),
                },
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
    }

    /// Drop any requests that arrived while no move was wanted.
    pub fn discard_pending(&self) -> usize {
        self.requests.try_iter().count()
    }

    /// Split the moves of the piece on `from` into those `side` may play and
    /// those that would leave its king in check, for highlighting.
    ///
    /// Both are empty if `from` does not hold one of `side`'s pieces.
    pub fn legal_targets(board: &Board, from: Position, side: Side) -> (Vec<Position>, Vec<Position>) {
        let mut allowed = Vec::new();
        let mut disallowed = Vec::new();

        let Some(piece) = board.piece_at(from).filter(|piece| piece.is_side(side)) else {
            return (allowed, disallowed);
        };

        let mut scratch = board.clone();
        for mv in board.generate_moves_for(piece, from) {
            if scratch.detect_check_after(side, mv) {
                disallowed.push(mv.target());
            } else {
                allowed.push(mv.target());
            }
        }
        (allowed, disallowed)
    }
}

/// Turn a `(from, to)` request into a move, if `side` may play it.
fn resolve(board: &mut Board, side: Side, from: Position, to: Position) -> Option<Move> {
    let piece = board.piece_at(from).filter(|piece| piece.is_side(side))?;
    let mv = board
        .generate_moves_for(piece, from)
        .into_iter()
        .find(|mv| mv.target() == to)?;
    (!board.detect_check_after(side, mv)).then_some(mv)
}
