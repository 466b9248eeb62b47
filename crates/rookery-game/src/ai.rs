//! AI-controlled side: searches run on a worker thread.

use std::thread::JoinHandle;

use rookery_core::{Board, Side};
use rookery_engine::{Algorithm, AlgorithmKind, ChessState, SearchResult};
use tracing::{debug, warn};

use crate::error::GameError;

/// Payload returned by the search thread when it finishes.
struct SearchDone {
    result: SearchResult,
    algorithm: Box<dyn Algorithm + Send>,
}

/// Handle to a running search. Redeem it with [`AiController::finish`].
#[must_use = "a search task must be finished to get its move"]
pub struct SearchTask {
    handle: JoinHandle<SearchDone>,
    side: Side,
}

impl SearchTask {
    /// Return `true` once the worker has produced its result.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// The side being searched for.
    pub fn side(&self) -> Side {
        self.side
    }
}

/// Runs one search at a time on a worker thread.
///
/// The algorithm is moved into the worker for the duration of a search and
/// handed back by [`finish`](Self::finish), so a second search cannot start
/// before the first one is collected.
pub struct AiController {
    algorithm: Option<Box<dyn Algorithm + Send>>,
    kind: AlgorithmKind,
    seed: u64,
    depth: u8,
}

impl AiController {
    /// Create a controller searching `depth` plies with `kind`.
    pub fn new(kind: AlgorithmKind, depth: u8, seed: u64) -> AiController {
        AiController {
            algorithm: Some(kind.build(seed)),
            kind,
            seed,
            depth,
        }
    }

    /// Return `true` if no search is in flight.
    pub fn is_idle(&self) -> bool {
        self.algorithm.is_some()
    }

    /// Start searching a copy of `board` for `side`.
    pub fn spawn(&mut self, board: &Board, side: Side, state: ChessState) -> Result<SearchTask, GameError> {
        let mut algorithm = self.algorithm.take().ok_or(GameError::SearchInFlight)?;
        let board = board.clone();
        let depth = self.depth;
        debug!(algorithm = algorithm.name(), %side, depth, %state, "spawning search");

        let handle = std::thread::spawn(move || {
            let result = algorithm.search(depth, side, state, &board);
            SearchDone { result, algorithm }
        });

        Ok(SearchTask { handle, side })
    }

    /// Wait for `task` and return its result.
    pub fn finish(&mut self, task: SearchTask) -> Result<SearchResult, GameError> {
        match task.handle.join() {
            Ok(done) => {
                self.algorithm = Some(done.algorithm);
                Ok(done.result)
            }
            Err(_) => {
                warn!(side = %task.side, "search worker panicked, rebuilding algorithm");
                self.algorithm = Some(self.kind.build(self.seed));
                Err(GameError::SearchPanicked)
            }
        }
    }

    /// Search `board` for `side`, blocking until done.
    pub fn search(&mut self, board: &Board, side: Side, state: ChessState) -> Result<SearchResult, GameError> {
        let task = self.spawn(board, side, state)?;
        self.finish(task)
    }
}
