//! Cooperative cancellation shared between the game and its UI.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Flag that abandons a pending player move when set.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token that is not cancelled.
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Return `true` once [`cancel`](Self::cancel) has been called and not cleared.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Clear a previous cancellation.
    pub(crate) fn clear(&self) {
        self.cancelled.store(false, Ordering::Release);
    }
}
