use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::types::RecoveredParameters;

/// Result cell shared by all search workers; the first claim wins
pub struct SharedClaim {
    slot: Mutex<Option<RecoveredParameters>>,
    /// Mirrors `slot.is_some()` so early-exit polling never takes the lock
    claimed: AtomicBool,
}

impl SharedClaim {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            claimed: AtomicBool::new(false),
        }
    }

    /// Store `params` if nobody has claimed yet
    /// Check and write happen under one lock. Returns true for the winner.
    pub fn try_claim(&self, params: RecoveredParameters) -> bool {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            return false;
        }
        *slot = Some(params);
        self.claimed.store(true, Ordering::Release);
        true
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed.load(Ordering::Acquire)
    }

    pub fn into_inner(self) -> Option<RecoveredParameters> {
        self.slot.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedClaim {
    fn default() -> Self {
        Self::new()
    }
}
