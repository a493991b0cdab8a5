//! The two mutable cross-thread cells of the pipeline.
//!
//! Everything else shared with workers is structurally immutable (the frozen
//! snapshot generation and its index), so these two cells are the entire
//! synchronization surface:
//!
//! - `in_flight`: which batch currently owns the dispatch slot (0 = idle).
//!   Every transition is a compare-and-swap — claim (0 → id), steal
//!   (old → new, deadline policy), finish (id → 0) — so a dispatch check and
//!   a completion racing each other can never lose an update.
//! - `pending`: single-slot holder for the most recently completed batch's
//!   decisions.  Overwritten on publish, never queued; taken-and-cleared by
//!   the Apply phase.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use sidetick_behavior::Decision;

/// Shared dispatch/result cells.  One instance per pipeline, shared between
/// the control thread and batch threads via `Arc`.
#[derive(Debug, Default)]
pub struct BatchSlots {
    /// Batch id currently holding the dispatch slot; 0 when idle.
    in_flight: AtomicU64,
    /// Most recently completed batch's decisions, awaiting Apply.
    pending: Mutex<Option<Vec<Decision>>>,
}

impl BatchSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// The batch id currently holding the slot, or 0 when idle.
    pub fn in_flight_id(&self) -> u64 {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Claim the idle slot for batch `id`.  Fails if any batch holds it.
    pub fn try_claim(&self, id: u64) -> bool {
        self.in_flight
            .compare_exchange(0, id, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Transfer the slot from a stalled batch to its replacement (deadline
    /// policy).  Fails if `from` no longer holds the slot — e.g. it finished
    /// between the deadline check and the steal.
    pub fn steal(&self, from: u64, to: u64) -> bool {
        self.in_flight
            .compare_exchange(from, to, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Release the slot after batch `id` completes.  Fails (harmlessly) if
    /// the slot was stolen while the batch was running.
    pub fn finish(&self, id: u64) -> bool {
        self.in_flight
            .compare_exchange(id, 0, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Publish a completed batch's decisions, overwriting any unconsumed
    /// previous result.
    ///
    /// Returns `false` — and drops the decisions — when `id` no longer holds
    /// the slot: a batch that ran past its deadline must not overwrite the
    /// output of the batch that replaced it.  The ownership check happens
    /// under the `pending` lock so it cannot interleave with the
    /// replacement's own publish.
    pub fn publish(&self, id: u64, decisions: Vec<Decision>) -> bool {
        let mut slot = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if self.in_flight.load(Ordering::SeqCst) == id {
            *slot = Some(decisions);
            true
        } else {
            false
        }
    }

    /// Atomically take-and-clear the pending result.
    pub fn take_pending(&self) -> Option<Vec<Decision>> {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
