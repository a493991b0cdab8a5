//! Running pipeline counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic pipeline counters, accumulated from the Apply phase (control
/// thread) and batch completion (worker thread).
///
/// Each counter is independently atomic; reads are lock-free and may happen
/// from any thread at any time, but there is no snapshot-consistency
/// guarantee across the whole set — use [`snapshot`](Self::snapshot) for a
/// point-in-time copy that is at least internally plausible.
///
/// The metrics object is an explicitly owned, injected component: create it
/// (or let the builder create it) at pipeline start, share the `Arc` with
/// introspection code, and call [`reset`](Self::reset) to start a new
/// measurement window.
#[derive(Debug, Default)]
pub struct PipelineMetrics {
    total_process_nanos: AtomicU64,
    total_apply_nanos:   AtomicU64,
    entities_processed:  AtomicU64,
    entities_culled:     AtomicU64,
    tick_count:          AtomicU64,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed batch: processing wall time and the number of
    /// decisions it produced.  Called from the batch thread.
    pub fn record_process(&self, nanos: u64, decisions: u64) {
        self.total_process_nanos.fetch_add(nanos, Ordering::Relaxed);
        self.entities_processed.fetch_add(decisions, Ordering::Relaxed);
    }

    /// Record one Apply phase that consumed a batch.  `tick_count` counts
    /// these productive applies, so per-tick averages divide by the number
    /// of batches actually consumed.
    pub fn record_apply(&self, nanos: u64) {
        self.total_apply_nanos.fetch_add(nanos, Ordering::Relaxed);
        self.tick_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Record entities excluded by spatial culling in one capture.
    pub fn record_culled(&self, count: u64) {
        self.entities_culled.fetch_add(count, Ordering::Relaxed);
    }

    /// Point-in-time copy of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_process_nanos: self.total_process_nanos.load(Ordering::Relaxed),
            total_apply_nanos:   self.total_apply_nanos.load(Ordering::Relaxed),
            entities_processed:  self.entities_processed.load(Ordering::Relaxed),
            entities_culled:     self.entities_culled.load(Ordering::Relaxed),
            tick_count:          self.tick_count.load(Ordering::Relaxed),
        }
    }

    /// Zero every counter — the start of a new measurement window.
    pub fn reset(&self) {
        self.total_process_nanos.store(0, Ordering::Relaxed);
        self.total_apply_nanos.store(0, Ordering::Relaxed);
        self.entities_processed.store(0, Ordering::Relaxed);
        self.entities_culled.store(0, Ordering::Relaxed);
        self.tick_count.store(0, Ordering::Relaxed);
    }
}

/// A point-in-time copy of the pipeline counters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsSnapshot {
    pub total_process_nanos: u64,
    pub total_apply_nanos:   u64,
    pub entities_processed:  u64,
    pub entities_culled:     u64,
    /// Number of Apply phases that consumed a batch.
    pub tick_count: u64,
}

impl MetricsSnapshot {
    /// Average batch processing time, in nanoseconds (0 before any batch).
    pub fn avg_process_nanos(&self) -> u64 {
        if self.tick_count == 0 {
            0
        } else {
            self.total_process_nanos / self.tick_count
        }
    }

    /// Average Apply phase time, in nanoseconds (0 before any batch).
    pub fn avg_apply_nanos(&self) -> u64 {
        if self.tick_count == 0 {
            0
        } else {
            self.total_apply_nanos / self.tick_count
        }
    }
}
