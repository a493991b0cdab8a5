//! Read-only batch state passed to every behavior callback.

use sidetick_core::Tick;
use sidetick_spatial::SnapshotIndex;

/// Read-only inputs for one batch, shared (immutably) across all entity
/// behavior calls during the process phase.
///
/// # Lifetimes
///
/// All borrows live for the duration of one batch.  The pipeline never
/// mutates the index or the generation while a `BatchContext` is live.
pub struct BatchContext<'a> {
    /// The tick at which this batch's snapshot was captured.
    pub tick: Tick,

    /// Spatial index over the batch's snapshot generation.
    pub index: &'a SnapshotIndex,
}

impl<'a> BatchContext<'a> {
    #[inline]
    pub fn new(tick: Tick, index: &'a SnapshotIndex) -> Self {
        Self { tick, index }
    }
}
