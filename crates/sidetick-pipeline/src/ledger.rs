//! Per-entity processing bookkeeping for external debug tooling.

use rustc_hash::FxHashMap;

use sidetick_core::{EntityId, Tick};

/// One entity's row in the ledger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LedgerEntry {
    /// Tick at which a decision for this entity was last applied.
    pub last_tick: Tick,
    /// How many decisions have been applied for this entity in total.
    pub processed: u64,
}

/// "Last processed at / processed count" table, updated by the Apply phase
/// and consulted by external debug tooling.
///
/// Owned by the pipeline and only ever touched from the control thread.
/// Entries are never evicted automatically; despawned entities simply stop
/// being updated.
#[derive(Debug, Default)]
pub struct ProcessingLedger {
    entries: FxHashMap<EntityId, LedgerEntry>,
}

impl ProcessingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one applied decision for `id` at `tick`.
    pub fn record(&mut self, id: EntityId, tick: Tick) {
        self.entries
            .entry(id)
            .and_modify(|e| {
                e.last_tick = tick;
                e.processed += 1;
            })
            .or_insert(LedgerEntry { last_tick: tick, processed: 1 });
    }

    pub fn get(&self, id: EntityId) -> Option<&LedgerEntry> {
        self.entries.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &LedgerEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
