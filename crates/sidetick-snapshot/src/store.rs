//! The double-buffered snapshot store and its capture logic.

use rustc_hash::FxHashMap;

use sidetick_core::{EntityId, Tick};

use crate::world::{Observer, WorldView};
use crate::EntitySnapshot;

// ── Generation ────────────────────────────────────────────────────────────────

/// The full `EntityId → EntitySnapshot` mapping captured in one tick.
///
/// Once a generation has been published to the worker pool it is never
/// mutated; the store only ever refills a generation that is not shared.
/// `Clone` exists for the defensive copy the dispatcher hands to a batch.
#[derive(Clone, Debug, Default)]
pub struct Generation {
    /// The tick this generation was captured at.
    pub tick: Tick,
    entities: FxHashMap<EntityId, EntitySnapshot>,
}

impl Generation {
    #[inline]
    pub fn get(&self, id: EntityId) -> Option<&EntitySnapshot> {
        self.entities.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate all snapshots (unordered).
    pub fn values(&self) -> impl Iterator<Item = &EntitySnapshot> {
        self.entities.values()
    }

    fn clear(&mut self) {
        self.entities.clear();
    }

    fn insert(&mut self, snap: EntitySnapshot) {
        self.entities.insert(snap.id, snap);
    }
}

// ── CaptureStats ──────────────────────────────────────────────────────────────

/// Per-capture counts, returned to the orchestrator so the metrics component
/// stays an injected dependency rather than a global the store writes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct CaptureStats {
    /// Entities included in the new generation.
    pub captured: usize,
    /// Entities excluded by spatial culling (no observer within radius in
    /// the same region).  Culled entities receive no AI computation.
    pub culled: usize,
}

// ── SnapshotStore ─────────────────────────────────────────────────────────────

/// Double-buffered mapping from entity identity to its point-in-time
/// projection.
///
/// Two generations are retained: *current* (just captured) and *previous*
/// (from the prior capture).  Each capture swaps the buffers and rebuilds the
/// current generation from scratch, reusing the stale map's backing storage —
/// no per-tick map allocation.  The previous generation is not consumed by
/// the decision engine today; it is retained as an extension point
/// (continuity / velocity estimation).
pub struct SnapshotStore {
    current:  Generation,
    previous: Generation,
    /// Culling radius R: an entity is captured iff some observer in the same
    /// region is within this distance.
    radius: f64,
}

impl SnapshotStore {
    pub fn new(radius: f64) -> Self {
        Self {
            current:  Generation::default(),
            previous: Generation::default(),
            radius,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The generation captured by the most recent [`capture`](Self::capture).
    pub fn current(&self) -> &Generation {
        &self.current
    }

    /// The generation superseded by the most recent capture.
    pub fn previous(&self) -> &Generation {
        &self.previous
    }

    /// Capture a fresh generation from the live world.
    ///
    /// Runs on the control thread.  Work and allocation are O(active entity
    /// count); every stored snapshot is a by-value copy with no reference
    /// into live state.  Observers are captured as ordinary entries of their
    /// own kind (an observer is trivially within radius of itself).
    pub fn capture(
        &mut self,
        tick:      Tick,
        observers: &[Observer],
        world:     &dyn WorldView,
    ) -> CaptureStats {
        // Buffer swap: the stale previous generation becomes the scratch map
        // for the new capture; the old current generation is retained as-is.
        std::mem::swap(&mut self.current, &mut self.previous);
        self.current.clear();
        self.current.tick = tick;

        let mut stats  = CaptureStats::default();
        let radius_sq  = self.radius * self.radius;

        world.for_each_entity(&mut |region, snap| {
            let near = observers.iter().any(|obs| {
                obs.region == region
                    && obs.position.distance_sq(snap.position) <= radius_sq
            });
            if near {
                self.current.insert(snap);
                stats.captured += 1;
            } else {
                stats.culled += 1;
            }
        });

        stats
    }
}
