//! The decision engine: pure snapshot → decisions computation.

use std::panic::{catch_unwind, AssertUnwindSafe};

use rayon::prelude::*;

use sidetick_behavior::{
    BatchContext, Decision, EntityBehavior, HostileBehavior, ItemBehavior, PassiveBehavior,
};
use sidetick_core::{EntityKind, EntityRng};
use sidetick_snapshot::{EntitySnapshot, Generation};
use sidetick_spatial::SnapshotIndex;

/// Maps a frozen snapshot generation to a list of per-entity decisions.
///
/// Dispatches each entity to a behavior family by kind; kinds with no family
/// (`Observer`, `Other`) are a no-op, not an error.  Entities fan out across
/// the current rayon pool in ascending-id order, so the output decision list
/// is deterministic for a fixed seed and snapshot.
///
/// `process` is a pure function of its inputs: no I/O, no live-world access,
/// no retained state between batches.
pub struct DecisionEngine {
    seed:    u64,
    hostile: Box<dyn EntityBehavior>,
    passive: Box<dyn EntityBehavior>,
    item:    Box<dyn EntityBehavior>,
}

impl DecisionEngine {
    /// Engine with the stock behavior families.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            hostile: Box::new(HostileBehavior::default()),
            passive: Box::new(PassiveBehavior::default()),
            item:    Box::new(ItemBehavior::default()),
        }
    }

    /// Replace the hostile family.
    pub fn with_hostile(mut self, behavior: Box<dyn EntityBehavior>) -> Self {
        self.hostile = behavior;
        self
    }

    /// Replace the passive family.
    pub fn with_passive(mut self, behavior: Box<dyn EntityBehavior>) -> Self {
        self.passive = behavior;
        self
    }

    /// Replace the item family.
    pub fn with_item(mut self, behavior: Box<dyn EntityBehavior>) -> Self {
        self.item = behavior;
        self
    }

    /// Compute decisions for every entity of `generation`.
    ///
    /// Entities producing no actions are omitted entirely: every decision in
    /// the result has at least one action.
    pub fn process(&self, generation: &Generation, index: &SnapshotIndex) -> Vec<Decision> {
        let mut snaps: Vec<&EntitySnapshot> = generation.values().collect();
        snaps.sort_unstable_by_key(|s| s.id);

        let ctx = BatchContext::new(generation.tick, index);

        snaps
            .into_par_iter()
            .filter_map(|snap| self.decide_one(snap, &ctx))
            .collect()
    }

    fn decide_one(&self, me: &EntitySnapshot, ctx: &BatchContext<'_>) -> Option<Decision> {
        let behavior: &dyn EntityBehavior = match me.kind {
            EntityKind::Hostile => self.hostile.as_ref(),
            EntityKind::Passive => self.passive.as_ref(),
            EntityKind::Item    => self.item.as_ref(),
            EntityKind::Observer | EntityKind::Other => return None,
        };

        let mut rng = EntityRng::new(self.seed, me.id, ctx.tick);
        // A panic in one entity's behavior must not abort the batch: the
        // failing entity contributes no decision, everyone else still does.
        match catch_unwind(AssertUnwindSafe(|| behavior.decide(me, ctx, &mut rng))) {
            Ok(actions) => Decision::non_empty(me.id, actions),
            Err(_) => {
                tracing::warn!(entity = %me.id, kind = %me.kind, "behavior panicked; entity skipped this batch");
                None
            }
        }
    }
}
