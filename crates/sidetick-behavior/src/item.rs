//! Dropped-item behavior: merging nearby stacks.

use sidetick_core::EntityRng;
use sidetick_snapshot::EntitySnapshot;

use crate::{Action, BatchContext, EntityBehavior};

/// Merges with the nearest same-kind stack.
///
/// Evaluated only on batches where `age % eval_interval == 0`.  Stack
/// compatibility (same item type, combined amount within the stack limit) is
/// validated by the host at apply time — the decision only pairs candidates
/// by proximity.
#[derive(Debug, Clone)]
pub struct ItemBehavior {
    /// Age modulus gating the whole evaluation.
    pub eval_interval: u32,
    /// Radius searched for a merge partner.
    pub merge_radius: f64,
}

impl Default for ItemBehavior {
    fn default() -> Self {
        Self {
            eval_interval: 20,
            merge_radius:  2.0,
        }
    }
}

impl EntityBehavior for ItemBehavior {
    fn decide(
        &self,
        me:   &EntitySnapshot,
        ctx:  &BatchContext<'_>,
        _rng: &mut EntityRng,
    ) -> Vec<Action> {
        if me.age_ticks % self.eval_interval != 0 {
            return vec![];
        }

        let partner = ctx
            .index
            .within(me.position, self.merge_radius)
            .into_iter()
            .find(|other| other.id != me.id && other.kind == me.kind);

        match partner {
            Some(other) => vec![Action::MergeWith(other.id)],
            None        => vec![],
        }
    }
}
