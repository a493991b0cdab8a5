//! A no-op behavior — entities never produce actions.

use sidetick_core::EntityRng;
use sidetick_snapshot::EntitySnapshot;

use crate::{Action, BatchContext, EntityBehavior};

/// An [`EntityBehavior`] that always returns an empty action list.
///
/// Useful as a placeholder in tests or to disable one behavior family while
/// keeping the rest of the engine running.
pub struct NoopBehavior;

impl EntityBehavior for NoopBehavior {
    fn decide(
        &self,
        _me:  &EntitySnapshot,
        _ctx: &BatchContext<'_>,
        _rng: &mut EntityRng,
    ) -> Vec<Action> {
        vec![]
    }
}
