//! The `EntityBehavior` trait — the main extension point for host code.

use sidetick_core::EntityRng;
use sidetick_snapshot::EntitySnapshot;

use crate::{Action, BatchContext};

/// Pluggable per-entity decision logic.
///
/// Implement this trait to define what an entity of some kind wants to do
/// each batch.  A behavior receives its own snapshot, the read-only
/// [`BatchContext`], and a per-entity deterministic [`EntityRng`], and
/// returns the actions it intends — it never touches live world state.
///
/// # Thread safety
///
/// The decision engine calls `decide` for many entities in parallel on the
/// worker pool, so implementations must be `Send + Sync`.  Anything that
/// varies per entity belongs in the snapshot, not in the behavior itself.
///
/// # Example
///
/// ```rust,ignore
/// struct Fearful;
///
/// impl EntityBehavior for Fearful {
///     fn decide(&self, me: &EntitySnapshot, ctx: &BatchContext<'_>, _rng: &mut EntityRng) -> Vec<Action> {
///         match ctx.index.nearest_of_kind(EntityKind::Observer, me.position, 12.0) {
///             Some(threat) => {
///                 let away = (me.position - threat.position).normalized() * 0.3;
///                 vec![Action::Move(away)]
///             }
///             None => vec![],
///         }
///     }
/// }
/// ```
pub trait EntityBehavior: Send + Sync + 'static {
    /// Called once per snapshot entity per batch.
    ///
    /// Return the actions this entity intends; an empty `Vec` means "do
    /// nothing" and produces no decision at all for the entity.
    fn decide(
        &self,
        me:  &EntitySnapshot,
        ctx: &BatchContext<'_>,
        rng: &mut EntityRng,
    ) -> Vec<Action>;
}
