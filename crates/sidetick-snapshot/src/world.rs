//! Boundary traits implemented by the host runtime.
//!
//! The pipeline never owns entities.  It reads them through [`WorldView`]
//! during the Capture phase and mutates them through [`WorldMut`] during the
//! Apply phase — both only ever from the control thread.

use sidetick_core::{EntityId, RegionId, Vec3};

use crate::EntitySnapshot;

/// One active observer's location, used for spatial culling.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observer {
    pub region:   RegionId,
    pub position: Vec3,
}

/// Read-only view of the live world, consumed by snapshot capture.
///
/// Implementations enumerate every live dynamic object across all loaded
/// regions.  The snapshot handed to the visitor must be built by value
/// (position copied, flags read at call time) — the capture layer stores it
/// as-is and must never end up aliasing live state.
pub trait WorldView {
    /// Visit every live dynamic object, observers included.
    fn for_each_entity(&self, visit: &mut dyn FnMut(RegionId, EntitySnapshot));

    /// Visit the position of every active observer.
    ///
    /// The default enumerates all entities and filters on
    /// [`EntityKind::Observer`][sidetick_core::EntityKind::Observer]; hosts
    /// with a cheap observer list (e.g. online players) should override it.
    fn for_each_observer(&self, visit: &mut dyn FnMut(Observer)) {
        self.for_each_entity(&mut |region, snap| {
            if snap.kind == sidetick_core::EntityKind::Observer {
                visit(Observer { region, position: snap.position });
            }
        });
    }
}

/// Live-object mutation interface, consumed only during the Apply phase.
///
/// All methods are keyed by [`EntityId`] so two-party actions (breeding,
/// stack merging) never require two simultaneous borrows of live objects.
/// An id that is absent or no longer valid must be a silent no-op — entities
/// routinely disappear between snapshot and apply, and that is not an error.
pub trait WorldMut: WorldView {
    /// Whether the entity still exists and may be mutated.
    fn is_valid(&self, id: EntityId) -> bool;

    /// Set the entity's velocity.
    fn set_velocity(&mut self, id: EntityId, velocity: Vec3);

    /// Damage `target`, attributing the hit to `source`.
    fn apply_damage(&mut self, target: EntityId, amount: f64, source: EntityId);

    /// Point the entity's AI at `target`.
    fn set_ai_target(&mut self, id: EntityId, target: EntityId);

    /// Put the entity into love mode for `ticks` ticks.
    fn set_breeding_cooldown(&mut self, id: EntityId, ticks: u32);

    /// Merge the stackable `from` into `into`, removing `from` on success.
    ///
    /// The host validates stack compatibility and size limits; returns
    /// whether the merge happened.
    fn merge_stackable(&mut self, into: EntityId, from: EntityId) -> bool;
}
