//! Actions and decisions — the data channel between AI computation and the
//! live world.

use sidetick_core::{EntityId, Vec3};

/// A single intended mutation of the live world, produced off-thread and
/// interpreted only during the Apply phase on the control thread.
///
/// Actions are pure data; they carry no behavior themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Set the entity's velocity to the given vector.
    Move(Vec3),

    /// Damage `target`, attributed to the deciding entity.
    Attack { target: EntityId, damage: f64 },

    /// Point the entity's AI at the given target.
    SetTarget(EntityId),

    /// Enter love mode together with the given mate.
    StartBreeding(EntityId),

    /// Merge the given stack into this entity's stack.
    MergeWith(EntityId),
}

/// The full set of intended actions for one entity in one batch.
///
/// An entity contributes at most one decision per batch, and a decision is
/// only ever constructed with at least one action — entities that decided
/// nothing are omitted from the batch result entirely.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    /// The deciding entity; also the apply-time live-object lookup key.
    pub entity: EntityId,
    /// Actions to apply in order.  Never empty.
    pub actions: Vec<Action>,
}

impl Decision {
    /// Wrap a non-empty action list; `None` when `actions` is empty.
    pub fn non_empty(entity: EntityId, actions: Vec<Action>) -> Option<Decision> {
        if actions.is_empty() {
            None
        } else {
            Some(Decision { entity, actions })
        }
    }
}
