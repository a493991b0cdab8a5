//! The per-entity snapshot record.

use sidetick_core::{EntityId, EntityKind, Vec3};

/// Minimal immutable projection of one live entity, captured by value on the
/// control thread.
///
/// Holds no reference to live mutable state — position is a defensive copy,
/// and every field is plain data, so a snapshot is safe to share with worker
/// threads for the lifetime of its batch.  Created once per tick during the
/// Capture phase, read-only afterward, superseded by the next generation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitySnapshot {
    /// Stable identity; the join key back to the live object at apply time.
    pub id: EntityId,
    /// Behavior-family classification.
    pub kind: EntityKind,
    /// World-space position at capture time.
    pub position: Vec3,
    /// Ticks this entity has existed — drives the age-gated behavior paths.
    pub age_ticks: u32,
    /// Whether the entity is currently eligible to breed.
    pub can_breed: bool,
    /// Whether the entity is already in love mode (breeding in progress).
    pub in_love: bool,
}

impl EntitySnapshot {
    /// A snapshot with zero age and no breeding flags.  Hosts capturing real
    /// animals set the flags directly; this covers the common case.
    pub fn new(id: EntityId, kind: EntityKind, position: Vec3, age_ticks: u32) -> Self {
        Self {
            id,
            kind,
            position,
            age_ticks,
            can_breed: false,
            in_love: false,
        }
    }

    /// Builder-style breeding flags, mainly for tests and simple hosts.
    pub fn with_breeding(mut self, can_breed: bool, in_love: bool) -> Self {
        self.can_breed = can_breed;
        self.in_love = in_love;
        self
    }
}
