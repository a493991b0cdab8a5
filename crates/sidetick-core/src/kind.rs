//! Entity classification.
//!
//! The kind serves two purposes: the decision engine dispatches to a behavior
//! family by kind, and "same kind" equality is the match rule for breeding
//! and item-merge neighbor queries.  Kinds the engine has no family for fall
//! under [`EntityKind::Other`] and produce no decisions — absence of a case
//! is a no-op, never an error.

use std::fmt;

/// Behavior-family classification of a snapshot entry.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    /// An active observer (e.g. a player).  Observer positions drive spatial
    /// culling, and observers are captured as ordinary snapshot entries so
    /// "nearest observer" is a pure snapshot query.
    Observer,
    /// Hostile mob: targets and attacks the nearest observer.
    Hostile,
    /// Passive mob: breeds with nearby same-kind entities, wanders slowly.
    Passive,
    /// Dropped item stack: merges with nearby stacks.
    Item,
    /// Anything else — captured, but produces no decisions.
    Other,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Observer => "observer",
            EntityKind::Hostile  => "hostile",
            EntityKind::Passive  => "passive",
            EntityKind::Item     => "item",
            EntityKind::Other    => "other",
        };
        f.write_str(s)
    }
}
