//! Passive mob behavior: breeding and occasional wander.

use std::f64::consts::TAU;

use sidetick_core::{EntityRng, Vec3};
use sidetick_snapshot::EntitySnapshot;

use crate::{Action, BatchContext, EntityBehavior};

/// Breeds with nearby same-kind entities and wanders slowly.
///
/// Evaluated only on batches where `age % eval_interval == 0` — passive mobs
/// are numerous and their decisions are rarely urgent, so throttling them is
/// the cheapest load shed available.
#[derive(Debug, Clone)]
pub struct PassiveBehavior {
    /// Age modulus gating the whole evaluation.
    pub eval_interval: u32,
    /// Radius searched for a breeding partner.
    pub breed_radius: f64,
    /// Age modulus gating the wander impulse.
    pub wander_interval: u32,
    /// Wander impulse magnitude.
    pub wander_speed: f64,
}

impl Default for PassiveBehavior {
    fn default() -> Self {
        Self {
            eval_interval:   5,
            breed_radius:    8.0,
            wander_interval: 100,
            wander_speed:    0.15,
        }
    }
}

impl EntityBehavior for PassiveBehavior {
    fn decide(
        &self,
        me:  &EntitySnapshot,
        ctx: &BatchContext<'_>,
        rng: &mut EntityRng,
    ) -> Vec<Action> {
        if me.age_ticks % self.eval_interval != 0 {
            return vec![];
        }

        let mut actions = Vec::new();

        if me.can_breed && !me.in_love {
            // `within` includes the querying entity; neighbors must be a
            // different entity of the same kind, eligible and not already
            // breeding.  Query order is (distance, id), so "first" is stable.
            let mate = ctx
                .index
                .within(me.position, self.breed_radius)
                .into_iter()
                .find(|other| {
                    other.id != me.id
                        && other.kind == me.kind
                        && other.can_breed
                        && !other.in_love
                });
            if let Some(mate) = mate {
                actions.push(Action::StartBreeding(mate.id));
            }
        }

        if me.age_ticks % self.wander_interval == 0 {
            let yaw = rng.gen_range(0.0..TAU);
            actions.push(Action::Move(Vec3::unit_yaw(yaw) * self.wander_speed));
        }

        actions
    }
}
