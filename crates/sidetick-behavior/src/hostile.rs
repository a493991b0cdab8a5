//! Hostile mob behavior: targeting, combat, pursuit, and idle wander.

use std::f64::consts::TAU;

use sidetick_core::{EntityKind, EntityRng, Vec3};
use sidetick_snapshot::EntitySnapshot;

use crate::{Action, BatchContext, EntityBehavior};

/// Targets the nearest observer: attacks in melee range, chases at medium
/// range, wanders when no observer is in sight.
///
/// All ranges are tunable; the defaults are the stock combat profile.
#[derive(Debug, Clone)]
pub struct HostileBehavior {
    /// Maximum distance at which an observer is noticed at all.
    pub sight_radius: f64,
    /// Distance below which the mob attacks instead of moving.
    pub attack_range: f64,
    /// Damage dealt per attack decision.
    pub attack_damage: f64,
    /// Chase impulse magnitude per batch.
    pub chase_speed: f64,
    /// Idle wander impulse magnitude per batch.
    pub wander_speed: f64,
}

impl Default for HostileBehavior {
    fn default() -> Self {
        Self {
            sight_radius:  16.0,
            attack_range:  2.0,
            attack_damage: 3.0,
            chase_speed:   0.2,
            wander_speed:  0.1,
        }
    }
}

impl EntityBehavior for HostileBehavior {
    fn decide(
        &self,
        me:  &EntitySnapshot,
        ctx: &BatchContext<'_>,
        rng: &mut EntityRng,
    ) -> Vec<Action> {
        match ctx.index.nearest_of_kind(EntityKind::Observer, me.position, self.sight_radius) {
            Some(target) => {
                let distance = me.position.distance(target.position);
                if distance < self.attack_range {
                    vec![Action::Attack { target: target.id, damage: self.attack_damage }]
                } else if distance < self.sight_radius {
                    let direction = (target.position - me.position).normalized();
                    vec![
                        Action::Move(direction * self.chase_speed),
                        Action::SetTarget(target.id),
                    ]
                } else {
                    // Exactly at the sight boundary: seen but not pursued.
                    vec![]
                }
            }
            None => {
                let yaw = rng.gen_range(0.0..TAU);
                vec![Action::Move(Vec3::unit_yaw(yaw) * self.wander_speed)]
            }
        }
    }
}
