//! Deterministic per-entity RNG for randomized sub-decisions.
//!
//! # Determinism strategy
//!
//! Wander impulses are the only randomized decision, and snapshots are
//! recomputed from scratch every batch, so there is no persistent per-entity
//! RNG state to carry between ticks.  Instead each behavior call gets a fresh
//! `EntityRng` seeded by:
//!
//!   seed = global_seed XOR (entity_id * PHI) XOR (tick * TICK_MIX)
//!
//! The mixing constants spread consecutive ids and ticks uniformly across the
//! seed space.  This means:
//!
//! - Entities never share RNG state (no contention, no ordering dependency),
//!   so the parallel fan-out can process them in any thread interleaving.
//! - For a fixed global seed, the same snapshot produces the same wander
//!   vectors — deterministic tests pin the seed; production hosts pick a
//!   fresh one per run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{EntityId, Tick};

/// 64-bit fractional golden-ratio constant for seed mixing.
const PHI: u64 = 0x9e37_79b9_7f4a_7c15;

/// Secondary odd constant so (id, tick) pairs don't collide on XOR symmetry.
const TICK_MIX: u64 = 0xd6e8_feb8_6659_fd93;

/// Per-entity, per-batch deterministic RNG.
///
/// Create one per entity inside the decision fan-out; the type is `!Sync` to
/// prevent accidental sharing across worker threads.
pub struct EntityRng(SmallRng);

impl EntityRng {
    /// Seed deterministically from the run's global seed, an entity identity,
    /// and the batch's capture tick.
    pub fn new(global_seed: u64, entity: EntityId, tick: Tick) -> Self {
        let seed = global_seed
            ^ entity.0.wrapping_mul(PHI)
            ^ tick.0.wrapping_mul(TICK_MIX);
        EntityRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
