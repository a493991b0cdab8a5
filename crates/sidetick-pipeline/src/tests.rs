//! Integration tests for sidetick-pipeline.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use sidetick_behavior::{Action, BatchContext, Decision, EntityBehavior};
use sidetick_core::{EntityId, EntityKind, EntityRng, RegionId, Tick, Vec3};
use sidetick_snapshot::{EntitySnapshot, Generation, SnapshotStore, WorldMut, WorldView};
use sidetick_spatial::SnapshotIndex;

use crate::{
    BatchSlots, DecisionEngine, Pipeline, PipelineBuilder, PipelineConfig, PipelineError,
    PipelineMetrics,
};

// ── Mock world ────────────────────────────────────────────────────────────────

/// Host-side world stand-in: a list of entities plus a record of every
/// mutation the Apply phase performs.
#[derive(Default)]
struct MockWorld {
    entities:   Vec<(RegionId, EntitySnapshot)>,
    velocities: Vec<(EntityId, Vec3)>,
    damages:    Vec<(EntityId, f64, EntityId)>,
    targets:    Vec<(EntityId, EntityId)>,
    love:       Vec<(EntityId, u32)>,
    merges:     Vec<(EntityId, EntityId)>,
}

impl MockWorld {
    fn new(entities: Vec<(RegionId, EntitySnapshot)>) -> Self {
        Self { entities, ..Self::default() }
    }

    fn remove(&mut self, id: EntityId) {
        self.entities.retain(|(_, snap)| snap.id != id);
    }
}

impl WorldView for MockWorld {
    fn for_each_entity(&self, visit: &mut dyn FnMut(RegionId, EntitySnapshot)) {
        for &(region, snap) in &self.entities {
            visit(region, snap);
        }
    }
}

impl WorldMut for MockWorld {
    fn is_valid(&self, id: EntityId) -> bool {
        self.entities.iter().any(|(_, snap)| snap.id == id)
    }

    fn set_velocity(&mut self, id: EntityId, velocity: Vec3) {
        self.velocities.push((id, velocity));
    }

    fn apply_damage(&mut self, target: EntityId, amount: f64, source: EntityId) {
        self.damages.push((target, amount, source));
    }

    fn set_ai_target(&mut self, id: EntityId, target: EntityId) {
        self.targets.push((id, target));
    }

    fn set_breeding_cooldown(&mut self, id: EntityId, ticks: u32) {
        self.love.push((id, ticks));
    }

    fn merge_stackable(&mut self, into: EntityId, from: EntityId) -> bool {
        self.merges.push((into, from));
        true
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

const REGION_A: RegionId = RegionId(0);

fn at(x: f64, z: f64) -> Vec3 {
    Vec3::new(x, 0.0, z)
}

fn snap(id: u64, kind: EntityKind, pos: Vec3, age: u32) -> EntitySnapshot {
    EntitySnapshot::new(EntityId(id), kind, pos, age)
}

fn test_config() -> PipelineConfig {
    PipelineConfig {
        culling_radius:       64.0,
        seed:                 42,
        num_threads:          Some(2),
        batch_deadline_ticks: None,
        shutdown_grace:       Duration::from_millis(200),
    }
}

fn build_pipeline(config: PipelineConfig) -> Pipeline {
    PipelineBuilder::new(config).build().expect("pipeline builds")
}

/// Block until the in-flight batch completes (bounded).
fn wait_for_batch(pipeline: &Pipeline) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while pipeline.batch_in_flight() {
        assert!(Instant::now() < deadline, "batch did not complete in time");
        std::thread::sleep(Duration::from_millis(2));
    }
}

/// Capture a generation from `entities` the way the pipeline would.
fn generation_of(entities: Vec<(RegionId, EntitySnapshot)>) -> Generation {
    let world = MockWorld::new(entities);
    let mut observers = Vec::new();
    world.for_each_observer(&mut |obs| observers.push(obs));
    let mut store = SnapshotStore::new(64.0);
    store.capture(Tick(0), &observers, &world);
    store.current().clone()
}

fn index_of(generation: &Generation) -> SnapshotIndex {
    SnapshotIndex::build(generation.values().copied())
}

// ── Test behaviors ────────────────────────────────────────────────────────────

/// Counts calls, and holds them until `release` — the "artificially held
/// open" batch from the admission-control scenarios.
struct Gate {
    calls:      Arc<AtomicUsize>,
    release:    Arc<AtomicBool>,
    /// When true only the first call blocks; later calls pass straight
    /// through (used to let a replacement batch finish).
    first_only: bool,
}

impl EntityBehavior for Gate {
    fn decide(
        &self,
        _me:  &EntitySnapshot,
        _ctx: &BatchContext<'_>,
        _rng: &mut EntityRng,
    ) -> Vec<Action> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.first_only || n == 0 {
            let mut spins = 0u32;
            while !self.release.load(Ordering::SeqCst) {
                std::thread::sleep(Duration::from_millis(1));
                spins += 1;
                assert!(spins < 5_000, "gate never released");
            }
        }
        vec![Action::SetTarget(EntityId(999))]
    }
}

/// Panics for one entity, acts for every other.
struct PanicsOn(EntityId);

impl EntityBehavior for PanicsOn {
    fn decide(
        &self,
        me:   &EntitySnapshot,
        _ctx: &BatchContext<'_>,
        _rng: &mut EntityRng,
    ) -> Vec<Action> {
        if me.id == self.0 {
            panic!("deliberate test panic for {}", me.id);
        }
        vec![Action::SetTarget(EntityId(7))]
    }
}

// ── BatchSlots ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod slots_tests {
    use super::*;

    fn decision(entity: u64, target: u64) -> Decision {
        Decision::non_empty(
            EntityId(entity),
            vec![Action::SetTarget(EntityId(target))],
        )
        .unwrap()
    }

    #[test]
    fn claim_finish_lifecycle() {
        let slots = BatchSlots::new();
        assert_eq!(slots.in_flight_id(), 0);
        assert!(slots.try_claim(1));
        assert_eq!(slots.in_flight_id(), 1);
        assert!(!slots.try_claim(2), "slot already held");
        assert!(slots.finish(1));
        assert_eq!(slots.in_flight_id(), 0);
        assert!(!slots.finish(1), "already released");
    }

    #[test]
    fn publish_overwrites_never_queues() {
        let slots = BatchSlots::new();
        assert!(slots.try_claim(1));
        assert!(slots.publish(1, vec![decision(1, 10)]));
        // A second publish before consumption overwrites the first.
        assert!(slots.publish(1, vec![decision(2, 20)]));
        let taken = slots.take_pending().unwrap();
        assert_eq!(taken.len(), 1);
        assert_eq!(taken[0].entity, EntityId(2));
        // Take-and-clear: nothing left.
        assert!(slots.take_pending().is_none());
    }

    #[test]
    fn stolen_batch_cannot_publish_or_finish() {
        let slots = BatchSlots::new();
        assert!(slots.try_claim(1));
        assert!(slots.steal(1, 2));
        assert!(!slots.publish(1, vec![decision(1, 10)]), "stale publish rejected");
        assert!(slots.take_pending().is_none(), "stale result was dropped");
        assert!(slots.publish(2, vec![decision(2, 20)]));
        assert!(!slots.finish(1));
        assert!(slots.finish(2));
    }

    #[test]
    fn steal_fails_if_holder_changed() {
        let slots = BatchSlots::new();
        assert!(slots.try_claim(1));
        assert!(slots.finish(1));
        // Holder finished between deadline check and steal.
        assert!(!slots.steal(1, 2));
        assert_eq!(slots.in_flight_id(), 0);
    }
}

// ── DecisionEngine ────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine_tests {
    use super::*;

    #[test]
    fn observer_and_other_kinds_produce_no_decisions() {
        let generation = generation_of(vec![
            (REGION_A, snap(1, EntityKind::Observer, at(0.0, 0.0), 10)),
            (REGION_A, snap(2, EntityKind::Other,    at(1.0, 0.0), 10)),
        ]);
        let index = index_of(&generation);
        let decisions = DecisionEngine::new(42).process(&generation, &index);
        assert!(decisions.is_empty());
    }

    #[test]
    fn age_gated_entities_are_omitted_not_empty() {
        // Passive at age 97: the whole evaluation is skipped, so the entity
        // contributes no decision at all.
        let generation = generation_of(vec![
            (REGION_A, snap(1, EntityKind::Observer, at(0.0, 0.0), 0)),
            (REGION_A, snap(2, EntityKind::Passive,  at(3.0, 0.0), 97)),
        ]);
        let index = index_of(&generation);
        let decisions = DecisionEngine::new(42).process(&generation, &index);
        assert!(decisions.is_empty());
    }

    #[test]
    fn decisions_come_out_in_ascending_id_order() {
        // Observer far enough that every hostile wanders (one Move each).
        let generation = generation_of(vec![
            (REGION_A, snap(9, EntityKind::Hostile,  at(0.0, 0.0), 1)),
            (REGION_A, snap(3, EntityKind::Hostile,  at(2.0, 0.0), 1)),
            (REGION_A, snap(6, EntityKind::Hostile,  at(4.0, 0.0), 1)),
            (REGION_A, snap(1, EntityKind::Observer, at(40.0, 0.0), 0)),
        ]);
        let index = index_of(&generation);
        let decisions = DecisionEngine::new(42).process(&generation, &index);
        let ids: Vec<u64> = decisions.iter().map(|d| d.entity.0).collect();
        assert_eq!(ids, vec![3, 6, 9]);
    }

    #[test]
    fn deterministic_for_fixed_seed() {
        let generation = generation_of(vec![
            (REGION_A, snap(1, EntityKind::Hostile,  at(0.0, 0.0), 1)),
            (REGION_A, snap(2, EntityKind::Hostile,  at(3.0, 0.0), 1)),
            (REGION_A, snap(5, EntityKind::Observer, at(40.0, 0.0), 0)),
        ]);
        let index = index_of(&generation);
        let engine = DecisionEngine::new(42);
        let a = engine.process(&generation, &index);
        let b = engine.process(&generation, &index);
        assert_eq!(a, b);
    }

    #[test]
    fn panic_in_one_entity_spares_the_rest() {
        let generation = generation_of(vec![
            (REGION_A, snap(1, EntityKind::Observer, at(0.0, 0.0), 0)),
            (REGION_A, snap(2, EntityKind::Passive,  at(1.0, 0.0), 10)),
            (REGION_A, snap(3, EntityKind::Passive,  at(2.0, 0.0), 10)),
        ]);
        let index = index_of(&generation);
        let engine =
            DecisionEngine::new(42).with_passive(Box::new(PanicsOn(EntityId(2))));
        let decisions = engine.process(&generation, &index);
        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].entity, EntityId(3));
    }
}

// ── Pipeline: end to end ──────────────────────────────────────────────────────

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    /// The §-scenario: observers at distance 0, 70 and 200 from a hostile —
    /// the hostile is captured, attacks the nearest observer, and the damage
    /// lands one tick later.
    #[test]
    fn attack_decision_applied_one_tick_behind() {
        let mut world = MockWorld::new(vec![
            (REGION_A, snap(1,  EntityKind::Hostile,  at(0.0, 0.0), 50)),
            (REGION_A, snap(10, EntityKind::Observer, at(0.0, 0.0), 0)),
            (REGION_A, snap(11, EntityKind::Observer, at(70.0, 0.0), 0)),
            (REGION_A, snap(12, EntityKind::Observer, at(200.0, 0.0), 0)),
        ]);
        let mut pipeline = build_pipeline(test_config());

        pipeline.tick(&mut world);
        wait_for_batch(&pipeline);

        // Pipelined by one tick: computed, but nothing applied yet.
        assert!(world.damages.is_empty());
        assert!(pipeline.ledger().is_empty());
        assert_eq!(pipeline.metrics().snapshot().entities_processed, 1);

        pipeline.tick(&mut world);

        assert_eq!(world.damages, vec![(EntityId(10), 3.0, EntityId(1))]);
        let entry = pipeline.ledger().get(EntityId(1)).expect("ledger entry");
        assert_eq!(entry.processed, 1);
        assert_eq!(entry.last_tick, Tick(1));
        assert_eq!(pipeline.metrics().snapshot().tick_count, 1);

        pipeline.shutdown();
    }

    #[test]
    fn culled_entities_counted_every_capture() {
        let mut world = MockWorld::new(vec![
            (REGION_A, snap(1, EntityKind::Observer, at(0.0, 0.0), 0)),
            (REGION_A, snap(2, EntityKind::Passive,  at(500.0, 0.0), 10)),
            (RegionId(1), snap(3, EntityKind::Passive, at(0.0, 0.0), 10)),
        ]);
        let mut pipeline = build_pipeline(test_config());

        for _ in 0..3 {
            pipeline.tick(&mut world);
            wait_for_batch(&pipeline);
        }

        // Two entities culled per capture (far + wrong region), three captures.
        assert_eq!(pipeline.metrics().snapshot().entities_culled, 6);
        pipeline.shutdown();
    }

    #[test]
    fn at_most_one_batch_in_flight() {
        let calls = Arc::new(AtomicUsize::new(0));
        let release = Arc::new(AtomicBool::new(false));
        let mut pipeline = PipelineBuilder::new(test_config())
            .hostile(Gate {
                calls:      Arc::clone(&calls),
                release:    Arc::clone(&release),
                first_only: false,
            })
            .build()
            .unwrap();
        let mut world = MockWorld::new(vec![
            (REGION_A, snap(1,  EntityKind::Hostile,  at(0.0, 0.0), 50)),
            (REGION_A, snap(10, EntityKind::Observer, at(5.0, 0.0), 0)),
        ]);

        pipeline.tick(&mut world);
        // Let the batch thread enter the behavior.
        let entered = Instant::now() + Duration::from_secs(2);
        while calls.load(Ordering::SeqCst) == 0 {
            assert!(Instant::now() < entered, "batch never started");
            std::thread::sleep(Duration::from_millis(1));
        }

        // Held batch: further ticks must not start new work.
        pipeline.tick(&mut world);
        pipeline.tick(&mut world);
        assert_eq!(calls.load(Ordering::SeqCst), 1, "no second batch admitted");
        assert!(pipeline.batch_in_flight());
        assert!(world.targets.is_empty(), "nothing applied while held");

        release.store(true, Ordering::SeqCst);
        wait_for_batch(&pipeline);

        pipeline.tick(&mut world);
        assert_eq!(world.targets, vec![(EntityId(1), EntityId(999))]);

        pipeline.shutdown();
    }

    #[test]
    fn apply_skips_vanished_entities() {
        let mut world = MockWorld::new(vec![
            (REGION_A, snap(1,  EntityKind::Hostile,  at(0.0, 0.0), 50)),
            (REGION_A, snap(2,  EntityKind::Hostile,  at(0.5, 0.0), 50)),
            (REGION_A, snap(10, EntityKind::Observer, at(0.0, 0.0), 0)),
        ]);
        let mut pipeline = build_pipeline(test_config());

        pipeline.tick(&mut world);
        wait_for_batch(&pipeline);

        // Entity 2 despawns between snapshot and apply.
        world.remove(EntityId(2));
        pipeline.tick(&mut world);

        assert_eq!(world.damages, vec![(EntityId(10), 3.0, EntityId(1))]);
        assert!(pipeline.ledger().get(EntityId(1)).is_some());
        assert!(pipeline.ledger().get(EntityId(2)).is_none());

        pipeline.shutdown();
    }

    #[test]
    fn deadline_policy_replaces_stalled_batch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let release = Arc::new(AtomicBool::new(false));
        let config = PipelineConfig {
            batch_deadline_ticks: Some(2),
            ..test_config()
        };
        let mut pipeline = PipelineBuilder::new(config)
            .hostile(Gate {
                calls:      Arc::clone(&calls),
                release:    Arc::clone(&release),
                first_only: true,
            })
            .build()
            .unwrap();
        let mut world = MockWorld::new(vec![
            (REGION_A, snap(1,  EntityKind::Hostile,  at(0.0, 0.0), 50)),
            (REGION_A, snap(10, EntityKind::Observer, at(5.0, 0.0), 0)),
        ]);

        // Tick 0: batch 1 dispatched and stalls inside the behavior.
        pipeline.tick(&mut world);
        let entered = Instant::now() + Duration::from_secs(2);
        while calls.load(Ordering::SeqCst) == 0 {
            assert!(Instant::now() < entered, "batch never started");
            std::thread::sleep(Duration::from_millis(1));
        }

        // Tick 1: one tick old — under the deadline, dispatch skipped.
        pipeline.tick(&mut world);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // Tick 2: deadline reached — slot stolen, replacement dispatched.
        pipeline.tick(&mut world);
        wait_for_batch(&pipeline);
        assert_eq!(calls.load(Ordering::SeqCst), 2, "replacement batch ran");

        // Tick 3 applies the replacement's result.
        pipeline.tick(&mut world);
        assert_eq!(world.targets, vec![(EntityId(1), EntityId(999))]);

        // The stalled batch finishes late; its result must be dropped.
        release.store(true, Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(50));
        pipeline.tick(&mut world);
        assert_eq!(
            world.targets.len(),
            2, // tick 3 apply + tick 4 apply of the *new* batch from tick 3
            "stale result never double-applied: {:?}",
            world.targets
        );

        pipeline.shutdown();
    }

    #[test]
    fn wander_velocity_reaches_the_world() {
        // Hostile sees no observer within 16 units, so it wanders; the Move
        // action becomes a set_velocity of the configured magnitude.
        let mut world = MockWorld::new(vec![
            (REGION_A, snap(1,  EntityKind::Hostile,  at(30.0, 0.0), 50)),
            (REGION_A, snap(10, EntityKind::Observer, at(0.0, 0.0), 0)),
        ]);
        let mut pipeline = build_pipeline(test_config());

        pipeline.tick(&mut world);
        wait_for_batch(&pipeline);
        pipeline.tick(&mut world);

        assert_eq!(world.velocities.len(), 1);
        let (id, velocity) = world.velocities[0];
        assert_eq!(id, EntityId(1));
        assert!((velocity.length() - 0.1).abs() < 1e-9, "wander magnitude: {velocity}");

        pipeline.shutdown();
    }

    #[test]
    fn breeding_and_merge_actions_reach_the_world() {
        let mut world = MockWorld::new(vec![
            (REGION_A, snap(10, EntityKind::Observer, at(10.0, 0.0), 0)),
            (REGION_A, snap(30, EntityKind::Passive, at(0.0, 0.0), 95).with_breeding(true, false)),
            (REGION_A, snap(31, EntityKind::Passive, at(1.0, 0.0), 95).with_breeding(true, false)),
            (REGION_A, snap(20, EntityKind::Item, at(30.0, 0.0), 20)),
            (REGION_A, snap(21, EntityKind::Item, at(31.0, 0.0), 40)),
        ]);
        let mut pipeline = build_pipeline(test_config());

        pipeline.tick(&mut world);
        wait_for_batch(&pipeline);
        pipeline.tick(&mut world);

        // Both passives decided to breed; each decision sets love mode on
        // both parties at 600 ticks.
        assert!(world.love.contains(&(EntityId(30), 600)));
        assert!(world.love.contains(&(EntityId(31), 600)));
        // Both items paired with each other.
        assert!(world.merges.contains(&(EntityId(20), EntityId(21))));
        assert!(world.merges.contains(&(EntityId(21), EntityId(20))));

        pipeline.shutdown();
    }

    #[test]
    fn shutdown_stops_dispatch_but_not_apply() {
        let calls = Arc::new(AtomicUsize::new(0));
        let release = Arc::new(AtomicBool::new(true)); // never blocks
        let mut pipeline = PipelineBuilder::new(test_config())
            .hostile(Gate {
                calls:      Arc::clone(&calls),
                release,
                first_only: false,
            })
            .build()
            .unwrap();
        let mut world = MockWorld::new(vec![
            (REGION_A, snap(1,  EntityKind::Hostile,  at(0.0, 0.0), 50)),
            (REGION_A, snap(10, EntityKind::Observer, at(5.0, 0.0), 0)),
        ]);

        pipeline.tick(&mut world);
        wait_for_batch(&pipeline);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        pipeline.shutdown();
        assert!(!pipeline.is_running());

        // The already-computed result still applies; no new batch starts.
        pipeline.tick(&mut world);
        pipeline.tick(&mut world);
        assert_eq!(calls.load(Ordering::SeqCst), 1, "no dispatch after shutdown");
        assert_eq!(world.targets, vec![(EntityId(1), EntityId(999))]);
    }

    #[test]
    fn shutdown_abandons_batch_after_grace() {
        let calls = Arc::new(AtomicUsize::new(0));
        let release = Arc::new(AtomicBool::new(false));
        let config = PipelineConfig {
            shutdown_grace: Duration::from_millis(50),
            ..test_config()
        };
        let mut pipeline = PipelineBuilder::new(config)
            .hostile(Gate {
                calls:      Arc::clone(&calls),
                release:    Arc::clone(&release),
                first_only: false,
            })
            .build()
            .unwrap();
        let mut world = MockWorld::new(vec![
            (REGION_A, snap(1,  EntityKind::Hostile,  at(0.0, 0.0), 50)),
            (REGION_A, snap(10, EntityKind::Observer, at(5.0, 0.0), 0)),
        ]);

        pipeline.tick(&mut world);
        let entered = Instant::now() + Duration::from_secs(2);
        while calls.load(Ordering::SeqCst) == 0 {
            assert!(Instant::now() < entered, "batch never started");
            std::thread::sleep(Duration::from_millis(1));
        }

        let start = Instant::now();
        pipeline.shutdown();
        assert!(
            start.elapsed() < Duration::from_secs(2),
            "shutdown bounded by grace period"
        );
        assert!(!pipeline.is_running());
        assert!(pipeline.batch_in_flight(), "batch abandoned, not joined");

        // Unblock the abandoned thread so it exits before the test does.
        release.store(true, Ordering::SeqCst);
        wait_for_batch(&pipeline);
    }

    #[test]
    fn metrics_reset_starts_new_window() {
        let mut world = MockWorld::new(vec![
            (REGION_A, snap(1,  EntityKind::Hostile,  at(0.0, 0.0), 50)),
            (REGION_A, snap(10, EntityKind::Observer, at(0.0, 0.0), 0)),
        ]);
        let mut pipeline = build_pipeline(test_config());

        pipeline.tick(&mut world);
        wait_for_batch(&pipeline);
        pipeline.tick(&mut world);

        let metrics = pipeline.metrics();
        assert!(metrics.snapshot().entities_processed > 0);

        metrics.reset();
        assert_eq!(metrics.snapshot(), Default::default());

        pipeline.shutdown();
    }

    #[test]
    fn injected_metrics_handle_sees_pipeline_counters() {
        let metrics = Arc::new(PipelineMetrics::new());
        let mut pipeline = PipelineBuilder::new(test_config())
            .metrics(Arc::clone(&metrics))
            .build()
            .unwrap();
        let mut world = MockWorld::new(vec![
            (REGION_A, snap(1,  EntityKind::Hostile,  at(0.0, 0.0), 50)),
            (REGION_A, snap(10, EntityKind::Observer, at(0.0, 0.0), 0)),
        ]);

        pipeline.tick(&mut world);
        wait_for_batch(&pipeline);
        pipeline.tick(&mut world);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.entities_processed, 1);
        assert_eq!(snapshot.tick_count, 1);
        assert!(snapshot.avg_apply_nanos() <= snapshot.total_apply_nanos);

        pipeline.shutdown();
    }
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn rejects_non_positive_radius() {
        let config = PipelineConfig { culling_radius: 0.0, ..test_config() };
        assert!(matches!(
            PipelineBuilder::new(config).build(),
            Err(PipelineError::Config(_))
        ));
    }

    #[test]
    fn rejects_nan_radius() {
        let config = PipelineConfig { culling_radius: f64::NAN, ..test_config() };
        assert!(matches!(
            PipelineBuilder::new(config).build(),
            Err(PipelineError::Config(_))
        ));
    }

    #[test]
    fn rejects_zero_deadline() {
        let config = PipelineConfig {
            batch_deadline_ticks: Some(0),
            ..test_config()
        };
        assert!(matches!(
            PipelineBuilder::new(config).build(),
            Err(PipelineError::Config(_))
        ));
    }

    #[test]
    fn builds_and_reports_running() {
        let pipeline = build_pipeline(test_config());
        assert!(pipeline.is_running());
        assert!(!pipeline.batch_in_flight());
        assert_eq!(pipeline.current_tick(), Tick(0));
        assert!(pipeline.current_generation().is_empty());
    }
}
