//! The `Pipeline` struct and its per-tick driver.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use sidetick_behavior::Action;
use sidetick_core::{EntityId, Tick};
use sidetick_snapshot::{Generation, Observer, SnapshotStore, WorldMut, WorldView};
use sidetick_spatial::SnapshotIndex;

use crate::{
    BatchSlots, DecisionEngine, PipelineConfig, PipelineMetrics, ProcessingLedger,
};

/// Love-mode duration installed by an applied `StartBreeding` action.
const LOVE_MODE_TICKS: u32 = 600;

/// How often the shutdown wait re-checks the in-flight slot.
const SHUTDOWN_POLL: Duration = Duration::from_millis(5);

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// The per-tick driver of the snapshot–process–apply pipeline.
///
/// Owned and driven by the control thread — the one thread allowed to mutate
/// live world state.  The host calls [`tick`](Self::tick) once per fixed-rate
/// tick; the pipeline never self-schedules and never blocks the control
/// thread on worker completion.
///
/// Create via [`PipelineBuilder`][crate::PipelineBuilder].
pub struct Pipeline {
    config: PipelineConfig,

    /// Double-buffered snapshot generations.
    store: SnapshotStore,

    /// Pure decision computation, shared with batch threads.
    engine: Arc<DecisionEngine>,

    /// The two cross-thread cells (in-flight slot + pending result).
    slots: Arc<BatchSlots>,

    /// Injected counters, shared with host introspection code.
    metrics: Arc<PipelineMetrics>,

    /// Per-entity "last processed / count" table (control thread only).
    ledger: ProcessingLedger,

    /// Worker pool for the per-entity decision fan-out.  Shared into each
    /// batch thread so an abandoned batch keeps its pool alive until it
    /// finishes on its own.
    pool: Arc<rayon::ThreadPool>,

    /// Cleared by shutdown; dispatch refuses new work once false.
    running: Arc<AtomicBool>,

    current_tick: Tick,

    /// Next batch id to hand out.  Batch ids start at 1 — 0 means "idle" in
    /// the in-flight slot.
    next_batch_id: u64,

    /// Control-thread view of the batch currently holding the slot:
    /// `(batch id, dispatch tick)`.  Used only for the deadline policy.
    in_flight_meta: Option<(u64, Tick)>,

    /// Scratch buffer for observer positions, reused across ticks.
    observers: Vec<Observer>,
}

impl Pipeline {
    pub(crate) fn from_parts(
        config:  PipelineConfig,
        engine:  DecisionEngine,
        metrics: Arc<PipelineMetrics>,
        pool:    rayon::ThreadPool,
    ) -> Self {
        let store = SnapshotStore::new(config.culling_radius);
        Self {
            config,
            store,
            engine: Arc::new(engine),
            slots: Arc::new(BatchSlots::new()),
            metrics,
            ledger: ProcessingLedger::new(),
            pool: Arc::new(pool),
            running: Arc::new(AtomicBool::new(true)),
            current_tick: Tick::ZERO,
            next_batch_id: 1,
            in_flight_meta: None,
            observers: Vec::new(),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run one tick: Apply, then Capture, then Dispatch, in that order.
    ///
    /// Apply precedes Capture so decision application never interleaves with
    /// snapshot consistency; Capture precedes Dispatch because Dispatch
    /// consumes the generation Capture just produced.
    pub fn tick<W: WorldMut>(&mut self, world: &mut W) {
        self.apply(world);
        self.capture(world);
        self.dispatch();
        self.current_tick = self.current_tick + 1;
    }

    /// Whether the pipeline is accepting new batches.  After a failed
    /// construction or a shutdown the host should fall back to its
    /// non-concurrent path.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Whether a dispatched batch has not yet completed.
    pub fn batch_in_flight(&self) -> bool {
        self.slots.in_flight_id() != 0
    }

    /// Shared handle to the pipeline counters.
    pub fn metrics(&self) -> Arc<PipelineMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Per-entity processing bookkeeping, for debug tooling.
    pub fn ledger(&self) -> &ProcessingLedger {
        &self.ledger
    }

    /// The most recently captured snapshot generation.
    pub fn current_generation(&self) -> &Generation {
        self.store.current()
    }

    /// The tick the next [`tick`](Self::tick) call will run as.
    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    /// Stop accepting new batches and wait up to the configured grace period
    /// for the in-flight batch, then abandon it.
    ///
    /// Abandonment is best-effort cancellation: the batch thread keeps
    /// running detached until its computation finishes, but its result is
    /// never applied and the pipeline no longer dispatches.
    pub fn shutdown(&mut self) {
        if self.running.swap(false, Ordering::SeqCst) {
            tracing::info!("pipeline shutting down");
        }
        let deadline = Instant::now() + self.config.shutdown_grace;
        while self.slots.in_flight_id() != 0 {
            if Instant::now() >= deadline {
                tracing::warn!(
                    grace_ms = self.config.shutdown_grace.as_millis() as u64,
                    "grace period expired; abandoning in-flight batch"
                );
                break;
            }
            std::thread::sleep(SHUTDOWN_POLL);
        }
    }

    // ── Phase 1: Apply ────────────────────────────────────────────────────

    /// Consume the pending result, if any, and apply it to live state.
    ///
    /// Entities that vanished between snapshot and apply are skipped
    /// silently — that is routine, not an error — and one skipped decision
    /// never blocks the rest of the list.
    fn apply<W: WorldMut>(&mut self, world: &mut W) {
        let Some(decisions) = self.slots.take_pending() else {
            return;
        };
        let start = Instant::now();

        for decision in &decisions {
            if !world.is_valid(decision.entity) {
                continue;
            }
            for action in &decision.actions {
                apply_action(world, decision.entity, action);
            }
            self.ledger.record(decision.entity, self.current_tick);
        }

        self.metrics.record_apply(start.elapsed().as_nanos() as u64);
        tracing::trace!(
            tick = %self.current_tick,
            decisions = decisions.len(),
            "applied batch"
        );
    }

    // ── Phase 2: Capture ──────────────────────────────────────────────────

    fn capture<W: WorldView>(&mut self, world: &W) {
        self.observers.clear();
        let observers = &mut self.observers;
        world.for_each_observer(&mut |obs| observers.push(obs));

        let stats = self.store.capture(self.current_tick, &self.observers, world);
        self.metrics.record_culled(stats.culled as u64);
        tracing::trace!(
            tick = %self.current_tick,
            captured = stats.captured,
            culled = stats.culled,
            "captured generation"
        );
    }

    // ── Phase 3: Dispatch ─────────────────────────────────────────────────

    /// Admission control and batch start.
    ///
    /// At most one batch is ever in flight.  When the slot is held and no
    /// deadline policy applies, this tick's dispatch opportunity is dropped —
    /// the in-flight batch is left running and the pipeline degrades to
    /// lower decision throughput instead of queueing work.
    fn dispatch(&mut self) {
        if !self.running.load(Ordering::SeqCst) {
            return;
        }

        let new_id = self.next_batch_id;
        let holder = self.slots.in_flight_id();

        let claimed = if holder == 0 {
            self.in_flight_meta = None;
            self.slots.try_claim(new_id)
        } else if self.deadline_expired(holder) {
            tracing::warn!(stalled = holder, replacement = new_id, "batch past deadline; reclaiming slot");
            self.slots.steal(holder, new_id)
        } else {
            tracing::trace!(in_flight = holder, "dispatch skipped; batch in flight");
            false
        };

        if !claimed {
            return;
        }
        self.next_batch_id += 1;
        self.in_flight_meta = Some((new_id, self.current_tick));
        self.spawn_batch(new_id);
    }

    fn deadline_expired(&self, holder: u64) -> bool {
        match (self.config.batch_deadline_ticks, self.in_flight_meta) {
            (Some(deadline), Some((id, dispatched))) if id == holder => {
                self.current_tick.since(dispatched) >= deadline
            }
            _ => false,
        }
    }

    /// Start one batch thread for the current generation.
    ///
    /// The generation is defensively copied into an `Arc` so the store can
    /// recycle its buffers next tick while workers read the frozen copy.
    /// Workers are created on demand, one per batch; the fan-out inside uses
    /// the owned rayon pool.
    fn spawn_batch(&mut self, id: u64) {
        let generation = Arc::new(self.store.current().clone());
        let engine  = Arc::clone(&self.engine);
        let slots   = Arc::clone(&self.slots);
        let metrics = Arc::clone(&self.metrics);
        let pool    = Arc::clone(&self.pool);

        let spawned = std::thread::Builder::new()
            .name(format!("sidetick-batch-{id}"))
            .spawn(move || {
                let start = Instant::now();
                let decisions = pool.install(|| {
                    let index = SnapshotIndex::build(generation.values().copied());
                    engine.process(&generation, &index)
                });
                let elapsed = start.elapsed().as_nanos() as u64;

                let count = decisions.len() as u64;
                if slots.publish(id, decisions) {
                    metrics.record_process(elapsed, count);
                    tracing::debug!(batch = id, decisions = count, "batch published");
                } else {
                    tracing::debug!(batch = id, "stale batch result dropped");
                }
                slots.finish(id);
            });

        if let Err(err) = spawned {
            // Rejected work (e.g. during process teardown) skips this tick's
            // dispatch; it is not fatal to the pipeline.
            tracing::warn!(%err, batch = id, "batch thread spawn failed; skipping dispatch");
            self.slots.finish(id);
            self.in_flight_meta = None;
        }
    }
}

// ── Action interpretation ─────────────────────────────────────────────────────

/// Apply one action to the live world on behalf of `entity`.
///
/// The only place actions are interpreted; everything upstream treats them as
/// opaque data.
fn apply_action<W: WorldMut>(world: &mut W, entity: EntityId, action: &Action) {
    match *action {
        Action::Move(velocity) => world.set_velocity(entity, velocity),

        Action::Attack { target, damage } => world.apply_damage(target, damage, entity),

        Action::SetTarget(target) => world.set_ai_target(entity, target),

        Action::StartBreeding(mate) => {
            world.set_breeding_cooldown(entity, LOVE_MODE_TICKS);
            world.set_breeding_cooldown(mate, LOVE_MODE_TICKS);
        }

        Action::MergeWith(other) => {
            // The host validates stack compatibility; a refused merge is fine.
            world.merge_stackable(entity, other);
        }
    }
}
