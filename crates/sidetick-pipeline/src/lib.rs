//! `sidetick-pipeline` — the concurrent snapshot–process–apply orchestrator.
//!
//! # Three-phase tick
//!
//! ```text
//! host calls pipeline.tick(world) once per fixed-rate tick:
//!   ① Apply    — take-and-clear the pending result (decisions computed in a
//!                prior tick); look up each live entity; skip silently if it
//!                vanished; apply its actions in order.
//!   ② Capture  — collect observer positions, then rebuild the current
//!                snapshot generation with spatial culling (radius R, same
//!                region as some observer).
//!   ③ Dispatch — admission control: at most one batch in flight.  If the
//!                slot is free, defensively copy the generation and hand it
//!                to a batch thread, which builds the spatial index and fans
//!                the decision engine out across the rayon pool.  The batch
//!                publishes into the pending slot when it completes.
//! ```
//!
//! The pipeline is intentionally one tick (or more, under load) behind: the
//! Apply phase consumes the most recently *completed* batch, and a tick never
//! blocks waiting for AI computation.  Under sustained overload the system
//! degrades to fewer completed batches per wall-clock second rather than
//! queueing — at most one generation of results is ever retained.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`config`]   | `PipelineConfig`                                      |
//! | [`engine`]   | `DecisionEngine` — pure snapshot → decisions function |
//! | [`slots`]    | `BatchSlots` — the two cross-thread cells             |
//! | [`metrics`]  | `PipelineMetrics`, `MetricsSnapshot`                  |
//! | [`ledger`]   | `ProcessingLedger` — per-entity debug bookkeeping     |
//! | [`pipeline`] | `Pipeline` — the per-tick driver                      |
//! | [`builder`]  | `PipelineBuilder`                                     |
//! | [`error`]    | `PipelineError`, `PipelineResult<T>`                  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sidetick_pipeline::{PipelineBuilder, PipelineConfig};
//!
//! let mut pipeline = PipelineBuilder::new(PipelineConfig::default()).build()?;
//! // Host tick loop (control thread — the only thread that owns the world):
//! loop {
//!     pipeline.tick(&mut world);
//! }
//! pipeline.shutdown();
//! ```

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod metrics;
pub mod pipeline;
pub mod slots;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::PipelineBuilder;
pub use config::PipelineConfig;
pub use engine::DecisionEngine;
pub use error::{PipelineError, PipelineResult};
pub use ledger::{LedgerEntry, ProcessingLedger};
pub use metrics::{MetricsSnapshot, PipelineMetrics};
pub use pipeline::Pipeline;
pub use slots::BatchSlots;
