//! Pipeline configuration.

use std::time::Duration;

/// Top-level pipeline configuration.
///
/// Typically loaded from a TOML/JSON file by the host (with the `serde`
/// feature) and passed to [`PipelineBuilder`][crate::PipelineBuilder].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipelineConfig {
    /// Spatial culling radius R: entities farther than this from every
    /// observer (in the observer's region) receive no AI computation.
    pub culling_radius: f64,

    /// Master RNG seed for randomized sub-decisions (wander).  The same seed
    /// over the same snapshots produces identical decisions; tests pin it.
    pub seed: u64,

    /// Worker thread count for the decision fan-out pool.  `None` uses all
    /// logical cores.
    pub num_threads: Option<usize>,

    /// Optional batch deadline, in ticks.  `None` means a slow batch is
    /// allowed to hold the in-flight slot indefinitely and new dispatch is
    /// simply skipped until it completes.  `Some(n)` lets the orchestrator
    /// reclaim the slot after `n` ticks and dispatch fresh work; the stalled
    /// batch keeps running but its eventual result is dropped.
    pub batch_deadline_ticks: Option<u64>,

    /// How long [`shutdown`][crate::Pipeline::shutdown] waits for an
    /// in-flight batch before abandoning it.
    pub shutdown_grace: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            culling_radius:       64.0,
            seed:                 0,
            num_threads:          None,
            batch_deadline_ticks: None,
            shutdown_grace:       Duration::from_secs(2),
        }
    }
}
