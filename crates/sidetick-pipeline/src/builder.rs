//! Fluent builder for constructing a [`Pipeline`].

use std::sync::Arc;

use sidetick_behavior::EntityBehavior;

use crate::{DecisionEngine, Pipeline, PipelineConfig, PipelineError, PipelineMetrics, PipelineResult};

/// Fluent builder for [`Pipeline`].
///
/// # Required inputs
///
/// - [`PipelineConfig`] — culling radius, seed, thread count, policies.
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                  |
/// |---------------|------------------------------------------|
/// | `.hostile(b)` | stock `HostileBehavior`                  |
/// | `.passive(b)` | stock `PassiveBehavior`                  |
/// | `.item(b)`    | stock `ItemBehavior`                     |
/// | `.metrics(m)` | a fresh `PipelineMetrics`                |
///
/// # Example
///
/// ```rust,ignore
/// let metrics = Arc::new(PipelineMetrics::new());
/// let mut pipeline = PipelineBuilder::new(PipelineConfig::default())
///     .metrics(Arc::clone(&metrics))
///     .build()?;
/// ```
pub struct PipelineBuilder {
    config:  PipelineConfig,
    hostile: Option<Box<dyn EntityBehavior>>,
    passive: Option<Box<dyn EntityBehavior>>,
    item:    Option<Box<dyn EntityBehavior>>,
    metrics: Option<Arc<PipelineMetrics>>,
}

impl PipelineBuilder {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            hostile: None,
            passive: None,
            item:    None,
            metrics: None,
        }
    }

    /// Replace the hostile behavior family.
    pub fn hostile(mut self, behavior: impl EntityBehavior) -> Self {
        self.hostile = Some(Box::new(behavior));
        self
    }

    /// Replace the passive behavior family.
    pub fn passive(mut self, behavior: impl EntityBehavior) -> Self {
        self.passive = Some(Box::new(behavior));
        self
    }

    /// Replace the item behavior family.
    pub fn item(mut self, behavior: impl EntityBehavior) -> Self {
        self.item = Some(Box::new(behavior));
        self
    }

    /// Inject a shared metrics handle so host introspection reads the same
    /// counters the pipeline writes.
    pub fn metrics(mut self, metrics: Arc<PipelineMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Validate the configuration, build the worker pool, and return a
    /// ready-to-tick [`Pipeline`].
    ///
    /// Worker pool construction failure is the one fatal fault: it surfaces
    /// as [`PipelineError::PoolBuild`] so the host can fall back to a
    /// non-concurrent mode.
    pub fn build(self) -> PipelineResult<Pipeline> {
        if !self.config.culling_radius.is_finite() || self.config.culling_radius <= 0.0 {
            return Err(PipelineError::Config(format!(
                "culling_radius must be finite and positive, got {}",
                self.config.culling_radius
            )));
        }
        if let Some(0) = self.config.batch_deadline_ticks {
            return Err(PipelineError::Config(
                "batch_deadline_ticks must be at least 1 when set".into(),
            ));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.num_threads.unwrap_or(0))
            .thread_name(|i| format!("sidetick-worker-{i}"))
            .build()?;

        let mut engine = DecisionEngine::new(self.config.seed);
        if let Some(b) = self.hostile {
            engine = engine.with_hostile(b);
        }
        if let Some(b) = self.passive {
            engine = engine.with_passive(b);
        }
        if let Some(b) = self.item {
            engine = engine.with_item(b);
        }

        let metrics = self.metrics.unwrap_or_default();
        tracing::info!(
            radius = self.config.culling_radius,
            threads = ?self.config.num_threads,
            "pipeline initialized"
        );
        Ok(Pipeline::from_parts(self.config, engine, metrics, pool))
    }
}
