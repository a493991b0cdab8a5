use thiserror::Error;

/// Fatal pipeline construction failures.
///
/// Everything that can go wrong after construction is deliberately not an
/// error: entities vanishing before apply are skipped, a panicking behavior
/// costs only that entity's decision, and a dispatch that cannot start simply
/// skips the tick.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("pipeline configuration error: {0}")]
    Config(String),

    /// The worker pool could not be created.  Fatal: the host should fall
    /// back to a non-concurrent mode.
    #[error("worker pool initialization failed: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
