use thiserror::Error;

/// Failures surfaced to the host while building or driving a stage.
///
/// None of these are recoverable; the host reports them and gives up.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    #[error("drawing context unavailable: {0}")]
    ContextUnavailable(String),
    #[error("failed to schedule animation timer: {0}")]
    Schedule(String),
}
