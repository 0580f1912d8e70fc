use coinscope_core::ValidationError;
use thiserror::Error;

/// Top-level error type for engine operations.
///
/// Insufficient data is never reported here: it flows inline through
/// `IndicatorResult` values and `DataFlags` so partial results stay usable.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
