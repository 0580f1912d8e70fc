use thiserror::Error;

/// Validation and contract errors exposed by `coinscope-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("price point high must be >= low")]
    InvalidPriceRange,
    #[error("price point open/close must be within high/low range")]
    InvalidPriceBounds,

    #[error("series cannot be empty")]
    EmptySeries,
    #[error("series timestamps must be strictly increasing (violation at index {index})")]
    NonMonotonicSeries { index: usize },

    #[error("mention polarity {value} outside [-1, 1]")]
    PolarityOutOfRange { value: f64 },
    #[error("mention weight {value} must be non-negative")]
    NegativeWeight { value: f64 },

    #[error("weights must be non-negative and sum to a positive value")]
    InvalidWeights,
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
