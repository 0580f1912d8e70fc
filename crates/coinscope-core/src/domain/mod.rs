mod mention;
mod report;
mod series;
mod snapshot;
mod symbol;
mod timestamp;

pub use mention::{Mention, MentionSource};
pub use report::{DataFlags, Recommendation, ScoreReport};
pub use series::{PricePoint, Series};
pub use snapshot::AssetSnapshot;
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;

use crate::ValidationError;

pub(crate) fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

pub(crate) fn validate_non_negative(
    field: &'static str,
    value: f64,
) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
