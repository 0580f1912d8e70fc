use serde::{Deserialize, Serialize};

use super::{validate_non_negative, UtcDateTime};
use crate::ValidationError;

/// Single OHLCV candle for one interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub ts: UtcDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PricePoint {
    pub fn new(
        ts: UtcDateTime,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("open", open)?;
        validate_non_negative("high", high)?;
        validate_non_negative("low", low)?;
        validate_non_negative("close", close)?;
        validate_non_negative("volume", volume)?;

        if high < low {
            return Err(ValidationError::InvalidPriceRange);
        }

        if open < low || open > high || close < low || close > high {
            return Err(ValidationError::InvalidPriceBounds);
        }

        Ok(Self {
            ts,
            open,
            high,
            low,
            close,
            volume,
        })
    }
}

/// Time-ordered candle series.
///
/// Construction enforces the series contract up front: non-empty, strictly
/// increasing timestamps, no duplicates. Indicator code can then assume a
/// well-formed window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PricePoint>", into = "Vec<PricePoint>")]
pub struct Series(Vec<PricePoint>);

impl Series {
    pub fn new(points: Vec<PricePoint>) -> Result<Self, ValidationError> {
        if points.is_empty() {
            return Err(ValidationError::EmptySeries);
        }

        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].ts <= pair[0].ts {
                return Err(ValidationError::NonMonotonicSeries { index: index + 1 });
            }
        }

        Ok(Self(points))
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> &PricePoint {
        self.0.last().expect("Series is never empty by construction")
    }

    pub fn closes(&self) -> Vec<f64> {
        self.0.iter().map(|p| p.close).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.0.iter().map(|p| p.volume).collect()
    }
}

impl TryFrom<Vec<PricePoint>> for Series {
    type Error = ValidationError;

    fn try_from(value: Vec<PricePoint>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Series> for Vec<PricePoint> {
    fn from(value: Series) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(ts_secs: i64, close: f64) -> PricePoint {
        let ts = UtcDateTime::from_unix_timestamp(ts_secs).expect("timestamp");
        PricePoint::new(ts, close, close, close, close, 100.0).expect("valid point")
    }

    #[test]
    fn rejects_invalid_price_bounds() {
        let ts = UtcDateTime::parse("2024-01-01T00:00:00Z").expect("timestamp");
        let err =
            PricePoint::new(ts, 10.0, 12.0, 9.0, 12.5, 100.0).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidPriceBounds));
    }

    #[test]
    fn rejects_empty_series() {
        let err = Series::new(Vec::new()).expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptySeries));
    }

    #[test]
    fn rejects_duplicate_timestamps() {
        let err =
            Series::new(vec![point(0, 1.0), point(0, 2.0)]).expect_err("must fail");
        assert!(matches!(err, ValidationError::NonMonotonicSeries { index: 1 }));
    }

    #[test]
    fn rejects_out_of_order_timestamps() {
        let err = Series::new(vec![point(0, 1.0), point(60, 2.0), point(30, 3.0)])
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::NonMonotonicSeries { index: 2 }));
    }

    #[test]
    fn exposes_closes_in_order() {
        let series =
            Series::new(vec![point(0, 1.0), point(60, 2.0), point(120, 3.0)]).expect("valid");
        assert_eq!(series.closes(), vec![1.0, 2.0, 3.0]);
        assert_eq!(series.last().close, 3.0);
    }
}
