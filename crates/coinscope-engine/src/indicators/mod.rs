//! Pure technical-indicator functions over a validated [`Series`].
//!
//! Every indicator returns an [`IndicatorResult`]: a tagged record whose
//! `value` is `None` when there is not enough history. Callers must treat
//! an invalid result as "no signal", never as zero.

mod bollinger;
mod macd;
mod moving_average;
mod rsi;
mod volume;

pub use bollinger::{bollinger_bands, BollingerOutput};
pub use macd::{macd, MacdOutput, MacdParams};
pub use moving_average::{moving_average, MaKind};
pub use rsi::rsi;
pub use volume::volume_trend;

use serde::Serialize;

/// Outcome of one indicator computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorResult<T> {
    pub name: &'static str,
    pub value: Option<T>,
}

impl<T> IndicatorResult<T> {
    pub(crate) fn valid(name: &'static str, value: T) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }

    pub(crate) fn insufficient(name: &'static str) -> Self {
        Self { name, value: None }
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

pub(crate) fn population_std_dev(values: &[f64]) -> f64 {
    let mu = mean(values);
    let variance = values.iter().map(|v| (v - mu) * (v - mu)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// EMA with multiplier `2 / (period + 1)`, seeded with the SMA of the first
/// `period` values. Output index 0 corresponds to input index `period - 1`.
pub(crate) fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len() - period + 1);
    out.push(mean(&values[..period]));

    for &value in &values[period..] {
        let prev = out[out.len() - 1];
        out.push(prev + alpha * (value - prev));
    }

    out
}
