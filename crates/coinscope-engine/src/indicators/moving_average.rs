use coinscope_core::Series;
use serde::{Deserialize, Serialize};

use super::{ema_series, mean, IndicatorResult};

/// Moving-average flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaKind {
    Simple,
    Exponential,
}

/// Moving average of closes over the trailing `period`.
///
/// The exponential variant applies `alpha = 2 / (period + 1)` recursively
/// over the whole series, seeded with the simple mean of the first `period`
/// closes. Invalid when the series is shorter than `period`.
pub fn moving_average(series: &Series, period: usize, kind: MaKind) -> IndicatorResult<f64> {
    let name = match kind {
        MaKind::Simple => "sma",
        MaKind::Exponential => "ema",
    };

    if period == 0 || series.len() < period {
        return IndicatorResult::insufficient(name);
    }

    let closes = series.closes();
    let value = match kind {
        MaKind::Simple => mean(&closes[closes.len() - period..]),
        MaKind::Exponential => {
            let ema = ema_series(&closes, period);
            match ema.last() {
                Some(&last) => last,
                None => return IndicatorResult::insufficient(name),
            }
        }
    };

    IndicatorResult::valid(name, value)
}
