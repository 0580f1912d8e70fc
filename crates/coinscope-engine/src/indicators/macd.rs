use coinscope_core::Series;
use serde::{Deserialize, Serialize};

use super::{ema_series, IndicatorResult};

/// MACD period parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdParams {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl MacdParams {
    pub const fn is_well_formed(self) -> bool {
        self.fast >= 1 && self.signal >= 1 && self.fast < self.slow
    }

    /// Minimum series length for a valid signal line.
    pub const fn min_len(self) -> usize {
        self.slow + self.signal
    }
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

/// MACD line, signal line, and histogram at the latest point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Moving Average Convergence Divergence.
///
/// MACD line = EMA(fast) − EMA(slow); signal line = EMA(signal) of the MACD
/// line; histogram = MACD − signal. Invalid when the series is shorter than
/// `slow + signal` or the params are malformed.
pub fn macd(series: &Series, params: MacdParams) -> IndicatorResult<MacdOutput> {
    const NAME: &str = "macd";

    if !params.is_well_formed() || series.len() < params.min_len() {
        return IndicatorResult::insufficient(NAME);
    }

    let closes = series.closes();
    let fast = ema_series(&closes, params.fast);
    let slow = ema_series(&closes, params.slow);

    // Both EMA streams end at the latest close; align on the slow start.
    let offset = params.slow - params.fast;
    let macd_values: Vec<f64> = slow
        .iter()
        .enumerate()
        .map(|(i, &slow_value)| fast[i + offset] - slow_value)
        .collect();

    let signal_values = ema_series(&macd_values, params.signal);
    let (Some(&macd_line), Some(&signal_line)) = (macd_values.last(), signal_values.last()) else {
        return IndicatorResult::insufficient(NAME);
    };

    IndicatorResult::valid(
        NAME,
        MacdOutput {
            macd: macd_line,
            signal: signal_line,
            histogram: macd_line - signal_line,
        },
    )
}
