use coinscope_core::Series;
use serde::{Deserialize, Serialize};

use super::{mean, population_std_dev, IndicatorResult};

/// Bollinger band levels at the latest point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerOutput {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl BollingerOutput {
    /// Band width relative to the middle band; proxy for recent volatility.
    pub fn width(&self) -> f64 {
        if self.middle > 0.0 {
            (self.upper - self.lower) / self.middle
        } else {
            0.0
        }
    }
}

/// Bollinger Bands: SMA middle band with bands at ± `num_std_dev` population
/// standard deviations over the same trailing window.
pub fn bollinger_bands(
    series: &Series,
    period: usize,
    num_std_dev: f64,
) -> IndicatorResult<BollingerOutput> {
    const NAME: &str = "bollinger_bands";

    if period == 0 || series.len() < period || !num_std_dev.is_finite() || num_std_dev < 0.0 {
        return IndicatorResult::insufficient(NAME);
    }

    let closes = series.closes();
    let window = &closes[closes.len() - period..];
    let middle = mean(window);
    let band = num_std_dev * population_std_dev(window);

    IndicatorResult::valid(
        NAME,
        BollingerOutput {
            upper: middle + band,
            middle,
            lower: middle - band,
        },
    )
}
