use coinscope_core::Series;

use super::{mean, IndicatorResult};

/// Volume trend: least-squares slope of volume over the trailing `period`
/// points, normalized by the mean window volume into a unitless per-step
/// growth ratio. Invalid when history is short or the window has no volume
/// to normalize against.
pub fn volume_trend(series: &Series, period: usize) -> IndicatorResult<f64> {
    const NAME: &str = "volume_trend";

    if period < 2 || series.len() < period {
        return IndicatorResult::insufficient(NAME);
    }

    let volumes = series.volumes();
    let window = &volumes[volumes.len() - period..];
    let mean_volume = mean(window);
    if mean_volume <= 0.0 {
        return IndicatorResult::insufficient(NAME);
    }

    let x_mean = (period - 1) as f64 / 2.0;
    let mut covariance = 0.0;
    let mut x_variance = 0.0;
    for (i, &volume) in window.iter().enumerate() {
        let dx = i as f64 - x_mean;
        covariance += dx * (volume - mean_volume);
        x_variance += dx * dx;
    }

    IndicatorResult::valid(NAME, covariance / x_variance / mean_volume)
}
