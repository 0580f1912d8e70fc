use coinscope_core::Series;

use super::IndicatorResult;

/// Relative Strength Index with Wilder's smoothing, bounded [0, 100].
///
/// Seed averages are the simple means of the first `period` gains/losses;
/// each remaining transition is folded in with
/// `avg = (prev * (period - 1) + current) / period`. When the smoothed loss
/// is zero the result is exactly 100 and no division is performed. Invalid
/// when the series is shorter than `period + 1`.
pub fn rsi(series: &Series, period: usize) -> IndicatorResult<f64> {
    const NAME: &str = "rsi";

    if period == 0 || series.len() < period + 1 {
        return IndicatorResult::insufficient(NAME);
    }

    let closes = series.closes();
    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;
    for t in 1..=period {
        let diff = closes[t] - closes[t - 1];
        if diff >= 0.0 {
            gain_sum += diff;
        } else {
            loss_sum -= diff;
        }
    }

    let divisor = period as f64;
    let mut avg_gain = gain_sum / divisor;
    let mut avg_loss = loss_sum / divisor;

    for t in period + 1..closes.len() {
        let diff = closes[t] - closes[t - 1];
        let gain = diff.max(0.0);
        let loss = (-diff).max(0.0);
        avg_gain = (avg_gain * (divisor - 1.0) + gain) / divisor;
        avg_loss = (avg_loss * (divisor - 1.0) + loss) / divisor;
    }

    if avg_loss == 0.0 {
        return IndicatorResult::valid(NAME, 100.0);
    }

    let rs = avg_gain / avg_loss;
    IndicatorResult::valid(NAME, 100.0 - 100.0 / (1.0 + rs))
}

#[cfg(test)]
mod tests {
    use coinscope_core::{PricePoint, UtcDateTime};

    use super::*;

    fn series(closes: &[f64]) -> Series {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let ts = UtcDateTime::from_unix_timestamp(i as i64 * 86_400).expect("timestamp");
                PricePoint::new(ts, close, close, close, close, 100.0).expect("valid point")
            })
            .collect();
        Series::new(points).expect("valid series")
    }

    #[test]
    fn all_gains_yield_exactly_one_hundred() {
        let closes: Vec<f64> = (1..=30).map(f64::from).collect();
        let s = series(&closes);
        assert_eq!(rsi(&s, 14).value, Some(100.0));
    }

    #[test]
    fn all_losses_yield_zero() {
        let closes: Vec<f64> = (1..=30).rev().map(f64::from).collect();
        let s = series(&closes);
        let value = rsi(&s, 14).value.expect("valid");
        assert!(value.abs() < 1e-9);
    }

    #[test]
    fn flat_series_counts_as_fully_bullish() {
        // No losses in the window, so the no-division branch applies.
        let s = series(&[5.0; 20]);
        assert_eq!(rsi(&s, 14).value, Some(100.0));
    }

    #[test]
    fn balanced_moves_sit_near_fifty() {
        let closes: Vec<f64> = (0..40)
            .map(|t| 100.0 + if t % 2 == 0 { 0.0 } else { 1.0 })
            .collect();
        let s = series(&closes);
        let value = rsi(&s, 14).value.expect("valid");
        assert!(value > 35.0 && value < 65.0, "rsi was {value}");
    }

    #[test]
    fn invalid_without_enough_transitions() {
        let closes: Vec<f64> = (1..=14).map(f64::from).collect();
        let s = series(&closes);
        assert!(!rsi(&s, 14).is_valid());
        assert!(!rsi(&s, 0).is_valid());
    }
}
