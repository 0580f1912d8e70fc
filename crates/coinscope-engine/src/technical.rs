//! Technical scorer: maps each valid indicator to a signal in [-1, 1] and
//! fuses them into one weighted technical score.

use coinscope_core::{Series, ValidationError};
use serde::{Deserialize, Serialize};

use crate::indicators::{
    bollinger_bands, macd, moving_average, rsi, volume_trend, MaKind, MacdParams,
};

/// Relative weight of each indicator in the fused score.
///
/// Invalid indicators are excluded at scoring time and the remaining weights
/// renormalized to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TechnicalWeights {
    pub macd: f64,
    pub rsi: f64,
    pub bollinger: f64,
    pub ma_cross: f64,
    pub volume: f64,
}

impl TechnicalWeights {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let weights = [self.macd, self.rsi, self.bollinger, self.ma_cross, self.volume];
        let all_non_negative = weights.iter().all(|w| w.is_finite() && *w >= 0.0);
        if !all_non_negative || weights.iter().sum::<f64>() <= 0.0 {
            return Err(ValidationError::InvalidWeights);
        }
        Ok(())
    }
}

impl Default for TechnicalWeights {
    fn default() -> Self {
        Self {
            macd: 0.30,
            rsi: 0.25,
            bollinger: 0.20,
            ma_cross: 0.15,
            volume: 0.10,
        }
    }
}

/// Tunable parameters for the technical scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TechnicalConfig {
    pub weights: TechnicalWeights,
    pub macd_params: MacdParams,
    pub rsi_period: usize,
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    pub bollinger_period: usize,
    pub bollinger_std_dev: f64,
    pub ma_short_period: usize,
    pub ma_long_period: usize,
    pub volume_period: usize,
    /// Histogram magnitude, as a fraction of the latest close, that counts
    /// as a full-strength MACD signal.
    pub macd_saturation: f64,
    /// Relative EMA spread that counts as a full-strength crossover signal.
    pub ma_saturation: f64,
    /// Normalized volume slope that counts as a full-strength signal.
    pub volume_saturation: f64,
}

impl TechnicalConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.weights.validate()?;

        let periods_ok = self.macd_params.is_well_formed()
            && self.rsi_period >= 1
            && self.bollinger_period >= 1
            && self.ma_short_period >= 1
            && self.ma_short_period < self.ma_long_period
            && self.volume_period >= 2;
        let thresholds_ok = self.rsi_oversold < self.rsi_overbought
            && self.macd_saturation > 0.0
            && self.ma_saturation > 0.0
            && self.volume_saturation > 0.0
            && self.bollinger_std_dev >= 0.0;

        if !periods_ok || !thresholds_ok {
            return Err(ValidationError::InvalidWeights);
        }
        Ok(())
    }
}

impl Default for TechnicalConfig {
    fn default() -> Self {
        Self {
            weights: TechnicalWeights::default(),
            macd_params: MacdParams::default(),
            rsi_period: 14,
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            ma_short_period: 12,
            ma_long_period: 26,
            volume_period: 10,
            macd_saturation: 0.002,
            ma_saturation: 0.05,
            volume_saturation: 0.1,
        }
    }
}

/// One indicator's contribution to the fused score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalContribution {
    pub name: &'static str,
    pub signal: f64,
    pub weight: f64,
}

/// Fused technical score plus supporting detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalReading {
    /// Fused score in [-1, 1]; 0 when no indicator was valid.
    pub score: f64,
    /// Contributions of the valid indicators, weights as configured.
    pub signals: Vec<SignalContribution>,
    /// Relative Bollinger band width, when computable. Feeds the
    /// volatility risk factor downstream.
    pub band_width: Option<f64>,
    /// Set when zero indicators had enough history.
    pub insufficient: bool,
}

/// Stateless scorer over immutable series input.
#[derive(Debug, Clone)]
pub struct TechnicalScorer {
    config: TechnicalConfig,
}

impl TechnicalScorer {
    pub fn new(config: TechnicalConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TechnicalConfig {
        &self.config
    }

    /// Compute all five indicators and fuse the valid ones.
    pub fn score(&self, series: &Series) -> TechnicalReading {
        let cfg = &self.config;
        let last_close = series.last().close;

        let mut signals = Vec::with_capacity(5);

        if let Some(output) = macd(series, cfg.macd_params).value {
            let scale = last_close * cfg.macd_saturation;
            let signal = if scale > 0.0 {
                (output.histogram / scale).clamp(-1.0, 1.0)
            } else {
                0.0
            };
            signals.push(SignalContribution {
                name: "macd",
                signal,
                weight: cfg.weights.macd,
            });
        }

        if let Some(value) = rsi(series, cfg.rsi_period).value {
            let mid = (cfg.rsi_oversold + cfg.rsi_overbought) / 2.0;
            let half_range = cfg.rsi_overbought - mid;
            let signal = ((mid - value) / half_range).clamp(-1.0, 1.0);
            signals.push(SignalContribution {
                name: "rsi",
                signal,
                weight: cfg.weights.rsi,
            });
        }

        let bollinger = bollinger_bands(series, cfg.bollinger_period, cfg.bollinger_std_dev);
        if let Some(output) = bollinger.value {
            let half_width = output.upper - output.middle;
            let signal = if half_width > 0.0 {
                (-(last_close - output.middle) / half_width).clamp(-1.0, 1.0)
            } else {
                0.0
            };
            signals.push(SignalContribution {
                name: "bollinger_bands",
                signal,
                weight: cfg.weights.bollinger,
            });
        }

        let short = moving_average(series, cfg.ma_short_period, MaKind::Exponential);
        let long = moving_average(series, cfg.ma_long_period, MaKind::Exponential);
        if let (Some(short_ema), Some(long_ema)) = (short.value, long.value) {
            let signal = if long_ema > 0.0 {
                (((short_ema - long_ema) / long_ema) / cfg.ma_saturation).clamp(-1.0, 1.0)
            } else {
                0.0
            };
            signals.push(SignalContribution {
                name: "ma_cross",
                signal,
                weight: cfg.weights.ma_cross,
            });
        }

        if let Some(ratio) = volume_trend(series, cfg.volume_period).value {
            let signal = (ratio / cfg.volume_saturation).clamp(-1.0, 1.0);
            signals.push(SignalContribution {
                name: "volume_trend",
                signal,
                weight: cfg.weights.volume,
            });
        }

        let total_weight: f64 = signals.iter().map(|s| s.weight).sum();
        let (score, insufficient) = if signals.is_empty() || total_weight <= 0.0 {
            (0.0, true)
        } else {
            let weighted: f64 = signals.iter().map(|s| s.signal * s.weight).sum();
            ((weighted / total_weight).clamp(-1.0, 1.0), false)
        };

        TechnicalReading {
            score,
            signals,
            band_width: bollinger.value.map(|output| output.width()),
            insufficient,
        }
    }
}

impl Default for TechnicalScorer {
    fn default() -> Self {
        Self {
            config: TechnicalConfig::default(),
        }
    }
}
