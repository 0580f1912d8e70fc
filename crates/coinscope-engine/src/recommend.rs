//! Recommendation engine: fuses technical and sentiment scores with asset
//! metadata into risk and potential scores, then applies a fixed decision
//! table to pick the label.

use coinscope_core::{AssetSnapshot, Recommendation, ValidationError};
use serde::{Deserialize, Serialize};

/// Relative weight of each risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskWeights {
    pub market_cap: f64,
    pub age: f64,
    pub liquidity: f64,
    pub volatility: f64,
}

impl RiskWeights {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let weights = [self.market_cap, self.age, self.liquidity, self.volatility];
        let all_non_negative = weights.iter().all(|w| w.is_finite() && *w >= 0.0);
        if !all_non_negative || weights.iter().sum::<f64>() <= 0.0 {
            return Err(ValidationError::InvalidWeights);
        }
        Ok(())
    }
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            market_cap: 0.30,
            age: 0.25,
            liquidity: 0.25,
            volatility: 0.20,
        }
    }
}

/// Tunable risk-factor normalization thresholds.
///
/// Each "comfort" level is the point at which that factor stops contributing
/// risk: assets at or above it (or, for volatility, at or below it) are
/// considered safe on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    pub weights: RiskWeights,
    /// Market cap (USD) at which cap risk reaches 0.
    pub cap_comfort: f64,
    /// Asset age (days) at which age risk reaches 0.
    pub age_comfort_days: f64,
    /// Average daily volume (USD) at which liquidity risk reaches 0.
    pub liquidity_comfort: f64,
    /// Relative Bollinger band width at which volatility risk saturates.
    pub width_comfort: f64,
}

impl RiskConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.weights.validate()?;
        let ok = self.cap_comfort > 0.0
            && self.age_comfort_days > 0.0
            && self.liquidity_comfort > 0.0
            && self.width_comfort > 0.0;
        if !ok {
            return Err(ValidationError::InvalidWeights);
        }
        Ok(())
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            weights: RiskWeights::default(),
            cap_comfort: 1_000_000_000.0,
            age_comfort_days: 365.0,
            liquidity_comfort: 10_000_000.0,
            width_comfort: 0.25,
        }
    }
}

/// Tunable potential-score fusion parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PotentialConfig {
    pub technical_weight: f64,
    pub sentiment_weight: f64,
    /// Fraction of the risk score subtracted from the potential base.
    pub risk_discount: f64,
    /// How much strongly positive, agreeing signals soften the discount,
    /// in [0, 1]. They soften it, never cancel it.
    pub strength_relief: f64,
}

impl PotentialConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let weights_ok = self.technical_weight.is_finite()
            && self.technical_weight >= 0.0
            && self.sentiment_weight.is_finite()
            && self.sentiment_weight >= 0.0
            && self.technical_weight + self.sentiment_weight > 0.0;
        let knobs_ok = (0.0..=1.0).contains(&self.risk_discount)
            && (0.0..=1.0).contains(&self.strength_relief);
        if !weights_ok || !knobs_ok {
            return Err(ValidationError::InvalidWeights);
        }
        Ok(())
    }
}

impl Default for PotentialConfig {
    fn default() -> Self {
        Self {
            technical_weight: 0.6,
            sentiment_weight: 0.4,
            risk_discount: 0.5,
            strength_relief: 0.5,
        }
    }
}

/// Risk, potential, and label for one asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub risk_score: f64,
    pub potential_score: f64,
    pub recommendation: Recommendation,
}

/// Stateless fusion of scores and metadata into a recommendation.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    risk: RiskConfig,
    potential: PotentialConfig,
}

impl RecommendationEngine {
    pub fn new(risk: RiskConfig, potential: PotentialConfig) -> Result<Self, ValidationError> {
        risk.validate()?;
        potential.validate()?;
        Ok(Self { risk, potential })
    }

    /// Risk score in [0, 1]: rises with low cap, low age, low liquidity,
    /// and wide Bollinger bands. Factors without input data (no band width)
    /// are excluded and the remaining weights renormalized.
    pub fn risk_score(&self, snapshot: &AssetSnapshot, band_width: Option<f64>) -> f64 {
        let cfg = &self.risk;
        let w = &cfg.weights;

        let mut weighted = w.market_cap * shortfall(snapshot.market_cap, cfg.cap_comfort)
            + w.age * shortfall(snapshot.age_in_days, cfg.age_comfort_days)
            + w.liquidity * shortfall(snapshot.avg_daily_volume, cfg.liquidity_comfort);
        let mut total = w.market_cap + w.age + w.liquidity;

        if let Some(width) = band_width {
            weighted += w.volatility * (width / cfg.width_comfort).clamp(0.0, 1.0);
            total += w.volatility;
        }

        if total <= 0.0 {
            // Only the volatility weight is configured and no width arrived.
            return 0.5;
        }

        (weighted / total).clamp(0.0, 1.0)
    }

    /// Potential score in [0, 1]: technical and sentiment rescaled from
    /// [-1, 1], fused, then discounted by risk.
    pub fn potential_score(&self, technical: f64, sentiment: f64, risk: f64) -> f64 {
        let cfg = &self.potential;
        let technical = technical.clamp(-1.0, 1.0);
        let sentiment = sentiment.clamp(-1.0, 1.0);
        let risk = risk.clamp(0.0, 1.0);

        let base = (cfg.technical_weight * rescale(technical)
            + cfg.sentiment_weight * rescale(sentiment))
            / (cfg.technical_weight + cfg.sentiment_weight);

        let strength = technical.min(sentiment).max(0.0);
        let discount = cfg.risk_discount * (1.0 - cfg.strength_relief * strength);

        (base * (1.0 - discount * risk)).clamp(0.0, 1.0)
    }

    /// Fixed decision table on (potential, risk). Rows are evaluated top to
    /// bottom; the first match wins.
    pub fn label(potential_score: f64, risk_score: f64) -> Recommendation {
        if potential_score >= 0.75 && risk_score < 0.4 {
            Recommendation::StrongBuy
        } else if potential_score >= 0.6 && risk_score < 0.6 {
            Recommendation::Buy
        } else if (0.4..=0.6).contains(&potential_score) {
            Recommendation::Hold
        } else if potential_score < 0.4 && risk_score < 0.7 {
            Recommendation::Sell
        } else if risk_score >= 0.7 {
            Recommendation::Avoid
        } else {
            // potential above 0.6 with risk in [0.6, 0.7)
            Recommendation::Hold
        }
    }

    pub fn recommend(
        &self,
        technical: f64,
        sentiment: f64,
        snapshot: &AssetSnapshot,
        band_width: Option<f64>,
    ) -> Assessment {
        let risk_score = self.risk_score(snapshot, band_width);
        let potential_score = self.potential_score(technical, sentiment, risk_score);

        Assessment {
            risk_score,
            potential_score,
            recommendation: Self::label(potential_score, risk_score),
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self {
            risk: RiskConfig::default(),
            potential: PotentialConfig::default(),
        }
    }
}

fn rescale(score: f64) -> f64 {
    (score + 1.0) / 2.0
}

/// How far `value` falls short of the comfort level, in [0, 1].
fn shortfall(value: f64, comfort: f64) -> f64 {
    1.0 - (value / comfort).clamp(0.0, 1.0)
}
