//! Caller-facing analysis facade.

use coinscope_core::{
    AssetSnapshot, DataFlags, Mention, PricePoint, ScoreReport, Series, Symbol, UtcDateTime,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::recommend::{PotentialConfig, RecommendationEngine, RiskConfig};
use crate::sentiment::{SentimentAggregator, SentimentConfig};
use crate::technical::{TechnicalConfig, TechnicalScorer};

/// Full engine configuration; every weight and threshold is tunable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub technical: TechnicalConfig,
    pub sentiment: SentimentConfig,
    pub risk: RiskConfig,
    pub potential: PotentialConfig,
}

/// One asset's inputs for batch analysis.
///
/// Carries raw candles rather than a validated [`Series`] so that a bad
/// feed for one asset surfaces as that asset's error, not a batch failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub symbol: Symbol,
    pub points: Vec<PricePoint>,
    pub mentions: Vec<Mention>,
    pub snapshot: AssetSnapshot,
}

/// Synchronous, stateless scoring facade.
///
/// All computation is pure arithmetic over caller-owned inputs; an
/// `Analyzer` holds only configuration and can be shared freely across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    technical: TechnicalScorer,
    sentiment: SentimentAggregator,
    engine: RecommendationEngine,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self, EngineError> {
        Ok(Self {
            technical: TechnicalScorer::new(config.technical)?,
            sentiment: SentimentAggregator::new(config.sentiment)?,
            engine: RecommendationEngine::new(config.risk, config.potential)?,
        })
    }

    /// Score one asset as of now.
    pub fn analyze(
        &self,
        symbol: Symbol,
        series: &Series,
        mentions: &[Mention],
        snapshot: &AssetSnapshot,
    ) -> ScoreReport {
        self.analyze_at(symbol, series, mentions, snapshot, UtcDateTime::now())
    }

    /// Score one asset with an explicit reference time.
    ///
    /// `as_of` anchors sentiment recency buckets and becomes the report
    /// timestamp, making runs reproducible.
    pub fn analyze_at(
        &self,
        symbol: Symbol,
        series: &Series,
        mentions: &[Mention],
        snapshot: &AssetSnapshot,
        as_of: UtcDateTime,
    ) -> ScoreReport {
        let technical = self.technical.score(series);
        let sentiment = self.sentiment.score(mentions, as_of);
        let assessment = self.engine.recommend(
            technical.score,
            sentiment.score,
            snapshot,
            technical.band_width,
        );

        ScoreReport {
            symbol,
            technical_score: technical.score,
            sentiment_score: sentiment.score,
            risk_score: assessment.risk_score,
            potential_score: assessment.potential_score,
            recommendation: assessment.recommendation,
            generated_at: as_of,
            flags: DataFlags {
                insufficient_technical: technical.insufficient,
                insufficient_sentiment: sentiment.insufficient,
                dropped_mentions: sentiment.dropped_mentions,
            },
        }
    }

    /// Score a batch of independent assets.
    ///
    /// Each request validates and scores on its own; one malformed feed
    /// yields one `Err` entry and never affects the others.
    pub fn analyze_batch(
        &self,
        requests: Vec<AnalysisRequest>,
        as_of: UtcDateTime,
    ) -> Vec<Result<ScoreReport, EngineError>> {
        requests
            .into_iter()
            .map(|request| {
                let series = Series::new(request.points)?;
                Ok(self.analyze_at(
                    request.symbol,
                    &series,
                    &request.mentions,
                    &request.snapshot,
                    as_of,
                ))
            })
            .collect()
    }
}
