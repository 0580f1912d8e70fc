//! Signal-fusion scoring engine for coinscope.
//!
//! This crate contains:
//! - Pure technical-indicator functions (MACD, RSI, Bollinger, MA, volume)
//! - The technical scorer fusing indicator signals into one score
//! - The sentiment aggregator reducing social mentions to a scalar
//! - The recommendation engine mapping scores to a discrete label
//! - The caller-facing [`Analyzer`] facade
//!
//! Everything operates over immutable caller-owned inputs; independent
//! assets can be scored in parallel with no coordination.

pub mod analyzer;
pub mod error;
pub mod indicators;
pub mod recommend;
pub mod sentiment;
pub mod technical;

pub use analyzer::{AnalysisRequest, Analyzer, AnalyzerConfig};
pub use error::EngineError;
pub use indicators::{
    bollinger_bands, macd, moving_average, rsi, volume_trend, BollingerOutput, IndicatorResult,
    MaKind, MacdOutput, MacdParams,
};
pub use recommend::{
    Assessment, PotentialConfig, RecommendationEngine, RiskConfig, RiskWeights,
};
pub use sentiment::{SentimentAggregator, SentimentConfig, SentimentReading};
pub use technical::{
    SignalContribution, TechnicalConfig, TechnicalReading, TechnicalScorer, TechnicalWeights,
};
