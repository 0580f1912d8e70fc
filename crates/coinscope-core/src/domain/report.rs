use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::{Symbol, UtcDateTime};

/// Discrete investment recommendation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    Avoid,
}

impl Recommendation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StrongBuy => "STRONG_BUY",
            Self::Buy => "BUY",
            Self::Hold => "HOLD",
            Self::Sell => "SELL",
            Self::Avoid => "AVOID",
        }
    }

    /// One-line human-readable gloss for report output.
    pub const fn summary(self) -> &'static str {
        match self {
            Self::StrongBuy => "Strong buy - exceptional opportunity with managed risk",
            Self::Buy => "Buy - favorable conditions for investment",
            Self::Hold => "Hold - monitor for better entry points",
            Self::Sell => "Sell - weak signals, consider reducing exposure",
            Self::Avoid => "Avoid - risk profile outweighs any upside",
        }
    }
}

impl Display for Recommendation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data-quality conditions surfaced inline with a report.
///
/// Insufficient data is never an error: partial results remain useful, so the
/// engine scores what it can and flags what it could not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFlags {
    pub insufficient_technical: bool,
    pub insufficient_sentiment: bool,
    pub dropped_mentions: usize,
}

/// Final scoring output for one asset, one run.
///
/// Immutable after creation and owned by the caller; the engine retains
/// nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub symbol: Symbol,
    pub technical_score: f64,
    pub sentiment_score: f64,
    pub risk_score: f64,
    pub potential_score: f64,
    pub recommendation: Recommendation,
    pub generated_at: UtcDateTime,
    pub flags: DataFlags,
}
