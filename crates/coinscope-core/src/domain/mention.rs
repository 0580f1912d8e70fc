use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::UtcDateTime;
use crate::ValidationError;

/// Social platform a mention was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentionSource {
    Twitter,
    Reddit,
}

impl MentionSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Reddit => "reddit",
        }
    }
}

impl Display for MentionSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pre-scored social-media mention.
///
/// Polarity comes from an upstream sentiment model; weight is an engagement
/// count (likes, upvotes). Mentions arrive unordered and unvalidated from
/// collaborators, so `validate` is advisory: the sentiment aggregator drops
/// invalid records and reports how many it dropped instead of failing the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    pub ts: UtcDateTime,
    pub source: MentionSource,
    pub polarity: f64,
    pub weight: f64,
}

impl Mention {
    pub fn new(
        ts: UtcDateTime,
        source: MentionSource,
        polarity: f64,
        weight: f64,
    ) -> Result<Self, ValidationError> {
        let mention = Self {
            ts,
            source,
            polarity,
            weight,
        };
        mention.validate()?;
        Ok(mention)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.polarity.is_finite() || self.polarity < -1.0 || self.polarity > 1.0 {
            return Err(ValidationError::PolarityOutOfRange {
                value: self.polarity,
            });
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(ValidationError::NegativeWeight { value: self.weight });
        }
        Ok(())
    }
}
