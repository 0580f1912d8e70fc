//! Sentiment aggregator: reduces unordered social mentions into one
//! recency-weighted, confidence-adjusted score in [-1, 1].

use coinscope_core::{Mention, MentionSource, UtcDateTime, ValidationError};
use serde::{Deserialize, Serialize};

/// Tunable parameters for sentiment aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentConfig {
    /// Width of each recency bucket, in hours.
    pub bucket_hours: i64,
    /// Number of distinct recent buckets before everything falls into
    /// the trailing "older" bucket.
    pub recent_buckets: usize,
    /// Per-bucket exponential decay factor, in (0, 1].
    pub decay: f64,
    /// Total engagement weight below which the score is scaled toward 0.
    pub min_total_weight: f64,
    /// Source base weights, multiplied with per-mention engagement weight.
    pub twitter_weight: f64,
    pub reddit_weight: f64,
}

impl SentimentConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let ok = self.bucket_hours >= 1
            && self.recent_buckets >= 1
            && self.decay > 0.0
            && self.decay <= 1.0
            && self.min_total_weight > 0.0
            && self.twitter_weight.is_finite()
            && self.twitter_weight >= 0.0
            && self.reddit_weight.is_finite()
            && self.reddit_weight >= 0.0;
        if !ok {
            return Err(ValidationError::InvalidWeights);
        }
        Ok(())
    }

    pub fn source_weight(&self, source: MentionSource) -> f64 {
        match source {
            MentionSource::Twitter => self.twitter_weight,
            MentionSource::Reddit => self.reddit_weight,
        }
    }
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            bucket_hours: 24,
            recent_buckets: 2,
            decay: 0.5,
            min_total_weight: 25.0,
            twitter_weight: 1.0,
            reddit_weight: 0.8,
        }
    }
}

/// Aggregated sentiment plus supporting detail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentReading {
    /// Aggregate score in [-1, 1]; 0 when nothing usable arrived.
    pub score: f64,
    /// Effective engagement weight that backed the score.
    pub total_weight: f64,
    /// Mentions that survived validation.
    pub mention_count: usize,
    /// Mentions dropped for invalid polarity or weight.
    pub dropped_mentions: usize,
    /// Set when no usable mention weight was available.
    pub insufficient: bool,
}

impl SentimentReading {
    fn empty(dropped_mentions: usize, mention_count: usize) -> Self {
        Self {
            score: 0.0,
            total_weight: 0.0,
            mention_count,
            dropped_mentions,
            insufficient: true,
        }
    }
}

/// Stateless aggregator over caller-owned mention collections.
#[derive(Debug, Clone)]
pub struct SentimentAggregator {
    config: SentimentConfig,
}

impl SentimentAggregator {
    pub fn new(config: SentimentConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SentimentConfig {
        &self.config
    }

    /// Aggregate mentions into one score, aged relative to `as_of`.
    ///
    /// Invalid mentions are dropped and counted; they never fail the run.
    pub fn score(&self, mentions: &[Mention], as_of: UtcDateTime) -> SentimentReading {
        let cfg = &self.config;

        let mut valid: Vec<&Mention> = Vec::with_capacity(mentions.len());
        let mut dropped = 0usize;
        for mention in mentions {
            if mention.validate().is_ok() {
                valid.push(mention);
            } else {
                dropped += 1;
            }
        }

        if valid.is_empty() {
            return SentimentReading::empty(dropped, 0);
        }

        // Input arrives unordered; sort before bucketing for deterministic
        // processing.
        valid.sort_by_key(|m| m.ts);

        let bucket_count = cfg.recent_buckets + 1;
        let mut polarity_weight = vec![0.0f64; bucket_count];
        let mut bucket_weight = vec![0.0f64; bucket_count];
        let mut total_weight = 0.0f64;

        for mention in &valid {
            let age_hours = mention.ts.hours_before(as_of);
            // Future-dated mentions (collaborator clock skew) count as newest.
            let bucket = if age_hours < 0 {
                0
            } else {
                ((age_hours / cfg.bucket_hours) as usize).min(cfg.recent_buckets)
            };

            let weight = mention.weight * cfg.source_weight(mention.source);
            polarity_weight[bucket] += mention.polarity * weight;
            bucket_weight[bucket] += weight;
            total_weight += weight;
        }

        if total_weight <= 0.0 {
            return SentimentReading::empty(dropped, valid.len());
        }

        let mut combined = 0.0;
        let mut decay_total = 0.0;
        for bucket in 0..bucket_count {
            if bucket_weight[bucket] <= 0.0 {
                continue;
            }
            let decay = cfg.decay.powi(bucket as i32);
            combined += (polarity_weight[bucket] / bucket_weight[bucket]) * decay;
            decay_total += decay;
        }
        combined /= decay_total;

        let confidence = (total_weight / cfg.min_total_weight).min(1.0);

        SentimentReading {
            score: (combined * confidence).clamp(-1.0, 1.0),
            total_weight,
            mention_count: valid.len(),
            dropped_mentions: dropped,
            insufficient: false,
        }
    }
}

impl Default for SentimentAggregator {
    fn default() -> Self {
        Self {
            config: SentimentConfig::default(),
        }
    }
}
