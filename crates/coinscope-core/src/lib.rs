//! Core contracts for coinscope.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - Score report and recommendation label types
//! - Structured validation errors

pub mod domain;
pub mod error;

pub use domain::{
    AssetSnapshot, DataFlags, Mention, MentionSource, PricePoint, Recommendation, ScoreReport,
    Series, Symbol, UtcDateTime,
};
pub use error::{CoreError, ValidationError};
