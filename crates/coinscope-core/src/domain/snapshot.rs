use serde::{Deserialize, Serialize};

use super::{validate_non_negative, Symbol};
use crate::ValidationError;

/// Per-run asset metadata supplied by an external collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSnapshot {
    pub symbol: Symbol,
    pub market_cap: f64,
    pub circulating_supply: f64,
    pub age_in_days: f64,
    pub avg_daily_volume: f64,
}

impl AssetSnapshot {
    pub fn new(
        symbol: Symbol,
        market_cap: f64,
        circulating_supply: f64,
        age_in_days: f64,
        avg_daily_volume: f64,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("market_cap", market_cap)?;
        validate_non_negative("circulating_supply", circulating_supply)?;
        validate_non_negative("age_in_days", age_in_days)?;
        validate_non_negative("avg_daily_volume", avg_daily_volume)?;

        Ok(Self {
            symbol,
            market_cap,
            circulating_supply,
            age_in_days,
            avg_daily_volume,
        })
    }
}
