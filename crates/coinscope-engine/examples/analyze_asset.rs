//! Score a synthetic asset end to end and print the report as JSON.
//!
//! Run with: `cargo run -p coinscope-engine --example analyze_asset`

use coinscope_core::{
    AssetSnapshot, Mention, MentionSource, PricePoint, Series, Symbol, UtcDateTime,
};
use coinscope_engine::Analyzer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base = UtcDateTime::parse("2024-06-01T00:00:00Z")?;

    // 60 days of a steady uptrend with rising volume.
    let points: Vec<PricePoint> = (0..60)
        .map(|day| {
            let ts = UtcDateTime::from_unix_timestamp(base.unix_timestamp() + day * 86_400)?;
            let close = 100.0 * 1.01f64.powi(day as i32);
            let volume = 1_000.0 * 1.05f64.powi(day as i32);
            PricePoint::new(ts, close * 0.99, close * 1.01, close * 0.98, close, volume)
        })
        .collect::<Result<_, _>>()?;
    let series = Series::new(points)?;

    let as_of = UtcDateTime::from_unix_timestamp(base.unix_timestamp() + 60 * 86_400)?;
    let mentions = vec![
        Mention::new(as_of.checked_add_hours(-2).ok_or("timestamp")?, MentionSource::Twitter, 0.8, 120.0)?,
        Mention::new(as_of.checked_add_hours(-30).ok_or("timestamp")?, MentionSource::Reddit, 0.4, 45.0)?,
        Mention::new(as_of.checked_add_hours(-70).ok_or("timestamp")?, MentionSource::Twitter, -0.2, 10.0)?,
    ];

    let symbol = Symbol::parse("SOL")?;
    let snapshot = AssetSnapshot::new(
        symbol.clone(),
        70_000_000_000.0,
        460_000_000.0,
        1_500.0,
        2_500_000_000.0,
    )?;

    let analyzer = Analyzer::default();
    let report = analyzer.analyze_at(symbol, &series, &mentions, &snapshot, as_of);

    println!("{}", serde_json::to_string_pretty(&report)?);
    println!("\n{}: {}", report.recommendation, report.recommendation.summary());
    Ok(())
}
