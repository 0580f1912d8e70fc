//! Behavior-driven tests for the recommendation engine and the full
//! analyze pipeline around it.

use coinscope_engine::RecommendationEngine;
use coinscope_tests::{
    mention_hours_ago, reference_time, snapshot, sustained_uptrend, Analyzer, MentionSource,
    Recommendation, Symbol,
};

#[test]
fn when_inputs_repeat_the_label_is_identical() {
    // The decision table is a pure function of (potential, risk).
    let grid = [0.0, 0.2, 0.39, 0.4, 0.6, 0.61, 0.74, 0.75, 0.9, 1.0];
    for &potential in &grid {
        for &risk in &grid {
            let first = RecommendationEngine::label(potential, risk);
            let second = RecommendationEngine::label(potential, risk);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn when_rows_overlap_the_first_match_wins() {
    use Recommendation::*;
    // potential 0.5 with extreme risk matches the HOLD row before AVOID
    assert_eq!(RecommendationEngine::label(0.5, 0.95), Hold);
    // low potential with extreme risk falls through SELL to AVOID
    assert_eq!(RecommendationEngine::label(0.1, 0.95), Avoid);
    // high potential cannot reach STRONG_BUY once risk crosses 0.4
    assert_eq!(RecommendationEngine::label(0.9, 0.45), Buy);
}

#[test]
fn when_an_asset_is_young_and_small_risk_suppresses_strong_signals() {
    // Given: strong agreeing signals on a $5M, 15-day-old asset with
    // adequate liquidity
    let engine = RecommendationEngine::default();
    let snap = snapshot(5_000_000.0, 15.0, 10_000_000.0);

    // When
    let assessment = engine.recommend(0.8, 0.8, &snap, None);

    // Then: low-cap/young-age factors push risk past 0.6, which keeps the
    // label below STRONG_BUY despite the signals
    assert!(
        assessment.risk_score >= 0.6,
        "risk was {}",
        assessment.risk_score
    );
    assert!(assessment.risk_score < 0.7);
    assert_ne!(assessment.recommendation, Recommendation::StrongBuy);
    assert!(matches!(
        assessment.recommendation,
        Recommendation::Buy | Recommendation::Hold
    ));
}

#[test]
fn when_an_established_asset_shows_strong_signals_it_earns_strong_buy() {
    let engine = RecommendationEngine::default();
    let snap = snapshot(5_000_000_000.0, 2_000.0, 50_000_000.0);

    let assessment = engine.recommend(0.9, 0.9, &snap, Some(0.05));

    assert!(assessment.risk_score < 0.4);
    assert!(assessment.potential_score >= 0.75);
    assert_eq!(assessment.recommendation, Recommendation::StrongBuy);
}

#[test]
fn when_signals_are_weak_and_risk_is_extreme_the_label_is_avoid() {
    let engine = RecommendationEngine::default();
    let snap = snapshot(500_000.0, 3.0, 20_000.0);

    let assessment = engine.recommend(-0.6, -0.4, &snap, Some(0.5));

    assert!(assessment.risk_score >= 0.7);
    assert!(assessment.potential_score < 0.4);
    assert_eq!(assessment.recommendation, Recommendation::Avoid);
}

#[test]
fn when_the_full_pipeline_runs_the_report_carries_the_assessment() {
    // Given: a healthy uptrend, fresh positive chatter, a mature asset
    let analyzer = Analyzer::default();
    let series = sustained_uptrend(60);
    let mentions = vec![
        mention_hours_ago(2, MentionSource::Twitter, 0.7, 80.0),
        mention_hours_ago(20, MentionSource::Reddit, 0.5, 30.0),
    ];
    let snap = snapshot(5_000_000_000.0, 2_000.0, 50_000_000.0);

    // When
    let report = analyzer.analyze_at(
        Symbol::parse("ETH").expect("symbol"),
        &series,
        &mentions,
        &snap,
        reference_time(),
    );

    // Then: label agrees with the decision table applied to the report's
    // own potential/risk pair
    assert_eq!(
        report.recommendation,
        RecommendationEngine::label(report.potential_score, report.risk_score)
    );
    assert!(report.technical_score > 0.0);
    assert!(report.sentiment_score > 0.0);
    assert!(!report.flags.insufficient_technical);
    assert!(!report.flags.insufficient_sentiment);
    assert_eq!(report.generated_at, reference_time());
}
