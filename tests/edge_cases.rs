//! Edge-case and error-handling behavior across the engine boundary.

use coinscope_tests::{
    mention_hours_ago, reference_time, snapshot, sustained_uptrend, AnalysisRequest, Analyzer,
    EngineError, Mention, MentionSource, PricePoint, Series, Symbol, UtcDateTime,
    ValidationError,
};

fn ts(seconds: i64) -> UtcDateTime {
    UtcDateTime::from_unix_timestamp(1_700_000_000 + seconds).expect("timestamp")
}

fn flat_point(seconds: i64, close: f64) -> PricePoint {
    PricePoint::new(ts(seconds), close, close, close, close, 500.0).expect("valid point")
}

#[test]
fn when_a_series_is_empty_it_is_rejected_before_any_indicator_runs() {
    let err = Series::new(Vec::new()).expect_err("must fail");
    assert!(matches!(err, ValidationError::EmptySeries));
}

#[test]
fn when_timestamps_go_backwards_the_series_is_rejected() {
    let err = Series::new(vec![
        flat_point(0, 10.0),
        flat_point(120, 11.0),
        flat_point(60, 12.0),
    ])
    .expect_err("must fail");
    assert!(matches!(err, ValidationError::NonMonotonicSeries { index: 2 }));
}

#[test]
fn when_timestamps_repeat_the_series_is_rejected() {
    let err = Series::new(vec![flat_point(0, 10.0), flat_point(0, 11.0)])
        .expect_err("must fail");
    assert!(matches!(err, ValidationError::NonMonotonicSeries { index: 1 }));
}

#[test]
fn when_candle_fields_are_nan_the_point_is_rejected() {
    let err = PricePoint::new(ts(0), f64::NAN, 10.0, 9.0, 9.5, 100.0).expect_err("must fail");
    assert!(matches!(err, ValidationError::NonFiniteValue { field: "open" }));
}

#[test]
fn when_one_asset_in_a_batch_fails_the_others_still_score() {
    let analyzer = Analyzer::default();
    let good_series: Vec<PricePoint> = sustained_uptrend(40).points().to_vec();

    let requests = vec![
        AnalysisRequest {
            symbol: Symbol::parse("AAA").expect("symbol"),
            points: Vec::new(),
            mentions: Vec::new(),
            snapshot: snapshot(1_000_000_000.0, 500.0, 10_000_000.0),
        },
        AnalysisRequest {
            symbol: Symbol::parse("BBB").expect("symbol"),
            points: good_series,
            mentions: vec![mention_hours_ago(4, MentionSource::Twitter, 0.4, 30.0)],
            snapshot: snapshot(1_000_000_000.0, 500.0, 10_000_000.0),
        },
    ];

    let results = analyzer.analyze_batch(requests, reference_time());

    assert!(matches!(
        results[0],
        Err(EngineError::Validation(ValidationError::EmptySeries))
    ));
    let report = results[1].as_ref().expect("healthy asset must score");
    assert_eq!(report.symbol.as_str(), "BBB");
}

#[test]
fn when_inputs_are_extreme_no_nan_reaches_the_report() {
    let analyzer = Analyzer::default();

    // Near-zero prices, zero volume, zero-weight mentions, zero-value
    // snapshot: every division-prone path at once.
    let points: Vec<PricePoint> = (0..40)
        .map(|i| {
            let close = 1e-9;
            PricePoint::new(ts(i * 60), close, close, close, close, 0.0).expect("valid point")
        })
        .collect();
    let series = Series::new(points).expect("valid series");
    let mentions = vec![Mention {
        ts: reference_time(),
        source: MentionSource::Reddit,
        polarity: 1.0,
        weight: 0.0,
    }];
    let snap = snapshot(0.0, 0.0, 0.0);

    let report = analyzer.analyze_at(
        Symbol::parse("DUST").expect("symbol"),
        &series,
        &mentions,
        &snap,
        reference_time(),
    );

    for value in [
        report.technical_score,
        report.sentiment_score,
        report.risk_score,
        report.potential_score,
    ] {
        assert!(value.is_finite(), "report leaked a non-finite value");
    }
    assert!((-1.0..=1.0).contains(&report.technical_score));
    assert!((-1.0..=1.0).contains(&report.sentiment_score));
    assert!((0.0..=1.0).contains(&report.risk_score));
    assert!((0.0..=1.0).contains(&report.potential_score));

    // Serialized form must be valid JSON with no NaN tokens.
    let json = serde_json::to_string(&report).expect("report must serialize");
    assert!(!json.contains("NaN"));
}

#[test]
fn when_flags_report_insufficiency_the_report_is_still_usable() {
    let analyzer = Analyzer::default();
    let series = Series::new(vec![flat_point(0, 10.0), flat_point(60, 10.0)])
        .expect("valid series");
    let snap = snapshot(2_000_000_000.0, 800.0, 20_000_000.0);

    let report = analyzer.analyze_at(
        Symbol::parse("NEW").expect("symbol"),
        &series,
        &[],
        &snap,
        reference_time(),
    );

    assert!(report.flags.insufficient_technical);
    assert!(report.flags.insufficient_sentiment);
    assert_eq!(report.technical_score, 0.0);
    assert_eq!(report.sentiment_score, 0.0);
    // Neutral signals on a safe asset land in the HOLD band.
    assert_eq!(report.recommendation.as_str(), "HOLD");
}
