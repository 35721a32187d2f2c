//! Behavior-driven tests for the projection pipeline.
//!
//! These tests verify HOW the system behaves end to end over an in-memory
//! price-history source: window clipping, anchoring, rate derivation, axis
//! planning, and the two hard failure modes.

use std::future::Future;
use std::pin::Pin;

use pricecast_core::{
    pipeline, DateWindow, HistoryRequest, PipelineError, PriceHistorySource, PricePoint,
    ProjectionConfig, ProjectionError, ProviderId, ScenarioTargets, SourceError, Symbol,
    TradingDate,
};

/// Deterministic in-memory source; returns its records as configured,
/// including any disorder.
struct FixedHistorySource {
    records: Vec<PricePoint>,
}

impl FixedHistorySource {
    fn with_records(records: Vec<PricePoint>) -> Self {
        Self { records }
    }
}

impl PriceHistorySource for FixedHistorySource {
    fn id(&self) -> ProviderId {
        ProviderId::Fmp
    }

    fn daily_closes<'a>(
        &'a self,
        _req: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<PricePoint>, SourceError>> + Send + 'a>> {
        let records = self.records.clone();
        Box::pin(async move { Ok(records) })
    }
}

fn date(input: &str) -> TradingDate {
    TradingDate::parse(input).expect("test date must parse")
}

fn point(input: &str, close: f64) -> PricePoint {
    PricePoint::new(date(input), close).expect("test point must build")
}

fn config(start: &str, end: &str, expected: f64, bull: f64, bear: f64) -> ProjectionConfig {
    ProjectionConfig {
        symbol: Symbol::parse("TSLA").expect("valid symbol"),
        window: DateWindow::new(date(start), date(end)).expect("test window must build"),
        targets: ScenarioTargets::new(expected, bull, bear).expect("test targets must build"),
        price_tick_step: 100,
        date_tick_step: 30,
    }
}

// =============================================================================
// Pipeline: Happy Path
// =============================================================================

#[tokio::test]
async fn when_history_covers_the_window_every_close_gains_three_projections() {
    // Given: three closes across a one-year window and targets for its end
    let source = FixedHistorySource::with_records(vec![
        point("2023-01-01", 100.0),
        point("2023-06-30", 120.0),
        point("2023-12-31", 150.0),
    ]);

    // When: the pipeline runs
    let chart = pipeline::run(&source, config("2023-01-01", "2023-12-31", 300.0, 400.0, 200.0))
        .await
        .expect("pipeline should succeed");

    // Then: one aligned row per close, anchored on day one and hitting each
    // target on the final day of the window
    assert_eq!(chart.series.len(), 3);

    let first = chart.series.points[0];
    assert_eq!(first.actual, 100.0);
    assert_eq!(first.expected, 100.0);
    assert_eq!(first.bull, 100.0);
    assert_eq!(first.bear, 100.0);

    let last = chart.series.points[2];
    assert_eq!(last.actual, 150.0);
    assert_eq!(last.expected, 300.0);
    assert_eq!(last.bull, 400.0);
    assert_eq!(last.bear, 200.0);
}

#[tokio::test]
async fn when_history_arrives_newest_first_output_is_still_ascending() {
    // Given: a provider that emits newest-first with an out-of-window extra
    let source = FixedHistorySource::with_records(vec![
        point("2023-12-31", 150.0),
        point("2023-06-30", 120.0),
        point("2023-01-01", 100.0),
        point("2022-06-01", 80.0),
    ]);

    // When: the pipeline runs
    let chart = pipeline::run(&source, config("2023-01-01", "2023-12-31", 300.0, 400.0, 200.0))
        .await
        .expect("pipeline should succeed");

    // Then: out-of-window records are gone and dates ascend
    assert_eq!(chart.series.len(), 3);
    for pair in chart.series.points.windows(2) {
        assert!(pair[0].date < pair[1].date, "dates must ascend");
    }
    assert_eq!(chart.series.points[0].actual, 100.0);
}

#[tokio::test]
async fn when_data_stops_short_rates_still_target_the_window_end() {
    // Given: a five-year window where only the first two days have closes yet
    let source = FixedHistorySource::with_records(vec![
        point("2023-01-01", 100.0),
        point("2023-01-02", 101.0),
    ]);

    // When: the pipeline runs against the full 2023..2027 horizon (1825 days)
    let chart = pipeline::run(
        &source,
        config("2023-01-01", "2027-12-31", 1925.0, 3750.0, 100.0),
    )
    .await
    .expect("pipeline should succeed");

    // Then: the day-two projections move by one day of the full-horizon rate,
    // not by a rate compressed into the two observed days
    let second = chart.series.points[1];
    assert_eq!(second.expected, 101.0); // (1925-100)/1825 = 1.0/day
    assert_eq!(second.bull, 102.0); // (3750-100)/1825 = 2.0/day
    assert_eq!(second.bear, 100.0); // (100-100)/1825 = 0.0/day
}

#[tokio::test]
async fn axis_plan_brackets_the_projected_series() {
    // Given: closes spanning a wide price range
    let source = FixedHistorySource::with_records(vec![
        point("2023-01-01", 108.1),
        point("2023-12-31", 248.5),
    ]);

    // When: the pipeline runs
    let chart = pipeline::run(&source, config("2023-01-01", "2023-12-31", 300.0, 400.0, 200.0))
        .await
        .expect("pipeline should succeed");

    // Then: the outermost price ticks bracket every plotted value
    let lows = chart
        .series
        .points
        .iter()
        .flat_map(|p| [p.actual, p.expected, p.bull, p.bear]);
    let min = lows.clone().fold(f64::INFINITY, f64::min);
    let max = lows.fold(f64::NEG_INFINITY, f64::max);

    let first = *chart.spec.price_ticks.first().expect("ticks expected");
    let last = *chart.spec.price_ticks.last().expect("ticks expected");
    assert!(first <= min);
    assert!(last >= max);
    assert_eq!(chart.spec.date_tick_interval_days, 30);
    assert_eq!(chart.spec.title, "2023 projections for TSLA");
}

// =============================================================================
// Pipeline: Failure Modes
// =============================================================================

#[tokio::test]
async fn when_no_record_falls_in_the_window_pipeline_fails_with_insufficient_data() {
    // Given: history entirely outside the configured window
    let source = FixedHistorySource::with_records(vec![
        point("2020-01-01", 50.0),
        point("2020-06-01", 60.0),
    ]);

    // When: the pipeline runs
    let error = pipeline::run(&source, config("2023-01-01", "2023-12-31", 300.0, 400.0, 200.0))
        .await
        .expect_err("pipeline must fail");

    // Then: the projection engine's empty-input failure surfaces unchanged
    assert!(matches!(
        error,
        PipelineError::Projection(ProjectionError::InsufficientData { .. })
    ));
}

#[tokio::test]
async fn when_window_start_equals_end_pipeline_fails_with_degenerate_window() {
    // Given: a record sitting exactly on a zero-span window
    let source = FixedHistorySource::with_records(vec![point("2023-01-01", 100.0)]);

    // When: the pipeline runs
    let error = pipeline::run(&source, config("2023-01-01", "2023-01-01", 300.0, 400.0, 200.0))
        .await
        .expect_err("pipeline must fail");

    // Then: the undefined per-day rate is reported, never defaulted
    assert!(matches!(
        error,
        PipelineError::Projection(ProjectionError::DegenerateWindow { .. })
    ));
}

#[tokio::test]
async fn when_the_source_fails_no_partial_series_is_produced() {
    // Given: a source that always reports the upstream as unavailable
    struct FailingSource;

    impl PriceHistorySource for FailingSource {
        fn id(&self) -> ProviderId {
            ProviderId::Fmp
        }

        fn daily_closes<'a>(
            &'a self,
            _req: HistoryRequest,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<PricePoint>, SourceError>> + Send + 'a>>
        {
            Box::pin(async move { Err(SourceError::unavailable("upstream down")) })
        }
    }

    // When: the pipeline runs
    let error = pipeline::run(
        &FailingSource,
        config("2023-01-01", "2023-12-31", 300.0, 400.0, 200.0),
    )
    .await
    .expect_err("pipeline must fail");

    // Then: the source error propagates as-is
    assert!(matches!(error, PipelineError::Source(_)));
}
