//! Behavior-driven tests for the FMP provider feeding the pipeline.
//!
//! These tests verify HOW provider responses travel through the whole
//! system: payload normalization, error classification, and the
//! no-partial-output guarantee for malformed payloads.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use pricecast_core::{
    pipeline, DateWindow, FmpAdapter, HttpClient, HttpError, HttpRequest, HttpResponse,
    PipelineError, ProjectionConfig, ProjectionError, ScenarioTargets, SourceErrorKind, Symbol,
    TradingDate,
};

/// Transport stub replying with one canned response.
struct StubHttpClient {
    response: Result<HttpResponse, HttpError>,
}

impl StubHttpClient {
    fn replying(response: Result<HttpResponse, HttpError>) -> Arc<Self> {
        Arc::new(Self { response })
    }
}

impl HttpClient for StubHttpClient {
    fn execute<'a>(
        &'a self,
        _request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

fn config() -> ProjectionConfig {
    let date = |input: &str| TradingDate::parse(input).expect("test date must parse");
    ProjectionConfig {
        symbol: Symbol::parse("TSLA").expect("valid symbol"),
        window: DateWindow::new(date("2023-01-01"), date("2023-12-31"))
            .expect("test window must build"),
        targets: ScenarioTargets::new(300.0, 400.0, 200.0).expect("test targets must build"),
        price_tick_step: 100,
        date_tick_step: 30,
    }
}

#[tokio::test]
async fn when_fmp_replies_newest_first_the_chart_is_anchored_on_the_oldest_close() {
    // Given: a realistic newest-first FMP payload
    let body = r#"{
        "symbol": "TSLA",
        "historical": [
            {"date": "2023-12-29", "close": 248.48},
            {"date": "2023-06-30", "close": 261.77},
            {"date": "2023-01-03", "close": 108.10}
        ]
    }"#;
    let adapter = FmpAdapter::new(
        StubHttpClient::replying(Ok(HttpResponse::ok_json(body))),
        "demo-key",
    );

    // When: the pipeline runs
    let chart = pipeline::run(&adapter, config())
        .await
        .expect("pipeline should succeed");

    // Then: the series ascends and all scenarios collapse to the first close
    assert_eq!(chart.series.len(), 3);
    let first = chart.series.points[0];
    assert_eq!(first.date.format_ymd(), "2023-01-03");
    assert_eq!(first.actual, 108.10);
    assert_eq!(first.expected, 108.10);
    assert_eq!(first.bull, 108.10);
    assert_eq!(first.bear, 108.10);
}

#[tokio::test]
async fn when_fmp_returns_an_empty_history_the_failure_is_insufficient_data() {
    // Given: a well-formed but empty payload
    let adapter = FmpAdapter::new(
        StubHttpClient::replying(Ok(HttpResponse::ok_json("{}"))),
        "demo-key",
    );

    // When: the pipeline runs
    let error = pipeline::run(&adapter, config())
        .await
        .expect_err("pipeline must fail");

    // Then: the empty window surfaces as the projection engine's failure,
    // not as a provider error
    assert!(matches!(
        error,
        PipelineError::Projection(ProjectionError::InsufficientData { .. })
    ));
}

#[tokio::test]
async fn when_one_payload_date_is_malformed_no_partial_chart_is_produced() {
    // Given: a payload whose second row carries a non-calendar date
    let body = r#"{
        "historical": [
            {"date": "2023-01-03", "close": 108.10},
            {"date": "not-a-date", "close": 113.64}
        ]
    }"#;
    let adapter = FmpAdapter::new(
        StubHttpClient::replying(Ok(HttpResponse::ok_json(body))),
        "demo-key",
    );

    // When: the pipeline runs
    let error = pipeline::run(&adapter, config())
        .await
        .expect_err("pipeline must fail");

    // Then: the parse failure aborts the invocation wholesale
    match error {
        PipelineError::Source(source) => {
            assert_eq!(source.kind(), SourceErrorKind::Internal);
        }
        other => panic!("expected a source error, got: {other}"),
    }
}

#[tokio::test]
async fn when_fmp_rate_limits_the_error_is_retryable() {
    let adapter = FmpAdapter::new(
        StubHttpClient::replying(Ok(HttpResponse {
            status: 429,
            body: String::new(),
        })),
        "demo-key",
    );

    let error = pipeline::run(&adapter, config())
        .await
        .expect_err("pipeline must fail");

    match error {
        PipelineError::Source(source) => {
            assert_eq!(source.kind(), SourceErrorKind::RateLimited);
            assert!(source.retryable());
        }
        other => panic!("expected a source error, got: {other}"),
    }
}

#[tokio::test]
async fn when_the_api_key_is_rejected_the_error_is_not_retryable() {
    let adapter = FmpAdapter::new(
        StubHttpClient::replying(Ok(HttpResponse {
            status: 403,
            body: String::new(),
        })),
        "demo-key",
    );

    let error = pipeline::run(&adapter, config())
        .await
        .expect_err("pipeline must fail");

    match error {
        PipelineError::Source(source) => {
            assert_eq!(source.kind(), SourceErrorKind::InvalidRequest);
            assert!(!source.retryable());
        }
        other => panic!("expected a source error, got: {other}"),
    }
}

#[tokio::test]
async fn when_the_transport_fails_the_source_is_reported_unavailable() {
    let adapter = FmpAdapter::new(
        StubHttpClient::replying(Err(HttpError::new("connection reset"))),
        "demo-key",
    );

    let error = pipeline::run(&adapter, config())
        .await
        .expect_err("pipeline must fail");

    match error {
        PipelineError::Source(source) => {
            assert_eq!(source.kind(), SourceErrorKind::Unavailable);
            assert!(source.retryable());
        }
        other => panic!("expected a source error, got: {other}"),
    }
}
