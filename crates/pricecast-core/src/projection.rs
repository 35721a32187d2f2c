//! Linear scenario projection over an aligned daily series.

use thiserror::Error;

use crate::{
    DateWindow, PricePoint, ProjectedPoint, ProjectedSeries, ScenarioTargets, TradingDate,
};

/// Hard failure modes of the projection engine. Both are fatal to the
/// invocation; neither is retried or defaulted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("no price records fall within {start}..{end}")]
    InsufficientData {
        start: TradingDate,
        end: TradingDate,
    },
    #[error("window {start}..{end} spans zero days, so a per-day rate is undefined")]
    DegenerateWindow {
        start: TradingDate,
        end: TradingDate,
    },
}

/// Per-day price deltas, derived once per scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioRates {
    pub expected: f64,
    pub bull: f64,
    pub bear: f64,
}

impl ScenarioRates {
    pub fn derive(anchor_close: f64, targets: &ScenarioTargets, horizon_days: i64) -> Self {
        let horizon = horizon_days as f64;
        Self {
            expected: (targets.expected - anchor_close) / horizon,
            bull: (targets.bull - anchor_close) / horizon,
            bear: (targets.bear - anchor_close) / horizon,
        }
    }
}

/// Projects every record in `filtered` against the three scenario targets.
///
/// All scenarios are anchored to the first record's close. Rates divide by
/// the configured window span, not the filtered span: the series may stop
/// short of the window when future dates have no close yet, but the targets
/// belong to the window's end. Projected values are rounded to cents;
/// observed closes pass through untouched.
pub fn project(
    filtered: &[PricePoint],
    window: &DateWindow,
    targets: &ScenarioTargets,
) -> Result<ProjectedSeries, ProjectionError> {
    let anchor = filtered.first().ok_or(ProjectionError::InsufficientData {
        start: window.start,
        end: window.end,
    })?;

    let horizon_days = window.span_days();
    if horizon_days == 0 {
        return Err(ProjectionError::DegenerateWindow {
            start: window.start,
            end: window.end,
        });
    }

    let rates = ScenarioRates::derive(anchor.close, targets, horizon_days);
    let points = filtered
        .iter()
        .map(|record| {
            let days_elapsed = record.date.days_since(anchor.date) as f64;
            ProjectedPoint {
                date: record.date,
                actual: record.close,
                expected: round_cents(anchor.close + days_elapsed * rates.expected),
                bull: round_cents(anchor.close + days_elapsed * rates.bull),
                bear: round_cents(anchor.close + days_elapsed * rates.bear),
            }
        })
        .collect();

    Ok(ProjectedSeries::new(points))
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
