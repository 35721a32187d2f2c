//! Axis planning and the rendering-sink contract.

use std::io;

use serde::{Deserialize, Serialize};

use crate::{DateWindow, ProjectedSeries, Symbol, ValidationError};

/// Axis layout and title for one rendered chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    /// Price-axis tick values, ascending.
    pub price_ticks: Vec<f64>,
    /// One date-axis tick every this many days.
    pub date_tick_interval_days: u32,
}

/// Full payload handed to a rendering sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub symbol: Symbol,
    pub spec: ChartSpec,
    pub series: ProjectedSeries,
}

/// Rendering seam. Sinks own all visual layout; the core only supplies the
/// aligned series and its axis configuration.
pub trait ChartSink {
    fn render(&mut self, chart: &ChartData) -> io::Result<()>;
}

/// Derives the axis layout for a projected series.
///
/// Both tick steps must be at least 1; zero steps cannot space an axis.
pub fn plan_axes(
    symbol: &Symbol,
    window: &DateWindow,
    series: &ProjectedSeries,
    price_step: u32,
    date_step: u32,
) -> Result<ChartSpec, ValidationError> {
    if price_step == 0 {
        return Err(ValidationError::InvalidTickStep { axis: "price" });
    }
    if date_step == 0 {
        return Err(ValidationError::InvalidTickStep { axis: "date" });
    }

    Ok(ChartSpec {
        title: format!("{} projections for {}", window.end.year(), symbol),
        price_ticks: price_ticks(series, price_step),
        date_tick_interval_days: date_step,
    })
}

/// Ticks run from one step below the rounded series minimum up past the
/// series maximum, so every plotted value lies between the outermost ticks.
fn price_ticks(series: &ProjectedSeries, step: u32) -> Vec<f64> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for point in &series.points {
        for value in [point.actual, point.expected, point.bull, point.bear] {
            lo = lo.min(value);
            hi = hi.max(value);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }

    let step = f64::from(step);
    let mut tick = (lo / step).round() * step - step;
    let mut ticks = Vec::new();
    while tick < hi + step {
        ticks.push(tick);
        tick += step;
    }
    ticks
}
