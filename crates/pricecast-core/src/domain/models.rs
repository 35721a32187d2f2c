use serde::{Deserialize, Serialize};

use crate::{TradingDate, ValidationError};

/// Single observed daily close for an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: TradingDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: TradingDate, close: f64) -> Result<Self, ValidationError> {
        validate_non_negative("close", close)?;
        Ok(Self { date, close })
    }
}

/// Inclusive calendar window, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: TradingDate,
    pub end: TradingDate,
}

impl DateWindow {
    pub fn new(start: TradingDate, end: TradingDate) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::WindowOutOfOrder {
                start: start.format_ymd(),
                end: end.format_ymd(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: TradingDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whole days spanned by the window; zero when start and end coincide.
    pub fn span_days(&self) -> i64 {
        self.end.days_since(self.start)
    }
}

/// Analyst-supplied terminal prices for the end of the window.
///
/// No ordering is enforced between the three: a bear target above the
/// expected one is unusual but valid input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTargets {
    pub expected: f64,
    pub bull: f64,
    pub bear: f64,
}

impl ScenarioTargets {
    pub fn new(expected: f64, bull: f64, bear: f64) -> Result<Self, ValidationError> {
        validate_non_negative("expected", expected)?;
        validate_non_negative("bull", bull)?;
        validate_non_negative("bear", bear)?;
        Ok(Self {
            expected,
            bull,
            bear,
        })
    }
}

/// One output row: the observed close aligned with all three projections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub date: TradingDate,
    pub actual: f64,
    pub expected: f64,
    pub bull: f64,
    pub bear: f64,
}

/// Engine output, ascending by date, one row per in-window close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedSeries {
    pub points: Vec<ProjectedPoint>,
}

impl ProjectedSeries {
    pub fn new(points: Vec<ProjectedPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
