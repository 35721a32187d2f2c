//! End-to-end orchestration: fetch, clip, project, plan axes.

use thiserror::Error;

use crate::chart::{plan_axes, ChartData};
use crate::data_source::{HistoryRequest, PriceHistorySource, SourceError};
use crate::projection::{project, ProjectionError};
use crate::range::clip_to_window;
use crate::{DateWindow, ScenarioTargets, Symbol, ValidationError};

/// Everything one projection run needs, passed by value. No process-wide
/// state backs this; each invocation is independent.
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    pub symbol: Symbol,
    pub window: DateWindow,
    pub targets: ScenarioTargets,
    pub price_tick_step: u32,
    pub date_tick_step: u32,
}

/// Failure of a single pipeline invocation. Fatal; never retried internally.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub async fn run(
    source: &dyn PriceHistorySource,
    config: ProjectionConfig,
) -> Result<ChartData, PipelineError> {
    let records = source
        .daily_closes(HistoryRequest::new(config.symbol.clone()))
        .await?;
    let in_window = clip_to_window(records, &config.window);
    let series = project(&in_window, &config.window, &config.targets)?;
    let spec = plan_axes(
        &config.symbol,
        &config.window,
        &series,
        config.price_tick_step,
        config.date_tick_step,
    )?;

    Ok(ChartData {
        symbol: config.symbol,
        spec,
        series,
    })
}
