use std::sync::Arc;

use serde::Serialize;

use pricecast_core::{
    clip_to_window, DateWindow, FmpAdapter, HistoryRequest, PriceHistorySource, PricePoint,
    ReqwestHttpClient, Symbol,
};

use crate::cli::HistoryArgs;
use crate::config::Settings;
use crate::error::CliError;

use super::CommandOutput;

/// In-window close history, unprojected.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryReport {
    pub symbol: Symbol,
    pub window: DateWindow,
    pub points: Vec<PricePoint>,
}

pub async fn run(args: &HistoryArgs, timeout_ms: u64) -> Result<CommandOutput, CliError> {
    let settings = Settings::resolve(&args.into())?;
    let adapter = FmpAdapter::new(Arc::new(ReqwestHttpClient::new()), settings.api_key.clone())
        .with_timeout_ms(timeout_ms);

    let records = adapter
        .daily_closes(HistoryRequest::new(settings.symbol.clone()))
        .await?;
    let points = clip_to_window(records, &settings.window);

    Ok(CommandOutput::History(HistoryReport {
        symbol: settings.symbol,
        window: settings.window,
        points,
    }))
}
