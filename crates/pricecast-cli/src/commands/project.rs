use std::sync::Arc;

use pricecast_core::{pipeline, FmpAdapter, ProjectionConfig, ReqwestHttpClient};

use crate::cli::ProjectArgs;
use crate::config::Settings;
use crate::error::CliError;

use super::CommandOutput;

pub async fn run(args: &ProjectArgs, timeout_ms: u64) -> Result<CommandOutput, CliError> {
    let settings = Settings::resolve(&args.into())?;
    let adapter = FmpAdapter::new(Arc::new(ReqwestHttpClient::new()), settings.api_key.clone())
        .with_timeout_ms(timeout_ms);

    let config = ProjectionConfig {
        symbol: settings.symbol,
        window: settings.window,
        targets: settings.targets,
        price_tick_step: settings.price_tick_step,
        date_tick_step: settings.date_tick_step,
    };

    let chart = pipeline::run(&adapter, config).await?;
    Ok(CommandOutput::Chart(chart))
}
