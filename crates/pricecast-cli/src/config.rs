//! Flag → environment → default resolution into typed settings.
//!
//! Resolution order for every value: command-line flag, then `PRICECAST_*`
//! environment variable, then built-in default. The symbol and API key have
//! no default; their absence is a startup failure, never a core failure.

use std::env;
use std::str::FromStr;

use pricecast_core::{DateWindow, ScenarioTargets, Symbol, TradingDate};
use time::{Date, Month};

use crate::cli::{HistoryArgs, ProjectArgs};
use crate::error::CliError;

pub const ENV_SYMBOL: &str = "PRICECAST_SYMBOL";
pub const ENV_API_KEY: &str = "PRICECAST_API_KEY";
const ENV_START_YEAR: &str = "PRICECAST_START_YEAR";
const ENV_END_YEAR: &str = "PRICECAST_END_YEAR";
const ENV_EXPECTED_PRICE: &str = "PRICECAST_EXPECTED_PRICE";
const ENV_BULL_PRICE: &str = "PRICECAST_BULL_PRICE";
const ENV_BEAR_PRICE: &str = "PRICECAST_BEAR_PRICE";
const ENV_PRICE_TICK_STEP: &str = "PRICECAST_PRICE_TICK_STEP";
const ENV_DATE_TICK_STEP: &str = "PRICECAST_DATE_TICK_STEP";

const DEFAULT_START_YEAR: i32 = 2023;
const DEFAULT_END_YEAR: i32 = 2027;
const DEFAULT_EXPECTED_PRICE: f64 = 2000.0;
const DEFAULT_BULL_PRICE: f64 = 2500.0;
const DEFAULT_BEAR_PRICE: f64 = 1400.0;
const DEFAULT_PRICE_TICK_STEP: u32 = 100;
const DEFAULT_DATE_TICK_STEP: u32 = 30;

/// Per-invocation overrides collected from the command line.
#[derive(Debug, Default)]
pub struct Overrides {
    pub symbol: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub expected: Option<f64>,
    pub bull: Option<f64>,
    pub bear: Option<f64>,
    pub price_step: Option<u32>,
    pub date_step: Option<u32>,
}

impl From<&ProjectArgs> for Overrides {
    fn from(args: &ProjectArgs) -> Self {
        Self {
            symbol: args.symbol.clone(),
            start_year: args.start_year,
            end_year: args.end_year,
            expected: args.expected,
            bull: args.bull,
            bear: args.bear,
            price_step: args.price_step,
            date_step: args.date_step,
        }
    }
}

impl From<&HistoryArgs> for Overrides {
    fn from(args: &HistoryArgs) -> Self {
        Self {
            symbol: args.symbol.clone(),
            start_year: args.start_year,
            end_year: args.end_year,
            ..Self::default()
        }
    }
}

/// Fully resolved invocation settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub symbol: Symbol,
    pub api_key: String,
    pub window: DateWindow,
    pub targets: ScenarioTargets,
    pub price_tick_step: u32,
    pub date_tick_step: u32,
}

impl Settings {
    pub fn resolve(overrides: &Overrides) -> Result<Self, CliError> {
        let symbol_input = overrides
            .symbol
            .clone()
            .or_else(|| env_string(ENV_SYMBOL))
            .ok_or_else(|| {
                CliError::Config(format!(
                    "symbol is required; pass it as an argument or set {ENV_SYMBOL}"
                ))
            })?;
        let symbol = Symbol::parse(&symbol_input)?;

        let api_key = env_string(ENV_API_KEY)
            .ok_or_else(|| CliError::Config(format!("{ENV_API_KEY} must be set")))?;

        let start_year =
            resolve_value(overrides.start_year, ENV_START_YEAR)?.unwrap_or(DEFAULT_START_YEAR);
        let end_year = resolve_value(overrides.end_year, ENV_END_YEAR)?.unwrap_or(DEFAULT_END_YEAR);
        let window = window_for_years(start_year, end_year)?;

        let expected = resolve_value(overrides.expected, ENV_EXPECTED_PRICE)?
            .unwrap_or(DEFAULT_EXPECTED_PRICE);
        let bull = resolve_value(overrides.bull, ENV_BULL_PRICE)?.unwrap_or(DEFAULT_BULL_PRICE);
        let bear = resolve_value(overrides.bear, ENV_BEAR_PRICE)?.unwrap_or(DEFAULT_BEAR_PRICE);
        let targets = ScenarioTargets::new(expected, bull, bear)?;

        let price_tick_step = resolve_value(overrides.price_step, ENV_PRICE_TICK_STEP)?
            .unwrap_or(DEFAULT_PRICE_TICK_STEP);
        let date_tick_step = resolve_value(overrides.date_step, ENV_DATE_TICK_STEP)?
            .unwrap_or(DEFAULT_DATE_TICK_STEP);

        Ok(Self {
            symbol,
            api_key,
            window,
            targets,
            price_tick_step,
            date_tick_step,
        })
    }
}

fn env_string(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Flag wins over environment; an unparseable environment value is a config
/// error rather than a silent fallback to the default.
fn resolve_value<T: FromStr>(flag: Option<T>, name: &str) -> Result<Option<T>, CliError> {
    if flag.is_some() {
        return Ok(flag);
    }
    match env_string(name) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| CliError::Config(format!("{name} has an unparseable value: '{raw}'"))),
        None => Ok(None),
    }
}

/// Windows run January 1 of the start year through December 31 of the end year.
fn window_for_years(start_year: i32, end_year: i32) -> Result<DateWindow, CliError> {
    let start = Date::from_calendar_date(start_year, Month::January, 1)
        .map_err(|_| CliError::Config(format!("invalid start year {start_year}")))?;
    let end = Date::from_calendar_date(end_year, Month::December, 31)
        .map_err(|_| CliError::Config(format!("invalid end year {end_year}")))?;

    DateWindow::new(TradingDate::from_date(start), TradingDate::from_date(end))
        .map_err(CliError::from)
}
