mod models;
mod symbol;
mod trading_date;

pub use models::{DateWindow, PricePoint, ProjectedPoint, ProjectedSeries, ScenarioTargets};
pub use symbol::Symbol;
pub use trading_date::TradingDate;
