//! Core contracts for pricecast.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - The range filter and linear projection engine
//! - Axis planning and the rendering-sink contract
//! - The price-history source trait and its FMP adapter

pub mod adapters;
pub mod chart;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod pipeline;
pub mod projection;
pub mod range;
pub mod source;

pub use adapters::FmpAdapter;
pub use chart::{plan_axes, ChartData, ChartSink, ChartSpec};
pub use data_source::{HistoryRequest, PriceHistorySource, SourceError, SourceErrorKind};
pub use domain::{
    DateWindow, PricePoint, ProjectedPoint, ProjectedSeries, ScenarioTargets, Symbol, TradingDate,
};
pub use error::ValidationError;
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};
pub use pipeline::{PipelineError, ProjectionConfig};
pub use projection::{project, ProjectionError, ScenarioRates};
pub use range::clip_to_window;
pub use source::ProviderId;
