use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;

use crate::data_source::{HistoryRequest, PriceHistorySource, SourceError};
use crate::http_client::{HttpClient, HttpRequest};
use crate::{PricePoint, ProviderId, TradingDate, ValidationError};

const FMP_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Financial Modeling Prep adapter for daily close history.
pub struct FmpAdapter {
    http_client: Arc<dyn HttpClient>,
    api_key: String,
    timeout_ms: u64,
}

impl FmpAdapter {
    pub fn new(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            timeout_ms: 3_000,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    async fn fetch_history(&self, req: &HistoryRequest) -> Result<Vec<PricePoint>, SourceError> {
        let endpoint = format!(
            "{FMP_BASE_URL}/historical-price-full/{}?apikey={}",
            urlencoding::encode(req.symbol.as_str()),
            urlencoding::encode(&self.api_key),
        );
        let request = HttpRequest::get(endpoint).with_timeout_ms(self.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|error| {
            if error.retryable() {
                SourceError::unavailable(format!("fmp transport error: {}", error.message()))
            } else {
                SourceError::internal(format!("fmp transport error: {}", error.message()))
            }
        })?;

        match response.status {
            429 => return Err(SourceError::rate_limited("fmp request quota exceeded")),
            401 | 403 => {
                return Err(SourceError::invalid_request(
                    "fmp rejected the configured api key",
                ))
            }
            status if !response.is_success() => {
                return Err(SourceError::unavailable(format!(
                    "fmp returned status {status}"
                )))
            }
            _ => {}
        }

        let payload: FmpHistoryResponse = serde_json::from_str(&response.body).map_err(|e| {
            SourceError::internal(format!("failed to parse fmp response: {e}"))
        })?;

        // FMP emits newest-first; ordering is left to the range filter.
        let closes = payload
            .historical
            .into_iter()
            .map(normalize_close)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(closes)
    }
}

impl PriceHistorySource for FmpAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Fmp
    }

    fn daily_closes<'a>(
        &'a self,
        req: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<PricePoint>, SourceError>> + Send + 'a>> {
        Box::pin(async move { self.fetch_history(&req).await })
    }
}

#[derive(Debug, Clone, Deserialize)]
struct FmpHistoryResponse {
    #[serde(default)]
    historical: Vec<FmpDailyBar>,
}

#[derive(Debug, Clone, Deserialize)]
struct FmpDailyBar {
    date: String,
    close: f64,
}

fn normalize_close(bar: FmpDailyBar) -> Result<PricePoint, SourceError> {
    let date = TradingDate::parse(&bar.date).map_err(validation_to_error)?;
    PricePoint::new(date, bar.close).map_err(validation_to_error)
}

fn validation_to_error(error: ValidationError) -> SourceError {
    SourceError::internal(error.to_string())
}
