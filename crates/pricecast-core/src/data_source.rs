use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{PricePoint, ProviderId, Symbol};

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Unavailable,
    RateLimited,
    InvalidRequest,
    Internal,
}

/// Structured provider error surfaced by history adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::RateLimited,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::RateLimited => "source.rate_limited",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Request payload for daily close history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub symbol: Symbol,
}

impl HistoryRequest {
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }
}

/// Price-history provider contract.
pub trait PriceHistorySource: Send + Sync {
    fn id(&self) -> ProviderId;

    /// Raw daily closes for one symbol. Ordering is provider-defined and not
    /// normalized here; the range filter owns ordering.
    fn daily_closes<'a>(
        &'a self,
        req: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<PricePoint>, SourceError>> + Send + 'a>>;
}
