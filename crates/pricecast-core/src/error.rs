use thiserror::Error;

/// Validation and contract errors exposed by `pricecast-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("date must be YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },

    #[error("window end {end} precedes start {start}")]
    WindowOutOfOrder { start: String, end: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("{axis} tick step must be at least 1")]
    InvalidTickStep { axis: &'static str },
}
