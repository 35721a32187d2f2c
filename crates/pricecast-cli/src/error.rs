use thiserror::Error;

use pricecast_core::{PipelineError, SourceError, ValidationError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Validation(_) => 2,
            Self::Pipeline(_) | Self::Source(_) => 3,
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
