use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the domain, storage and service layers.
#[derive(Error, Debug)]
pub enum FinanceError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error("Stored `{collection}` data is corrupt: {source}")]
    CorruptState {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = StdResult<T, FinanceError>;

impl FinanceError {
    pub fn validation(message: impl Into<String>) -> Self {
        FinanceError::Validation(message.into())
    }

    /// Returns `true` when the error was caused by invalid caller input.
    pub fn is_validation(&self) -> bool {
        matches!(self, FinanceError::Validation(_))
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        FinanceError::Storage(err.to_string())
    }
}
