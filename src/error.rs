//! Error Types

use kv_storage::StorageError;
use thiserror::Error;

/// Failures while loading the exchange rate
#[derive(Debug, Error)]
pub enum RateError {
    #[error("no browser window")]
    NoWindow,
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Body(#[from] serde_json::Error),
    #[error("response has no {0} rate")]
    MissingRate(String),
    #[error("unusable {currency} rate: {rate}")]
    InvalidRate { currency: String, rate: f64 },
}

/// Failures while saving the checklist
#[derive(Debug, Error)]
pub enum ChecklistError {
    #[error("failed to encode checklist: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
