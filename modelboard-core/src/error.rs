//! Error types for the modelboard-core crate.

use thiserror::Error;

/// Top-level error type for scoring, registry and figure operations.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid dataset tag: {0} (expected train, test or validate)")]
    InvalidDatasetTag(String),

    #[error("Undefined metric: {0}")]
    UndefinedMetric(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Estimator error: {0}")]
    Estimator(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl BoardError {
    pub fn invalid_dataset_tag(tag: impl Into<String>) -> Self {
        Self::InvalidDatasetTag(tag.into())
    }

    pub fn undefined_metric(msg: impl Into<String>) -> Self {
        Self::UndefinedMetric(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn estimator(msg: impl Into<String>) -> Self {
        Self::Estimator(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BoardError>;
