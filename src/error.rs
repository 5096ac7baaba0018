//! Error types for the market data core

use thiserror::Error;

/// Market data core errors
///
/// Numeric parsing of display strings is deliberately fail-soft (malformed
/// input degrades to zero) and never surfaces here; see [`crate::formatters`].
#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Feed task error: {0}")]
    FeedTask(String),
}

impl From<tokio::task::JoinError> for MarketDataError {
    fn from(err: tokio::task::JoinError) -> Self {
        MarketDataError::FeedTask(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MarketDataError>;
