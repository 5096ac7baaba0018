//! Configuration module for the market data core

use serde::Deserialize;
use std::env;

use crate::error::{MarketDataError, Result};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Emission tick period in milliseconds
    pub update_interval_ms: u64,

    /// Number of random token picks per tick
    pub picks_per_tick: usize,

    /// Per-tick price volatility (fraction, e.g. 0.02 = +/-2%)
    pub volatility: f64,

    /// Delay between a connect request and the connected transition
    pub connect_delay_ms: u64,

    /// How often the binary logs derived view snapshots, in seconds
    pub status_log_interval_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            update_interval_ms: env::var("UPDATE_INTERVAL_MS")
                .unwrap_or_else(|_| "800".to_string())
                .parse()
                .unwrap_or(800),
            picks_per_tick: env::var("PICKS_PER_TICK")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .unwrap_or(15),
            volatility: env::var("VOLATILITY")
                .unwrap_or_else(|_| "0.02".to_string())
                .parse()
                .unwrap_or(0.02),
            connect_delay_ms: env::var("CONNECT_DELAY_MS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .unwrap_or(1000),
            status_log_interval_secs: env::var("STATUS_LOG_INTERVAL_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate field ranges
    pub fn validate(&self) -> Result<()> {
        if self.update_interval_ms == 0 {
            return Err(MarketDataError::Config(
                "UPDATE_INTERVAL_MS must be at least 1".to_string(),
            ));
        }
        if self.picks_per_tick == 0 {
            return Err(MarketDataError::Config(
                "PICKS_PER_TICK must be at least 1".to_string(),
            ));
        }
        if self.volatility <= 0.0 || self.volatility > 1.0 {
            return Err(MarketDataError::Config(format!(
                "VOLATILITY must be in (0, 1], got {}",
                self.volatility
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            update_interval_ms: 800,
            picks_per_tick: 15,
            volatility: 0.02,
            connect_delay_ms: 1000,
            status_log_interval_secs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_picks_rejected() {
        let config = Config {
            picks_per_tick: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_volatility_bounds() {
        let config = Config {
            volatility: 1.5,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            volatility: -0.02,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
