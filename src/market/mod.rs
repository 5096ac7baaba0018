//! Market store module
//!
//! Single source of truth for live price data and feed connection status.

mod store;

pub use store::MarketStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Feed connection status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Update record emitted by the feed, keyed by token identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceUpdate {
    pub id: String,
    /// Currency-formatted price string, e.g. "$0.421337"
    pub price: String,
    pub change5m: f64,
    pub change1h: f64,
    pub change6h: f64,
}

/// Live overlay entry for a single token
///
/// Exists only for tokens the feed has touched; absence means "use the
/// catalog baseline".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivePrice {
    pub price: String,
    pub change5m: f64,
    pub change1h: f64,
    pub change6h: f64,
    pub updated_at: DateTime<Utc>,
}
