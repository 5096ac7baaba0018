//! Central market store
//!
//! Last-write-wins container for live overlay data plus connection status.
//! All mutation flows through the feed simulator; reads are synchronous
//! snapshot reads. The store itself does no locking; callers share it behind
//! `Arc<tokio::sync::RwLock<..>>` wired up by the composition root.

use std::collections::HashMap;

use chrono::Utc;
use tracing::debug;

use super::{ConnectionStatus, LivePrice, PriceUpdate};

/// Live price overlay and connection status for the whole dashboard
#[derive(Debug, Default)]
pub struct MarketStore {
    prices: HashMap<String, LivePrice>,
    connection_status: ConnectionStatus,
}

impl MarketStore {
    /// Create an empty store (no overlay entries, disconnected)
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally overwrite the connection status
    pub fn set_connection_status(&mut self, status: ConnectionStatus) {
        debug!(status = ?status, "Connection status changed");
        self.connection_status = status;
    }

    /// Upsert the overlay entry for a token
    ///
    /// A full replace, not a partial merge. Values are committed as given;
    /// clamping is the feed's responsibility.
    pub fn update_price(&mut self, update: PriceUpdate) {
        let PriceUpdate {
            id,
            price,
            change5m,
            change1h,
            change6h,
        } = update;

        self.prices.insert(
            id,
            LivePrice {
                price,
                change5m,
                change1h,
                change6h,
                updated_at: Utc::now(),
            },
        );
    }

    /// Current overlay entry for a token, if the feed has touched it
    pub fn price(&self, id: &str) -> Option<&LivePrice> {
        self.prices.get(id)
    }

    /// Full overlay map, keyed by token identifier
    pub fn prices(&self) -> &HashMap<String, LivePrice> {
        &self.prices
    }

    pub fn connection_status(&self) -> ConnectionStatus {
        self.connection_status
    }

    /// Number of tokens with live data
    pub fn live_count(&self) -> usize {
        self.prices.len()
    }

    /// Drop all overlay entries and reset the status (teardown)
    pub fn clear(&mut self) {
        self.prices.clear();
        self.connection_status = ConnectionStatus::Disconnected;
    }
}
