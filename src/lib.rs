//! PulseBoard - Simulated Market Data Core
//!
//! This crate provides the data pipeline behind the PulseBoard token
//! dashboard: a static token catalog, a central market store holding live
//! price overlays and connection status, a simulated feed that perturbs
//! prices on a timer, and a pure filter/sort derivation over token
//! collections.

use std::sync::Arc;
use tokio::sync::RwLock;

pub mod catalog;
pub mod config;
pub mod error;
pub mod feed;
pub mod formatters;
pub mod market;
pub mod view;

pub use catalog::{Protocol, Token, TokenCatalog};
pub use config::Config;
pub use error::{MarketDataError, Result};
pub use feed::FeedSimulator;
pub use market::{ConnectionStatus, LivePrice, MarketStore, PriceUpdate};
pub use view::{derive_view, FilterSortConfig, SortDirection, SortKey};

/// Application state shared across components
///
/// Owned by the composition root; the store is explicitly passed rather than
/// living in module-level global state.
pub struct AppState {
    pub catalog: Arc<TokenCatalog>,
    pub store: Arc<RwLock<MarketStore>>,
    pub config: Arc<Config>,
}
