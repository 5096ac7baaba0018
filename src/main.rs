//! PulseBoard - Simulated Market Data Core
//!
//! Composition root: wires the catalog, market store and feed simulator
//! together, then periodically logs derived views as a stand-in for the
//! dashboard presentation layer.

mod catalog;
mod config;
mod error;
mod feed;
mod formatters;
mod market;
mod view;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::catalog::TokenCatalog;
use crate::config::Config;
use crate::feed::FeedSimulator;
use crate::market::MarketStore;
use crate::view::{derive_view, FilterSortConfig};

/// Application state shared across components
pub struct AppState {
    pub catalog: Arc<TokenCatalog>,
    pub store: Arc<RwLock<MarketStore>>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().json())
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    info!("Starting PulseBoard market data core");

    // Load configuration
    let config = Arc::new(Config::load()?);
    info!(
        interval_ms = config.update_interval_ms,
        picks = config.picks_per_tick,
        volatility = config.volatility,
        "Configuration loaded"
    );

    // Seed the token catalog
    let catalog = Arc::new(TokenCatalog::seed());
    info!(tokens = catalog.len(), "Catalog seeded");

    // Create the market store
    let store = Arc::new(RwLock::new(MarketStore::new()));

    // Create shared application state
    let state = Arc::new(AppState {
        catalog: catalog.clone(),
        store: store.clone(),
        config: config.clone(),
    });

    // Connect the simulated feed
    let mut feed = FeedSimulator::new(state.clone());
    feed.connect().await;

    // Periodically log derived view snapshots (presentation stand-in)
    let status_state = state.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(
            status_state.config.status_log_interval_secs,
        ));
        loop {
            ticker.tick().await;
            log_views(&status_state).await;
        }
    });

    // Run until interrupted
    tokio::signal::ctrl_c().await?;
    info!("Shutting down");
    feed.disconnect().await?;

    Ok(())
}

/// Log the top of each dashboard column under the default sort
async fn log_views(state: &AppState) {
    let store = state.store.read().await;
    let config = FilterSortConfig::default();

    let groups = [
        ("new_pairs", &state.catalog.new_pairs),
        ("final_stretch", &state.catalog.final_stretch),
        ("migrated", &state.catalog.migrated),
    ];

    for (name, tokens) in groups {
        let view = derive_view(tokens, store.prices(), &config);
        if let Some(top) = view.first() {
            let price = store
                .price(&top.id)
                .map(|live| live.price.clone())
                .unwrap_or_else(|| top.price.clone());
            info!(
                column = name,
                shown = view.len(),
                top = %top.name,
                price = %price,
                "Column view"
            );
        }
    }

    info!(
        status = ?store.connection_status(),
        live = store.live_count(),
        "Market status"
    );
}
