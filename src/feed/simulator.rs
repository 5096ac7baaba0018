//! Feed simulator
//!
//! Timer-driven stand-in for a real streaming price feed. Once connected it
//! repeatedly picks tokens at random and pushes perturbed price/change values
//! into the market store. The random walk is directionally correlated per
//! pick (one jitter draw moves the price and all three change windows) and is
//! not a calibrated market model; the only hard guarantee is that prices stay
//! strictly positive.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep, MissedTickBehavior};
use tracing::{info, trace};

use crate::catalog::{Token, TokenCatalog};
use crate::error::Result;
use crate::formatters::{format_price, parse_currency_value};
use crate::market::{ConnectionStatus, MarketStore, PriceUpdate};
use crate::AppState;

/// Smallest price a perturbation can produce
const PRICE_FLOOR: f64 = 1e-6;

/// Simulated feed connection with a connect/disconnect lifecycle
///
/// A generation counter invalidates in-flight work on disconnect: the delayed
/// connected transition and every emission tick re-check the generation
/// before committing, so a connect/disconnect sequence during the pending
/// delay can never leave a stray loop running.
pub struct FeedSimulator {
    state: Arc<AppState>,
    generation: Arc<AtomicU64>,
    task: Option<JoinHandle<()>>,
}

impl FeedSimulator {
    /// Create a new feed simulator over the shared application state
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            generation: Arc::new(AtomicU64::new(0)),
            task: None,
        }
    }

    /// Begin receiving updates
    ///
    /// No-op unless currently disconnected, so repeated calls while
    /// connecting or connected are idempotent. The connected transition
    /// commits after the configured delay, then the emission loop starts.
    pub async fn connect(&mut self) {
        {
            let store = self.state.store.read().await;
            if store.connection_status() != ConnectionStatus::Disconnected {
                return;
            }
        }

        self.state
            .store
            .write()
            .await
            .set_connection_status(ConnectionStatus::Connecting);

        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = self.generation.clone();
        let state = self.state.clone();

        info!(
            delay_ms = state.config.connect_delay_ms,
            "Feed connecting"
        );

        self.task = Some(tokio::spawn(async move {
            sleep(Duration::from_millis(state.config.connect_delay_ms)).await;

            // A disconnect during the delay bumps the generation; bail out
            // without touching status.
            if generation.load(Ordering::SeqCst) != my_generation {
                return;
            }

            state
                .store
                .write()
                .await
                .set_connection_status(ConnectionStatus::Connected);
            info!(
                interval_ms = state.config.update_interval_ms,
                picks = state.config.picks_per_tick,
                "Feed connected, starting emission loop"
            );

            let mut ticker = interval(Duration::from_millis(state.config.update_interval_ms));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first interval tick completes immediately; consume it so
            // emission starts one full period after the connected transition.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if generation.load(Ordering::SeqCst) != my_generation {
                    return;
                }
                let mut store = state.store.write().await;
                run_tick(
                    &state.catalog,
                    &mut store,
                    state.config.picks_per_tick,
                    state.config.volatility,
                );
            }
        }));
    }

    /// Stop receiving updates
    ///
    /// Unconditional: safe to call while connecting, connected, or never
    /// connected. Cancels the emission task and invalidates any pending
    /// delayed start.
    pub async fn disconnect(&mut self) -> Result<()> {
        self.generation.fetch_add(1, Ordering::SeqCst);

        if let Some(task) = self.task.take() {
            task.abort();
            match task.await {
                Ok(()) => {}
                Err(e) if e.is_cancelled() => {}
                Err(e) => return Err(e.into()),
            }
        }

        self.state
            .store
            .write()
            .await
            .set_connection_status(ConnectionStatus::Disconnected);
        info!("Feed disconnected");
        Ok(())
    }
}

/// Run one emission tick: `picks` independent uniform draws with replacement
/// over the full catalog union.
pub fn run_tick(catalog: &TokenCatalog, store: &mut MarketStore, picks: usize, volatility: f64) {
    let tokens = catalog.all();
    if tokens.is_empty() {
        return;
    }

    let mut rng = rand::thread_rng();
    for _ in 0..picks {
        let token = tokens[rng.gen_range(0..tokens.len())];
        let jitter = rng.gen_range(-volatility..=volatility);
        apply_pick(token, store, jitter);
    }
}

/// Apply one perturbation to a token and commit it to the store
///
/// The base price and prior change windows come from the live overlay when
/// present, else from the catalog baseline. One jitter draw moves the price
/// multiplicatively and adds the same percentage delta to all three windows.
fn apply_pick(token: &Token, store: &mut MarketStore, jitter: f64) {
    let (base_price, prior5m, prior1h, prior6h) = match store.price(&token.id) {
        Some(live) => (
            parse_currency_value(&live.price),
            live.change5m,
            live.change1h,
            live.change6h,
        ),
        None => (
            parse_currency_value(&token.price),
            token.change5m,
            token.change1h,
            token.change6h,
        ),
    };

    let new_price = (base_price * (1.0 + jitter)).max(PRICE_FLOOR);
    let delta = jitter * 100.0;

    let price = format_price(new_price);
    trace!(id = %token.id, price = %price, delta = delta, "Price update");

    store.update_price(PriceUpdate {
        id: token.id.clone(),
        price,
        change5m: prior5m + delta,
        change1h: prior1h + delta,
        change6h: prior6h + delta,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tokio::sync::RwLock;

    fn test_state(connect_delay_ms: u64, update_interval_ms: u64) -> Arc<AppState> {
        Arc::new(AppState {
            catalog: Arc::new(TokenCatalog::seed()),
            store: Arc::new(RwLock::new(MarketStore::new())),
            config: Arc::new(Config {
                update_interval_ms,
                picks_per_tick: 15,
                volatility: 0.02,
                connect_delay_ms,
                status_log_interval_secs: 5,
            }),
        })
    }

    #[test]
    fn test_pick_same_delta_all_windows() {
        let catalog = TokenCatalog::seed();
        let mut store = MarketStore::new();
        let token = catalog.get("1").unwrap();

        apply_pick(token, &mut store, 0.01);

        let live = store.price("1").unwrap();
        assert!((live.change5m - (token.change5m + 1.0)).abs() < 1e-9);
        assert!((live.change1h - (token.change1h + 1.0)).abs() < 1e-9);
        assert!((live.change6h - (token.change6h + 1.0)).abs() < 1e-9);
    }

    #[test]
    fn test_pick_reads_prior_overlay() {
        let catalog = TokenCatalog::seed();
        let mut store = MarketStore::new();
        let token = catalog.get("1").unwrap();

        apply_pick(token, &mut store, 0.02);
        let after_first = store.price("1").unwrap().change1h;

        apply_pick(token, &mut store, -0.01);
        let after_second = store.price("1").unwrap().change1h;

        assert!((after_second - (after_first - 1.0)).abs() < 1e-9);
    }

    #[test]
    fn test_price_clamped_to_floor() {
        let catalog = TokenCatalog::seed();
        let mut store = MarketStore::new();
        let token = catalog.get("1").unwrap();

        // Force the price to the floor with a wipeout jitter
        apply_pick(token, &mut store, -1.0);

        let price = parse_currency_value(&store.price("1").unwrap().price);
        assert!(price > 0.0);
    }

    #[test]
    fn test_many_ticks_prices_stay_positive() {
        let catalog = TokenCatalog::seed();
        let mut store = MarketStore::new();

        for _ in 0..500 {
            run_tick(&catalog, &mut store, 15, 0.02);
        }

        assert!(store.live_count() > 0);
        for live in store.prices().values() {
            let price = parse_currency_value(&live.price);
            assert!(price > 0.0, "price must stay positive, got {}", live.price);
        }
    }

    #[test]
    fn test_overlay_keys_exist_in_catalog() {
        let catalog = TokenCatalog::seed();
        let mut store = MarketStore::new();

        for _ in 0..50 {
            run_tick(&catalog, &mut store, 15, 0.02);
        }

        for id in store.prices().keys() {
            assert!(catalog.get(id).is_some());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_transitions_and_emits() {
        let state = test_state(1000, 800);
        let mut feed = FeedSimulator::new(state.clone());

        feed.connect().await;
        assert_eq!(
            state.store.read().await.connection_status(),
            ConnectionStatus::Connecting
        );

        // Past the connect delay plus a few emission periods
        sleep(Duration::from_millis(1000 + 800 * 3 + 10)).await;

        let store = state.store.read().await;
        assert_eq!(store.connection_status(), ConnectionStatus::Connected);
        assert!(store.live_count() > 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_is_idempotent() {
        let state = test_state(1000, 800);
        let mut feed = FeedSimulator::new(state.clone());

        feed.connect().await;
        feed.connect().await; // while connecting
        sleep(Duration::from_millis(1100)).await;
        assert_eq!(
            state.store.read().await.connection_status(),
            ConnectionStatus::Connected
        );

        feed.connect().await; // while connected
        assert_eq!(
            state.store.read().await.connection_status(),
            ConnectionStatus::Connected
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_disconnect_during_delay_wins() {
        let state = test_state(1000, 800);
        let mut feed = FeedSimulator::new(state.clone());

        feed.connect().await;
        feed.disconnect().await.unwrap();

        // Run well past the delay and several would-be ticks
        sleep(Duration::from_millis(10_000)).await;

        let store = state.store.read().await;
        assert_eq!(store.connection_status(), ConnectionStatus::Disconnected);
        assert_eq!(store.live_count(), 0, "no emission tick may occur");
    }

    #[tokio::test(start_paused = true)]
    async fn test_disconnect_never_connected() {
        let state = test_state(1000, 800);
        let mut feed = FeedSimulator::new(state.clone());

        feed.disconnect().await.unwrap();
        assert_eq!(
            state.store.read().await.connection_status(),
            ConnectionStatus::Disconnected
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_disconnect_stops_emission() {
        let state = test_state(100, 100);
        let mut feed = FeedSimulator::new(state.clone());

        feed.connect().await;
        sleep(Duration::from_millis(600)).await;
        feed.disconnect().await.unwrap();

        let count = state.store.read().await.live_count();
        assert!(count > 0);

        sleep(Duration::from_millis(5_000)).await;
        assert_eq!(state.store.read().await.live_count(), count);
    }
}
