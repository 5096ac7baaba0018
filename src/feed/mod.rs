//! Simulated price feed module
//!
//! Stands in for a streaming market-data connection; see
//! [`FeedSimulator`] for the connect/disconnect contract.

mod simulator;

pub use simulator::{run_tick, FeedSimulator};
