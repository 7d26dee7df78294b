use std::sync::Arc;

use crate::api::{AlpacaClient, YahooFinanceClient};
use crate::config::Config;
use crate::strategy::EntryThresholds;

/// Shared application state, passed to the route handlers via
/// `axum::extract::State`. Built once at startup; nothing in here is
/// mutated across requests.
pub struct AppState {
    pub config: Config,
    pub market: YahooFinanceClient,
    pub broker: AlpacaClient,
    pub thresholds: EntryThresholds,
}

impl AppState {
    pub fn new(config: Config, market: YahooFinanceClient, broker: AlpacaClient) -> Arc<Self> {
        Arc::new(Self {
            config,
            market,
            broker,
            thresholds: EntryThresholds::default(),
        })
    }
}
