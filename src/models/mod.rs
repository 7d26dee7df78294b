use serde::{Deserialize, Serialize};

use crate::api::alpaca::Order;

/// Inbound trade request, parsed from the request body
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TradeRequest {
    pub ticker: String,
    pub interval: String,
}

/// Parallel open/close arrays as delivered by the chart endpoint.
/// Length equality is an invariant checked at the point of use, not here.
#[derive(Debug, Clone, Default)]
pub struct CandleSeries {
    pub opens: Vec<f64>,
    pub closes: Vec<f64>,
}

/// Entry decision
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Buy,
    Hold,
}

/// Response body for a handled trade request
#[derive(Debug, Clone, Serialize)]
pub struct TradeSummary {
    pub ticker: String,
    pub interval: String,
    pub rsi_14: f64,
    pub rsi_40: f64,
    pub signal: Signal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// Close of the most recent red candle, the anchor for a future stop
    /// loss. Only present when an order was placed and the scan succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_red_close: Option<f64>,
}
