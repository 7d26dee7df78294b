// Trading strategy module

use crate::models::Signal;

/// Entry thresholds for the two-length RSI gate.
///
/// A buy needs the long RSI below `rsi_long_max` (downtrend has momentum
/// left) and the short RSI below `rsi_short_max` (locally oversold). The
/// gate is wired behind `Config::rsi_gate_enabled` and is OFF by default,
/// so orchestration currently trades on every non-GET request.
#[derive(Debug, Clone)]
pub struct EntryThresholds {
    pub rsi_short_max: f64,
    pub rsi_long_max: f64,
}

impl Default for EntryThresholds {
    fn default() -> Self {
        Self {
            rsi_short_max: 37.5,
            rsi_long_max: 50.0,
        }
    }
}

impl EntryThresholds {
    pub fn evaluate(&self, rsi_short: f64, rsi_long: f64) -> Signal {
        if rsi_long < self.rsi_long_max && rsi_short < self.rsi_short_max {
            Signal::Buy
        } else {
            Signal::Hold
        }
    }
}
