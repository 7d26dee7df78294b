use std::env;

use crate::error::{Error, Result};

/// Runtime configuration, read from the environment once at startup and
/// passed by reference into the handler state.
///
/// Required variables (startup fails if any is missing):
/// - `ALPACA_API_KEY` / `ALPACA_API_SECRET` — brokerage credentials
/// - `YAHOO_API_KEY` — market data API key
#[derive(Debug, Clone)]
pub struct Config {
    pub alpaca_api_key: String,
    pub alpaca_api_secret: String,
    pub yahoo_api_key: String,

    /// HTTP listen address.
    pub bind: String,
    pub port: u16,

    /// When set, the RSI entry thresholds gate order placement. Off by
    /// default: every non-GET request places an order regardless of RSI.
    pub rsi_gate_enabled: bool,
}

fn required(name: &str) -> Result<String> {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::Config(format!("missing required env variable {name}")))
}

fn env_str(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .map(|s| matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "y" | "on"))
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            alpaca_api_key: required("ALPACA_API_KEY")?,
            alpaca_api_secret: required("ALPACA_API_SECRET")?,
            yahoo_api_key: required("YAHOO_API_KEY")?,
            bind: env_str("RSIBOT_BIND", "127.0.0.1"),
            port: env_u16("RSIBOT_PORT", 8080),
            rsi_gate_enabled: env_bool("RSIBOT_RSI_GATE", false),
        })
    }
}
