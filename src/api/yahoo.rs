use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::CandleSeries;

const YAHOO_API_BASE: &str = "https://yfapi.net";

/// All history is fetched over a one-day range; the interval decides the
/// candle width within it.
const HISTORY_RANGE: &str = "1d";

/// Client for the Yahoo Finance API (yfapi.net)
///
/// Two endpoints are used:
/// - `/v8/finance/spark` for close-only history (RSI input)
/// - `/v8/finance/chart/{ticker}` for open/close candles (red-candle scan)
#[derive(Clone)]
pub struct YahooFinanceClient {
    client: Client,
    api_key: String,
    base_url: String,
}

// ============== Response Types ==============

/// One ticker's series in the spark response, which is an object keyed by
/// ticker symbol.
#[derive(Debug, Deserialize)]
struct SparkSeries {
    close: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    open: Vec<f64>,
    close: Vec<f64>,
}

// ============== Implementation ==============

impl YahooFinanceClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self {
            client,
            api_key,
            base_url: YAHOO_API_BASE.to_string(),
        }
    }

    /// Point the client at a different base URL (test servers).
    pub fn with_base_url(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Ordered closing prices for a ticker over the 1-day range.
    /// Endpoint: GET /v8/finance/spark?interval={interval}&range=1d&symbols={ticker}
    pub async fn spark_closes(&self, ticker: &str, interval: &str) -> Result<Vec<f64>> {
        tracing::debug!(ticker, interval, "fetching spark history");

        let url = format!(
            "{}/v8/finance/spark?interval={}&range={}&symbols={}",
            self.base_url, interval, HISTORY_RANGE, ticker
        );

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("X-API-KEY", &self.api_key)
            .send()
            .await
            .map_err(|e| Error::MarketData(format!("spark request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::MarketData(format!(
                "spark returned status {}",
                response.status()
            )));
        }

        let mut body: HashMap<String, SparkSeries> = response
            .json()
            .await
            .map_err(|e| Error::MarketData(format!("failed to decode spark response: {e}")))?;

        // An unknown ticker still gets a 200, just without our symbol key.
        let series = body
            .remove(ticker)
            .ok_or_else(|| Error::MarketData(format!("no spark data for ticker {ticker}")))?;

        Ok(series.close)
    }

    /// Parallel open/close arrays for a ticker over the 1-day range.
    /// Endpoint: GET /v8/finance/chart/{ticker}?interval={interval}&range=1d
    pub async fn chart_candles(&self, ticker: &str, interval: &str) -> Result<CandleSeries> {
        tracing::debug!(ticker, interval, "fetching chart candles");

        let url = format!(
            "{}/v8/finance/chart/{}?interval={}&range={}",
            self.base_url, ticker, interval, HISTORY_RANGE
        );

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("X-API-KEY", &self.api_key)
            .send()
            .await
            .map_err(|e| Error::MarketData(format!("chart request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::MarketData(format!(
                "chart returned status {}",
                response.status()
            )));
        }

        let envelope: ChartEnvelope = response
            .json()
            .await
            .map_err(|e| Error::MarketData(format!("failed to decode chart response: {e}")))?;

        let result = envelope
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| Error::MarketData(format!("no chart data for ticker {ticker}")))?;

        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| Error::MarketData(format!("no quote block for ticker {ticker}")))?;

        Ok(CandleSeries {
            opens: quote.open,
            closes: quote.close,
        })
    }
}
