use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Paper trading endpoint; switch to api.alpaca.markets for live money.
const ALPACA_API_BASE: &str = "https://paper-api.alpaca.markets";

/// Client for the Alpaca brokerage API
#[derive(Clone)]
pub struct AlpacaClient {
    client: Client,
    api_key: String,
    api_secret: String,
    base_url: String,
}

// ============== Types ==============

/// Brokerage account snapshot, echoed back on GET requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub account_number: String,
    pub status: String,
    pub currency: String,
    pub cash: Decimal,
    pub buying_power: Decimal,
    pub portfolio_value: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

#[derive(Debug, Serialize)]
struct PlaceOrderRequest<'a> {
    symbol: &'a str,
    qty: Decimal,
    side: OrderSide,
    #[serde(rename = "type")]
    order_type: &'a str,
    time_in_force: &'a str,
    client_order_id: String,
}

/// Accepted order as returned by the brokerage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub client_order_id: String,
    pub symbol: String,
    pub qty: Decimal,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: String,
    pub time_in_force: String,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
}

// ============== Implementation ==============

impl AlpacaClient {
    pub fn new(client: Client, api_key: String, api_secret: String) -> Self {
        Self {
            client,
            api_key,
            api_secret,
            base_url: ALPACA_API_BASE.to_string(),
        }
    }

    /// Point the client at a different base URL (test servers).
    pub fn with_base_url(
        client: Client,
        api_key: String,
        api_secret: String,
        base_url: String,
    ) -> Self {
        Self {
            client,
            api_key,
            api_secret,
            base_url,
        }
    }

    /// Fetch the trading account.
    /// Endpoint: GET /v2/account
    pub async fn get_account(&self) -> Result<Account> {
        let url = format!("{}/v2/account", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("APCA-API-KEY-ID", &self.api_key)
            .header("APCA-API-SECRET-KEY", &self.api_secret)
            .send()
            .await
            .map_err(|e| Error::Brokerage(format!("account request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Brokerage(format!(
                "account lookup returned status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Brokerage(format!("failed to decode account response: {e}")))
    }

    /// Submit a market buy, good for the day.
    /// Endpoint: POST /v2/orders
    pub async fn place_market_buy(&self, symbol: &str, qty: Decimal) -> Result<Order> {
        let url = format!("{}/v2/orders", self.base_url);

        let body = PlaceOrderRequest {
            symbol,
            qty,
            side: OrderSide::Buy,
            order_type: "market",
            time_in_force: "day",
            client_order_id: Uuid::new_v4().to_string(),
        };

        let response = self
            .client
            .post(&url)
            .header("APCA-API-KEY-ID", &self.api_key)
            .header("APCA-API-SECRET-KEY", &self.api_secret)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Brokerage(format!("order request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::Brokerage(format!(
                "order rejected with status {status}: {detail}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Brokerage(format!("failed to decode order response: {e}")))
    }
}
