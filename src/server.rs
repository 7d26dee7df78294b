use std::sync::Arc;

use axum::body::Bytes;
use axum::http::Method;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{any, get};
use axum::{extract::State, Router};
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::indicators::{calculate_rsi, last_red_close};
use crate::models::{Signal, TradeRequest, TradeSummary};
use crate::state::AppState;

/// Shares bought per triggered order.
// TODO: size positions from account equity instead of a fixed share count
const ORDER_QUANTITY: i64 = 1;

const RSI_SHORT_LENGTH: usize = 14;
const RSI_LONG_LENGTH: usize = 40;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", any(dispatch))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Single entry point, dispatched on method: GET echoes the brokerage
/// account, every other method runs the trade path.
async fn dispatch(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Result<Response> {
    let account = state.broker.get_account().await?;

    if method == Method::GET {
        tracing::info!(account = %account.account_number, "account status request");
        return Ok(Json(account).into_response());
    }

    let request: TradeRequest = serde_json::from_slice(&body)
        .map_err(|e| Error::BadRequest(format!("invalid trade request body: {e}")))?;

    if request.ticker.trim().is_empty() {
        return Err(Error::BadRequest("ticker must not be empty".to_string()));
    }

    let summary = run_trade(&state, &request).await?;
    Ok(Json(summary).into_response())
}

async fn run_trade(state: &AppState, request: &TradeRequest) -> Result<TradeSummary> {
    tracing::info!(
        ticker = %request.ticker,
        interval = %request.interval,
        "trade request received"
    );

    let closes = state
        .market
        .spark_closes(&request.ticker, &request.interval)
        .await?;

    let rsi_14 = calculate_rsi(&closes, RSI_SHORT_LENGTH)?;
    let rsi_40 = calculate_rsi(&closes, RSI_LONG_LENGTH)?;
    tracing::info!(rsi_14, rsi_40, samples = closes.len(), "computed RSI");

    let signal = if state.config.rsi_gate_enabled {
        state.thresholds.evaluate(rsi_14, rsi_40)
    } else {
        // Threshold gate pending sign-off; every non-GET request trades.
        Signal::Buy
    };

    let (order, last_red) = match signal {
        Signal::Buy => {
            let order = state
                .broker
                .place_market_buy(&request.ticker, Decimal::from(ORDER_QUANTITY))
                .await?;
            tracing::info!(
                order_id = %order.id,
                ticker = %request.ticker,
                qty = %order.qty,
                "market buy order sent"
            );

            // Anchor for a future stop loss, set just below the last red
            // close. The order is already placed, so a failed scan only
            // costs us the anchor, not the trade.
            let last_red = scan_last_red(state, request).await;

            (Some(order), last_red)
        }
        Signal::Hold => {
            tracing::info!("entry thresholds not met, holding");
            (None, None)
        }
    };

    Ok(TradeSummary {
        ticker: request.ticker.clone(),
        interval: request.interval.clone(),
        rsi_14,
        rsi_40,
        signal,
        order,
        last_red_close: last_red,
    })
}

async fn scan_last_red(state: &AppState, request: &TradeRequest) -> Option<f64> {
    let series = match state
        .market
        .chart_candles(&request.ticker, &request.interval)
        .await
    {
        Ok(series) => series,
        Err(e) => {
            tracing::warn!("chart fetch failed after order placement: {e}");
            return None;
        }
    };

    match last_red_close(&series) {
        Ok(value) => {
            tracing::info!(last_red_close = value, "last red candle close");
            Some(value)
        }
        Err(e) => {
            tracing::warn!("red candle scan failed: {e}");
            None
        }
    }
}
