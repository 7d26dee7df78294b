use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Unified error type for the trade trigger.
///
/// Every outbound failure is converted into one of these variants and
/// propagated up to the handler boundary, where it becomes a structured
/// HTTP error response. Nothing past startup terminates the process.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("market data error: {0}")]
    MarketData(String),

    #[error("brokerage error: {0}")]
    Brokerage(String),

    #[error("insufficient history: need at least {needed} samples, got {got}")]
    InsufficientHistory { needed: usize, got: usize },

    #[error("candle open/close length mismatch: {opens} opens vs {closes} closes")]
    CandleMismatch { opens: usize, closes: usize },

    #[error("chart returned no candles")]
    EmptyCandles,

    #[error("bad request: {0}")]
    BadRequest(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MarketData(_) | Self::Brokerage(_) => StatusCode::BAD_GATEWAY,
            Self::InsufficientHistory { .. } | Self::CandleMismatch { .. } | Self::EmptyCandles => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collaborator_errors_map_to_bad_gateway() {
        let response = Error::MarketData("spark returned status 500".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response = Error::Brokerage("order rejected".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_data_shape_errors_map_to_unprocessable() {
        let response = Error::InsufficientHistory { needed: 40, got: 15 }.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = Error::CandleMismatch { opens: 3, closes: 2 }.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = Error::BadRequest("invalid body".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
