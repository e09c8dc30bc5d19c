//! Polygon REST Client Core
//!
//! A thin HTTP wrapper over Polygon's REST API. Each endpoint method
//! performs exactly one GET: build the documented URL, attach the API
//! key, parse the JSON body, and inspect the response envelope. There is
//! no retry, no backoff, and no pagination traversal; callers receive
//! one page per call.
//!
//! The endpoint methods themselves live in the per-section modules
//! (`stocks`, `options`, `forex`, `crypto`), mirroring how Polygon
//! organizes its documentation. This module holds the shared request
//! plumbing and the `MarketDataApi` implementation that delegates to
//! them.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::application::ports::MarketDataApi;
use crate::domain::{AggregateWindow, CurrencyPair, MarketDate, OptionContract, SortOrder, Ticker};
use crate::infrastructure::config::ApiKey;

use super::error::PolygonError;
use super::models::{
    AggregatesResponse, CryptoOpenCloseResponse, DailyOpenCloseResponse, GroupedDailyResponse,
};

/// Substring of Polygon's rate limit error text, stable across endpoints.
const RATE_LIMIT_MARKER: &str = "exceeded the maximum requests per minute";

/// HTTP client for Polygon's free-tier REST endpoints.
#[derive(Debug, Clone)]
pub struct PolygonClient {
    http: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl PolygonClient {
    /// Create a client against the given base URL.
    ///
    /// The base URL is configurable so tests can point the client at a
    /// local mock server.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::Init` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(
        base_url: impl Into<String>,
        api_key: ApiKey,
        timeout: Duration,
    ) -> Result<Self, PolygonError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PolygonError::Init(e.to_string()))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Perform one GET and return the parsed, envelope-checked JSON body.
    ///
    /// The `path` is logged and embedded in errors; the API key travels
    /// only in the query string and never appears in either.
    pub(super) async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, PolygonError> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(endpoint = path, "requesting Polygon endpoint");

        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&[("apiKey", self.api_key.reveal())])
            .send()
            .await
            .map_err(|e| PolygonError::Transport {
                endpoint: path.to_string(),
                message: e.to_string(),
            })?;

        let http_status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PolygonError::Transport {
                endpoint: path.to_string(),
                message: e.to_string(),
            })?;

        let value: Value = serde_json::from_str(&body).map_err(|_| {
            if http_status.is_success() {
                PolygonError::Decode {
                    endpoint: path.to_string(),
                }
            } else {
                PolygonError::Http {
                    status: http_status.as_u16(),
                    endpoint: path.to_string(),
                }
            }
        })?;

        // The envelope usually carries a better message than the bare
        // HTTP status, so it is checked first.
        check_envelope(&value, path)?;

        if !http_status.is_success() {
            return Err(PolygonError::Http {
                status: http_status.as_u16(),
                endpoint: path.to_string(),
            });
        }

        Ok(value)
    }

    /// Deserialize an envelope-checked body into its typed model.
    pub(super) fn decode<T: DeserializeOwned>(
        value: Value,
        endpoint: &str,
    ) -> Result<T, PolygonError> {
        serde_json::from_value(value).map_err(|e| {
            tracing::warn!(endpoint, error = %e, "Polygon response did not match expected shape");
            PolygonError::Decode {
                endpoint: endpoint.to_string(),
            }
        })
    }
}

/// Query parameters shared by every ranged aggregates endpoint.
pub(super) fn aggregates_query(
    adjusted: bool,
    sort: SortOrder,
    limit: u32,
) -> Vec<(&'static str, String)> {
    vec![
        ("adjusted", adjusted.to_string()),
        ("sort", sort.as_str().to_string()),
        ("limit", limit.to_string()),
    ]
}

/// Reject bodies whose envelope reports a non-OK status.
///
/// Bodies without a `status` field (crypto open/close) pass through.
fn check_envelope(value: &Value, endpoint: &str) -> Result<(), PolygonError> {
    let Some(status) = value.get("status").and_then(Value::as_str) else {
        return Ok(());
    };

    if status == "OK" {
        return Ok(());
    }

    let message = value
        .get("error")
        .or_else(|| value.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("no detail provided")
        .to_string();

    if message.contains(RATE_LIMIT_MARKER) {
        return Err(PolygonError::RateLimited { message });
    }

    if status == "NOT_FOUND" {
        return Err(PolygonError::NotFound {
            message: format!("data not found for endpoint ({endpoint}): {message}"),
        });
    }

    Err(PolygonError::Api {
        status: status.to_string(),
        message,
        endpoint: endpoint.to_string(),
    })
}

/// Reject aggregate responses that matched no data.
///
/// Polygon reports an empty window as a successful response with
/// `resultsCount: 0`; surfacing it as an error keeps "no data" visible
/// at the GraphQL field instead of silently returning an empty list.
pub(super) fn ensure_results(
    results_count: u64,
    message: impl FnOnce() -> String,
) -> Result<(), PolygonError> {
    if results_count == 0 {
        return Err(PolygonError::NotFound { message: message() });
    }
    Ok(())
}

// =============================================================================
// Port implementation
// =============================================================================

#[async_trait]
impl MarketDataApi for PolygonClient {
    async fn stock_aggregates(
        &self,
        ticker: Ticker,
        window: AggregateWindow,
        adjusted: bool,
        sort: SortOrder,
    ) -> Result<AggregatesResponse, PolygonError> {
        Self::stock_aggregates(self, ticker, window, adjusted, sort).await
    }

    async fn stock_daily_open_close(
        &self,
        ticker: Ticker,
        date: MarketDate,
        adjusted: bool,
    ) -> Result<DailyOpenCloseResponse, PolygonError> {
        Self::stock_daily_open_close(self, ticker, date, adjusted).await
    }

    async fn stock_grouped_daily(
        &self,
        date: MarketDate,
        adjusted: bool,
    ) -> Result<GroupedDailyResponse, PolygonError> {
        Self::stock_grouped_daily(self, date, adjusted).await
    }

    async fn stock_previous_close(
        &self,
        ticker: Ticker,
        adjusted: bool,
    ) -> Result<AggregatesResponse, PolygonError> {
        Self::stock_previous_close(self, ticker, adjusted).await
    }

    async fn option_aggregates(
        &self,
        contract: OptionContract,
        window: AggregateWindow,
        adjusted: bool,
        sort: SortOrder,
    ) -> Result<AggregatesResponse, PolygonError> {
        Self::option_aggregates(self, contract, window, adjusted, sort).await
    }

    async fn option_daily_open_close(
        &self,
        contract: OptionContract,
        date: MarketDate,
        adjusted: bool,
    ) -> Result<DailyOpenCloseResponse, PolygonError> {
        Self::option_daily_open_close(self, contract, date, adjusted).await
    }

    async fn option_previous_close(
        &self,
        contract: OptionContract,
        adjusted: bool,
    ) -> Result<AggregatesResponse, PolygonError> {
        Self::option_previous_close(self, contract, adjusted).await
    }

    async fn forex_aggregates(
        &self,
        pair: CurrencyPair,
        window: AggregateWindow,
        adjusted: bool,
        sort: SortOrder,
    ) -> Result<AggregatesResponse, PolygonError> {
        Self::forex_aggregates(self, pair, window, adjusted, sort).await
    }

    async fn forex_grouped_daily(
        &self,
        date: MarketDate,
        adjusted: bool,
    ) -> Result<GroupedDailyResponse, PolygonError> {
        Self::forex_grouped_daily(self, date, adjusted).await
    }

    async fn forex_previous_close(
        &self,
        pair: CurrencyPair,
        adjusted: bool,
    ) -> Result<AggregatesResponse, PolygonError> {
        Self::forex_previous_close(self, pair, adjusted).await
    }

    async fn crypto_aggregates(
        &self,
        pair: CurrencyPair,
        window: AggregateWindow,
        adjusted: bool,
        sort: SortOrder,
    ) -> Result<AggregatesResponse, PolygonError> {
        Self::crypto_aggregates(self, pair, window, adjusted, sort).await
    }

    async fn crypto_daily_open_close(
        &self,
        pair: CurrencyPair,
        date: MarketDate,
        adjusted: bool,
    ) -> Result<CryptoOpenCloseResponse, PolygonError> {
        Self::crypto_daily_open_close(self, pair, date, adjusted).await
    }

    async fn crypto_grouped_daily(
        &self,
        date: MarketDate,
        adjusted: bool,
    ) -> Result<GroupedDailyResponse, PolygonError> {
        Self::crypto_grouped_daily(self, date, adjusted).await
    }

    async fn crypto_previous_close(
        &self,
        pair: CurrencyPair,
        adjusted: bool,
    ) -> Result<AggregatesResponse, PolygonError> {
        Self::crypto_previous_close(self, pair, adjusted).await
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_passes_ok_status() {
        let body = json!({"status": "OK", "resultsCount": 1});
        assert!(check_envelope(&body, "/v2/test").is_ok());
    }

    #[test]
    fn envelope_passes_missing_status() {
        let body = json!({"symbol": "BTC-USD", "open": 1.0});
        assert!(check_envelope(&body, "/v1/test").is_ok());
    }

    #[test]
    fn envelope_rejects_error_status_with_upstream_text() {
        let body = json!({
            "status": "ERROR",
            "error": "Could not parse the time parameter: 'to'. Use YYYY-MM-DD or Unix MS Timestamps"
        });
        let err = check_envelope(&body, "/v2/test").unwrap_err();
        match err {
            PolygonError::Api {
                status, message, ..
            } => {
                assert_eq!(status, "ERROR");
                assert!(message.contains("Could not parse the time parameter"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn envelope_maps_rate_limit_text() {
        let body = json!({
            "status": "ERROR",
            "error": "You've exceeded the maximum requests per minute, please wait or upgrade your subscription to continue."
        });
        let err = check_envelope(&body, "/v2/test").unwrap_err();
        assert!(matches!(err, PolygonError::RateLimited { .. }));
    }

    #[test]
    fn envelope_maps_not_found() {
        let body = json!({"status": "NOT_FOUND", "message": "Data not found."});
        let err = check_envelope(&body, "/v1/open-close/AAPL/2023-01-01").unwrap_err();
        match err {
            PolygonError::NotFound { message } => {
                assert!(message.contains("/v1/open-close/AAPL/2023-01-01"));
                assert!(message.contains("Data not found."));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn envelope_uses_message_field_when_error_absent() {
        let body = json!({"status": "NOT_AUTHORIZED", "message": "upgrade your plan"});
        let err = check_envelope(&body, "/v2/test").unwrap_err();
        match err {
            PolygonError::Api {
                status, message, ..
            } => {
                assert_eq!(status, "NOT_AUTHORIZED");
                assert_eq!(message, "upgrade your plan");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn ensure_results_rejects_empty() {
        let err = ensure_results(0, || "data not found for X:BTCUSD".to_string()).unwrap_err();
        assert!(matches!(err, PolygonError::NotFound { .. }));
        assert!(ensure_results(3, String::new).is_ok());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = PolygonClient::new(
            "https://api.polygon.io/",
            ApiKey::new("test".to_string()),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(client.base_url, "https://api.polygon.io");
    }
}
