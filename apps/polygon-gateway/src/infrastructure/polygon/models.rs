//! Polygon Wire Format Types
//!
//! Types for deserializing Polygon REST response bodies. Field names map
//! directly to Polygon's JSON schemas; the single-letter aggregate keys
//! (`o`, `h`, `l`, `c`, `v`, `vw`, `t`, `n`) are renamed to readable
//! Rust names here and nowhere else.
//!
//! # Response Families
//!
//! - Aggregates envelope: `/v2/aggs/ticker/.../range/...` and `/prev`
//! - Grouped daily envelope: `/v2/aggs/grouped/locale/...`
//! - Daily open/close: `/v1/open-close/{ticker}/{date}`
//! - Crypto open/close: `/v1/open-close/crypto/{to}/{from}/{date}`
//!
//! # References
//!
//! - [Aggregates](https://polygon.io/docs/stocks/get_v2_aggs_ticker__stocksticker__range__multiplier___timespan___from___to)
//! - [Daily Open/Close](https://polygon.io/docs/stocks/get_v1_open-close__stocksticker___date)

use serde::{Deserialize, Serialize};

// =============================================================================
// Aggregates
// =============================================================================

/// Envelope for aggregate bar responses (ranged aggregates and previous close).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatesResponse {
    /// Ticker the aggregates were computed for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,

    /// Number of base aggregates queried upstream.
    #[serde(rename = "queryCount", default, skip_serializing_if = "Option::is_none")]
    pub query_count: Option<u64>,

    /// Number of bars in `results`.
    #[serde(rename = "resultsCount")]
    pub results_count: u64,

    /// Whether the bars are adjusted for splits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted: Option<bool>,

    /// The aggregate bars. Absent upstream when nothing matched.
    #[serde(default)]
    pub results: Vec<AggregateBar>,

    /// Envelope status, `OK` on success.
    pub status: String,

    /// Upstream request identifier.
    #[serde(rename = "request_id", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// One OHLCV bar from an aggregates response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateBar {
    /// Open price.
    #[serde(rename = "o")]
    pub open: f64,

    /// High price.
    #[serde(rename = "h")]
    pub high: f64,

    /// Low price.
    #[serde(rename = "l")]
    pub low: f64,

    /// Close price.
    #[serde(rename = "c")]
    pub close: f64,

    /// Trading volume.
    #[serde(rename = "v")]
    pub volume: f64,

    /// Volume-weighted average price. Absent for some asset classes.
    #[serde(rename = "vw", default, skip_serializing_if = "Option::is_none")]
    pub vw_price: Option<f64>,

    /// Start of the bar window, Unix epoch milliseconds.
    #[serde(rename = "t")]
    pub timestamp_ms: i64,

    /// Number of transactions in the window. Absent for some asset classes.
    #[serde(rename = "n", default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<f64>,
}

// =============================================================================
// Grouped Daily
// =============================================================================

/// Envelope for whole-market grouped daily responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedDailyResponse {
    /// Number of base aggregates queried upstream.
    #[serde(rename = "queryCount", default, skip_serializing_if = "Option::is_none")]
    pub query_count: Option<u64>,

    /// Number of bars in `results`.
    #[serde(rename = "resultsCount")]
    pub results_count: u64,

    /// Whether the bars are adjusted for splits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted: Option<bool>,

    /// One daily bar per ticker that traded.
    #[serde(default)]
    pub results: Vec<GroupedDailyBar>,

    /// Envelope status, `OK` on success.
    pub status: String,

    /// Upstream request identifier.
    #[serde(rename = "request_id", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// One per-ticker daily bar from a grouped daily response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedDailyBar {
    /// Ticker this bar belongs to.
    #[serde(rename = "T")]
    pub ticker: String,

    /// Open price.
    #[serde(rename = "o")]
    pub open: f64,

    /// High price.
    #[serde(rename = "h")]
    pub high: f64,

    /// Low price.
    #[serde(rename = "l")]
    pub low: f64,

    /// Close price.
    #[serde(rename = "c")]
    pub close: f64,

    /// Trading volume.
    #[serde(rename = "v")]
    pub volume: f64,

    /// Volume-weighted average price. Absent for some asset classes.
    #[serde(rename = "vw", default, skip_serializing_if = "Option::is_none")]
    pub vw_price: Option<f64>,

    /// Start of the bar window, Unix epoch milliseconds.
    #[serde(rename = "t")]
    pub timestamp_ms: i64,

    /// Number of transactions in the window. Absent for some asset classes.
    #[serde(rename = "n", default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<f64>,
}

// =============================================================================
// Daily Open/Close (stocks and options)
// =============================================================================

/// Response for `/v1/open-close/{ticker}/{date}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyOpenCloseResponse {
    /// Envelope status, `OK` on success.
    pub status: String,

    /// Requested date, `YYYY-MM-DD`.
    pub from: String,

    /// Requested ticker.
    pub symbol: String,

    /// Official open price.
    pub open: f64,

    /// Session high price.
    pub high: f64,

    /// Session low price.
    pub low: f64,

    /// Official close price.
    pub close: f64,

    /// Session trading volume.
    pub volume: f64,

    /// Price of the last after-hours trade. Absent for some tickers.
    #[serde(rename = "afterHours", default, skip_serializing_if = "Option::is_none")]
    pub after_hours: Option<f64>,

    /// Price of the first pre-market trade. Absent for some tickers.
    #[serde(rename = "preMarket", default, skip_serializing_if = "Option::is_none")]
    pub pre_market: Option<f64>,
}

// =============================================================================
// Crypto Open/Close
// =============================================================================

/// Response for `/v1/open-close/crypto/{to}/{from}/{date}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoOpenCloseResponse {
    /// Requested pair symbol, e.g. `BTC-USD`.
    pub symbol: String,

    /// Whether trade timestamps are UTC.
    #[serde(rename = "isUTC", default)]
    pub is_utc: bool,

    /// Requested date, `YYYY-MM-DD`.
    pub day: String,

    /// Open price for the day.
    pub open: f64,

    /// Close price for the day.
    pub close: f64,

    /// Trades at the open.
    #[serde(rename = "openTrades", default)]
    pub open_trades: Vec<CryptoTrade>,

    /// Trades at the close.
    #[serde(rename = "closingTrades", default)]
    pub closing_trades: Vec<CryptoTrade>,
}

/// One crypto trade from an open/close response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoTrade {
    /// Exchange identifier.
    #[serde(rename = "x")]
    pub exchange: i64,

    /// Trade price.
    #[serde(rename = "p")]
    pub price: f64,

    /// Trade size.
    #[serde(rename = "s")]
    pub size: f64,

    /// Condition codes.
    #[serde(rename = "c", default)]
    pub conditions: Vec<i32>,

    /// Trade timestamp, Unix epoch milliseconds.
    #[serde(rename = "t")]
    pub timestamp_ms: i64,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_aggregates_envelope() {
        let body = json!({
            "ticker": "AAPL",
            "queryCount": 2,
            "resultsCount": 2,
            "adjusted": true,
            "results": [
                {"o": 130.28, "h": 130.9, "l": 124.17, "c": 125.07,
                 "v": 112117471.0, "vw": 126.6, "t": 1672722000000i64, "n": 1021065.0},
                {"o": 126.89, "h": 128.66, "l": 125.08, "c": 126.36,
                 "v": 89100633.0, "vw": 126.78, "t": 1672808400000i64, "n": 770042.0}
            ],
            "status": "OK",
            "request_id": "abc123",
            "count": 2
        });

        let resp: AggregatesResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.ticker.as_deref(), Some("AAPL"));
        assert_eq!(resp.results_count, 2);
        assert_eq!(resp.results.len(), 2);
        assert!((resp.results[0].close - 125.07).abs() < f64::EPSILON);
        assert_eq!(resp.results[0].timestamp_ms, 1_672_722_000_000);
    }

    #[test]
    fn decodes_bar_without_optional_fields() {
        let body = json!({"o": 1.1, "h": 1.2, "l": 1.0, "c": 1.15, "v": 300.0, "t": 1672722000000i64});
        let bar: AggregateBar = serde_json::from_value(body).unwrap();
        assert!(bar.vw_price.is_none());
        assert!(bar.transactions.is_none());
    }

    #[test]
    fn decodes_grouped_daily_bar_with_ticker() {
        let body = json!({
            "T": "TSLA", "o": 190.0, "h": 196.2, "l": 188.8, "c": 194.7,
            "v": 120000000.0, "vw": 193.1, "t": 1673298000000i64, "n": 900000.0
        });
        let bar: GroupedDailyBar = serde_json::from_value(body).unwrap();
        assert_eq!(bar.ticker, "TSLA");
    }

    #[test]
    fn decodes_daily_open_close() {
        let body = json!({
            "status": "OK",
            "from": "2023-01-09",
            "symbol": "AAPL",
            "open": 130.465,
            "high": 133.41,
            "low": 129.89,
            "close": 130.15,
            "volume": 70790813.0,
            "afterHours": 129.85,
            "preMarket": 129.6
        });
        let resp: DailyOpenCloseResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.symbol, "AAPL");
        assert_eq!(resp.after_hours, Some(129.85));
    }

    #[test]
    fn decodes_crypto_open_close() {
        let body = json!({
            "symbol": "BTC-USD",
            "isUTC": true,
            "day": "2023-01-09",
            "open": 17178.0,
            "close": 17192.9,
            "openTrades": [
                {"x": 1, "p": 17178.0, "s": 0.0207, "c": [2], "t": 1673222400092i64}
            ],
            "closingTrades": [
                {"x": 23, "p": 17192.9, "s": 0.1, "c": [1], "t": 1673308799881i64}
            ]
        });
        let resp: CryptoOpenCloseResponse = serde_json::from_value(body).unwrap();
        assert!(resp.is_utc);
        assert_eq!(resp.open_trades.len(), 1);
        assert_eq!(resp.closing_trades[0].exchange, 23);
        assert_eq!(resp.open_trades[0].conditions, vec![2]);
    }
}
